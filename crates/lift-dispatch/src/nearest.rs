//! Nearest-cab policy.

use lift_cab::Cab;
use lift_core::FloorRequest;

use crate::strategy::{argmin_by_key, DispatchStrategy};

/// Picks the cab closest to the calling floor.
///
/// Key: `(distance, queue length, cab id)`.  A cab far away with nothing to do
/// loses to a nearby cab with a long queue.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NearestCab;

impl DispatchStrategy for NearestCab {
    fn name(&self) -> &'static str {
        "nearest"
    }

    fn select(&self, cabs: &[Cab], request: &FloorRequest) -> Option<usize> {
        argmin_by_key(cabs, |cab| (cab.distance_to(request.floor), cab.queue_len(), cab.id()))
    }
}
