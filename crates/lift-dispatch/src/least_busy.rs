//! Least-busy policy.

use lift_cab::Cab;
use lift_core::FloorRequest;

use crate::strategy::{argmin_by_key, DispatchStrategy};

/// Picks the cab with the fewest queued destinations.
///
/// Key: `(queue length, distance, cab id)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LeastBusyCab;

impl DispatchStrategy for LeastBusyCab {
    fn name(&self) -> &'static str {
        "least-busy"
    }

    fn select(&self, cabs: &[Cab], request: &FloorRequest) -> Option<usize> {
        argmin_by_key(cabs, |cab| (cab.queue_len(), cab.distance_to(request.floor), cab.id()))
    }
}
