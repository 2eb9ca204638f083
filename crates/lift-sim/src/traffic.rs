//! Seeded random traffic for demos and soak tests.

use lift_cab::DestinationOutcome;
use lift_core::{CabId, CabinRequest, FloorRequest, SimRng};

use crate::Fleet;

/// What one [`RandomTraffic::inject`] call added to the fleet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Injected {
    pub hall:  Option<FloorRequest>,

    /// The cabin press and what the cab made of it.  Only
    /// [`Accepted`][DestinationOutcome::Accepted] changed the cab's queue.
    pub cabin: Option<(CabinRequest, DestinationOutcome)>,
}

/// Random hallway calls and cabin presses.
///
/// Floors are drawn uniformly from `0..=total_floors`.  Hall calls on the
/// ground floor always go up and on the top floor always go down.  The same
/// seed against the same fleet history yields the same calls.
///
/// Hallway and cabin traffic draw from separate child streams, so changing
/// one probability does not reshuffle the other kind of call.
pub struct RandomTraffic {
    hall_rng:  SimRng,
    cabin_rng: SimRng,

    /// Chance per `inject` of one hallway call.
    pub hall_call_probability: f64,

    /// Chance per `inject` of one cabin request to a random cab.
    pub cabin_call_probability: f64,
}

impl RandomTraffic {
    pub fn new(seed: u64) -> Self {
        let mut root = SimRng::new(seed);
        Self {
            hall_rng:  root.child(1),
            cabin_rng: root.child(2),
            hall_call_probability:  0.3,
            cabin_call_probability: 0.2,
        }
    }

    pub fn with_probabilities(mut self, hall: f64, cabin: f64) -> Self {
        self.hall_call_probability  = hall;
        self.cabin_call_probability = cabin;
        self
    }

    /// Maybe add one hallway call and one cabin request to `fleet`.
    pub fn inject(&mut self, fleet: &mut Fleet) -> Injected {
        let top = fleet.total_floors();
        let mut injected = Injected::default();

        if self.hall_rng.gen_bool(self.hall_call_probability) {
            let floor = self.hall_rng.gen_range(0..=top);
            let direction_up = if floor == 0 {
                true
            } else if floor == top {
                false
            } else {
                self.hall_rng.gen_bool(0.5)
            };
            let call = FloorRequest::new(floor, direction_up);
            fleet.add_floor_request(call);
            injected.hall = Some(call);
        }

        if self.cabin_rng.gen_bool(self.cabin_call_probability) {
            let ids: Vec<CabId> = fleet.cabs().iter().map(|c| c.id()).collect();
            if let Some(&cab) = self.cabin_rng.choose(&ids) {
                let request = CabinRequest::new(cab, self.cabin_rng.gen_range(0..=top));
                // The cab comes from the fleet itself, so it is always known.
                if let Ok(outcome) = fleet.add_cabin_request(request) {
                    injected.cabin = Some((request, outcome));
                }
            }
        }

        injected
    }
}
