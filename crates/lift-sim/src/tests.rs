//! Integration tests for lift-sim.

use std::cell::RefCell;
use std::rc::Rc;

use lift_cab::{Cab, DestinationOutcome, MotionState};
use lift_core::{CabId, CabinRequest, FloorRequest, LiftError, Tick};
use lift_dispatch::{DispatchStrategy, LeastBusyCab, NearestCab, StrategyKind};

use crate::{
    Diagnostic, Fleet, FleetBuilder, FleetConfig, FleetObserver, FleetView, RandomTraffic, Shared,
    TickReport,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// E1 at floor 0, E2 at floor 5, floors 0..=5, nearest-cab dispatch.
fn two_cab_fleet() -> Fleet {
    FleetBuilder::new(5)
        .cab(CabId(1), 0)
        .cab(CabId(2), 5)
        .build()
        .unwrap()
}

fn queue(fleet: &Fleet, id: u32) -> Vec<i32> {
    fleet.cab(CabId(id)).unwrap().destinations().iter().copied().collect()
}

fn pos_state(fleet: &Fleet, id: u32) -> (i32, MotionState) {
    let cab = fleet.cab(CabId(id)).unwrap();
    (cab.position(), cab.state())
}

/// Always answers with an index past the end of the fleet.
struct Broken;

impl DispatchStrategy for Broken {
    fn name(&self) -> &'static str {
        "broken"
    }

    fn select(&self, cabs: &[Cab], _request: &FloorRequest) -> Option<usize> {
        Some(cabs.len())
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        let fleet = two_cab_fleet();
        assert_eq!(fleet.cabs().len(), 2);
        assert_eq!(fleet.total_floors(), 5);
        assert_eq!(fleet.strategy_name(), "nearest");
        assert_eq!(fleet.current_tick(), Tick(0));
        assert!(fleet.is_idle());
    }

    #[test]
    fn empty_fleet_is_rejected() {
        let err = FleetBuilder::new(5).build().err().unwrap();
        assert_eq!(err, LiftError::EmptyFleet);
        let err = Fleet::new(5, vec![], Box::new(NearestCab)).err().unwrap();
        assert_eq!(err, LiftError::EmptyFleet);
    }

    #[test]
    fn negative_floor_count_is_rejected() {
        let err = FleetBuilder::new(-1).cab(CabId(1), 0).build().err().unwrap();
        assert_eq!(err, LiftError::InvalidFloorCount(-1));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = FleetBuilder::new(5).cab(CabId(1), 0).cab(CabId(1), 3).build().err().unwrap();
        assert_eq!(err, LiftError::DuplicateCab(CabId(1)));
    }

    #[test]
    fn start_floor_out_of_range_is_rejected() {
        let err = FleetBuilder::new(5).cab(CabId(1), 6).build().err().unwrap();
        assert!(matches!(err, LiftError::StartFloorOutOfRange { floor: 6, .. }));
    }

    #[test]
    fn mismatched_cab_ceiling_is_rejected() {
        let cabs = vec![Cab::new(CabId(1), 0, 5).unwrap(), Cab::new(CabId(2), 0, 4).unwrap()];
        let err = Fleet::new(5, cabs, Box::new(NearestCab)).err().unwrap();
        assert_eq!(
            err,
            LiftError::CeilingMismatch { cab: CabId(2), cab_floors: 4, fleet_floors: 5 }
        );
    }

    #[test]
    fn from_default_lobby_config() {
        let fleet = FleetConfig::default_lobby().build().unwrap();
        assert_eq!(fleet.total_floors(), 5);
        let ids: Vec<_> = fleet.cabs().iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec![CabId(1), CabId(2)]);
        assert_eq!(fleet.strategy_name(), "nearest");
    }
}

// ── Hallway calls ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod hall_calls {
    use super::*;

    #[test]
    fn call_waits_for_next_step() {
        let mut fleet = two_cab_fleet();
        fleet.add_floor_request(FloorRequest::up(3));
        assert_eq!(fleet.pending_calls().len(), 1);
        assert!(queue(&fleet, 1).is_empty() && queue(&fleet, 2).is_empty());
        assert!(!fleet.is_idle());
    }

    #[test]
    fn nearest_cab_answers_and_moves() {
        // E1 is 3 floors away, E2 only 2.
        let mut fleet = two_cab_fleet();
        fleet.add_floor_request(FloorRequest::up(3));

        let report = fleet.step();
        assert_eq!(report.assigned, 1);
        assert_eq!(queue(&fleet, 2), vec![3]);
        assert!(queue(&fleet, 1).is_empty());
        assert_eq!(pos_state(&fleet, 2), (5, MotionState::MovingDown));

        fleet.step();
        assert_eq!(pos_state(&fleet, 2), (4, MotionState::MovingDown));
        fleet.step();
        assert_eq!(pos_state(&fleet, 2), (3, MotionState::DoorsOpen));
        fleet.step();
        assert_eq!(pos_state(&fleet, 2), (3, MotionState::Idle));
        assert!(fleet.is_idle());
    }

    #[test]
    fn queue_is_empty_after_every_step() {
        let mut fleet = two_cab_fleet();
        for floor in [0, 5, 2, 2, 4, 1, 3] {
            fleet.add_floor_request(FloorRequest::down(floor));
        }
        let report = fleet.step();
        assert!(fleet.pending_calls().is_empty());
        assert_eq!(report.assigned, 7);
        assert_eq!(report.rejected, 0);
    }

    #[test]
    fn drain_sees_earlier_assignments() {
        // Both cabs on floor 2: least-busy alternates as queues grow.
        let mut fleet = FleetBuilder::new(5)
            .cab(CabId(1), 2)
            .cab(CabId(2), 2)
            .strategy(LeastBusyCab)
            .build()
            .unwrap();
        for floor in [4, 0, 5, 1] {
            fleet.add_floor_request(FloorRequest::up(floor));
        }
        fleet.step();
        assert_eq!(queue(&fleet, 1), vec![4, 5]);
        assert_eq!(queue(&fleet, 2), vec![0, 1]);
    }

    #[test]
    fn same_floor_twice_is_merged() {
        let mut fleet = two_cab_fleet();
        fleet.add_floor_request(FloorRequest::up(4));
        fleet.add_floor_request(FloorRequest::down(4));
        let report = fleet.step();
        assert_eq!(report.assigned, 2);
        assert_eq!(queue(&fleet, 2), vec![4]);
    }

    #[test]
    fn out_of_range_call_is_reported() {
        let mut fleet = two_cab_fleet();
        fleet.add_floor_request(FloorRequest::up(9));
        let report = fleet.step();
        assert_eq!(report.rejected, 1);
        assert!(fleet.pending_calls().is_empty());
        assert_eq!(
            fleet.take_diagnostics(),
            vec![Diagnostic::CallRejected { call: FloorRequest::up(9), cab: CabId(2) }]
        );
        assert!(fleet.take_diagnostics().is_empty());
    }

    #[test]
    fn bad_selection_drops_call_without_panicking() {
        let mut fleet = FleetBuilder::new(5).cab(CabId(1), 0).strategy(Broken).build().unwrap();
        fleet.add_floor_request(FloorRequest::up(2));
        let report = fleet.step();
        assert_eq!(report.rejected, 1);
        assert!(fleet.pending_calls().is_empty());
        assert!(matches!(
            fleet.take_diagnostics().as_slice(),
            [Diagnostic::NoCabSelected { strategy: "broken", .. }]
        ));
    }
}

// ── Cabin requests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod cabin_requests {
    use super::*;

    #[test]
    fn goes_straight_to_named_cab() {
        let mut fleet = two_cab_fleet();
        // Nearest would pick E2 for floor 4; the cabin request names E1.
        let outcome = fleet.add_cabin_request(CabinRequest::new(CabId(1), 4)).unwrap();
        assert_eq!(outcome, DestinationOutcome::Accepted);
        assert_eq!(queue(&fleet, 1), vec![4]);
        assert!(fleet.pending_calls().is_empty());
    }

    #[test]
    fn rejection_is_passed_through() {
        let mut fleet = two_cab_fleet();
        fleet.add_cabin_request(CabinRequest::new(CabId(1), 2)).unwrap();
        let dup = fleet.add_cabin_request(CabinRequest::new(CabId(1), 2)).unwrap();
        let high = fleet.add_cabin_request(CabinRequest::new(CabId(1), 10)).unwrap();
        assert_eq!(dup, DestinationOutcome::Duplicate);
        assert_eq!(high, DestinationOutcome::OutOfRange);
        assert_eq!(queue(&fleet, 1), vec![2]);
    }

    #[test]
    fn unknown_cab_is_a_diagnostic() {
        let mut fleet = two_cab_fleet();
        let before: Vec<Cab> = fleet.cabs().to_vec();

        let err = fleet.add_cabin_request(CabinRequest::new(CabId(99), 2)).unwrap_err();
        assert_eq!(err, Diagnostic::UnknownCab { cab: CabId(99), floor: 2 });
        assert_eq!(err.to_string(), "cab E99 not found; cabin request for floor 2 ignored");
        assert_eq!(fleet.cabs(), before.as_slice());
        assert_eq!(fleet.take_diagnostics(), vec![err]);

        // Simulation carries on.
        fleet.step();
        assert!(fleet.is_idle());
    }

    #[test]
    fn diagnostic_buffer_drops_oldest_when_full() {
        let mut fleet = two_cab_fleet();
        for floor in 0..257 {
            let _ = fleet.add_cabin_request(CabinRequest::new(CabId(99), floor));
        }
        let kept = fleet.take_diagnostics();
        assert_eq!(kept.len(), 256);
        assert_eq!(kept[0], Diagnostic::UnknownCab { cab: CabId(99), floor: 1 });
        assert_eq!(kept[255], Diagnostic::UnknownCab { cab: CabId(99), floor: 256 });
        assert!(fleet.take_diagnostics().is_empty());
    }
}

// ── Strategy swap ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod strategy_swap {
    use super::*;

    #[test]
    fn swap_affects_only_later_drains() {
        let mut fleet = FleetBuilder::new(10)
            .cab(CabId(1), 4)
            .cab(CabId(2), 10)
            .build()
            .unwrap();
        for f in [0, 1, 2] {
            fleet.add_cabin_request(CabinRequest::new(CabId(1), f)).unwrap();
        }

        fleet.add_floor_request(FloorRequest::up(5));
        fleet.step();
        assert_eq!(queue(&fleet, 1), vec![0, 1, 2, 5]);

        fleet.set_dispatch_strategy(LeastBusyCab);
        assert_eq!(fleet.strategy_name(), "least-busy");
        fleet.add_floor_request(FloorRequest::up(6));
        fleet.step();
        assert_eq!(queue(&fleet, 1), vec![0, 1, 2, 5]);
        assert_eq!(queue(&fleet, 2), vec![6]);
    }

    #[test]
    fn swap_by_kind() {
        let mut fleet = two_cab_fleet();
        fleet.set_strategy_kind(StrategyKind::LeastBusy);
        assert_eq!(fleet.strategy_name(), "least-busy");
        fleet.set_strategy_kind(StrategyKind::Nearest);
        assert_eq!(fleet.strategy_name(), "nearest");
    }
}

// ── Observers ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observers {
    use super::*;

    #[test]
    fn called_once_per_tick_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut fleet = two_cab_fleet();
        for name in ["first", "second"] {
            let log = Rc::clone(&log);
            fleet.add_observer(move |view: &FleetView<'_>| {
                log.borrow_mut().push((view.tick, name));
            });
        }
        fleet.run_ticks(2);
        assert_eq!(
            *log.borrow(),
            vec![
                (Tick(0), "first"),
                (Tick(0), "second"),
                (Tick(1), "first"),
                (Tick(1), "second"),
            ]
        );
    }

    #[test]
    fn sees_post_tick_state() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut fleet = FleetBuilder::new(5)
            .cab(CabId(1), 0)
            .cab(CabId(2), 5)
            .observer(move |view: &FleetView<'_>| {
                let e2 = view.cab(CabId(2)).unwrap();
                sink.borrow_mut().push((
                    e2.position(),
                    e2.state(),
                    view.pending.len(),
                    view.report.assigned,
                ));
            })
            .build()
            .unwrap();
        fleet.add_floor_request(FloorRequest::up(3));
        fleet.run_ticks(2);
        assert_eq!(
            *seen.borrow(),
            vec![(5, MotionState::MovingDown, 0, 1), (4, MotionState::MovingDown, 0, 0)]
        );
    }

    /// Counts ticks and records the finish tick.
    #[derive(Default)]
    struct Counter {
        ticks:    usize,
        finished: Option<Tick>,
    }

    impl FleetObserver for Counter {
        fn on_tick(&mut self, _view: &FleetView<'_>) {
            self.ticks += 1;
        }

        fn on_finish(&mut self, final_tick: Tick) {
            self.finished = Some(final_tick);
        }
    }

    #[test]
    fn shared_observer_stays_reachable() {
        let counter = Shared::new(Counter::default());
        let mut fleet = two_cab_fleet();
        fleet.add_observer(counter.clone());
        fleet.run_ticks(3);
        fleet.finish();
        assert_eq!(counter.with(|c| c.ticks), 3);
        assert_eq!(counter.with(|c| c.finished), Some(Tick(3)));
    }

    #[test]
    fn view_before_first_step_reads_tick_zero() {
        let fleet = two_cab_fleet();
        let view = fleet.view();
        assert_eq!(view.tick, Tick(0));
        assert_eq!(view.report, TickReport::default());
        assert_eq!(fleet.current_tick(), Tick(0));
    }

    #[test]
    fn view_outside_a_tick_matches_fleet() {
        let mut fleet = two_cab_fleet();
        fleet.add_floor_request(FloorRequest::down(1));
        let view = fleet.view();
        assert_eq!(view.pending.len(), 1);
        assert_eq!(view.idle_cabs(), 2);
        assert_eq!(view.strategy, "nearest");
        fleet.step();
        let view = fleet.view();
        assert_eq!(view.tick, Tick(0));
        assert_eq!(view.cabs_in(MotionState::MovingUp), 1);
    }
}

// ── Whole-run properties ──────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use super::*;

    fn soak(kind: StrategyKind, seed: u64) -> Vec<(i32, MotionState, Vec<i32>)> {
        let mut fleet = FleetBuilder::new(7)
            .cab(CabId(1), 0)
            .cab(CabId(2), 3)
            .cab(CabId(3), 7)
            .strategy_kind(kind)
            .build()
            .unwrap();
        let mut traffic = RandomTraffic::new(seed).with_probabilities(0.6, 0.4);
        for _ in 0..300 {
            traffic.inject(&mut fleet);
            fleet.step();
            assert!(fleet.pending_calls().is_empty());
            for cab in fleet.cabs() {
                assert!((0..=7).contains(&cab.position()));
                let mut floors: Vec<i32> = cab.destinations().iter().copied().collect();
                floors.sort_unstable();
                floors.dedup();
                assert_eq!(floors.len(), cab.queue_len(), "duplicate floor queued");
                if cab.queue_len() == 0 {
                    assert_eq!(cab.state(), MotionState::Idle);
                }
            }
        }
        assert!(fleet.take_diagnostics().is_empty());
        fleet
            .cabs()
            .iter()
            .map(|c| (c.position(), c.state(), c.destinations().iter().copied().collect()))
            .collect()
    }

    #[test]
    fn invariants_hold_under_random_traffic() {
        for kind in StrategyKind::ALL {
            for seed in [1, 2, 3] {
                soak(kind, seed);
            }
        }
    }

    #[test]
    fn runs_are_reproducible() {
        for kind in StrategyKind::ALL {
            assert_eq!(soak(kind, 42), soak(kind, 42));
        }
    }

    #[test]
    fn every_call_is_eventually_served() {
        let mut fleet = two_cab_fleet();
        let mut traffic = RandomTraffic::new(9);
        for _ in 0..50 {
            traffic.inject(&mut fleet);
            fleet.step();
        }
        let taken = fleet.run_until_idle(500);
        assert!(taken.is_some(), "fleet still busy");
        assert!(fleet.is_idle());
    }

    #[test]
    fn injected_cabin_press_carries_the_outcome() {
        // One floor, one cab: every cabin press targets floor 0 on E1.
        let mut fleet = FleetBuilder::new(0).cab(CabId(1), 0).build().unwrap();
        let mut traffic = RandomTraffic::new(5).with_probabilities(0.0, 1.0);

        let first = traffic.inject(&mut fleet);
        assert_eq!(first.hall, None);
        assert_eq!(
            first.cabin,
            Some((CabinRequest::new(CabId(1), 0), DestinationOutcome::Accepted))
        );

        let second = traffic.inject(&mut fleet);
        assert_eq!(
            second.cabin,
            Some((CabinRequest::new(CabId(1), 0), DestinationOutcome::Duplicate))
        );
        assert_eq!(queue(&fleet, 1), vec![0]);
    }

    #[test]
    fn hall_and_cabin_streams_are_independent() {
        let hall_calls = |cabin_probability: f64| {
            let mut fleet = FleetBuilder::new(9).cab(CabId(1), 0).build().unwrap();
            let mut traffic = RandomTraffic::new(11).with_probabilities(0.5, cabin_probability);
            (0..40).map(|_| traffic.inject(&mut fleet).hall).collect::<Vec<_>>()
        };
        assert_eq!(hall_calls(0.0), hall_calls(1.0));
    }

    #[test]
    fn run_until_idle_on_idle_fleet_takes_no_ticks() {
        let mut fleet = two_cab_fleet();
        assert_eq!(fleet.run_until_idle(10), Some(0));
        assert_eq!(fleet.current_tick(), Tick(0));
    }

    #[test]
    fn run_until_idle_gives_up() {
        let mut fleet = two_cab_fleet();
        fleet.add_cabin_request(CabinRequest::new(CabId(1), 5)).unwrap();
        assert_eq!(fleet.run_until_idle(3), None);
        assert_eq!(fleet.run_until_idle(10), Some(4));
    }
}
