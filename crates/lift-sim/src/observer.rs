//! Per-tick observer callbacks.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use lift_cab::{Cab, MotionState};
use lift_core::{CabId, Floor, FloorRequest, Tick};

use crate::TickReport;

/// Read-only fleet state handed to observers.
///
/// Borrowed straight from the fleet; nothing is copied per tick.
#[derive(Clone, Copy, Debug)]
pub struct FleetView<'a> {
    /// The tick that was just processed.  Also `Tick(0)` in a
    /// [`Fleet::view`][crate::Fleet::view] taken before any step.
    pub tick: Tick,

    /// Highest floor in the building (inclusive).
    pub total_floors: Floor,

    /// Every cab, in construction order.
    pub cabs: &'a [Cab],

    /// Hallway calls awaiting assignment, oldest first.  Always empty right
    /// after a step.
    pub pending: &'a VecDeque<FloorRequest>,

    /// [`name`][lift_dispatch::DispatchStrategy::name] of the active strategy.
    pub strategy: &'static str,

    /// What the last step did.
    pub report: TickReport,
}

impl<'a> FleetView<'a> {
    pub fn cab(&self, id: CabId) -> Option<&'a Cab> {
        self.cabs.iter().find(|c| c.id() == id)
    }

    pub fn idle_cabs(&self) -> usize {
        self.cabs.iter().filter(|c| c.is_idle()).count()
    }

    pub fn cabs_in(&self, state: MotionState) -> usize {
        self.cabs.iter().filter(|c| c.state() == state).count()
    }
}

/// Callback invoked by [`Fleet::step`][crate::Fleet::step] once per tick.
///
/// Any `FnMut(&FleetView)` closure is an observer:
///
/// ```rust,ignore
/// fleet.add_observer(|view: &FleetView<'_>| {
///     for cab in view.cabs {
///         println!("{} @ {} {}", cab.id(), cab.position(), cab.state());
///     }
/// });
/// ```
pub trait FleetObserver {
    /// Called after every cab has advanced for `view.tick`.
    fn on_tick(&mut self, view: &FleetView<'_>);

    /// Called by [`Fleet::finish`][crate::Fleet::finish].  `final_tick` is
    /// the first tick that was *not* processed.
    fn on_finish(&mut self, _final_tick: Tick) {}
}

impl<F> FleetObserver for F
where
    F: FnMut(&FleetView<'_>),
{
    fn on_tick(&mut self, view: &FleetView<'_>) {
        self(view)
    }
}

/// An observer the fleet owns but the caller can still reach.
///
/// The fleet takes observers by value.  Wrap one in `Shared`, register a
/// clone, and keep the other to inspect it later (e.g. to collect a stored
/// write error).
pub struct Shared<O>(Rc<RefCell<O>>);

impl<O> Shared<O> {
    pub fn new(observer: O) -> Self {
        Shared(Rc::new(RefCell::new(observer)))
    }

    /// Run `f` with mutable access to the wrapped observer.
    ///
    /// # Panics
    /// Panics if called from inside the wrapped observer's own callback.
    pub fn with<R>(&self, f: impl FnOnce(&mut O) -> R) -> R {
        f(&mut self.0.borrow_mut())
    }
}

impl<O> Clone for Shared<O> {
    fn clone(&self) -> Self {
        Shared(Rc::clone(&self.0))
    }
}

impl<O: FleetObserver> FleetObserver for Shared<O> {
    fn on_tick(&mut self, view: &FleetView<'_>) {
        self.0.borrow_mut().on_tick(view);
    }

    fn on_finish(&mut self, final_tick: Tick) {
        self.0.borrow_mut().on_finish(final_tick);
    }
}
