//! The `Fleet` struct and its tick loop.

use std::collections::{HashSet, VecDeque};

use lift_cab::{Cab, DestinationOutcome};
use lift_core::{CabId, CabinRequest, Floor, FloorRequest, LiftError, LiftResult, SimClock, Tick};
use lift_dispatch::{DispatchStrategy, StrategyKind};

use crate::{Diagnostic, FleetObserver, FleetView};

/// Diagnostics kept for [`Fleet::take_diagnostics`]; older ones are dropped
/// first (they have already been logged).
const MAX_BUFFERED_DIAGNOSTICS: usize = 256;

// ── TickReport ────────────────────────────────────────────────────────────────

/// Summary of one [`Fleet::step`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// The tick that was processed.
    pub tick: Tick,

    /// Hallway calls handed to a cab (including ones merged into a cab that
    /// already had the floor queued).
    pub assigned: usize,

    /// Hallway calls dropped: out of range, or no cab selected.
    pub rejected: usize,
}

// ── Fleet ─────────────────────────────────────────────────────────────────────

/// A bank of cabs sharing one building, one hallway-call queue, and one
/// dispatch strategy.
///
/// The cab list is fixed at construction and never empty.  Cabs are only
/// mutated through the fleet's operations.
///
/// Create via [`Fleet::new`] or [`FleetBuilder`][crate::FleetBuilder].
pub struct Fleet {
    total_floors: Floor,
    cabs:         Vec<Cab>,
    strategy:     Box<dyn DispatchStrategy>,
    hall_calls:   VecDeque<FloorRequest>,
    observers:    Vec<Box<dyn FleetObserver>>,
    clock:        SimClock,
    diagnostics:  VecDeque<Diagnostic>,
    last_report:  TickReport,
}

impl Fleet {
    /// Validate `cabs` and assemble a fleet serving floors `0..=total_floors`.
    ///
    /// Fails if `total_floors` is negative, `cabs` is empty, two cabs share
    /// an id, or a cab was built for a different building height.
    pub fn new(
        total_floors: Floor,
        cabs:         Vec<Cab>,
        strategy:     Box<dyn DispatchStrategy>,
    ) -> LiftResult<Self> {
        if total_floors < 0 {
            return Err(LiftError::InvalidFloorCount(total_floors));
        }
        if cabs.is_empty() {
            return Err(LiftError::EmptyFleet);
        }
        let mut seen = HashSet::with_capacity(cabs.len());
        for cab in &cabs {
            if !seen.insert(cab.id()) {
                return Err(LiftError::DuplicateCab(cab.id()));
            }
            if cab.total_floors() != total_floors {
                return Err(LiftError::CeilingMismatch {
                    cab:          cab.id(),
                    cab_floors:   cab.total_floors(),
                    fleet_floors: total_floors,
                });
            }
        }

        log::debug!(
            "fleet: {} cab(s), floors 0..={total_floors}, strategy {}",
            cabs.len(),
            strategy.name(),
        );

        Ok(Self {
            total_floors,
            cabs,
            strategy,
            hall_calls:  VecDeque::new(),
            observers:   Vec::new(),
            clock:       SimClock::new(),
            diagnostics: VecDeque::new(),
            last_report: TickReport::default(),
        })
    }

    // ── Requests ──────────────────────────────────────────────────────────

    /// Queue a hallway call.  It is assigned to a cab on the next [`step`][Self::step].
    pub fn add_floor_request(&mut self, request: FloorRequest) {
        log::trace!("hall call {request} queued");
        self.hall_calls.push_back(request);
    }

    /// Hand a cabin button press straight to the named cab.
    ///
    /// Returns the cab's verdict on the floor.  An unknown cab is reported
    /// as `Err(Diagnostic::UnknownCab)` (also logged and buffered); nothing
    /// changes in that case.
    pub fn add_cabin_request(
        &mut self,
        request: CabinRequest,
    ) -> Result<DestinationOutcome, Diagnostic> {
        match self.cabs.iter_mut().find(|c| c.id() == request.cab) {
            Some(cab) => {
                let outcome = cab.add_destination(request.floor);
                log::trace!("cabin request {request}: {outcome:?}");
                Ok(outcome)
            }
            None => {
                let diagnostic = Diagnostic::UnknownCab { cab: request.cab, floor: request.floor };
                self.report(diagnostic.clone());
                Err(diagnostic)
            }
        }
    }

    /// Replace the active strategy.  Only calls drained after this point are
    /// affected; floors already queued on cabs stay where they are.
    pub fn set_dispatch_strategy<S: DispatchStrategy>(&mut self, strategy: S) {
        self.replace_strategy(Box::new(strategy));
    }

    /// [`set_dispatch_strategy`][Self::set_dispatch_strategy] by name.
    pub fn set_strategy_kind(&mut self, kind: StrategyKind) {
        self.replace_strategy(kind.into_strategy());
    }

    fn replace_strategy(&mut self, strategy: Box<dyn DispatchStrategy>) {
        log::debug!("strategy {} -> {}", self.strategy.name(), strategy.name());
        self.strategy = strategy;
    }

    /// Register an observer.  Observers run in registration order.
    pub fn add_observer<O: FleetObserver + 'static>(&mut self, observer: O) {
        self.add_boxed_observer(Box::new(observer));
    }

    pub(crate) fn add_boxed_observer(&mut self, observer: Box<dyn FleetObserver>) {
        self.observers.push(observer);
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Process one tick: drain hallway calls, advance every cab, notify
    /// observers.
    pub fn step(&mut self) -> TickReport {
        let tick = self.clock.current_tick;
        let mut report = TickReport { tick, ..TickReport::default() };

        // ── Phase 1: drain the hallway queue ──────────────────────────────
        //
        // Each selection sees the assignments made earlier in this drain.
        while let Some(call) = self.hall_calls.pop_front() {
            match self.assign(call) {
                Ok(()) => report.assigned += 1,
                Err(diagnostic) => {
                    report.rejected += 1;
                    self.report(diagnostic);
                }
            }
        }

        // ── Phase 2: advance every cab in construction order ──────────────
        for cab in &mut self.cabs {
            cab.step();
        }

        // ── Phase 3: notify observers in registration order ───────────────
        let view = FleetView {
            tick,
            total_floors: self.total_floors,
            cabs:         &self.cabs,
            pending:      &self.hall_calls,
            strategy:     self.strategy.name(),
            report,
        };
        for observer in &mut self.observers {
            observer.on_tick(&view);
        }

        self.last_report = report;
        self.clock.advance();
        report
    }

    /// Run exactly `n` ticks.
    pub fn run_ticks(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Step until every cab is idle with no pending calls, at most
    /// `max_ticks` times.  Returns the number of ticks taken, or `None` if
    /// the fleet was still busy after `max_ticks`.
    pub fn run_until_idle(&mut self, max_ticks: u64) -> Option<u64> {
        for taken in 0..=max_ticks {
            if self.is_idle() {
                return Some(taken);
            }
            if taken < max_ticks {
                self.step();
            }
        }
        None
    }

    /// Tell every observer the run is over.
    pub fn finish(&mut self) {
        let final_tick = self.clock.current_tick;
        for observer in &mut self.observers {
            observer.on_finish(final_tick);
        }
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// Snapshot of the current state, shaped like what observers receive.
    ///
    /// `tick` and `report` describe the last processed tick.  Before the
    /// first [`step`][Self::step] they read as `Tick(0)` with an empty
    /// report; [`current_tick`][Self::current_tick] still being `Tick(0)`
    /// tells that case apart.
    pub fn view(&self) -> FleetView<'_> {
        FleetView {
            tick:         self.last_report.tick,
            total_floors: self.total_floors,
            cabs:         &self.cabs,
            pending:      &self.hall_calls,
            strategy:     self.strategy.name(),
            report:       self.last_report,
        }
    }

    #[inline]
    pub fn total_floors(&self) -> Floor {
        self.total_floors
    }

    #[inline]
    pub fn cabs(&self) -> &[Cab] {
        &self.cabs
    }

    pub fn cab(&self, id: CabId) -> Option<&Cab> {
        self.cabs.iter().find(|c| c.id() == id)
    }

    /// Hallway calls not yet assigned, oldest first.
    #[inline]
    pub fn pending_calls(&self) -> &VecDeque<FloorRequest> {
        &self.hall_calls
    }

    #[inline]
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// The tick the next [`step`][Self::step] will process.
    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    /// `true` when no call is pending and every cab is idle.
    pub fn is_idle(&self) -> bool {
        self.hall_calls.is_empty() && self.cabs.iter().all(Cab::is_idle)
    }

    /// Remove and return buffered diagnostics, oldest first.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.drain(..).collect()
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Queue `call.floor` on the cab the strategy picks.
    fn assign(&mut self, call: FloorRequest) -> Result<(), Diagnostic> {
        let strategy = self.strategy.name();
        let cab = self
            .strategy
            .select(&self.cabs, &call)
            .and_then(|idx| self.cabs.get_mut(idx))
            .ok_or(Diagnostic::NoCabSelected { call, strategy })?;

        match cab.add_destination(call.floor) {
            DestinationOutcome::Accepted => {
                log::debug!("hall call {call} -> {} ({strategy})", cab.id());
                Ok(())
            }
            DestinationOutcome::Duplicate => {
                log::debug!("hall call {call} -> {} (already queued)", cab.id());
                Ok(())
            }
            DestinationOutcome::OutOfRange => Err(Diagnostic::CallRejected { call, cab: cab.id() }),
        }
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        log::warn!("{diagnostic}");
        if self.diagnostics.len() == MAX_BUFFERED_DIAGNOSTICS {
            self.diagnostics.pop_front();
        }
        self.diagnostics.push_back(diagnostic);
    }
}
