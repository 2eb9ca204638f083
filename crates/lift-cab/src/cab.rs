//! The `Cab` struct and its single transition function.

use std::collections::VecDeque;

use lift_core::{CabId, Floor, LiftError, LiftResult};

use crate::MotionState;

/// Result of offering a floor to a cab's destination queue.
///
/// Rejections never change the cab; callers that do not care may ignore the
/// value.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DestinationOutcome {
    /// Appended to the tail of the queue.
    Accepted,
    /// Already queued; the queue is unchanged.
    Duplicate,
    /// Outside `0..=total_floors`; the queue is unchanged.
    OutOfRange,
}

impl DestinationOutcome {
    #[inline]
    pub fn is_accepted(self) -> bool {
        self == DestinationOutcome::Accepted
    }
}

/// One elevator cab.
///
/// Invariants upheld by every method:
/// - `0 <= position <= total_floors`;
/// - `destinations` holds no floor twice;
/// - an empty queue implies `Idle` once the current step resolves.
///
/// Fields are private: the fleet mutates cabs only through
/// [`add_destination`][Self::add_destination] and [`step`][Self::step].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cab {
    id:           CabId,
    position:     Floor,
    total_floors: Floor,
    state:        MotionState,
    destinations: VecDeque<Floor>,
}

impl Cab {
    /// Create an idle cab at `start_floor` serving floors `0..=total_floors`.
    pub fn new(id: CabId, start_floor: Floor, total_floors: Floor) -> LiftResult<Self> {
        if total_floors < 0 {
            return Err(LiftError::InvalidFloorCount(total_floors));
        }
        if !(0..=total_floors).contains(&start_floor) {
            return Err(LiftError::StartFloorOutOfRange {
                cab: id,
                floor: start_floor,
                total_floors,
            });
        }
        Ok(Self {
            id,
            position: start_floor,
            total_floors,
            state: MotionState::Idle,
            destinations: VecDeque::new(),
        })
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> CabId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> Floor {
        self.position
    }

    #[inline]
    pub fn state(&self) -> MotionState {
        self.state
    }

    /// Highest floor this cab may visit (inclusive).
    #[inline]
    pub fn total_floors(&self) -> Floor {
        self.total_floors
    }

    /// Queued destinations in service order.
    #[inline]
    pub fn destinations(&self) -> &VecDeque<Floor> {
        &self.destinations
    }

    #[inline]
    pub fn queue_len(&self) -> usize {
        self.destinations.len()
    }

    /// Floors between the cab's current position and `floor`.
    #[inline]
    pub fn distance_to(&self, floor: Floor) -> u32 {
        self.position.abs_diff(floor)
    }

    /// `true` when the cab is `Idle` with nothing queued.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.state == MotionState::Idle && self.destinations.is_empty()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Queue `floor` behind every destination already present.
    ///
    /// Out-of-range and already-queued floors are dropped.
    pub fn add_destination(&mut self, floor: Floor) -> DestinationOutcome {
        if !(0..=self.total_floors).contains(&floor) {
            log::trace!("{}: floor {floor} outside 0..={}", self.id, self.total_floors);
            return DestinationOutcome::OutOfRange;
        }
        if self.destinations.contains(&floor) {
            return DestinationOutcome::Duplicate;
        }
        self.destinations.push_back(floor);
        DestinationOutcome::Accepted
    }

    /// Advance exactly one unit of simulated time.
    pub fn step(&mut self) {
        let before = self.state;
        self.state = match self.state {
            MotionState::Idle => self.heading(),

            MotionState::MovingUp => {
                self.position = (self.position + 1).min(self.total_floors);
                self.arrive_or(MotionState::MovingUp)
            }

            MotionState::MovingDown => {
                self.position = (self.position - 1).max(0);
                self.arrive_or(MotionState::MovingDown)
            }

            MotionState::DoorsOpen => {
                self.destinations.pop_front();
                self.heading()
            }
        };
        if before != self.state {
            log::trace!("{} @{}: {before} -> {}", self.id, self.position, self.state);
        }
    }

    // ── Transition helpers ────────────────────────────────────────────────

    /// Direction toward the queue head, or `Idle` if there is none.
    fn heading(&self) -> MotionState {
        match self.destinations.front() {
            Some(&head) => MotionState::toward(self.position, head),
            None        => MotionState::Idle,
        }
    }

    /// `DoorsOpen` when the cab has just reached the queue head, else `moving`.
    ///
    /// An empty queue while moving cannot arise through the public API; it
    /// resolves to `Idle` so the transition stays total.
    fn arrive_or(&self, moving: MotionState) -> MotionState {
        match self.destinations.front() {
            Some(&head) if head == self.position => MotionState::DoorsOpen,
            Some(_)                              => moving,
            None                                 => MotionState::Idle,
        }
    }
}
