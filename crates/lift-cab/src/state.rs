//! Per-cab motion state.

use std::fmt;

use lift_core::Floor;

/// What a cab is doing this tick.
///
/// All four states share the same cab data; only the transition taken by
/// [`Cab::step`][crate::Cab::step] differs.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MotionState {
    /// Waiting for work.  The only state a cab with an empty queue rests in.
    #[default]
    Idle,
    MovingUp,
    MovingDown,
    /// Doors stay open for exactly one tick at the served floor.
    DoorsOpen,
}

impl MotionState {
    /// The state a cab at `position` takes to head for `target`.
    #[inline]
    pub fn toward(position: Floor, target: Floor) -> Self {
        match target.cmp(&position) {
            std::cmp::Ordering::Greater => MotionState::MovingUp,
            std::cmp::Ordering::Less    => MotionState::MovingDown,
            std::cmp::Ordering::Equal   => MotionState::DoorsOpen,
        }
    }

    #[inline]
    pub fn is_moving(self) -> bool {
        matches!(self, MotionState::MovingUp | MotionState::MovingDown)
    }

    /// Stable lower-case label, used by output writers.
    pub fn as_str(self) -> &'static str {
        match self {
            MotionState::Idle       => "idle",
            MotionState::MovingUp   => "moving_up",
            MotionState::MovingDown => "moving_down",
            MotionState::DoorsOpen  => "doors_open",
        }
    }
}

impl fmt::Display for MotionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
