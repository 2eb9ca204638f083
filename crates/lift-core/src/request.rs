//! Request values handed to the fleet by front ends.

use std::fmt;

use crate::CabId;

/// A floor number.  Signed so that requests below the ground floor can be
/// represented (and rejected) rather than wrapping.
pub type Floor = i32;

/// Direction a hallway caller wants to travel.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CallDirection {
    Up,
    Down,
}

/// A hallway call: someone on `floor` pressed the up or down button.
///
/// Held in the fleet's pending queue until the next tick assigns it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorRequest {
    pub floor:        Floor,
    pub direction_up: bool,
}

impl FloorRequest {
    #[inline]
    pub fn new(floor: Floor, direction_up: bool) -> Self {
        Self { floor, direction_up }
    }

    #[inline]
    pub fn up(floor: Floor) -> Self {
        Self::new(floor, true)
    }

    #[inline]
    pub fn down(floor: Floor) -> Self {
        Self::new(floor, false)
    }

    pub fn direction(&self) -> CallDirection {
        if self.direction_up { CallDirection::Up } else { CallDirection::Down }
    }
}

impl fmt::Display for FloorRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.direction_up { '↑' } else { '↓' };
        write!(f, "{}{}", self.floor, arrow)
    }
}

/// A button pressed inside cab `cab`.  Already bound to a cab, so it never
/// enters the hallway queue.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CabinRequest {
    pub cab:   CabId,
    pub floor: Floor,
}

impl CabinRequest {
    #[inline]
    pub fn new(cab: CabId, floor: Floor) -> Self {
        Self { cab, floor }
    }
}

impl fmt::Display for CabinRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}→{}", self.cab, self.floor)
    }
}
