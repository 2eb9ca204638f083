//! Construction-time error type shared by the `lift-*` crates.
//!
//! Nothing inside a tick returns an error: per-cab and per-tick operations
//! are total.  Everything here is detected while building a fleet or
//! parsing configuration.

use thiserror::Error;

use crate::{CabId, Floor};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LiftError {
    #[error("a fleet needs at least one cab")]
    EmptyFleet,

    #[error("floor count must not be negative (got {0})")]
    InvalidFloorCount(Floor),

    #[error("cab {0} appears more than once")]
    DuplicateCab(CabId),

    #[error("cab {cab} starts at floor {floor}, outside 0..={total_floors}")]
    StartFloorOutOfRange {
        cab:          CabId,
        floor:        Floor,
        total_floors: Floor,
    },

    #[error("cab {cab} serves floors up to {cab_floors} but the fleet has {fleet_floors}")]
    CeilingMismatch {
        cab:          CabId,
        cab_floors:   Floor,
        fleet_floors: Floor,
    },

    #[error("unknown dispatch strategy {0:?}")]
    UnknownStrategy(String),
}

/// Shorthand result type for all `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;
