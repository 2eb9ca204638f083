//! Recoverable conditions reported by the fleet.
//!
//! None of these stop the simulation.  The fleet logs each one at `warn`
//! level and buffers it; front ends drain the buffer with
//! [`Fleet::take_diagnostics`][crate::Fleet::take_diagnostics] and decide
//! whether to show, route, or drop them.

use lift_core::{CabId, Floor, FloorRequest};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A cabin request named a cab the fleet does not have.
    #[error("cab {cab} not found; cabin request for floor {floor} ignored")]
    UnknownCab { cab: CabId, floor: Floor },

    /// A hallway call for a floor outside the building was assigned and
    /// dropped by the chosen cab.
    #[error("hall call {call} is outside the building; dropped by {cab}")]
    CallRejected { call: FloorRequest, cab: CabId },

    /// The active strategy returned no cab, or an index past the end of
    /// the fleet.  The call is dropped.
    #[error("strategy {strategy} selected no cab for hall call {call}; dropped")]
    NoCabSelected { call: FloorRequest, strategy: &'static str },
}
