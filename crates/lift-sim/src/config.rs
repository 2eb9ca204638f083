//! Fleet configuration.
//!
//! Plain data; the application crate loads it (e.g. from JSON with
//! `serde_json`, feature `serde`) and hands it to
//! [`FleetBuilder::from_config`][crate::FleetBuilder::from_config].

use lift_core::{CabId, Floor, LiftResult};
use lift_dispatch::StrategyKind;

use crate::{Fleet, FleetBuilder};

/// One cab's identity and starting floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CabSpec {
    pub id: CabId,

    #[cfg_attr(feature = "serde", serde(default))]
    pub start_floor: Floor,
}

/// Top-level fleet configuration.
///
/// ```json
/// { "total_floors": 5,
///   "cabs": [ { "id": 1 }, { "id": 2, "start_floor": 5 } ],
///   "strategy": "least-busy" }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetConfig {
    /// Highest floor (inclusive).  A six-storey building has `total_floors = 5`.
    pub total_floors: Floor,

    /// Cabs in stepping order.
    pub cabs: Vec<CabSpec>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub strategy: StrategyKind,
}

impl FleetConfig {
    /// Six floors (0..=5), cabs E1 and E2 on the ground floor, nearest-cab
    /// dispatch.
    pub fn default_lobby() -> Self {
        Self {
            total_floors: 5,
            cabs: vec![
                CabSpec { id: CabId(1), start_floor: 0 },
                CabSpec { id: CabId(2), start_floor: 0 },
            ],
            strategy: StrategyKind::Nearest,
        }
    }

    /// Shorthand for `FleetBuilder::from_config(self).build()`.
    pub fn build(&self) -> LiftResult<Fleet> {
        FleetBuilder::from_config(self).build()
    }
}
