//! Selecting a built-in strategy by name.

use std::fmt;
use std::str::FromStr;

use lift_core::LiftError;

use crate::{DispatchStrategy, LeastBusyCab, NearestCab};

/// The built-in dispatch policies, nameable from configuration files and
/// front-end menus.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum StrategyKind {
    #[default]
    Nearest,
    #[cfg_attr(feature = "serde", serde(alias = "least_busy"))]
    LeastBusy,
}

impl StrategyKind {
    /// Every built-in policy, in menu order.
    pub const ALL: [StrategyKind; 2] = [StrategyKind::Nearest, StrategyKind::LeastBusy];

    /// Instantiate the policy.
    pub fn into_strategy(self) -> Box<dyn DispatchStrategy> {
        match self {
            StrategyKind::Nearest   => Box::new(NearestCab),
            StrategyKind::LeastBusy => Box::new(LeastBusyCab),
        }
    }

    /// Same label the policy reports through [`DispatchStrategy::name`].
    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Nearest   => "nearest",
            StrategyKind::LeastBusy => "least-busy",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = LiftError;

    /// Case-insensitive; `-`, `_` and spaces are interchangeable
    /// (`"Least busy"`, `"least_busy"`, `"LEAST-BUSY"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| if c == '_' || c == ' ' { '-' } else { c.to_ascii_lowercase() })
            .collect();
        match normalized.as_str() {
            "nearest"    => Ok(StrategyKind::Nearest),
            "least-busy" => Ok(StrategyKind::LeastBusy),
            _            => Err(LiftError::UnknownStrategy(s.to_owned())),
        }
    }
}
