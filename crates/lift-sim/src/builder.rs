//! Fluent builder for constructing a [`Fleet`].

use lift_cab::Cab;
use lift_core::{CabId, Floor, LiftError, LiftResult};
use lift_dispatch::{DispatchStrategy, NearestCab, StrategyKind};

use crate::{Fleet, FleetConfig, FleetObserver};

/// Fluent builder for [`Fleet`].
///
/// # Required inputs
///
/// - `total_floors` — highest floor (inclusive); cabs serve `0..=total_floors`.
/// - At least one `.cab(id, start_floor)`.
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default          |
/// |------------------------|------------------|
/// | `.strategy(s)`         | [`NearestCab`]   |
/// | `.strategy_kind(k)`    | —                |
/// | `.observer(o)`         | no observers     |
///
/// # Example
///
/// ```rust,ignore
/// let fleet = FleetBuilder::new(5)
///     .cab(CabId(1), 0)
///     .cab(CabId(2), 0)
///     .strategy(LeastBusyCab)
///     .build()?;
/// ```
pub struct FleetBuilder {
    total_floors: Floor,
    cabs:         Vec<(CabId, Floor)>,
    strategy:     Option<Box<dyn DispatchStrategy>>,
    observers:    Vec<Box<dyn FleetObserver>>,
}

impl FleetBuilder {
    pub fn new(total_floors: Floor) -> Self {
        Self {
            total_floors,
            cabs:      Vec::new(),
            strategy:  None,
            observers: Vec::new(),
        }
    }

    /// Start from a configuration file's contents.
    pub fn from_config(config: &FleetConfig) -> Self {
        let mut builder = Self::new(config.total_floors).strategy_kind(config.strategy);
        for spec in &config.cabs {
            builder = builder.cab(spec.id, spec.start_floor);
        }
        builder
    }

    /// Add a cab.  Cabs are stepped in the order they are added.
    pub fn cab(mut self, id: CabId, start_floor: Floor) -> Self {
        self.cabs.push((id, start_floor));
        self
    }

    pub fn strategy<S: DispatchStrategy>(mut self, strategy: S) -> Self {
        self.strategy = Some(Box::new(strategy));
        self
    }

    pub fn strategy_kind(mut self, kind: StrategyKind) -> Self {
        self.strategy = Some(kind.into_strategy());
        self
    }

    /// Register an observer ahead of the first tick.
    pub fn observer<O: FleetObserver + 'static>(mut self, observer: O) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Validate inputs and return a ready-to-step [`Fleet`].
    pub fn build(self) -> LiftResult<Fleet> {
        if self.total_floors < 0 {
            return Err(LiftError::InvalidFloorCount(self.total_floors));
        }

        let cabs = self
            .cabs
            .into_iter()
            .map(|(id, start)| Cab::new(id, start, self.total_floors))
            .collect::<LiftResult<Vec<_>>>()?;

        let strategy = self.strategy.unwrap_or_else(|| Box::new(NearestCab));
        let mut fleet = Fleet::new(self.total_floors, cabs, strategy)?;
        for observer in self.observers {
            fleet.add_boxed_observer(observer);
        }
        Ok(fleet)
    }
}
