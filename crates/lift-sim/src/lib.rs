//! `lift-sim` — the fleet orchestrator for the lift simulator.
//!
//! # Tick loop
//!
//! ```text
//! Fleet::step():
//!   ① Drain   — pop every pending hallway call, ask the active
//!               DispatchStrategy for a cab against the *current* cabs,
//!               and queue the floor on that cab immediately.
//!   ② Advance — Cab::step() on every cab, in construction order.
//!   ③ Notify  — every FleetObserver, in registration order, with a
//!               read-only FleetView of the post-tick state.
//! ```
//!
//! Cabin requests skip the hallway queue and the strategy: they land on the
//! named cab as soon as they are added.
//!
//! # Concurrency
//!
//! Everything is single-threaded and synchronous.  A concurrent host should
//! wrap the whole `Fleet` in one lock (or drive it from one task): a drain
//! must see a consistent snapshot of every cab.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::{CabId, FloorRequest};
//! use lift_dispatch::StrategyKind;
//! use lift_sim::FleetBuilder;
//!
//! let mut fleet = FleetBuilder::new(5)
//!     .cab(CabId(1), 0)
//!     .cab(CabId(2), 5)
//!     .strategy_kind(StrategyKind::Nearest)
//!     .observer(|view: &lift_sim::FleetView<'_>| println!("{}", view.tick))
//!     .build()?;
//! fleet.add_floor_request(FloorRequest::up(3));
//! fleet.step();
//! ```

pub mod builder;
pub mod config;
pub mod diagnostic;
pub mod fleet;
pub mod observer;
pub mod traffic;

#[cfg(test)]
mod tests;

pub use builder::FleetBuilder;
pub use config::{CabSpec, FleetConfig};
pub use diagnostic::Diagnostic;
pub use fleet::{Fleet, TickReport};
pub use observer::{FleetObserver, FleetView, Shared};
pub use traffic::{Injected, RandomTraffic};
