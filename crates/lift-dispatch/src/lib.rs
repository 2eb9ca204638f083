//! `lift-dispatch` — choosing which cab answers a hallway call.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`strategy`]   | `DispatchStrategy` trait                                  |
//! | [`nearest`]    | `NearestCab` — shortest distance first                    |
//! | [`least_busy`] | `LeastBusyCab` — shortest queue first                     |
//! | [`kind`]       | `StrategyKind` — by-name selection for front ends/config  |
//!
//! Both policies are stateless unit structs.  Each minimises a key tuple
//! whose last element is the cab id, so ties always resolve to the same cab.

pub mod kind;
pub mod least_busy;
pub mod nearest;
pub mod strategy;


pub use kind::StrategyKind;
pub use least_busy::LeastBusyCab;
pub use nearest::NearestCab;
pub use strategy::DispatchStrategy;
