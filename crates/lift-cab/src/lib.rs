//! `lift-cab` — one elevator cab and its motion state machine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`state`]   | `MotionState` — `Idle`, `MovingUp`, `MovingDown`, `DoorsOpen` |
//! | [`cab`]     | `Cab` — position, FIFO destination queue, `step()`           |
//!
//! # Movement model
//!
//! A cab serves its destinations strictly in the order they were queued.
//! Each call to [`Cab::step`] advances one unit of simulated time:
//!
//! ```text
//!   Idle ──(queue non-empty)──► MovingUp / MovingDown / DoorsOpen
//!   MovingUp   : floor += 1, DoorsOpen on reaching the head
//!   MovingDown : floor -= 1, DoorsOpen on reaching the head
//!   DoorsOpen  : pop head, then head toward the next one or go Idle
//! ```
//!
//! A cab starting `Idle` at floor `C` with a single destination `F` shows
//! `DoorsOpen` after `|F − C| + 1` steps: the first step only resolves the
//! direction.

pub mod cab;
pub mod state;


pub use cab::{Cab, DestinationOutcome};
pub use state::MotionState;
