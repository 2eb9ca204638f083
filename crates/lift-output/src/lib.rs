//! `lift-output` — per-tick fleet recording.
//!
//! | Backend | Files created                                   |
//! |---------|-------------------------------------------------|
//! | CSV     | `cab_snapshots.csv`, `tick_summaries.csv`       |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`FleetOutputObserver`], which implements `lift_sim::FleetObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, FleetOutputObserver};
//! use lift_sim::Shared;
//!
//! let recorder = Shared::new(FleetOutputObserver::new(CsvWriter::new(Path::new("./output"))?));
//! fleet.add_observer(recorder.clone());
//! fleet.run_ticks(100);
//! fleet.finish();
//! if let Some(e) = recorder.with(|r| r.take_error()) {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::FleetOutputObserver;
pub use row::{CabSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
