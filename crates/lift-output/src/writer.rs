//! The `OutputWriter` trait implemented by backend writers.

use crate::{CabSnapshotRow, OutputResult, TickSummaryRow};

/// Trait implemented by output backends.
///
/// Errors are stored by [`FleetOutputObserver`][crate::FleetOutputObserver]
/// and retrieved with its `take_error`.
pub trait OutputWriter {
    /// Write one row per cab.
    fn write_cab_snapshots(&mut self, rows: &[CabSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
