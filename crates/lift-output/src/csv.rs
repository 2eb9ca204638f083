//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `cab_snapshots.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CabSnapshotRow, OutputResult, TickSummaryRow};

pub const CAB_SNAPSHOTS_FILE: &str = "cab_snapshots.csv";
pub const TICK_SUMMARIES_FILE: &str = "tick_summaries.csv";

/// Writes fleet output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) the two CSV files in it,
    /// and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join(CAB_SNAPSHOTS_FILE))?;
        snapshots.write_record(["tick", "cab_id", "position", "state", "queue"])?;

        let mut summaries = Writer::from_path(dir.join(TICK_SUMMARIES_FILE))?;
        summaries.write_record(["tick", "assigned_calls", "rejected_calls", "idle_cabs", "strategy"])?;

        Ok(Self {
            snapshots,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_cab_snapshots(&mut self, rows: &[CabSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.cab_id.to_string(),
                row.position.to_string(),
                row.state.as_str().to_owned(),
                row.queue_field(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.assigned_calls.to_string(),
            row.rejected_calls.to_string(),
            row.idle_cabs.to_string(),
            row.strategy.to_owned(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
