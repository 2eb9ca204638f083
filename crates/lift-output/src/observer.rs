//! `FleetOutputObserver<W>` — bridges `FleetObserver` to an `OutputWriter`.

use lift_core::Tick;
use lift_sim::{FleetObserver, FleetView};

use crate::row::{CabSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`FleetObserver`] that writes one snapshot row per cab and one summary
/// row per tick to any [`OutputWriter`].
///
/// Observer callbacks cannot return errors, so the first write error is kept
/// and later ones are dropped.  Collect it with [`take_error`][Self::take_error]
/// (wrap the observer in [`lift_sim::Shared`] to keep a handle).
pub struct FleetOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> FleetOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error, `None` if every write succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> FleetObserver for FleetOutputObserver<W> {
    fn on_tick(&mut self, view: &FleetView<'_>) {
        let tick = view.tick.0;
        let rows: Vec<CabSnapshotRow> = view
            .cabs
            .iter()
            .map(|cab| CabSnapshotRow::from_cab(tick, cab))
            .collect();
        let result = self.writer.write_cab_snapshots(&rows);
        self.store_err(result);

        let summary = TickSummaryRow {
            tick,
            assigned_calls: view.report.assigned as u64,
            rejected_calls: view.report.rejected as u64,
            idle_cabs:      view.idle_cabs() as u64,
            strategy:       view.strategy,
        };
        let result = self.writer.write_tick_summary(&summary);
        self.store_err(result);
    }

    fn on_finish(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
