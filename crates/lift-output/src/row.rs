//! Plain data row types written by output backends.

use lift_cab::{Cab, MotionState};

/// One cab's state at the end of a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CabSnapshotRow {
    pub tick:     u64,
    pub cab_id:   u32,
    pub position: i32,
    pub state:    MotionState,
    /// Queued floors in service order.
    pub queue:    Vec<i32>,
}

impl CabSnapshotRow {
    pub fn from_cab(tick: u64, cab: &Cab) -> Self {
        Self {
            tick,
            cab_id:   cab.id().0,
            position: cab.position(),
            state:    cab.state(),
            queue:    cab.destinations().iter().copied().collect(),
        }
    }

    /// Queue as `"3;1;4"`; empty string for an empty queue.
    pub fn queue_field(&self) -> String {
        self.queue.iter().map(i32::to_string).collect::<Vec<_>>().join(";")
    }
}

/// Fleet-wide summary of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:           u64,
    pub assigned_calls: u64,
    pub rejected_calls: u64,
    pub idle_cabs:      u64,
    pub strategy:       &'static str,
}
