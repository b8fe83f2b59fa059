use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Counters describing one expiry evaluation cycle.
#[derive(Debug, Default, Serialize, Deserialize, Getters, PartialEq, Eq, Clone, Copy)]
pub struct CycleReport {
    /// Members returned by the club service.
    fetched: usize,
    /// Members whose record couldn't be evaluated.
    skipped: usize,
    /// Notifications successfully posted.
    dispatched: usize,
    /// Notifications that the sink refused.
    failed: usize,
}

impl CycleReport {
    pub fn new(fetched: usize, skipped: usize, dispatched: usize, failed: usize) -> Self {
        Self {
            fetched,
            skipped,
            dispatched,
            failed,
        }
    }

    pub fn record_dispatched(&mut self) {
        self.dispatched += 1;
    }

    pub fn record_failed(&mut self) {
        self.failed += 1;
    }
}
