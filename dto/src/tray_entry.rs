use chrono::NaiveDateTime;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A notification as held by the in-memory notification tray.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct TrayEntry {
    slot_id: i32,
    title: String,
    message: String,
    posted_at: NaiveDateTime,
    read: bool,
}

impl TrayEntry {
    pub fn new(slot_id: i32, title: String, message: String, posted_at: NaiveDateTime) -> Self {
        Self {
            slot_id,
            title,
            message,
            posted_at,
            read: false,
        }
    }

    pub fn mark_as_read(&mut self) {
        self.read = true;
    }
}

impl PartialOrd for TrayEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Unread entries come first, then the most recently posted.
impl Ord for TrayEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.read
            .cmp(&other.read)
            .then(other.posted_at.cmp(&self.posted_at))
            .then(self.slot_id.cmp(&other.slot_id))
    }
}
