use crate::notification::error::DispatchError;
use crate::notification::error::DispatchError::TrayUnavailable;
use crate::notification::sink::NotificationSink;
use crate::tools::log_message_and_return;
use chrono::{Local, NaiveDateTime};
use dto::tray_entry::TrayEntry;
use log::debug;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub type SharedTray = Arc<Mutex<NotificationTray>>;

/// In-memory notifications, one per slot.
/// This is what users browse through the API.
#[derive(Debug, Default)]
pub struct NotificationTray {
    entries: HashMap<i32, TrayEntry>,
}

impl NotificationTray {
    pub fn shared() -> SharedTray {
        Arc::new(Mutex::new(Self::default()))
    }

    /// Post a notification, replacing any previous one in the same slot.
    /// A replaced notification is considered unread again.
    pub fn post(&mut self, slot_id: i32, title: &str, message: &str, posted_at: NaiveDateTime) {
        let entry = TrayEntry::new(slot_id, title.to_owned(), message.to_owned(), posted_at);
        if self.entries.insert(slot_id, entry).is_some() {
            debug!("Notification replaced [slot: {slot_id}]");
        }
    }

    /// Every notification, unread first, most recent first.
    pub fn list(&self) -> Vec<TrayEntry> {
        let mut entries = self.entries.values().cloned().collect::<Vec<_>>();
        entries.sort();
        entries
    }

    /// Return whether the slot held a notification.
    pub fn mark_as_read(&mut self, slot_id: i32) -> bool {
        self.entries
            .get_mut(&slot_id)
            .map(TrayEntry::mark_as_read)
            .is_some()
    }

    /// Return whether the slot held a notification.
    pub fn remove(&mut self, slot_id: i32) -> bool {
        self.entries.remove(&slot_id).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[rocket::async_trait]
impl NotificationSink for Mutex<NotificationTray> {
    async fn post(&self, slot_id: i32, title: &str, message: &str) -> Result<(), DispatchError> {
        let mut tray = self.lock().map_err(log_message_and_return(
            "Notification tray is poisoned",
            TrayUnavailable,
        ))?;
        tray.post(slot_id, title, message, Local::now().naive_local());
        Ok(())
    }
}
