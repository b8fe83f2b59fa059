use crate::notification::error::DispatchError;
use log::warn;
use std::sync::Arc;

/// Somewhere notifications are shown to users.
///
/// Posting to a slot that already holds a notification replaces it.
#[rocket::async_trait]
pub trait NotificationSink: Send + Sync {
    async fn post(&self, slot_id: i32, title: &str, message: &str) -> Result<(), DispatchError>;
}

/// Post every notification to each of the inner sinks.
/// All sinks are tried, even after one of them failed; the first failure is then returned.
pub struct FanOutSink {
    sinks: Vec<Arc<dyn NotificationSink>>,
}

impl FanOutSink {
    pub fn new(sinks: Vec<Arc<dyn NotificationSink>>) -> Self {
        Self { sinks }
    }
}

#[rocket::async_trait]
impl NotificationSink for FanOutSink {
    async fn post(&self, slot_id: i32, title: &str, message: &str) -> Result<(), DispatchError> {
        let mut first_error = None;
        for sink in &self.sinks {
            if let Err(error) = sink.post(slot_id, title, message).await {
                warn!("A notification sink failed [slot: {slot_id}, error: {error}]");
                first_error.get_or_insert(error);
            }
        }

        match first_error {
            None => Ok(()),
            Some(error) => Err(error),
        }
    }
}
