use crate::notification::error::DispatchError;
use crate::notification::sink::NotificationSink;
use log::info;

/// Writes notifications to the service logs.
#[derive(Debug, Default)]
pub struct LogSink;

#[rocket::async_trait]
impl NotificationSink for LogSink {
    async fn post(&self, slot_id: i32, title: &str, message: &str) -> Result<(), DispatchError> {
        info!("[notification {slot_id}] {title}: {message}");
        Ok(())
    }
}
