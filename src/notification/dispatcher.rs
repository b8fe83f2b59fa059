use crate::expiry::evaluator::NotificationBucket;
use crate::expiry::record::MemberExpiryRecord;
use crate::notification::error::DispatchError;
use crate::notification::sink::NotificationSink;
use derive_getters::Getters;
use std::sync::Arc;

/// A notification ready to be posted.
#[derive(Debug, Getters, PartialEq, Eq, Clone)]
pub struct Notification {
    slot_id: i32,
    title: String,
    message: String,
}

impl Notification {
    /// Word the notification for a member in the given bucket.
    /// The member identifier is used as slot, so that a member never gets more than one notification.
    pub fn compose(record: &MemberExpiryRecord, bucket: NotificationBucket) -> Option<Self> {
        let name = record.name();
        let expiry_date = record.expiry_date_text();
        let (title, message) = match bucket {
            NotificationBucket::ExpiringIn7Days => (
                "Membership Expiring Soon",
                format!("{name}'s membership will expire in 7 days ({expiry_date})."),
            ),
            NotificationBucket::ExpiresToday => (
                "Membership Expired Today",
                format!("{name}'s membership has expired today."),
            ),
            NotificationBucket::ExpiredRecently { days_past } => (
                "Membership Expired",
                format!("{name}'s membership expired {days_past} days ago ({expiry_date})."),
            ),
            NotificationBucket::None => return None,
        };

        Some(Self {
            slot_id: *record.id(),
            title: title.to_owned(),
            message,
        })
    }
}

pub struct NotificationDispatcher {
    sink: Arc<dyn NotificationSink>,
}

impl NotificationDispatcher {
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self { sink }
    }

    /// Post the notification matching the bucket, if any.
    /// Failures are not retried: the next cycle will post it again anyway.
    pub async fn dispatch(
        &self,
        record: &MemberExpiryRecord,
        bucket: NotificationBucket,
    ) -> Result<(), DispatchError> {
        let Some(notification) = Notification::compose(record, bucket) else {
            return Ok(());
        };

        self.sink
            .post(
                notification.slot_id,
                &notification.title,
                &notification.message,
            )
            .await
    }
}
