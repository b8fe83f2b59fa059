use crate::tools::email;
use thiserror::Error;

/// Failure to post one notification.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    MailError(#[from] email::Error),
    #[error("Missing notification recipients")]
    MissingNotificationRecipients,
    #[error(transparent)]
    TemplateError(#[from] tera::Error),
    #[error("The notification tray is unavailable.")]
    TrayUnavailable,
}
