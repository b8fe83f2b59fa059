use crate::notification::error::DispatchError;
use crate::notification::error::DispatchError::MissingNotificationRecipients;
use crate::notification::sink::NotificationSink;
#[cfg(not(test))]
use crate::tools::email::send_email;
use crate::tools::email::EmailConfig;
use crate::tools::env_args::retrieve_arg_value;
use crate::tools::split_list;
use log::debug;
use tera::{Context, Tera};

const NOTIFICATION_RECIPIENTS_ARG: &str = "--notification-recipients";
const TEMPLATE_NAME: &str = "expiry-notification.html.tera";
const TEMPLATE: &str = include_str!("../../templates/notification/expiry-notification.html.tera");

/// Emails every notification to the club staff.
pub struct EmailSink {
    config: EmailConfig,
    recipients: Vec<String>,
    tera: Tera,
}

impl EmailSink {
    pub fn new(config: EmailConfig, recipients: Vec<String>) -> Result<Self, DispatchError> {
        if recipients.is_empty() {
            return Err(MissingNotificationRecipients);
        }
        Ok(Self {
            config,
            recipients,
            tera: create_tera_renderer()?,
        })
    }

    /// Build the sink from args.
    /// No `--notification-recipients` arg means no email is wanted, hence `Ok(None)`.
    pub fn from_args() -> Result<Option<Self>, DispatchError> {
        let Some(recipients) = retrieve_arg_value(NOTIFICATION_RECIPIENTS_ARG) else {
            return Ok(None);
        };
        let config = EmailConfig::from_args()?;
        Self::new(config, split_list(&recipients)).map(Some)
    }

    fn create_email_body(&self, title: &str, message: &str) -> Result<String, DispatchError> {
        let mut context = Context::new();
        context.insert("title", title);
        context.insert("message", message);
        Ok(self.tera.render(TEMPLATE_NAME, &context)?)
    }
}

#[rocket::async_trait]
impl NotificationSink for EmailSink {
    async fn post(&self, slot_id: i32, title: &str, message: &str) -> Result<(), DispatchError> {
        let body = self.create_email_body(title, message)?;
        let recipients = self
            .recipients
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>();
        #[cfg(not(test))] // We don't want to send emails in test mode.
        send_email(&self.config, &recipients, title, &body).await?;
        #[cfg(test)]
        println!(
            "Mocking email sending [sender: {}, recipients: {:?}, slot: {slot_id}, body: {body}]",
            self.config.sender_address(),
            recipients
        );
        debug!("Notification emailed [slot: {slot_id}]");
        Ok(())
    }
}

fn create_tera_renderer() -> Result<Tera, DispatchError> {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;
    Ok(tera)
}
