use crate::tools::email::Error::{
    CantConnectToSmtpServer, CantSendMessage, MissingEmailSenderAddress, MissingEmailSenderName,
    MissingSmtpLogin, MissingSmtpPassword, NoRecipient,
};
use crate::tools::env_args::{
    retrieve_arg_value, retrieve_expected_arg_value, retrieve_parsed_arg_value,
};
use crate::tools::log_message_and_return;
use derive_getters::Getters;
use mail_send::SmtpClientBuilder;
use mail_send::mail_builder::MessageBuilder;
use thiserror::Error;

type Result<T, E = Error> = std::result::Result<T, E>;

const EMAIL_SENDER_NAME_ARG: &str = "--email-sender-name";
const EMAIL_SENDER_ADDRESS_ARG: &str = "--email-sender-address";
const REPLY_TO_ARG: &str = "--reply-to";
const SMTP_SERVER_ARG: &str = "--smtp-server";
const SMTP_PORT_ARG: &str = "--smtp-port";
const SMTP_LOGIN_ARG: &str = "--smtp-login";
const SMTP_PASSWORD_ARG: &str = "--smtp-password";
const DEFAULT_SMTP_SERVER: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 587;

/// Everything needed to reach the SMTP server and sign outgoing emails.
#[derive(Debug, Clone, Getters)]
pub struct EmailConfig {
    smtp_server: String,
    smtp_port: u16,
    smtp_login: String,
    #[getter(skip)]
    smtp_password: String,
    sender_name: String,
    sender_address: String,
    reply_to: String,
}

impl EmailConfig {
    /// Read the email configuration from the args passed to the service.
    pub fn from_args() -> Result<Self> {
        let sender_address =
            retrieve_expected_arg_value(EMAIL_SENDER_ADDRESS_ARG, MissingEmailSenderAddress)?;
        Ok(Self {
            smtp_server: retrieve_arg_value(SMTP_SERVER_ARG)
                .unwrap_or_else(|| DEFAULT_SMTP_SERVER.to_owned()),
            smtp_port: retrieve_parsed_arg_value(SMTP_PORT_ARG, DEFAULT_SMTP_PORT),
            smtp_login: retrieve_expected_arg_value(SMTP_LOGIN_ARG, MissingSmtpLogin)?,
            smtp_password: retrieve_expected_arg_value(SMTP_PASSWORD_ARG, MissingSmtpPassword)?,
            sender_name: retrieve_expected_arg_value(
                EMAIL_SENDER_NAME_ARG,
                MissingEmailSenderName,
            )?,
            reply_to: retrieve_arg_value(REPLY_TO_ARG).unwrap_or_else(|| sender_address.clone()),
            sender_address,
        })
    }
}

pub async fn send_email(
    config: &EmailConfig,
    recipients: &[&str],
    subject: &str,
    html_body: &str,
) -> Result<()> {
    let message = create_message(config, recipients, subject, html_body)?;
    create_smtp_client_and_send_email(config, message).await
}

async fn create_smtp_client_and_send_email(
    config: &EmailConfig,
    message: MessageBuilder<'_>,
) -> Result<()> {
    let smtp_client = SmtpClientBuilder::new(config.smtp_server.as_str(), config.smtp_port)
        .implicit_tls(false)
        .credentials((config.smtp_login.as_str(), config.smtp_password.as_str()))
        .connect()
        .await;

    smtp_client
        .map_err(log_message_and_return(
            "Couldn't connect to SMTP server",
            CantConnectToSmtpServer,
        ))?
        .send(message)
        .await
        .map_err(log_message_and_return(
            "Couldn't send message",
            CantSendMessage,
        ))
}

/// Recipients are put in blind copy.
fn create_message<'a>(
    config: &'a EmailConfig,
    recipients: &'a [&str],
    subject: &'a str,
    html_body: &'a str,
) -> Result<MessageBuilder<'a>> {
    if recipients.is_empty() {
        return Err(NoRecipient);
    }

    Ok(MessageBuilder::new()
        .from((config.sender_name.as_str(), config.sender_address.as_str()))
        .reply_to(config.reply_to.as_str())
        .to(config.reply_to.as_str())
        .bcc(Vec::from(recipients))
        .subject(subject)
        .text_body(html_body)
        .html_body(html_body))
}

#[derive(Debug, PartialEq, Error)]
pub enum Error {
    #[error("Missing email sender name")]
    MissingEmailSenderName,
    #[error("Missing email sender address")]
    MissingEmailSenderAddress,
    #[error("Missing SMTP login")]
    MissingSmtpLogin,
    #[error("Missing SMTP password")]
    MissingSmtpPassword,
    #[error("No recipient to send the email to")]
    NoRecipient,
    #[error("Can't connect to SMTP server")]
    CantConnectToSmtpServer,
    #[error("Can't send message")]
    CantSendMessage,
}
