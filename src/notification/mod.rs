pub mod dispatcher;
pub mod email_sink;
pub mod error;
pub mod log_sink;
pub mod sink;
pub mod tray;
