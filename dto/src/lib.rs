pub mod cycle_report;
pub mod error_response;
mod lenient;
pub mod member_expiry_data;
pub mod member_expiry_request;
pub mod member_expiry_response;
pub mod tray_entry;
