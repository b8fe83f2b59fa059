pub mod config;
pub mod expiry_check;
pub mod scheduler;
