pub mod expiry_controller;
pub mod members_controller;
pub mod notifications_controller;
pub mod server;
