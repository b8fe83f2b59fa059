use crate::job::scheduler::Scheduler;
use crate::notification::tray::SharedTray;
use crate::web::api::{expiry_controller, members_controller, notifications_controller};
use rocket::{Build, Rocket};
use std::sync::Arc;

/// Register the states and routes of the API.
pub fn mount_api(
    rocket_build: Rocket<Build>,
    tray: SharedTray,
    scheduler: Arc<Scheduler>,
) -> Rocket<Build> {
    rocket_build.manage(tray).manage(scheduler).mount(
        "/api/",
        routes![
            notifications_controller::list_notifications,
            notifications_controller::mark_notification_as_read,
            notifications_controller::remove_notification,
            notifications_controller::clear_notifications,
            expiry_controller::check_expiries,
            members_controller::get_member_expiries,
            members_controller::invalidate_member_cache,
        ],
    )
}
