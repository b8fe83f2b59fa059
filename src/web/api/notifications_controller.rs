use crate::notification::tray::SharedTray;
use crate::tools::log_message_and_return;
use dto::tray_entry::TrayEntry;
use log::error;
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::Json;

/// List every notification, unread first.
#[get("/notifications")]
pub fn list_notifications(tray: &State<SharedTray>) -> Result<Json<Vec<TrayEntry>>, Status> {
    let tray = tray.lock().map_err(log_message_and_return(
        "Notification tray is poisoned",
        Status::InternalServerError,
    ))?;
    Ok(Json(tray.list()))
}

#[post("/notifications/<slot_id>/read")]
pub fn mark_notification_as_read(slot_id: i32, tray: &State<SharedTray>) -> Status {
    let Ok(mut tray) = tray.lock() else {
        error!("Notification tray is poisoned");
        return Status::InternalServerError;
    };

    if tray.mark_as_read(slot_id) {
        Status::NoContent
    } else {
        Status::NotFound
    }
}

#[delete("/notifications/<slot_id>")]
pub fn remove_notification(slot_id: i32, tray: &State<SharedTray>) -> Status {
    let Ok(mut tray) = tray.lock() else {
        error!("Notification tray is poisoned");
        return Status::InternalServerError;
    };

    if tray.remove(slot_id) {
        Status::NoContent
    } else {
        Status::NotFound
    }
}

#[delete("/notifications")]
pub fn clear_notifications(tray: &State<SharedTray>) -> Status {
    match tray.lock() {
        Ok(mut tray) => {
            tray.clear();
            Status::NoContent
        }
        Err(error) => {
            error!("Notification tray is poisoned [error: {error}]");
            Status::InternalServerError
        }
    }
}
