use crate::job::scheduler::{JobOutcome, Scheduler};
use dto::cycle_report::CycleReport;
use log::error;
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::Json;
use std::sync::Arc;

/// Run a membership expiry check now, without waiting for the next scheduled one.
#[post("/expiry/check")]
pub async fn check_expiries(scheduler: &State<Arc<Scheduler>>) -> Result<Json<CycleReport>, Status> {
    match scheduler.run_once().await {
        JobOutcome::Success(report) => Ok(Json(report)),
        JobOutcome::Retry(error) => {
            error!("Manual membership expiry check failed [error: {error}]");
            Err(Status::ServiceUnavailable)
        }
        JobOutcome::AlreadyRunning => Err(Status::Conflict),
    }
}

#[cfg(test)]
mod tests {
    use crate::job::expiry_check::tests::{COMPANY_ID, MEMBERS_AS_JSON, mock_members};
    use crate::web::api::server::tests::build_test_client;
    use dto::cycle_report::CycleReport;
    use rocket::http::Status;
    use wiremock::{MockServer, ResponseTemplate};

    #[async_test]
    async fn should_check_expiries() {
        let mock_server = MockServer::start().await;
        mock_members(
            &mock_server,
            ResponseTemplate::new(200).set_body_string(MEMBERS_AS_JSON),
        )
        .await;
        let (client, tray) = build_test_client(mock_server.uri(), COMPANY_ID).await;

        let response = client.post("/api/expiry/check").dispatch().await;

        assert_eq!(Status::Ok, response.status());
        let report = response.into_json::<CycleReport>().await.unwrap();
        assert_eq!(6, *report.fetched());
        assert_eq!(2, *report.skipped());
        // Dispatched notifications depend on today's date, but always end up in the tray.
        assert_eq!(*report.dispatched(), tray.lock().unwrap().len());
    }

    #[async_test]
    async fn should_fail_when_club_service_fails() {
        let mock_server = MockServer::start().await;
        mock_members(&mock_server, ResponseTemplate::new(500)).await;
        let (client, tray) = build_test_client(mock_server.uri(), COMPANY_ID).await;

        let response = client.post("/api/expiry/check").dispatch().await;

        assert_eq!(Status::ServiceUnavailable, response.status());
        assert!(tray.lock().unwrap().is_empty());
    }
}
