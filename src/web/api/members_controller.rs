use crate::job::scheduler::Scheduler;
use dto::member_expiry_data::MemberExpiryData;
use log::error;
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::Json;
use std::sync::Arc;

/// Members of the configured company along with their expiry date.
/// Served from the member cache when it is fresh enough.
#[get("/members/expiry")]
pub async fn get_member_expiries(
    scheduler: &State<Arc<Scheduler>>,
) -> Result<Json<Vec<MemberExpiryData>>, Status> {
    let members = scheduler
        .job()
        .cached_member_expiries()
        .await
        .map_err(|error| {
            error!("Can't retrieve member expiries [error: {error}]");
            Status::BadGateway
        })?;

    Ok(Json(members))
}

#[delete("/members/expiry/cache")]
pub fn invalidate_member_cache(scheduler: &State<Arc<Scheduler>>) -> Status {
    scheduler.job().invalidate_cache();
    Status::NoContent
}

#[cfg(test)]
mod tests {
    use crate::job::expiry_check::tests::{COMPANY_ID, MEMBER_EXPIRY_PATH, MEMBERS_AS_JSON};
    use crate::web::api::server::tests::build_test_client;
    use dto::member_expiry_data::MemberExpiryData;
    use rocket::http::Status;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[async_test]
    async fn should_get_member_expiries_through_cache() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MEMBER_EXPIRY_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string(MEMBERS_AS_JSON))
            .expect(2)
            .mount(&mock_server)
            .await;
        let (client, _) = build_test_client(mock_server.uri(), COMPANY_ID).await;

        let response = client.get("/api/members/expiry").dispatch().await;
        assert_eq!(Status::Ok, response.status());
        let members = response
            .into_json::<Vec<MemberExpiryData>>()
            .await
            .unwrap();
        assert_eq!(6, members.len());

        let response = client.get("/api/members/expiry").dispatch().await;
        assert_eq!(Status::Ok, response.status());

        let response = client.delete("/api/members/expiry/cache").dispatch().await;
        assert_eq!(Status::NoContent, response.status());

        let response = client.get("/api/members/expiry").dispatch().await;
        assert_eq!(Status::Ok, response.status());
    }

    #[async_test]
    async fn should_get_no_member_without_company() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string(MEMBERS_AS_JSON))
            .expect(0)
            .mount(&mock_server)
            .await;
        let (client, _) = build_test_client(mock_server.uri(), 0).await;

        let response = client.get("/api/members/expiry").dispatch().await;

        assert_eq!(Status::Ok, response.status());
        let members = response
            .into_json::<Vec<MemberExpiryData>>()
            .await
            .unwrap();
        assert!(members.is_empty());
    }

    #[async_test]
    async fn should_fail_when_club_service_fails() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MEMBER_EXPIRY_PATH))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;
        let (client, _) = build_test_client(mock_server.uri(), COMPANY_ID).await;

        let response = client.get("/api/members/expiry").dispatch().await;

        assert_eq!(Status::BadGateway, response.status());
    }
}
