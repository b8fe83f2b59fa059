use crate::member::config::ClubServiceConfig;
use crate::member::error::FetchError::{
    BadRequest, Conflict, ConnectionFailed, Forbidden, MalformedResponse, NotFound, ServerError,
    SessionExpired, Timeout, UnexpectedStatus,
};
use crate::member::error::{FetchError, Result};
use crate::tools::log_message_and_return;
use dto::error_response::ErrorResponse;
use dto::member_expiry_data::MemberExpiryData;
use dto::member_expiry_request::MemberExpiryRequest;
use dto::member_expiry_response::MemberExpiryResponse;
use log::{debug, error, warn};
use reqwest::{Client, StatusCode};

/// Retrieve, for the configured company, every member along with its expiry date.
///
/// A response the service flags as unsuccessful is not an error:
/// there is simply nothing to evaluate.
pub async fn retrieve_member_expiries(
    client: &Client,
    config: &ClubServiceConfig,
) -> Result<Vec<MemberExpiryData>> {
    let request = MemberExpiryRequest::new(*config.company_id());
    let response = client
        .post(config.member_expiry_url())
        .json(&request)
        .send()
        .await
        .map_err(map_transport_error)?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let error = map_status_error(status, &body);
        error!("Member expiry request failed [status: {status}, error: {error}]");
        return Err(error);
    }

    let response = response
        .json::<MemberExpiryResponse>()
        .await
        .map_err(log_message_and_return(
            "Can't read member expiry response",
            MalformedResponse,
        ))?;
    debug!("Member expiry response received [success: {:?}]", response.success());

    if !response.is_usable() {
        warn!(
            "Club service returned no member expiry data [message: {:?}]",
            response.message()
        );
        return Ok(vec![]);
    }

    let members = response.into_data().unwrap_or_default();
    debug!("Fetched {} members for expiry check.", members.len());
    Ok(members)
}

fn map_transport_error(error: reqwest::Error) -> FetchError {
    let fetch_error = if error.is_timeout() {
        Timeout
    } else if error.is_decode() {
        MalformedResponse
    } else {
        ConnectionFailed
    };
    error!("Can't reach the club service [error: {fetch_error}]\n{error:#?}");
    fetch_error
}

fn map_status_error(status: StatusCode, body: &str) -> FetchError {
    let backend_message = read_backend_message(body);
    match status {
        StatusCode::BAD_REQUEST => BadRequest(backend_message.unwrap_or("Bad request".to_owned())),
        StatusCode::UNAUTHORIZED => SessionExpired,
        StatusCode::FORBIDDEN => Forbidden,
        StatusCode::NOT_FOUND => NotFound,
        StatusCode::CONFLICT => Conflict(backend_message.unwrap_or("Conflict occurred.".to_owned())),
        StatusCode::INTERNAL_SERVER_ERROR => ServerError,
        _ => UnexpectedStatus {
            status: status.as_u16(),
            message: backend_message.unwrap_or("Something went wrong.".to_owned()),
        },
    }
}

fn read_backend_message(body: &str) -> Option<String> {
    rocket::serde::json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|response| response.message().clone())
        .filter(|message| !message.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::web::build_client;
    use dto::member_expiry_data::tests::get_expected_member;
    use dto::member_expiry_response::tests::RESPONSE_AS_JSON;
    use parameterized::{ide, parameterized};
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    ide!();

    const MEMBER_EXPIRY_PATH: &str = "/api/admin/or/staff/get/member/expiry";
    const COMPANY_ID: i32 = 42;

    async fn mock_response(mock_server: &MockServer, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path(MEMBER_EXPIRY_PATH))
            .and(body_json(MemberExpiryRequest::new(COMPANY_ID)))
            .respond_with(response)
            .mount(mock_server)
            .await;
    }

    fn build_test_client() -> Client {
        build_client(None, Duration::from_secs(5)).unwrap()
    }

    mod retrieve_member_expiries {
        use super::*;

        #[async_test]
        async fn success() {
            let mock_server = MockServer::start().await;
            mock_response(
                &mock_server,
                ResponseTemplate::new(200).set_body_string(RESPONSE_AS_JSON),
            )
            .await;
            let config = ClubServiceConfig::new_test(mock_server.uri(), COMPANY_ID);

            let members = retrieve_member_expiries(&build_test_client(), &config)
                .await
                .unwrap();

            assert_eq!(vec![get_expected_member()], members);
        }

        #[async_test]
        async fn success_with_token() {
            let mock_server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path(MEMBER_EXPIRY_PATH))
                .and(header("Authorization", "Bearer my-token"))
                .respond_with(ResponseTemplate::new(200).set_body_string(RESPONSE_AS_JSON))
                .mount(&mock_server)
                .await;
            let config = ClubServiceConfig::new_test(mock_server.uri(), COMPANY_ID);
            let client = build_client(Some("my-token"), Duration::from_secs(5)).unwrap();

            let members = retrieve_member_expiries(&client, &config).await.unwrap();

            assert_eq!(1, members.len());
        }

        #[async_test]
        async fn empty_when_not_successful() {
            let mock_server = MockServer::start().await;
            mock_response(
                &mock_server,
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"success": false, "error": true, "message": "No member"}"#),
            )
            .await;
            let config = ClubServiceConfig::new_test(mock_server.uri(), COMPANY_ID);

            let members = retrieve_member_expiries(&build_test_client(), &config)
                .await
                .unwrap();

            assert!(members.is_empty());
        }

        #[async_test]
        async fn fail_when_body_is_malformed() {
            let mock_server = MockServer::start().await;
            mock_response(
                &mock_server,
                ResponseTemplate::new(200).set_body_string("<html>Not JSON</html>"),
            )
            .await;
            let config = ClubServiceConfig::new_test(mock_server.uri(), COMPANY_ID);

            let error = retrieve_member_expiries(&build_test_client(), &config)
                .await
                .unwrap_err();

            assert_eq!(MalformedResponse, error);
        }

        #[async_test]
        async fn fail_when_status_is_unauthorized() {
            let mock_server = MockServer::start().await;
            mock_response(&mock_server, ResponseTemplate::new(401)).await;
            let config = ClubServiceConfig::new_test(mock_server.uri(), COMPANY_ID);

            let error = retrieve_member_expiries(&build_test_client(), &config)
                .await
                .unwrap_err();

            assert_eq!(SessionExpired, error);
        }

        #[async_test]
        async fn fail_when_unreachable() {
            let config = ClubServiceConfig::new_test("http://127.0.0.1:1".to_owned(), COMPANY_ID);

            let error = retrieve_member_expiries(&build_test_client(), &config)
                .await
                .unwrap_err();

            assert_eq!(ConnectionFailed, error);
        }

        #[async_test]
        async fn fail_when_too_slow() {
            let mock_server = MockServer::start().await;
            mock_response(
                &mock_server,
                ResponseTemplate::new(200)
                    .set_body_string(RESPONSE_AS_JSON)
                    .set_delay(Duration::from_secs(2)),
            )
            .await;
            let config = ClubServiceConfig::new_test(mock_server.uri(), COMPANY_ID);
            let client = build_client(None, Duration::from_millis(200)).unwrap();

            let error = retrieve_member_expiries(&client, &config).await.unwrap_err();

            assert_eq!(Timeout, error);
        }
    }

    #[parameterized(
        status = {400, 400, 401, 403, 404, 409, 409, 500, 418},
        body = {
            r#"{"message": "Invalid company"}"#,
            "",
            "",
            "",
            "",
            r#"{"message": "Already renewed"}"#,
            "",
            r#"{"message": "Boom"}"#,
            r#"{"message": "I'm a teapot"}"#,
        },
        expected_error = {
            BadRequest("Invalid company".to_owned()),
            BadRequest("Bad request".to_owned()),
            SessionExpired,
            Forbidden,
            NotFound,
            Conflict("Already renewed".to_owned()),
            Conflict("Conflict occurred.".to_owned()),
            ServerError,
            UnexpectedStatus { status: 418, message: "I'm a teapot".to_owned() },
        }
    )]
    fn should_map_status_error(status: u16, body: &str, expected_error: FetchError) {
        let status = StatusCode::from_u16(status).unwrap();
        assert_eq!(expected_error, map_status_error(status, body));
    }
}
