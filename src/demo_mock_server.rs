use chrono::{Days, Local, NaiveDate};
use dto::member_expiry_request::MemberExpiryRequest;
use std::sync::OnceLock;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub static DEMO_MOCK_SERVER_URI: OnceLock<String> = OnceLock::new();
static DEMO_MOCK_SERVER: OnceLock<MockServer> = OnceLock::new();

pub const DEMO_COMPANY_ID: i32 = 1;
const MEMBER_EXPIRY_PATH: &str = "/api/admin/or/staff/get/member/expiry";

/// Start a fake club service whose members expire around today.
pub async fn init_demo() {
    let mock_server = MockServer::start().await;
    mock_member_expiries(&mock_server).await;
    DEMO_MOCK_SERVER_URI.get_or_init(|| mock_server.uri());
    // Dropping the server would shut it down.
    DEMO_MOCK_SERVER.get_or_init(|| mock_server);
}

async fn mock_member_expiries(mock_server: &MockServer) {
    let today = Local::now().date_naive();
    let body = format!(
        r#"{{
            "success": true,
            "data": [
                {{"id": 1, "name": "Jon Doe", "expiryDate": "{}"}},
                {{"id": 2, "name": "Alice Bob", "expiryDate": "{}"}},
                {{"id": 3, "name": "Jane Roe", "expiryDate": "{}"}},
                {{"id": 4, "name": "Richard Moe", "expiryDate": "{}"}},
                {{"id": 5, "name": "Mary Major", "expiryDate": "unknown"}}
            ]
        }}"#,
        format_date(today.checked_add_days(Days::new(7))),
        format_date(Some(today)),
        format_date(today.checked_sub_days(Days::new(3))),
        format_date(today.checked_add_days(Days::new(30))),
    );

    Mock::given(method("POST"))
        .and(path(MEMBER_EXPIRY_PATH))
        .and(body_json(MemberExpiryRequest::new(DEMO_COMPANY_ID)))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(mock_server)
        .await;
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|date| date.format("%d-%m-%Y").to_string())
        .unwrap_or_default()
}
