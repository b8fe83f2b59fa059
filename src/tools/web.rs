use crate::member::error::FetchError;
use crate::member::error::FetchError::CantCreateClient;
use crate::tools::log_message_and_return;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use std::time::Duration;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Build the HTTP client used to talk to the club service.
/// Every request is JSON and, when a token is known, authenticated with it.
pub fn build_client(api_token: Option<&str>, timeout: Duration) -> Result<Client, FetchError> {
    let headers = build_default_headers(api_token)?;
    reqwest::ClientBuilder::new()
        .default_headers(headers)
        .connect_timeout(timeout)
        .timeout(timeout)
        .build()
        .map_err(log_message_and_return(
            "Can't build HTTP client.",
            CantCreateClient,
        ))
}

fn build_default_headers(api_token: Option<&str>) -> Result<HeaderMap, FetchError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));

    if let Some(token) = api_token.filter(|token| !token.is_empty()) {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(
            log_message_and_return("API token can't be used as a header.", CantCreateClient),
        )?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    Ok(headers)
}
