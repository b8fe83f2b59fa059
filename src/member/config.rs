use crate::tools::env_args::{retrieve_arg_value, retrieve_parsed_arg_value};
use derive_getters::Getters;
use std::time::Duration;

const API_BASE_URL_ARG: &str = "--api-base-url";
const COMPANY_ID_ARG: &str = "--company-id";
const API_TOKEN_ARG: &str = "--api-token";
const REQUEST_TIMEOUT_ARG: &str = "--request-timeout-seconds";
const MEMBER_CACHE_LIFESPAN_ARG: &str = "--member-cache-lifespan-seconds";
const DEFAULT_API_BASE_URL: &str = "http://localhost:7001";
const DEFAULT_REQUEST_TIMEOUT_IN_SECONDS: u64 = 30;
const DEFAULT_MEMBER_CACHE_LIFESPAN_IN_SECONDS: u64 = 5 * 60;

/// Where and as whom to reach the club service.
#[derive(Debug, Clone, Getters)]
pub struct ClubServiceConfig {
    base_url: String,
    /// `0` means no company has been configured.
    company_id: i32,
    api_token: Option<String>,
    request_timeout: Duration,
    member_cache_lifespan: Duration,
}

impl ClubServiceConfig {
    pub fn new(
        base_url: String,
        company_id: i32,
        api_token: Option<String>,
        request_timeout: Duration,
        member_cache_lifespan: Duration,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            company_id,
            api_token,
            request_timeout,
            member_cache_lifespan,
        }
    }

    pub fn from_args() -> Self {
        Self::new(
            get_api_base_url(),
            retrieve_parsed_arg_value(COMPANY_ID_ARG, get_default_company_id()),
            retrieve_arg_value(API_TOKEN_ARG).filter(|token| !token.is_empty()),
            Duration::from_secs(retrieve_parsed_arg_value(
                REQUEST_TIMEOUT_ARG,
                DEFAULT_REQUEST_TIMEOUT_IN_SECONDS,
            )),
            Duration::from_secs(retrieve_parsed_arg_value(
                MEMBER_CACHE_LIFESPAN_ARG,
                DEFAULT_MEMBER_CACHE_LIFESPAN_IN_SECONDS,
            )),
        )
    }

    pub fn has_company(&self) -> bool {
        self.company_id != 0
    }

    pub fn member_expiry_url(&self) -> String {
        format!("{}/api/admin/or/staff/get/member/expiry", self.base_url)
    }
}

#[cfg(not(feature = "demo"))]
fn get_api_base_url() -> String {
    retrieve_arg_value(API_BASE_URL_ARG).unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned())
}

#[cfg(feature = "demo")]
fn get_api_base_url() -> String {
    crate::demo_mock_server::DEMO_MOCK_SERVER_URI
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned())
}

#[cfg(not(feature = "demo"))]
fn get_default_company_id() -> i32 {
    0
}

#[cfg(feature = "demo")]
fn get_default_company_id() -> i32 {
    crate::demo_mock_server::DEMO_COMPANY_ID
}
