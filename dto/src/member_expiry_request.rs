use serde::{Deserialize, Serialize};

/// Body of the member expiry request sent to the club service.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub struct MemberExpiryRequest {
    #[serde(rename = "cId")]
    company_id: i32,
}

impl MemberExpiryRequest {
    pub fn new(company_id: i32) -> Self {
        Self { company_id }
    }
}
