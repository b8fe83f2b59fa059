use crate::lenient::list_with_defaults;
use crate::member_expiry_data::MemberExpiryData;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct MemberExpiryResponse {
    /// Entries that aren't even objects are kept as empty members.
    #[serde(default, deserialize_with = "list_with_defaults")]
    data: Option<Vec<MemberExpiryData>>,
    #[serde(default)]
    error: Option<bool>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    success: Option<bool>,
}

impl MemberExpiryResponse {
    pub fn new(
        data: Option<Vec<MemberExpiryData>>,
        error: Option<bool>,
        message: Option<String>,
        success: Option<bool>,
    ) -> Self {
        Self {
            data,
            error,
            message,
            success,
        }
    }

    /// Only an explicitly successful response carrying data is usable.
    pub fn is_usable(&self) -> bool {
        self.success == Some(true) && self.data.is_some()
    }

    pub fn into_data(self) -> Option<Vec<MemberExpiryData>> {
        self.data
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;
    use crate::member_expiry_data::tests::get_expected_member;

    pub const RESPONSE_AS_JSON: &str = r#"{
        "data": [{
            "address": "12 Main Street",
            "clubId": 3,
            "clubName": "Downtown",
            "expiryDate": "17-06-2024",
            "id": 12,
            "memberId": "M-0012",
            "name": "Jon Doe",
            "status": "Active"
        }],
        "error": false,
        "message": "Members fetched",
        "success": true
    }"#;

    pub fn get_expected_response() -> MemberExpiryResponse {
        MemberExpiryResponse::new(
            Some(vec![get_expected_member()]),
            Some(false),
            Some("Members fetched".to_owned()),
            Some(true),
        )
    }

    #[test]
    fn should_deserialize_response() {
        let response: MemberExpiryResponse = serde_json::from_str(RESPONSE_AS_JSON).unwrap();
        assert_eq!(get_expected_response(), response);
        assert!(response.is_usable());
    }

    #[test]
    fn should_keep_valid_members_along_with_mistyped_ones() {
        let response: MemberExpiryResponse = serde_json::from_str(
            r#"{"success": true, "data": [
                {"id": 1, "name": "Good", "expiryDate": "17-06-2024"},
                {"id": 2, "name": "Bad", "expiryDate": 20240610},
                42,
                null
            ]}"#,
        )
        .unwrap();

        let members = response.into_data().unwrap();
        assert_eq!(4, members.len());
        assert_eq!(Some("17-06-2024".to_owned()), *members[0].expiry_date());
        assert_eq!(Some("20240610".to_owned()), *members[1].expiry_date());
        assert_eq!(MemberExpiryData::default(), members[2]);
        assert_eq!(MemberExpiryData::default(), members[3]);
    }

    #[test]
    fn should_not_be_usable_without_data() {
        let response: MemberExpiryResponse =
            serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(!response.is_usable());
    }

    #[test]
    fn should_not_be_usable_when_not_successful() {
        let response: MemberExpiryResponse =
            serde_json::from_str(r#"{"success": false, "data": []}"#).unwrap();
        assert!(!response.is_usable());
    }
}
