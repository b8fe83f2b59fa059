use crate::lenient::{i32_from_any, string_from_any};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A member as returned by the club service member expiry endpoint.
/// The service may omit any field, hence every field being optional.
/// A field of an unexpected type is read leniently, or dropped.
#[derive(Debug, Default, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberExpiryData {
    #[serde(deserialize_with = "string_from_any")]
    address: Option<String>,
    #[serde(deserialize_with = "string_from_any")]
    birth_day: Option<String>,
    #[serde(deserialize_with = "i32_from_any")]
    club_id: Option<i32>,
    #[serde(deserialize_with = "string_from_any")]
    club_name: Option<String>,
    #[serde(deserialize_with = "string_from_any")]
    contact_no: Option<String>,
    #[serde(deserialize_with = "string_from_any")]
    email_id: Option<String>,
    #[serde(deserialize_with = "string_from_any")]
    expiry_date: Option<String>,
    #[serde(deserialize_with = "string_from_any")]
    gender: Option<String>,
    #[serde(deserialize_with = "string_from_any")]
    hire_day: Option<String>,
    #[serde(deserialize_with = "i32_from_any")]
    id: Option<i32>,
    #[serde(deserialize_with = "string_from_any")]
    image: Option<String>,
    #[serde(deserialize_with = "string_from_any")]
    member_id: Option<String>,
    #[serde(deserialize_with = "string_from_any")]
    name: Option<String>,
    #[serde(deserialize_with = "string_from_any")]
    nationality: Option<String>,
    #[serde(skip_serializing, deserialize_with = "string_from_any")]
    password: Option<String>,
    #[serde(deserialize_with = "string_from_any")]
    start_date: Option<String>,
    #[serde(deserialize_with = "string_from_any")]
    status: Option<String>,
    #[serde(deserialize_with = "string_from_any")]
    user_name: Option<String>,
}

impl MemberExpiryData {
    /// Build a member with only the fields needed to evaluate its expiry.
    pub fn new(id: Option<i32>, name: Option<String>, expiry_date: Option<String>) -> Self {
        Self {
            id,
            name,
            expiry_date,
            ..Default::default()
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub const MEMBER_ID: i32 = 12;
    pub const MEMBER_NAME: &str = "Jon Doe";
    pub const MEMBER_EXPIRY_DATE: &str = "17-06-2024";

    pub fn get_expected_member() -> MemberExpiryData {
        MemberExpiryData {
            address: Some("12 Main Street".to_owned()),
            club_id: Some(3),
            club_name: Some("Downtown".to_owned()),
            expiry_date: Some(MEMBER_EXPIRY_DATE.to_owned()),
            id: Some(MEMBER_ID),
            member_id: Some("M-0012".to_owned()),
            name: Some(MEMBER_NAME.to_owned()),
            status: Some("Active".to_owned()),
            ..Default::default()
        }
    }

    impl MemberExpiryData {
        pub fn new_test(id: i32, expiry_date: &str) -> Self {
            MemberExpiryData::new(
                Some(id),
                Some(format!("Member {id}")),
                Some(expiry_date.to_owned()),
            )
        }
    }

    #[test]
    fn should_deserialize_partial_member() {
        let member: MemberExpiryData =
            serde_json::from_str(r#"{"id": 4, "expiryDate": "01-06-2024"}"#).unwrap();
        assert_eq!(Some(4), *member.id());
        assert_eq!(Some("01-06-2024".to_owned()), *member.expiry_date());
        assert_eq!(None, *member.name());
    }

    #[test]
    fn should_read_mistyped_fields_leniently() {
        let member: MemberExpiryData = serde_json::from_str(
            r#"{"id": "3", "name": 12, "expiryDate": 20240610, "clubId": "downtown", "status": {"active": true}}"#,
        )
        .unwrap();
        assert_eq!(Some(3), *member.id());
        assert_eq!(Some("12".to_owned()), *member.name());
        assert_eq!(Some("20240610".to_owned()), *member.expiry_date());
        assert_eq!(None, *member.club_id());
        assert_eq!(None, *member.status());
    }

    #[test]
    fn should_read_null_fields_as_missing() {
        let member: MemberExpiryData =
            serde_json::from_str(r#"{"id": null, "expiryDate": null}"#).unwrap();
        assert_eq!(MemberExpiryData::default(), member);
    }

    #[test]
    fn should_not_serialize_password() {
        let member: MemberExpiryData =
            serde_json::from_str(r#"{"id": 4, "password": "secret"}"#).unwrap();
        let json = serde_json::to_string(&member).unwrap();
        assert!(!json.contains("secret"));
    }
}
