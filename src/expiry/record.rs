use crate::expiry::error::ParseError;
use crate::expiry::error::ParseError::{InvalidExpiryDate, MissingExpiryDate, MissingIdentifier};
use chrono::NaiveDate;
use derive_getters::Getters;
use dto::member_expiry_data::MemberExpiryData;

pub const EXPIRY_DATE_FORMAT: &str = "%d-%m-%Y";
const DEFAULT_MEMBER_NAME: &str = "Member";

/// The part of a member that matters to evaluate its expiry.
#[derive(Debug, Getters, PartialEq, Eq, Clone)]
pub struct MemberExpiryRecord {
    id: i32,
    name: String,
    expiry_date: NaiveDate,
    /// Expiry date as sent by the club service, shown to users as is.
    expiry_date_text: String,
}

impl MemberExpiryRecord {
    pub fn new(id: i32, name: String, expiry_date: NaiveDate) -> Self {
        let expiry_date_text = expiry_date.format(EXPIRY_DATE_FORMAT).to_string();
        Self {
            id,
            name,
            expiry_date,
            expiry_date_text,
        }
    }
}

impl TryFrom<&MemberExpiryData> for MemberExpiryRecord {
    type Error = ParseError;

    fn try_from(member: &MemberExpiryData) -> Result<Self, Self::Error> {
        let expiry_date_text = member.expiry_date().clone().ok_or(MissingExpiryDate)?;
        let expiry_date = parse_expiry_date(&expiry_date_text)?;
        let id = member.id().ok_or(MissingIdentifier)?;
        let name = member
            .name()
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MEMBER_NAME.to_owned());

        Ok(Self {
            id,
            name,
            expiry_date,
            expiry_date_text,
        })
    }
}

/// Parse a `DD-MM-YYYY` date, as sent by the club service.
pub fn parse_expiry_date(value: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(value, EXPIRY_DATE_FORMAT)
        .map_err(|_| InvalidExpiryDate(value.to_owned()))
}
