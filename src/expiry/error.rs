use thiserror::Error;

/// Reasons for a single member record not to be evaluated.
#[derive(Debug, Error, PartialEq, Clone)]
pub enum ParseError {
    #[error("The member has no identifier.")]
    MissingIdentifier,
    #[error("The member has no expiry date.")]
    MissingExpiryDate,
    #[error("The expiry date is not a DD-MM-YYYY date [value: {0}]")]
    InvalidExpiryDate(String),
}
