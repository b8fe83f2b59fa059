use thiserror::Error;

pub type Result<T, E = FetchError> = std::result::Result<T, E>;

/// Failure to obtain the member expiry list as a whole.
#[derive(Debug, Error, PartialEq, Clone)]
pub enum FetchError {
    #[error("Client couldn't be created.")]
    CantCreateClient,
    #[error("{0}")]
    BadRequest(String),
    #[error("Session expired. Please login again.")]
    SessionExpired,
    #[error("You are not allowed to perform this action.")]
    Forbidden,
    #[error("Requested data not found.")]
    NotFound,
    #[error("{0}")]
    Conflict(String),
    #[error("Server error. Try again later.")]
    ServerError,
    #[error("Unexpected status {status} [message: {message}]")]
    UnexpectedStatus { status: u16, message: String },
    #[error("Request timeout. Please try again.")]
    Timeout,
    #[error("The connection to the club service failed.")]
    ConnectionFailed,
    #[error("The club service response can't be read.")]
    MalformedResponse,
}
