use crate::member::error::FetchError;
use crate::notification::error::DispatchError;
use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

/// Failures preventing the service from starting.
/// Per-record parse errors never reach this level.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}
