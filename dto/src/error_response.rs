use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Body returned by the club service along with a failing status.
#[derive(Debug, Default, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
}
