//! Decoding helpers for the club service payloads.
//! A field of an unexpected type is read as best as possible instead of failing
//! the whole response: the member holding it is sorted out later on.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Other(IgnoredAny),
}

/// Read any scalar as a string. Arrays and objects are dropped.
pub(crate) fn string_from_any<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(match value {
        Some(Scalar::Text(text)) => Some(text),
        Some(Scalar::Integer(integer)) => Some(integer.to_string()),
        Some(Scalar::Float(float)) => Some(float.to_string()),
        Some(Scalar::Boolean(boolean)) => Some(boolean.to_string()),
        Some(Scalar::Other(_)) | None => None,
    })
}

/// Read an integer, or a string holding one. Anything else is dropped.
pub(crate) fn i32_from_any<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(match value {
        Some(Scalar::Integer(integer)) => i32::try_from(integer).ok(),
        Some(Scalar::Text(text)) => text.trim().parse::<i32>().ok(),
        _ => None,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Entry<T> {
    Valid(T),
    Invalid(IgnoredAny),
}

/// Read a list whose entries that can't be decoded are replaced by the default value.
pub(crate) fn list_with_defaults<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let entries = Option::<Vec<Entry<T>>>::deserialize(deserializer)?;
    Ok(entries.map(|entries| {
        entries
            .into_iter()
            .map(|entry| match entry {
                Entry::Valid(value) => value,
                Entry::Invalid(_) => T::default(),
            })
            .collect()
    }))
}
