//! Fact records and identifiers.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Length of the random suffix appended to generated identifiers.
const ID_RANDOM_SUFFIX_LEN: usize = 5;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Unique identifier for a saved fact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactId(String);

impl FactId {
    /// Creates a fact ID from an existing string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh identifier.
    ///
    /// The ID is the current Unix time in milliseconds rendered in base 36,
    /// followed by five random base-36 characters. Uniqueness is
    /// probabilistic; no collision check is made.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn generate() -> Self {
        let millis = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let mut id = to_base36(u128::from(millis));

        let mut entropy = uuid::Uuid::new_v4().as_u128();
        for _ in 0..ID_RANDOM_SUFFIX_LEN {
            id.push(char::from(BASE36_DIGITS[(entropy % 36) as usize]));
            entropy /= 36;
        }

        Self(id)
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for FactId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for FactId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A saved fact.
///
/// Serialized as `{"id", "fact", "length", "createdAt"}`; this is the layout
/// of every element in the persisted blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fact {
    /// Locally generated identifier.
    pub id: FactId,
    /// The fact text. Unique within a collection.
    pub fact: String,
    /// Character count reported by the API, if any.
    ///
    /// Read leniently: a value that is not a whole number in `u32` range
    /// loads as `None` instead of failing the whole record.
    #[serde(default, deserialize_with = "deserialize_lenient_length")]
    pub length: Option<u32>,
    /// ISO-8601 timestamp of when the fact was saved.
    pub created_at: String,
}

impl Fact {
    /// Creates a new fact with a fresh ID and the current timestamp.
    #[must_use]
    pub fn new(fact: impl Into<String>, length: Option<u32>) -> Self {
        Self {
            id: FactId::generate(),
            fact: fact.into(),
            length,
            created_at: timestamp_now(),
        }
    }
}

/// Returns the current UTC time as RFC 3339 with millisecond precision,
/// e.g. `2024-01-01T00:00:00.000Z`.
#[must_use]
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn deserialize_lenient_length<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Number(number) = value else {
        return Ok(None);
    };

    if let Some(int) = number.as_u64() {
        return Ok(u32::try_from(int).ok());
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    if let Some(float) = number.as_f64()
        && float.is_finite()
        && float.fract() == 0.0
        && float >= 0.0
        && float <= f64::from(u32::MAX)
    {
        return Ok(Some(float as u32));
    }
    Ok(None)
}

#[allow(clippy::cast_possible_truncation)]
fn to_base36(mut value: u128) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();

    String::from_utf8(digits).unwrap_or_default()
}
