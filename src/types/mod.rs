//! Common types for the SendClean API.
//!
//! Defines shared data structures used across services.

use serde::{Deserialize, Deserializer, Serialize};

pub mod duration;

pub use duration::*;

/// Envelope status value signalling success
pub const STATUS_SUCCESS: &str = "success";

/// Envelope status value signalling failure
pub const STATUS_ERROR: &str = "error";

/// DNS check result as reported by the provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validity {
    /// Whether the record checked out
    #[serde(default)]
    pub valid: bool,
}

impl Validity {
    /// Create a result
    pub fn new(valid: bool) -> Self {
        Self { valid }
    }
}

/// Acknowledgement returned by operations without a dedicated payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Acknowledgement {
    /// Envelope status
    #[serde(default)]
    pub status: String,
    /// Provider message
    #[serde(default)]
    pub message: String,
    /// Remaining fields, kept as sent
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Deserialize an identifier that may be sent as a string or a number
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    })
}

/// Deserialize an optional flag the provider may send as a string, boolean
/// or number, keeping its text form
pub(crate) fn optional_scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Flag(bool),
        Int(i64),
        Float(f64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Flag(b) => b.to_string(),
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    }))
}
