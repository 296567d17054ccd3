//! Models shared between the `users` and `guilds` responses

use serde_json::Value;

use super::{coerce_id, optional_str, required_id, required_str};
use crate::error::SchemaError;

/// Trust rating for a user or guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trust {
    /// Trust level from 0 (very untrustworthy) to 6 (highly trusted).
    pub level: u8,
    /// Human-readable description of the level.
    pub label: String,
}

impl Trust {
    pub(crate) fn from_value(data: &Value) -> Result<Self, SchemaError> {
        const MODEL: &str = "Trust";
        let level = required_id(data, MODEL, "level")?;
        let level = u8::try_from(level).map_err(|_| SchemaError::InvalidField {
            model: MODEL,
            key: "level",
            reason: "expected a small integer".to_string(),
        })?;

        Ok(Self {
            level,
            label: required_str(data, MODEL, "label")?,
        })
    }
}

/// One entry in a user's or guild's ban list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BanEntry {
    /// Source for where the ban originated.
    pub provider: String,
    /// Why the ban was issued.
    pub reason: String,
    /// Machine-readable version of the reason, only present for some
    /// providers.
    pub reason_key: Option<String>,
    /// User ID of the responsible moderator. Delivered as a decimal
    /// string and coerced; a falsy value maps to `None`.
    pub moderator: Option<u64>,
}

impl BanEntry {
    pub(crate) fn from_value(data: &Value) -> Result<Self, SchemaError> {
        const MODEL: &str = "BanEntry";
        Ok(Self {
            provider: required_str(data, MODEL, "provider")?,
            reason: required_str(data, MODEL, "reason")?,
            reason_key: optional_str(data, "reason_key"),
            moderator: coerce_id(data, MODEL, "moderator")?,
        })
    }
}
