//! Typed response models for the Ravy API
//!
//! Every model wraps the raw decoded payload verbatim (reachable via
//! `raw()`) plus a fixed set of typed fields extracted at construction.
//! A required key missing from the payload is a hard [`SchemaError`]; an
//! optional key missing yields `None`, never a default.

use serde_json::Value;

use crate::error::SchemaError;

mod avatars;
mod generic;
mod guilds;
mod ksoft;
mod tokens;
mod urls;
mod users;

pub use avatars::CheckAvatarResponse;
pub use generic::{BanEntry, Trust};
pub use guilds::GetGuildResponse;
pub use ksoft::GetKSoftBanResponse;
pub use tokens::GetTokenResponse;
pub use urls::{EditWebsiteRequest, GetWebsiteResponse};
pub use users::{
    BanEntryRequest, GetBansResponse, GetPronounsResponse, GetReputationResponse, GetUserResponse,
    GetWhitelistsResponse, ReputationEntry, WhitelistEntry,
};

// ---------------------------------------------------------------------------
// Field extraction helpers
// ---------------------------------------------------------------------------

fn missing(model: &'static str, key: &'static str) -> SchemaError {
    SchemaError::MissingField { model, key }
}

fn invalid(model: &'static str, key: &'static str, reason: impl Into<String>) -> SchemaError {
    SchemaError::InvalidField {
        model,
        key,
        reason: reason.into(),
    }
}

fn required<'a>(
    data: &'a Value,
    model: &'static str,
    key: &'static str,
) -> Result<&'a Value, SchemaError> {
    match data.get(key) {
        None | Some(Value::Null) => Err(missing(model, key)),
        Some(value) => Ok(value),
    }
}

pub(crate) fn required_bool(
    data: &Value,
    model: &'static str,
    key: &'static str,
) -> Result<bool, SchemaError> {
    required(data, model, key)?
        .as_bool()
        .ok_or_else(|| invalid(model, key, "expected a boolean"))
}

pub(crate) fn required_str(
    data: &Value,
    model: &'static str,
    key: &'static str,
) -> Result<String, SchemaError> {
    required(data, model, key)?
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| invalid(model, key, "expected a string"))
}

pub(crate) fn required_f64(
    data: &Value,
    model: &'static str,
    key: &'static str,
) -> Result<f64, SchemaError> {
    required(data, model, key)?
        .as_f64()
        .ok_or_else(|| invalid(model, key, "expected a number"))
}

pub(crate) fn required_array<'a>(
    data: &'a Value,
    model: &'static str,
    key: &'static str,
) -> Result<&'a Vec<Value>, SchemaError> {
    required(data, model, key)?
        .as_array()
        .ok_or_else(|| invalid(model, key, "expected an array"))
}

/// A required integer field, accepting either a JSON number or the
/// decimal-string form the wire format uses for IDs.
pub(crate) fn required_id(
    data: &Value,
    model: &'static str,
    key: &'static str,
) -> Result<u64, SchemaError> {
    match required(data, model, key)? {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| invalid(model, key, "expected an unsigned integer")),
        Value::String(s) => s
            .parse()
            .map_err(|_| invalid(model, key, "expected a decimal integer string")),
        _ => Err(invalid(model, key, "expected an integer or integer string")),
    }
}

pub(crate) fn optional_str(data: &Value, key: &str) -> Option<String> {
    data.get(key).and_then(Value::as_str).map(str::to_owned)
}

pub(crate) fn optional_bool(data: &Value, key: &str) -> Option<bool> {
    data.get(key).and_then(Value::as_bool)
}

pub(crate) fn optional_f64(data: &Value, key: &str) -> Option<f64> {
    data.get(key).and_then(Value::as_f64)
}

pub(crate) fn optional_u64(data: &Value, key: &str) -> Option<u64> {
    data.get(key).and_then(Value::as_u64)
}

/// Optional ID fields delivered as decimal strings are coerced to
/// integers only when present and truthy. Absent, null, empty, `"0"`, or
/// numeric `0` all map to `None`. This mirrors the live API contract and
/// is covered by tests; do not "fix" it to distinguish a zero ID.
pub(crate) fn coerce_id(
    data: &Value,
    model: &'static str,
    key: &'static str,
) -> Result<Option<u64>, SchemaError> {
    match data.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => {
            if s.is_empty() {
                return Ok(None);
            }
            let id: u64 = s
                .parse()
                .map_err(|_| invalid(model, key, "expected a decimal integer string"))?;
            Ok((id != 0).then_some(id))
        }
        Some(Value::Number(n)) => {
            let id = n
                .as_u64()
                .ok_or_else(|| invalid(model, key, "expected an unsigned integer"))?;
            Ok((id != 0).then_some(id))
        }
        Some(_) => Err(invalid(model, key, "expected an integer or integer string")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required_bool_missing_is_schema_error() {
        let data = json!({});
        let err = required_bool(&data, "Test", "found").unwrap_err();
        assert!(matches!(err, SchemaError::MissingField { key: "found", .. }));
    }

    #[test]
    fn test_required_null_counts_as_missing() {
        let data = json!({ "found": null });
        assert!(required_bool(&data, "Test", "found").is_err());
    }

    #[test]
    fn test_required_id_accepts_string_and_number() {
        let data = json!({ "a": "123", "b": 456 });
        assert_eq!(required_id(&data, "Test", "a").unwrap(), 123);
        assert_eq!(required_id(&data, "Test", "b").unwrap(), 456);
    }

    #[test]
    fn test_coerce_id_parses_truthy_string() {
        let data = json!({ "id": "123" });
        assert_eq!(coerce_id(&data, "Test", "id").unwrap(), Some(123));
    }

    #[test]
    fn test_coerce_id_zero_string_collapses_to_none() {
        // The documented coercion rule: a falsy value, including the
        // literal "0", is treated as absent.
        let data = json!({ "moderator": "0" });
        assert_eq!(coerce_id(&data, "Test", "moderator").unwrap(), None);
    }

    #[test]
    fn test_coerce_id_absent_and_empty_are_none() {
        assert_eq!(coerce_id(&json!({}), "Test", "id").unwrap(), None);
        assert_eq!(coerce_id(&json!({ "id": null }), "Test", "id").unwrap(), None);
        assert_eq!(coerce_id(&json!({ "id": "" }), "Test", "id").unwrap(), None);
        assert_eq!(coerce_id(&json!({ "id": 0 }), "Test", "id").unwrap(), None);
    }

    #[test]
    fn test_coerce_id_garbage_is_schema_error() {
        let data = json!({ "id": "not-a-number" });
        assert!(coerce_id(&data, "Test", "id").is_err());
    }

    #[test]
    fn test_optional_extractors_absent_is_none() {
        let data = json!({});
        assert_eq!(optional_str(&data, "key"), None);
        assert_eq!(optional_bool(&data, "severe"), None);
        assert_eq!(optional_f64(&data, "similarity"), None);
        assert_eq!(optional_u64(&data, "upvotes"), None);
    }
}
