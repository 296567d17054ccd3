//! Models for the `ksoft` endpoint

use serde_json::Value;

use super::{coerce_id, optional_bool, optional_str, required_bool};
use crate::error::SchemaError;

/// Ban status from `GET /ksoft/bans/{id}`.
///
/// Every field other than `found` is only present when a ban exists.
/// The `id` and `moderator` fields arrive as decimal strings and go
/// through the falsy-collapses-to-`None` coercion rule.
#[derive(Debug, Clone)]
pub struct GetKSoftBanResponse {
    raw: Value,
    /// Whether a ban was found for the user.
    pub found: bool,
    /// The banned user's ID.
    pub user_id: Option<u64>,
    /// The banned user's tag at ban time.
    pub tag: Option<String>,
    /// Why the user was banned.
    pub reason: Option<String>,
    /// Link to evidence for the ban.
    pub proof: Option<String>,
    /// User ID of the responsible moderator.
    pub moderator: Option<u64>,
    /// Whether the ban is marked severe.
    pub severe: Option<bool>,
    /// When the ban was issued.
    pub timestamp: Option<String>,
}

impl GetKSoftBanResponse {
    pub(crate) fn from_value(raw: Value) -> Result<Self, SchemaError> {
        const MODEL: &str = "GetKSoftBanResponse";
        Ok(Self {
            found: required_bool(&raw, MODEL, "found")?,
            user_id: coerce_id(&raw, MODEL, "id")?,
            tag: optional_str(&raw, "tag"),
            reason: optional_str(&raw, "reason"),
            proof: optional_str(&raw, "proof"),
            moderator: coerce_id(&raw, MODEL, "moderator")?,
            severe: optional_bool(&raw, "severe"),
            timestamp: optional_str(&raw, "timestamp"),
            raw,
        })
    }

    /// The raw payload as returned by the API.
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_found_ban_with_details() {
        let response = GetKSoftBanResponse::from_value(json!({
            "found": true,
            "id": "123",
            "tag": "someone#0001",
            "reason": "raiding",
            "proof": "https://example.com/proof",
            "moderator": "456",
            "severe": true,
            "timestamp": "2021-06-01T00:00:00Z"
        }))
        .unwrap();

        assert!(response.found);
        assert_eq!(response.user_id, Some(123));
        assert_eq!(response.moderator, Some(456));
        assert_eq!(response.severe, Some(true));
    }

    #[test]
    fn test_not_found_leaves_fields_absent() {
        let response = GetKSoftBanResponse::from_value(json!({ "found": false })).unwrap();
        assert!(!response.found);
        assert_eq!(response.user_id, None);
        assert_eq!(response.tag, None);
        assert_eq!(response.severe, None);
    }

    #[test]
    fn test_falsy_string_ids_collapse_to_none() {
        // The coercion rule in action: "id" parses to an integer while a
        // "0" moderator is treated as absent rather than a zero ID.
        let response = GetKSoftBanResponse::from_value(json!({
            "found": true,
            "id": "123",
            "moderator": "0"
        }))
        .unwrap();

        assert_eq!(response.user_id, Some(123));
        assert_eq!(response.moderator, None);
    }

    #[test]
    fn test_missing_found_is_schema_error() {
        let err = GetKSoftBanResponse::from_value(json!({ "id": "123" })).unwrap_err();
        assert!(matches!(err, SchemaError::MissingField { key: "found", .. }));
    }

    #[test]
    fn test_raw_payload_retained() {
        let response =
            GetKSoftBanResponse::from_value(json!({ "found": false, "extra": "kept" })).unwrap();
        assert_eq!(response.raw()["extra"], "kept");
    }
}
