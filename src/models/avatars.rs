//! Models for the `avatars` endpoint

use serde_json::Value;

use super::{optional_f64, optional_str, required_bool};
use crate::error::SchemaError;

/// Match result from the avatar similarity check.
#[derive(Debug, Clone)]
pub struct CheckAvatarResponse {
    raw: Value,
    /// Whether the avatar matched a known fraudulent one.
    pub matched: bool,
    /// The avatar key that matched, when one did.
    pub key: Option<String>,
    /// Similarity of the avatar to the key, between 0 and 1.
    pub similarity: Option<f64>,
}

impl CheckAvatarResponse {
    pub(crate) fn from_value(raw: Value) -> Result<Self, SchemaError> {
        Ok(Self {
            matched: required_bool(&raw, "CheckAvatarResponse", "matched")?,
            key: optional_str(&raw, "key"),
            similarity: optional_f64(&raw, "similarity"),
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
    fn test_matched_avatar() {
        let response = CheckAvatarResponse::from_value(json!({
            "matched": true,
            "key": "avatar-key",
            "similarity": 0.99
        }))
        .unwrap();
        assert!(response.matched);
        assert_eq!(response.key.as_deref(), Some("avatar-key"));
        assert_eq!(response.similarity, Some(0.99));
    }

    #[test]
    fn test_unmatched_avatar_leaves_optionals_absent() {
        let response = CheckAvatarResponse::from_value(json!({ "matched": false })).unwrap();
        assert!(!response.matched);
        assert_eq!(response.key, None);
        assert_eq!(response.similarity, None);
    }

    #[test]
    fn test_missing_matched_is_schema_error() {
        assert!(CheckAvatarResponse::from_value(json!({ "key": "x" })).is_err());
    }
}
