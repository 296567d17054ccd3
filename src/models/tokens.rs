//! Models for the `tokens` endpoint

use serde_json::Value;

use super::{invalid, required, required_id, required_str};
use crate::error::SchemaError;

/// Current-token introspection from `GET /tokens/@current`.
#[derive(Debug, Clone)]
pub struct GetTokenResponse {
    raw: Value,
    /// User ID of the token owner.
    pub user: u64,
    /// Access scopes granted to the token.
    pub access: Vec<String>,
    /// The token type, e.g. `"ravy"`.
    pub token_type: String,
}

impl GetTokenResponse {
    pub(crate) fn from_value(raw: Value) -> Result<Self, SchemaError> {
        const MODEL: &str = "GetTokenResponse";

        let access = required(&raw, MODEL, "access")?
            .as_array()
            .ok_or_else(|| invalid(MODEL, "access", "expected an array of strings"))?
            .iter()
            .map(|scope| {
                scope
                    .as_str()
                    .map(str::to_owned)
                    .ok_or_else(|| invalid(MODEL, "access", "expected an array of strings"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            user: required_id(&raw, MODEL, "user")?,
            token_type: required_str(&raw, MODEL, "type")?,
            access,
            raw,
        })
    }

    /// The raw payload as returned by the API.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Whether the token carries the given access scope.
    pub fn has_access(&self, scope: &str) -> bool {
        self.access.iter().any(|granted| granted == scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_token_response() {
        let response = GetTokenResponse::from_value(json!({
            "user": "123456789",
            "access": ["users", "users.bans", "urls.cached"],
            "type": "ravy"
        }))
        .unwrap();
        assert_eq!(response.user, 123456789);
        assert_eq!(response.token_type, "ravy");
        assert!(response.has_access("users.bans"));
        assert!(!response.has_access("admin.urls"));
    }

    #[test]
    fn test_missing_access_is_schema_error() {
        assert!(GetTokenResponse::from_value(json!({ "user": "1", "type": "ravy" })).is_err());
    }

    #[test]
    fn test_non_string_scope_is_schema_error() {
        let err = GetTokenResponse::from_value(json!({
            "user": "1",
            "access": ["users", 42],
            "type": "ravy"
        }))
        .unwrap_err();
        assert!(matches!(err, SchemaError::InvalidField { key: "access", .. }));
    }
}
