//! Models for the `urls` endpoint

use serde_json::Value;

use super::{required_bool, required_str};
use crate::error::SchemaError;

/// Website information from `GET /urls`.
#[derive(Debug, Clone)]
pub struct GetWebsiteResponse {
    raw: Value,
    /// Whether the website is fraudulent.
    pub is_fraudulent: bool,
    /// Informational message about the website.
    pub message: String,
}

impl GetWebsiteResponse {
    pub(crate) fn from_value(raw: Value) -> Result<Self, SchemaError> {
        const MODEL: &str = "GetWebsiteResponse";
        Ok(Self {
            is_fraudulent: required_bool(&raw, MODEL, "isFraudulent")?,
            message: required_str(&raw, MODEL, "message")?,
            raw,
        })
    }

    /// The raw payload as returned by the API.
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

/// Request body for `POST /urls/{url}`.
#[derive(Debug, Clone)]
pub struct EditWebsiteRequest {
    pub is_fraudulent: bool,
    pub message: String,
}

impl EditWebsiteRequest {
    /// The wire-format JSON body, using the API's camelCase field name.
    pub(crate) fn to_json(&self) -> Value {
        serde_json::json!({
            "isFraudulent": self.is_fraudulent,
            "message": self.message,
        })
    }
}
