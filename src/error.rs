//! Error types for the Ravy API client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the client.
///
/// The failure kinds stay distinguishable so callers can retry transport
/// failures without retrying validation or capability failures.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The client was closed; no call reached the transport.
    #[error("client is closed")]
    ClientClosed,
}

/// Parameter validation errors, raised before any network activity.
///
/// Every variant names the single parameter it is attributable to.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("parameter \"{param}\" must be of type \"{expected}\"")]
    InvalidType {
        param: &'static str,
        expected: &'static str,
    },

    #[error("parameter \"{param}\" is invalid: {reason}")]
    InvalidValue { param: &'static str, reason: String },
}

impl ValidationError {
    /// The parameter the failure is attributable to.
    pub fn param(&self) -> &'static str {
        match self {
            ValidationError::InvalidType { param, .. } => param,
            ValidationError::InvalidValue { param, .. } => param,
        }
    }
}

/// Capability-denied error raised by the permission guard before any
/// network activity for the guarded operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("insufficient permissions: this route requires token access \"{required}\"")]
pub struct AccessError {
    /// The scope the operation requires.
    pub required: String,
}

impl AccessError {
    pub fn new(required: impl Into<String>) -> Self {
        Self {
            required: required.into(),
        }
    }
}

/// Transport-level errors: network failures and non-success HTTP statuses.
///
/// The client does not interpret status codes beyond carrying them through.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Network("request timed out".to_string())
        } else if err.is_connect() {
            TransportError::Network("failed to connect to API".to_string())
        } else if err.is_decode() {
            TransportError::Decode(err.to_string())
        } else {
            TransportError::Network(err.to_string())
        }
    }
}

/// Schema errors raised during response model construction.
///
/// These signal an API contract mismatch, not a caller mistake.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("response for {model} is missing required field \"{key}\"")]
    MissingField {
        model: &'static str,
        key: &'static str,
    },

    #[error("response field \"{key}\" for {model} has an unexpected shape: {reason}")]
    InvalidField {
        model: &'static str,
        key: &'static str,
        reason: String,
    },
}
