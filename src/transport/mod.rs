//! HTTP transport for the Ravy API
//!
//! The [`Transport`] trait is the minimal contract the rest of the client
//! depends on: issue one GET or POST against a versioned route and hand
//! back the decoded JSON payload, or a [`TransportError`]. The default
//! implementation is [`HttpTransport`] over `reqwest`; tests swap in a
//! capturing mock.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::TransportError;

mod http;
#[cfg(test)]
pub(crate) mod mock;

pub use http::HttpTransport;

/// Minimal transport contract.
///
/// Connection pooling, TLS, and timeouts are the implementation's
/// concern; the client core only sees paths, parameters, and decoded
/// JSON. Cancelling an in-flight call drops the future and unwinds
/// without leaking connections.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET request with query parameters.
    async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<Value, TransportError>;

    /// Issue a POST request with a JSON body.
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, TransportError>;

    /// Issue a multipart POST with one binary field plus query parameters.
    async fn post_multipart(
        &self,
        path: &str,
        params: &[(&str, String)],
        field: &'static str,
        bytes: Vec<u8>,
    ) -> Result<Value, TransportError>;
}
