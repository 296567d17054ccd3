//! Mock transport for unit testing
//!
//! Captures every request and serves canned JSON payloads so endpoint
//! tests can assert on request shape and on "no call was made" without
//! touching the network.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use super::Transport;
use crate::error::TransportError;

/// A captured transport request for test assertions.
#[derive(Debug, Clone)]
pub(crate) struct CapturedRequest {
    /// "GET", "POST", or "POST-MULTIPART"
    pub method: &'static str,
    pub path: String,
    pub params: Vec<(String, String)>,
    /// JSON body for POSTs
    pub body: Option<Value>,
    /// Multipart field name and payload size
    pub multipart: Option<(String, usize)>,
}

/// Mock transport serving canned responses keyed by `"METHOD /path"`.
///
/// Unkeyed requests fall back to `Value::Null`, which is enough for
/// mutation endpoints; response-model tests configure an explicit
/// payload first.
#[derive(Default)]
pub(crate) struct MockTransport {
    responses: Mutex<HashMap<String, Value>>,
    captured: Mutex<Vec<CapturedRequest>>,
    error: Mutex<Option<TransportError>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Configure a canned response for one method and path.
    pub(crate) async fn with_response(self, method: &str, path: &str, body: Value) -> Self {
        self.responses
            .lock()
            .await
            .insert(format!("{method} {path}"), body);
        self
    }

    /// Configure an error to return on the next request. Consumed on use.
    pub(crate) async fn with_error(self, error: TransportError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// All captured requests, in order.
    pub(crate) async fn captured(&self) -> Vec<CapturedRequest> {
        self.captured.lock().await.clone()
    }

    /// Total number of transport calls observed.
    pub(crate) async fn call_count(&self) -> usize {
        self.captured.lock().await.len()
    }

    async fn record(&self, request: CapturedRequest) -> Result<Value, TransportError> {
        let key = format!("{} {}", request.method, request.path);
        self.captured.lock().await.push(request);

        if let Some(err) = self.error.lock().await.take() {
            return Err(err);
        }

        Ok(self
            .responses
            .lock()
            .await
            .get(&key)
            .cloned()
            .unwrap_or(Value::Null))
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<Value, TransportError> {
        self.record(CapturedRequest {
            method: "GET",
            path: path.to_string(),
            params: owned(params),
            body: None,
            multipart: None,
        })
        .await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
        self.record(CapturedRequest {
            method: "POST",
            path: path.to_string(),
            params: Vec::new(),
            body: Some(body.clone()),
            multipart: None,
        })
        .await
    }

    async fn post_multipart(
        &self,
        path: &str,
        params: &[(&str, String)],
        field: &'static str,
        bytes: Vec<u8>,
    ) -> Result<Value, TransportError> {
        self.record(CapturedRequest {
            method: "POST-MULTIPART",
            path: path.to_string(),
            params: owned(params),
            body: None,
            multipart: Some((field.to_string(), bytes.len())),
        })
        .await
    }
}

fn owned(params: &[(&str, String)]) -> Vec<(String, String)> {
    params
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_serves_canned_response() {
        let mock = MockTransport::new()
            .with_response("GET", "/users/1", json!({"pronouns": "they/them"}))
            .await;

        let data = mock.get("/users/1", &[]).await.unwrap();
        assert_eq!(data["pronouns"], "they/them");
        assert_eq!(mock.call_count().await, 1);
    }

    #[tokio::test]
    async fn test_mock_unkeyed_request_is_null() {
        let mock = MockTransport::new();
        let data = mock.post_json("/urls/x", &json!({})).await.unwrap();
        assert!(data.is_null());
    }

    #[tokio::test]
    async fn test_mock_error_consumed_once() {
        let mock = MockTransport::new()
            .with_error(TransportError::Network("boom".to_string()))
            .await;

        assert!(mock.get("/avatars", &[]).await.is_err());
        assert!(mock.get("/avatars", &[]).await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_captures_params_and_multipart() {
        let mock = MockTransport::new();
        mock.post_multipart("/avatars", &[("method", "phash".to_string())], "avatar", vec![1, 2, 3])
            .await
            .unwrap();

        let captured = mock.captured().await;
        assert_eq!(captured[0].method, "POST-MULTIPART");
        assert_eq!(captured[0].params[0].0, "method");
        assert_eq!(captured[0].multipart, Some(("avatar".to_string(), 3)));
    }
}
