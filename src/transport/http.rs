//! `reqwest`-backed transport implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, RequestBuilder, Response, StatusCode};
use serde_json::Value;

use super::Transport;
use crate::error::TransportError;

/// Ravy API base URL
const API_BASE_URL: &str = "https://ravy.org/api/v1";

/// Request timeout for all calls
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport over a pooled `reqwest` client.
///
/// Holds the session's bearer token and injects the `Authorization:
/// Ravy {token}` header on every request. Concurrent calls share the
/// underlying connection pool.
pub struct HttpTransport {
    http: HttpClient,
    base_url: String,
    token: String,
}

impl HttpTransport {
    /// Create a transport against the production API.
    pub fn new(token: impl Into<String>) -> Result<Self, TransportError> {
        Self::with_base_url(token, API_BASE_URL)
    }

    /// Create a transport against a custom base URL. Used for local
    /// servers and HTTP-level tests.
    pub fn with_base_url(
        token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, TransportError> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            token: token.into(),
        })
    }

    fn request(&self, method: reqwest::Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.http
            .request(method, &url)
            .header("Authorization", format!("Ravy {}", self.token))
    }

    /// Decode a response, mapping non-2xx statuses to
    /// [`TransportError::Status`] with the body carried through verbatim.
    async fn decode(response: Response) -> Result<Value, TransportError> {
        let status = response.status();
        let body = response.text().await.map_err(TransportError::from)?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        // Mutation endpoints may respond with an empty body.
        if body.is_empty() || status == StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<Value, TransportError> {
        log::debug!("GET {path}");
        let response = self
            .request(reqwest::Method::GET, path)
            .query(params)
            .send()
            .await
            .map_err(TransportError::from)?;
        Self::decode(response).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
        log::debug!("POST {path}");
        let response = self
            .request(reqwest::Method::POST, path)
            .json(body)
            .send()
            .await
            .map_err(TransportError::from)?;
        Self::decode(response).await
    }

    async fn post_multipart(
        &self,
        path: &str,
        params: &[(&str, String)],
        field: &'static str,
        bytes: Vec<u8>,
    ) -> Result<Value, TransportError> {
        log::debug!("POST {path} (multipart, {} bytes)", bytes.len());
        let part = reqwest::multipart::Part::bytes(bytes)
            .mime_str("application/octet-stream")
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part(field, part);

        let response = self
            .request(reqwest::Method::POST, path)
            .query(params)
            .multipart(form)
            .send()
            .await
            .map_err(TransportError::from)?;
        Self::decode(response).await
    }
}
