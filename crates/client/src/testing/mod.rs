//! In-memory transports for exercising request construction and dispatch.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use opensearch_security_client::{SecurityClient, testing::RecordingTransport};
//!
//! let transport = RecordingTransport::new(200, r#"{"status":"CREATED"}"#);
//! let client = SecurityClient::with_transport(&transport, "http://localhost:9200");
//! client.role_create("readall").send().await?;
//! assert_eq!(transport.recorded()[0].path, "/_plugins/_security/api/roles/readall");
//! ```

use std::sync::Mutex;
use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Method, Request};

use crate::error::{ClientError, Result};
use crate::transport::Transport;

/// Snapshot of a request seen by [`RecordingTransport`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
    pub timeout: Option<Duration>,
}

impl From<&Request> for RecordedRequest {
    fn from(request: &Request) -> Self {
        Self {
            method: request.method().clone(),
            path: request.url().path().to_string(),
            query: request.url().query().map(str::to_string),
            headers: request.headers().clone(),
            body: request
                .body()
                .and_then(|b| b.as_bytes())
                .map(<[u8]>::to_vec),
            timeout: request.timeout().copied(),
        }
    }
}

/// Build a raw transport response with a JSON content type.
pub fn json_response(status: u16, body: &'static str) -> reqwest::Response {
    let raw = http::Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(body)
        .unwrap_or_else(|e| panic!("invalid test response: {e}"));
    reqwest::Response::from(raw)
}

/// Transport that records every request and answers with a fixed response.
#[derive(Debug)]
pub struct RecordingTransport {
    status: u16,
    body: &'static str,
    recorded: Mutex<Vec<RecordedRequest>>,
}

impl RecordingTransport {
    pub fn new(status: u16, body: &'static str) -> Self {
        Self {
            status,
            body,
            recorded: Mutex::new(Vec::new()),
        }
    }

    /// Requests seen so far, oldest first.
    pub fn recorded(&self) -> Vec<RecordedRequest> {
        self.recorded
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl Transport for RecordingTransport {
    async fn perform(&self, request: Request) -> Result<reqwest::Response> {
        if let Ok(mut recorded) = self.recorded.lock() {
            recorded.push(RecordedRequest::from(&request));
        }
        Ok(json_response(self.status, self.body))
    }
}

/// Transport that fails every call with a fixed message.
#[derive(Debug, Clone)]
pub struct FailingTransport {
    message: String,
}

impl FailingTransport {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Transport for FailingTransport {
    async fn perform(&self, _request: Request) -> Result<reqwest::Response> {
        Err(ClientError::Transport(self.message.clone()))
    }
}

/// Transport that never completes, for cancellation tests.
#[derive(Debug, Clone, Default)]
pub struct PendingTransport;

impl Transport for PendingTransport {
    async fn perform(&self, _request: Request) -> Result<reqwest::Response> {
        std::future::pending().await
    }
}
