//! Mock implementations for testing.
//!
//! Provides a scripted transport that records every request it receives.

use crate::errors::{ApiError, ResponseError, SendCleanError, SendCleanResult};
use crate::transport::{HttpTransport, TransportRequest};
use crate::types::{STATUS_ERROR, STATUS_SUCCESS};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Arc;

/// Mock response configuration
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// Parsed response body
    pub body: Value,
    /// Delay before response
    pub delay_ms: Option<u64>,
    /// Error to return instead
    pub error: Option<SendCleanError>,
}

impl MockResponse {
    /// Create a response with the given JSON body
    pub fn json(body: Value) -> Self {
        Self {
            body,
            delay_ms: None,
            error: None,
        }
    }

    /// Create a success envelope with extra payload fields
    pub fn success(payload: Value) -> Self {
        let mut body = json!({"status": STATUS_SUCCESS, "message": "ok"});
        if let (Some(target), Value::Object(fields)) = (body.as_object_mut(), payload) {
            target.extend(fields);
        }
        Self::json(body)
    }

    /// Create a transport-level failure
    pub fn error(error: SendCleanError) -> Self {
        Self {
            body: Value::Null,
            delay_ms: None,
            error: Some(error),
        }
    }

    /// Create an error envelope with the given type tag
    pub fn api_error(error_type: &str, message: &str) -> Self {
        Self::json(json!({
            "status": STATUS_ERROR,
            "type": error_type,
            "message": message
        }))
    }

    /// Add delay to response
    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = Some(ms);
        self
    }
}

/// Recorded request for verification
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request URL
    pub url: String,
    /// Request method
    pub method: String,
    /// Request body
    pub body: Option<Value>,
    /// Request headers as they would be sent
    pub headers: Vec<(String, String)>,
}

impl RecordedRequest {
    /// Look up a body field
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.body.as_ref().and_then(|b| b.get(name))
    }

    /// Look up a header by name, case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Mock HTTP transport for testing
pub struct MockHttpTransport {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    default_response: Option<MockResponse>,
}

impl MockHttpTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            default_response: None,
        }
    }

    /// Add a response to the queue
    pub fn add_response(self, response: MockResponse) -> Self {
        self.responses.lock().push_back(response);
        self
    }

    /// Add multiple responses
    pub fn add_responses(self, responses: impl IntoIterator<Item = MockResponse>) -> Self {
        self.responses.lock().extend(responses);
        self
    }

    /// Add a JSON response
    pub fn add_json_response(self, body: Value) -> Self {
        self.add_response(MockResponse::json(body))
    }

    /// Set default response when queue is empty
    pub fn with_default_response(mut self, response: MockResponse) -> Self {
        self.default_response = Some(response);
        self
    }

    /// Get recorded requests
    pub fn recorded_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// Get the last recorded request
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().last().cloned()
    }

    /// Number of requests received
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Get remaining response count
    pub fn remaining_responses(&self) -> usize {
        self.responses.lock().len()
    }

    fn record_request(&self, request: &TransportRequest) {
        let headers = request
            .effective_headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();

        self.requests.lock().push(RecordedRequest {
            url: request.url.clone(),
            method: request.method.to_string(),
            body: request.body.clone(),
            headers,
        });
    }

    fn next_response(&self) -> Option<MockResponse> {
        let mut queue = self.responses.lock();
        queue.pop_front().or_else(|| self.default_response.clone())
    }
}

impl Default for MockHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(&self, request: TransportRequest) -> SendCleanResult<Value> {
        self.record_request(&request);

        let response = self.next_response().ok_or_else(|| ResponseError::UnexpectedShape {
            message: "No mock response configured".to_string(),
        })?;

        if let Some(delay) = response.delay_ms {
            tokio::time::sleep(std::time::Duration::from_millis(delay)).await;
        }

        if let Some(error) = response.error {
            return Err(error);
        }

        Ok(response.body)
    }
}

impl std::fmt::Debug for MockHttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockHttpTransport")
            .field("pending_responses", &self.responses.lock().len())
            .field("recorded_requests", &self.requests.lock().len())
            .finish()
    }
}

/// Build an [`ApiError`] as the envelope interpreter would
pub fn api_error(error_type: &str, message: &str) -> SendCleanError {
    ApiError::from_envelope(Some(error_type), Some(message)).into()
}
