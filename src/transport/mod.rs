//! HTTP transport layer for the SendClean client.
//!
//! Issues one JSON request per call, buffers the whole response body and
//! parses it as JSON. Envelope interpretation happens one layer up in
//! [`crate::envelope`].

use crate::errors::{RequestError, ResponseError, SendCleanResult, TransportError};
use crate::observability::redact_body;
use async_trait::async_trait;
use bytes::Bytes;
use http::header::{HeaderValue, CONTENT_TYPE};
use http::{HeaderMap, Method};
use reqwest::{Client, ClientBuilder};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, trace, warn};

/// Content type sent with every request
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP transport trait for making API requests
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a request and return the parsed JSON response body
    async fn send(&self, request: TransportRequest) -> SendCleanResult<Value>;
}

/// A single outbound request
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL
    pub url: String,
    /// Extra headers; `Content-Type` is always replaced by [`JSON_CONTENT_TYPE`]
    pub headers: HeaderMap,
    /// JSON body
    pub body: Option<Value>,
}

impl TransportRequest {
    /// Create a request without body or extra headers
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Create a POST request with a JSON body
    pub fn post(url: impl Into<String>, body: Value) -> Self {
        Self::new(Method::POST, url).with_body(body)
    }

    /// Set the body
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Merge headers into the request, replacing same-named ones
    pub fn with_headers(mut self, headers: &HeaderMap) -> Self {
        for (name, value) in headers {
            self.headers.insert(name.clone(), value.clone());
        }
        self
    }

    /// Final header set as sent on the wire
    pub fn effective_headers(&self) -> HeaderMap {
        let mut headers = self.headers.clone();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers
    }
}

/// Default HTTP transport implementation using reqwest
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
    timeout: Option<Duration>,
}

impl ReqwestTransport {
    /// Create a new transport; `timeout` of `None` never times out
    pub fn new(timeout: Option<Duration>) -> SendCleanResult<Self> {
        let mut builder = ClientBuilder::new();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| TransportError::Http {
            message: e.to_string(),
        })?;

        Ok(Self { client, timeout })
    }

    /// Create a new transport with a pre-built client
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            timeout: None,
        }
    }

    fn encode_body(body: &Value) -> SendCleanResult<Vec<u8>> {
        serde_json::to_vec(body).map_err(|e| {
            RequestError::Serialization {
                message: e.to_string(),
            }
            .into()
        })
    }

    fn parse_body(body: &Bytes) -> SendCleanResult<Value> {
        serde_json::from_slice(body).map_err(|e| {
            ResponseError::MalformedJson {
                message: e.to_string(),
            }
            .into()
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    async fn send(&self, request: TransportRequest) -> SendCleanResult<Value> {
        let headers = request.effective_headers();
        let mut req_builder = self
            .client
            .request(request.method.clone(), &request.url)
            .headers(headers);

        if let Some(body) = &request.body {
            trace!(body = %redact_body(body), "Request body");
            req_builder = req_builder.body(Self::encode_body(body)?);
        }

        debug!("Dispatching request");
        let response = req_builder.send().await.map_err(TransportError::from)?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Request returned non-success status");
        }

        let body = response.bytes().await.map_err(|e| TransportError::Interrupted {
            message: e.to_string(),
        })?;
        debug!(status = %status, bytes = body.len(), "Received response");

        Self::parse_body(&body)
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("timeout", &self.timeout)
            .finish()
    }
}
