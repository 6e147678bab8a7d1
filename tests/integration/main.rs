//! Integration tests using WireMock
//!
//! These tests run the client against a mock HTTP server to cover the full
//! request/response cycle: signing, serialization, envelope handling and
//! transport failures.

mod domains;
mod mail;
mod transport;

use sendclean_client::{SendCleanClient, SendCleanConfig};
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

pub const OWNER_ID: &str = "owner-it";
pub const TOKEN: &str = "sc_integration_token_42";

/// Helper to start a mock server
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at `server`, optionally with a timeout
pub fn client_for(server: &MockServer, timeout: Option<Duration>) -> SendCleanClient {
    let mut builder = SendCleanConfig::builder()
        .credentials(OWNER_ID, TOKEN)
        .expect("credentials")
        .base_url(&format!("{}/v1.0", server.uri()))
        .expect("base url");
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    SendCleanClient::new(builder.build().expect("config")).expect("client")
}

/// Helper matching a signed JSON POST to `endpoint_path`
pub fn signed_post(endpoint_path: &str) -> MockBuilder {
    Mock::given(method("POST"))
        .and(path(format!("/v1.0/{endpoint_path}")))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(serde_json::json!({
            "token": TOKEN,
            "owner_id": OWNER_ID
        })))
}

/// Helper to create success response templates
pub fn success_response(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}
