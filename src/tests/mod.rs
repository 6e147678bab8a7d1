//! Tests for the SendClean API client.

use crate::client::SendCleanClient;
use crate::config::SendCleanConfig;
use crate::fixtures::{OWNER_ID, TOKEN};
use crate::mocks::{MockHttpTransport, MockResponse};
use std::sync::Arc;


#[cfg(test)]
mod services_tests;

pub(crate) const TEST_BASE_URL: &str = "https://api.sendclean.test/v1.0";

/// Client wired to a mock transport that answers with `responses` in order
pub(crate) fn mock_client(
    responses: impl IntoIterator<Item = MockResponse>,
) -> (SendCleanClient, Arc<MockHttpTransport>) {
    let transport = Arc::new(MockHttpTransport::new().add_responses(responses));
    let config = SendCleanConfig::builder()
        .credentials(OWNER_ID, TOKEN)
        .unwrap()
        .base_url(TEST_BASE_URL)
        .unwrap()
        .build()
        .unwrap();
    let client = SendCleanClient::with_transport(config, transport.clone()).unwrap();
    (client, transport)
}
