//! Integration tests for transport failures

use super::*;
use sendclean_client::errors::{ResponseError, TransportError};
use sendclean_client::services::webhooks::WebhooksServiceTrait;
use sendclean_client::{Endpoint, SendCleanError};
use serde_json::json;

#[tokio::test]
async fn test_non_json_body_is_malformed_and_not_retried() {
    let server = setup_mock_server().await;

    signed_post("webhook/listWebhooks")
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let err = client.webhooks().list().await.unwrap_err();

    assert!(matches!(
        err,
        SendCleanError::Response(ResponseError::MalformedJson { .. })
    ));
}

#[tokio::test]
async fn test_timeout_when_configured() {
    let server = setup_mock_server().await;

    signed_post("webhook/listWebhooks")
        .respond_with(
            success_response(json!({"status": "success", "webhook_list": []}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, Some(Duration::from_millis(50)));
    let err = client.webhooks().list().await.unwrap_err();

    assert!(matches!(err, SendCleanError::Transport(TransportError::Timeout)));
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let config = SendCleanConfig::builder()
        .credentials(OWNER_ID, TOKEN)
        .unwrap()
        .base_url(&format!("http://127.0.0.1:{port}/v1.0"))
        .unwrap()
        .build()
        .unwrap();
    let client = SendCleanClient::new(config).unwrap();

    let err = client.call(Endpoint::ListWebhooks, &()).await.unwrap_err();
    assert!(matches!(err, SendCleanError::Transport(_)));
}

#[tokio::test]
async fn test_raw_call_returns_payload() {
    let server = setup_mock_server().await;

    signed_post("webhook/keyResetWebhook")
        .and(body_partial_json(json!({"webhook_id": "17"})))
        .respond_with(success_response(json!({"status": "success", "key": "k-new"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let payload = client
        .call(Endpoint::ResetWebhookKey, &json!({"webhook_id": "17"}))
        .await
        .unwrap();
    assert_eq!(payload["key"], "k-new");
}
