//! Integration tests for domain and account operations

use super::*;
use sendclean_client::services::account::AccountServiceTrait;
use sendclean_client::services::domains::DomainsServiceTrait;
use sendclean_client::services::smtp::SmtpServiceTrait;
use sendclean_client::{ApiErrorKind, SendCleanError};
use serde_json::json;

#[tokio::test]
async fn test_list_sending_domains() {
    let server = setup_mock_server().await;

    signed_post("domain/listSendingDomains")
        .respond_with(success_response(json!({
            "status": "success",
            "message": "Domains fetched",
            "sending_domain_list": [{
                "domain": "mail.example.com",
                "create_date": 90_061_500_000u64,
                "verify_domain": {"valid": true},
                "spf": {"valid": false},
                "dkim": {"valid": true}
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let domains = client.domains().list_sending().await.unwrap();

    assert_eq!(domains.len(), 1);
    let created = domains[0].create_date;
    assert_eq!(
        (created.days, created.hours, created.minutes, created.seconds, created.milliseconds),
        (1, 1, 1, 1, 500)
    );
    assert!(domains[0].verified.valid);
    assert!(!domains[0].spf.valid);
}

#[tokio::test]
async fn test_add_sending_domain_sends_domain() {
    let server = setup_mock_server().await;

    signed_post("domain/addSendingDomain")
        .and(body_partial_json(json!({"domain": "mail.example.com"})))
        .respond_with(success_response(json!({"status": "success", "message": "added"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    client.domains().add_sending("mail.example.com").await.unwrap();
}

#[tokio::test]
async fn test_authentication_error() {
    let server = setup_mock_server().await;

    signed_post("smtp/listSmtpUsers")
        .respond_with(success_response(json!({
            "status": "error",
            "type": "AuthenticationError",
            "message": "bad token"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let err = client.smtp().list_users().await.unwrap_err();

    match err {
        SendCleanError::Api(api) => {
            assert_eq!(api.kind, ApiErrorKind::Authentication);
            assert_eq!(api.message, "bad token");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_envelope_on_http_error_status() {
    let server = setup_mock_server().await;

    signed_post("user/viewUserDetail")
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "status": "error",
            "type": "ValidationError",
            "message": "owner_id is invalid"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let err = client.account().user_info().await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.api_message(), Some("owner_id is invalid"));
}

#[tokio::test]
async fn test_user_info() {
    let server = setup_mock_server().await;

    signed_post("user/viewUserDetail")
        .respond_with(success_response(json!({
            "status": "success",
            "user_data": {"email": "owner@example.com", "plan": "pro"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let info = client.account().user_info().await.unwrap();
    assert_eq!(info.get("email"), Some(&json!("owner@example.com")));
}
