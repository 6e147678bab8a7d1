//! Service tests.

use super::{mock_client, TEST_BASE_URL};
use crate::errors::{ApiErrorKind, RequestError, ResponseError, SendCleanError, TransportError};
use crate::fixtures::{self, CREATE_DATE_MICROS, OWNER_ID, TOKEN};
use crate::mocks::MockResponse;
use crate::services::account::AccountServiceTrait;
use crate::services::domains::DomainsServiceTrait;
use crate::services::mail::{
    Attachment, MailMessage, MailServiceTrait, Recipient, SendMailRequest, SendTemplateRequest,
    TemplateMessage,
};
use crate::services::smtp::{SmtpServiceTrait, SmtpUser, UpdateSmtpUserRequest};
use crate::services::webhooks::{AddWebhookRequest, EditWebhookRequest, WebhooksServiceTrait};
use crate::types::{decompose, DecomposedDuration, EpochMicros, Validity};
use pretty_assertions::assert_eq;
use secrecy::ExposeSecret;
use serde_json::json;

fn duration(days: u64, hours: u64, minutes: u64, seconds: u64, ms: u64, us: u64) -> DecomposedDuration {
    DecomposedDuration {
        microseconds: us,
        milliseconds: ms,
        seconds,
        minutes,
        hours,
        days,
    }
}

// SMTP

#[tokio::test]
async fn test_smtp_add_user() {
    let (client, transport) = mock_client([MockResponse::json(fixtures::smtp_user_created())]);

    let response = client.smtp().add_user(100, 5000).await.unwrap();
    assert_eq!(response.smtp_user_name, "smtp-a1");
    assert_eq!(response.smtp_password.expose_secret(), "p4ssw0rd-generated");

    let request = transport.last_request().unwrap();
    assert_eq!(request.url, format!("{TEST_BASE_URL}/smtp/addSmtpUser"));
    assert_eq!(
        request.body,
        Some(json!({
            "hourly_limit": 100,
            "total_limit": 5000,
            "token": TOKEN,
            "owner_id": OWNER_ID
        }))
    );
}

#[tokio::test]
async fn test_smtp_add_user_rejects_zero_limit_without_request() {
    let (client, transport) = mock_client(Vec::<MockResponse>::new());

    let err = client.smtp().add_user(0, 5000).await.unwrap_err();
    assert!(matches!(
        err,
        SendCleanError::Request(RequestError::InvalidArgument { field: "hourly_limit", .. })
    ));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_smtp_update_user_sends_status() {
    let (client, transport) = mock_client([MockResponse::success(json!({}))]);

    let ack = client
        .smtp()
        .update_user(UpdateSmtpUserRequest::new("smtp-a1").hourly_limit(50).status("inactive"))
        .await
        .unwrap();
    assert_eq!(ack.status, "success");

    let request = transport.last_request().unwrap();
    assert_eq!(request.field("smtp_user_name"), Some(&json!("smtp-a1")));
    assert_eq!(request.field("hourly_limit"), Some(&json!(50)));
    assert_eq!(request.field("status"), Some(&json!("inactive")));
    assert_eq!(request.field("total_limit"), None);
}

#[tokio::test]
async fn test_smtp_list_users() {
    let (client, transport) = mock_client([MockResponse::json(fixtures::smtp_list())]);

    let users = client.smtp().list_users().await.unwrap();
    assert_eq!(
        users,
        vec![
            SmtpUser {
                smtp_user_name: "smtp-a1".to_string(),
                hourly_limit: Some(100),
                total_limit: Some(5000),
                status: "active".to_string(),
            },
            SmtpUser {
                smtp_user_name: "smtp-b2".to_string(),
                hourly_limit: None,
                total_limit: None,
                status: "inactive".to_string(),
            },
        ]
    );

    let request = transport.last_request().unwrap();
    assert_eq!(
        request.body,
        Some(json!({"token": TOKEN, "owner_id": OWNER_ID}))
    );
}

#[tokio::test]
async fn test_smtp_reset_password_requires_name() {
    let (client, transport) = mock_client(Vec::<MockResponse>::new());

    let err = client.smtp().reset_password("  ").await.unwrap_err();
    assert!(matches!(
        err,
        SendCleanError::Request(RequestError::MissingArgument { field: "smtp_user_name" })
    ));
    assert_eq!(transport.request_count(), 0);
}

// Domains

#[tokio::test]
async fn test_list_sending_domains_reshapes_create_date() {
    let (client, transport) = mock_client([MockResponse::json(fixtures::sending_domain_list())]);

    let domains = client.domains().list_sending().await.unwrap();
    assert_eq!(domains.len(), 1);

    let domain = &domains[0];
    assert_eq!(domain.domain, "mail.example.com");
    assert_eq!(domain.created, EpochMicros(CREATE_DATE_MICROS));
    assert_eq!(domain.create_date, decompose(CREATE_DATE_MICROS));
    assert_eq!(domain.create_date.days, 19675);
    assert_eq!(domain.create_date.hours, 22);
    assert_eq!(domain.create_date.minutes, 13);
    assert_eq!(domain.create_date.seconds, 20);
    assert_eq!(domain.create_date.milliseconds, 123);
    assert_eq!(domain.verified, Validity::new(true));
    assert_eq!(domain.spf, Validity::new(true));
    assert_eq!(domain.dkim, Validity::new(false));

    let request = transport.last_request().unwrap();
    assert_eq!(request.url, format!("{TEST_BASE_URL}/domain/listSendingDomains"));
}

#[tokio::test]
async fn test_list_tracking_domains_accepts_numeric_strings() {
    let (client, _) = mock_client([MockResponse::json(fixtures::tracking_domain_list())]);

    let domains = client.domains().list_tracking().await.unwrap();
    assert_eq!(domains.len(), 2);
    assert_eq!(domains[0].create_date, duration(0, 0, 0, 1, 0, 0));
    assert_eq!(domains[0].cname, Some(Validity::new(true)));
    assert_eq!(domains[1].create_date, duration(1, 1, 1, 1, 500, 0));
    assert_eq!(domains[1].cname, None);
}

#[tokio::test]
async fn test_check_sending_domain() {
    let (client, transport) = mock_client([MockResponse::json(fixtures::check_sending_domain())]);

    let check = client.domains().check_sending("mail.example.com").await.unwrap();
    assert_eq!(check.domain, "mail.example.com");
    assert!(check.spf.valid);
    assert!(check.dkim.valid);
    assert_eq!(check.valid_signing, "true");

    let request = transport.last_request().unwrap();
    assert_eq!(request.field("domain"), Some(&json!("mail.example.com")));
}

#[tokio::test]
async fn test_domain_operations_reject_blank_domain() {
    let (client, transport) = mock_client(Vec::<MockResponse>::new());
    let domains = client.domains();

    assert!(domains.add_sending("").await.is_err());
    assert!(domains.check_sending(" ").await.is_err());
    assert!(domains.verify_sending("").await.is_err());
    assert!(domains.delete_sending("").await.is_err());
    assert!(domains.add_tracking("").await.is_err());
    assert!(domains.check_tracking("").await.is_err());
    assert!(domains.delete_tracking("").await.is_err());
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_unit_operation_still_interprets_envelope() {
    let (client, _) = mock_client([MockResponse::api_error(
        "ValidationError",
        "Domain already exists",
    )]);

    let err = client.domains().add_sending("mail.example.com").await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.api_message(), Some("Domain already exists"));
}

#[tokio::test]
async fn test_delete_tracking_domain() {
    let (client, transport) = mock_client([MockResponse::success(json!({}))]);

    client.domains().delete_tracking("track.example.com").await.unwrap();
    let request = transport.last_request().unwrap();
    assert_eq!(request.url, format!("{TEST_BASE_URL}/domain/deleteTrackingDomain"));
}

// Webhooks

#[tokio::test]
async fn test_list_webhooks() {
    let (client, _) = mock_client([MockResponse::json(fixtures::webhook_list())]);

    let webhooks = client.webhooks().list().await.unwrap();
    assert_eq!(webhooks.len(), 2);

    assert_eq!(webhooks[0].webhook_id, "17");
    assert_eq!(webhooks[0].event.as_deref(), Some("open,click"));
    assert_eq!(webhooks[0].store_log.as_deref(), Some("yes"));
    assert_eq!(webhooks[0].create_date, duration(1, 0, 0, 0, 0, 0));

    assert_eq!(webhooks[1].webhook_id, "wh-18");
    assert_eq!(webhooks[1].description, None);
    assert_eq!(webhooks[1].create_date, DecomposedDuration::default());
}

#[tokio::test]
async fn test_webhook_info() {
    let (client, transport) = mock_client([MockResponse::json(fixtures::webhook_data())]);

    let info = client.webhooks().info("17").await.unwrap();
    assert_eq!(info.url.as_deref(), Some("https://hooks.example.com/sc"));
    assert_eq!(info.store_log.as_deref(), Some("false"));
    assert_eq!(info.create_date(), Some(duration(0, 1, 0, 0, 0, 0)));
    assert_eq!(info.extra["auth_key"], "k-123");

    let request = transport.last_request().unwrap();
    assert_eq!(request.field("webhook_id"), Some(&json!("17")));
}

#[tokio::test]
async fn test_reset_webhook_key() {
    let (client, transport) = mock_client([MockResponse::success(json!({"key": "k-new"}))]);

    let key = client.webhooks().reset_key("17").await.unwrap();
    assert_eq!(key, "k-new");

    let request = transport.last_request().unwrap();
    assert_eq!(request.url, format!("{TEST_BASE_URL}/webhook/keyResetWebhook"));
}

#[tokio::test]
async fn test_reset_webhook_key_missing_key_is_shape_error() {
    let (client, _) = mock_client([MockResponse::success(json!({}))]);

    let err = client.webhooks().reset_key("17").await.unwrap_err();
    assert!(matches!(
        err,
        SendCleanError::Response(ResponseError::UnexpectedShape { .. })
    ));
}

#[tokio::test]
async fn test_add_and_edit_webhook() {
    let (client, transport) = mock_client([
        MockResponse::success(json!({})),
        MockResponse::success(json!({})),
    ]);

    client
        .webhooks()
        .add(AddWebhookRequest::new("https://hooks.example.com/sc").event("open"))
        .await
        .unwrap();
    client
        .webhooks()
        .edit(EditWebhookRequest::new("17", "https://hooks.example.com/v2").store_log("no"))
        .await
        .unwrap();

    let requests = transport.recorded_requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].url, format!("{TEST_BASE_URL}/webhook/addWebhook"));
    assert_eq!(requests[0].field("event"), Some(&json!("open")));
    assert_eq!(requests[1].url, format!("{TEST_BASE_URL}/webhook/editWebhook"));
    assert_eq!(requests[1].field("webhook_id"), Some(&json!("17")));
    assert_eq!(requests[1].field("store_log"), Some(&json!("no")));
}

#[tokio::test]
async fn test_webhook_store_log_travels_as_text() {
    let (client, transport) = mock_client([
        MockResponse::success(json!({})),
        MockResponse::success(json!({
            "webhook_list": [
                {"webhook_id": 1, "url": "https://a.example.com", "store_log": "yes", "create_date": 0},
                {"webhook_id": 2, "url": "https://b.example.com", "store_log": false, "create_date": 0},
                {"webhook_id": 3, "url": "https://c.example.com", "create_date": 0}
            ]
        })),
    ]);

    client
        .webhooks()
        .add(AddWebhookRequest::new("https://a.example.com").store_log("yes"))
        .await
        .unwrap();
    assert_eq!(
        transport.last_request().unwrap().field("store_log"),
        Some(&json!("yes"))
    );

    let webhooks = client.webhooks().list().await.unwrap();
    let flags: Vec<Option<&str>> = webhooks.iter().map(|w| w.store_log.as_deref()).collect();
    assert_eq!(flags, vec![Some("yes"), Some("false"), None]);
}

#[tokio::test]
async fn test_webhook_operations_reject_blank_id() {
    let (client, transport) = mock_client(Vec::<MockResponse>::new());

    assert!(client.webhooks().reset_key("").await.is_err());
    assert!(client.webhooks().delete(" ").await.is_err());
    assert!(client.webhooks().info("").await.is_err());
    assert!(client
        .webhooks()
        .edit(EditWebhookRequest::new("", "https://hooks.example.com"))
        .await
        .is_err());
    assert_eq!(transport.request_count(), 0);
}

// Mail

fn welcome() -> MailMessage {
    MailMessage::new("Welcome", "hello@example.com")
        .from_name("Example")
        .text("Thanks for signing up")
        .recipient(Recipient::to("ada@example.com").with_name("Ada"))
        .recipient(Recipient::bcc("audit@example.com"))
}

#[tokio::test]
async fn test_send_mail() {
    let (client, transport) = mock_client([MockResponse::json(fixtures::mail_sent())]);

    let message = welcome().attachment(Attachment::from_bytes("notes.txt", "hi"));
    let response = client
        .mail()
        .send(SendMailRequest::new("smtp-a1", message))
        .await
        .unwrap();
    assert_eq!(response.message, "Mail queued");
    assert_eq!(response.extra["mail_id"], "m-9");

    let request = transport.last_request().unwrap();
    assert_eq!(request.url, format!("{TEST_BASE_URL}/mail/send"));
    assert_eq!(request.field("smtp_user_name"), Some(&json!("smtp-a1")));

    let message = request.field("message").unwrap();
    assert_eq!(message["subject"], "Welcome");
    assert_eq!(
        message["to"],
        json!([
            {"email": "ada@example.com", "name": "Ada", "type": ["to"]},
            {"email": "audit@example.com", "type": ["bcc"]}
        ])
    );
    assert_eq!(
        message["attachments"],
        json!([{"type": "text/plain", "name": "notes.txt", "content": "aGk="}])
    );
}

#[tokio::test]
async fn test_send_template() {
    let (client, transport) = mock_client([MockResponse::json(fixtures::mail_sent())]);

    let message = TemplateMessage::new("tpl-welcome", welcome())
        .dynamic_value(json!({"first_name": "Ada"}));
    client
        .mail()
        .send_template(SendTemplateRequest::new("smtp-a1", message))
        .await
        .unwrap();

    let request = transport.last_request().unwrap();
    assert_eq!(request.url, format!("{TEST_BASE_URL}/mail/sendTemplate"));
    let message = request.field("message").unwrap();
    assert_eq!(message["template_id"], "tpl-welcome");
    assert_eq!(message["dynamic_value"]["first_name"], "Ada");
    assert_eq!(message["from_email"], "hello@example.com");
}

#[tokio::test]
async fn test_send_mail_validation_sends_nothing() {
    let (client, transport) = mock_client(Vec::<MockResponse>::new());

    let no_recipients = MailMessage::new("Welcome", "hello@example.com");
    assert!(client
        .mail()
        .send(SendMailRequest::new("smtp-a1", no_recipients))
        .await
        .is_err());

    let err = client
        .mail()
        .send(SendMailRequest::new("smtp-a1", MailMessage::new("", "hello@example.com")))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SendCleanError::Request(RequestError::MissingArgument { field: "subject" })
    ));

    assert!(client
        .mail()
        .send_template(SendTemplateRequest::new(
            "smtp-a1",
            TemplateMessage::new(" ", welcome())
        ))
        .await
        .is_err());

    assert_eq!(transport.request_count(), 0);
}

// Account

#[tokio::test]
async fn test_user_info() {
    let (client, transport) = mock_client([MockResponse::json(fixtures::user_data())]);

    let info = client.account().user_info().await.unwrap();
    assert_eq!(info.get("plan"), Some(&json!("pro")));
    assert_eq!(info.get("credits"), Some(&json!(12000)));
    assert_eq!(info.get("missing"), None);

    let request = transport.last_request().unwrap();
    assert_eq!(request.url, format!("{TEST_BASE_URL}/user/viewUserDetail"));
}

#[tokio::test]
async fn test_user_info_missing_field_is_shape_error() {
    let (client, _) = mock_client([MockResponse::success(json!({}))]);

    let err = client.account().user_info().await.unwrap_err();
    assert_eq!(err.error_code(), "SENDCLEAN_RESPONSE");
}

// Error propagation

#[tokio::test]
async fn test_transport_error_propagates_unchanged() {
    let (client, _) = mock_client([MockResponse::error(TransportError::Timeout.into())]);

    let err = client.smtp().list_users().await.unwrap_err();
    assert!(matches!(err, SendCleanError::Transport(TransportError::Timeout)));
}

#[tokio::test]
async fn test_general_error_kind() {
    let (client, _) = mock_client([MockResponse::json(fixtures::error_envelope(
        "GeneralError",
        "Something went wrong",
    ))]);

    let err = client.webhooks().list().await.unwrap_err();
    assert_eq!(err.api_kind(), Some(ApiErrorKind::General));
}
