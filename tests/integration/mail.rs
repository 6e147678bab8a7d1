//! Integration tests for mail operations

use super::*;
use sendclean_client::services::mail::{
    MailMessage, MailServiceTrait, Recipient, SendMailRequest, SendTemplateRequest,
    TemplateMessage,
};
use serde_json::json;

fn message() -> MailMessage {
    MailMessage::new("Order shipped", "orders@example.com")
        .html("<p>Your order is on its way</p>")
        .recipient(Recipient::to("buyer@example.com").with_name("Buyer"))
        .header("X-Order", "1001")
}

#[tokio::test]
async fn test_send_mail() {
    let server = setup_mock_server().await;

    signed_post("mail/send")
        .and(body_partial_json(json!({
            "smtp_user_name": "smtp-a1",
            "message": {
                "subject": "Order shipped",
                "from_email": "orders@example.com",
                "to": [{"email": "buyer@example.com", "name": "Buyer", "type": ["to"]}],
                "headers": {"X-Order": "1001"}
            }
        })))
        .respond_with(success_response(json!({
            "status": "success",
            "message": "Mail queued"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let response = client
        .mail()
        .send(SendMailRequest::new("smtp-a1", message()))
        .await
        .unwrap();
    assert_eq!(response.message, "Mail queued");
}

#[tokio::test]
async fn test_send_template() {
    let server = setup_mock_server().await;

    signed_post("mail/sendTemplate")
        .and(body_partial_json(json!({
            "smtp_user_name": "smtp-a1",
            "message": {
                "template_id": "tpl-ship",
                "dynamic_value": {"order": 1001},
                "subject": "Order shipped"
            }
        })))
        .respond_with(success_response(json!({"status": "success", "message": "queued"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let template = TemplateMessage::new("tpl-ship", message()).dynamic_value(json!({"order": 1001}));
    client
        .mail()
        .send_template(SendTemplateRequest::new("smtp-a1", template))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_invalid_message_never_reaches_server() {
    let server = setup_mock_server().await;

    signed_post("mail/send")
        .respond_with(success_response(json!({"status": "success"})))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let err = client
        .mail()
        .send(SendMailRequest::new("", message()))
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "SENDCLEAN_REQUEST");
}
