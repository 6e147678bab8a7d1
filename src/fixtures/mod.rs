//! Test fixtures for SendClean API responses.
//!
//! Provides realistic envelopes as the provider returns them.

use crate::types::{STATUS_ERROR, STATUS_SUCCESS};
use serde_json::{json, Value};

/// Owner id used across fixtures
pub const OWNER_ID: &str = "owner-4f2a";

/// Token used across fixtures
pub const TOKEN: &str = "sc_test_token_0123456789";

/// 2023-11-14T22:13:20.123456Z in microseconds
pub const CREATE_DATE_MICROS: u64 = 1_700_000_000_123_456;

/// Envelope listing two SMTP users
pub fn smtp_list() -> Value {
    json!({
        "status": STATUS_SUCCESS,
        "message": "SMTP users fetched",
        "smtp_list": [
            {"smtp_user_name": "smtp-a1", "hourly_limit": 100, "total_limit": 5000, "status": "active"},
            {"smtp_user_name": "smtp-b2", "status": "inactive"}
        ]
    })
}

/// Envelope for a newly created SMTP user
pub fn smtp_user_created() -> Value {
    json!({
        "status": STATUS_SUCCESS,
        "message": "SMTP user created",
        "smtp_user_name": "smtp-a1",
        "smtp_password": "p4ssw0rd-generated"
    })
}

/// Envelope listing one sending domain
pub fn sending_domain_list() -> Value {
    json!({
        "status": STATUS_SUCCESS,
        "message": "Domains fetched",
        "sending_domain_list": [{
            "domain": "mail.example.com",
            "create_date": CREATE_DATE_MICROS,
            "verify_domain": {"valid": true},
            "spf": {"valid": true},
            "dkim": {"valid": false}
        }]
    })
}

/// Envelope listing one tracking domain
pub fn tracking_domain_list() -> Value {
    json!({
        "status": STATUS_SUCCESS,
        "message": "Domains fetched",
        "tracking_domain_list": [
            {"domain": "track.example.com", "create_date": 1_000_000, "cname": {"valid": true}},
            {"domain": "click.example.com", "create_date": "90061500000"}
        ]
    })
}

/// Envelope for a sending domain DNS check
pub fn check_sending_domain() -> Value {
    json!({
        "status": STATUS_SUCCESS,
        "domain": "mail.example.com",
        "spf": {"valid": true},
        "dkim": {"valid": true},
        "valid_signing": "true"
    })
}

/// Envelope listing webhooks, one with a numeric id
pub fn webhook_list() -> Value {
    json!({
        "status": STATUS_SUCCESS,
        "message": "Webhooks fetched",
        "webhook_list": [
            {
                "webhook_id": 17,
                "url": "https://hooks.example.com/sc",
                "event": "open,click",
                "description": "Opens and clicks",
                "store_log": "yes",
                "create_date": 86_400_000_000u64
            },
            {
                "webhook_id": "wh-18",
                "url": "https://hooks.example.com/bounce",
                "create_date": 0
            }
        ]
    })
}

/// Envelope with details of one webhook
pub fn webhook_data() -> Value {
    json!({
        "status": STATUS_SUCCESS,
        "webhook_data": {
            "url": "https://hooks.example.com/sc",
            "event": "open",
            "store_log": false,
            "create_date": 3_600_000_000u64,
            "auth_key": "k-123"
        }
    })
}

/// Envelope with account details
pub fn user_data() -> Value {
    json!({
        "status": STATUS_SUCCESS,
        "user_data": {
            "email": "owner@example.com",
            "plan": "pro",
            "credits": 12000
        }
    })
}

/// Envelope acknowledging a sent message
pub fn mail_sent() -> Value {
    json!({
        "status": STATUS_SUCCESS,
        "message": "Mail queued",
        "mail_id": "m-9"
    })
}

/// Error envelope with the given type tag
pub fn error_envelope(error_type: &str, message: &str) -> Value {
    json!({
        "status": STATUS_ERROR,
        "type": error_type,
        "message": message
    })
}
