//! Request types for the webhook service.

use crate::errors::RequestError;
use crate::services::require;
use serde::Serialize;

/// Request to register a webhook
#[derive(Debug, Clone, Serialize)]
pub struct AddWebhookRequest {
    /// Callback URL
    pub url: String,
    /// Event names to deliver, comma separated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Delivery log flag, sent as text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_log: Option<String>,
}

impl AddWebhookRequest {
    /// Create a new request
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            event: None,
            description: None,
            store_log: None,
        }
    }

    /// Set the events
    pub fn event(mut self, event: impl Into<String>) -> Self {
        self.event = Some(event.into());
        self
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the delivery log flag, e.g. `"yes"`
    pub fn store_log(mut self, store_log: impl Into<String>) -> Self {
        self.store_log = Some(store_log.into());
        self
    }

    pub(crate) fn validate(&self) -> Result<(), RequestError> {
        require("url", &self.url)
    }
}

/// Request to change an existing webhook
#[derive(Debug, Clone, Serialize)]
pub struct EditWebhookRequest {
    /// Webhook to change
    pub webhook_id: String,
    /// Callback URL
    pub url: String,
    /// Event names to deliver, comma separated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Delivery log flag, sent as text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_log: Option<String>,
}

impl EditWebhookRequest {
    /// Create a new request
    pub fn new(webhook_id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            webhook_id: webhook_id.into(),
            url: url.into(),
            event: None,
            description: None,
            store_log: None,
        }
    }

    /// Set the events
    pub fn event(mut self, event: impl Into<String>) -> Self {
        self.event = Some(event.into());
        self
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the delivery log flag, e.g. `"yes"`
    pub fn store_log(mut self, store_log: impl Into<String>) -> Self {
        self.store_log = Some(store_log.into());
        self
    }

    pub(crate) fn validate(&self) -> Result<(), RequestError> {
        require("webhook_id", &self.webhook_id)?;
        require("url", &self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_request_skips_unset_fields() {
        let request = AddWebhookRequest::new("https://hooks.example.com/sc");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"url": "https://hooks.example.com/sc"})
        );
    }

    #[test]
    fn test_edit_request_serialization() {
        let request = EditWebhookRequest::new("17", "https://hooks.example.com/sc")
            .event("open,click")
            .store_log("yes");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "webhook_id": "17",
                "url": "https://hooks.example.com/sc",
                "event": "open,click",
                "store_log": "yes"
            })
        );
    }

    #[test]
    fn test_validation() {
        assert!(AddWebhookRequest::new(" ").validate().is_err());
        assert!(matches!(
            EditWebhookRequest::new("", "https://hooks.example.com").validate(),
            Err(RequestError::MissingArgument { field: "webhook_id" })
        ));
        assert!(matches!(
            EditWebhookRequest::new("17", "").validate(),
            Err(RequestError::MissingArgument { field: "url" })
        ));
    }
}
