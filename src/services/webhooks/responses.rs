//! Response types for the webhook service.

use crate::types::{optional_scalar_string, string_or_number, DecomposedDuration, EpochMicros};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A webhook as listed by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Webhook {
    /// Webhook id
    pub webhook_id: String,
    /// Callback URL
    pub url: String,
    /// Subscribed events
    pub event: Option<String>,
    /// Description
    pub description: Option<String>,
    /// Delivery log flag as sent
    pub store_log: Option<String>,
    /// Creation time broken into units
    pub create_date: DecomposedDuration,
    /// Creation time as sent
    pub created: EpochMicros,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawWebhook {
    #[serde(deserialize_with = "string_or_number")]
    webhook_id: String,
    url: String,
    #[serde(default)]
    event: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar_string")]
    store_log: Option<String>,
    create_date: EpochMicros,
}

impl From<RawWebhook> for Webhook {
    fn from(raw: RawWebhook) -> Self {
        Self {
            webhook_id: raw.webhook_id,
            url: raw.url,
            event: raw.event,
            description: raw.description,
            store_log: raw.store_log,
            create_date: raw.create_date.decompose(),
            created: raw.create_date,
        }
    }
}

/// Details of a single webhook
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WebhookInfo {
    /// Callback URL
    #[serde(default)]
    pub url: Option<String>,
    /// Subscribed events
    #[serde(default)]
    pub event: Option<String>,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Delivery log flag as sent
    #[serde(default, deserialize_with = "optional_scalar_string")]
    pub store_log: Option<String>,
    /// Creation time as sent
    #[serde(default, rename = "create_date")]
    pub created: Option<EpochMicros>,
    /// Remaining fields, kept as sent
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WebhookInfo {
    /// Creation time broken into units
    pub fn create_date(&self) -> Option<DecomposedDuration> {
        self.created.map(|c| c.decompose())
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResetKeyResponse {
    pub key: String,
}
