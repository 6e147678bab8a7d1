//! Webhook service implementation.

use super::*;
use crate::endpoints::Endpoint;
use crate::errors::SendCleanResult;
use crate::services::{require, ApiExecutor, WebhookIdParams};
use async_trait::async_trait;
use tracing::instrument;

/// Trait for webhook service operations
#[async_trait]
pub trait WebhooksServiceTrait: Send + Sync {
    /// Register a webhook
    async fn add(&self, request: AddWebhookRequest) -> SendCleanResult<()>;

    /// Change an existing webhook
    async fn edit(&self, request: EditWebhookRequest) -> SendCleanResult<()>;

    /// Rotate the signing key of a webhook, returning the new key
    async fn reset_key(&self, webhook_id: &str) -> SendCleanResult<String>;

    /// List webhooks
    async fn list(&self) -> SendCleanResult<Vec<Webhook>>;

    /// Remove a webhook
    async fn delete(&self, webhook_id: &str) -> SendCleanResult<()>;

    /// Fetch details of a webhook
    async fn info(&self, webhook_id: &str) -> SendCleanResult<WebhookInfo>;
}

/// Webhook service implementation
#[derive(Debug, Clone)]
pub struct WebhooksService {
    executor: ApiExecutor,
}

impl WebhooksService {
    /// Create a new webhook service
    pub fn new(executor: ApiExecutor) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl WebhooksServiceTrait for WebhooksService {
    #[instrument(skip(self), fields(url = %request.url))]
    async fn add(&self, request: AddWebhookRequest) -> SendCleanResult<()> {
        request.validate()?;
        self.executor.execute(Endpoint::AddWebhook, &request).await?;
        Ok(())
    }

    #[instrument(skip(self), fields(webhook_id = %request.webhook_id))]
    async fn edit(&self, request: EditWebhookRequest) -> SendCleanResult<()> {
        request.validate()?;
        self.executor.execute(Endpoint::EditWebhook, &request).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn reset_key(&self, webhook_id: &str) -> SendCleanResult<String> {
        require("webhook_id", webhook_id)?;
        let response: ResetKeyResponse = self
            .executor
            .execute_as(Endpoint::ResetWebhookKey, &WebhookIdParams { webhook_id })
            .await?;
        Ok(response.key)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> SendCleanResult<Vec<Webhook>> {
        let raw: Vec<RawWebhook> = self
            .executor
            .execute_field(Endpoint::ListWebhooks, &(), "webhook_list")
            .await?;
        Ok(raw.into_iter().map(Webhook::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, webhook_id: &str) -> SendCleanResult<()> {
        require("webhook_id", webhook_id)?;
        self.executor
            .execute(Endpoint::DeleteWebhook, &WebhookIdParams { webhook_id })
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn info(&self, webhook_id: &str) -> SendCleanResult<WebhookInfo> {
        require("webhook_id", webhook_id)?;
        self.executor
            .execute_field(Endpoint::WebhookInfo, &WebhookIdParams { webhook_id }, "webhook_data")
            .await
    }
}
