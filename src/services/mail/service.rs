//! Mail service implementation.

use super::*;
use crate::endpoints::Endpoint;
use crate::errors::SendCleanResult;
use crate::services::ApiExecutor;
use async_trait::async_trait;
use tracing::instrument;

/// Trait for mail service operations
#[async_trait]
pub trait MailServiceTrait: Send + Sync {
    /// Send a message
    async fn send(&self, request: SendMailRequest) -> SendCleanResult<SendMailResponse>;

    /// Send a message rendered from a template
    async fn send_template(&self, request: SendTemplateRequest)
        -> SendCleanResult<SendMailResponse>;
}

/// Mail service implementation
#[derive(Debug, Clone)]
pub struct MailService {
    executor: ApiExecutor,
}

impl MailService {
    /// Create a new mail service
    pub fn new(executor: ApiExecutor) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl MailServiceTrait for MailService {
    #[instrument(skip(self, request), fields(
        smtp_user_name = %request.smtp_user_name,
        recipients = request.message.to.len()
    ))]
    async fn send(&self, request: SendMailRequest) -> SendCleanResult<SendMailResponse> {
        request.validate()?;
        self.executor.execute_as(Endpoint::SendMail, &request).await
    }

    #[instrument(skip(self, request), fields(
        smtp_user_name = %request.smtp_user_name,
        template_id = %request.message.template_id
    ))]
    async fn send_template(
        &self,
        request: SendTemplateRequest,
    ) -> SendCleanResult<SendMailResponse> {
        request.validate()?;
        self.executor.execute_as(Endpoint::SendTemplate, &request).await
    }
}
