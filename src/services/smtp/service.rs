//! SMTP service implementation.

use super::*;
use crate::endpoints::Endpoint;
use crate::errors::SendCleanResult;
use crate::services::{require, ApiExecutor, SmtpUserParams};
use crate::types::Acknowledgement;
use async_trait::async_trait;
use tracing::instrument;

/// Trait for SMTP service operations
#[async_trait]
pub trait SmtpServiceTrait: Send + Sync {
    /// Create an SMTP user with the given limits
    async fn add_user(&self, hourly_limit: u64, total_limit: u64)
        -> SendCleanResult<AddSmtpUserResponse>;

    /// Update limits or status of an SMTP user
    async fn update_user(&self, request: UpdateSmtpUserRequest) -> SendCleanResult<Acknowledgement>;

    /// Reset the password of an SMTP user
    async fn reset_password(&self, smtp_user_name: &str)
        -> SendCleanResult<ResetSmtpPasswordResponse>;

    /// List all SMTP users
    async fn list_users(&self) -> SendCleanResult<Vec<SmtpUser>>;
}

/// SMTP service implementation
#[derive(Debug, Clone)]
pub struct SmtpService {
    executor: ApiExecutor,
}

impl SmtpService {
    /// Create a new SMTP service
    pub fn new(executor: ApiExecutor) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl SmtpServiceTrait for SmtpService {
    #[instrument(skip(self))]
    async fn add_user(
        &self,
        hourly_limit: u64,
        total_limit: u64,
    ) -> SendCleanResult<AddSmtpUserResponse> {
        let request = AddSmtpUserRequest::new(hourly_limit, total_limit);
        request.validate()?;
        self.executor
            .execute_as(Endpoint::AddSmtpUser, &request)
            .await
    }

    #[instrument(skip(self), fields(smtp_user_name = %request.smtp_user_name))]
    async fn update_user(&self, request: UpdateSmtpUserRequest) -> SendCleanResult<Acknowledgement> {
        request.validate()?;
        self.executor
            .execute_as(Endpoint::UpdateSmtpUser, &request)
            .await
    }

    #[instrument(skip(self))]
    async fn reset_password(
        &self,
        smtp_user_name: &str,
    ) -> SendCleanResult<ResetSmtpPasswordResponse> {
        require("smtp_user_name", smtp_user_name)?;
        self.executor
            .execute_as(Endpoint::ResetSmtpPassword, &SmtpUserParams { smtp_user_name })
            .await
    }

    #[instrument(skip(self))]
    async fn list_users(&self) -> SendCleanResult<Vec<SmtpUser>> {
        self.executor
            .execute_field(Endpoint::ListSmtpUsers, &(), "smtp_list")
            .await
    }
}
