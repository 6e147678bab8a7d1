//! Domain service implementation.

use super::*;
use crate::endpoints::Endpoint;
use crate::errors::SendCleanResult;
use crate::services::{require, ApiExecutor, DomainParams};
use crate::types::Acknowledgement;
use async_trait::async_trait;
use tracing::instrument;

/// Trait for domain service operations
#[async_trait]
pub trait DomainsServiceTrait: Send + Sync {
    /// Register a sending domain
    async fn add_sending(&self, domain: &str) -> SendCleanResult<()>;

    /// Check SPF and DKIM records of a sending domain
    async fn check_sending(&self, domain: &str) -> SendCleanResult<CheckSendingDomainResponse>;

    /// Verify ownership of a sending domain
    async fn verify_sending(&self, domain: &str) -> SendCleanResult<Acknowledgement>;

    /// List sending domains
    async fn list_sending(&self) -> SendCleanResult<Vec<SendingDomain>>;

    /// Remove a sending domain
    async fn delete_sending(&self, domain: &str) -> SendCleanResult<()>;

    /// Register a tracking domain
    async fn add_tracking(&self, domain: &str) -> SendCleanResult<()>;

    /// Check the CNAME record of a tracking domain
    async fn check_tracking(&self, domain: &str) -> SendCleanResult<CheckTrackingDomainResponse>;

    /// List tracking domains
    async fn list_tracking(&self) -> SendCleanResult<Vec<TrackingDomain>>;

    /// Remove a tracking domain
    async fn delete_tracking(&self, domain: &str) -> SendCleanResult<()>;
}

/// Domain service implementation
#[derive(Debug, Clone)]
pub struct DomainsService {
    executor: ApiExecutor,
}

impl DomainsService {
    /// Create a new domain service
    pub fn new(executor: ApiExecutor) -> Self {
        Self { executor }
    }

    async fn post_domain(&self, endpoint: Endpoint, domain: &str) -> SendCleanResult<serde_json::Value> {
        require("domain", domain)?;
        self.executor
            .execute(endpoint, &DomainParams { domain })
            .await
    }
}

#[async_trait]
impl DomainsServiceTrait for DomainsService {
    #[instrument(skip(self))]
    async fn add_sending(&self, domain: &str) -> SendCleanResult<()> {
        self.post_domain(Endpoint::AddSendingDomain, domain).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn check_sending(&self, domain: &str) -> SendCleanResult<CheckSendingDomainResponse> {
        let payload = self.post_domain(Endpoint::CheckSendingDomain, domain).await?;
        crate::envelope::interpret_as(payload)
    }

    #[instrument(skip(self))]
    async fn verify_sending(&self, domain: &str) -> SendCleanResult<Acknowledgement> {
        let payload = self.post_domain(Endpoint::VerifySendingDomain, domain).await?;
        crate::envelope::interpret_as(payload)
    }

    #[instrument(skip(self))]
    async fn list_sending(&self) -> SendCleanResult<Vec<SendingDomain>> {
        let raw: Vec<RawSendingDomain> = self
            .executor
            .execute_field(Endpoint::ListSendingDomains, &(), "sending_domain_list")
            .await?;
        Ok(raw.into_iter().map(SendingDomain::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete_sending(&self, domain: &str) -> SendCleanResult<()> {
        self.post_domain(Endpoint::DeleteSendingDomain, domain).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn add_tracking(&self, domain: &str) -> SendCleanResult<()> {
        self.post_domain(Endpoint::AddTrackingDomain, domain).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn check_tracking(&self, domain: &str) -> SendCleanResult<CheckTrackingDomainResponse> {
        let payload = self.post_domain(Endpoint::CheckTrackingDomain, domain).await?;
        crate::envelope::interpret_as(payload)
    }

    #[instrument(skip(self))]
    async fn list_tracking(&self) -> SendCleanResult<Vec<TrackingDomain>> {
        let raw: Vec<RawTrackingDomain> = self
            .executor
            .execute_field(Endpoint::ListTrackingDomains, &(), "tracking_domain_list")
            .await?;
        Ok(raw.into_iter().map(TrackingDomain::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete_tracking(&self, domain: &str) -> SendCleanResult<()> {
        self.post_domain(Endpoint::DeleteTrackingDomain, domain).await?;
        Ok(())
    }
}
