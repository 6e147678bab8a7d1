//! SendClean client implementation.
//!
//! Provides the main entry point for interacting with the SendClean API.

use crate::auth::RequestSigner;
use crate::config::SendCleanConfig;
use crate::endpoints::Endpoint;
use crate::errors::{ConfigurationError, SendCleanResult};
use crate::services::{
    AccountService, ApiExecutor, DomainsService, MailService, SmtpService, WebhooksService,
};
use crate::transport::{HttpTransport, ReqwestTransport};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Main SendClean client
#[derive(Clone)]
pub struct SendCleanClient {
    config: Arc<SendCleanConfig>,
    transport: Arc<dyn HttpTransport>,
    executor: ApiExecutor,
    smtp_service: SmtpService,
    domains_service: DomainsService,
    webhooks_service: WebhooksService,
    mail_service: MailService,
    account_service: AccountService,
}

impl SendCleanClient {
    /// Create a new client with the given configuration
    pub fn new(config: SendCleanConfig) -> SendCleanResult<Self> {
        let transport = Arc::new(ReqwestTransport::new(config.timeout)?);
        Self::with_transport(config, transport)
    }

    /// Create a new client with a custom transport
    pub fn with_transport(
        config: SendCleanConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> SendCleanResult<Self> {
        config.validate()?;
        let credentials = config
            .credentials()
            .cloned()
            .ok_or(ConfigurationError::MissingCredentials)?;

        let config = Arc::new(config);
        let signer = RequestSigner::new(credentials);
        let executor = ApiExecutor::new(transport.clone(), signer, config.clone());

        Ok(Self {
            smtp_service: SmtpService::new(executor.clone()),
            domains_service: DomainsService::new(executor.clone()),
            webhooks_service: WebhooksService::new(executor.clone()),
            mail_service: MailService::new(executor.clone()),
            account_service: AccountService::new(executor.clone()),
            config,
            transport,
            executor,
        })
    }

    /// Create a client for the default endpoint from an owner id and token
    pub fn from_credentials(
        owner_id: impl Into<String>,
        token: impl Into<String>,
    ) -> SendCleanResult<Self> {
        let config = SendCleanConfig::builder()
            .credentials(owner_id, token)?
            .build()?;
        Self::new(config)
    }

    /// Get the configuration
    pub fn config(&self) -> &SendCleanConfig {
        &self.config
    }

    /// Get a reference to the HTTP transport
    pub fn transport(&self) -> &Arc<dyn HttpTransport> {
        &self.transport
    }

    /// Get the SMTP user service
    pub fn smtp(&self) -> &SmtpService {
        &self.smtp_service
    }

    /// Get the domain service
    pub fn domains(&self) -> &DomainsService {
        &self.domains_service
    }

    /// Get the webhook service
    pub fn webhooks(&self) -> &WebhooksService {
        &self.webhooks_service
    }

    /// Get the mail service
    pub fn mail(&self) -> &MailService {
        &self.mail_service
    }

    /// Get the account service
    pub fn account(&self) -> &AccountService {
        &self.account_service
    }

    /// Call an endpoint with arbitrary parameters and return the raw payload.
    ///
    /// The parameters are signed and the envelope interpreted exactly as for
    /// the typed operations, but no argument validation takes place.
    pub async fn call<P>(&self, endpoint: Endpoint, params: &P) -> SendCleanResult<Value>
    where
        P: Serialize + Sync + ?Sized,
    {
        self.executor.execute(endpoint, params).await
    }
}

impl std::fmt::Debug for SendCleanClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SendCleanClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
