//! Service implementations for SendClean API endpoints.
//!
//! Each service module provides methods for one category of endpoints. All
//! of them funnel through [`ApiExecutor`], which signs the parameters, posts
//! them and interprets the response envelope.

pub mod account;
pub mod domains;
pub mod mail;
pub mod smtp;
pub mod webhooks;

pub use account::AccountService;
pub use domains::DomainsService;
pub use mail::MailService;
pub use smtp::SmtpService;
pub use webhooks::WebhooksService;

use crate::auth::RequestSigner;
use crate::config::SendCleanConfig;
use crate::endpoints::Endpoint;
use crate::envelope;
use crate::errors::{RequestError, SendCleanResult};
use crate::transport::{HttpTransport, TransportRequest};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Shared request path for every operation
#[derive(Clone)]
pub struct ApiExecutor {
    transport: Arc<dyn HttpTransport>,
    signer: RequestSigner,
    config: Arc<SendCleanConfig>,
}

impl ApiExecutor {
    /// Create a new executor
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        signer: RequestSigner,
        config: Arc<SendCleanConfig>,
    ) -> Self {
        Self {
            transport,
            signer,
            config,
        }
    }

    /// Sign `params`, post them to `endpoint` and return the success payload
    #[instrument(skip(self, params), fields(operation = %endpoint))]
    pub async fn execute<P>(&self, endpoint: Endpoint, params: &P) -> SendCleanResult<Value>
    where
        P: Serialize + Sync + ?Sized,
    {
        let body = self.signer.sign(params)?;
        let url = self.config.endpoint_url(endpoint);
        let request = TransportRequest::post(url, body).with_headers(&self.config.default_headers);

        let envelope = self.transport.send(request).await?;
        let payload = envelope::interpret(envelope)?;
        debug!("Operation succeeded");
        Ok(payload)
    }

    /// [`execute`](Self::execute) and deserialize the whole payload
    pub async fn execute_as<P, R>(&self, endpoint: Endpoint, params: &P) -> SendCleanResult<R>
    where
        P: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        let payload = self.execute(endpoint, params).await?;
        envelope::interpret_as(payload)
    }

    /// [`execute`](Self::execute) and deserialize one field of the payload
    pub async fn execute_field<P, R>(
        &self,
        endpoint: Endpoint,
        params: &P,
        field: &str,
    ) -> SendCleanResult<R>
    where
        P: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        let mut payload = self.execute(endpoint, params).await?;
        envelope::extract(&mut payload, field)
    }
}

impl std::fmt::Debug for ApiExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiExecutor")
            .field("signer", &self.signer)
            .field("base_url", &self.config.base_url.as_str())
            .finish()
    }
}

/// Fail with [`RequestError::MissingArgument`] if `value` is blank
pub(crate) fn require(field: &'static str, value: &str) -> Result<(), RequestError> {
    if value.trim().is_empty() {
        return Err(RequestError::MissingArgument { field });
    }
    Ok(())
}

/// Fail with [`RequestError::InvalidArgument`] if `value` is zero
pub(crate) fn require_positive(field: &'static str, value: u64) -> Result<(), RequestError> {
    if value == 0 {
        return Err(RequestError::InvalidArgument {
            field,
            message: "must be a positive number".to_string(),
        });
    }
    Ok(())
}

/// Parameters carrying a single domain name
#[derive(Debug, Clone, Serialize)]
pub(crate) struct DomainParams<'a> {
    pub domain: &'a str,
}

/// Parameters carrying a single webhook id
#[derive(Debug, Clone, Serialize)]
pub(crate) struct WebhookIdParams<'a> {
    pub webhook_id: &'a str,
}

/// Parameters carrying a single SMTP user name
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SmtpUserParams<'a> {
    pub smtp_user_name: &'a str,
}
