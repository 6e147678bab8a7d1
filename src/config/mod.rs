//! Configuration management for the SendClean client.
//!
//! Supports configuration via:
//! - Explicit values
//! - Environment variables
//! - Builder pattern

use crate::auth::Credentials;
use crate::endpoints::Endpoint;
use crate::errors::{ConfigurationError, SendCleanResult};
use http::header::{HeaderName, HeaderValue};
use http::HeaderMap;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Environment variable holding the owner id
pub const ENV_OWNER_ID: &str = "SENDCLEAN_OWNER_ID";
/// Environment variable holding the API token
pub const ENV_TOKEN: &str = "SENDCLEAN_TOKEN";
/// Environment variable overriding the base URL
pub const ENV_BASE_URL: &str = "SENDCLEAN_BASE_URL";
/// Environment variable setting a request timeout in seconds
pub const ENV_TIMEOUT: &str = "SENDCLEAN_TIMEOUT";

/// Configuration for the SendClean client
#[derive(Clone)]
pub struct SendCleanConfig {
    /// Credential pair attached to every request
    pub(crate) credentials: Option<Arc<Credentials>>,
    /// Base URL for API requests
    pub base_url: Url,
    /// Per-endpoint absolute URL overrides
    pub endpoint_overrides: HashMap<Endpoint, Url>,
    /// Request timeout; `None` leaves requests unbounded
    pub timeout: Option<Duration>,
    /// Headers sent with every request
    pub default_headers: HeaderMap,
}

impl std::fmt::Debug for SendCleanConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SendCleanConfig")
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url.as_str())
            .field("endpoint_overrides", &self.endpoint_overrides.len())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for SendCleanConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            base_url: default_base_url(),
            endpoint_overrides: HashMap::new(),
            timeout: None,
            default_headers: HeaderMap::new(),
        }
    }
}

fn default_base_url() -> Url {
    match Url::parse(crate::DEFAULT_BASE_URL) {
        Ok(url) => url,
        Err(e) => unreachable!("DEFAULT_BASE_URL is a valid URL: {e}"),
    }
}

impl SendCleanConfig {
    /// Create a new configuration builder
    pub fn builder() -> SendCleanConfigBuilder {
        SendCleanConfigBuilder::new()
    }

    /// Create configuration from environment variables
    pub fn from_env() -> SendCleanResult<Self> {
        let owner_id = std::env::var(ENV_OWNER_ID)
            .map_err(|_| ConfigurationError::EnvVar(format!("{ENV_OWNER_ID} is not set")))?;
        let token = std::env::var(ENV_TOKEN)
            .map_err(|_| ConfigurationError::EnvVar(format!("{ENV_TOKEN} is not set")))?;

        let mut builder = SendCleanConfigBuilder::new().credentials(owner_id, token)?;

        if let Ok(url) = std::env::var(ENV_BASE_URL) {
            builder = builder.base_url(&url)?;
        }

        if let Ok(timeout) = std::env::var(ENV_TIMEOUT) {
            let secs = timeout.parse::<u64>().map_err(|_| {
                ConfigurationError::EnvVar(format!("{ENV_TIMEOUT} must be whole seconds"))
            })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    /// Get the credentials if set
    pub fn credentials(&self) -> Option<&Arc<Credentials>> {
        self.credentials.as_ref()
    }

    /// Resolve the absolute URL for an endpoint
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        if let Some(url) = self.endpoint_overrides.get(&endpoint) {
            return url.to_string();
        }
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{}/{}", base, endpoint.path())
    }

    /// Validate the configuration
    pub fn validate(&self) -> SendCleanResult<()> {
        if self.credentials.is_none() {
            return Err(ConfigurationError::MissingCredentials.into());
        }
        Ok(())
    }
}

/// Builder for SendCleanConfig
#[derive(Default)]
pub struct SendCleanConfigBuilder {
    config: SendCleanConfig,
}

impl SendCleanConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: SendCleanConfig::default(),
        }
    }

    /// Set the owner id and token
    pub fn credentials(
        mut self,
        owner_id: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        self.config.credentials = Some(Arc::new(Credentials::new(owner_id, token)?));
        Ok(self)
    }

    /// Set the base URL
    pub fn base_url(mut self, url: &str) -> Result<Self, ConfigurationError> {
        self.config.base_url = parse_url(url)?;
        Ok(self)
    }

    /// Point one endpoint at an absolute URL
    pub fn endpoint(mut self, endpoint: Endpoint, url: &str) -> Result<Self, ConfigurationError> {
        self.config.endpoint_overrides.insert(endpoint, parse_url(url)?);
        Ok(self)
    }

    /// Bound every request by a timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Add a header sent with every request
    pub fn default_header(mut self, name: &str, value: &str) -> Result<Self, ConfigurationError> {
        let invalid = |message: String| ConfigurationError::InvalidHeader {
            name: name.to_string(),
            message,
        };
        let header_name = name
            .parse::<HeaderName>()
            .map_err(|e| invalid(e.to_string()))?;
        let header_value = value
            .parse::<HeaderValue>()
            .map_err(|e| invalid(e.to_string()))?;
        self.config.default_headers.insert(header_name, header_value);
        Ok(self)
    }

    /// Build the configuration
    pub fn build(self) -> SendCleanResult<SendCleanConfig> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Build the configuration without validation (for testing)
    pub fn build_unchecked(self) -> SendCleanConfig {
        self.config
    }
}

fn parse_url(url: &str) -> Result<Url, ConfigurationError> {
    Url::parse(url).map_err(|e| ConfigurationError::InvalidUrl {
        url: url.to_string(),
        message: e.to_string(),
    })
}
