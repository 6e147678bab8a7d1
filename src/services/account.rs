//! Account service for the SendClean API.

use crate::endpoints::Endpoint;
use crate::errors::SendCleanResult;
use crate::services::ApiExecutor;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::instrument;

/// Account details as returned by the provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserInfo(pub Map<String, Value>);

impl UserInfo {
    /// Look up a field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

/// Trait for account service operations
#[async_trait]
pub trait AccountServiceTrait: Send + Sync {
    /// Fetch details of the authenticated account
    async fn user_info(&self) -> SendCleanResult<UserInfo>;
}

/// Account service implementation
#[derive(Debug, Clone)]
pub struct AccountService {
    executor: ApiExecutor,
}

impl AccountService {
    /// Create a new account service
    pub fn new(executor: ApiExecutor) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl AccountServiceTrait for AccountService {
    #[instrument(skip(self))]
    async fn user_info(&self) -> SendCleanResult<UserInfo> {
        self.executor
            .execute_field(Endpoint::UserDetail, &(), "user_data")
            .await
    }
}
