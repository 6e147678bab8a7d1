//! Request types for the SMTP service.

use crate::errors::RequestError;
use crate::services::{require, require_positive};
use serde::Serialize;

/// Request to create an SMTP user
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AddSmtpUserRequest {
    /// Messages allowed per hour
    pub hourly_limit: u64,
    /// Messages allowed in total
    pub total_limit: u64,
}

impl AddSmtpUserRequest {
    /// Create a new request
    pub fn new(hourly_limit: u64, total_limit: u64) -> Self {
        Self {
            hourly_limit,
            total_limit,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), RequestError> {
        require_positive("hourly_limit", self.hourly_limit)?;
        require_positive("total_limit", self.total_limit)
    }
}

/// Request to update an SMTP user
#[derive(Debug, Clone, Serialize)]
pub struct UpdateSmtpUserRequest {
    /// User to update
    pub smtp_user_name: String,
    /// New hourly limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_limit: Option<u64>,
    /// New total limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_limit: Option<u64>,
    /// New status, e.g. `active`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl UpdateSmtpUserRequest {
    /// Create a request that changes nothing yet
    pub fn new(smtp_user_name: impl Into<String>) -> Self {
        Self {
            smtp_user_name: smtp_user_name.into(),
            hourly_limit: None,
            total_limit: None,
            status: None,
        }
    }

    /// Set the hourly limit
    pub fn hourly_limit(mut self, limit: u64) -> Self {
        self.hourly_limit = Some(limit);
        self
    }

    /// Set the total limit
    pub fn total_limit(mut self, limit: u64) -> Self {
        self.total_limit = Some(limit);
        self
    }

    /// Set the status
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub(crate) fn validate(&self) -> Result<(), RequestError> {
        require("smtp_user_name", &self.smtp_user_name)
    }
}
