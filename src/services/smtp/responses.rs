//! Response types for the SMTP service.

use secrecy::SecretString;
use serde::Deserialize;

/// Response from adding an SMTP user
#[derive(Debug, Clone, Deserialize)]
pub struct AddSmtpUserResponse {
    /// Provider message
    #[serde(default)]
    pub message: String,
    /// Generated user name
    pub smtp_user_name: String,
    /// Generated password
    pub smtp_password: SecretString,
}

/// Response from resetting an SMTP password
#[derive(Debug, Clone, Deserialize)]
pub struct ResetSmtpPasswordResponse {
    /// Provider message
    #[serde(default)]
    pub message: String,
    /// User whose password changed
    #[serde(default)]
    pub smtp_user_name: Option<String>,
    /// New password, when returned
    #[serde(default)]
    pub smtp_password: Option<SecretString>,
}

/// An SMTP user as listed by the provider
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SmtpUser {
    /// User name
    pub smtp_user_name: String,
    /// Hourly limit, if one is set
    #[serde(default)]
    pub hourly_limit: Option<u64>,
    /// Total limit, if one is set
    #[serde(default)]
    pub total_limit: Option<u64>,
    /// Account status
    #[serde(default)]
    pub status: String,
}
