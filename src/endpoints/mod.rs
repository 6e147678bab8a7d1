//! Endpoint table for the SendClean API.
//!
//! Every operation posts to exactly one fixed path below the configured
//! base URL. Individual URLs can be overridden through the configuration.

use std::fmt;

/// A SendClean API operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Create an SMTP user
    AddSmtpUser,
    /// Update limits or status of an SMTP user
    UpdateSmtpUser,
    /// Reset the password of an SMTP user
    ResetSmtpPassword,
    /// List SMTP users
    ListSmtpUsers,
    /// Register a sending domain
    AddSendingDomain,
    /// Check DNS records of a sending domain
    CheckSendingDomain,
    /// Verify ownership of a sending domain
    VerifySendingDomain,
    /// List sending domains
    ListSendingDomains,
    /// Remove a sending domain
    DeleteSendingDomain,
    /// Register a tracking domain
    AddTrackingDomain,
    /// Check the CNAME of a tracking domain
    CheckTrackingDomain,
    /// List tracking domains
    ListTrackingDomains,
    /// Remove a tracking domain
    DeleteTrackingDomain,
    /// Create a webhook
    AddWebhook,
    /// Edit a webhook
    EditWebhook,
    /// Rotate the signing key of a webhook
    ResetWebhookKey,
    /// List webhooks
    ListWebhooks,
    /// Remove a webhook
    DeleteWebhook,
    /// Fetch a single webhook
    WebhookInfo,
    /// Send a composed message
    SendMail,
    /// Send a message rendered from a template
    SendTemplate,
    /// Fetch account details
    UserDetail,
}

impl Endpoint {
    /// All endpoints, in declaration order
    pub const ALL: [Endpoint; 22] = [
        Endpoint::AddSmtpUser,
        Endpoint::UpdateSmtpUser,
        Endpoint::ResetSmtpPassword,
        Endpoint::ListSmtpUsers,
        Endpoint::AddSendingDomain,
        Endpoint::CheckSendingDomain,
        Endpoint::VerifySendingDomain,
        Endpoint::ListSendingDomains,
        Endpoint::DeleteSendingDomain,
        Endpoint::AddTrackingDomain,
        Endpoint::CheckTrackingDomain,
        Endpoint::ListTrackingDomains,
        Endpoint::DeleteTrackingDomain,
        Endpoint::AddWebhook,
        Endpoint::EditWebhook,
        Endpoint::ResetWebhookKey,
        Endpoint::ListWebhooks,
        Endpoint::DeleteWebhook,
        Endpoint::WebhookInfo,
        Endpoint::SendMail,
        Endpoint::SendTemplate,
        Endpoint::UserDetail,
    ];

    /// Path relative to the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            Self::AddSmtpUser => "smtp/addSmtpUser",
            Self::UpdateSmtpUser => "smtp/updateSmtpUser",
            Self::ResetSmtpPassword => "smtp/resetSmtpPassword",
            Self::ListSmtpUsers => "smtp/listSmtpUsers",
            Self::AddSendingDomain => "domain/addSendingDomain",
            Self::CheckSendingDomain => "domain/checkSendingDomain",
            Self::VerifySendingDomain => "domain/verifySendingDomain",
            Self::ListSendingDomains => "domain/listSendingDomains",
            Self::DeleteSendingDomain => "domain/deleteSendingDomain",
            Self::AddTrackingDomain => "domain/addTrackingDomain",
            Self::CheckTrackingDomain => "domain/checkTrackingDomain",
            Self::ListTrackingDomains => "domain/listTrackingDomains",
            Self::DeleteTrackingDomain => "domain/deleteTrackingDomain",
            Self::AddWebhook => "webhook/addWebhook",
            Self::EditWebhook => "webhook/editWebhook",
            Self::ResetWebhookKey => "webhook/keyResetWebhook",
            Self::ListWebhooks => "webhook/listWebhooks",
            Self::DeleteWebhook => "webhook/deleteWebhook",
            Self::WebhookInfo => "webhook/getWebhookInfo",
            Self::SendMail => "mail/send",
            Self::SendTemplate => "mail/sendTemplate",
            Self::UserDetail => "user/viewUserDetail",
        }
    }

    /// Operation name used in logs and spans
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddSmtpUser => "smtp.add_user",
            Self::UpdateSmtpUser => "smtp.update_user",
            Self::ResetSmtpPassword => "smtp.reset_password",
            Self::ListSmtpUsers => "smtp.list_users",
            Self::AddSendingDomain => "domains.add_sending",
            Self::CheckSendingDomain => "domains.check_sending",
            Self::VerifySendingDomain => "domains.verify_sending",
            Self::ListSendingDomains => "domains.list_sending",
            Self::DeleteSendingDomain => "domains.delete_sending",
            Self::AddTrackingDomain => "domains.add_tracking",
            Self::CheckTrackingDomain => "domains.check_tracking",
            Self::ListTrackingDomains => "domains.list_tracking",
            Self::DeleteTrackingDomain => "domains.delete_tracking",
            Self::AddWebhook => "webhooks.add",
            Self::EditWebhook => "webhooks.edit",
            Self::ResetWebhookKey => "webhooks.reset_key",
            Self::ListWebhooks => "webhooks.list",
            Self::DeleteWebhook => "webhooks.delete",
            Self::WebhookInfo => "webhooks.info",
            Self::SendMail => "mail.send",
            Self::SendTemplate => "mail.send_template",
            Self::UserDetail => "account.user_info",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
