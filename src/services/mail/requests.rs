//! Request types for the mail service.

use crate::errors::RequestError;
use crate::services::require;
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// How a recipient receives the message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipientType {
    /// Primary recipient
    To,
    /// Carbon copy
    Cc,
    /// Blind carbon copy
    Bcc,
}

/// A message recipient
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipient {
    /// Email address
    pub email: String,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Delivery kinds; the provider treats an empty list as `to`
    #[serde(rename = "type", skip_serializing_if = "Vec::is_empty")]
    pub kinds: Vec<RecipientType>,
}

impl Recipient {
    /// Create a recipient with no explicit kind
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
            kinds: Vec::new(),
        }
    }

    /// Create a `to` recipient
    pub fn to(email: impl Into<String>) -> Self {
        Self::new(email).with_kind(RecipientType::To)
    }

    /// Create a `cc` recipient
    pub fn cc(email: impl Into<String>) -> Self {
        Self::new(email).with_kind(RecipientType::Cc)
    }

    /// Create a `bcc` recipient
    pub fn bcc(email: impl Into<String>) -> Self {
        Self::new(email).with_kind(RecipientType::Bcc)
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a delivery kind
    pub fn with_kind(mut self, kind: RecipientType) -> Self {
        if !self.kinds.contains(&kind) {
            self.kinds.push(kind);
        }
        self
    }
}

/// File attached to or embedded in a message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Attachment {
    /// MIME type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// File name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Base64 content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Attachment {
    /// Build an attachment from raw bytes, guessing the MIME type from `name`
    pub fn from_bytes(name: impl Into<String>, bytes: impl AsRef<[u8]>) -> Self {
        let name = name.into();
        let mime_type = mime_guess::from_path(&name).first_or_octet_stream();
        Self {
            mime_type: Some(mime_type.essence_str().to_string()),
            name: Some(name),
            content: Some(STANDARD.encode(bytes.as_ref())),
        }
    }
}

/// Message content shared by direct and template sends
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MailMessage {
    /// HTML body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Plain-text body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Subject line
    pub subject: String,
    /// Sender address
    pub from_email: String,
    /// Sender display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_name: Option<String>,
    /// Recipients
    pub to: Vec<Recipient>,
    /// Extra MIME headers
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    /// Attachments
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    /// Inline images
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Attachment>,
}

impl MailMessage {
    /// Create a message with subject and sender
    pub fn new(subject: impl Into<String>, from_email: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            from_email: from_email.into(),
            ..Default::default()
        }
    }

    /// Set the HTML body
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    /// Set the plain-text body
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the sender display name
    pub fn from_name(mut self, name: impl Into<String>) -> Self {
        self.from_name = Some(name.into());
        self
    }

    /// Add a recipient
    pub fn recipient(mut self, recipient: Recipient) -> Self {
        self.to.push(recipient);
        self
    }

    /// Add a header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Add an attachment
    pub fn attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Add an inline image
    pub fn image(mut self, image: Attachment) -> Self {
        self.images.push(image);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), RequestError> {
        require("subject", &self.subject)?;
        require("from_email", &self.from_email)?;
        if self.to.is_empty() {
            return Err(RequestError::InvalidArgument {
                field: "to",
                message: "at least one recipient is required".to_string(),
            });
        }
        for recipient in &self.to {
            require("to.email", &recipient.email)?;
        }
        Ok(())
    }
}

/// Message rendered from a stored template
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TemplateMessage {
    /// Template to render
    pub template_id: String,
    /// Values substituted into the template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_value: Option<Value>,
    /// Envelope and overrides
    #[serde(flatten)]
    pub message: MailMessage,
}

impl TemplateMessage {
    /// Create a template message
    pub fn new(template_id: impl Into<String>, message: MailMessage) -> Self {
        Self {
            template_id: template_id.into(),
            dynamic_value: None,
            message,
        }
    }

    /// Set the template values
    pub fn dynamic_value(mut self, value: Value) -> Self {
        self.dynamic_value = Some(value);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), RequestError> {
        require("template_id", &self.template_id)?;
        self.message.validate()
    }
}

/// Request to send a message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendMailRequest {
    /// SMTP user the message is sent as
    pub smtp_user_name: String,
    /// Message
    pub message: MailMessage,
}

impl SendMailRequest {
    /// Create a new request
    pub fn new(smtp_user_name: impl Into<String>, message: MailMessage) -> Self {
        Self {
            smtp_user_name: smtp_user_name.into(),
            message,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), RequestError> {
        require("smtp_user_name", &self.smtp_user_name)?;
        self.message.validate()
    }
}

/// Request to send a template message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendTemplateRequest {
    /// SMTP user the message is sent as
    pub smtp_user_name: String,
    /// Message
    pub message: TemplateMessage,
}

impl SendTemplateRequest {
    /// Create a new request
    pub fn new(smtp_user_name: impl Into<String>, message: TemplateMessage) -> Self {
        Self {
            smtp_user_name: smtp_user_name.into(),
            message,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), RequestError> {
        require("smtp_user_name", &self.smtp_user_name)?;
        self.message.validate()
    }
}
