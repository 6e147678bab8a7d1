//! Credential handling for the SendClean client.
//!
//! SendClean authenticates by carrying `owner_id` and `token` inside every
//! JSON body rather than in a header. [`RequestSigner`] stamps both into the
//! serialized parameters of an operation.

use crate::errors::{ConfigurationError, RequestError, SendCleanResult};
use crate::observability::redact_token;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Body field carrying the API token
pub const TOKEN_FIELD: &str = "token";

/// Body field carrying the owner identifier
pub const OWNER_ID_FIELD: &str = "owner_id";

/// Immutable owner id / token pair
#[derive(Clone)]
pub struct Credentials {
    owner_id: String,
    token: SecretString,
}

impl Credentials {
    /// Create a credential pair, rejecting blank values
    pub fn new(
        owner_id: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        let owner_id = owner_id.into();
        let token = token.into();

        if owner_id.trim().is_empty() {
            return Err(ConfigurationError::MissingOwnerId);
        }
        if token.trim().is_empty() {
            return Err(ConfigurationError::MissingToken);
        }

        Ok(Self {
            owner_id,
            token: SecretString::new(token),
        })
    }

    /// Owner identifier
    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    /// Expose the token for use in requests
    pub(crate) fn expose_token(&self) -> &str {
        self.token.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("owner_id", &self.owner_id)
            .field("token", &redact_token(self.expose_token()))
            .finish()
    }
}

/// Adds the credential pair to outgoing request bodies
#[derive(Clone)]
pub struct RequestSigner {
    credentials: Arc<Credentials>,
}

impl RequestSigner {
    /// Create a new signer
    pub fn new(credentials: Arc<Credentials>) -> Self {
        Self { credentials }
    }

    /// Owner identifier used for signing
    pub fn owner_id(&self) -> &str {
        self.credentials.owner_id()
    }

    /// Serialize `params` into a JSON object and add `token` and `owner_id`.
    ///
    /// `params` must serialize to an object or to `null` (no extra fields).
    /// Credential fields always win over same-named parameter fields.
    pub fn sign<P: Serialize + ?Sized>(&self, params: &P) -> SendCleanResult<Value> {
        let value = serde_json::to_value(params).map_err(|e| RequestError::Serialization {
            message: e.to_string(),
        })?;

        let mut body = match value {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                return Err(RequestError::Serialization {
                    message: format!("parameters must be a JSON object, got {}", kind_of(&other)),
                }
                .into())
            }
        };

        body.insert(
            TOKEN_FIELD.to_string(),
            Value::String(self.credentials.expose_token().to_string()),
        );
        body.insert(
            OWNER_ID_FIELD.to_string(),
            Value::String(self.credentials.owner_id().to_string()),
        );

        Ok(Value::Object(body))
    }
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("owner_id", &self.credentials.owner_id())
            .finish()
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SendCleanError;
    use serde_json::json;

    fn signer() -> RequestSigner {
        RequestSigner::new(Arc::new(Credentials::new("owner-1", "tok-secret").unwrap()))
    }

    #[test]
    fn test_credentials_reject_blank() {
        assert!(matches!(
            Credentials::new("", "tok"),
            Err(ConfigurationError::MissingOwnerId)
        ));
        assert!(matches!(
            Credentials::new("owner", "  "),
            Err(ConfigurationError::MissingToken)
        ));
    }

    #[test]
    fn test_credentials_debug_redacts_token() {
        let creds = Credentials::new("owner-1", "tok-secret").unwrap();
        let debug = format!("{:?}", creds);
        assert!(debug.contains("owner-1"));
        assert!(!debug.contains("tok-secret"));
    }

    #[test]
    fn test_sign_adds_credentials() {
        let body = signer().sign(&json!({"domain": "example.com"})).unwrap();
        assert_eq!(
            body,
            json!({"domain": "example.com", "token": "tok-secret", "owner_id": "owner-1"})
        );
    }

    #[test]
    fn test_sign_unit_params() {
        let body = signer().sign(&()).unwrap();
        assert_eq!(body, json!({"token": "tok-secret", "owner_id": "owner-1"}));
    }

    #[test]
    fn test_sign_credentials_override_params() {
        let body = signer().sign(&json!({"owner_id": "someone-else"})).unwrap();
        assert_eq!(body["owner_id"], "owner-1");
    }

    #[test]
    fn test_sign_rejects_non_object() {
        let err = signer().sign(&vec![1, 2, 3]).unwrap_err();
        assert!(matches!(
            err,
            SendCleanError::Request(RequestError::Serialization { .. })
        ));
    }
}
