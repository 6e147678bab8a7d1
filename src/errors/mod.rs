//! Error types for the SendClean client.
//!
//! Provides an error hierarchy separating local failures (configuration,
//! argument validation), transport failures, malformed responses and
//! provider-reported errors carried in the response envelope.

use std::fmt;
use thiserror::Error;

/// Result type for SendClean operations
pub type SendCleanResult<T> = Result<T, SendCleanError>;

/// Root error type for the SendClean integration
#[derive(Error, Debug, Clone)]
pub enum SendCleanError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Argument validation error, raised before any network call
    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    /// Connection could not be established or was interrupted
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Response body could not be interpreted
    #[error("Response error: {0}")]
    Response(#[from] ResponseError),

    /// Error reported by the provider in the response envelope
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

impl SendCleanError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "SENDCLEAN_CONFIG",
            Self::Request(_) => "SENDCLEAN_REQUEST",
            Self::Transport(_) => "SENDCLEAN_TRANSPORT",
            Self::Response(_) => "SENDCLEAN_RESPONSE",
            Self::Api(err) => match err.kind {
                ApiErrorKind::Validation => "SENDCLEAN_API_VALIDATION",
                ApiErrorKind::General => "SENDCLEAN_API_GENERAL",
                ApiErrorKind::Authentication => "SENDCLEAN_API_AUTH",
                ApiErrorKind::Unrecognized => "SENDCLEAN_API_UNRECOGNIZED",
            },
        }
    }

    /// Kind of the provider-reported error, if this is one
    pub fn api_kind(&self) -> Option<ApiErrorKind> {
        match self {
            Self::Api(err) => Some(err.kind),
            _ => None,
        }
    }

    /// Whether the provider rejected the credentials
    pub fn is_authentication(&self) -> bool {
        self.api_kind() == Some(ApiErrorKind::Authentication)
    }

    /// Whether the provider rejected the request input
    pub fn is_validation(&self) -> bool {
        self.api_kind() == Some(ApiErrorKind::Validation)
    }

    /// Provider message, if this is a provider-reported error
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api(err) => Some(err.message.as_str()),
            _ => None,
        }
    }
}

/// Configuration errors
#[derive(Error, Debug, Clone)]
pub enum ConfigurationError {
    /// Missing owner identifier
    #[error("Owner id is missing")]
    MissingOwnerId,

    /// Missing API token
    #[error("API token is missing")]
    MissingToken,

    /// No owner id / token pair configured
    #[error("Credentials are missing")]
    MissingCredentials,

    /// Default header name or value rejected
    #[error("Invalid header '{name}': {message}")]
    InvalidHeader {
        /// Offending header name
        name: String,
        /// Parser message
        message: String,
    },

    /// Invalid URL
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl {
        /// Offending URL
        url: String,
        /// Parser message
        message: String,
    },

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(String),
}

/// Argument validation errors
#[derive(Error, Debug, Clone)]
pub enum RequestError {
    /// A required argument was absent or blank
    #[error("Field {field} is required")]
    MissingArgument {
        /// Argument name
        field: &'static str,
    },

    /// An argument was present but not acceptable
    #[error("Invalid {field}: {message}")]
    InvalidArgument {
        /// Argument name
        field: &'static str,
        /// Error message
        message: String,
    },

    /// Parameters could not be serialized into a JSON object
    #[error("Failed to serialize request: {message}")]
    Serialization {
        /// Error message
        message: String,
    },
}

/// Transport-level errors
#[derive(Error, Debug, Clone)]
pub enum TransportError {
    /// Connection failed
    #[error("Connection failed: {message}")]
    ConnectionFailed {
        /// Error message
        message: String,
    },

    /// Caller-configured timeout elapsed
    #[error("Request timed out")]
    Timeout,

    /// Connection dropped before the response body was complete
    #[error("Connection interrupted: {message}")]
    Interrupted {
        /// Error message
        message: String,
    },

    /// Any other HTTP client failure
    #[error("HTTP error: {message}")]
    Http {
        /// Error message
        message: String,
    },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::ConnectionFailed {
                message: err.to_string(),
            }
        } else if err.is_body() || err.is_decode() {
            TransportError::Interrupted {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

/// Response interpretation errors
#[derive(Error, Debug, Clone)]
pub enum ResponseError {
    /// Body was not valid JSON
    #[error("Malformed JSON response: {message}")]
    MalformedJson {
        /// Parser message
        message: String,
    },

    /// Body was JSON but not the shape the operation expects
    #[error("Unexpected response shape: {message}")]
    UnexpectedShape {
        /// Error message
        message: String,
    },
}

impl From<serde_json::Error> for ResponseError {
    fn from(err: serde_json::Error) -> Self {
        ResponseError::UnexpectedShape {
            message: err.to_string(),
        }
    }
}

/// Kind of a provider-reported error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// Client-correctable input problem
    Validation,
    /// Unclassified provider-side failure
    General,
    /// Invalid or expired credentials
    Authentication,
    /// Error status with a missing or unknown `type`
    Unrecognized,
}

impl ApiErrorKind {
    /// Map the envelope `type` tag to a kind
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("ValidationError") => Self::Validation,
            Some("GeneralError") => Self::General,
            Some("AuthenticationError") => Self::Authentication,
            _ => Self::Unrecognized,
        }
    }

    /// Wire tag for this kind
    pub fn as_tag(&self) -> Option<&'static str> {
        match self {
            Self::Validation => Some("ValidationError"),
            Self::General => Some("GeneralError"),
            Self::Authentication => Some("AuthenticationError"),
            Self::Unrecognized => None,
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "ValidationError"),
            Self::General => write!(f, "GeneralError"),
            Self::Authentication => write!(f, "AuthenticationError"),
            Self::Unrecognized => write!(f, "UnrecognizedError"),
        }
    }
}

/// Error reported by the provider
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct ApiError {
    /// Classified kind
    pub kind: ApiErrorKind,
    /// Raw `type` tag as sent, if any
    pub error_type: Option<String>,
    /// Provider message
    pub message: String,
}

impl ApiError {
    /// Build from the `type` and `message` fields of an error envelope
    pub fn from_envelope(error_type: Option<&str>, message: Option<&str>) -> Self {
        Self {
            kind: ApiErrorKind::from_tag(error_type),
            error_type: error_type.map(String::from),
            message: message.unwrap_or("Unknown error").to_string(),
        }
    }
}
