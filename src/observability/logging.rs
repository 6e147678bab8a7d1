//! Logging utilities with sensitive data redaction.

use crate::auth::TOKEN_FIELD;
use serde_json::Value;
use tracing_subscriber::{fmt as fmt_layer, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const REDACTED: &str = "[REDACTED]";

/// Redact a token, keeping a short prefix for correlation
pub fn redact_token(token: &str) -> String {
    match token.char_indices().nth(4) {
        Some((idx, _)) if token.chars().count() > 8 => format!("{}...{}", &token[..idx], REDACTED),
        _ => REDACTED.to_string(),
    }
}

/// Copy of a request body with the API token masked, for logging
pub fn redact_body(body: &Value) -> Value {
    let mut redacted = body.clone();
    if let Some(token) = redacted.get_mut(TOKEN_FIELD) {
        *token = Value::String(REDACTED.to_string());
    }
    redacted
}

/// Log level enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Trace level
    Trace,
    /// Debug level
    Debug,
    /// Info level
    Info,
    /// Warning level
    Warn,
    /// Error level
    Error,
}

impl From<LogLevel> for tracing::level_filters::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable output
    Pretty,
    /// One JSON object per event
    Json,
    /// Single-line output
    Compact,
}

/// Subscriber configuration for applications embedding the client
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum level, combined with `RUST_LOG`
    pub level: LogLevel,
    /// Output format
    pub format: LogFormat,
    /// Include the module target
    pub include_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Pretty,
            include_target: true,
        }
    }
}

impl LoggingConfig {
    /// Default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the level
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the format
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set whether the module target is printed
    pub fn with_target(mut self, include: bool) -> Self {
        self.include_target = include;
        self
    }

    /// Install a global subscriber.
    ///
    /// # Errors
    ///
    /// Fails if a global subscriber is already set.
    pub fn init(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let filter = EnvFilter::from_default_env().add_directive(
            tracing::level_filters::LevelFilter::from(self.level).into(),
        );

        match self.format {
            LogFormat::Pretty => tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer::layer().with_target(self.include_target))
                .try_init()?,
            LogFormat::Json => tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer::layer().json().with_target(self.include_target))
                .try_init()?,
            LogFormat::Compact => tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer::layer().compact().with_target(self.include_target))
                .try_init()?,
        }

        Ok(())
    }
}
