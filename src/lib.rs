//! SendClean API Client
//!
//! Async client for the SendClean transactional email API with:
//! - SMTP user, sending/tracking domain, webhook, mail and account operations
//! - Credential signing of every request body
//! - Envelope interpretation into typed errors
//! - Decomposition of microsecond `create_date` timestamps
//! - Structured logging through `tracing`
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sendclean_client::services::mail::{MailMessage, MailServiceTrait, Recipient, SendMailRequest};
//! use sendclean_client::services::domains::DomainsServiceTrait;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client from environment
//!     let client = sendclean_client::create_client_from_env()?;
//!
//!     for domain in client.domains().list_sending().await? {
//!         println!("{} created {}", domain.domain, domain.create_date);
//!     }
//!
//!     let message = MailMessage::new("Welcome", "hello@example.com")
//!         .text("Thanks for signing up")
//!         .recipient(Recipient::to("new.user@example.com"));
//!     let response = client
//!         .mail()
//!         .send(SendMailRequest::new("smtp-a1", message))
//!         .await?;
//!
//!     println!("Mail accepted: {}", response.message);
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `rustls` - TLS through rustls (default)
//! - `native-tls` - TLS through the platform library

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// Core modules
pub mod auth;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod envelope;
pub mod errors;
pub mod transport;
pub mod types;

// Services
pub mod services;

// Observability
pub mod observability;

// Testing utilities
pub mod fixtures;
pub mod mocks;

// Tests
#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use client::SendCleanClient;
pub use config::{SendCleanConfig, SendCleanConfigBuilder};
pub use endpoints::Endpoint;
pub use errors::{ApiErrorKind, SendCleanError, SendCleanResult};
pub use types::{decompose, DecomposedDuration, EpochMicros};

/// Default base URL for the SendClean API
pub const DEFAULT_BASE_URL: &str = "https://api.sendclean.net/v1.0";

/// Create a SendClean client with the given configuration
pub fn create_client(config: SendCleanConfig) -> SendCleanResult<SendCleanClient> {
    SendCleanClient::new(config)
}

/// Create a SendClean client from environment variables
///
/// Reads:
/// - `SENDCLEAN_OWNER_ID` - Account owner id
/// - `SENDCLEAN_TOKEN` - API token
/// - `SENDCLEAN_BASE_URL` - Optional base URL override
/// - `SENDCLEAN_TIMEOUT` - Optional request timeout in seconds
pub fn create_client_from_env() -> SendCleanResult<SendCleanClient> {
    let config = SendCleanConfig::from_env()?;
    create_client(config)
}
