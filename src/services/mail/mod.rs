//! Mail service for the SendClean API.
//!
//! Provides methods for sending messages directly or through a stored
//! template.

mod requests;
mod service;

pub use requests::*;
pub use service::*;

/// Response from a send operation
pub type SendMailResponse = crate::types::Acknowledgement;
