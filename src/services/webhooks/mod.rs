//! Webhook service for the SendClean API.
//!
//! Provides methods for registering event callbacks and rotating their
//! signing keys.

mod requests;
mod responses;
mod service;

pub use requests::*;
pub use responses::*;
pub use service::*;
