//! SMTP user service for the SendClean API.
//!
//! Provides methods for creating and managing SMTP sender credentials.

mod requests;
mod responses;
mod service;

pub use requests::*;
pub use responses::*;
pub use service::*;
