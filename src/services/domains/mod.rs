//! Domain service for the SendClean API.
//!
//! Provides methods for managing sending (DKIM/SPF signed) and tracking
//! (CNAME) domains.

mod responses;
mod service;

pub use responses::*;
pub use service::*;
