//! Observability infrastructure for the SendClean client.
//!
//! Provides subscriber setup and redaction helpers. The library itself only
//! emits `tracing` events; installing a subscriber is left to the caller.

pub mod logging;

pub use logging::*;
