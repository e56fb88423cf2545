//! Telemetry and structured logging for gork.
//!
//! Handles log redaction, console and rolling JSON output, and per-request
//! interaction event logging.

pub mod event_logger;
pub mod logger;
pub mod redact;

pub use event_logger::{InteractionEvent, InteractionEventLogger};
pub use logger::init_logger;
pub use redact::redact_sensitive_data;
