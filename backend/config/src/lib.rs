//! `gork-config`: runtime configuration for the gork interactions service.
//!
//! Provides:
//! - Typed config schema with defaults
//! - Loading from environment variables
//! - Validation report (errors and warnings)
//! - Redaction for safe logging

pub mod env;
pub mod redact;
pub mod schema;
pub mod validation;

pub use env::ConfigError;
pub use redact::redact;
pub use schema::{DiscordConfig, GorkConfig, DEFAULT_API_BASE_URL};
pub use validation::{validate, ConfigValidationError, ValidationReport};

