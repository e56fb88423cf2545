//! Config validation: checks with user-friendly messages.

use crate::schema::GorkConfig;
use thiserror::Error;

/// A config validation finding with field path and message.
#[derive(Debug, Error)]
#[error("Config validation error at '{path}': {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

/// All errors and warnings found in one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Validate the config and return a report of all errors and warnings.
pub fn validate(config: &GorkConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_server(config, &mut report);
    validate_public_key(config, &mut report);
    validate_outbound(config, &mut report);
    report
}

fn validate_server(config: &GorkConfig, report: &mut ValidationReport) {
    if config.bind_address.trim().is_empty() {
        report.error("bind_address", "Bind address must not be empty");
    }
    if config.port == 0 {
        report.warn("port", "Port 0 binds a random port");
    }
}

/// A missing or malformed key means every request gets a 401.
fn validate_public_key(config: &GorkConfig, report: &mut ValidationReport) {
    match config.discord.public_key.as_deref() {
        None => report.warn(
            "discord.public_key",
            "DISCORD_PUBLIC_KEY is not set; every interaction will be rejected",
        ),
        Some(key) if !gork_security::public_key_is_well_formed(key) => report.error(
            "discord.public_key",
            "DISCORD_PUBLIC_KEY must be a 64-character hex Ed25519 public key",
        ),
        Some(_) => {}
    }
}

fn validate_outbound(config: &GorkConfig, report: &mut ValidationReport) {
    let discord = &config.discord;
    match discord.application_id.as_deref() {
        None => report.warn(
            "discord.application_id",
            "DISCORD_APPLICATION_ID is not set; command registration is unavailable",
        ),
        Some(id) if !id.chars().all(|c| c.is_ascii_digit()) => {
            report.warn("discord.application_id", "Application id should be a numeric snowflake")
        }
        Some(_) => {}
    }
    if discord.bot_token.is_none() {
        report.warn(
            "discord.bot_token",
            "DISCORD_TOKEN is not set; outbound API calls are unavailable",
        );
    }
    let base = discord.api_base_url.as_str();
    if !base.starts_with("http://") && !base.starts_with("https://") {
        report.error("discord.api_base_url", "API base URL must start with http:// or https://");
    }
}
