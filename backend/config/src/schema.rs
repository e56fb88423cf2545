//! Typed configuration schema.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Versioned REST base of the chat platform.
pub const DEFAULT_API_BASE_URL: &str = "https://discord.com/api/v10";

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GorkConfig {
    /// HTTP server bind address
    pub bind_address: String,
    /// HTTP server port
    pub port: u16,
    /// Default log filter, overridden by `RUST_LOG`
    pub log_level: String,
    /// Directory for rolling NDJSON logs; console only when unset
    pub log_dir: Option<PathBuf>,
    pub discord: DiscordConfig,
}

/// Chat platform credentials and endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordConfig {
    /// Hex-encoded Ed25519 public key used to verify inbound interactions.
    pub public_key: Option<String>,
    pub application_id: Option<String>,
    pub bot_token: Option<String>,
    /// Register commands to this guild instead of globally.
    pub guild_id: Option<String>,
    pub api_base_url: String,
}

impl Default for GorkConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8787,
            log_level: "info".to_string(),
            log_dir: None,
            discord: DiscordConfig::default(),
        }
    }
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            public_key: None,
            application_id: None,
            bot_token: None,
            guild_id: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl GorkConfig {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}
