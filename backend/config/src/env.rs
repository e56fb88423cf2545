//! Loading configuration from environment variables.
//!
//! | Variable | Field | Default |
//! |---|---|---|
//! | `GORK_BIND` | `bind_address` | `0.0.0.0` |
//! | `GORK_PORT` | `port` | `8787` |
//! | `RUST_LOG` | `log_level` | `info` |
//! | `GORK_LOG_DIR` | `log_dir` | unset |
//! | `DISCORD_PUBLIC_KEY` | `discord.public_key` | unset |
//! | `DISCORD_APPLICATION_ID` | `discord.application_id` | unset |
//! | `DISCORD_TOKEN` | `discord.bot_token` | unset |
//! | `DISCORD_GUILD_ID` | `discord.guild_id` | unset |
//! | `DISCORD_API_BASE` | `discord.api_base_url` | `https://discord.com/api/v10` |
//!
//! Empty values count as unset.

use std::collections::HashMap;
use std::path::PathBuf;

use thiserror::Error;

use crate::schema::{DiscordConfig, GorkConfig};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?} ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

impl GorkConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&std::env::vars().collect())
    }

    /// Load from a provided map (useful for testing).
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let get = |name: &str| {
            vars.get(name)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        let defaults = GorkConfig::default();

        let port = match get("GORK_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                var: "GORK_PORT",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => defaults.port,
        };

        Ok(Self {
            bind_address: get("GORK_BIND").unwrap_or(defaults.bind_address),
            port,
            log_level: get("RUST_LOG").unwrap_or(defaults.log_level),
            log_dir: get("GORK_LOG_DIR").map(PathBuf::from),
            discord: DiscordConfig {
                public_key: get("DISCORD_PUBLIC_KEY"),
                application_id: get("DISCORD_APPLICATION_ID"),
                bot_token: get("DISCORD_TOKEN"),
                guild_id: get("DISCORD_GUILD_ID"),
                api_base_url: get("DISCORD_API_BASE")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or(defaults.discord.api_base_url),
            },
        })
    }
}
