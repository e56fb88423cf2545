mod discord_cmd;
mod doctor_cmd;
mod status_cmd;

use std::net::SocketAddr;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use gork_config::GorkConfig;
use gork_gateway::GatewayState;

#[derive(Parser)]
#[command(name = "gork")]
#[command(about = "gork, a signed chat-interaction webhook")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactions HTTP server
    Serve {
        /// Address to bind the HTTP server to
        #[arg(short, long)]
        bind: Option<String>,
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Register the slash commands with the platform
    RegisterCommands {
        /// Register to this guild only (instant) instead of globally
        #[arg(short, long)]
        guild: Option<String>,
    },
    /// Post a message with an "Ask Gork" button to a channel
    SendButton {
        /// Target channel id
        #[arg(short, long)]
        channel: String,
        /// Message text above the button
        #[arg(long, default_value = "Got a question? Ask gork.")]
        content: String,
    },
    /// Validate the configuration and print a redacted snapshot
    Doctor,
    /// Check whether a local server is answering
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = GorkConfig::from_env()?;

    gork_logging::init_logger(config.log_dir.as_deref(), &config.log_level);

    match cli.command {
        Commands::Serve { bind, port } => {
            let config = GorkConfig {
                bind_address: bind.unwrap_or(config.bind_address),
                port: port.unwrap_or(config.port),
                ..config
            };
            run_server(config).await?;
        }
        Commands::RegisterCommands { guild } => {
            let guild = guild.or_else(|| config.discord.guild_id.clone());
            discord_cmd::register_commands(&config, guild.as_deref()).await?;
        }
        Commands::SendButton { channel, content } => {
            discord_cmd::send_button(&config, &channel, &content).await?;
        }
        Commands::Doctor => doctor_cmd::run(&config)?,
        Commands::Status => status_cmd::run(&config).await?,
    }

    Ok(())
}

async fn run_server(config: GorkConfig) -> Result<()> {
    let report = gork_config::validate(&config);
    for warning in &report.warnings {
        tracing::warn!(path = %warning.path, message = %warning.message, "Config warning");
    }
    if !report.is_valid() {
        for error in &report.errors {
            tracing::error!(path = %error.path, message = %error.message, "Config error");
        }
        bail!("refusing to start with {} config error(s)", report.errors.len());
    }

    let addr: SocketAddr = config
        .listen_addr()
        .parse()
        .with_context(|| format!("invalid listen address {}", config.listen_addr()))?;

    info!(
        addr = %addr,
        config = %gork_config::redact(&config),
        "Starting gork"
    );

    let state = GatewayState::new(config.discord.public_key.as_deref())
        .with_application_id(config.discord.application_id.as_deref());

    gork_gateway::start_server(addr, state).await
}
