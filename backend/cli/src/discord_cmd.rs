//! Setup commands that call out to the platform's REST API.

use anyhow::{Context, Result};

use gork_channels::{DiscordApi, DiscordClient};
use gork_config::GorkConfig;

fn client(config: &GorkConfig) -> Result<DiscordClient> {
    let discord = &config.discord;
    let application_id = discord
        .application_id
        .clone()
        .context("DISCORD_APPLICATION_ID is not set")?;
    let bot_token = discord.bot_token.clone().context("DISCORD_TOKEN is not set")?;

    Ok(DiscordClient::new(DiscordApi {
        api_base: discord.api_base_url.clone(),
        application_id,
        bot_token,
    }))
}

pub async fn register_commands(config: &GorkConfig, guild: Option<&str>) -> Result<()> {
    let names = client(config)?.register_commands(guild).await?;
    let count = names.len();
    let names = names.join(", ");
    match guild {
        Some(guild) => println!("✅ Registered {count} command(s) in guild {guild}: {names}"),
        None => println!("✅ Registered {count} global command(s): {names}"),
    }
    Ok(())
}

pub async fn send_button(config: &GorkConfig, channel: &str, content: &str) -> Result<()> {
    let message_id = client(config)?.send_ask_button(channel, content).await?;
    println!("✅ Posted button message {message_id} to channel {channel}");
    Ok(())
}
