//! Outbound calls to the chat platform's REST API.
//!
//! None of this is on the interaction request path; it is driven from the
//! CLI to set the bot up.

pub mod discord;
pub mod payloads;

pub use discord::{DiscordApi, DiscordClient};
pub use payloads::{ask_button_message, command_definitions, CommandDefinition};
