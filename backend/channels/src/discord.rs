//! Discord REST client for the bot's setup tasks.
//!
//! All calls authenticate with the bot token:
//!   PUT  /applications/{app}/commands             overwrite global commands
//!   PUT  /applications/{app}/guilds/{g}/commands  overwrite guild commands
//!   POST /channels/{channel}/messages             post the "Ask Gork" button

use anyhow::{Context, Result, bail};
use reqwest::{Client, Response};
use serde::Deserialize;
use tracing::{error, info};

use crate::payloads::{ask_button_message, command_definitions};

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct DiscordApi {
    /// Versioned REST base, without a trailing slash.
    pub api_base: String,
    pub application_id: String,
    pub bot_token: String,
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Deserialize, Debug)]
struct RegisteredCommand {
    name: String,
}

#[derive(Deserialize, Debug)]
struct CreatedMessage {
    id: String,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

pub struct DiscordClient {
    api: DiscordApi,
    http_client: Client,
}

impl DiscordClient {
    pub fn new(api: DiscordApi) -> Self {
        Self::with_client(api, Client::new())
    }

    pub fn with_client(api: DiscordApi, http_client: Client) -> Self {
        Self { api, http_client }
    }

    fn commands_url(&self, guild_id: Option<&str>) -> String {
        match guild_id {
            Some(guild) => format!(
                "{}/applications/{}/guilds/{}/commands",
                self.api.api_base, self.api.application_id, guild
            ),
            None => format!(
                "{}/applications/{}/commands",
                self.api.api_base, self.api.application_id
            ),
        }
    }

    fn auth_header(&self) -> String {
        format!("Bot {}", self.api.bot_token)
    }

    /// Overwrite the registered slash commands with the ones we dispatch.
    /// Returns the names the platform echoed back.
    pub async fn register_commands(&self, guild_id: Option<&str>) -> Result<Vec<String>> {
        let url = self.commands_url(guild_id);
        let res = self
            .http_client
            .put(&url)
            .header(reqwest::header::AUTHORIZATION, self.auth_header())
            .json(&command_definitions())
            .send()
            .await
            .context("command registration request failed")?;

        let res = ensure_success(res, "command registration").await?;
        let registered: Vec<RegisteredCommand> = res
            .json()
            .await
            .context("unexpected command registration response")?;

        let names: Vec<String> = registered.into_iter().map(|c| c.name).collect();
        info!(
            scope = guild_id.unwrap_or("global"),
            commands = ?names,
            "Registered slash commands"
        );
        Ok(names)
    }

    /// Post `content` with an "Ask Gork" button to a channel. Returns the message id.
    pub async fn send_ask_button(&self, channel_id: &str, content: &str) -> Result<String> {
        let url = format!("{}/channels/{}/messages", self.api.api_base, channel_id);
        let res = self
            .http_client
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, self.auth_header())
            .json(&ask_button_message(content))
            .send()
            .await
            .context("send message request failed")?;

        let res = ensure_success(res, "send message").await?;
        let message: CreatedMessage = res.json().await.context("unexpected send message response")?;
        info!(channel = %channel_id, message = %message.id, "Posted Ask Gork button");
        Ok(message.id)
    }
}

async fn ensure_success(res: Response, what: &str) -> Result<Response> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let body = res.text().await.unwrap_or_default();
    error!(status = %status, "[Discord] {} failed: {}", what, body);
    bail!("Discord {} failed ({}): {}", what, status, body);
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        extract::State,
        http::{HeaderMap, StatusCode},
        routing::{post, put},
    };
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tokio::net::TcpListener;
    use tokio::sync::Mutex;

    type Seen = Arc<Mutex<Vec<(String, Value)>>>;

    async fn capture(seen: &Seen, headers: &HeaderMap, body: Value) {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        seen.lock().await.push((auth, body));
    }

    async fn echo_commands(
        State(seen): State<Seen>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> Json<Value> {
        capture(&seen, &headers, body.clone()).await;
        Json(body)
    }

    async fn create_message(
        State(seen): State<Seen>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> Json<Value> {
        capture(&seen, &headers, body).await;
        Json(json!({ "id": "999", "channel_id": "555" }))
    }

    async fn spawn_fake_api() -> (String, Seen) {
        let seen: Seen = Arc::default();
        let app = Router::new()
            .route("/applications/123/commands", put(echo_commands))
            .route(
                "/applications/123/guilds/777/commands",
                put(|| async { (StatusCode::FORBIDDEN, "Missing Access") }),
            )
            .route("/channels/555/messages", post(create_message))
            .with_state(seen.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{addr}"), seen)
    }

    fn client(api_base: String) -> DiscordClient {
        DiscordClient::new(DiscordApi {
            api_base,
            application_id: "123".into(),
            bot_token: "tok".into(),
        })
    }

    #[test]
    fn builds_global_and_guild_urls() {
        let client = client("https://discord.com/api/v10".into());
        assert_eq!(
            client.commands_url(None),
            "https://discord.com/api/v10/applications/123/commands"
        );
        assert_eq!(
            client.commands_url(Some("42")),
            "https://discord.com/api/v10/applications/123/guilds/42/commands"
        );
    }

    #[tokio::test]
    async fn registers_commands_with_bot_auth() {
        let (base, seen) = spawn_fake_api().await;
        let names = client(base).register_commands(None).await.unwrap();
        assert_eq!(names, ["gork", "gork-ephemeral"]);

        let seen = seen.lock().await;
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "Bot tok");
        assert_eq!(seen[0].1.as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn registration_failure_carries_status() {
        let (base, _) = spawn_fake_api().await;
        let err = client(base).register_commands(Some("777")).await.unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("403"), "{msg}");
        assert!(msg.contains("Missing Access"), "{msg}");
    }

    #[tokio::test]
    async fn sends_button_message() {
        let (base, seen) = spawn_fake_api().await;
        let id = client(base).send_ask_button("555", "Is it true?").await.unwrap();
        assert_eq!(id, "999");

        let seen = seen.lock().await;
        assert_eq!(seen[0].1["components"][0]["components"][0]["custom_id"], "ask_gork");
    }
}
