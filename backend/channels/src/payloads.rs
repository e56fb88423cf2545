//! Request bodies for the outbound REST calls.

use gork_core::{Command, Component};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// `CHAT_INPUT` application command type.
const CHAT_INPUT: u8 = 1;
/// Component type of an action row.
const ACTION_ROW: u8 = 1;
/// Component type of a button.
const BUTTON: u8 = 2;
/// Primary (blurple) button style.
const STYLE_PRIMARY: u8 = 1;

/// One slash command as the registration endpoint expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: u8,
}

/// All commands the dispatcher understands.
pub fn command_definitions() -> Vec<CommandDefinition> {
    Command::ALL
        .into_iter()
        .map(|command| CommandDefinition {
            name: command.name().to_string(),
            description: command.description().to_string(),
            kind: CHAT_INPUT,
        })
        .collect()
}

/// A message with a single "Ask Gork" button under it.
pub fn ask_button_message(content: &str) -> Value {
    let button = Component::AskGork;
    json!({
        "content": content,
        "components": [{
            "type": ACTION_ROW,
            "components": [{
                "type": BUTTON,
                "style": STYLE_PRIMARY,
                "label": button.label(),
                "custom_id": button.custom_id(),
            }]
        }]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definitions_cover_every_command() {
        let defs = command_definitions();
        let names: Vec<&str> = defs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["gork", "gork-ephemeral"]);
        assert!(defs.iter().all(|d| d.kind == 1 && !d.description.is_empty()));

        let value = serde_json::to_value(&defs[0]).unwrap();
        assert_eq!(value["type"], 1);
    }

    #[test]
    fn button_routes_back_to_dispatcher() {
        let body = ask_button_message("Is it true?");
        assert_eq!(body["content"], "Is it true?");
        let button = &body["components"][0]["components"][0];
        assert_eq!(body["components"][0]["type"], 1);
        assert_eq!(button["type"], 2);
        assert_eq!(button["custom_id"], "ask_gork");
        assert_eq!(
            Component::from_custom_id(button["custom_id"].as_str().unwrap()),
            Some(Component::AskGork)
        );
    }
}
