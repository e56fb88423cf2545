//! Inbound interaction payloads.
//!
//! The platform posts a JSON object with an integer `type` and a `data`
//! object whose shape depends on it. We decode that once, at the boundary,
//! into [`Interaction`] so the dispatcher only ever sees a closed type.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::InteractionError;

/// Wire discriminant of an inbound interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InteractionKind(pub u64);

impl InteractionKind {
    pub const PING: Self = Self(1);
    pub const APPLICATION_COMMAND: Self = Self(2);
    pub const MESSAGE_COMPONENT: Self = Self(3);
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A decoded interaction, carrying only the fields valid for its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    /// Connectivity handshake.
    Ping,
    /// Slash command invocation.
    ApplicationCommand { name: String },
    /// Click on a component (button, select menu, ...).
    MessageComponent { custom_id: String },
    /// Any type we do not handle, or a known type missing its routing field.
    Other { kind: InteractionKind },
}

#[derive(Deserialize)]
struct RawInteraction {
    #[serde(rename = "type")]
    kind: InteractionKind,
    #[serde(default)]
    data: Option<Value>,
}

impl RawInteraction {
    fn data_str(&self, field: &str) -> Option<String> {
        self.data
            .as_ref()
            .and_then(|data| data.get(field))
            .and_then(Value::as_str)
            .map(str::to_owned)
    }
}

impl Interaction {
    /// Decode an interaction from the raw request body.
    ///
    /// Fails only when the body is not JSON or has no integer `type`;
    /// shape mismatches inside `data` decode to [`Interaction::Other`].
    pub fn from_slice(body: &[u8]) -> Result<Self, InteractionError> {
        let raw: RawInteraction = serde_json::from_slice(body)?;
        Ok(Self::from(raw))
    }

    pub fn kind(&self) -> InteractionKind {
        match self {
            Self::Ping => InteractionKind::PING,
            Self::ApplicationCommand { .. } => InteractionKind::APPLICATION_COMMAND,
            Self::MessageComponent { .. } => InteractionKind::MESSAGE_COMPONENT,
            Self::Other { kind } => *kind,
        }
    }
}

impl From<RawInteraction> for Interaction {
    fn from(raw: RawInteraction) -> Self {
        match raw.kind {
            InteractionKind::PING => Self::Ping,
            InteractionKind::APPLICATION_COMMAND => match raw.data_str("name") {
                Some(name) => Self::ApplicationCommand { name },
                None => Self::Other { kind: raw.kind },
            },
            InteractionKind::MESSAGE_COMPONENT => match raw.data_str("custom_id") {
                Some(custom_id) => Self::MessageComponent { custom_id },
                None => Self::Other { kind: raw.kind },
            },
            kind => Self::Other { kind },
        }
    }
}
