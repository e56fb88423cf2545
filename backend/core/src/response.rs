//! Outbound interaction responses.

use std::ops::BitOr;

use serde::{Deserialize, Serialize};

/// Wire discriminant of a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseKind(pub u8);

impl ResponseKind {
    /// Acknowledges a handshake ping.
    pub const PONG: Self = Self(1);
    /// Replies with a message in the channel the interaction came from.
    pub const CHANNEL_MESSAGE_WITH_SOURCE: Self = Self(4);
}

/// Message flag bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageFlags(pub u64);

impl MessageFlags {
    pub const NONE: Self = Self(0);
    /// Only the invoking user can see the message.
    pub const EPHEMERAL: Self = Self(1 << 6);

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for MessageFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseData {
    pub content: String,
    pub flags: MessageFlags,
}

/// The JSON body returned for an interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    pub kind: ResponseKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
}

impl InteractionResponse {
    pub fn pong() -> Self {
        Self { kind: ResponseKind::PONG, data: None }
    }

    pub fn message(content: impl Into<String>, flags: MessageFlags) -> Self {
        Self {
            kind: ResponseKind::CHANNEL_MESSAGE_WITH_SOURCE,
            data: Some(ResponseData { content: content.into(), flags }),
        }
    }

    pub fn is_ephemeral(&self) -> bool {
        self.data
            .as_ref()
            .is_some_and(|d| d.flags.contains(MessageFlags::EPHEMERAL))
    }
}
