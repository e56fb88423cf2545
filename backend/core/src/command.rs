//! The slash commands and components this bot knows about.
//!
//! Both dispatch and command registration read from here, so a new command
//! only has to be added once.

use crate::response::MessageFlags;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `/gork`, answered in the channel.
    Gork,
    /// `/gork-ephemeral`, answered only to the caller.
    GorkEphemeral,
}

impl Command {
    pub const ALL: [Command; 2] = [Command::Gork, Command::GorkEphemeral];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Gork => "gork",
            Self::GorkEphemeral => "gork-ephemeral",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Gork => "Ask gork if it's true",
            Self::GorkEphemeral => "Ask gork privately if it's true",
        }
    }

    /// Flags carried by the reply to this command.
    pub fn flags(self) -> MessageFlags {
        match self {
            Self::Gork => MessageFlags::NONE,
            Self::GorkEphemeral => MessageFlags::EPHEMERAL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// The "Ask Gork" button.
    AskGork,
}

impl Component {
    pub const ALL: [Component; 1] = [Component::AskGork];

    pub fn from_custom_id(custom_id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.custom_id() == custom_id)
    }

    pub fn custom_id(self) -> &'static str {
        match self {
            Self::AskGork => "ask_gork",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AskGork => "Ask Gork",
        }
    }
}
