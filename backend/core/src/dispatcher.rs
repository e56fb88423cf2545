//! Maps a decoded [`Interaction`] onto a reply.

use rand::Rng;

use crate::command::{Command, Component};
use crate::error::InteractionError;
use crate::interaction::Interaction;
use crate::pool::ResponsePool;
use crate::response::{InteractionResponse, MessageFlags};

/// Decorative prefix on replies to the "Ask Gork" button.
pub const ASK_GORK_MARKER: &str = "🎱 ";

/// Coarse label for what the dispatcher did, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Pong,
    Reply { ephemeral: bool },
    Unrecognized,
}

impl DispatchOutcome {
    pub fn of(result: &Result<InteractionResponse, InteractionError>) -> Self {
        match result {
            Ok(response) if response.data.is_none() => Self::Pong,
            Ok(response) => Self::Reply { ephemeral: response.is_ephemeral() },
            Err(_) => Self::Unrecognized,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pong => "pong",
            Self::Reply { ephemeral: false } => "reply",
            Self::Reply { ephemeral: true } => "reply_ephemeral",
            Self::Unrecognized => "unrecognized",
        }
    }
}

/// Stateless interaction router. Holds only its immutable response pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher {
    pool: ResponsePool,
}

impl Dispatcher {
    pub fn new(pool: ResponsePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> ResponsePool {
        self.pool
    }

    /// Dispatch using the thread-local RNG.
    pub fn dispatch(
        &self,
        interaction: &Interaction,
    ) -> Result<InteractionResponse, InteractionError> {
        self.dispatch_with(interaction, &mut rand::thread_rng())
    }

    pub fn dispatch_with<R: Rng + ?Sized>(
        &self,
        interaction: &Interaction,
        rng: &mut R,
    ) -> Result<InteractionResponse, InteractionError> {
        match interaction {
            Interaction::Ping => Ok(InteractionResponse::pong()),
            Interaction::ApplicationCommand { name } => match Command::from_name(name) {
                Some(command) => Ok(InteractionResponse::message(
                    self.pool.pick(rng),
                    command.flags(),
                )),
                None => Err(unrecognized(interaction)),
            },
            Interaction::MessageComponent { custom_id } => {
                match Component::from_custom_id(custom_id) {
                    Some(Component::AskGork) => Ok(InteractionResponse::message(
                        format!("{ASK_GORK_MARKER}{}", self.pool.pick(rng)),
                        MessageFlags::EPHEMERAL,
                    )),
                    None => Err(unrecognized(interaction)),
                }
            }
            Interaction::Other { .. } => Err(unrecognized(interaction)),
        }
    }
}

fn unrecognized(interaction: &Interaction) -> InteractionError {
    InteractionError::UnrecognizedInteraction { kind: interaction.kind() }
}
