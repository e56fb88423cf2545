use thiserror::Error;

use crate::interaction::InteractionKind;

/// Errors produced while decoding or dispatching an interaction.
#[derive(Debug, Error)]
pub enum InteractionError {
    /// The body is not JSON, or lacks an integer `type`.
    #[error("malformed interaction payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// No dispatch rule matches the interaction.
    #[error("unrecognized interaction (type {kind})")]
    UnrecognizedInteraction { kind: InteractionKind },
}

impl InteractionError {
    /// Log-safe description of the failure.
    ///
    /// `serde_json` messages quote the offending input, so a decode failure is
    /// reported by category and position only.
    pub fn log_detail(&self) -> String {
        match self {
            Self::MalformedPayload(err) => {
                format!("{:?} at {}:{}", err.classify(), err.line(), err.column())
            }
            Self::UnrecognizedInteraction { .. } => self.to_string(),
        }
    }
}
