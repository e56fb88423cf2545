//! Gateway errors and their HTTP rendering.
//!
//! Bodies are plain text and deliberately vague: an authentication failure
//! looks the same whatever check tripped.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gork_core::InteractionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("bad request signature")]
    Unauthorized,

    #[error(transparent)]
    Interaction(#[from] InteractionError),
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Interaction(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Outcome label for the interaction event log.
    pub fn outcome(&self) -> &'static str {
        match self {
            Self::Unauthorized => "unauthorized",
            Self::Interaction(InteractionError::MalformedPayload(_)) => "malformed",
            Self::Interaction(InteractionError::UnrecognizedInteraction { .. }) => "unrecognized",
        }
    }

    fn body(&self) -> &'static str {
        match self {
            Self::Unauthorized => "Bad request signature.",
            Self::Interaction(InteractionError::MalformedPayload(_)) => "Malformed payload.",
            Self::Interaction(InteractionError::UnrecognizedInteraction { .. }) => "Unknown Type",
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        (self.status(), self.body()).into_response()
    }
}
