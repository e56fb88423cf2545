//! `POST /interactions`: verify, decode, dispatch.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::HeaderMap,
};
use gork_core::{DispatchOutcome, Interaction, InteractionResponse};
use gork_logging::{InteractionEvent, InteractionEventLogger};
use gork_security::{SIGNATURE_HEADER, TIMESTAMP_HEADER, try_verify};
use tracing::{debug, warn};

use crate::error::GatewayError;
use crate::server::GatewayState;

pub async fn handle_interaction(
    State(state): State<GatewayState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<InteractionResponse>, GatewayError> {
    // 1. Verify over the raw bytes, before anything looks at the body.
    let signature = header_str(&headers, SIGNATURE_HEADER);
    let timestamp = header_str(&headers, TIMESTAMP_HEADER);
    if let Err(reason) = try_verify(signature, timestamp, &body, state.public_key.as_deref()) {
        warn!("Invalid request signature, rejecting interaction");
        debug!(reason = %reason, "Signature check failed");
        return Err(reject(None, GatewayError::Unauthorized, Some(reason.to_string())));
    }

    // 2. Decode
    let interaction = match Interaction::from_slice(&body) {
        Ok(interaction) => interaction,
        Err(err) => {
            let detail = err.log_detail();
            return Err(reject(None, err.into(), Some(detail)));
        }
    };
    let kind = interaction.kind().0;
    debug!(kind, interaction = ?interaction, "Decoded interaction");

    // 3. Dispatch
    let result = state.dispatcher.dispatch(&interaction);
    let outcome = DispatchOutcome::of(&result);
    match result {
        Ok(response) => {
            InteractionEventLogger::log(InteractionEvent::new(Some(kind), outcome.as_str(), 200));
            Ok(Json(response))
        }
        Err(err) => Err(reject(Some(kind), err.into(), None)),
    }
}

fn reject(kind: Option<u64>, err: GatewayError, detail: Option<String>) -> GatewayError {
    let mut event = InteractionEvent::new(kind, err.outcome(), err.status().as_u16());
    if let Some(detail) = detail {
        event = event.with_detail(detail);
    }
    InteractionEventLogger::log(event);
    err
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
