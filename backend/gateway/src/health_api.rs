//! Liveness probe.

use axum::extract::State;

use crate::server::GatewayState;

/// Handler for `GET /`
pub async fn liveness(State(state): State<GatewayState>) -> String {
    match state.application_id.as_deref() {
        Some(id) => format!("👋 {id}"),
        None => "👋 gork is up".to_string(),
    }
}
