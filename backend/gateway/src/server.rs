//! Main HTTP Gateway Server.
//!
//! The routing table is fixed: it is built once in [`build_router`] and
//! never changed afterwards.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    Router,
    routing::{get, post},
};
use gork_core::Dispatcher;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument, warn};

use crate::health_api;
use crate::interactions;

/// Read-only state shared by every request.
#[derive(Clone, Default)]
pub struct GatewayState {
    /// Hex-encoded Ed25519 public key; `None` rejects every interaction.
    pub public_key: Option<Arc<str>>,
    pub application_id: Option<Arc<str>>,
    pub dispatcher: Dispatcher,
}

impl GatewayState {
    pub fn new(public_key: Option<&str>) -> Self {
        Self {
            public_key: public_key.map(Arc::from),
            ..Default::default()
        }
    }

    pub fn with_application_id(mut self, application_id: Option<&str>) -> Self {
        self.application_id = application_id.map(Arc::from);
        self
    }

    pub fn with_dispatcher(mut self, dispatcher: Dispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }
}

/// Build the router: `GET /` and `POST /interactions`.
pub fn build_router(state: GatewayState) -> Router {
    Router::new()
        .route("/", get(health_api::liveness))
        .route("/interactions", post(interactions::handle_interaction))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until Ctrl-C.
#[instrument(skip(state))]
pub async fn start_server(addr: SocketAddr, state: GatewayState) -> Result<()> {
    if state.public_key.is_none() {
        warn!("No public key configured; all interactions will be rejected");
    }

    let app = build_router(state);

    let listener = TcpListener::bind(&addr).await?;
    info!("Gateway HTTP server listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Gateway HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
