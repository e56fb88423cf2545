//! gork Gateway HTTP Server
//!
//! Serves the signed interactions webhook and a liveness probe.

pub mod error;
pub mod health_api;
pub mod interactions;
pub mod server;

pub use error::GatewayError;
pub use server::{GatewayState, build_router, start_server};
