//! Service B, the imperative-style relay.
//!
//! # Responsibilities
//! - Serve `GET /api/serviceB/hello`
//! - Serve `GET /api/serviceB/call-serviceA` by forwarding service A's
//!   greeting, fetched with a general-purpose HTTP client
//!
//! # Design Decisions
//! - The outbound request is assembled at the call site; contrast with
//!   service C, where the same call is a method on a typed client
//! - The client is built once at startup and reused per call

use axum::{extract::State, routing::get, Router};

use crate::config::UpstreamConfig;
use crate::relay::UpstreamError;

/// Greeting returned by service B.
pub const GREETING: &str = "Hello from service B";

/// Dependencies for service B, built once in the composition root.
#[derive(Clone)]
pub struct ServiceBState {
    /// Outbound HTTP client, reused across requests.
    pub client: reqwest::Client,

    /// Where service A lives.
    pub upstream: UpstreamConfig,
}

/// Build the service B router.
pub fn router(state: ServiceBState) -> Router {
    Router::new()
        .route("/api/serviceB/hello", get(hello))
        .route("/api/serviceB/call-serviceA", get(call_service_a))
        .with_state(state)
}

async fn hello() -> &'static str {
    GREETING
}

async fn call_service_a(
    State(state): State<ServiceBState>,
) -> Result<String, UpstreamError> {
    let url = state.upstream.url("/api/serviceA/hello");
    tracing::debug!(url = %url, "Calling service A");

    let response = state.client.get(&url).send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(UpstreamError::Status { status, body });
    }
    Ok(body)
}
