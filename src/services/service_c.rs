//! Service C, the declarative-style relay.
//!
//! # Responsibilities
//! - Serve `GET /api/serviceC/hello`
//! - Serve `GET /api/serviceC/call-serviceA` by forwarding service A's
//!   greeting, fetched through the typed [`ServiceAApi`] client
//!
//! # Design Decisions
//! - The handler sees only a method call; which host answers it was decided
//!   when the client was bound to a base URL at startup
//! - Wire behavior is identical to service B's relay, so the two styles are
//!   interchangeable from the caller's point of view

use std::sync::Arc;

use axum::{extract::State, routing::get, Router};

use crate::relay::{ServiceAApi, UpstreamError};

/// Greeting returned by service C.
pub const GREETING: &str = "Hello from service C";

/// Dependencies for service C, built once in the composition root.
#[derive(Clone)]
pub struct ServiceCState {
    /// Typed handle to service A.
    pub service_a: Arc<dyn ServiceAApi>,
}

/// Build the service C router.
pub fn router(state: ServiceCState) -> Router {
    Router::new()
        .route("/api/serviceC/hello", get(hello))
        .route("/api/serviceC/call-serviceA", get(call_service_a))
        .with_state(state)
}

async fn hello() -> &'static str {
    GREETING
}

async fn call_service_a(
    State(state): State<ServiceCState>,
) -> Result<String, UpstreamError> {
    state.service_a.hello().await
}
