//! Service A, the leaf of the mesh.
//!
//! # Responsibilities
//! - Serve `GET /api/serviceA/hello`
//! - Nothing else: no outbound calls, no state

use axum::{routing::get, Router};

/// Greeting returned by service A.
pub const GREETING: &str = "Hello from service A";

/// Build the service A router.
pub fn router() -> Router {
    Router::new().route("/api/serviceA/hello", get(hello))
}

async fn hello() -> &'static str {
    GREETING
}
