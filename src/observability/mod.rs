//! Observability.
//!
//! Structured logging only. Each process logs startup configuration and
//! per-request traces via `tower_http::trace`; relay failures are logged at
//! the point they are mapped to a response.

pub mod logging;

pub use logging::init_tracing;
