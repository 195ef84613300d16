//! HTTP server plumbing.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → per-service router (services::*)
//!     → response to client
//! ```

pub mod server;

pub use server::HttpServer;
