//! The three HTTP service surfaces.
//!
//! Each service is an `axum::Router` built by a plain function. Services
//! with dependencies (B and C) take them as an explicit state struct,
//! constructed once in the binary's composition root. There is no shared
//! mutable state; every request is handled independently.

pub mod service_a;
pub mod service_b;
pub mod service_c;
