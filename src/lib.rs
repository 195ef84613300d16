//! Hello Mesh
//!
//! Three small HTTP services demonstrating synchronous service-to-service
//! calls, with two client styles side by side.
//!
//! # Architecture Overview
//!
//! ```text
//!                    GET /api/serviceB/call-serviceA
//!   Client ─────────▶ ┌───────────────┐
//!                     │   service B   │── reqwest GET ──┐
//!                     │  (imperative) │                 │
//!                     └───────────────┘                 ▼
//!                                               ┌───────────────┐
//!                                               │   service A   │
//!                                               │    (leaf)     │
//!                                               └───────────────┘
//!                     ┌───────────────┐                 ▲
//!                     │   service C   │── ServiceAApi ──┘
//!                     │ (declarative) │     ::hello()
//!   Client ─────────▶ └───────────────┘
//!                    GET /api/serviceC/call-serviceA
//! ```
//!
//! Each service runs as its own process (`src/bin/service-{a,b,c}.rs`) on its
//! own port. Service A answers a fixed greeting. Services B and C additionally
//! relay A's greeting to their own callers: B builds the outbound request at
//! the call site with a general-purpose client, C calls a method on a typed
//! client interface whose networking was bound to a base URL at startup. Both
//! produce identical wire behavior.

// Core subsystems
pub mod config;
pub mod http;
pub mod relay;
pub mod services;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::MeshConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
