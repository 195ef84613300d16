//! Inter-service call plumbing shared by the relay services.
//!
//! # Data Flow
//! ```text
//! relay handler (service B or C)
//!     → outbound GET to service A
//!     → success: A's body relayed verbatim
//!     → non-2xx: A's status and body propagated
//!     → transport failure: 502 Bad Gateway
//! ```
//!
//! # Design Decisions
//! - One outbound client per process, built at startup and reused
//! - Failures surface to the caller; no retries, no cached fallbacks
//! - Service B writes the client call inline; service C goes through
//!   [`ServiceAApi`] so the call site reads like a local method call
//! - Both styles share [`UpstreamError`], so they stay interchangeable
//!   from the caller's point of view

pub mod client;
pub mod error;

pub use client::{build_client, HttpServiceAClient, ServiceAApi};
pub use error::UpstreamError;
