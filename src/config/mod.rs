//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults (per service role)
//!     → loader.rs (optional TOML file: parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → SERVICE_A_URL env override, CLI flag overrides
//!     → MeshConfig (immutable)
//!     → passed to the composition root at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once the process is up
//! - All fields have defaults so a config file is optional
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ListenerConfig, MeshConfig, TimeoutConfig, UpstreamConfig};
