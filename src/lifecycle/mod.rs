//! Process lifecycle.
//!
//! # Data Flow
//! ```text
//! Ctrl+C / SIGINT
//!     → signals.rs (translate to internal event)
//!     → shutdown.rs (broadcast to running tasks)
//!     → HttpServer stops accepting and drains
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::watch_interrupt;
