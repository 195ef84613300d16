//! OS signal handling.
//!
//! Translates Ctrl+C into the internal shutdown event so every service
//! process drains in the same way.

use crate::lifecycle::Shutdown;

/// Spawn a task that triggers shutdown on Ctrl+C.
pub fn watch_interrupt(shutdown: Shutdown) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Shutdown signal received");
                shutdown.trigger();
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            }
        }
    });
}
