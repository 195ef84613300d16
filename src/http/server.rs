//! HTTP server setup.
//!
//! # Responsibilities
//! - Wrap a per-service Axum router with the shared middleware stack
//!   (request timeout, tracing)
//! - Serve on a listener bound by the caller
//! - Stop cleanly when the shutdown signal fires

use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::TimeoutConfig;

/// HTTP server for one service process.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Wrap a service router with the middleware stack.
    pub fn new(router: Router, timeouts: &TimeoutConfig) -> Self {
        let router = router
            .layer(TimeoutLayer::new(Duration::from_secs(timeouts.request_secs)))
            .layer(TraceLayer::new_for_http());

        Self { router }
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// The listener is bound by the caller so tests can bind to an ephemeral
    /// port and read the address back before the server starts.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
