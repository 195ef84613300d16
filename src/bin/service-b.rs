//! Service B process: greeting plus an imperative-client relay to service A.

use clap::Parser;
use tokio::net::TcpListener;

use hello_mesh::config::{load_config, MeshConfig};
use hello_mesh::http::HttpServer;
use hello_mesh::lifecycle::{watch_interrupt, Shutdown};
use hello_mesh::observability::init_tracing;
use hello_mesh::relay::build_client;
use hello_mesh::services::service_b::{self, ServiceBState};

#[derive(Parser)]
#[command(name = "service-b", about = "Greeting service with an imperative relay to service A", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Listen address override (default 127.0.0.1:8082).
    #[arg(short, long)]
    listen: Option<String>,

    /// Base URL of service A (default http://127.0.0.1:8081).
    #[arg(long)]
    service_a_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => MeshConfig::service_b(),
    };
    config.apply_env();
    if let Some(listen) = cli.listen {
        config.listener.bind_address = listen;
    }
    if let Some(url) = cli.service_a_url {
        config.upstream.base_url = url;
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        service_a_url = %config.upstream.base_url,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    // Composition root: one client for the life of the process.
    let state = ServiceBState {
        client: build_client(&config.timeouts)?,
        upstream: config.upstream.clone(),
    };

    let shutdown = Shutdown::new();
    watch_interrupt(shutdown.clone());

    let server = HttpServer::new(service_b::router(state), &config.timeouts);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
