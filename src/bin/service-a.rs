//! Service A process: the leaf greeting service.

use clap::Parser;
use tokio::net::TcpListener;

use hello_mesh::config::{load_config, MeshConfig};
use hello_mesh::http::HttpServer;
use hello_mesh::lifecycle::{watch_interrupt, Shutdown};
use hello_mesh::observability::init_tracing;
use hello_mesh::services::service_a;

#[derive(Parser)]
#[command(name = "service-a", about = "Leaf greeting service", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Listen address override (default 127.0.0.1:8081).
    #[arg(short, long)]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => MeshConfig::service_a(),
    };
    if let Some(listen) = cli.listen {
        config.listener.bind_address = listen;
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    watch_interrupt(shutdown.clone());

    let server = HttpServer::new(service_a::router(), &config.timeouts);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
