//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;

use hello_mesh::config::{MeshConfig, TimeoutConfig};
use hello_mesh::http::HttpServer;
use hello_mesh::lifecycle::Shutdown;
use hello_mesh::relay::HttpServiceAClient;
use hello_mesh::services::service_a;
use hello_mesh::services::service_b::{self, ServiceBState};
use hello_mesh::services::service_c::{self, ServiceCState};

/// Relay configuration pointing at the given service A address.
pub fn relay_config(service_a_addr: SocketAddr) -> MeshConfig {
    let mut config = MeshConfig::service_b();
    config.upstream.base_url = format!("http://{}", service_a_addr);
    config
}

/// Outbound client for a service under test.
///
/// Same timeouts the composition root would use, plus `no_proxy` for test
/// stability.
fn outbound_client(timeouts: &TimeoutConfig) -> reqwest::Client {
    reqwest::Client::builder()
        .connect_timeout(timeouts.connect())
        .timeout(timeouts.upstream())
        .no_proxy()
        .build()
        .unwrap()
}

/// Proxy-free client for driving the services from the test.
pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

async fn spawn(router: axum::Router, config: &MeshConfig, shutdown: &Shutdown) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(router, &config.timeouts);
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    addr
}

/// Start service A on an ephemeral port.
pub async fn spawn_service_a(shutdown: &Shutdown) -> SocketAddr {
    let config = MeshConfig::service_a();
    spawn(service_a::router(), &config, shutdown).await
}

/// Start service B with the given configuration.
pub async fn spawn_service_b(shutdown: &Shutdown, config: MeshConfig) -> SocketAddr {
    let state = ServiceBState {
        client: outbound_client(&config.timeouts),
        upstream: config.upstream.clone(),
    };
    spawn(service_b::router(state), &config, shutdown).await
}

/// Start service C with the given configuration.
pub async fn spawn_service_c(shutdown: &Shutdown, config: MeshConfig) -> SocketAddr {
    let client = HttpServiceAClient::new(outbound_client(&config.timeouts), config.upstream.clone());
    let state = ServiceCState {
        service_a: Arc::new(client),
    };
    spawn(service_c::router(state), &config, shutdown).await
}

/// Stand-in for service A that answers every request with a fixed status
/// and body, speaking raw HTTP/1.1.
#[allow(dead_code)]
pub async fn spawn_faulty_upstream(status: u16, body: &'static str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        let status_text = match status {
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };
                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Stand-in for service A that accepts connections and never answers.
#[allow(dead_code)]
pub async fn spawn_hanging_upstream() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let mut open = Vec::new();
        loop {
            match listener.accept().await {
                Ok((socket, _)) => open.push(socket),
                Err(_) => break,
            }
        }
    });

    addr
}
