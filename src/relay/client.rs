//! Outbound HTTP client construction and the typed service A client.

use async_trait::async_trait;

use crate::config::{TimeoutConfig, UpstreamConfig};
use crate::relay::error::UpstreamError;

/// Remote operations exposed by service A.
///
/// The declarative client style: a call site invokes a plain method with no
/// visible networking. The HTTP binding lives in [`HttpServiceAClient`] and
/// is chosen once, at startup.
#[async_trait]
pub trait ServiceAApi: Send + Sync {
    /// `GET /api/serviceA/hello` on the bound service A instance.
    async fn hello(&self) -> Result<String, UpstreamError>;
}

/// HTTP implementation of [`ServiceAApi`], bound to a base URL at startup.
pub struct HttpServiceAClient {
    client: reqwest::Client,
    upstream: UpstreamConfig,
}

impl HttpServiceAClient {
    pub fn new(client: reqwest::Client, upstream: UpstreamConfig) -> Self {
        Self { client, upstream }
    }
}

#[async_trait]
impl ServiceAApi for HttpServiceAClient {
    async fn hello(&self) -> Result<String, UpstreamError> {
        let url = self.upstream.url("/api/serviceA/hello");
        tracing::debug!(url = %url, "Calling service A");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(UpstreamError::Status { status, body });
        }
        Ok(body)
    }
}

/// Build the outbound HTTP client shared by both relay styles.
///
/// Built once per process and reused for every relay call. Timeouts are
/// finite, so a relay request is always answered within the configured
/// bound even when service A is unreachable.
pub fn build_client(timeouts: &TimeoutConfig) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .connect_timeout(timeouts.connect())
        .timeout(timeouts.upstream())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(base_url: String) -> HttpServiceAClient {
        let client = build_client(&TimeoutConfig::default()).unwrap();
        HttpServiceAClient::new(client, UpstreamConfig { base_url })
    }

    #[tokio::test]
    async fn test_hello_returns_upstream_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/serviceA/hello"))
            .respond_with(ResponseTemplate::new(200).set_body_string("Hello from service A"))
            .mount(&server)
            .await;

        let api = client_for(server.uri());
        let body = api.hello().await.unwrap();
        assert_eq!(body, "Hello from service A");
    }

    #[tokio::test]
    async fn test_hello_surfaces_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/serviceA/hello"))
            .respond_with(ResponseTemplate::new(500).set_body_string("service A is unwell"))
            .mount(&server)
            .await;

        let api = client_for(server.uri());
        match api.hello().await {
            Err(UpstreamError::Status { status, body }) => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(body, "service A is unwell");
            }
            other => panic!("expected Status error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_hello_surfaces_connection_failure() {
        // Port 1 is reserved; connections are refused immediately.
        let api = client_for("http://127.0.0.1:1".to_string());
        match api.hello().await {
            Err(UpstreamError::Transport(_)) => {}
            other => panic!("expected Transport error, got {:?}", other.map(|_| ())),
        }
    }
}
