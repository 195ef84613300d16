//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Defaults describe a mesh running on one machine: service A on 8081,
//! service B on 8082, service C on 8083.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration for a single service process.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MeshConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream service A location. Unused by service A itself.
    pub upstream: UpstreamConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,
}

impl MeshConfig {
    /// Defaults for the service A process.
    pub fn service_a() -> Self {
        Self::default()
    }

    /// Defaults for the service B process.
    pub fn service_b() -> Self {
        Self {
            listener: ListenerConfig {
                bind_address: "127.0.0.1:8082".to_string(),
            },
            ..Self::default()
        }
    }

    /// Defaults for the service C process.
    pub fn service_c() -> Self {
        Self {
            listener: ListenerConfig {
                bind_address: "127.0.0.1:8083".to_string(),
            },
            ..Self::default()
        }
    }

    /// Apply environment overrides.
    ///
    /// `SERVICE_A_URL` replaces the upstream base URL. This is the one
    /// external setting a relay service needs when its defaults don't fit.
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("SERVICE_A_URL") {
            self.upstream.base_url = url;
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:8082").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8081".to_string(),
        }
    }
}

/// Location of the upstream service A instance.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL for service A (e.g., "http://127.0.0.1:8081").
    pub base_url: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8081".to_string(),
        }
    }
}

impl UpstreamConfig {
    /// Build a full URL by appending a path to the base URL.
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}

/// Timeout configuration for inbound and outbound requests.
///
/// The outbound bound is kept below the inbound one so a relay answers with
/// its own error before the server-side timeout cuts the request off.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Connection establishment timeout for outbound calls, in seconds.
    pub connect_secs: u64,

    /// Inbound request timeout (total time for request/response) in seconds.
    pub request_secs: u64,

    /// Total timeout for one outbound call to service A, in seconds.
    pub upstream_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 5,
            request_secs: 30,
            upstream_secs: 10,
        }
    }
}

impl TimeoutConfig {
    /// Connect timeout as a Duration.
    pub fn connect(&self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }

    /// Inbound request timeout as a Duration.
    pub fn request(&self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    /// Outbound call timeout as a Duration.
    pub fn upstream(&self) -> Duration {
        Duration::from_secs(self.upstream_secs)
    }
}
