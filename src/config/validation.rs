//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the bind address parses as a socket address
//! - Check the upstream base URL is a usable http(s) URL
//! - Validate value ranges (timeouts > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: MeshConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the process

use std::net::SocketAddr;
use thiserror::Error;
use url::Url;

use crate::config::schema::MeshConfig;

/// A single semantic configuration problem.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid bind address '{address}': {source}")]
    BindAddress {
        address: String,
        source: std::net::AddrParseError,
    },

    #[error("invalid upstream base URL '{url}': {source}")]
    BaseUrl { url: String, source: url::ParseError },

    #[error("unsupported upstream scheme '{scheme}', expected http or https")]
    UpstreamScheme { scheme: String },

    #[error("timeouts.{field} must be greater than zero")]
    ZeroTimeout { field: &'static str },
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &MeshConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(source) = config.listener.bind_address.parse::<SocketAddr>() {
        errors.push(ValidationError::BindAddress {
            address: config.listener.bind_address.clone(),
            source,
        });
    }

    match Url::parse(&config.upstream.base_url) {
        Ok(url) => {
            if url.scheme() != "http" && url.scheme() != "https" {
                errors.push(ValidationError::UpstreamScheme {
                    scheme: url.scheme().to_string(),
                });
            }
        }
        Err(source) => {
            errors.push(ValidationError::BaseUrl {
                url: config.upstream.base_url.clone(),
                source,
            });
        }
    }

    if config.timeouts.connect_secs == 0 {
        errors.push(ValidationError::ZeroTimeout {
            field: "connect_secs",
        });
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout {
            field: "request_secs",
        });
    }
    if config.timeouts.upstream_secs == 0 {
        errors.push(ValidationError::ZeroTimeout {
            field: "upstream_secs",
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
