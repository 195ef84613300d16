//! Errors surfaced by relay endpoints.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failure of an outbound call to service A.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// No usable response: connection refused, timeout, or the body could
    /// not be read.
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Service A answered, but with a non-success status.
    #[error("upstream returned {status}")]
    Status { status: StatusCode, body: String },
}

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        match self {
            UpstreamError::Transport(e) => {
                tracing::error!(error = %e, "Upstream request failed");
                (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response()
            }
            // A answered for itself; pass its verdict through unchanged.
            UpstreamError::Status { status, body } => {
                tracing::warn!(status = %status, "Upstream returned error status");
                (status, body).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_propagated() {
        let response = UpstreamError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".to_string(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_status_display() {
        let err = UpstreamError::Status {
            status: StatusCode::SERVICE_UNAVAILABLE,
            body: String::new(),
        };
        assert_eq!(err.to_string(), "upstream returned 503 Service Unavailable");
    }
}
