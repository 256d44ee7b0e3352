// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RelayError>;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upstream request to {endpoint} failed: {message}")]
    UpstreamRequest {
        endpoint: String,
        status: Option<u16>,
        message: String,
    },

    #[error("Upstream protocol error: {0}")]
    UpstreamProtocol(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RelayError {
    /// Transport-level failure talking to an upstream endpoint. `status` is
    /// `None` when the request never produced a response (connect failure,
    /// broken stream).
    pub fn request(endpoint: &str, status: Option<u16>, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = match status {
            Some(code) => format!("status {}: {}", code, message),
            None => message,
        };
        Self::UpstreamRequest {
            endpoint: endpoint.to_string(),
            status,
            message,
        }
    }

    /// The upstream responded, but not in the shape this client expects.
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::UpstreamProtocol(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_includes_status() {
        let err = RelayError::request("https://example.com/init", Some(503), "unavailable");
        let rendered = err.to_string();
        assert!(rendered.contains("https://example.com/init"));
        assert!(rendered.contains("status 503"));
        assert!(rendered.contains("unavailable"));
    }

    #[test]
    fn test_request_error_without_status() {
        let err = RelayError::request("https://example.com/init", None, "connection refused");
        assert!(!err.to_string().contains("status"));
    }

    #[test]
    fn test_protocol_error_is_distinct_from_request_error() {
        let protocol = RelayError::protocol("missing session id");
        let request = RelayError::request("https://example.com", Some(500), "boom");
        assert!(matches!(protocol, RelayError::UpstreamProtocol(_)));
        assert!(matches!(request, RelayError::UpstreamRequest { .. }));
    }
}
