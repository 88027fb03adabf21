//! Error types for a3s-policy-scan

use thiserror::Error;

/// Errors that can occur while scanning policy text
#[derive(Debug, Error)]
pub enum ScanError {
    /// Caller supplied empty or missing input; raised before any matching
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unexpected failure inside the engine (e.g. a pattern failed to compile)
    #[error("Internal failure: {0}")]
    Internal(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML config could not be parsed
    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

impl ScanError {
    /// Whether the failure was caused by the caller rather than the engine
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

/// Result type alias for scan operations
pub type Result<T> = std::result::Result<T, ScanError>;

impl axum::response::IntoResponse for ScanError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;

        let status = if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        tracing::warn!(status = status.as_u16(), error = %self, "Request failed");

        let body = serde_json::json!({ "detail": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_client_error() {
        let err = ScanError::InvalidInput("text must not be empty".to_string());
        assert!(err.is_client_error());
        assert_eq!(err.to_string(), "Invalid input: text must not be empty");
    }

    #[test]
    fn test_internal_is_not_client_error() {
        let err = ScanError::Internal("regex too big".to_string());
        assert!(!err.is_client_error());
        assert_eq!(err.to_string(), "Internal failure: regex too big");
    }

    #[test]
    fn test_status_mapping() {
        use axum::http::StatusCode;
        use axum::response::IntoResponse;

        let resp = ScanError::InvalidInput("x".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = ScanError::Internal("x".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
