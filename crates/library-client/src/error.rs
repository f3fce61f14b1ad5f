//! Error types produced by the REST client.

use library_core::FieldError;

/// Error type sent by the backend when request validation fails.
pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";

/// Error type assumed when the backend does not name one.
pub const API_ERROR: &str = "API_ERROR";

/// A non-success response from the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable message, already localized by the backend.
    pub message: String,
    /// Error category, e.g. `VALIDATION_FAILED` or `API_ERROR`.
    pub error_type: String,
    /// HTTP status code of the response.
    pub status: u16,
    /// Field-level failures; only populated for validation errors.
    pub errors: Vec<FieldError>,
}

impl ApiError {
    /// Whether this error carries individual field failures to surface.
    pub fn is_validation(&self) -> bool {
        self.error_type == VALIDATION_FAILED
    }
}

/// Errors from a single client operation.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The backend answered with a non-success status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The request never completed (connection refused, timeout, ...).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response whose body did not match the expected shape.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL cannot be joined with an endpoint path.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// The typed backend error, if this is one.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_is_message() {
        let err = ApiError {
            message: "Book not found".to_string(),
            error_type: API_ERROR.to_string(),
            status: 404,
            errors: vec![],
        };
        assert_eq!(err.to_string(), "Book not found");
        assert!(!err.is_validation());
    }

    #[test]
    fn test_client_error_transparent() {
        let err = ClientError::from(ApiError {
            message: "bad".to_string(),
            error_type: VALIDATION_FAILED.to_string(),
            status: 400,
            errors: vec![FieldError::new("title", "blank")],
        });
        assert_eq!(err.to_string(), "bad");
        assert!(err.as_api().unwrap().is_validation());
    }
}
