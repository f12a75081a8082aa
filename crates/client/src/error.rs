//! Error taxonomy for the data-access layer.
//!
//! Repositories catch transport errors and surface [`ApiError`] values with
//! user-facing messages. Reads are retried once on retryable failures;
//! mutations are never retried automatically.

use thiserror::Error;

/// Errors that can occur when talking to the PawMart backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport or network failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication rejected (401/403). Carries the user-facing message.
    #[error("{0}")]
    Unauthorized(String),

    /// Response body did not match the expected shape.
    #[error("Unexpected response shape: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limited by the backend, retry after the given seconds.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Domain validation failed before any request was attempted.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Backend returned data that cannot be represented in the domain.
    #[error("Data error: {0}")]
    Data(String),

    /// Any other non-success response from the backend.
    #[error("Backend error ({status}): {message}")]
    Backend {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body, or the status text.
        message: String,
    },
}

impl ApiError {
    /// Whether an idempotent read may be retried after this error.
    ///
    /// Transport failures and 5xx responses are retryable; everything the
    /// backend decided on purpose (4xx, parse and validation failures) is
    /// not.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(_) => true,
            Self::Backend { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// Result type alias for `ApiError`.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_joins_messages() {
        let err = ApiError::Validation(vec![
            "title is required".to_owned(),
            "price must not be negative".to_owned(),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: title is required; price must not be negative"
        );
    }

    #[test]
    fn test_backend_errors_above_500_are_retryable() {
        let err = ApiError::Backend {
            status: 502,
            message: "bad gateway".to_owned(),
        };
        assert!(err.is_retryable());

        let err = ApiError::Backend {
            status: 400,
            message: "bad request".to_owned(),
        };
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_unauthorized_displays_message_verbatim() {
        let err = ApiError::Unauthorized("Session expired, please sign in again".to_owned());
        assert_eq!(err.to_string(), "Session expired, please sign in again");
    }

    #[test]
    fn test_not_found_and_rate_limited_display() {
        assert_eq!(
            ApiError::NotFound("product 123".to_owned()).to_string(),
            "Not found: product 123"
        );
        assert_eq!(
            ApiError::RateLimited(60).to_string(),
            "Rate limited, retry after 60 seconds"
        );
    }
}
