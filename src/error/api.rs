//! Errors raised by the backend API client.

use std::time::Duration;

use crate::traits::HttpError;

/// Normalized failure of a backend call.
///
/// Every transport problem is folded into one of these kinds. Nothing is
/// retried at this layer; each flow decides how to surface the failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The call did not complete within the configured timeout.
    #[error("Request timeout")]
    RequestTimeout {
        /// Endpoint path that timed out
        endpoint: String,
        /// The deadline that was exceeded
        timeout: Duration,
    },

    /// The backend answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Http {
        /// HTTP status code
        status: u16,
    },

    /// Connection-level failure (refused, reset, DNS, TLS, ...).
    #[error("Network error: {0}")]
    Network(String),

    /// A 2xx body did not have the shape the operation expects.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::RequestTimeout { .. } => "E_API_TIMEOUT",
            ApiError::Http { .. } => "E_API_HTTP",
            ApiError::Network(_) => "E_API_NETWORK",
            ApiError::InvalidResponse(_) => "E_API_INVALID",
        }
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status } => Some(*status),
            _ => None,
        }
    }

    /// Whether the call gave up on the deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::RequestTimeout { .. })
    }
}

impl From<HttpError> for ApiError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Timeout(msg) => ApiError::Network(format!("transport timeout: {}", msg)),
            HttpError::ConnectionFailed(msg)
            | HttpError::InvalidUrl(msg)
            | HttpError::Other(msg) => ApiError::Network(msg),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidResponse(err.to_string())
    }
}
