//! API client error types.

use desk_core::CoreError;
use thiserror::Error;

/// Errors raised by [`crate::ApiClient`] and the response helpers.
///
/// Request functions only ever return [`ApiError::Http`],
/// [`ApiError::NotAuthenticated`] or [`ApiError::ChatTimeout`]; status-based
/// variants come from [`crate::check_response`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure: connect, timeout, body encoding.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// No session token is available for an authenticated call.
    #[error("not authenticated — run `desk login`")]
    NotAuthenticated,

    /// The backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body.
        message: String,
    },

    /// The backend returned 429 Too Many Requests.
    #[error("rate limited — retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// No chat response arrived within the chat timeout.
    #[error("no answer within {0:?}")]
    ChatTimeout(std::time::Duration),

    /// The configured origin is not an absolute http(s) URL.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The response envelope carried a failure code, or the body was not
    /// the expected shape.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ApiError {
    /// Whether the request was aborted by a timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::ChatTimeout(_) => true,
            Self::Http(e) => e.is_timeout(),
            _ => false,
        }
    }
}
