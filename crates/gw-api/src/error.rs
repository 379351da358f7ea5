//! Platform API error types.

use thiserror::Error;

/// Errors from a platform API exchange.
///
/// Every variant is recoverable: the caller reports it and decides whether the
/// user may retry. The adapter itself never retries.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure (connect, timeout, TLS, body read).
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("platform error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Server-provided `error` field, or the raw body.
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// The server refused the credentials.
    #[error("login rejected: {0}")]
    Rejected(String),
}

impl ApiError {
    /// Whether the user may retry the same action later.
    ///
    /// Only rejected credentials are final; transport failures, server
    /// statuses and malformed bodies may clear up on a later attempt.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }
}
