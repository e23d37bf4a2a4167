//! Error types for the Arcaea game-data API client.

use thiserror::Error;

/// Errors that can occur when interacting with the API.
#[derive(Debug, Error)]
pub enum ArcaeaError {
    /// HTTP transport error (connection refused, timeout, TLS failure,
    /// or a non-2xx status on a binary asset endpoint).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not a well-formed `{status, message, content}`
    /// envelope: not JSON at all, missing `status`, an error status without a
    /// `message`, a success status without `content`, or content that does
    /// not match the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The API returned a negative `status` in its JSON envelope.
    ///
    /// Common codes:
    /// - `-1` / `-2` — invalid or unknown song
    /// - `-3` / `-4` — user not found / shadow banned
    /// - `-23`       — internal querying error
    #[error("API error (code {code}): {message}")]
    Api {
        /// Service status code from the envelope (not HTTP status).
        code: i64,
        /// Human-readable error message from the service, verbatim.
        message: String,
    },
}

/// Convenience alias for `Result<T, ArcaeaError>`.
pub type Result<T> = std::result::Result<T, ArcaeaError>;
