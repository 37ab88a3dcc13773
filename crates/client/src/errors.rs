//! Client errors.

use thiserror::Error;

/// Errors returned by [`crate::RecordsClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a usable response.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured API root cannot have paths appended to it.
    #[error("invalid API url: {0}")]
    InvalidBaseUrl(String),

    /// The server answered with a non-success status.
    ///
    /// `message` is the server's `error` field when it sent one, otherwise a
    /// generic message for the operation.
    #[error("{message}")]
    Api {
        /// Response status code.
        status: u16,

        /// Human-readable failure.
        message: String,
    },
}
