//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use tracing::error;

use crate::errors::ApiError;

/// Map any error to a logged internal server error.
pub(crate) trait ResultExt<T> {
    /// `failure` becomes the response's `error`; the error itself its `details`.
    fn or_500(self, failure: &str) -> Result<T, ApiError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, failure: &str) -> Result<T, ApiError> {
        self.map_err(|error| {
            error!("{failure}: {error}");

            ApiError::internal(failure, error)
        })
    }
}
