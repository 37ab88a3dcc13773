//! Record Errors

use tracing::error;

use sealife_app::domain::records::RecordsServiceError;

use crate::errors::ApiError;

/// Map a service failure onto the response for the operation that hit it.
///
/// `failure` names the operation and is only used for internal errors.
pub(crate) fn into_api_error(error: RecordsServiceError, failure: &str) -> ApiError {
    match error {
        RecordsServiceError::MissingRequiredData => ApiError::bad_request("Missing required fields"),
        RecordsServiceError::InvalidDateTime(_) => ApiError::bad_request("Invalid date or time"),
        RecordsServiceError::NotFound => ApiError::not_found("Record not found"),
        error @ (RecordsServiceError::Storage(_) | RecordsServiceError::Document(_)) => {
            error!("{failure}: {error}");

            ApiError::internal(failure, error)
        }
    }
}
