//! Records service errors.

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum RecordsServiceError {
    #[error("missing required fields")]
    MissingRequiredData,

    #[error("invalid date or time")]
    InvalidDateTime(#[source] jiff::Error),

    #[error("record not found")]
    NotFound,

    #[error(transparent)]
    Storage(#[from] StoreError),

    #[error("malformed record document: {0}")]
    Document(#[source] serde_json::Error),
}
