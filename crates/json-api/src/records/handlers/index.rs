//! Record Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    errors::ApiError,
    extensions::*,
    records::{errors::into_api_error, models::RecordsResponse},
    state::State,
};

/// Record Index Handler
///
/// Returns every stored record. Ordering is left to the caller.
#[endpoint(
    tags("records"),
    summary = "List Records",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<RecordsResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let records = state
        .app
        .records
        .list_records()
        .await
        .map_err(|error| into_api_error(error, "Failed to fetch records"))?;

    Ok(Json(RecordsResponse {
        records: records.into_iter().map(Into::into).collect(),
    }))
}
