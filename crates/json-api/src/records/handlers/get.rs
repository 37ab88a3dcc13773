//! Get Record Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use sealife_app::domain::records::RecordId;

use crate::{
    errors::ApiError,
    extensions::*,
    records::{errors::into_api_error, models::RecordEnvelope},
    state::State,
};

/// Get Record Handler
///
/// Returns a single record.
#[endpoint(
    tags("records"),
    summary = "Get Record",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<RecordEnvelope>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let record = state
        .app
        .records
        .get_record(RecordId::from(id.into_inner()))
        .await
        .map_err(|error| into_api_error(error, "Failed to fetch record"))?;

    Ok(Json(RecordEnvelope {
        record: record.into(),
    }))
}
