//! Delete Record Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use sealife_app::domain::records::RecordId;

use crate::{
    errors::ApiError,
    extensions::*,
    records::{errors::into_api_error, models::DeletedResponse},
    state::State,
};

/// Delete Record Handler
#[endpoint(
    tags("records"),
    summary = "Delete Record",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<DeletedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .records
        .delete_record(RecordId::from(id.into_inner()))
        .await
        .map_err(|error| into_api_error(error, "Failed to delete record"))?;

    Ok(Json(DeletedResponse {
        message: "Record deleted successfully".to_string(),
    }))
}
