//! Create Record Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};
use tracing::debug;

use crate::{
    errors::ApiError,
    extensions::*,
    records::{
        errors::into_api_error,
        models::{CreateRecordRequest, RecordEnvelope},
    },
    state::State,
};

const FAILURE: &str = "Failed to create record";
const INVALID_BODY: &str = "Invalid request body";

/// Create Record Handler
///
/// The server assigns `id` and `createdAt`, and fills in `date` and `time`
/// when they are omitted. A body that is not a JSON object of string fields
/// is rejected with the same `{error}` shape as a validation failure.
#[endpoint(
    tags("records"),
    summary = "Create Record",
    security(("bearer_auth" = [])),
    request_body = CreateRecordRequest,
    responses(
        (status_code = StatusCode::CREATED, description = "Record created"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<RecordEnvelope>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let body = req
        .parse_json::<CreateRecordRequest>()
        .await
        .map_err(|error| {
            debug!("rejected record body: {error}");

            ApiError::bad_request(INVALID_BODY)
        })?;

    let record = state
        .app
        .records
        .create_record(body.into())
        .await
        .map_err(|error| into_api_error(error, FAILURE))?;

    let location = format!("{}/{}", req.uri().path().trim_end_matches('/'), record.id);

    res.add_header(LOCATION, location, true)
        .or_500(FAILURE)?
        .status_code(StatusCode::CREATED);

    Ok(Json(RecordEnvelope {
        record: record.into(),
    }))
}
