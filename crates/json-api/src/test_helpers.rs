//! Test helpers.

use std::sync::Arc;

use jiff::{
    Timestamp,
    civil::{date, time},
};
use salvo::{affix_state::inject, prelude::*};

use sealife_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::records::{MarineRecord, MockRecordsService, RecordId, RecordsServiceError},
};

use crate::state::State;

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate_bearer().never();

    auth
}

fn strict_records_mock() -> MockRecordsService {
    let mut records = MockRecordsService::new();

    records.expect_list_records().never();
    records.expect_get_record().never();
    records.expect_create_record().never();
    records.expect_delete_record().never();

    records
}

fn make_state(records: MockRecordsService, auth: MockAuthService) -> Arc<State> {
    State::from_app_context(AppContext {
        records: Arc::new(records),
        auth: Arc::new(auth),
    })
}

pub(crate) fn state_with_records(records: MockRecordsService) -> Arc<State> {
    make_state(records, strict_auth_mock())
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    make_state(strict_records_mock(), auth)
}

pub(crate) fn records_service(records: MockRecordsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_records(records)))
            .push(route),
    )
}

pub(crate) fn make_record(id: &str, species: &str, category: &str) -> MarineRecord {
    MarineRecord {
        id: RecordId::from(id),
        species: species.to_string(),
        category: category.into(),
        location: "Jeju harbour".to_string(),
        date: date(2024, 1, 1),
        time: time(9, 0, 0, 0),
        description: "Surfacing near the breakwater".to_string(),
        image_url: String::new(),
        observer_name: "Kim".to_string(),
        created_at: Timestamp::UNIX_EPOCH,
    }
}

/// A failure the service cannot attribute to the caller.
pub(crate) fn internal_failure() -> RecordsServiceError {
    match serde_json::from_str::<MarineRecord>("{}") {
        Err(source) => RecordsServiceError::Document(source),
        Ok(_) => RecordsServiceError::NotFound,
    }
}
