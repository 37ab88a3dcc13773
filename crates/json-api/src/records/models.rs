//! Record wire types.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use sealife_app::domain::records::{MarineRecord, NewRecord, time_of_day};

/// A stored sighting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecordResponse {
    /// Server-assigned identifier
    pub id: String,

    /// Species observed
    pub species: String,

    /// Category value, e.g. `fish` or `turtle`
    pub category: String,

    /// Where the sighting happened
    pub location: String,

    /// Observation date, `YYYY-MM-DD`
    pub date: String,

    /// Observation time, `HH:MM`
    pub time: String,

    /// Free-text notes
    pub description: String,

    /// Image reference, empty when none was given
    pub image_url: String,

    /// Who reported the sighting
    pub observer_name: String,

    /// When the record was stored, RFC 3339
    pub created_at: String,
}

impl From<MarineRecord> for RecordResponse {
    fn from(record: MarineRecord) -> Self {
        RecordResponse {
            id: record.id.to_string(),
            species: record.species,
            category: record.category.into(),
            location: record.location,
            date: record.date.to_string(),
            time: time_of_day::format(record.time),
            description: record.description,
            image_url: record.image_url,
            observer_name: record.observer_name,
            created_at: record.created_at.to_string(),
        }
    }
}

/// Single record envelope
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RecordEnvelope {
    /// The record
    pub record: RecordResponse,
}

/// Record list envelope
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RecordsResponse {
    /// Every stored record, unordered
    pub records: Vec<RecordResponse>,
}

/// Create Record Request
///
/// Required fields are optional here so that an absent field reaches
/// validation and is reported as missing, rather than failing to parse.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct CreateRecordRequest {
    pub species: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    /// Defaults to today on the server
    pub date: Option<String>,
    /// Defaults to the current server time
    pub time: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub observer_name: Option<String>,
}

impl From<CreateRecordRequest> for NewRecord {
    fn from(request: CreateRecordRequest) -> Self {
        NewRecord {
            species: request.species.unwrap_or_default(),
            category: request.category.unwrap_or_default(),
            location: request.location.unwrap_or_default(),
            date: request.date,
            time: request.time,
            description: request.description.unwrap_or_default(),
            image_url: request.image_url,
            observer_name: request.observer_name.unwrap_or_default(),
        }
    }
}

/// Deletion acknowledgement
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DeletedResponse {
    /// Confirmation text
    pub message: String,
}
