//! Records Repository

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::{
    domain::records::{
        errors::RecordsServiceError,
        models::{MarineRecord, RecordId},
    },
    store::KvStore,
};

/// Key prefix shared by every stored record.
pub(crate) const RECORD_KEY_PREFIX: &str = "record:";

/// Version written alongside every stored record.
pub(crate) const SCHEMA_VERSION: u32 = 1;

/// Stored representation of a record.
///
/// Documents written before versioning was introduced have no
/// `schemaVersion` and read back as version 0.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordDocument {
    #[serde(default)]
    schema_version: u32,

    #[serde(flatten)]
    record: MarineRecord,
}

pub(crate) fn record_key(id: &RecordId) -> String {
    format!("{RECORD_KEY_PREFIX}{id}")
}

#[derive(Clone)]
pub(crate) struct KvRecordsRepository {
    store: Arc<dyn KvStore>,
}

impl Debug for KvRecordsRepository {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("KvRecordsRepository").finish_non_exhaustive()
    }
}

impl KvRecordsRepository {
    #[must_use]
    pub(crate) fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Every decodable record, in storage order. Malformed documents are
    /// logged and left out.
    pub(crate) async fn list_records(&self) -> Result<Vec<MarineRecord>, RecordsServiceError> {
        let values = self.store.list_by_prefix(RECORD_KEY_PREFIX).await?;

        Ok(values
            .into_iter()
            .filter_map(|value| match decode(value) {
                Ok(record) => Some(record),
                Err(source) => {
                    warn!("skipping malformed record document: {source}");

                    None
                }
            })
            .collect())
    }

    pub(crate) async fn get_record(
        &self,
        id: &RecordId,
    ) -> Result<Option<MarineRecord>, RecordsServiceError> {
        self.store
            .get(&record_key(id))
            .await?
            .map(decode)
            .transpose()
    }

    pub(crate) async fn put_record(&self, record: &MarineRecord) -> Result<(), RecordsServiceError> {
        let document = serde_json::to_value(RecordDocument {
            schema_version: SCHEMA_VERSION,
            record: record.clone(),
        })
        .map_err(RecordsServiceError::Document)?;

        self.store.set(&record_key(&record.id), document).await?;

        Ok(())
    }

    pub(crate) async fn delete_record(&self, id: &RecordId) -> Result<(), RecordsServiceError> {
        self.store.delete(&record_key(id)).await?;

        Ok(())
    }
}

fn decode(value: Value) -> Result<MarineRecord, RecordsServiceError> {
    serde_json::from_value::<RecordDocument>(value)
        .map(|document| document.record)
        .map_err(RecordsServiceError::Document)
}
