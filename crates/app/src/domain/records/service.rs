//! Records service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::{
    Timestamp, Zoned,
    civil::{Date, time},
};
use mockall::automock;
use tracing::{debug, info};

use crate::{
    domain::records::{
        data::NewRecord,
        errors::RecordsServiceError,
        models::{MarineRecord, RecordId, time_of_day},
        repository::KvRecordsRepository,
    },
    store::KvStore,
};

#[derive(Debug, Clone)]
pub struct KvRecordsService {
    repository: KvRecordsRepository,
}

impl KvRecordsService {
    #[must_use]
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            repository: KvRecordsRepository::new(store),
        }
    }
}

#[async_trait]
impl RecordsService for KvRecordsService {
    async fn list_records(&self) -> Result<Vec<MarineRecord>, RecordsServiceError> {
        let records = self.repository.list_records().await?;

        debug!(count = records.len(), "listed records");

        Ok(records)
    }

    async fn get_record(&self, id: RecordId) -> Result<MarineRecord, RecordsServiceError> {
        self.repository
            .get_record(&id)
            .await?
            .ok_or(RecordsServiceError::NotFound)
    }

    async fn create_record(&self, record: NewRecord) -> Result<MarineRecord, RecordsServiceError> {
        let record = build_record(record, &Zoned::now())?;

        self.repository.put_record(&record).await?;

        info!(id = %record.id, category = %record.category, "record created");

        Ok(record)
    }

    async fn delete_record(&self, id: RecordId) -> Result<(), RecordsServiceError> {
        if self.repository.get_record(&id).await?.is_none() {
            return Err(RecordsServiceError::NotFound);
        }

        self.repository.delete_record(&id).await?;

        info!(id = %id, "record deleted");

        Ok(())
    }
}

/// Validate a submission and stamp it with identity and server-side defaults.
fn build_record(new: NewRecord, now: &Zoned) -> Result<MarineRecord, RecordsServiceError> {
    if !new.has_required_fields() {
        return Err(RecordsServiceError::MissingRequiredData);
    }

    let date = match non_blank(new.date) {
        Some(value) => value
            .parse::<Date>()
            .map_err(RecordsServiceError::InvalidDateTime)?,
        None => now.date(),
    };

    let time = match non_blank(new.time) {
        Some(value) => time_of_day::parse(&value).map_err(RecordsServiceError::InvalidDateTime)?,
        None => time(now.hour(), now.minute(), 0, 0),
    };

    Ok(MarineRecord {
        id: RecordId::generate(),
        species: new.species,
        category: new.category.into(),
        location: new.location,
        date,
        time,
        description: new.description,
        image_url: new.image_url.unwrap_or_default(),
        observer_name: new.observer_name,
        created_at: Timestamp::now(),
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

#[automock]
#[async_trait]
pub trait RecordsService: Send + Sync {
    /// Retrieves every record, in no particular order.
    async fn list_records(&self) -> Result<Vec<MarineRecord>, RecordsServiceError>;

    /// Retrieve a single record.
    async fn get_record(&self, id: RecordId) -> Result<MarineRecord, RecordsServiceError>;

    /// Validates and stores a new record, assigning its identity.
    async fn create_record(&self, record: NewRecord) -> Result<MarineRecord, RecordsServiceError>;

    /// Deletes the record with the given id.
    async fn delete_record(&self, id: RecordId) -> Result<(), RecordsServiceError>;
}
