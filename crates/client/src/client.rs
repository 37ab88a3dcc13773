//! Records API client.

use reqwest::{Client, RequestBuilder, Response, Url, header::CONTENT_TYPE};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::error;

use sealife_app::domain::records::{MarineRecord, NewRecord, RecordId};

use crate::ClientError;

const LIST_FAILED: &str = "Failed to fetch records";
const GET_FAILED: &str = "Failed to fetch record";
const CREATE_FAILED: &str = "Failed to create record";
const DELETE_FAILED: &str = "Failed to delete record";
const HEALTH_FAILED: &str = "Health check failed";

/// Where the API lives and how to authenticate with it.
#[derive(Clone)]
pub struct ClientConfig {
    /// API root including any base path, e.g. `"https://example.org/make-server"`.
    pub base_url: String,

    /// Bearer token sent with every request.
    pub token: String,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// HTTP client for the records API.
///
/// Each call is a single request: there is no retry, caching or
/// de-duplication.
#[derive(Debug, Clone)]
pub struct RecordsClient {
    config: ClientConfig,
    http: Client,
}

#[derive(Debug, Deserialize)]
struct RecordsEnvelope {
    records: Vec<MarineRecord>,
}

#[derive(Debug, Deserialize)]
struct RecordEnvelope {
    record: MarineRecord,
}

#[derive(Debug, Deserialize)]
struct MessageEnvelope {
    message: String,
}

#[derive(Debug, Deserialize)]
struct HealthEnvelope {
    status: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<String>,
}

/// Create request body. `date`, `time` and `imageUrl` are omitted when unset
/// so the server applies its defaults.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Submission<'a> {
    species: &'a str,
    category: &'a str,
    location: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time: Option<&'a str>,
    description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_url: Option<&'a str>,
    observer_name: &'a str,
}

impl<'a> From<&'a NewRecord> for Submission<'a> {
    fn from(record: &'a NewRecord) -> Self {
        Self {
            species: &record.species,
            category: &record.category,
            location: &record.location,
            date: record.date.as_deref(),
            time: record.time.as_deref(),
            description: &record.description,
            image_url: record.image_url.as_deref(),
            observer_name: &record.observer_name,
        }
    }
}

impl RecordsClient {
    /// Create a client for the API described by `config`.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Server status string, `"ok"` when healthy.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success response.
    pub async fn health(&self) -> Result<String, ClientError> {
        let request = self.http.get(self.url(&["health"])?);
        let envelope: HealthEnvelope = execute(request, HEALTH_FAILED).await?;

        Ok(envelope.status)
    }

    /// Every stored record, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success response.
    pub async fn list_records(&self) -> Result<Vec<MarineRecord>, ClientError> {
        let request = self.authorized(self.http.get(self.url(&["records"])?));
        let envelope: RecordsEnvelope = execute(request, LIST_FAILED).await?;

        Ok(envelope.records)
    }

    /// A single record.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 404 for an unknown id.
    pub async fn get_record(&self, id: &RecordId) -> Result<MarineRecord, ClientError> {
        let request = self.authorized(self.http.get(self.url(&["records", id.as_str()])?));
        let envelope: RecordEnvelope = execute(request, GET_FAILED).await?;

        Ok(envelope.record)
    }

    /// Submit a new record and return it as stored, with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 400 when required fields are
    /// missing.
    pub async fn create_record(&self, record: &NewRecord) -> Result<MarineRecord, ClientError> {
        let request = self
            .authorized(self.http.post(self.url(&["records"])?))
            .json(&Submission::from(record));

        let envelope: RecordEnvelope = execute(request, CREATE_FAILED).await?;

        Ok(envelope.record)
    }

    /// Delete a record, returning the server's acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 404 for an unknown id.
    pub async fn delete_record(&self, id: &RecordId) -> Result<String, ClientError> {
        let request = self.authorized(self.http.delete(self.url(&["records", id.as_str()])?));
        let envelope: MessageEnvelope = execute(request, DELETE_FAILED).await?;

        Ok(envelope.message)
    }

    /// Append `segments` to the base URL, percent-encoding each one.
    fn url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let invalid = || ClientError::InvalidBaseUrl(self.config.base_url.clone());

        let mut url = Url::parse(&self.config.base_url).map_err(|error| {
            error!("invalid base url {}: {error}", self.config.base_url);

            invalid()
        })?;

        url.path_segments_mut()
            .map_err(|()| invalid())?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .bearer_auth(&self.config.token)
            .header(CONTENT_TYPE, "application/json")
    }
}

async fn execute<T: DeserializeOwned>(
    request: RequestBuilder,
    failure: &str,
) -> Result<T, ClientError> {
    let result = match request.send().await {
        Ok(response) => decode(response, failure).await,
        Err(source) => Err(ClientError::Http(source)),
    };

    if let Err(error) = &result {
        error!("{failure}: {error}");
    }

    result
}

async fn decode<T: DeserializeOwned>(response: Response, failure: &str) -> Result<T, ClientError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response.json().await?);
    }

    let message = response
        .json::<ErrorEnvelope>()
        .await
        .ok()
        .and_then(|body| body.error)
        .unwrap_or_else(|| failure.to_owned());

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
