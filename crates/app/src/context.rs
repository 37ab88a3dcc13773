//! App Context

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::{
    auth::{AuthService, StaticTokenAuthService},
    database,
    domain::records::{KvRecordsService, RecordsService},
    store::{KvStore, MemoryKvStore, PgKvStore},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to run database migrations")]
    Migration(#[source] sqlx::migrate::MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub records: Arc<dyn RecordsService>,
    pub auth: Arc<dyn AuthService>,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

impl AppContext {
    /// Build application context backed by `PostgreSQL`, applying pending
    /// migrations first.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting or migrating fails.
    pub async fn from_database_url(url: &str, api_token: Option<&str>) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migration)?;

        info!("connected to postgres record store");

        Ok(Self::with_store(Arc::new(PgKvStore::new(pool)), api_token))
    }

    /// Build application context backed by a process-local store. Records do
    /// not survive a restart.
    #[must_use]
    pub fn in_memory(api_token: Option<&str>) -> Self {
        info!("using in-memory record store");

        Self::with_store(Arc::new(MemoryKvStore::new()), api_token)
    }

    fn with_store(store: Arc<dyn KvStore>, api_token: Option<&str>) -> Self {
        Self {
            records: Arc::new(KvRecordsService::new(store)),
            auth: Arc::new(StaticTokenAuthService::new(api_token)),
        }
    }
}
