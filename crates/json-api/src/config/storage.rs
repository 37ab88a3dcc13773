//! Storage Config

use clap::Args;

/// Which record store backs the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum StorageBackend {
    /// `PostgreSQL` `kv_store` table.
    Postgres,

    /// Process-local map, lost on restart.
    Memory,
}

/// Record store settings.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// Record store backend (postgres, memory)
    #[arg(long = "storage-backend", env = "STORAGE_BACKEND", value_enum, default_value_t = StorageBackend::Postgres)]
    pub backend: StorageBackend,

    /// `PostgreSQL` connection string, required for the postgres backend
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,
}
