//! Key-value record store.
//!
//! Every record lives under a string key. Enumerating a family of values is a
//! prefix scan over those keys; there are no secondary indices.

use async_trait::async_trait;
use mockall::automock;
use serde_json::Value;
use thiserror::Error;

mod memory;
mod postgres;

pub use memory::MemoryKvStore;
pub use postgres::PgKvStore;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database backend failed.
    #[error("database error: {0}")]
    Sql(#[from] sqlx::Error),
}

/// Durable mapping from string keys to JSON values.
#[automock]
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Fetch the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError>;

    /// Remove `key`. Removing an absent key succeeds.
    async fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Fetch every value whose key starts with `prefix`, in no particular order.
    async fn list_by_prefix(&self, prefix: &str) -> Result<Vec<Value>, StoreError>;
}
