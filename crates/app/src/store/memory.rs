//! In-memory store

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::{KvStore, StoreError};

/// Process-local store backed by an ordered map.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: RwLock<BTreeMap<String, Value>>,
}

impl MemoryKvStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the store holds no keys.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.entries.write().await.insert(key.to_owned(), value);

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.entries.write().await.remove(key);

        Ok(())
    }

    async fn list_by_prefix(&self, prefix: &str) -> Result<Vec<Value>, StoreError> {
        let entries = self.entries.read().await;

        Ok(entries
            .range(prefix.to_owned()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(_, value)| value.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn get_returns_value_after_set() -> TestResult {
        let store = MemoryKvStore::new();

        store.set("record:1", json!({ "species": "Clownfish" })).await?;

        assert_eq!(
            store.get("record:1").await?,
            Some(json!({ "species": "Clownfish" }))
        );

        Ok(())
    }

    #[tokio::test]
    async fn set_overwrites_existing_value() -> TestResult {
        let store = MemoryKvStore::new();

        store.set("record:1", json!(1)).await?;
        store.set("record:1", json!(2)).await?;

        assert_eq!(store.get("record:1").await?, Some(json!(2)));
        assert_eq!(store.len().await, 1);

        Ok(())
    }

    #[tokio::test]
    async fn delete_absent_key_succeeds() -> TestResult {
        let store = MemoryKvStore::new();

        store.delete("record:missing").await?;

        assert!(store.is_empty().await);

        Ok(())
    }

    #[tokio::test]
    async fn list_by_prefix_only_returns_matching_keys() -> TestResult {
        let store = MemoryKvStore::new();

        store.set("record:1", json!("a")).await?;
        store.set("record:2", json!("b")).await?;
        store.set("recorder:1", json!("c")).await?;
        store.set("session:1", json!("d")).await?;

        let mut values = store.list_by_prefix("record:").await?;

        values.sort_by_key(ToString::to_string);

        assert_eq!(values, vec![json!("a"), json!("b")]);

        Ok(())
    }
}
