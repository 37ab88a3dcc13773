//! Postgres store

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{PgPool, query, query_scalar, types::Json};

use super::{KvStore, StoreError};

const GET_SQL: &str = include_str!("sql/get.sql");
const SET_SQL: &str = include_str!("sql/set.sql");
const DELETE_SQL: &str = include_str!("sql/delete.sql");
const LIST_BY_PREFIX_SQL: &str = include_str!("sql/list_by_prefix.sql");

/// Store backed by the `kv_store` table.
#[derive(Debug, Clone)]
pub struct PgKvStore {
    pool: PgPool,
}

impl PgKvStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KvStore for PgKvStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let value = query_scalar::<_, Json<Value>>(GET_SQL)
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(value.map(|Json(value)| value))
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        query(SET_SQL)
            .bind(key)
            .bind(Json(value))
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        query(DELETE_SQL).bind(key).execute(&self.pool).await?;

        Ok(())
    }

    async fn list_by_prefix(&self, prefix: &str) -> Result<Vec<Value>, StoreError> {
        let values = query_scalar::<_, Json<Value>>(LIST_BY_PREFIX_SQL)
            .bind(prefix)
            .fetch_all(&self.pool)
            .await?;

        Ok(values.into_iter().map(|Json(value)| value).collect())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use crate::test::TestDb;

    use super::*;

    #[tokio::test]
    async fn set_then_get_returns_value() -> TestResult {
        let db = TestDb::new().await;
        let store = PgKvStore::new(db.pool().clone());

        store
            .set("record:1", json!({ "species": "Sea Turtle" }))
            .await?;

        assert_eq!(
            store.get("record:1").await?,
            Some(json!({ "species": "Sea Turtle" }))
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_missing_key_returns_none() -> TestResult {
        let db = TestDb::new().await;
        let store = PgKvStore::new(db.pool().clone());

        assert_eq!(store.get("record:missing").await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn set_overwrites_existing_value() -> TestResult {
        let db = TestDb::new().await;
        let store = PgKvStore::new(db.pool().clone());

        store.set("record:1", json!(1)).await?;
        store.set("record:1", json!(2)).await?;

        assert_eq!(store.get("record:1").await?, Some(json!(2)));

        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_key_and_tolerates_absent_keys() -> TestResult {
        let db = TestDb::new().await;
        let store = PgKvStore::new(db.pool().clone());

        store.set("record:1", json!(1)).await?;
        store.delete("record:1").await?;
        store.delete("record:1").await?;

        assert_eq!(store.get("record:1").await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn list_by_prefix_treats_wildcards_literally() -> TestResult {
        let db = TestDb::new().await;
        let store = PgKvStore::new(db.pool().clone());

        store.set("record:1", json!("a")).await?;
        store.set("record_1", json!("b")).await?;
        store.set("session:1", json!("c")).await?;

        let values = store.list_by_prefix("record:").await?;

        assert_eq!(values, vec![json!("a")]);

        let values = store.list_by_prefix("record_").await?;

        assert_eq!(values, vec![json!("b")]);

        Ok(())
    }
}
