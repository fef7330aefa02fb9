//! Record store
//!
//! Durable mapping from string keys to JSON documents, backed by SQLite.
//! This is the single persistence surface shared by every feature:
//! settings hold plain strings, alarms and notes hold whole lists that
//! are rewritten on each mutation. There is no `delete`; a list shrinks
//! by overwriting its key with a filtered copy.

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::SqlitePool;

use crate::error::Result;

/// Key-value record store over the `records` table.
#[derive(Clone)]
pub struct RecordStore {
    pool: SqlitePool,
}

impl RecordStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns the stored value for `key`, or `None` if the key was
    /// never set. Fails on storage errors and on stored JSON that no
    /// longer deserializes into `T`.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let raw: Option<String> = sqlx::query_scalar("SELECT value FROM records WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        match raw {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Serializes `value` and writes it under `key`, replacing any
    /// previous value. The write is committed before this returns.
    pub async fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO records (key, value, updated_at) VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(&json)
        .bind(now)
        .execute(&self.pool)
        .await?;

        tracing::debug!("Stored record: {}", key);
        Ok(())
    }

    /// Loading contract of the in-scope callers: "never set", "storage
    /// error" and "unreadable JSON" all collapse to the type's default.
    pub async fn get_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.get(key).await {
            Ok(Some(value)) => value,
            Ok(None) => T::default(),
            Err(e) => {
                tracing::warn!("Failed to read record {}: {}", key, e);
                T::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::initialize_database;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn create_test_store() -> RecordStore {
        let pool = SqlitePoolOptions::new()
            .connect("sqlite::memory:")
            .await
            .unwrap();

        initialize_database(&pool).await.unwrap();

        RecordStore::new(pool)
    }

    #[tokio::test]
    async fn test_get_missing_key_is_none() {
        let store = create_test_store().await;

        let value: Option<String> = store.get("never_set").await.unwrap();
        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let store = create_test_store().await;

        store.set("app_language", &"en").await.unwrap();

        let value: Option<String> = store.get("app_language").await.unwrap();
        assert_eq!(value, Some("en".to_string()));
    }

    #[tokio::test]
    async fn test_set_replaces_previous_value() {
        let store = create_test_store().await;

        store.set("app_language", &"tr").await.unwrap();
        store.set("app_language", &"ar").await.unwrap();

        let value: Option<String> = store.get("app_language").await.unwrap();
        assert_eq!(value, Some("ar".to_string()));
    }

    #[tokio::test]
    async fn test_stores_structured_values() {
        let store = create_test_store().await;

        let list = vec!["a".to_string(), "b".to_string()];
        store.set("list", &list).await.unwrap();

        let back: Option<Vec<String>> = store.get("list").await.unwrap();
        assert_eq!(back, Some(list));
    }

    #[tokio::test]
    async fn test_keys_do_not_interfere() {
        let store = create_test_store().await;

        store.set("alarms", &vec!["x".to_string()]).await.unwrap();
        store.set("notes", &Vec::<String>::new()).await.unwrap();

        let alarms: Option<Vec<String>> = store.get("alarms").await.unwrap();
        assert_eq!(alarms.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_or_default_on_missing_key() {
        let store = create_test_store().await;

        let list: Vec<String> = store.get_or_default("never_set").await;
        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn test_get_or_default_on_malformed_value() {
        let store = create_test_store().await;

        // Bypass set() to plant a value that is not valid JSON.
        sqlx::query("INSERT INTO records (key, value, updated_at) VALUES ('broken', 'not json', '')")
            .execute(&store.pool)
            .await
            .unwrap();

        let list: Vec<String> = store.get_or_default("broken").await;
        assert!(list.is_empty());
    }
}
