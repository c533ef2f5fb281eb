// src/services/local_storage.rs
//! String key/value storage backed by the `local_storage` table

use sqlx::{Row, SqlitePool};
use tracing::debug;

/// Key holding the serialized app document
pub const APP_DATA_KEY: &str = "mealmind.app_data";

/// Key holding the signed-in user id of a session
pub fn session_user_key(session_id: &str) -> String {
    format!("session.{}.current_user", session_id)
}

/// Key holding the selected language of a session
pub fn session_language_key(session_id: &str) -> String {
    format!("session.{}.language", session_id)
}

#[derive(Debug, Clone)]
pub struct LocalStorage {
    pool: SqlitePool,
}

impl LocalStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_item(&self, key: &str) -> Result<Option<String>, sqlx::Error> {
        let row = sqlx::query("SELECT value FROM local_storage WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| r.get::<String, _>("value")))
    }

    pub async fn set_item(&self, key: &str, value: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO local_storage (key, value, updated_at)
            VALUES (?, ?, datetime('now'))
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        debug!(key = %key, bytes = value.len(), "Stored local storage item");
        Ok(())
    }

    pub async fn remove_item(&self, key: &str) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM local_storage WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    crate::common::migrations::create_local_storage_table(&pool)
        .await
        .expect("create local_storage table");
    pool
}
