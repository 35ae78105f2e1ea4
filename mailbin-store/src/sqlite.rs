//! Durable inbox store backed by SQLite.
//!
//! Each inbox is one row: the normalized email as primary key and the whole
//! inbox serialized as a JSON payload. The table is created via
//! `CREATE TABLE IF NOT EXISTS` on open, so no migration step is needed.

use std::path::Path;
use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqliteSynchronous};
use sqlx::SqlitePool;

use mailbin_core::Inbox;

use crate::{InboxStore, StoreError};

/// SQLite-backed inbox store.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and ensure the schema exists.
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] if the file cannot be opened or the
    /// schema bootstrap fails.
    pub async fn open(path: &Path) -> Result<Self, StoreError> {
        let opts =
            SqliteConnectOptions::from_str(&format!("sqlite://{}?mode=rwc", path.display()))?
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .create_if_missing(true);
        let pool = SqlitePool::connect_with(opts).await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS inboxes (
                email   TEXT PRIMARY KEY,
                payload TEXT NOT NULL
            )",
        )
        .execute(&pool)
        .await?;

        tracing::info!(db = %path.display(), "sqlite inbox store opened");
        Ok(Self { pool })
    }
}

#[async_trait]
impl InboxStore for SqliteStore {
    async fn load(&self, email: &str) -> Result<Option<Inbox>, StoreError> {
        let payload: Option<String> =
            sqlx::query_scalar("SELECT payload FROM inboxes WHERE email = ?")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;

        match payload {
            Some(raw) => {
                let inbox = serde_json::from_str(&raw).map_err(|source| StoreError::Payload {
                    email: email.to_owned(),
                    source,
                })?;
                Ok(Some(inbox))
            }
            None => Ok(None),
        }
    }

    async fn save(&self, inbox: &Inbox) -> Result<(), StoreError> {
        let payload = serde_json::to_string(inbox).map_err(|source| StoreError::Payload {
            email: inbox.email.clone(),
            source,
        })?;

        sqlx::query(
            "INSERT INTO inboxes (email, payload) VALUES (?, ?)
             ON CONFLICT(email) DO UPDATE SET payload = excluded.payload",
        )
        .bind(&inbox.email)
        .bind(&payload)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailbin_core::Message;

    async fn temp_store() -> (tempfile::TempDir, SqliteStore) {
        let dir = match tempfile::tempdir() {
            Ok(d) => d,
            Err(e) => panic!("failed to create temp dir: {e}"),
        };
        let store = match SqliteStore::open(&dir.path().join("mailbin.db")).await {
            Ok(s) => s,
            Err(e) => panic!("failed to open store: {e}"),
        };
        (dir, store)
    }

    #[tokio::test]
    async fn sqlite_store_load_missing_returns_none() {
        let (_dir, store) = temp_store().await;
        let loaded = match store.load("nobody@a.example").await {
            Ok(v) => v,
            Err(e) => panic!("load failed: {e}"),
        };
        assert!(loaded.is_none(), "missing inbox must load as None");
    }

    #[tokio::test]
    async fn sqlite_store_save_then_load_round_trips() {
        let (_dir, store) = temp_store().await;
        let mut inbox = Inbox::new("alice@a.example");
        inbox.push(Message::new(
            Some("bob@sender.example".to_owned()),
            Some("hello".to_owned()),
            Some("first message".to_owned()),
        ));
        match store.save(&inbox).await {
            Ok(()) => {}
            Err(e) => panic!("save failed: {e}"),
        }

        let loaded = match store.load("alice@a.example").await {
            Ok(Some(i)) => i,
            Ok(None) => panic!("saved inbox must be loadable"),
            Err(e) => panic!("load failed: {e}"),
        };
        assert_eq!(loaded.email, "alice@a.example");
        assert_eq!(loaded.messages.len(), 1);
        assert_eq!(loaded.messages[0].from, "bob@sender.example");
        assert_eq!(loaded.messages[0].body, "first message");
    }

    #[tokio::test]
    async fn sqlite_store_save_replaces_previous_record() {
        let (_dir, store) = temp_store().await;
        let mut inbox = Inbox::new("bob@a.example");
        match store.save(&inbox).await {
            Ok(()) => {}
            Err(e) => panic!("save failed: {e}"),
        }
        inbox.push(Message::new(None, None, None));
        match store.save(&inbox).await {
            Ok(()) => {}
            Err(e) => panic!("save failed: {e}"),
        }

        let loaded = match store.load("bob@a.example").await {
            Ok(Some(i)) => i,
            Ok(None) => panic!("saved inbox must be loadable"),
            Err(e) => panic!("load failed: {e}"),
        };
        assert_eq!(loaded.messages.len(), 1, "save must replace, not append");
    }

    #[tokio::test]
    async fn sqlite_store_survives_reopen() {
        let dir = match tempfile::tempdir() {
            Ok(d) => d,
            Err(e) => panic!("failed to create temp dir: {e}"),
        };
        let path = dir.path().join("mailbin.db");

        let store = match SqliteStore::open(&path).await {
            Ok(s) => s,
            Err(e) => panic!("failed to open store: {e}"),
        };
        let mut inbox = Inbox::new("carol@a.example");
        inbox.push(Message::new(None, Some("kept".to_owned()), None));
        match store.save(&inbox).await {
            Ok(()) => {}
            Err(e) => panic!("save failed: {e}"),
        }
        drop(store);

        let reopened = match SqliteStore::open(&path).await {
            Ok(s) => s,
            Err(e) => panic!("failed to reopen store: {e}"),
        };
        let loaded = match reopened.load("carol@a.example").await {
            Ok(Some(i)) => i,
            Ok(None) => panic!("inbox must survive reopen"),
            Err(e) => panic!("load failed: {e}"),
        };
        assert_eq!(loaded.messages[0].subject, "kept");
    }

    #[tokio::test]
    async fn sqlite_store_corrupt_payload_is_reported() {
        let (_dir, store) = temp_store().await;
        let result = sqlx::query("INSERT INTO inboxes (email, payload) VALUES (?, ?)")
            .bind("broken@a.example")
            .bind("{not json")
            .execute(&store.pool)
            .await;
        match result {
            Ok(_) => {}
            Err(e) => panic!("raw insert failed: {e}"),
        }

        let loaded = store.load("broken@a.example").await;
        assert!(
            matches!(loaded, Err(StoreError::Payload { .. })),
            "undecodable payload must surface as StoreError::Payload"
        );
    }
}
