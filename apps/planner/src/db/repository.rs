//! Record store backed by SQLite.

use crate::db::error::DbError;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

type Result<T> = std::result::Result<T, DbError>;

/// Keys under which a learner's scheduling state is stored.
pub mod keys {
    pub const REVISIONS: &str = "revisions";
    pub const CARD_STATES: &str = "card_states";
    pub const PLAN: &str = "plan";
    pub const STREAK: &str = "streak";
    pub const SETTINGS: &str = "settings";
}

/// Per-learner key-value store of JSON documents.
///
/// Each write replaces the whole document. Reads observe the caller's own
/// earlier writes; two writers on the same key race and the later one wins.
pub trait RecordStore {
    fn get<T: DeserializeOwned>(&self, owner_id: &str, key: &str) -> Result<Option<T>>;
    fn set<T: Serialize>(&self, owner_id: &str, key: &str, value: &T) -> Result<()>;
    fn delete(&self, owner_id: &str, key: &str) -> Result<()>;

    fn get_or_default<T: DeserializeOwned + Default>(
        &self,
        owner_id: &str,
        key: &str,
    ) -> Result<T> {
        Ok(self.get(owner_id, key)?.unwrap_or_default())
    }
}

/// SQLite implementation of the record store.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open database at path, creating if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Open in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(super::schema::SCHEMA)?;
        self.conn.execute_batch(super::schema::INIT_SCHEMA_VERSION)?;
        Ok(())
    }

    pub fn schema_version(&self) -> Result<i32> {
        self.conn
            .query_row("SELECT version FROM schema_version WHERE id = 1", [], |row| row.get(0))
            .map_err(Into::into)
    }

    /// Keys stored for a learner, sorted.
    pub fn keys(&self, owner_id: &str) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM user_progress WHERE owner_id = ?1 ORDER BY key")?;
        let keys = stmt
            .query_map(params![owner_id], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        Ok(keys)
    }
}

impl RecordStore for SqliteStore {
    fn get<T: DeserializeOwned>(&self, owner_id: &str, key: &str) -> Result<Option<T>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM user_progress WHERE owner_id = ?1 AND key = ?2",
                params![owner_id, key],
                |row| row.get(0),
            )
            .optional()?;

        raw.map(|json| {
            serde_json::from_str(&json).map_err(|source| DbError::InvalidData {
                key: key.to_string(),
                source,
            })
        })
        .transpose()
    }

    fn set<T: Serialize>(&self, owner_id: &str, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value).map_err(|source| DbError::InvalidData {
            key: key.to_string(),
            source,
        })?;
        self.conn.execute(
            "INSERT OR REPLACE INTO user_progress (owner_id, key, value, updated_at) VALUES (?1, ?2, ?3, ?4)",
            params![owner_id, key, json, Utc::now().to_rfc3339()],
        )?;
        tracing::debug!(owner_id, key, "record written");
        Ok(())
    }

    fn delete(&self, owner_id: &str, key: &str) -> Result<()> {
        self.conn.execute(
            "DELETE FROM user_progress WHERE owner_id = ?1 AND key = ?2",
            params![owner_id, key],
        )?;
        Ok(())
    }
}
