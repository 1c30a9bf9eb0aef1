//! Named JSON blob storage over SQLite.
//!
//! Each persisted unit of state (the link/category collection, search
//! configuration, AI configuration, site settings, favicon cache) lives in
//! its own named blob and is independently loadable. Reads tolerate missing
//! or corrupt entries by returning `None`, letting callers fall back to
//! built-in defaults instead of failing.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::{params, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use super::connection::Database;
use crate::types::errors::StorageError;

/// Blob holding the canonical link and category collections.
pub const COLLECTION_BLOB: &str = "collection";
/// Blob holding the search configuration.
pub const SEARCH_CONFIG_BLOB: &str = "search_config";
/// Blob holding the AI assistant configuration.
pub const AI_CONFIG_BLOB: &str = "ai_config";
/// Blob holding the site display settings.
pub const SITE_SETTINGS_BLOB: &str = "site_settings";
/// Blob holding the hostname → icon URL cache. Read-only to the core.
pub const FAVICON_CACHE_BLOB: &str = "favicon_cache";

/// Key-value blob store backed by a SQLite table.
pub struct BlobStore {
    db: Database,
}

impl BlobStore {
    /// Opens (or creates) the store at the given file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let db = Database::open(path).map_err(|e| StorageError::Database(e.to_string()))?;
        Ok(Self { db })
    }

    /// In-memory store; contents are discarded on drop. Used by tests.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let db = Database::open_in_memory().map_err(|e| StorageError::Database(e.to_string()))?;
        Ok(Self { db })
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    /// Reads and deserializes a named blob.
    ///
    /// Returns `None` when the blob is missing, unreadable or fails to
    /// deserialize; corrupt entries are logged and treated as absent so the
    /// caller can fall back to defaults.
    pub fn read<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        let raw: Option<String> = match self
            .db
            .connection()
            .query_row(
                "SELECT value FROM blobs WHERE name = ?1",
                params![name],
                |row| row.get(0),
            )
            .optional()
        {
            Ok(raw) => raw,
            Err(error) => {
                warn!(blob = name, %error, "blob read failed, using defaults");
                return None;
            }
        };

        let raw = raw?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(error) => {
                warn!(blob = name, %error, "blob is corrupt, using defaults");
                None
            }
        }
    }

    /// Serializes and writes a named blob, replacing any previous value.
    pub fn write<T: Serialize>(&self, name: &str, value: &T) -> Result<(), StorageError> {
        let json =
            serde_json::to_string(value).map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.db
            .connection()
            .execute(
                "INSERT OR REPLACE INTO blobs (name, value, updated_at) VALUES (?1, ?2, ?3)",
                params![name, json, Self::now()],
            )
            .map_err(|e| StorageError::Database(e.to_string()))?;
        Ok(())
    }

    /// Whether a blob with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.db
            .connection()
            .query_row(
                "SELECT COUNT(*) FROM blobs WHERE name = ?1",
                params![name],
                |row| row.get::<_, i64>(0),
            )
            .map(|count| count > 0)
            .unwrap_or(false)
    }
}
