//! SQLite-backed key-value state store.
//!
//! Implements the `StateStore` trait over a single SQLite connection. All
//! statements run in `spawn_blocking` to avoid blocking the async runtime.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use claimboard_core::memory::ports::StateStore;
use claimboard_domain::{ClaimboardError, Result};
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};
use tokio::task;
use tracing::info;

const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS app_state (
    key        TEXT PRIMARY KEY,
    value      TEXT NOT NULL,
    updated_at INTEGER NOT NULL
)";

/// Key-value store on a single SQLite connection.
///
/// One connection behind a mutex is plenty here; every statement touches a
/// single row.
pub struct SqliteStateStore {
    conn: Arc<Mutex<Connection>>,
    path: PathBuf,
}

impl SqliteStateStore {
    /// Open the store at `db_path`, creating the file and schema if needed.
    pub fn open<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let path = db_path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ClaimboardError::Storage(format!("Failed to create state directory: {}", e))
            })?;
        }

        let conn = Connection::open(&path).map_err(map_sql_error)?;
        conn.pragma_update(None, "journal_mode", "WAL").map_err(map_sql_error)?;
        conn.execute(SCHEMA_SQL, params![]).map_err(map_sql_error)?;

        info!(db_path = %path.display(), "state store opened");
        Ok(Self { conn: Arc::new(Mutex::new(conn)), path })
    }

    /// The database path backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl StateStore for SqliteStateStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = Arc::clone(&self.conn);
        let key = key.to_string();

        task::spawn_blocking(move || -> Result<Option<String>> {
            let conn = conn.lock();
            conn.query_row(
                "SELECT value FROM app_state WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = Arc::clone(&self.conn);
        let key = key.to_string();
        let value = value.to_string();

        task::spawn_blocking(move || -> Result<()> {
            let now = chrono::Utc::now().timestamp();
            let conn = conn.lock();

            // Upsert pattern (SQLite 3.24.0+)
            conn.execute(
                "INSERT INTO app_state (key, value, updated_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at",
                params![key, value, now],
            )
            .map_err(map_sql_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }
}

fn map_sql_error(err: rusqlite::Error) -> ClaimboardError {
    ClaimboardError::Storage(err.to_string())
}

/// Map JoinError from spawn_blocking to ClaimboardError.
fn map_join_error(err: task::JoinError) -> ClaimboardError {
    if err.is_cancelled() {
        ClaimboardError::Internal("blocking task cancelled".into())
    } else {
        ClaimboardError::Internal(format!("blocking task failed: {err}"))
    }
}
