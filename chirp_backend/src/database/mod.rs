pub mod models;
pub mod repositories;

use crate::config::ChirpPaths;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub(crate) const MIGRATIONS: &str = r#"
    PRAGMA journal_mode = WAL;

    CREATE TABLE IF NOT EXISTS kv (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );
"#;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("sqlite error: {0}")]
    Backend(#[from] rusqlite::Error),
    #[error("database mutex poisoned")]
    LockPoisoned,
}

#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
    newly_created: bool,
}

impl Database {
    pub fn connect(paths: &ChirpPaths) -> Result<Self, StorageError> {
        let newly_created = !paths.db_path.exists();
        let conn = Connection::open(&paths.db_path)?;
        Ok(Self::from_connection(conn, newly_created))
    }

    pub fn from_connection(conn: Connection, newly_created: bool) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
            newly_created,
        }
    }

    /// Applies the schema and reports whether the database file was created
    /// by this process.
    pub fn ensure_migrations(&self) -> Result<bool, StorageError> {
        self.with_conn(|conn| {
            conn.execute_batch(MIGRATIONS)?;
            Ok(())
        })?;
        Ok(self.newly_created)
    }

    pub fn with_repositories<T, F>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(repositories::SqliteRepositories<'_>) -> Result<T, StorageError>,
    {
        self.with_conn(|conn| {
            let repos = repositories::SqliteRepositories::new(conn);
            f(repos)
        })
    }

    #[cfg(test)]
    pub(crate) fn execute_batch(&self, sql: &str) -> Result<(), StorageError> {
        self.with_conn(|conn| Ok(conn.execute_batch(sql)?))
    }

    fn with_conn<T, F>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        let guard = self.conn.lock().map_err(|_| StorageError::LockPoisoned)?;
        f(&guard)
    }
}
