use super::StorageError;
use rusqlite::Connection;

mod kv;

use kv::SqliteKeyValueRepository;

/// Synchronous get-by-key / set-by-key primitive. Values are opaque UTF-8
/// strings; callers own the encoding.
pub trait KeyValueRepository {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

pub struct SqliteRepositories<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRepositories<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    pub fn kv(&self) -> impl KeyValueRepository + '_ {
        SqliteKeyValueRepository { conn: self.conn }
    }
}
