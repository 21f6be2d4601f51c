use crate::database::StorageError;
use rusqlite::{params, Connection, OptionalExtension};

pub(super) struct SqliteKeyValueRepository<'conn> {
    pub(super) conn: &'conn Connection,
}

impl<'conn> super::KeyValueRepository for SqliteKeyValueRepository<'conn> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self
            .conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            r#"
            INSERT INTO kv (key, value)
            VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value
            "#,
            params![key, value],
        )?;
        Ok(())
    }
}
