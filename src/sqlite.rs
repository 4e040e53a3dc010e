// SQLite-backed key-value storage

use crate::storage::{Storage, StorageResult};
use crate::task::now_ms;
use rusqlite::{Connection, OptionalExtension};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub const DB_FILE_NAME: &str = "todostore.db";

/// Storage keeping each value as a row of a single `kv` table
pub struct SqliteStorage {
    db: Connection,
}

impl SqliteStorage {
    /// Open or create `todostore.db` inside `dir`
    pub fn open<P: AsRef<Path>>(dir: P) -> StorageResult<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let db_path = dir.join(DB_FILE_NAME);
        let db = Connection::open(&db_path)?;
        info!(path = ?db_path, "Opened SQLite storage");

        let storage = Self { db };
        storage.create_schema()?;
        Ok(storage)
    }

    pub fn open_in_memory() -> StorageResult<Self> {
        let storage = Self {
            db: Connection::open_in_memory()?,
        };
        storage.create_schema()?;
        Ok(storage)
    }

    fn create_schema(&self) -> StorageResult<()> {
        debug!("Creating kv schema");

        self.db.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            );
            "#,
        )?;

        Ok(())
    }
}

impl Storage for SqliteStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let value: Option<String> = self
            .db
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.db.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            rusqlite::params![key, value, now_ms()],
        )?;
        Ok(())
    }
}
