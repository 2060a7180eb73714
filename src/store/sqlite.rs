// denv: Composable environment profiles
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! SQLite-backed store.
//!
//! ```text
//! SqliteStore::open(path)
//!   mkdir -p parent
//!   CREATE TABLE IF NOT EXISTS kv (key TEXT PRIMARY KEY, value TEXT)
//! ```

use rusqlite::{Connection, OptionalExtension, params};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use super::KvStore;
use crate::error::{DenvResult, FsError, StoreError};

/// Single-file key-value store.
pub struct SqliteStore {
    path: PathBuf,
    conn: Connection,
}

impl std::fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl SqliteStore {
    /// Opens (or creates) the database at `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an `FsError` if the parent directory cannot be created, or a
    /// `StoreError::Open` if SQLite cannot open the file.
    pub fn open(path: impl AsRef<Path>) -> DenvResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| FsError::IoError {
                path: parent.display().to_string(),
                source,
            })?;
        }

        let conn = Connection::open(path).map_err(|source| StoreError::Open {
            path: path.display().to_string(),
            source,
        })?;
        Self::init_schema(&conn)?;

        debug!(path = %path.display(), "opened store");
        Ok(Self {
            path: path.to_path_buf(),
            conn,
        })
    }

    /// Opens a private in-memory database (nothing touches disk).
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if SQLite fails to initialize.
    pub fn open_in_memory() -> DenvResult<Self> {
        let conn = Connection::open_in_memory().map_err(StoreError::Sqlite)?;
        Self::init_schema(&conn)?;
        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn,
        })
    }

    /// Path of the backing database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn init_schema(conn: &Connection) -> DenvResult<()> {
        conn.execute_batch(
            r"
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL
            );
            ",
        )?;
        Ok(())
    }
}

impl KvStore for SqliteStore {
    fn get(&self, key: &str) -> DenvResult<Option<String>> {
        trace!(key, "get");
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> DenvResult<()> {
        trace!(key, "set");
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    fn delete(&mut self, key: &str) -> DenvResult<()> {
        trace!(key, "delete");
        self.conn.execute("DELETE FROM kv WHERE key = ?1", [key])?;
        Ok(())
    }

    fn rename(&mut self, key: &str, new_key: &str) -> DenvResult<()> {
        trace!(key, new_key, "rename");
        let tx = self.conn.transaction()?;
        let value: Option<String> = tx
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        let Some(value) = value else {
            return Err(StoreError::NotFound {
                key: key.to_string(),
            }
            .into());
        };
        if key != new_key {
            tx.execute(
                "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
                params![new_key, value],
            )?;
            tx.execute("DELETE FROM kv WHERE key = ?1", [key])?;
        }
        tx.commit()?;
        Ok(())
    }

    fn keys(&self) -> DenvResult<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT key FROM kv ORDER BY key")?;
        let keys = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(keys)
    }

    fn entries(&self) -> DenvResult<Vec<(String, String)>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key, value FROM kv ORDER BY key")?;
        let entries = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<rusqlite::Result<Vec<(String, String)>>>()?;
        Ok(entries)
    }
}
