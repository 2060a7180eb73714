// denv: Composable environment profiles
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   run, cat/keys/del/rename, edit, import/export, config
//! ```
//!
//! Handlers that only touch the store take a `KvStore` and an output
//! writer so they can run against `MemoryStore` in tests.

pub mod config;
pub mod edit;
pub mod run;
pub mod store;
pub mod transfer;

#[cfg(test)]
mod tests;

use tracing::debug;

use crate::config::Config;
use crate::error::{DenvError, Result};
use crate::store::SqliteStore;

/// Opens the configured profile database.
///
/// # Errors
///
/// Returns an error if no database path can be determined or the database
/// cannot be opened.
pub fn open_store(config: &Config) -> Result<SqliteStore> {
    let path = config.store_path().map_err(DenvError::from)?;
    debug!(path = %path.display(), "opening store");
    Ok(SqliteStore::open(&path)?)
}
