// denv: Composable environment profiles
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Key-value store abstraction.
//!
//! ```text
//! KvStore (trait)
//!   get / set / delete / rename / keys / entries
//!       |                     |
//!       v                     v
//! SqliteStore            MemoryStore
//! single file,           BTreeMap,
//! table kv(key, value)   tests + in-process use
//! ```
//!
//! Profiles are stored as raw text; parsing happens in [`crate::profile`].

pub mod memory;
pub mod sqlite;


pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::error::DenvResult;

/// String-to-string persistent mapping used by the profile resolver.
pub trait KvStore {
    /// Returns the value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the backend cannot be read.
    fn get(&self, key: &str) -> DenvResult<Option<String>>;

    /// Creates or overwrites `key`.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> DenvResult<()>;

    /// Removes `key`. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the backend cannot be written.
    fn delete(&mut self, key: &str) -> DenvResult<()>;

    /// Moves the value of `key` to `new_key`, overwriting `new_key` if present.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if `key` is absent.
    fn rename(&mut self, key: &str, new_key: &str) -> DenvResult<()>;

    /// Lists all keys in lexical order.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the backend cannot be read.
    fn keys(&self) -> DenvResult<Vec<String>>;

    /// Lists all `(key, value)` pairs in lexical key order.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the backend cannot be read.
    fn entries(&self) -> DenvResult<Vec<(String, String)>>;
}
