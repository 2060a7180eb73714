// denv: Composable environment profiles
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory store backed by a `BTreeMap`.

use std::collections::BTreeMap;

use super::KvStore;
use crate::error::{DenvResult, StoreError};

/// Non-persistent [`KvStore`], handy for assembling profiles in-process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> DenvResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> DenvResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> DenvResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn rename(&mut self, key: &str, new_key: &str) -> DenvResult<()> {
        let value = self.entries.remove(key).ok_or_else(|| StoreError::NotFound {
            key: key.to_string(),
        })?;
        self.entries.insert(new_key.to_string(), value);
        Ok(())
    }

    fn keys(&self) -> DenvResult<Vec<String>> {
        Ok(self.entries.keys().cloned().collect())
    }

    fn entries(&self) -> DenvResult<Vec<(String, String)>> {
        Ok(self
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}
