// denv: Composable environment profiles
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Commands that read or modify stored profiles directly.

use std::io::Write;

use tracing::info;

use crate::error::{DenvError, Result, StoreError};
use crate::store::KvStore;

/// Prints the stored text of `key`.
///
/// # Errors
///
/// Returns `StoreError::NotFound` if `key` is not stored.
pub fn run_cat_command<S, W>(store: &S, key: &str, out: &mut W) -> Result<()>
where
    S: KvStore + ?Sized,
    W: Write,
{
    let text = store.get(key)?.ok_or_else(|| {
        DenvError::from(StoreError::NotFound {
            key: key.to_string(),
        })
    })?;
    if text.ends_with('\n') {
        write!(out, "{text}")?;
    } else {
        writeln!(out, "{text}")?;
    }
    Ok(())
}

/// Prints every stored key, one per line.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn run_keys_command<S, W>(store: &S, out: &mut W) -> Result<()>
where
    S: KvStore + ?Sized,
    W: Write,
{
    for key in store.keys()? {
        writeln!(out, "{key}")?;
    }
    Ok(())
}

/// Deletes `key`; an absent key is left alone.
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub fn run_del_command<S: KvStore + ?Sized>(store: &mut S, key: &str) -> Result<()> {
    store.delete(key)?;
    info!(key, "deleted");
    Ok(())
}

/// Moves `key` to `new_key`.
///
/// # Errors
///
/// Returns `StoreError::NotFound` if `key` is not stored.
pub fn run_rename_command<S: KvStore + ?Sized>(
    store: &mut S,
    key: &str,
    new_key: &str,
) -> Result<()> {
    store.rename(key, new_key)?;
    info!(key, new_key, "renamed");
    Ok(())
}
