// denv: Composable environment profiles
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Edit command implementation.
//!
//! ```text
//! store.get(KEY) or ""
//!        |
//!        v
//! temp file KEY*.yml --> $EDITOR / editor.command
//!        |                  (non-zero exit aborts)
//!        v
//! unchanged? --> nothing written
//! otherwise  --> parse check (warn only) --> store.set(KEY)
//! ```

use std::io::Write as _;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::core::process::builder::ProcessBuilder;
use crate::error::{DenvError, FsError, Result, bail_out};
use crate::profile::ProfileDocument;
use crate::store::KvStore;

use super::open_store;

/// Result of storing an edited profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Text was identical; nothing written.
    Unchanged,
    /// New text stored.
    Saved,
    /// New text stored even though it does not parse as a profile.
    SavedUnparsable,
}

/// Stores `after` under `key` unless it equals `before`.
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub fn apply_edit<S: KvStore + ?Sized>(
    store: &mut S,
    key: &str,
    before: &str,
    after: &str,
) -> Result<EditOutcome> {
    if before == after {
        info!(key, "no changes");
        return Ok(EditOutcome::Unchanged);
    }

    let outcome = match ProfileDocument::parse(key, after) {
        Ok(_) => EditOutcome::Saved,
        Err(e) => {
            warn!(key, error = %e, "edited profile does not parse; saving anyway");
            EditOutcome::SavedUnparsable
        }
    };
    store.set(key, after)?;
    info!(key, "saved");
    Ok(outcome)
}

/// Temp file prefix for `key`; path separators are not allowed in it.
fn temp_prefix(key: &str) -> String {
    key.chars()
        .map(|c| if std::path::is_separator(c) { '_' } else { c })
        .collect()
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| {
        DenvError::from(FsError::IoError {
            path: path.display().to_string(),
            source,
        })
        .into()
    })
}

/// Main handler for the edit command.
///
/// # Errors
///
/// Returns an error if no editor is configured, the editor fails, or the
/// store cannot be read or written.
pub async fn run_edit_command(key: &str, config: &Config) -> Result<()> {
    let editor = config.editor_command().map_err(DenvError::from)?;
    let mut store = open_store(config)?;
    let before = store.get(key)?.unwrap_or_default();

    let mut file = tempfile::Builder::new()
        .prefix(&temp_prefix(key))
        .suffix(".yml")
        .tempfile()?;
    file.write_all(before.as_bytes())?;
    file.flush()?;
    debug!(key, path = %file.path().display(), "wrote temp file");

    // editor.command may carry its own arguments, e.g. "code --wait"
    let mut words = editor.split_whitespace();
    let program = words.next().ok_or_else(|| bail_out("empty editor command"))?;
    let output = ProcessBuilder::which(program)
        .map_err(DenvError::from)?
        .args(words)
        .arg(file.path())
        .run()
        .await?;
    if !output.success() {
        return Err(bail_out(format!(
            "editor exited with code {}; '{key}' left unchanged",
            output.exit_code()
        ))
        .into());
    }

    let after = read_file(file.path())?;
    apply_edit(&mut store, key, &before, &after)?;
    Ok(())
}
