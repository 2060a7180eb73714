// denv: Composable environment profiles
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Import and export of profiles as one file per key.
//!
//! ```text
//! import DIR:  DIR/base.yml  --> key "base"   (regular files, lexical order)
//! export DIR:  key "base"    --> DIR/base.yml (DIR created if missing)
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::types::ExportConfig;
use crate::error::{DenvError, FsError, Result};
use crate::store::KvStore;

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> DenvError + '_ {
    move |source| {
        FsError::IoError {
            path: path.display().to_string(),
            source,
        }
        .into()
    }
}

/// Regular files directly inside `dir`, sorted by file name.
fn regular_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_error(dir))? {
        let entry = entry.map_err(io_error(dir))?;
        let file_type = entry.file_type().map_err(io_error(&entry.path()))?;
        if file_type.is_file() {
            files.push(entry.path());
        } else {
            debug!(path = %entry.path().display(), "skipping non-regular file");
        }
    }
    files.sort();
    Ok(files)
}

/// Stores every regular file of `dir` under its name minus the export
/// extension. Returns the imported keys.
///
/// # Errors
///
/// Returns an error if `dir` or one of its files cannot be read, or the store
/// cannot be written.
pub fn run_import_command<S, W>(
    store: &mut S,
    dir: &Path,
    export: &ExportConfig,
    out: &mut W,
) -> Result<Vec<String>>
where
    S: KvStore + ?Sized,
    W: Write,
{
    if !dir.is_dir() {
        return Err(DenvError::from(FsError::NotFound(dir.display().to_string())).into());
    }

    let mut imported = Vec::new();
    for path in regular_files(dir)? {
        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            warn!(path = %path.display(), "skipping file with a non UTF-8 name");
            continue;
        };
        let key = export.key_for(file_name).to_string();
        let text = std::fs::read_to_string(&path).map_err(io_error(&path))?;
        store.set(&key, &text)?;
        writeln!(out, "Imported entry: {key}")?;
        imported.push(key);
    }
    Ok(imported)
}

/// Rejects keys that cannot name a file inside the export directory.
fn check_file_name(key: &str) -> std::result::Result<(), FsError> {
    if key.is_empty() || key == "." || key == ".." || key.chars().any(std::path::is_separator) {
        return Err(FsError::InvalidFileName(key.to_string()));
    }
    Ok(())
}

/// Writes every stored profile to `outdir`. Returns the number of files written.
///
/// All keys are checked before anything is written.
///
/// # Errors
///
/// Returns `FsError::InvalidFileName` for a key containing a path separator,
/// or an error if the directory or a file cannot be written.
pub fn run_export_command<S, W>(
    store: &S,
    outdir: &Path,
    export: &ExportConfig,
    out: &mut W,
) -> Result<usize>
where
    S: KvStore + ?Sized,
    W: Write,
{
    let entries = store.entries()?;
    for (key, _) in &entries {
        check_file_name(key).map_err(DenvError::from)?;
    }

    std::fs::create_dir_all(outdir).map_err(io_error(outdir))?;
    for (key, text) in &entries {
        let path = outdir.join(export.file_name(key));
        std::fs::write(&path, text).map_err(io_error(&path))?;
        debug!(key, path = %path.display(), "exported");
    }
    writeln!(out, "Data exported to {}", outdir.display())?;
    Ok(entries.len())
}
