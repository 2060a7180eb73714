// denv: Composable environment profiles
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration section types.
//!
//! ```text
//! [store]   path
//! [export]  outdir, extension
//! [editor]  command
//! [log]     level, file_level, file
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Database location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Database file (default: `~/.config/denv.db`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Import/export of template files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Default output directory for `export`.
    pub outdir: PathBuf,
    /// File extension of template files, without the dot.
    pub extension: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            outdir: PathBuf::from("env-data"),
            extension: "yml".to_string(),
        }
    }
}

impl ExportConfig {
    /// File name used for `key` on export.
    #[must_use]
    pub fn file_name(&self, key: &str) -> String {
        format!("{key}.{}", self.extension)
    }

    /// Key for an imported file name: the name minus the template extension.
    #[must_use]
    pub fn key_for<'a>(&self, file_name: &'a str) -> &'a str {
        file_name
            .strip_suffix(self.extension.as_str())
            .and_then(|stem| stem.strip_suffix('.'))
            .filter(|stem| !stem.is_empty())
            .unwrap_or(file_name)
    }
}

/// External editor for `edit`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Editor program; `$EDITOR` is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

/// Logging options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSettings {
    /// Console log level (0-6).
    pub level: LogLevel,
    /// Log file level (0-6).
    pub file_level: LogLevel,
    /// Log file path; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::WARN,
            file_level: LogLevel::DEBUG,
            file: None,
        }
    }
}
