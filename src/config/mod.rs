// denv: Composable environment profiles
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for denv.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. ~/.config/denv/config.toml (optional)
//! 3. --config FILE
//! 4. DENV__* env vars
//! 5. CLI overrides (--path, --log-level, ...)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! DENV__STORE__PATH=/tmp/x.db  → store.path = "/tmp/x.db"
//! DENV__LOG__LEVEL=4           → log.level = 4
//! DENV__EDITOR__COMMAND=nvim   → editor.command = "nvim"
//! ```
//!
//! The double underscore keeps `DENV_KEYS` and `DENV_PATH` (read by the
//! CLI directly) out of the configuration namespace.

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ProcessError, Result};

use loader::ConfigLoader;
use types::{EditorConfig, ExportConfig, LogSettings, StoreConfig};

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "DENV";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Database options.
    pub store: StoreConfig,
    /// Import/export options.
    pub export: ExportConfig,
    /// Editor options.
    pub editor: EditorConfig,
    /// Logging options.
    pub log: LogSettings,
}

impl Config {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Location of the user-level config file, if a home directory exists.
    #[must_use]
    pub fn default_file() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("denv").join("config.toml"))
    }

    /// Effective database path.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no path is configured and the home
    /// directory cannot be determined.
    pub fn store_path(&self) -> std::result::Result<PathBuf, ConfigError> {
        if let Some(path) = &self.store.path {
            return Ok(path.clone());
        }
        dirs::home_dir()
            .map(|home| home.join(".config").join("denv.db"))
            .ok_or_else(|| ConfigError::NotFound("home directory for the default store path".into()))
    }

    /// Effective editor program: `editor.command`, then `$EDITOR`.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::EditorNotSet` if neither is set.
    pub fn editor_command(&self) -> std::result::Result<String, ProcessError> {
        self.editor
            .command
            .clone()
            .or_else(|| std::env::var("EDITOR").ok())
            .filter(|cmd| !cmd.trim().is_empty())
            .ok_or(ProcessError::EditorNotSet)
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert(
            "store.path",
            self.store_path()
                .map_or_else(|e| format!("<{e}>"), |p| p.display().to_string()),
        );
        options.insert("export.outdir", self.export.outdir.display().to_string());
        options.insert("export.extension", self.export.extension.clone());
        if let Some(command) = &self.editor.command {
            options.insert("editor.command", command.clone());
        }
        options.insert("log.level", self.log.level.as_u8().to_string());
        options.insert("log.file_level", self.log.file_level.as_u8().to_string());
        if let Some(file) = &self.log.file {
            options.insert("log.file", file.display().to_string());
        }

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
