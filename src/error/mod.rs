// denv: Composable environment profiles
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              DenvError (~24 bytes)
//!                     |
//!   +-------+-------+-------+-------+-------+
//!   |       |       |       |       |       |
//!   v       v       v       v       v       v
//! Bail  Profile  Store   Cfg    Proc   Fs  Io/Other
//!        Box      Box    Box    Box    Box  Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Profile NotFound, Parse, CyclicExtends
//!   Store   NotFound, Sqlite, Open
//!   Config  ParseError, InvalidValue, NotFound
//!   Process ExecutableNotFound, SpawnFailed, EditorNotSet
//!   Fs      NotFound, InvalidFileName, IoError
//!
//! All variants boxed => DenvError fits in 24 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`DenvError`].
pub type DenvResult<T> = std::result::Result<T, DenvError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum DenvError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Profile resolution failed.
    #[error("profile error: {0}")]
    Profile(#[from] Box<ProfileError>),

    /// Key-value store operation failed.
    #[error("store error: {0}")]
    Store(#[from] Box<StoreError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

impl DenvError {
    /// Returns the profile error, if this is one.
    #[must_use]
    pub fn as_profile(&self) -> Option<&ProfileError> {
        match self {
            Self::Profile(err) => Some(&**err),
            _ => None,
        }
    }

    /// Returns the store error, if this is one.
    #[must_use]
    pub fn as_store(&self) -> Option<&StoreError> {
        match self {
            Self::Store(err) => Some(&**err),
            _ => None,
        }
    }
}

/// Create a fatal [`DenvError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> DenvError {
    DenvError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for DenvError {
                fn from(err: $error) -> Self {
                    DenvError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ProfileError => Profile,
    StoreError => Store,
    ConfigError => Config,
    ProcessError => Process,
    FsError => Fs,
    std::io::Error => Io,
}

impl From<rusqlite::Error> for DenvError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Sqlite(err).into()
    }
}

// --- Profile Errors ---

/// Profile resolution errors.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Requested profile (or one of its ancestors) is not stored.
    #[error("profile not found: {key}")]
    NotFound { key: String },

    /// Stored text is not a valid profile document.
    #[error("failed to parse profile '{key}': {message}")]
    Parse { key: String, message: String },

    /// The extends graph loops back to a profile that is still being resolved.
    #[error("cyclic extends: {}", .cycle.join(" -> "))]
    CyclicExtends { cycle: Vec<String> },
}

// --- Store Errors ---

/// Key-value store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Source key of a rename does not exist.
    #[error("key not found: {key}")]
    NotFound { key: String },

    /// Failed to open the database file.
    #[error("failed to open database '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    /// Error from the SQLite engine.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration sources.
    #[error("failed to parse config: {message}")]
    ParseError { message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// A required setting could not be determined.
    #[error("cannot determine {0}")]
    NotFound(String),
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// No editor configured and `$EDITOR` is unset.
    #[error("no editor configured: set $EDITOR or editor.command")]
    EditorNotSet,
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// Key cannot be used as a file name.
    #[error("'{0}' cannot be used as a file name")]
    InvalidFileName(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
