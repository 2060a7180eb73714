// denv: Composable environment profiles
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for commands that manipulate stored profiles.

use clap::Args;
use std::path::PathBuf;

/// A single profile key.
#[derive(Debug, Clone, Args)]
pub struct KeyArgs {
    /// Profile key.
    #[arg(value_name = "KEY")]
    pub key: String,
}

/// Arguments for the `rename` command.
#[derive(Debug, Clone, Args)]
pub struct RenameArgs {
    /// Current profile key.
    #[arg(value_name = "KEY")]
    pub key: String,

    /// New profile key.
    #[arg(value_name = "NAME")]
    pub new_key: String,
}

/// Arguments for the `import` command.
#[derive(Debug, Clone, Args)]
pub struct ImportArgs {
    /// Directory whose files become profiles.
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,
}

/// Arguments for the `export` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ExportArgs {
    /// Output directory (defaults to export.outdir).
    #[arg(short = 'o', long = "outdir", value_name = "DIR")]
    pub outdir: Option<PathBuf>,
}
