// denv: Composable environment profiles
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Run command arguments.
//!
//! ```text
//! run -e base -e dev -- make all   → spawn make with base+dev applied
//! run -e base --export             → NAME=value lines
//! run -e base --export --json      → one JSON object
//! DENV_KEYS=base,dev run -- make   → keys from the environment
//! ```

use clap::{ArgAction, Args};

/// Environment variable consulted when no `-e` is given.
pub const KEYS_ENV_VAR: &str = "DENV_KEYS";

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    /// Profile to apply; repeat to merge several, later ones win.
    #[arg(short = 'e', long = "env", value_name = "KEY", action = ArgAction::Append)]
    pub keys: Vec<String>,

    /// Prints the resolved variables instead of running a command.
    #[arg(long, conflicts_with = "command")]
    pub export: bool,

    /// Prints the export as a JSON object.
    #[arg(long, requires = "export")]
    pub json: bool,

    /// Runs the command with only the resolved variables set.
    #[arg(long = "clean-env")]
    pub clean_env: bool,

    /// Command and arguments to run.
    #[arg(value_name = "COMMAND", trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl RunArgs {
    /// Profile keys to resolve: `-e` values, or else the comma-separated
    /// `fallback` (normally `$DENV_KEYS`) with empty items dropped.
    #[must_use]
    pub fn profile_keys(&self, fallback: Option<&str>) -> Vec<String> {
        if !self.keys.is_empty() {
            return self.keys.clone();
        }
        fallback
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|key| !key.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    }
}
