// denv: Composable environment profiles
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for denv using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! denv [global options] <command>
//! run [-e KEY]... [--export [--json]] [--clean-env] [-- CMD ARGS...]
//! cat KEY | keys | del KEY | rename KEY NAME | edit KEY
//! import DIR | export [-o DIR]
//! config | version
//! ```

pub mod global;
pub mod run;
pub mod store;


use crate::cli::global::GlobalOptions;
use crate::cli::run::RunArgs;
use crate::cli::store::{ExportArgs, ImportArgs, KeyArgs, RenameArgs};
use clap::{Parser, Subcommand};

/// Composable environment profiles.
#[derive(Debug, Parser)]
#[command(
    name = "denv",
    author,
    version,
    about = "Composable environment profiles",
    long_about = "denv Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Stores named environment profiles in a local database and\n\
                  runs commands with one or more of them applied.\n\n\
                  Do `denv run -e base -e dev -- make` to run make with the\n\
                  `base` and `dev` profiles merged. See `denv <command> --help`\n\
                  for more information about a command.",
    after_help = "PROFILES:\n\n\
                  A profile is a YAML document with three optional keys:\n\
                  `extends` (list of profile keys), `local` (variables used only\n\
                  for substitution) and `env` (variables exported to commands).\n\
                  Values may reference variables as $NAME or ${NAME}."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Runs a command with profiles applied, or prints them.
    Run(RunArgs),

    /// Prints the stored text of a profile.
    Cat(KeyArgs),

    /// Lists stored profile keys.
    Keys,

    /// Deletes a profile.
    #[command(visible_alias = "rm")]
    Del(KeyArgs),

    /// Renames a profile.
    #[command(visible_alias = "mv")]
    Rename(RenameArgs),

    /// Opens a profile in the editor.
    Edit(KeyArgs),

    /// Imports every file of a directory as a profile.
    Import(ImportArgs),

    /// Exports every profile to a directory.
    Export(ExportArgs),

    /// Lists all options and the configuration files they came from.
    Config,

    /// Shows the version.
    Version,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
