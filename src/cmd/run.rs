// denv: Composable environment profiles
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Run command implementation.
//!
//! ```text
//! keys (-e / DENV_KEYS)
//!        |
//!        v
//! resolve_many(store, keys) --> Scope
//!        |
//!   +----+-------------------+
//!   v                        v
//! --export [--json]       COMMAND ARGS...
//! print and exit 0        spawn with env, exit with child's code
//! ```

use tracing::info;

use crate::cli::run::{KEYS_ENV_VAR, RunArgs};
use crate::config::Config;
use crate::core::process::builder::ProcessBuilder;
use crate::error::{DenvError, Result, bail_out};
use crate::profile::{Scope, resolve_many};
use crate::store::KvStore;

use super::open_store;

/// What a `run` invocation will do once the environment is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunAction<'a> {
    /// Print the environment.
    Export { json: bool },
    /// Spawn the command.
    Spawn {
        program: &'a str,
        args: &'a [String],
    },
}

impl RunArgs {
    /// Decides between exporting and spawning.
    ///
    /// # Errors
    ///
    /// Returns an error if neither a command nor `--export` was given.
    pub fn action(&self) -> Result<RunAction<'_>> {
        match self.command.split_first() {
            Some((program, args)) => Ok(RunAction::Spawn { program, args }),
            None if self.export => Ok(RunAction::Export { json: self.json }),
            None => Err(bail_out("nothing to run: pass a command or --export").into()),
        }
    }
}

/// Renders a resolved environment for `--export`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_export(env: &Scope, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(env)?)
    } else {
        Ok(env.to_export_lines())
    }
}

/// Resolves `keys` against `store`, logging the result.
///
/// # Errors
///
/// Returns the resolution error for the first failing key.
pub fn resolve_keys<S: KvStore + ?Sized>(store: &S, keys: &[String]) -> Result<Scope> {
    let env = resolve_many(store, keys).map_err(DenvError::from)?;
    info!(keys = ?keys, vars = env.len(), "resolved environment");
    Ok(env)
}

/// Main handler for the run command. Returns the process exit code.
///
/// # Errors
///
/// Returns an error if arguments are incomplete, resolution fails, or the
/// command cannot be started.
pub async fn run_run_command(args: &RunArgs, config: &Config) -> Result<i32> {
    let action = args.action()?;
    let keys = args.profile_keys(std::env::var(KEYS_ENV_VAR).ok().as_deref());

    let store = open_store(config)?;
    let env = resolve_keys(&store, &keys)?;
    drop(store);

    match action {
        RunAction::Export { json } => {
            let rendered = render_export(&env, json)?;
            if !rendered.is_empty() {
                println!("{rendered}");
            }
            Ok(0)
        }
        RunAction::Spawn { program, args: argv } => {
            let output = ProcessBuilder::which(program)
                .map_err(DenvError::from)?
                .args(argv)
                .env(&env)
                .clean_env(args.clean_env)
                .run()
                .await?;
            Ok(output.exit_code())
        }
    }
}
