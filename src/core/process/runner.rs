// denv: Composable environment profiles
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution and lifecycle management.
//!
//! ```text
//!          run()
//!            |
//!            v
//!     build_command()
//!   args, env overlay, stdio
//!            |
//!            v
//!         spawn()
//!            |
//!            v
//!   wait, swallowing Ctrl+C
//!            |
//!            v
//!   exit code (128+N on signal N)
//!            |
//!            v
//!      ProcessOutput
//! ```

use crate::error::{DenvError, ProcessError, Result};
use anyhow::Context;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::{debug, trace};

use super::builder::{ProcessBuilder, ProcessOutput};

impl ProcessBuilder {
    /// Returns the display name for this process.
    fn display_name(&self) -> String {
        self.name_override().map_or_else(
            || {
                self.program().file_stem().map_or_else(
                    || "process".to_string(),
                    |s| s.to_string_lossy().into_owned(),
                )
            },
            String::from,
        )
    }

    /// Returns the full command line as a string (for logging).
    fn command_line(&self) -> String {
        use std::fmt::Write as _;
        let mut cmd = format!("{}", self.program().display());
        for arg in self.args_slice() {
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Spawns the process with inherited stdio and waits for it to exit.
    ///
    /// While the child runs, Ctrl+C is not fatal to us: the terminal delivers
    /// the interrupt to the child, and its exit status is what gets reported.
    /// A non-zero exit is not an error here; callers decide what it means.
    ///
    /// # Errors
    ///
    /// Returns an error if spawning the child fails or waiting on it fails.
    pub async fn run(self) -> Result<ProcessOutput> {
        let name = self.display_name();
        let cmd_line = self.command_line();
        debug!(process = %name, cmd = %cmd_line, vars = self.env_overlay().len(), "exec");

        let mut command = self.build_command();
        let mut child = command
            .spawn()
            .map_err(|source| {
                DenvError::from(ProcessError::SpawnFailed {
                    command: cmd_line.clone(),
                    source,
                })
            })?;
        trace!(process = %name, pid = ?child.id(), "spawned");

        let interrupts = tokio::spawn(async {
            while tokio::signal::ctrl_c().await.is_ok() {
                debug!("interrupt received, waiting for child to exit");
            }
        });

        let status = child
            .wait()
            .await
            .with_context(|| format!("failed to wait for {name}"));
        interrupts.abort();
        let status = status?;

        let exit_code = exit_code_of(status);
        debug!(process = %name, exit_code, "exited");
        Ok(ProcessOutput::new(exit_code))
    }

    fn build_command(&self) -> Command {
        let mut cmd = Command::new(self.program());
        cmd.args(self.args_slice());

        if self.is_clean_env() {
            cmd.env_clear();
        }
        cmd.envs(self.env_overlay().iter());

        cmd.stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);
        cmd
    }
}

/// Maps an exit status to a shell-style code.
fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt as _;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
