// denv: Composable environment profiles
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning.
//!
//! ```text
//! ProcessBuilder::which("make")
//!   .args() .env(scope) .clean_env()
//!   .run()
//!       --> tokio::process::Command (stdio inherited)
//!           Ctrl+C ignored by us, handled by the child
//!       --> ProcessOutput { exit_code }
//! ```

pub mod builder;
mod runner;
