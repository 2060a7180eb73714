// denv: Composable environment profiles
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core process management.
//!
//! ```text
//!              core
//!               |
//!            process
//!               |
//!   ProcessBuilder --> tokio::process --> ProcessOutput
//!   (run: target command, edit: $EDITOR)
//! ```

pub mod process;
