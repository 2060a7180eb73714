// denv: Composable environment profiles
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config command for denv.

use std::io::Write;

use crate::config::Config;
use crate::error::Result;

/// Display current configuration options followed by the loaded files.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run_config_command<W: Write>(
    config: &Config,
    config_files: &[String],
    out: &mut W,
) -> Result<()> {
    for line in config.format_options() {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    if config_files.is_empty() {
        writeln!(out, "No configuration files loaded")?;
    } else {
        writeln!(out, "Configuration files:")?;
        for line in config_files {
            writeln!(out, "  {line}")?;
        }
    }
    Ok(())
}
