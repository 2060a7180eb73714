// denv: Composable environment profiles
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use denv::cli::{Cli, Command};

// =============================================================================
// Run Command
// =============================================================================

#[test]
fn cli_run_shell_with_profiles() {
    let cli = Cli::try_parse_from([
        "denv", "run", "-e", "base", "--env", "prod", "--clean-env", "--", "bash", "-lc",
        "echo $PATH",
    ])
    .unwrap();
    let Some(Command::Run(args)) = cli.command else {
        panic!("expected run command");
    };
    assert_eq!(args.keys, ["base", "prod"]);
    assert!(args.clean_env);
    assert_eq!(args.command, ["bash", "-lc", "echo $PATH"]);
}

#[test]
fn cli_run_keys_from_env_list() {
    let cli = Cli::try_parse_from(["denv", "run", "--export"]).unwrap();
    let Some(Command::Run(args)) = cli.command else {
        panic!("expected run command");
    };
    assert_eq!(args.profile_keys(Some("base,dev")), ["base", "dev"]);
}

#[test]
fn cli_run_without_command_parses() {
    // the missing command is reported by the handler, not by clap
    let cli = Cli::try_parse_from(["denv", "run", "-e", "base"]).unwrap();
    let Some(Command::Run(args)) = cli.command else {
        panic!("expected run command");
    };
    assert!(args.action().is_err());
}

// =============================================================================
// Store Commands
// =============================================================================

#[test]
fn cli_store_commands() {
    let parsed: Vec<_> = [
        vec!["denv", "cat", "base"],
        vec!["denv", "keys"],
        vec!["denv", "del", "base"],
        vec!["denv", "rm", "base"],
        vec!["denv", "rename", "base", "common"],
        vec!["denv", "edit", "base"],
        vec!["denv", "import", "env-data"],
        vec!["denv", "export"],
        vec!["denv", "config"],
        vec!["denv", "version"],
    ]
    .into_iter()
    .map(|argv| {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Some(Command::Run(_)) => "run",
            Some(Command::Cat(_)) => "cat",
            Some(Command::Keys) => "keys",
            Some(Command::Del(_)) => "del",
            Some(Command::Rename(_)) => "rename",
            Some(Command::Edit(_)) => "edit",
            Some(Command::Import(_)) => "import",
            Some(Command::Export(_)) => "export",
            Some(Command::Config) => "config",
            Some(Command::Version) => "version",
            None => "none",
        }
    })
    .collect();
    insta::assert_snapshot!(parsed.join(" "), @"cat keys del del rename edit import export config version");
}

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["denv"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn cli_unknown_command() {
    assert!(Cli::try_parse_from(["denv", "frobnicate"]).is_err());
}

// =============================================================================
// Global Options
// =============================================================================

#[test]
fn cli_global_options_after_subcommand_rejected() {
    assert!(Cli::try_parse_from(["denv", "keys", "--log-level", "3"]).is_err());
}

#[test]
fn cli_config_file_option() {
    let cli = Cli::try_parse_from(["denv", "--config", "/etc/denv.toml", "config"]).unwrap();
    assert_eq!(
        cli.global.config.as_deref(),
        Some(std::path::Path::new("/etc/denv.toml"))
    );
}
