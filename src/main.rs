// denv: Composable environment profiles
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Run | Cat | Keys | Del | Rename | Edit | Import | Export | Config
//! ```

use std::io;
use std::process::ExitCode;

use denv::cli::global::GlobalOptions;
use denv::cli::{self, Cli, Command};
use denv::cmd::config::run_config_command;
use denv::cmd::edit::run_edit_command;
use denv::cmd::open_store;
use denv::cmd::run::run_run_command;
use denv::cmd::store::{
    run_cat_command, run_del_command, run_keys_command, run_rename_command,
};
use denv::cmd::transfer::{run_export_command, run_import_command};
use denv::config::loader::ConfigLoader;
use denv::config::{Config, ENV_PREFIX};
use denv::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let loader = match build_config_loader(&cli.global) {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let config_files = loader.format_loaded_files();
    let config = match loader.build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config, &config_files).await
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.log.level)
        .with_file_level(config.log.file_level)
        .maybe_with_log_file(config.log.file.as_ref().map(|p| p.display().to_string()))
        .build()
}

async fn dispatch_command(cli: &Cli, config: &Config, config_files: &[String]) -> ExitCode {
    let mut stdout = io::stdout();
    let result = match &cli.command {
        Some(Command::Run(args)) => {
            return match run_run_command(args, config).await {
                Ok(code) => exit_code(code),
                Err(e) => report(&e),
            };
        }
        Some(Command::Cat(args)) => {
            open_store(config).and_then(|store| run_cat_command(&store, &args.key, &mut stdout))
        }
        Some(Command::Keys) => {
            open_store(config).and_then(|store| run_keys_command(&store, &mut stdout))
        }
        Some(Command::Del(args)) => {
            open_store(config).and_then(|mut store| run_del_command(&mut store, &args.key))
        }
        Some(Command::Rename(args)) => open_store(config)
            .and_then(|mut store| run_rename_command(&mut store, &args.key, &args.new_key)),
        Some(Command::Edit(args)) => {
            return match run_edit_command(&args.key, config).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => report(&e),
            };
        }
        Some(Command::Import(args)) => open_store(config).and_then(|mut store| {
            run_import_command(&mut store, &args.dir, &config.export, &mut stdout).map(drop)
        }),
        Some(Command::Export(args)) => {
            let outdir = args.outdir.as_ref().unwrap_or(&config.export.outdir);
            open_store(config).and_then(|store| {
                run_export_command(&store, outdir, &config.export, &mut stdout).map(drop)
            })
        }
        Some(Command::Config) => run_config_command(config, config_files, &mut stdout),
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

fn report(e: &anyhow::Error) -> ExitCode {
    eprintln!("Error: {e:#}");
    ExitCode::FAILURE
}

/// Converts a child exit code to ours; codes outside 0..=255 become 1.
fn exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> denv::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = Config::default_file() {
        loader = loader.add_toml_file_optional(path);
    }
    if let Some(ref path) = global.config {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for (key, value) in global.to_config_overrides() {
        loader = loader.set(key, value)?;
    }
    Ok(loader)
}
