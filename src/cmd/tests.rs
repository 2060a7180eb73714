// denv: Composable environment profiles
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::config::run_config_command;
use super::edit::{EditOutcome, apply_edit};
use super::run::{RunAction, render_export, resolve_keys};
use super::store::{run_cat_command, run_del_command, run_keys_command, run_rename_command};
use super::transfer::{run_export_command, run_import_command};
use crate::cli::run::RunArgs;
use crate::config::Config;
use crate::config::types::ExportConfig;
use crate::error::{DenvError, FsError, StoreError};
use crate::store::{KvStore, MemoryStore};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn output(buf: Vec<u8>) -> String {
    String::from_utf8(buf).expect("utf-8 output")
}

fn sample_store() -> MemoryStore {
    MemoryStore::new()
        .with("base", "local:\n  ROOT: /opt\nenv:\n  PATH: $ROOT/bin\n")
        .with("dev", "extends: [base]\nenv:\n  MODE: dev\n  HOME_DIR: ${ROOT}/home\n")
}

fn denv_error(err: &anyhow::Error) -> &DenvError {
    err.downcast_ref::<DenvError>().expect("DenvError")
}

// --- run ---

#[test]
fn test_run_action_requires_command_or_export() {
    let err = RunArgs::default().action().unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"fatal error: nothing to run: pass a command or --export");
}

#[test]
fn test_run_action_spawn() {
    let args = RunArgs {
        command: vec!["make".into(), "all".into()],
        ..RunArgs::default()
    };
    let action = args.action().unwrap();
    assert_eq!(
        action,
        RunAction::Spawn {
            program: "make",
            args: &["all".to_string()],
        }
    );
}

#[test]
fn test_export_lines() {
    let store = sample_store();
    let env = resolve_keys(&store, &["dev".to_string()]).unwrap();
    insta::assert_snapshot!(render_export(&env, false).unwrap(), @r"
    HOME_DIR=/opt/home
    MODE=dev
    ");
}

#[test]
fn test_export_json() {
    let store = sample_store();
    let env = resolve_keys(&store, &["base".to_string(), "dev".to_string()]).unwrap();
    insta::assert_snapshot!(render_export(&env, true).unwrap(), @r#"
    {
      "HOME_DIR": "/opt/home",
      "MODE": "dev",
      "PATH": "/opt/bin"
    }
    "#);
}

#[test]
fn test_export_empty_request() {
    let store = sample_store();
    let env = resolve_keys(&store, &[]).unwrap();
    assert_eq!(render_export(&env, false).unwrap(), "");
    assert_eq!(render_export(&env, true).unwrap(), "{}");
}

#[test]
fn test_resolve_keys_missing_profile() {
    let store = sample_store();
    let err = resolve_keys(&store, &["nope".to_string()]).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"profile error: profile not found: nope");
}

// --- store commands ---

#[test]
fn test_cat_prints_raw_text() {
    let store = MemoryStore::new().with("a", "env:\n  X: 1");
    let mut out = Vec::new();
    run_cat_command(&store, "a", &mut out).unwrap();
    assert_eq!(output(out), "env:\n  X: 1\n");
}

#[test]
fn test_cat_missing_key() {
    let store = MemoryStore::new();
    let err = run_cat_command(&store, "ghost", &mut Vec::new()).unwrap_err();
    assert!(matches!(
        denv_error(&err).as_store(),
        Some(StoreError::NotFound { key }) if key == "ghost"
    ));
}

#[test]
fn test_keys_sorted() {
    let store = MemoryStore::new().with("zeta", "").with("alpha", "");
    let mut out = Vec::new();
    run_keys_command(&store, &mut out).unwrap();
    insta::assert_snapshot!(output(out), @r"
    alpha
    zeta
    ");
}

#[test]
fn test_del_and_rename() {
    let mut store = MemoryStore::new().with("a", "1").with("b", "2");
    run_del_command(&mut store, "a").unwrap();
    run_del_command(&mut store, "a").unwrap();
    run_rename_command(&mut store, "b", "c").unwrap();
    assert_eq!(store.keys().unwrap(), ["c"]);
    assert_eq!(store.get("c").unwrap().as_deref(), Some("2"));

    let err = run_rename_command(&mut store, "b", "d").unwrap_err();
    assert!(denv_error(&err).as_store().is_some());
}

// --- edit ---

#[test]
fn test_apply_edit_unchanged_writes_nothing() {
    let mut store = MemoryStore::new();
    let outcome = apply_edit(&mut store, "k", "env: {}\n", "env: {}\n").unwrap();
    assert_eq!(outcome, EditOutcome::Unchanged);
    assert!(store.get("k").unwrap().is_none());
}

#[test]
fn test_apply_edit_saves() {
    let mut store = MemoryStore::new();
    let outcome = apply_edit(&mut store, "k", "", "env:\n  A: b\n").unwrap();
    assert_eq!(outcome, EditOutcome::Saved);
    assert_eq!(store.get("k").unwrap().as_deref(), Some("env:\n  A: b\n"));
}

#[test]
fn test_apply_edit_saves_unparsable() {
    let mut store = MemoryStore::new().with("k", "env: {}\n");
    let outcome = apply_edit(&mut store, "k", "env: {}\n", "env: [oops\n").unwrap();
    assert_eq!(outcome, EditOutcome::SavedUnparsable);
    assert_eq!(store.get("k").unwrap().as_deref(), Some("env: [oops\n"));
}

// --- import / export ---

#[test]
fn test_import_directory() {
    let dir = temp_dir();
    std::fs::write(dir.path().join("b.yml"), "env:\n  B: 2\n").unwrap();
    std::fs::write(dir.path().join("a.yml"), "env:\n  A: 1\n").unwrap();
    std::fs::write(dir.path().join("notes"), "plain").unwrap();
    std::fs::create_dir(dir.path().join("nested.yml")).unwrap();

    let mut store = MemoryStore::new();
    let mut out = Vec::new();
    let keys =
        run_import_command(&mut store, dir.path(), &ExportConfig::default(), &mut out).unwrap();

    assert_eq!(keys, ["a", "b", "notes"]);
    assert_eq!(store.get("notes").unwrap().as_deref(), Some("plain"));
    insta::assert_snapshot!(output(out), @r"
    Imported entry: a
    Imported entry: b
    Imported entry: notes
    ");
}

#[test]
fn test_import_missing_directory() {
    let dir = temp_dir();
    let missing = dir.path().join("missing");
    let err = run_import_command(
        &mut MemoryStore::new(),
        &missing,
        &ExportConfig::default(),
        &mut Vec::new(),
    )
    .unwrap_err();
    assert!(matches!(denv_error(&err), DenvError::Fs(e) if matches!(**e, FsError::NotFound(_))));
}

#[test]
fn test_export_then_import() {
    let dir = temp_dir();
    let outdir = dir.path().join("out");
    let store = sample_store();
    let export = ExportConfig::default();

    let mut out = Vec::new();
    let written = run_export_command(&store, &outdir, &export, &mut out).unwrap();
    assert_eq!(written, 2);
    assert_eq!(
        output(out),
        format!("Data exported to {}\n", outdir.display())
    );
    assert!(outdir.join("base.yml").is_file());

    let mut restored = MemoryStore::new();
    run_import_command(&mut restored, &outdir, &export, &mut Vec::new()).unwrap();
    assert_eq!(restored.entries().unwrap(), store.entries().unwrap());
}

#[test]
fn test_export_rejects_separator_in_key() {
    let dir = temp_dir();
    let outdir = dir.path().join("out");
    let store = MemoryStore::new().with("ok", "").with("team/dev", "");
    let err = run_export_command(&store, &outdir, &ExportConfig::default(), &mut Vec::new())
        .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"filesystem error: 'team/dev' cannot be used as a file name");
    assert!(!outdir.exists());
}

// --- config ---

#[test]
fn test_config_command_output() {
    let config = Config::parse("[store]\npath = \"/data/denv.db\"\n").unwrap();
    let mut out = Vec::new();
    run_config_command(&config, &[], &mut out).unwrap();
    insta::assert_snapshot!(output(out), @r"
    export.extension = yml
    export.outdir    = env-data
    log.file_level   = 4
    log.level        = 2
    store.path       = /data/denv.db

    No configuration files loaded
    ");
}
