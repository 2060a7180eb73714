// denv: Composable environment profiles
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the SQLite store and file import/export.

use denv::cmd::transfer::{run_export_command, run_import_command};
use denv::config::types::ExportConfig;
use denv::store::{KvStore, SqliteStore};

fn populate(store: &mut SqliteStore) {
    let profiles = [
        ("base", "local:\n  root: /opt\nenv:\n  PATH: $root/bin\n"),
        ("dev", "extends:\n  - base\nenv:\n  MODE: dev\n"),
        ("empty", ""),
        ("unicode", "env:\n  GREETING: \"héllo wörld\"\n"),
    ];
    for (key, text) in profiles {
        store.set(key, text).unwrap();
    }
}

#[test]
fn store_export_clear_import_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let outdir = dir.path().join("env-data");
    let export = ExportConfig::default();

    let mut store = SqliteStore::open(dir.path().join("denv.db")).unwrap();
    populate(&mut store);
    let before = store.entries().unwrap();

    run_export_command(&store, &outdir, &export, &mut Vec::new()).unwrap();
    for key in store.keys().unwrap() {
        store.delete(&key).unwrap();
    }
    assert!(store.keys().unwrap().is_empty());

    let mut out = Vec::new();
    run_import_command(&mut store, &outdir, &export, &mut out).unwrap();
    assert_eq!(store.entries().unwrap(), before);
    insta::assert_snapshot!(String::from_utf8(out).unwrap(), @r"
    Imported entry: base
    Imported entry: dev
    Imported entry: empty
    Imported entry: unicode
    ");
}

#[test]
fn store_import_into_fresh_database() {
    let dir = tempfile::tempdir().unwrap();
    let outdir = dir.path().join("shared");
    let export = ExportConfig::default();

    let mut source = SqliteStore::open(dir.path().join("a.db")).unwrap();
    populate(&mut source);
    run_export_command(&source, &outdir, &export, &mut Vec::new()).unwrap();

    let mut target = SqliteStore::open(dir.path().join("b.db")).unwrap();
    target.set("base", "stale").unwrap();
    run_import_command(&mut target, &outdir, &export, &mut Vec::new()).unwrap();

    assert_eq!(target.entries().unwrap(), source.entries().unwrap());
}

#[test]
fn store_rename_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("denv.db");
    {
        let mut store = SqliteStore::open(&path).unwrap();
        populate(&mut store);
        store.rename("dev", "development").unwrap();
    }
    let store = SqliteStore::open(&path).unwrap();
    assert!(store.get("dev").unwrap().is_none());
    assert_eq!(
        store.get("development").unwrap().as_deref(),
        Some("extends:\n  - base\nenv:\n  MODE: dev\n")
    );
}
