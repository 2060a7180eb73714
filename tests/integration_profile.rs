// denv: Composable environment profiles
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for profile resolution against an on-disk database.

use std::path::PathBuf;

use denv::error::ProfileError;
use denv::profile::{load_env, resolve_many, resolve_profile};
use denv::store::{KvStore, SqliteStore};
use tempfile::TempDir;

struct Fixture {
    _dir: TempDir,
    path: PathBuf,
}

impl Fixture {
    fn new(profiles: &[(&str, &str)]) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("denv.db");
        let mut store = SqliteStore::open(&path).expect("failed to open store");
        for (key, text) in profiles {
            store.set(key, text).expect("failed to store profile");
        }
        Self { _dir: dir, path }
    }

    fn store(&self) -> SqliteStore {
        SqliteStore::open(&self.path).expect("failed to reopen store")
    }
}

fn pairs(scope: &denv::profile::Scope) -> Vec<(String, String)> {
    scope
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// =============================================================================
// Override order
// =============================================================================

#[test]
fn profile_override_order() {
    let fixture = Fixture::new(&[
        ("a", "local:\n  x: a\n  y: a\n"),
        ("b", "local:\n  y: b\n  z: b\n"),
        ("p", "extends: [a, b]\nlocal:\n  x: p\n"),
    ]);
    let resolved = resolve_profile(&fixture.store(), "p").unwrap();
    insta::assert_debug_snapshot!(pairs(&resolved.local), @r#"
    [
        (
            "x",
            "p",
        ),
        (
            "y",
            "b",
        ),
        (
            "z",
            "b",
        ),
    ]
    "#);
    assert!(resolved.env.is_empty());
}

#[test]
fn profile_env_folds_into_local() {
    let fixture = Fixture::new(&[
        ("a", "env:\n  FOO: \"1\"\n"),
        ("p", "extends: [a]\nenv:\n  BAR: $FOO\n"),
    ]);
    let resolved = resolve_profile(&fixture.store(), "p").unwrap();
    assert_eq!(resolved.env.get("BAR"), Some("1"));
    assert!(!resolved.env.contains("FOO"));
    assert_eq!(resolved.local.get("FOO"), Some("1"));
}

#[test]
fn profile_missing_placeholder_is_empty() {
    let fixture = Fixture::new(&[("p", "env:\n  X: $missing\n  Y: pre-${missing}-post\n")]);
    let resolved = resolve_profile(&fixture.store(), "p").unwrap();
    assert_eq!(resolved.env.get("X"), Some(""));
    assert_eq!(resolved.env.get("Y"), Some("pre--post"));
}

#[test]
fn profile_literal_dollars() {
    let fixture = Fixture::new(&[("p", "env:\n  X: $$\n  Y: \"a$b \"\n  Z: cost $\n")]);
    let resolved = resolve_profile(&fixture.store(), "p").unwrap();
    assert_eq!(resolved.env.get("X"), Some("$$"));
    assert_eq!(resolved.env.get("Y"), Some("a "));
    assert_eq!(resolved.env.get("Z"), Some("cost $"));
}

// =============================================================================
// Multi-profile merge
// =============================================================================

#[test]
fn profile_resolve_many_later_wins() {
    let fixture = Fixture::new(&[
        ("common", "env:\n  PORT: \"80\"\n"),
        ("base", "extends: [common]\nenv:\n  PORT: \"8080\"\n  HOST: localhost\n"),
        ("override", "extends: [base]\nenv:\n  PORT: \"9090\"\n"),
    ]);
    let env = resolve_many(&fixture.store(), ["base", "override"]).unwrap();
    assert_eq!(env.get("PORT"), Some("9090"));
    assert_eq!(env.get("HOST"), Some("localhost"));

    let env = resolve_many(&fixture.store(), ["override", "base"]).unwrap();
    assert_eq!(env.get("PORT"), Some("8080"));
}

#[test]
fn profile_load_env_from_path() {
    let fixture = Fixture::new(&[
        ("base", "local:\n  root: /opt/app\nenv:\n  APP_HOME: $root\n"),
        ("dev", "extends: [base]\nenv:\n  APP_LOG: ${APP_HOME}/log\n"),
    ]);
    let env = load_env(&fixture.path, ["base", "dev"]).unwrap();
    insta::assert_snapshot!(env.to_export_lines(), @r"
    APP_HOME=/opt/app
    APP_LOG=/opt/app/log
    ");
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn profile_cycle_is_an_error() {
    let fixture = Fixture::new(&[
        ("x", "extends: [y]\n"),
        ("y", "extends: [x]\n"),
        ("self", "extends: [self]\n"),
    ]);
    let store = fixture.store();

    let err = resolve_profile(&store, "x").unwrap_err();
    assert!(matches!(
        err.as_profile(),
        Some(ProfileError::CyclicExtends { cycle }) if cycle == &["x", "y", "x"]
    ));

    let err = resolve_profile(&store, "self").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"profile error: cyclic extends: self -> self");
}

#[test]
fn profile_missing_ancestor() {
    let fixture = Fixture::new(&[("p", "extends: [ghost]\nenv:\n  A: b\n")]);
    let err = resolve_many(&fixture.store(), ["p"]).unwrap_err();
    assert!(matches!(
        err.as_profile(),
        Some(ProfileError::NotFound { key }) if key == "ghost"
    ));
}

#[test]
fn profile_unparsable_text() {
    let fixture = Fixture::new(&[("p", "env: [1, 2\n"), ("q", "extends: [p]\n")]);
    let err = resolve_profile(&fixture.store(), "q").unwrap_err();
    assert!(matches!(
        err.as_profile(),
        Some(ProfileError::Parse { key, .. }) if key == "p"
    ));
}

#[test]
fn profile_load_env_missing_database_dir_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("denv.db");
    let env = load_env(&path, Vec::<String>::new()).unwrap();
    assert!(env.is_empty());
    assert!(path.exists());
}
