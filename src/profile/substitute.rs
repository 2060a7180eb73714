// denv: Composable environment profiles
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `$name` / `${name}` placeholder expansion.
//!
//! ```text
//! "http://$HOST:${PORT}/x"  +  {HOST: a, PORT: 1}  -->  "http://a:1/x"
//! "$$" "$" "${}" "$-"       -->  unchanged (no identifier follows `$`)
//! "$missing"                -->  ""
//! ```
//!
//! Identifiers are ASCII word characters. Expansion is a single pass: text
//! produced by a replacement is never scanned again.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::scope::Scope;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(?:([A-Za-z0-9_]+)|\{([A-Za-z0-9_]+)\})")
        .expect("placeholder pattern is a valid regex")
});

/// Replaces every placeholder in `template` with its value from `scope`.
///
/// Names missing from `scope` expand to the empty string.
#[must_use]
pub fn substitute(template: &str, scope: &Scope) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            let name = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map_or("", |m| m.as_str());
            scope.get(name).unwrap_or_default().to_string()
        })
        .into_owned()
}

/// Lists placeholder names referenced by `template`, in order of appearance.
#[must_use]
pub fn placeholders(template: &str) -> Vec<&str> {
    PLACEHOLDER
        .captures_iter(template)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str())
        .collect()
}
