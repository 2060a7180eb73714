// denv: Composable environment profiles
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Parsed form of a stored profile.
//!
//! ```yaml
//! extends: [base, db]        # optional, resolved in order
//! local:                     # optional, template-only
//!   host: db.internal
//! env:                       # optional, exported
//!   DATABASE_URL: postgres://${host}:$port/app
//!   DEBUG: true              # scalars are stringified
//! ```
//!
//! Blank text and a bare `null` document are empty profiles. Unknown
//! top-level keys are ignored.

use serde_yaml::{Mapping, Value};

use super::scope::Scope;
use crate::error::ProfileError;

/// Logical content of one stored profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDocument {
    /// Ancestor profile names, in override order.
    pub extends: Vec<String>,
    /// Template-only variables.
    pub local: Scope,
    /// Exported variables, values not yet substituted.
    pub env: Scope,
}

impl ProfileDocument {
    /// Parses the stored text of profile `key`.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::Parse` if the text is not YAML, is not a mapping,
    /// or has an `extends`/`local`/`env` field of the wrong shape.
    pub fn parse(key: &str, text: &str) -> Result<Self, ProfileError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }

        let value: Value = serde_yaml::from_str(text).map_err(|e| parse_error(key, e))?;
        let mapping = match value {
            Value::Null => return Ok(Self::default()),
            Value::Mapping(mapping) => mapping,
            other => {
                return Err(parse_error(
                    key,
                    format!("expected a mapping, found {}", kind(&other)),
                ));
            }
        };

        Ok(Self {
            extends: parse_extends(key, mapping.get("extends"))?,
            local: parse_block(key, "local", mapping.get("local"))?,
            env: parse_block(key, "env", mapping.get("env"))?,
        })
    }
}

fn parse_extends(key: &str, value: Option<&Value>) -> Result<Vec<String>, ProfileError> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Sequence(items)) => items
            .iter()
            .map(|item| {
                let name = match item {
                    Value::Null => None,
                    other => scalar_to_string(other),
                };
                name.ok_or_else(|| {
                    parse_error(
                        key,
                        format!("extends entries must be profile names, found {}", kind(item)),
                    )
                })
            })
            .collect(),
        Some(other) => Err(parse_error(
            key,
            format!("extends must be a sequence, found {}", kind(other)),
        )),
    }
}

fn parse_block(key: &str, field: &str, value: Option<&Value>) -> Result<Scope, ProfileError> {
    match value {
        None | Some(Value::Null) => Ok(Scope::new()),
        Some(Value::Mapping(mapping)) => parse_mapping(key, field, mapping),
        Some(other) => Err(parse_error(
            key,
            format!("{field} must be a mapping, found {}", kind(other)),
        )),
    }
}

fn parse_mapping(key: &str, field: &str, mapping: &Mapping) -> Result<Scope, ProfileError> {
    let mut scope = Scope::new();
    for (name, value) in mapping {
        let name = scalar_to_string(name).ok_or_else(|| {
            parse_error(key, format!("{field} keys must be scalars, found {}", kind(name)))
        })?;
        let value = scalar_to_string(value).ok_or_else(|| {
            parse_error(
                key,
                format!("{field}.{name} must be a scalar, found {}", kind(value)),
            )
        })?;
        scope.insert(name, value);
    }
    Ok(scope)
}

/// Stringifies YAML scalars; `null` becomes the empty string.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => None,
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

fn parse_error(key: &str, message: impl std::fmt::Display) -> ProfileError {
    ProfileError::Parse {
        key: key.to_string(),
        message: message.to_string(),
    }
}
