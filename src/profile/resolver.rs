// denv: Composable environment profiles
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Recursive profile resolution.
//!
//! ```text
//! resolve(P):
//!   local = {}
//!   for A in P.extends:            (in order, later wins)
//!       local <- resolve(A).env    (exported values usable as templates)
//!       local <- resolve(A).local
//!   local <- P.local               (own locals win)
//!   env   = { k: substitute(v, local) for k, v in P.env }
//!
//! resolve_many([K1, K2, ..]) = resolve(K1).env <- resolve(K2).env <- ..
//! ```
//!
//! A `Resolver` lives for exactly one top-level request. It remembers the
//! profiles currently being expanded (to report cycles) and the ones already
//! finished (so a diamond-shaped extends graph reads each profile once).

use std::collections::HashMap;
use tracing::{debug, trace};

use super::document::ProfileDocument;
use super::scope::Scope;
use super::substitute::{placeholders, substitute};
use crate::error::{DenvResult, ProfileError};
use crate::store::KvStore;

/// Result of resolving one profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Effective template scope: inherited values plus the profile's own locals.
    pub local: Scope,
    /// The profile's own `env` entries after substitution.
    pub env: Scope,
}

/// Single-use resolver over a [`KvStore`].
pub struct Resolver<'s, S: KvStore + ?Sized> {
    store: &'s S,
    in_progress: Vec<String>,
    resolved: HashMap<String, Resolution>,
}

impl<'s, S: KvStore + ?Sized> Resolver<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self {
            store,
            in_progress: Vec::new(),
            resolved: HashMap::new(),
        }
    }

    /// Resolves one profile and its extends chain.
    ///
    /// # Errors
    ///
    /// - `ProfileError::NotFound` if `key` or any ancestor is not stored.
    /// - `ProfileError::Parse` if any profile in the chain fails to parse.
    /// - `ProfileError::CyclicExtends` if the chain loops back on itself.
    /// - `StoreError` if the store cannot be read.
    pub fn resolve_profile(&mut self, key: &str) -> DenvResult<Resolution> {
        if let Some(done) = self.resolved.get(key) {
            trace!(key, "profile already resolved");
            return Ok(done.clone());
        }

        if let Some(start) = self.in_progress.iter().position(|k| k == key) {
            let mut cycle = self.in_progress[start..].to_vec();
            cycle.push(key.to_string());
            return Err(ProfileError::CyclicExtends { cycle }.into());
        }

        self.in_progress.push(key.to_string());
        let result = self.expand(key);
        self.in_progress.pop();

        let resolution = result?;
        self.resolved.insert(key.to_string(), resolution.clone());
        Ok(resolution)
    }

    /// Resolves `keys` in order and merges their `env` outputs; later keys win.
    ///
    /// Locals never reach the result.
    ///
    /// # Errors
    ///
    /// Fails with the first error from [`Self::resolve_profile`]; no partial
    /// environment is returned.
    pub fn resolve_many<I, K>(&mut self, keys: I) -> DenvResult<Scope>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut env = Scope::new();
        for key in keys {
            let resolution = self.resolve_profile(key.as_ref())?;
            env.merge_from(&resolution.env);
        }
        Ok(env)
    }

    fn expand(&mut self, key: &str) -> DenvResult<Resolution> {
        debug!(key, "resolving profile");
        let text = self
            .store
            .get(key)?
            .ok_or_else(|| ProfileError::NotFound {
                key: key.to_string(),
            })?;
        let document = ProfileDocument::parse(key, &text)?;

        let mut local = Scope::new();
        for ancestor in &document.extends {
            trace!(key, ancestor = %ancestor, "inheriting");
            let inherited = self.resolve_profile(ancestor)?;
            local.merge_from(&inherited.env);
            local.merge_from(&inherited.local);
        }
        local.merge_from(&document.local);

        let env = document
            .env
            .iter()
            .map(|(name, template)| {
                for missing in placeholders(template)
                    .into_iter()
                    .filter(|p| !local.contains(p))
                {
                    debug!(key, var = name, placeholder = missing, "undefined placeholder");
                }
                (name, substitute(template, &local))
            })
            .collect();

        Ok(Resolution { local, env })
    }
}

/// Resolves one profile with a fresh [`Resolver`].
///
/// # Errors
///
/// See [`Resolver::resolve_profile`].
pub fn resolve_profile<S: KvStore + ?Sized>(store: &S, key: &str) -> DenvResult<Resolution> {
    Resolver::new(store).resolve_profile(key)
}

/// Resolves and merges several profiles with a fresh [`Resolver`].
///
/// # Errors
///
/// See [`Resolver::resolve_many`].
pub fn resolve_many<S, I, K>(store: &S, keys: I) -> DenvResult<Scope>
where
    S: KvStore + ?Sized,
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    Resolver::new(store).resolve_many(keys)
}
