// denv: Composable environment profiles
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Profile parsing and resolution.
//!
//! ```text
//! KvStore --get--> raw text --parse--> ProfileDocument
//!                                        |
//!                    Resolver (extends, merge, substitute)
//!                                        |
//!                    Resolution { local, env } --> resolve_many --> Scope
//! ```
//!
//! Parse failures are always fatal: a profile that cannot be read aborts the
//! whole request, it is never treated as empty.

pub mod document;
pub mod resolver;
pub mod scope;
pub mod substitute;


use std::path::Path;

pub use document::ProfileDocument;
pub use resolver::{Resolution, Resolver, resolve_many, resolve_profile};
pub use scope::Scope;
pub use substitute::substitute;

use crate::error::DenvResult;
use crate::store::SqliteStore;

/// Opens the database at `path` and returns the merged environment of `keys`.
///
/// # Errors
///
/// Returns an error if the store cannot be opened or any profile fails to
/// resolve.
///
/// # Example
///
/// ```no_run
/// let env = denv::profile::load_env("/home/me/.config/denv.db", ["base", "dev"])?;
/// for (name, value) in env.iter() {
///     println!("{name}={value}");
/// }
/// # Ok::<(), denv::error::DenvError>(())
/// ```
pub fn load_env<I, K>(path: impl AsRef<Path>, keys: I) -> DenvResult<Scope>
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    let store = SqliteStore::open(path)?;
    resolve_many(&store, keys)
}
