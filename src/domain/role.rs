//! Type-safe connection role identifier.
//!
//! [`Role`] is a newtype wrapper around an interned string providing
//! type safety so that role names cannot be confused with shard names
//! or other strings.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Logical purpose of a database connection, conventionally `writing`
/// for the primary and `reading` for replicas.
///
/// Wraps a cheaply clonable `Arc<str>`. Used as the outer dictionary
/// key in [`super::PoolRegistry`]; one role may hold pool configs for
/// any number of shards. The registry applies no validation or
/// canonicalization: two roles are the same exactly when their names
/// compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Arc<str>);

impl Role {
    /// Creates a role from any string-like name.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// The conventional role for connections to the primary.
    #[must_use]
    pub fn writing() -> Self {
        Self::new("writing")
    }

    /// The conventional role for replica connections.
    #[must_use]
    pub fn reading() -> Self {
        Self::new("reading")
    }

    /// Returns the role name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::writing()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Role {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Role {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
