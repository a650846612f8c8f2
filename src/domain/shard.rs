//! Type-safe shard identifier.
//!
//! [`Shard`] is a newtype wrapper around an interned string providing
//! type safety so that shard names cannot be confused with role names
//! or other strings.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Named horizontal partition of the data store.
///
/// Wraps a cheaply clonable `Arc<str>`. Used as the inner dictionary
/// key in [`super::PoolRegistry`], scoped to a role: `shard_one` under
/// the writing role and `shard_one` under the reading role are
/// unrelated entries. Unsharded setups use the single default shard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shard(Arc<str>);

impl Shard {
    /// Creates a shard from any string-like name.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// Returns the shard name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Shard {
    /// The conventional single partition of an unsharded database.
    fn default() -> Self {
        Self::new("default")
    }
}

impl fmt::Display for Shard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Shard {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Shard {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
