//! Registry error types.
//!
//! [`RegistryError`] is the central error type for the crate. Absence is
//! never an error here: lookups and removals report an unknown role or
//! shard through `Option`. The only failure the registry raises is a
//! rejected write.

use crate::domain::{Role, Shard};

/// Errors reported by [`PoolRegistry`](crate::domain::PoolRegistry)
/// operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// `set_pool_config` was called without a pool config value.
    ///
    /// Carries the role and shard the caller addressed so the offending
    /// connection entry can be traced back to its source. The registry
    /// is left untouched when this is returned.
    #[error(
        "no pool config was supplied for the `{role}` role and `{shard}` shard; \
         check the connection configuration for this pair, and make sure the \
         writing and reading role names it uses match the names the registry \
         is populated under"
    )]
    MissingPoolConfig {
        /// Role the rejected entry was addressed to.
        role: Role,
        /// Shard the rejected entry was addressed to.
        shard: Shard,
    },
}
