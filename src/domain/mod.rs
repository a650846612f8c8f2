//! Domain layer: identifier tokens and the pool registry.
//!
//! This module contains the crate's domain model: the opaque role and
//! shard identifiers forming the two-level key, and the registry that
//! guards the role to shard to pool-config mapping behind a
//! reader-writer lock.

pub mod pool_registry;
pub mod role;
pub mod shard;

pub use pool_registry::{PoolRegistry, ShardMap};
pub use role::Role;
pub use shard::Shard;
