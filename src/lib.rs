//! # pool-registry
//!
//! Concurrency-safe registry of database connection-pool configurations,
//! keyed by role and shard.
//!
//! This crate provides the directory a connection-handling layer consults
//! to find the pool configuration for a (role, shard) pair. A role is the
//! logical purpose of a connection (conventionally `writing` or `reading`);
//! a shard is a named horizontal partition of the data. Pool configs
//! themselves are opaque to the registry: it stores shared handles and
//! never builds, inspects, or tears down the pools they describe.
//!
//! ## Architecture
//!
//! ```text
//! Callers (bootstrap, connection routing, teardown)
//!     │
//!     ├── PoolRegistry<C> (domain/)   role → shard → Arc<C>
//!     │       └── parking_lot::RwLock guarding the two-level map
//!     │
//!     ├── Role, Shard (domain/)       opaque identifier tokens
//!     │
//!     └── RegistryError (error.rs)
//! ```
//!
//! Lookups, listings, and iteration share the lock; `set_pool_config`,
//! `remove_pool_config`, and `remove_role` hold it exclusively. Querying
//! a role the registry has never seen records that role with an empty
//! shard map, so it shows up in [`domain::PoolRegistry::role_names`]
//! afterwards.

pub mod domain;
pub mod error;
