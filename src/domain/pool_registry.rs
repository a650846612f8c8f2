//! Concurrent storage of pool configurations addressed by role and shard.
//!
//! [`PoolRegistry`] keeps caller-supplied pool config handles in a
//! two-level map `role → shard → config` behind a single
//! [`parking_lot::RwLock`]. Readers share the lock; every mutation takes
//! it exclusively, so a reader never observes a half-applied update.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use super::{Role, Shard};
use crate::error::RegistryError;

/// Inner mapping of a single role: shard to pool config handle.
pub type ShardMap<C> = HashMap<Shard, Arc<C>>;

/// Concurrency-safe directory of pool configurations for (role, shard)
/// pairs.
///
/// The config type `C` is opaque: the registry stores `Arc<C>` handles,
/// never inspects them, and requires no trait bounds on `C`. Callers
/// own the configs' lifecycle; removing an entry only drops the
/// registry's handle, it does not tear down the pool it describes.
///
/// # Concurrency
///
/// - Lookups, listings, and iteration share the lock and never block
///   each other.
/// - `set_pool_config`, `remove_pool_config`, and `remove_role` hold
///   the lock exclusively.
/// - Addressing a role the registry has never seen records that role
///   with an empty shard map (briefly upgrading to the write lock), so
///   it appears in [`role_names`](Self::role_names) afterwards.
pub struct PoolRegistry<C> {
    roles: RwLock<HashMap<Role, ShardMap<C>>>,
}

impl<C> PoolRegistry<C> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            roles: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the distinct shard names appearing under any role.
    ///
    /// The result is deduplicated across roles and carries no ordering
    /// guarantee.
    pub fn shard_names(&self) -> Vec<Shard> {
        let map = self.roles.read();
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for shard_map in map.values() {
            for shard in shard_map.keys() {
                if seen.insert(shard) {
                    names.push(shard.clone());
                }
            }
        }
        names
    }

    /// Returns every role known to the registry, including roles whose
    /// shard map is empty.
    pub fn role_names(&self) -> Vec<Role> {
        self.roles.read().keys().cloned().collect()
    }

    /// Returns the pool configs registered under `role`, or under every
    /// role when `role` is `None`.
    ///
    /// An unknown role yields an empty vector, never an error, and is
    /// recorded in the registry as a side effect.
    pub fn pool_configs(&self, role: Option<&Role>) -> Vec<Arc<C>> {
        match role {
            Some(role) => {
                let map = self.roles.read();
                if let Some(shard_map) = map.get(role) {
                    return shard_map.values().cloned().collect();
                }
                drop(map);
                let mut map = self.roles.write();
                map.entry(role.clone())
                    .or_default()
                    .values()
                    .cloned()
                    .collect()
            }
            None => {
                let map = self.roles.read();
                map.values()
                    .flat_map(|shard_map| shard_map.values().cloned())
                    .collect()
            }
        }
    }

    /// Invokes `visitor` once per pool config under `role`, or under
    /// every role when `role` is `None`. Visiting order is unspecified.
    ///
    /// The registry lock is held for the whole iteration: the visitor
    /// must not call back into the registry (a mutation would deadlock)
    /// and should return quickly to avoid stalling writers.
    pub fn each_pool_config<F>(&self, role: Option<&Role>, mut visitor: F)
    where
        F: FnMut(&Arc<C>),
    {
        match role {
            Some(role) => {
                let map = self.roles.read();
                if let Some(shard_map) = map.get(role) {
                    for config in shard_map.values() {
                        visitor(config);
                    }
                    return;
                }
                drop(map);
                let mut map = self.roles.write();
                for config in map.entry(role.clone()).or_default().values() {
                    visitor(config);
                }
            }
            None => {
                let map = self.roles.read();
                for shard_map in map.values() {
                    for config in shard_map.values() {
                        visitor(config);
                    }
                }
            }
        }
    }

    /// Returns the pool config stored for the (role, shard) pair, or
    /// `None` if no such entry exists.
    ///
    /// A miss is a normal outcome, not an error. An unknown role is
    /// recorded in the registry as a side effect.
    pub fn get_pool_config(&self, role: &Role, shard: &Shard) -> Option<Arc<C>> {
        let map = self.roles.read();
        if let Some(shard_map) = map.get(role) {
            return shard_map.get(shard).cloned();
        }
        drop(map);
        let mut map = self.roles.write();
        map.entry(role.clone()).or_default().get(shard).cloned()
    }

    /// Inserts or overwrites the pool config for the (role, shard)
    /// pair. A later set wins over an earlier one; the replaced handle
    /// is dropped by the registry but not torn down.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::MissingPoolConfig`] when `config` is
    /// `None`. Nothing is mutated in that case; in particular the role
    /// does not appear in [`role_names`](Self::role_names) afterwards.
    pub fn set_pool_config(
        &self,
        role: Role,
        shard: Shard,
        config: Option<Arc<C>>,
    ) -> Result<(), RegistryError> {
        let Some(config) = config else {
            return Err(RegistryError::MissingPoolConfig { role, shard });
        };
        let mut map = self.roles.write();
        map.entry(role.clone())
            .or_default()
            .insert(shard.clone(), config);
        drop(map);
        tracing::debug!(%role, %shard, "pool config registered");
        Ok(())
    }

    /// Removes the (role, shard) entry, returning the removed handle or
    /// `None` if none existed. Removing the same pair twice is safe;
    /// the second call returns `None`.
    ///
    /// An unknown role is recorded in the registry as a side effect.
    pub fn remove_pool_config(&self, role: &Role, shard: &Shard) -> Option<Arc<C>> {
        let mut map = self.roles.write();
        let removed = map.entry(role.clone()).or_default().remove(shard);
        drop(map);
        if removed.is_some() {
            tracing::debug!(%role, %shard, "pool config removed");
        }
        removed
    }

    /// Removes `role` and every shard entry under it, returning the
    /// removed shard map or `None` if the role was unknown.
    pub fn remove_role(&self, role: &Role) -> Option<ShardMap<C>> {
        let removed = self.roles.write().remove(role);
        if let Some(shard_map) = &removed {
            tracing::debug!(%role, entries = shard_map.len(), "role removed");
        }
        removed
    }

    /// Returns the total number of pool configs across all roles.
    /// Roles holding an empty shard map contribute nothing.
    pub fn len(&self) -> usize {
        self.roles.read().values().map(HashMap::len).sum()
    }

    /// Returns `true` if no pool config is registered under any role.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<C> Default for PoolRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

// Counts only: `C` carries no `Debug` bound.
impl<C> fmt::Debug for PoolRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.roles.try_read() {
            Some(map) => f
                .debug_struct("PoolRegistry")
                .field("roles", &map.len())
                .field("pool_configs", &map.values().map(HashMap::len).sum::<usize>())
                .finish(),
            None => f.debug_struct("PoolRegistry").finish_non_exhaustive(),
        }
    }
}
