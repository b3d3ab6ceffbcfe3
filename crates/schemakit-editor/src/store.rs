//! Handle-keyed entity storage.
//!
//! Handles are allocated from a monotonically increasing counter and never
//! reused, so iteration in handle order is insertion order. The counter is
//! part of the store, which means a cloned store (an undo snapshot) hands
//! out the same handles after a restore.

use crate::model::{ComponentId, WireId};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

/// Key types usable in an [`EntityStore`].
pub trait EntityKey: Copy + Ord + fmt::Debug {
    fn from_raw(raw: u64) -> Self;
}

impl EntityKey for ComponentId {
    fn from_raw(raw: u64) -> Self {
        ComponentId(raw)
    }
}

impl EntityKey for WireId {
    fn from_raw(raw: u64) -> Self {
        WireId(raw)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntityStore<K: EntityKey, T> {
    items: BTreeMap<K, T>,
    next_id: u64,
}

impl<K: EntityKey, T> Default for EntityStore<K, T> {
    fn default() -> Self {
        Self {
            items: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<K: EntityKey, T> EntityStore<K, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `item` under a fresh handle.
    pub fn insert(&mut self, item: T) -> K {
        let id = K::from_raw(self.next_id);
        self.next_id += 1;
        self.items.insert(id, item);
        id
    }

    pub fn get(&self, id: K) -> Option<&T> {
        self.items.get(&id)
    }

    pub fn get_mut(&mut self, id: K) -> Option<&mut T> {
        self.items.get_mut(&id)
    }

    pub fn remove(&mut self, id: K) -> Option<T> {
        self.items.remove(&id)
    }

    pub fn contains(&self, id: K) -> bool {
        self.items.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &T)> + '_ {
        self.items.iter().map(|(k, v)| (*k, v))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (K, &mut T)> + '_ {
        self.items.iter_mut().map(|(k, v)| (*k, v))
    }

    pub fn ids(&self) -> impl Iterator<Item = K> + '_ {
        self.items.keys().copied()
    }

    pub fn values(&self) -> btree_map::Values<'_, K, T> {
        self.items.values()
    }

    pub fn values_mut(&mut self) -> btree_map::ValuesMut<'_, K, T> {
        self.items.values_mut()
    }
}
