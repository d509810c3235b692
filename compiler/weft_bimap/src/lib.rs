//! Thread-safe bidirectional map.
//!
//! A [`BiMap`] keeps two hash tables, key→value and value→key, behind one
//! `RwLock`. Every live pair appears in both tables, so keys are unique,
//! values are unique, and lookups are O(1) from either side.
//!
//! Readers share the lock; writers hold it exclusively, so no caller ever
//! observes one table updated without the other.

use std::hash::Hash;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

struct Tables<K, V> {
    forward: FxHashMap<K, V>,
    backward: FxHashMap<V, K>,
}

/// Bidirectional one-to-one map.
pub struct BiMap<K, V> {
    tables: RwLock<Tables<K, V>>,
}

impl<K, V> BiMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        BiMap {
            tables: RwLock::new(Tables {
                forward: FxHashMap::default(),
                backward: FxHashMap::default(),
            }),
        }
    }

    /// Insert without overwriting.
    ///
    /// Returns `false`, leaving the map untouched, if `key` is already a key
    /// or `value` is already a value.
    pub fn insert(&self, key: K, value: V) -> bool {
        let mut guard = self.tables.write();
        if guard.forward.contains_key(&key) || guard.backward.contains_key(&value) {
            return false;
        }
        guard.forward.insert(key.clone(), value.clone());
        guard.backward.insert(value, key);
        true
    }

    /// Insert, evicting whatever `key` and `value` were bound to.
    ///
    /// Returns `false` without mutating if the identical pair is already
    /// present. Otherwise the stale partner of `key` and the stale partner
    /// of `value` are removed before the new pair goes in.
    pub fn upsert(&self, key: K, value: V) -> bool {
        let mut guard = self.tables.write();
        let tables = &mut *guard;

        if tables.forward.get(&key) == Some(&value) {
            return false;
        }
        if let Some(old_value) = tables.forward.remove(&key) {
            tables.backward.remove(&old_value);
        }
        if let Some(old_key) = tables.backward.remove(&value) {
            tables.forward.remove(&old_key);
        }
        tables.forward.insert(key.clone(), value.clone());
        tables.backward.insert(value, key);
        true
    }

    /// Remove the pair whose key is `key`. Returns `false` if absent.
    pub fn remove_by_key(&self, key: &K) -> bool {
        let mut guard = self.tables.write();
        let tables = &mut *guard;
        match tables.forward.remove(key) {
            Some(value) => {
                tables.backward.remove(&value);
                true
            }
            None => false,
        }
    }

    /// Remove the pair whose value is `value`. Returns `false` if absent.
    pub fn remove_by_value(&self, value: &V) -> bool {
        let mut guard = self.tables.write();
        let tables = &mut *guard;
        match tables.backward.remove(value) {
            Some(key) => {
                tables.forward.remove(&key);
                true
            }
            None => false,
        }
    }

    pub fn find_by_key(&self, key: &K) -> Option<V> {
        self.tables.read().forward.get(key).cloned()
    }

    pub fn find_by_value(&self, value: &V) -> Option<K> {
        self.tables.read().backward.get(value).cloned()
    }

    /// Number of live pairs.
    pub fn len(&self) -> usize {
        self.tables.read().forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of every pair, in unspecified order.
    pub fn snapshot(&self) -> Vec<(K, V)> {
        self.tables
            .read()
            .forward
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl<K, V> Default for BiMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> std::fmt::Debug for BiMap<K, V>
where
    K: std::fmt::Debug,
    V: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.tables.read().forward.iter()).finish()
    }
}
