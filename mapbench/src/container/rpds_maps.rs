use rpds::{HashTrieMap, RedBlackTreeMap};

use super::{Container, Value};
use crate::workload::Key;

/// Adapter for the persistent [`rpds::HashTrieMap`]
///
/// Single operations derive a new version of the map, batches use the `*_mut` methods on the
/// current version.
pub struct RpdsHashTrieMap(HashTrieMap<Key, Value>);

/// Adapter for the persistent [`rpds::RedBlackTreeMap`]
pub struct RpdsRedBlackTreeMap(RedBlackTreeMap<Key, Value>);

impl Default for RpdsHashTrieMap {
    fn default() -> Self {
        Self(HashTrieMap::new())
    }
}

impl Default for RpdsRedBlackTreeMap {
    fn default() -> Self {
        Self(RedBlackTreeMap::new())
    }
}

impl Container for RpdsHashTrieMap {
    fn insert(&mut self, key: Key, value: Value) {
        self.0 = self.0.insert(key, value);
    }

    fn remove(&mut self, key: &str) -> bool {
        let next = self.0.remove(key);
        let removed = next.size() < self.0.size();
        self.0 = next;
        removed
    }

    fn len(&self) -> usize {
        self.0.size()
    }

    fn replace_batch(&mut self, keys: &mut dyn Iterator<Item = Key>, value: Value) -> usize {
        let mut found = 0;
        for key in keys {
            if self.0.remove_mut(&*key) {
                found += 1;
            }
            self.0.insert_mut(key, value);
        }
        found
    }
}

impl Container for RpdsRedBlackTreeMap {
    fn insert(&mut self, key: Key, value: Value) {
        self.0 = self.0.insert(key, value);
    }

    fn remove(&mut self, key: &str) -> bool {
        let next = self.0.remove(key);
        let removed = next.size() < self.0.size();
        self.0 = next;
        removed
    }

    fn len(&self) -> usize {
        self.0.size()
    }

    fn replace_batch(&mut self, keys: &mut dyn Iterator<Item = Key>, value: Value) -> usize {
        let mut found = 0;
        for key in keys {
            if self.0.remove_mut(&*key) {
                found += 1;
            }
            self.0.insert_mut(key, value);
        }
        found
    }
}
