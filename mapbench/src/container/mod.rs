//! The [`Container`] capability trait and its adapters
//!
//! Each benchmarked map library gets a small adapter implementing [`Container`]. Mutable
//! containers map the operations directly onto the library calls. Persistent containers derive a
//! new version of the map for every single operation and only mutate a version in place inside
//! [`Container::replace_batch`].

mod im_maps;
mod index_map;
mod rpds_maps;
mod std_maps;

pub use im_maps::{ImHashMap, ImOrdMap};
pub use index_map::IndexHashMap;
pub use rpds_maps::{RpdsHashTrieMap, RpdsRedBlackTreeMap};
pub use std_maps::{StdBTreeMap, StdHashMap};

use crate::workload::Key;

/// The value stored with every key
pub type Value = u64;

/// The operations a benchmarked map has to provide
pub trait Container {
    /// Insert `key` with `value`, overwriting any previous value
    fn insert(&mut self, key: Key, value: Value);

    /// Remove `key` and return true if it was present
    fn remove(&mut self, key: &str) -> bool;

    /// The number of entries
    fn len(&self) -> usize;

    /// Return true if there are no entries
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove each key of `keys` and insert it back with `value`
    ///
    /// Returns the number of removals which found their key. Persistent containers override this
    /// method to apply the whole batch to a single version of the map.
    fn replace_batch(&mut self, keys: &mut dyn Iterator<Item = Key>, value: Value) -> usize {
        let mut found = 0;
        for key in keys {
            if self.remove(&key) {
                found += 1;
            }
            self.insert(key, value);
        }
        found
    }
}
