use super::{Container, Value};
use crate::workload::Key;

/// Adapter for the persistent [`im::HashMap`]
///
/// Every single operation derives a new version with `update` and `without`. Batches mutate one
/// version in place.
#[derive(Debug, Default, Clone)]
pub struct ImHashMap(im::HashMap<Key, Value>);

/// Adapter for the persistent [`im::OrdMap`]
///
/// Same versioning behaviour as [`ImHashMap`].
#[derive(Debug, Default, Clone)]
pub struct ImOrdMap(im::OrdMap<Key, Value>);

impl Container for ImHashMap {
    fn insert(&mut self, key: Key, value: Value) {
        self.0 = self.0.update(key, value);
    }

    fn remove(&mut self, key: &str) -> bool {
        let next = self.0.without(key);
        let removed = next.len() < self.0.len();
        self.0 = next;
        removed
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn replace_batch(&mut self, keys: &mut dyn Iterator<Item = Key>, value: Value) -> usize {
        let mut found = 0;
        for key in keys {
            if self.0.remove(&*key).is_some() {
                found += 1;
            }
            self.0.insert(key, value);
        }
        found
    }
}

impl Container for ImOrdMap {
    fn insert(&mut self, key: Key, value: Value) {
        self.0 = self.0.update(key, value);
    }

    fn remove(&mut self, key: &str) -> bool {
        let next = self.0.without(key);
        let removed = next.len() < self.0.len();
        self.0 = next;
        removed
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn replace_batch(&mut self, keys: &mut dyn Iterator<Item = Key>, value: Value) -> usize {
        let mut found = 0;
        for key in keys {
            if self.0.remove(&*key).is_some() {
                found += 1;
            }
            self.0.insert(key, value);
        }
        found
    }
}
