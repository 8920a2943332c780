use indexmap::IndexMap;

use super::{Container, Value};
use crate::workload::Key;

/// Adapter for [`indexmap::IndexMap`]
///
/// Removal uses `swap_remove`, which is `O(1)` but perturbs the insertion order. The order is
/// irrelevant for this workload and `shift_remove` would make every removal `O(n)`.
#[derive(Debug, Default)]
pub struct IndexHashMap(IndexMap<Key, Value>);

impl Container for IndexHashMap {
    fn insert(&mut self, key: Key, value: Value) {
        self.0.insert(key, value);
    }

    fn remove(&mut self, key: &str) -> bool {
        self.0.swap_remove(key).is_some()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}
