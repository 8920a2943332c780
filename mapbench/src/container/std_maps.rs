use std::collections::{BTreeMap, HashMap};

use super::{Container, Value};
use crate::workload::Key;

/// Adapter for [`std::collections::HashMap`]
#[derive(Debug, Default)]
pub struct StdHashMap(HashMap<Key, Value>);

/// Adapter for [`std::collections::BTreeMap`]
#[derive(Debug, Default)]
pub struct StdBTreeMap(BTreeMap<Key, Value>);

impl Container for StdHashMap {
    fn insert(&mut self, key: Key, value: Value) {
        self.0.insert(key, value);
    }

    fn remove(&mut self, key: &str) -> bool {
        self.0.remove(key).is_some()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

impl Container for StdBTreeMap {
    fn insert(&mut self, key: Key, value: Value) {
        self.0.insert(key, value);
    }

    fn remove(&mut self, key: &str) -> bool {
        self.0.remove(key).is_some()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}
