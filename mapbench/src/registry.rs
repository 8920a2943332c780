//! The registry of benchmarked [`Candidate`]s

use crate::container::{
    Container, ImHashMap, ImOrdMap, IndexHashMap, RpdsHashTrieMap, RpdsRedBlackTreeMap,
    StdBTreeMap, StdHashMap,
};

/// All candidates in the order they are benchmarked
pub const CANDIDATES: &[Candidate] = &[
    Candidate::new("std HashMap", boxed::<StdHashMap>),
    Candidate::new("std BTreeMap", boxed::<StdBTreeMap>),
    Candidate::new("indexmap IndexMap", boxed::<IndexHashMap>),
    Candidate::new("im HashMap", boxed::<ImHashMap>),
    Candidate::new("im OrdMap", boxed::<ImOrdMap>),
    Candidate::new("rpds HashTrieMap", boxed::<RpdsHashTrieMap>),
    Candidate::new("rpds RedBlackTreeMap", boxed::<RpdsRedBlackTreeMap>),
];

/// A named container implementation
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    name: &'static str,
    constructor: fn() -> Box<dyn Container>,
}

impl Candidate {
    /// Create a new `Candidate` with the display `name` and a `constructor` of empty containers
    pub const fn new(name: &'static str, constructor: fn() -> Box<dyn Container>) -> Self {
        Self { name, constructor }
    }

    /// The display name which is matched by the `--include` and `--exclude` filters
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Construct a fresh and empty container
    pub fn build(&self) -> Box<dyn Container> {
        (self.constructor)()
    }
}

fn boxed<T>() -> Box<dyn Container>
where
    T: Container + Default + 'static,
{
    Box::<T>::default()
}
