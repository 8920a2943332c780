//! Key generation and the remove-then-insert workload
//!
//! Keys are 12 characters of the standard base64 alphabet, the same shape as the base64 text of 9
//! random bytes. They are generated by a seeded [`StdRng`], so two runs with the same seed and the
//! same problem sizes benchmark exactly the same keys.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::container::{Container, Value};

/// A shared and cheaply clonable key
pub type Key = Arc<str>;

/// The length of every generated key
pub const KEY_LENGTH: usize = 12;

/// The value inserted with every key
pub const VALUE: Value = 1;

/// The seed used if no other seed was given
pub const DEFAULT_SEED: u64 = 0x6d61_7062_656e_6368;

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// A deterministic generator of random keys
#[derive(Debug, Clone)]
pub struct KeyGenerator {
    rng: StdRng,
}

/// The initial keys of a container for a single problem size
#[derive(Debug, Clone)]
pub struct Workload {
    keys: Arc<[Key]>,
}

/// An endless cursor over the keys of a [`Workload`]
///
/// The cursor starts at the first key and wraps around to it after the last key.
#[derive(Debug, Clone)]
pub struct KeyCycle {
    keys: Arc<[Key]>,
    position: usize,
}

impl KeyGenerator {
    /// Create a new `KeyGenerator` from `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate the next key
    pub fn key(&mut self) -> Key {
        (0..KEY_LENGTH)
            .map(|_| char::from(ALPHABET[self.rng.gen_range(0..ALPHABET.len())]))
            .collect::<String>()
            .into()
    }

    /// Generate the next `count` keys
    pub fn keys(&mut self, count: usize) -> Vec<Key> {
        (0..count).map(|_| self.key()).collect()
    }
}

impl Default for KeyGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Workload {
    /// Create a new `Workload` from the initial `keys`
    ///
    /// # Panics
    ///
    /// If `keys` is empty. The command-line only accepts positive problem sizes.
    pub fn new(keys: Vec<Key>) -> Self {
        assert!(!keys.is_empty(), "A workload needs at least one key");
        Self { keys: keys.into() }
    }

    /// Create a new `Workload` with `size` keys taken from the `generator`
    pub fn generate(size: usize, generator: &mut KeyGenerator) -> Self {
        Self::new(generator.keys(size))
    }

    /// Insert all initial keys into the `container`
    pub fn populate(&self, container: &mut dyn Container) {
        for key in self.keys.iter() {
            container.insert(Arc::clone(key), VALUE);
        }
    }

    /// Return a new [`KeyCycle`] starting at the first key
    pub fn cycle(&self) -> KeyCycle {
        KeyCycle {
            keys: Arc::clone(&self.keys),
            position: 0,
        }
    }
}

impl KeyCycle {
    fn advance(&mut self) -> Key {
        let key = Arc::clone(&self.keys[self.position]);
        self.position += 1;
        if self.position == self.keys.len() {
            self.position = 0;
        }
        key
    }

    /// The index of the key returned next
    pub fn position(&self) -> usize {
        self.position
    }

    /// Remove the next key from the `container` and insert it back
    ///
    /// Returns `1` if the removal found the key, `0` otherwise.
    pub fn remove_insert(&mut self, container: &mut dyn Container) -> usize {
        let key = self.advance();
        let found = usize::from(container.remove(&key));
        container.insert(key, VALUE);
        found
    }

    /// Remove the next `count` keys from the `container` and insert them back as a single batch
    ///
    /// Returns the number of removals which found their key.
    pub fn remove_insert_batch(&mut self, container: &mut dyn Container, count: usize) -> usize {
        container.replace_batch(&mut self.by_ref().take(count), VALUE)
    }
}

impl Iterator for KeyCycle {
    type Item = Key;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.advance())
    }
}
