//! The mapbench library
//!
//! `mapbench` contains the building blocks of the `mapbench-runner` binary: the [`Container`]
//! capability trait with one adapter per benchmarked map library, the registry of
//! [`Candidate`]s and the key [`Workload`] driving the remove-then-insert cycles.
//!
//! The data structures themselves are not implemented here. Every adapter is a thin wrapper
//! around a third-party (or standard library) map type.
//!
//! # Examples
//!
//! ```rust
//! use mapbench::workload::{KeyGenerator, Workload};
//! use mapbench::CANDIDATES;
//!
//! let mut generator = KeyGenerator::new(42);
//! let workload = Workload::generate(100, &mut generator);
//!
//! for candidate in CANDIDATES {
//!     let mut container = candidate.build();
//!     workload.populate(container.as_mut());
//!
//!     let mut cycle = workload.cycle();
//!     assert_eq!(cycle.remove_insert(container.as_mut()), 1);
//!     assert_eq!(cycle.remove_insert_batch(container.as_mut(), 10), 10);
//!     assert_eq!(container.len(), 100);
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(test(attr(warn(unused))))]

pub mod container;
pub mod registry;
pub mod workload;

pub use container::{Container, Value};
pub use registry::{Candidate, CANDIDATES};
pub use workload::{Key, KeyCycle, KeyGenerator, Workload};
