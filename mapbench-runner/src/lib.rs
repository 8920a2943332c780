//! The mapbench-runner library

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(test(attr(warn(unused))))]

pub mod error;
pub mod runner;
pub mod util;
