//! The module containing the crate main [`Error`] type

use std::fmt::Display;

/// The main mapbench error type
#[derive(Debug, PartialEq, Clone, Eq)]
pub enum Error {
    /// A benchmark routine failed its sanity check while running with `--test`
    ///
    /// `BenchmarkError(suite, candidate, message)`
    BenchmarkError(String, String, String),
    /// An `--include` or `--exclude` pattern is not a valid regular expression
    ///
    /// `ConfigError(pattern, message)`
    ConfigError(String, String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BenchmarkError(suite, candidate, message) => {
                write!(f, "Error in benchmark '{suite}/{candidate}': {message}")
            }
            Self::ConfigError(pattern, message) => {
                write!(f, "Invalid filter pattern '{pattern}': {message}")
            }
        }
    }
}

impl std::error::Error for Error {}
