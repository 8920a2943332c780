//! The benchmark selector deciding which candidates run
//!
//! A [`FilterChain`] is built once from the `--include` and `--exclude` options in the order
//! they appeared on the command line. The first [`FilterRule`] matching a candidate name decides
//! if the candidate runs. If no rule matches, the outcome is the opposite of the first rule's
//! mode: A chain starting with `--include` only runs what was explicitly included, a chain
//! starting with `--exclude` runs everything which wasn't explicitly excluded.

use std::fmt::Display;

use regex::Regex;

use crate::error::Error;

/// Whether a matching [`FilterRule`] includes or excludes a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// `--include`
    Include,
    /// `--exclude`
    Exclude,
}

/// A single `--include` or `--exclude` rule
#[derive(Debug, Clone)]
pub struct FilterRule {
    mode: FilterMode,
    regex: Regex,
}

/// The ordered and immutable sequence of [`FilterRule`]s of a benchmark run
#[derive(Debug, Clone, Default)]
pub struct FilterChain(Vec<FilterRule>);

impl FilterMode {
    /// The verdict for a candidate matched by a rule with this mode
    pub fn verdict(self) -> bool {
        self == Self::Include
    }

    /// The command-line option of this mode
    pub fn option(self) -> &'static str {
        match self {
            Self::Include => "--include",
            Self::Exclude => "--exclude",
        }
    }
}

impl FilterRule {
    /// Create a new `FilterRule`
    ///
    /// # Errors
    ///
    /// Returns an [`Error::ConfigError`] if the `pattern` is not a valid regular expression
    pub fn new(mode: FilterMode, pattern: &str) -> Result<Self, Error> {
        let regex = Regex::new(pattern)
            .map_err(|error| Error::ConfigError(pattern.to_owned(), error.to_string()))?;
        Ok(Self { mode, regex })
    }

    /// The pattern as given on the command line
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Return true if the pattern matches anywhere in `name`
    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

impl Display for FilterRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}'", self.mode.option(), self.pattern())
    }
}

impl FilterChain {
    /// Build a `FilterChain` from `(mode, pattern)` pairs keeping their order
    ///
    /// # Errors
    ///
    /// Fails with an [`Error::ConfigError`] on the first invalid pattern
    pub fn new<I, T>(rules: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (FilterMode, T)>,
        T: AsRef<str>,
    {
        rules
            .into_iter()
            .map(|(mode, pattern)| FilterRule::new(mode, pattern.as_ref()))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Return true if the candidate with `name` should run
    pub fn passes(&self, name: &str) -> bool {
        let Some(first) = self.0.first() else {
            return true;
        };

        self.0
            .iter()
            .find(|rule| rule.is_match(name))
            .map_or(!first.mode.verdict(), |rule| rule.mode.verdict())
    }
}

impl Display for FilterChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<none>");
        }

        for (index, rule) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{rule}")?;
        }
        Ok(())
    }
}
