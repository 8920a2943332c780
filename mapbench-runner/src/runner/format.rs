use std::fmt::Display;

use colored::Colorize;

/// The line printed above each section title
pub const SEPARATOR: &str = "-------------------------------------------------------------";

/// The header printed before a suite runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    suite: String,
    operations: usize,
}

/// The title of a benchmark section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionTitle<'a>(pub &'a str);

impl Header {
    /// Create a new `Header` for the `suite` doing `operations` per routine call
    pub fn new<T>(suite: T, operations: usize) -> Self
    where
        T: Into<String>,
    {
        Self {
            suite: suite.into(),
            operations,
        }
    }

    /// Print the `Header` to stdout
    pub fn print(&self) {
        println!("{self}");
    }
}

impl Display for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.suite.green())?;
        if self.operations > 1 {
            write!(
                f,
                " {}",
                format!("({} operations per iteration)", self.operations).dimmed()
            )?;
        }
        Ok(())
    }
}

impl SectionTitle<'_> {
    /// Print the separator, the title and an empty line to stdout
    pub fn print(&self) {
        println!("{self}");
        println!();
    }
}

impl Display for SectionTitle<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{SEPARATOR}")?;
        write!(f, "{}", self.0.bold())
    }
}

/// Format the line of a candidate in a suite
pub fn format_candidate(name: &str) -> String {
    format!("  {}", name.cyan())
}

/// Format the id of a benchmark as it is printed by `--list`
pub fn format_benchmark_id(suite: &str, candidate: &str) -> String {
    format!("{suite}/{candidate}")
}
