use std::fmt::Display;
use std::time::Duration;

use colored::Colorize;

use crate::util::format_duration;

/// Counts of all benchmarks of a run and its execution time
///
/// Used to print a final summary after all benchmarks.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BenchmarkSummaries {
    /// The amount of benchmarks which ran (or were listed)
    pub num_run: usize,
    /// The amount of filtered benchmarks
    pub num_filtered: usize,
    /// The execution time of all benchmarks
    pub total_time: Option<Duration>,
}

impl BenchmarkSummaries {
    /// Print the summary to stdout
    pub fn print(&self) {
        println!("{self}");
    }
}

impl Display for BenchmarkSummaries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} benchmarks finished, {} filtered out",
            "Summary:".bold(),
            self.num_run,
            self.num_filtered
        )?;
        if let Some(total_time) = self.total_time {
            write!(f, " in {}", format_duration(total_time))?;
        }
        Ok(())
    }
}
