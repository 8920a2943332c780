pub mod args;
pub mod filter;
pub mod format;
pub mod meta;
pub mod section;
pub mod suite;
pub mod summary;

use std::time::Instant;

use anyhow::Result;
use criterion::Criterion;
use log::{debug, info};
use mapbench::{Candidate, KeyGenerator, Workload, CANDIDATES};

use self::args::CommandLineArgs;
use self::filter::FilterChain;
use self::format::{format_benchmark_id, Header, SectionTitle};
use self::meta::Metadata;
use self::section::{Section, SuitePlan};
use self::suite::{CriterionSuite, Routine, Suite, TestSuite};
use self::summary::BenchmarkSummaries;

pub mod envs {
    pub const MAPBENCH_COLOR: &str = "MAPBENCH_COLOR";
    pub const MAPBENCH_LOG: &str = "MAPBENCH_LOG";

    pub const MAPBENCH_TEST: &str = "MAPBENCH_TEST";
    pub const MAPBENCH_LIST: &str = "MAPBENCH_LIST";
    pub const MAPBENCH_SEED: &str = "MAPBENCH_SEED";
    pub const MAPBENCH_SIZES: &str = "MAPBENCH_SIZES";
    pub const MAPBENCH_CHANGES: &str = "MAPBENCH_CHANGES";
    pub const MAPBENCH_SAMPLE_SIZE: &str = "MAPBENCH_SAMPLE_SIZE";
    pub const MAPBENCH_MEASUREMENT_TIME: &str = "MAPBENCH_MEASUREMENT_TIME";
    pub const MAPBENCH_WARM_UP_TIME: &str = "MAPBENCH_WARM_UP_TIME";

    pub const CARGO_TERM_COLOR: &str = "CARGO_TERM_COLOR";
}

/// How the benchmarks are executed
enum Mode {
    /// Measure with `criterion`
    Bench(Box<Criterion>),
    /// Call every routine twice without measuring
    Test,
    /// Only print the benchmark ids
    List,
}

/// The configuration of a single run of the `mapbench-runner`
#[derive(Debug)]
pub struct Config {
    args: CommandLineArgs,
    filter: FilterChain,
}

impl Config {
    /// Create a new `Config` from the parsed `args` and the ordered filter `rules`
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::ConfigError`] if one of the filter patterns is not a valid
    /// regular expression
    pub fn new<I, T>(args: CommandLineArgs, rules: I) -> Result<Self>
    where
        I: IntoIterator<Item = (filter::FilterMode, T)>,
        T: AsRef<str>,
    {
        let filter = FilterChain::new(rules)?;
        debug!("Filter: {filter}");
        Ok(Self { args, filter })
    }

    /// Return true if the candidate with this `name` is selected to run
    pub fn is_selected(&self, name: &str) -> bool {
        self.filter.passes(name)
    }

    fn mode(&self) -> Mode {
        if self.args.list {
            Mode::List
        } else if self.args.test {
            Mode::Test
        } else {
            Mode::Bench(Box::new(
                Criterion::default()
                    .sample_size(self.args.sample_size)
                    .measurement_time(self.args.measurement_time)
                    .warm_up_time(self.args.warm_up_time)
                    .without_plots(),
            ))
        }
    }
}

fn routine(candidate: &Candidate, workload: &Workload, plan: &SuitePlan) -> Routine {
    let mut container = candidate.build();
    workload.populate(container.as_mut());
    debug!(
        "Populated '{}/{}' with {} keys",
        plan.name,
        candidate.name(),
        container.len()
    );
    let mut cycle = workload.cycle();

    match plan.changes {
        Some(count) => Box::new(move || cycle.remove_insert_batch(container.as_mut(), count)),
        None => Box::new(move || cycle.remove_insert(container.as_mut())),
    }
}

/// Run all benchmark sections with the given `config`
///
/// # Errors
///
/// Returns an error if a routine fails in `--test` mode
pub fn run_with_config(config: &Config) -> Result<BenchmarkSummaries> {
    let mut mode = config.mode();
    let mut summaries = BenchmarkSummaries::default();
    let mut generator = KeyGenerator::new(config.args.seed);
    let start = Instant::now();

    if !matches!(mode, Mode::List) {
        Metadata::new().print();
        println!();
    }

    for section in Section::ALL {
        if !matches!(mode, Mode::List) {
            SectionTitle(section.title()).print();
        }

        for plan in section.suites(&config.args.sizes, &config.args.changes) {
            let workload = if matches!(mode, Mode::List) {
                None
            } else {
                Header::new(plan.name.as_str(), plan.operations()).print();
                Some(Workload::generate(plan.size, &mut generator))
            };

            let mut suite: Option<Box<dyn Suite + '_>> = match &mut mode {
                Mode::Bench(criterion) => Some(Box::new(CriterionSuite::new(
                    criterion.as_mut(),
                    plan.name.as_str(),
                    plan.operations(),
                ))),
                Mode::Test => Some(Box::new(TestSuite::new(
                    plan.name.as_str(),
                    plan.operations(),
                ))),
                Mode::List => None,
            };

            for candidate in CANDIDATES {
                if !config.is_selected(candidate.name()) {
                    debug!("Filtered out: '{}/{}'", plan.name, candidate.name());
                    summaries.num_filtered += 1;
                    continue;
                }

                summaries.num_run += 1;
                match (suite.as_mut(), workload.as_ref()) {
                    (Some(suite), Some(workload)) => {
                        suite.add(candidate.name(), routine(candidate, workload, &plan));
                    }
                    _ => println!("{}", format_benchmark_id(&plan.name, candidate.name())),
                }
            }

            if let Some(mut suite) = suite {
                suite.run()?;
                println!();
            }
        }
    }

    if let Mode::Bench(criterion) = mode {
        criterion.final_summary();
    }

    if !config.args.list {
        summaries.total_time = Some(start.elapsed());
    }
    info!("Finished {} benchmarks", summaries.num_run);
    Ok(summaries)
}

/// The main entry point of the `mapbench-runner`
///
/// # Errors
///
/// Returns an error if the filter patterns are invalid or a benchmark fails
pub fn run() -> Result<()> {
    let (args, rules) = CommandLineArgs::parse_ordered();
    let config = Config::new(args, rules)?;

    run_with_config(&config)?.print();
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::error::Error;

    fn config(args: &[&str]) -> Result<Config> {
        let (args, rules) = CommandLineArgs::try_parse_ordered(
            std::iter::once("mapbench-runner").chain(args.iter().copied()),
        )?;
        Config::new(args, rules)
    }

    #[test]
    fn test_config_when_invalid_pattern() {
        let error = config(&["--include", "["]).unwrap_err();

        assert!(matches!(
            error.downcast_ref::<Error>(),
            Some(Error::ConfigError(pattern, _)) if pattern == "["
        ));
    }

    #[rstest]
    #[case::no_rules(&[], "im HashMap", true)]
    #[case::included(&["--include", "^std"], "std BTreeMap", true)]
    #[case::not_included(&["--include", "^std"], "im HashMap", false)]
    #[case::excluded(&["--exclude", "rpds"], "rpds HashTrieMap", false)]
    #[case::first_rule_wins(
        &["--exclude", "OrdMap", "--include", "im"],
        "im OrdMap",
        false
    )]
    fn test_config_is_selected(#[case] args: &[&str], #[case] name: &str, #[case] expected: bool) {
        assert_eq!(config(args).unwrap().is_selected(name), expected);
    }

    #[test]
    fn test_run_with_config_in_test_mode() {
        let config = config(&["--test", "--sizes", "10", "--changes", "2,3", "--exclude", "^im"])
            .unwrap();

        let summaries = run_with_config(&config).unwrap();

        // 1 suite in the first section and 2 in the second one
        assert_eq!(summaries.num_run, 3 * 5);
        assert_eq!(summaries.num_filtered, 3 * 2);
        assert!(summaries.total_time.is_some());
    }

    #[test]
    fn test_run_with_config_in_list_mode() {
        let config = config(&["--list", "--sizes", "10,100", "--include", "std HashMap"]).unwrap();

        let summaries = run_with_config(&config).unwrap();

        assert_eq!(summaries.num_run, 2 + 2 * 3);
        assert_eq!(summaries.num_filtered, (2 + 2 * 3) * (CANDIDATES.len() - 1));
        assert_eq!(summaries.total_time, None);
    }
}
