use std::ffi::OsString;
use std::time::Duration;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ArgMatches, CommandFactory, FromArgMatches, Parser};

use super::envs;
use super::filter::FilterMode;

/// The default problem sizes, the number of keys in each container
pub const DEFAULT_SIZES: [usize; 4] = [10, 100, 1000, 10000];

/// The default number of keys changed per batch
pub const DEFAULT_CHANGES: [usize; 3] = [2, 10, 50];

/// The command line arguments of the `mapbench-runner` binary
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    author,
    version,
    about = "Benchmark map libraries with a remove-then-insert workload on string keys",
    long_about = None,
)]
pub struct CommandLineArgs {
    /// Only run candidates whose name matches this regular expression
    ///
    /// Can be given multiple times and mixed with `--exclude`. The first rule matching a
    /// candidate's name decides. If no rule matches, the candidate is excluded if the first rule
    /// is an `--include` and included if the first rule is an `--exclude`.
    #[arg(long = "include", value_name = "PATTERN", action = ArgAction::Append)]
    pub include: Vec<String>,

    /// Skip candidates whose name matches this regular expression
    ///
    /// See `--include` for how multiple rules are evaluated.
    #[arg(long = "exclude", value_name = "PATTERN", action = ArgAction::Append)]
    pub exclude: Vec<String>,

    /// Just test that the benchmarks work by running every routine twice without measuring
    #[arg(
        long = "test",
        env = envs::MAPBENCH_TEST,
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new(),
    )]
    pub test: bool,

    /// Print the benchmarks which would run and exit
    #[arg(
        long = "list",
        env = envs::MAPBENCH_LIST,
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new(),
    )]
    pub list: bool,

    /// The seed of the random key generator
    #[arg(long = "seed", env = envs::MAPBENCH_SEED, default_value_t = mapbench::workload::DEFAULT_SEED)]
    pub seed: u64,

    /// The comma separated problem sizes (number of keys in each container)
    #[arg(
        long = "sizes",
        env = envs::MAPBENCH_SIZES,
        value_name = "SIZE,...",
        value_delimiter = ',',
        default_values_t = DEFAULT_SIZES,
        value_parser = parse_positive,
    )]
    pub sizes: Vec<usize>,

    /// The comma separated number of keys removed and inserted back in a single batch
    #[arg(
        long = "changes",
        env = envs::MAPBENCH_CHANGES,
        value_name = "N,...",
        value_delimiter = ',',
        default_values_t = DEFAULT_CHANGES,
        value_parser = parse_positive,
    )]
    pub changes: Vec<usize>,

    /// The number of samples criterion collects per benchmark (at least 10)
    #[arg(
        long = "sample-size",
        env = envs::MAPBENCH_SAMPLE_SIZE,
        default_value_t = 100,
        value_parser = parse_sample_size,
    )]
    pub sample_size: usize,

    /// The measurement time per benchmark in seconds
    #[arg(
        long = "measurement-time",
        env = envs::MAPBENCH_MEASUREMENT_TIME,
        value_name = "SECONDS",
        default_value = "5",
        value_parser = parse_seconds,
    )]
    pub measurement_time: Duration,

    /// The warm-up time per benchmark in seconds
    #[arg(
        long = "warm-up-time",
        env = envs::MAPBENCH_WARM_UP_TIME,
        value_name = "SECONDS",
        default_value = "3",
        value_parser = parse_seconds,
    )]
    pub warm_up_time: Duration,
}

impl CommandLineArgs {
    /// Parse the command line of this process and exit with a usage error if parsing fails
    ///
    /// Returns the parsed arguments and the filter rules in command-line order.
    pub fn parse_ordered() -> (Self, Vec<(FilterMode, String)>) {
        Self::try_parse_ordered(std::env::args_os()).unwrap_or_else(|error| error.exit())
    }

    /// Parse `args` (the first argument is the binary name)
    ///
    /// `clap` collects `--include` and `--exclude` into separate vectors. The order in which they
    /// were given is restored from the argument indices, so rules can be freely interleaved.
    pub fn try_parse_ordered<I, T>(
        args: I,
    ) -> Result<(Self, Vec<(FilterMode, String)>), clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command().try_get_matches_from(args)?;
        let args = Self::from_arg_matches(&matches)?;
        let rules = ordered_filter_rules(&matches);
        Ok((args, rules))
    }
}

fn ordered_filter_rules(matches: &ArgMatches) -> Vec<(FilterMode, String)> {
    let mut rules = vec![];
    for (id, mode) in [
        ("include", FilterMode::Include),
        ("exclude", FilterMode::Exclude),
    ] {
        if let (Some(indices), Some(values)) =
            (matches.indices_of(id), matches.get_many::<String>(id))
        {
            rules.extend(
                indices
                    .zip(values)
                    .map(|(index, value)| (index, mode, value.clone())),
            );
        }
    }

    rules.sort_by_key(|(index, ..)| *index);
    rules
        .into_iter()
        .map(|(_, mode, pattern)| (mode, pattern))
        .collect()
}

fn parse_positive(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(0) => Err("The value must be greater than 0".to_owned()),
        Ok(number) => Ok(number),
        Err(error) => Err(error.to_string()),
    }
}

fn parse_sample_size(value: &str) -> Result<usize, String> {
    let size = parse_positive(value)?;
    if size < 10 {
        Err("The sample size must be at least 10".to_owned())
    } else {
        Ok(size)
    }
}

fn parse_seconds(value: &str) -> Result<Duration, String> {
    let seconds = value
        .trim()
        .parse::<f64>()
        .map_err(|error| error.to_string())?;

    if seconds.is_finite() && seconds > 0.0 {
        Duration::try_from_secs_f64(seconds).map_err(|error| error.to_string())
    } else {
        Err("The time must be a positive and finite number of seconds".to_owned())
    }
}
