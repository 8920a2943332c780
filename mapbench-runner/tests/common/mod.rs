use assert_cmd::assert::Assert;
use assert_cmd::Command;
use mapbench_runner::runner::envs;

pub const RUNNER_BIN: &str = "mapbench-runner";

/// The smallest workload which still runs both sections
pub const SMALL: [&str; 4] = ["--sizes", "10", "--changes", "2"];

/// A `mapbench-runner` invocation without colors and unaffected by the `MAPBENCH_*` variables of
/// the calling environment
pub struct Runner(Command);

impl Runner {
    pub fn new() -> Self {
        let mut command = Command::cargo_bin(RUNNER_BIN).unwrap();
        for var in [
            envs::MAPBENCH_LOG,
            envs::MAPBENCH_TEST,
            envs::MAPBENCH_LIST,
            envs::MAPBENCH_SEED,
            envs::MAPBENCH_SIZES,
            envs::MAPBENCH_CHANGES,
            envs::MAPBENCH_SAMPLE_SIZE,
            envs::MAPBENCH_MEASUREMENT_TIME,
            envs::MAPBENCH_WARM_UP_TIME,
        ] {
            command.env_remove(var);
        }
        command
            .env(envs::MAPBENCH_COLOR, "never")
            .env_remove(envs::CARGO_TERM_COLOR);
        Self(command)
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.0.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.0.env(key, value);
        self
    }

    pub fn run(mut self) -> Assert {
        self.0.assert()
    }
}
