use predicates::prelude::*;
use rstest::rstest;

use crate::common::Runner;

#[test]
fn test_invalid_include_pattern() {
    Runner::new()
        .args(&["--list", "--include", "["])
        .run()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with(
            "mapbench_runner: Error: Invalid filter pattern '[': ",
        ));
}

#[test]
fn test_invalid_exclude_pattern_after_valid_include() {
    Runner::new()
        .args(&["--list", "--include", "std", "--exclude", "(im"])
        .run()
        .code(1)
        .stderr(predicate::str::contains("Invalid filter pattern '(im'"));
}

#[rstest]
#[case::zero_size(&["--sizes", "0"])]
#[case::zero_changes(&["--changes", "0"])]
#[case::sample_size_too_small(&["--sample-size", "5"])]
#[case::measurement_time_too_large(&["--measurement-time", "1e30"])]
#[case::unknown_argument(&["--does-not-exist"])]
fn test_usage_errors(#[case] args: &[&str]) {
    Runner::new()
        .args(args)
        .run()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[rstest]
#[case::invalid_size("MAPBENCH_SIZES", "10,zero")]
#[case::warm_up_time_too_large("MAPBENCH_WARM_UP_TIME", "1e30")]
fn test_usage_error_from_environment(#[case] var: &str, #[case] value: &str) {
    Runner::new()
        .env(var, value)
        .args(&["--list"])
        .run()
        .code(2)
        .stderr(predicate::str::contains("panicked").not());
}
