use predicates::prelude::*;

use crate::common::{Runner, SMALL};

#[test]
fn test_test_mode_runs_all_candidates() {
    Runner::new()
        .args(&["--test", "--sizes", "10,100", "--changes", "2,10"])
        .run()
        .success()
        .stdout(
            predicate::str::contains("Map, remove key then add it back")
                .and(predicate::str::contains(
                    "Map batch, for N random keys, remove then add it back",
                ))
                .and(predicate::str::contains("Map size: 100, N: 10 (10 operations per iteration)"))
                .and(predicate::str::contains("  rpds RedBlackTreeMap"))
                .and(predicate::str::contains("  indexmap IndexMap"))
                .and(predicate::str::contains("Summary: 42 benchmarks finished, 0 filtered out in")),
        )
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_test_mode_prints_system_information() {
    Runner::new()
        .args(&["--test", "--include", "^im"])
        .args(&SMALL)
        .run()
        .success()
        .stdout(
            predicate::str::contains("CPU      ")
                .and(predicate::str::contains("Rust     "))
                .and(predicate::str::contains(concat!(
                    "Runner   mapbench-runner ",
                    env!("CARGO_PKG_VERSION")
                )))
                .and(predicate::str::contains("Library  im "))
                .and(predicate::str::contains("Library  criterion "))
                .and(predicate::str::contains("Summary: 4 benchmarks finished, 10 filtered out")),
        );
}

#[test]
fn test_test_mode_with_seed() {
    Runner::new()
        .args(&["--test", "--seed", "42", "--exclude", "."])
        .args(&SMALL)
        .run()
        .success()
        .stdout(predicate::str::contains(
            "Summary: 0 benchmarks finished, 14 filtered out",
        ));
}
