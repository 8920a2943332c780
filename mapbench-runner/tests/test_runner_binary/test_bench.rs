use predicates::prelude::*;

use crate::common::{Runner, SMALL};

#[test]
fn test_bench_measures_with_criterion() {
    Runner::new()
        .env("CRITERION_HOME", env!("CARGO_TARGET_TMPDIR"))
        .args(&[
            "--include",
            "^std HashMap$",
            "--sample-size",
            "10",
            "--measurement-time",
            "0.01",
            "--warm-up-time",
            "0.01",
        ])
        .args(&SMALL)
        .run()
        .success()
        .stdout(
            predicate::str::contains("Map size: 10/std HashMap")
                .and(predicate::str::contains("Map size: 10, N: 2/std HashMap"))
                .and(predicate::str::contains("Map size: 10, N: 2 (2 operations per iteration)"))
                .and(predicate::str::contains("time:"))
                .and(predicate::str::contains("thrpt:"))
                .and(predicate::str::contains("std BTreeMap").not())
                .and(predicate::str::contains(
                    "Summary: 2 benchmarks finished, 12 filtered out in",
                )),
        );
}
