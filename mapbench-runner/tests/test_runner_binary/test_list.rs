use predicates::prelude::*;

use crate::common::{Runner, SMALL};

#[test]
fn test_list_all() {
    let expected = [
        "Map size: 10/std HashMap",
        "Map size: 10/std BTreeMap",
        "Map size: 10/indexmap IndexMap",
        "Map size: 10/im HashMap",
        "Map size: 10/im OrdMap",
        "Map size: 10/rpds HashTrieMap",
        "Map size: 10/rpds RedBlackTreeMap",
        "Map size: 10, N: 2/std HashMap",
        "Map size: 10, N: 2/std BTreeMap",
        "Map size: 10, N: 2/indexmap IndexMap",
        "Map size: 10, N: 2/im HashMap",
        "Map size: 10, N: 2/im OrdMap",
        "Map size: 10, N: 2/rpds HashTrieMap",
        "Map size: 10, N: 2/rpds RedBlackTreeMap",
        "Summary: 14 benchmarks finished, 0 filtered out",
    ]
    .map(|line| format!("{line}\n"))
    .concat();

    Runner::new()
        .args(&["--list"])
        .args(&SMALL)
        .run()
        .success()
        .stdout(expected)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_list_with_include() {
    Runner::new()
        .args(&["--list", "--include", "^std"])
        .args(&SMALL)
        .run()
        .success()
        .stdout(
            predicate::str::contains("Map size: 10/std HashMap\n")
                .and(predicate::str::contains("Map size: 10, N: 2/std BTreeMap\n"))
                .and(predicate::str::contains("im HashMap").not())
                .and(predicate::str::contains("rpds").not())
                .and(predicate::str::contains(
                    "Summary: 4 benchmarks finished, 10 filtered out",
                )),
        );
}

#[test]
fn test_list_with_exclude_first() {
    Runner::new()
        .args(&["--list", "--exclude", "OrdMap", "--include", "^im"])
        .args(&SMALL)
        .run()
        .success()
        .stdout(
            predicate::str::contains("Map size: 10/im HashMap\n")
                .and(predicate::str::contains("Map size: 10/std HashMap\n"))
                .and(predicate::str::contains("OrdMap").not()),
        );
}

#[test]
fn test_list_from_environment() {
    Runner::new()
        .env("MAPBENCH_LIST", "yes")
        .env("MAPBENCH_SIZES", "7,8")
        .args(&["--changes", "3", "--include", "rpds HashTrieMap"])
        .run()
        .success()
        .stdout(
            "Map size: 7/rpds HashTrieMap\nMap size: 8/rpds HashTrieMap\nMap size: 7, N: \
             3/rpds HashTrieMap\nMap size: 8, N: 3/rpds HashTrieMap\nSummary: 4 benchmarks \
             finished, 24 filtered out\n",
        );
}

#[test]
fn test_list_ignores_invalid_settings_of_caller_environment() {
    // Inherited by every spawned runner unless the `Runner` removes it
    std::env::set_var("MAPBENCH_SAMPLE_SIZE", "5");
    std::env::set_var("MAPBENCH_MEASUREMENT_TIME", "0");

    Runner::new()
        .args(&["--list", "--include", "^std HashMap$"])
        .args(&SMALL)
        .run()
        .success()
        .stdout(predicate::str::contains(
            "Summary: 2 benchmarks finished, 12 filtered out",
        ));
}
