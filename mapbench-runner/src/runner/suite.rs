//! The suites running the benchmark routines
//!
//! A [`CriterionSuite`] measures its routines with `criterion`. A [`TestSuite`] only checks that
//! the routines work, which is what `--test` uses.

use anyhow::Result;
use criterion::{Criterion, Throughput};
use log::debug;

use super::format::format_candidate;
use crate::error::Error;

/// A benchmark routine
///
/// A call does one iteration of the workload and returns the number of removals which found their
/// key.
pub type Routine = Box<dyn FnMut() -> usize>;

/// A named group of benchmark routines with the same problem size
pub trait Suite {
    /// Add the `routine` of the candidate with `name`
    fn add(&mut self, name: &'static str, routine: Routine);

    /// Run all routines added so far
    fn run(&mut self) -> Result<()>;
}

/// The [`Suite`] measuring each routine with a `criterion` benchmark group
pub struct CriterionSuite<'a> {
    criterion: &'a mut Criterion,
    name: String,
    operations: usize,
    routines: Vec<(&'static str, Routine)>,
}

/// The [`Suite`] calling each routine twice without measuring
pub struct TestSuite {
    name: String,
    operations: usize,
    routines: Vec<(&'static str, Routine)>,
}

impl<'a> CriterionSuite<'a> {
    /// Create a new `CriterionSuite`
    ///
    /// The `operations` (remove and insert cycles per routine call) are reported to `criterion` as
    /// throughput, so the report shows the time per single operation, too.
    pub fn new<T>(criterion: &'a mut Criterion, name: T, operations: usize) -> Self
    where
        T: Into<String>,
    {
        Self {
            criterion,
            name: name.into(),
            operations,
            routines: vec![],
        }
    }
}

impl Suite for CriterionSuite<'_> {
    fn add(&mut self, name: &'static str, routine: Routine) {
        self.routines.push((name, routine));
    }

    fn run(&mut self) -> Result<()> {
        if self.routines.is_empty() {
            debug!("Suite '{}': No routines to run", self.name);
            return Ok(());
        }

        let mut group = self.criterion.benchmark_group(self.name.as_str());
        group.throughput(Throughput::Elements(self.operations as u64));

        for (name, mut routine) in self.routines.drain(..) {
            group.bench_function(name, |bencher| bencher.iter(&mut routine));
        }

        group.finish();
        Ok(())
    }
}

impl TestSuite {
    /// The number of times each routine is called
    pub const ITERATIONS: usize = 2;

    /// Create a new `TestSuite`
    pub fn new<T>(name: T, operations: usize) -> Self
    where
        T: Into<String>,
    {
        Self {
            name: name.into(),
            operations,
            routines: vec![],
        }
    }
}

impl Suite for TestSuite {
    fn add(&mut self, name: &'static str, routine: Routine) {
        self.routines.push((name, routine));
    }

    fn run(&mut self) -> Result<()> {
        for (name, mut routine) in self.routines.drain(..) {
            println!("{}", format_candidate(name));
            for iteration in 0..Self::ITERATIONS {
                let found = routine();
                if found != self.operations {
                    return Err(Error::BenchmarkError(
                        self.name.clone(),
                        name.to_owned(),
                        format!(
                            "Iteration {iteration}: Expected {} removals to find their key but {found} \
                             did",
                            self.operations
                        ),
                    )
                    .into());
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_test_suite_calls_each_routine_twice() {
        let calls = Rc::new(Cell::new(0));
        let mut suite = TestSuite::new("Map size: 10, N: 3", 3);

        for name in ["first", "second"] {
            let calls = Rc::clone(&calls);
            suite.add(
                name,
                Box::new(move || {
                    calls.set(calls.get() + 1);
                    3
                }),
            );
        }

        suite.run().unwrap();
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_test_suite_when_removal_misses_key() {
        let mut suite = TestSuite::new("Map size: 10", 1);
        suite.add("good", Box::new(|| 1));
        suite.add("bad", Box::new(|| 0));

        let error = suite.run().unwrap_err();

        assert_eq!(
            error.downcast_ref::<Error>(),
            Some(&Error::BenchmarkError(
                "Map size: 10".to_owned(),
                "bad".to_owned(),
                "Iteration 0: Expected 1 removals to find their key but 0 did".to_owned()
            ))
        );
    }

    #[test]
    fn test_test_suite_when_empty() {
        assert!(TestSuite::new("empty", 1).run().is_ok());
    }
}
