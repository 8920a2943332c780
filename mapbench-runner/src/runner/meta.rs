use std::fmt::Display;
use std::num::NonZeroUsize;

use indexmap::IndexMap;
use log::debug;

const CPUINFO: &str = "/proc/cpuinfo";
const UNKNOWN_MODEL: &str = "Unknown CPU model";

/// The versions of the benchmarked libraries and of `criterion` this runner was built with
const LIBRARY_VERSIONS: [(&str, &str); 4] = [
    ("im", env!("MAPBENCH_VERSION_IM")),
    ("rpds", env!("MAPBENCH_VERSION_RPDS")),
    ("indexmap", env!("MAPBENCH_VERSION_INDEXMAP")),
    ("criterion", env!("MAPBENCH_VERSION_CRITERION")),
];

/// Information about the system and the runner printed before the benchmarks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// The CPU models and how many logical CPUs of each model exist, in order of appearance
    pub cpus: IndexMap<String, usize>,
    /// The version of the rustc compiler which compiled the runner
    pub rustc_version: String,
    /// The version of the runner
    pub runner_version: String,
    /// The operating system
    pub os: String,
    /// The architecture
    pub arch: String,
    /// The resolved versions of the libraries by name
    pub libraries: IndexMap<&'static str, String>,
}

impl Metadata {
    /// Collect the `Metadata` of the current system
    pub fn new() -> Self {
        let cpus = match std::fs::read_to_string(CPUINFO) {
            Ok(content) => parse_cpuinfo(&content),
            Err(error) => {
                debug!("Unable to read '{CPUINFO}': {error}");
                IndexMap::new()
            }
        };

        let cpus = if cpus.is_empty() {
            let count = std::thread::available_parallelism().map_or(1, NonZeroUsize::get);
            IndexMap::from([(UNKNOWN_MODEL.to_owned(), count)])
        } else {
            cpus
        };

        Self {
            cpus,
            rustc_version: env!("MAPBENCH_RUSTC_VERSION").to_owned(),
            runner_version: env!("CARGO_PKG_VERSION").to_owned(),
            os: std::env::consts::OS.to_owned(),
            arch: std::env::consts::ARCH.to_owned(),
            libraries: LIBRARY_VERSIONS
                .iter()
                .map(|(name, version)| (*name, (*version).to_owned()))
                .collect(),
        }
    }

    /// Print the `Metadata` to stdout
    pub fn print(&self) {
        print!("{self}");
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Metadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (model, count) in &self.cpus {
            writeln!(f, "CPU      {count}x {model}")?;
        }
        writeln!(f, "Rust     {}", self.rustc_version)?;
        writeln!(f, "Runner   mapbench-runner {}", self.runner_version)?;
        writeln!(f, "OS       {}, {}", self.os, self.arch)?;
        for (name, version) in &self.libraries {
            writeln!(f, "Library  {name} {version}")?;
        }
        Ok(())
    }
}

/// Count the logical CPUs per model name in the content of `/proc/cpuinfo`
pub fn parse_cpuinfo(content: &str) -> IndexMap<String, usize> {
    let mut cpus = IndexMap::new();
    for line in content.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        if key.trim() == "model name" {
            *cpus.entry(value.trim().to_owned()).or_insert(0) += 1;
        }
    }
    cpus
}
