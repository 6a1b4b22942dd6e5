//! Run configuration, fixed once before any benchmark starts.

use std::time::Duration;

use rustop::opts;

/// Immutable parameters of a benchmark run, shared read-only across every
/// phase.
///
/// Constructed once at process start (usually via [`parse_args`]) and
/// passed into [`Runner::new`](crate::runner::Runner::new); nothing here
/// changes while contenders run.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Number of keys to generate.
    pub num_keys: usize,
    /// Load factor of the hash table; the output range is
    /// `num_keys / load_factor` slots.
    pub load_factor: f64,
    /// Number of queries each query worker performs. Zero skips the query
    /// phase entirely.
    pub num_queries: usize,
    /// Thread count an adapter may use during construction.
    pub num_threads: usize,
    /// Worker thread count of the query phase.
    pub num_query_threads: usize,
    /// Skip the injection test after construction.
    pub skip_tests: bool,
    /// Skip non-minimal variants where a contender family offers both.
    pub minimal_only: bool,
    /// Seed for key and query plan generation. `None` resolves from the
    /// wall clock once per process run.
    pub seed: Option<u64>,
    /// Pause before each timed phase, so back-to-back CPU-bound phases
    /// start from comparable thermal and frequency conditions.
    pub cooldown: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            num_keys: 5_000_000,
            load_factor: 0.8,
            num_queries: 100_000_000,
            num_threads: 1,
            num_query_threads: 1,
            skip_tests: false,
            minimal_only: false,
            seed: None,
            cooldown: Duration::from_secs(1),
        }
    }
}

/// Parses the command line into a [`Config`] plus the list of requested
/// contender names.
///
/// `--help` exits with status 0; a parse failure prints the error and exits
/// with status 1. This is the only path that sets a non-zero exit code, so
/// batch invocations keep going past failing contenders.
pub fn parse_args() -> (Config, Vec<String>) {
    let res = opts! {
        synopsis "Benchmark perfect hash function contenders under identical conditions.";
        opt num_keys:usize=5_000_000, desc:"Number of keys to generate.";
        opt load_factor:f64=0.8, desc:"Load factor of the hash table.";
        opt num_queries:usize=100_000_000, desc:"Number of queries per query thread.";
        opt num_threads:usize=1, desc:"Number of threads to construct with.";
        opt num_query_threads:usize=1, desc:"Number of threads to run queries with.";
        opt skip_tests:bool, desc:"Skip testing the hash functions for validity.";
        opt minimal_only:bool, desc:"Skip non-minimal variants where a contender supports both.";
        opt seed:Option<u64>, desc:"Seed for key and query generation. Taken from the wall clock if absent.";
        opt cooldown_seconds:u64=1, desc:"Pause before each timed phase.";
        param contenders:Vec<String>, desc:"Contenders to run.";
    }
    .parse();
    if let Ok((args, _rest)) = res {
        (
            Config {
                num_keys: args.num_keys,
                load_factor: args.load_factor,
                num_queries: args.num_queries,
                num_threads: args.num_threads,
                num_query_threads: args.num_query_threads,
                skip_tests: args.skip_tests,
                minimal_only: args.minimal_only,
                seed: args.seed,
                cooldown: Duration::from_secs(args.cooldown_seconds),
            },
            args.contenders,
        )
    } else if let Err(rustop::Error::Help(help)) = res {
        println!("{}", help);
        std::process::exit(0);
    } else if let Err(e) = res {
        println!("{}", e);
        std::process::exit(1);
    } else {
        unreachable!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_surface() {
        let config = Config::default();
        assert_eq!(config.num_keys, 5_000_000);
        assert_eq!(config.load_factor, 0.8);
        assert_eq!(config.num_queries, 100_000_000);
        assert_eq!(config.num_threads, 1);
        assert_eq!(config.num_query_threads, 1);
        assert!(!config.skip_tests);
        assert!(!config.minimal_only);
        assert_eq!(config.seed, None);
        assert_eq!(config.cooldown, Duration::from_secs(1));
    }
}
