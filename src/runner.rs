//! The per-contender benchmark lifecycle.

use std::alloc::GlobalAlloc;
use std::time::{SystemTime, UNIX_EPOCH};

use peakmem_alloc::{PeakMemAlloc, PeakMemAllocTrait};
use quanta::Instant;
use yansi::Paint;

use crate::config::Config;
use crate::contender::Contender;
use crate::executor;
use crate::keys::generate_keys;
use crate::query_plan::QueryPlan;
use crate::report::{Measurement, Reporter, ResultLineReporter};

pub(crate) type Alloc = &'static dyn PeakMemAllocTrait;

/// Drives contenders through the construct → verify → query lifecycle and
/// reports one measurement per completed run.
///
/// The seed is resolved once when the runner is created (from the wall
/// clock if the configuration leaves it unset) and shared by every
/// contender run through the same runner, so results within one process
/// invocation are comparable on the identical key set.
pub struct Runner {
    config: Config,
    seed: u64,
    alloc: Option<Alloc>,
    reporter: Box<dyn Reporter>,
}

impl Runner {
    /// Creates a runner for `config`, resolving the seed.
    pub fn new(config: Config) -> Self {
        let seed = config.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_millis() as u64)
                .unwrap_or(1)
        });
        Runner {
            config,
            seed,
            alloc: None,
            reporter: Box::new(ResultLineReporter),
        }
    }

    /// The configuration this runner was created with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The resolved seed shared by all runs of this runner.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Set the peak mem allocator to be used for the benchmarks.
    /// This will report the peak memory consumption of the construction
    /// phase.
    pub fn set_alloc<A: GlobalAlloc + 'static>(&mut self, alloc: &'static PeakMemAlloc<A>) {
        self.alloc = Some(alloc);
    }

    /// Replace the default `RESULT`-line reporter.
    pub fn set_reporter(&mut self, reporter: Box<dyn Reporter>) {
        self.reporter = reporter;
    }

    /// Runs one contender through the full lifecycle.
    ///
    /// Returns the measurement of a completed run, or `None` when
    /// construction or verification failed; failures are logged with an
    /// `Error:` prefix and never abort the process, so an outer loop can
    /// continue with the next contender.
    pub fn run(&self, contender: &mut dyn Contender) -> Option<Measurement> {
        let name = contender.name();
        let category = name.split(' ').next().unwrap_or(&name);
        println!();
        println!(
            "{}",
            format!("Contender: {category}").black().on_yellow().invert()
        );

        let keys = generate_keys(self.config.num_keys, self.seed);
        contender.before_construction(&keys);

        self.cooldown();
        println!("{}", "Constructing".dim());
        if let Some(alloc) = self.alloc {
            alloc.reset_peak_memory();
        }
        let begin = Instant::now();
        if let Err(error) = contender.construct(&keys) {
            println!("Error: {error:#}");
            return None;
        }
        let construction_time_micros = begin.elapsed().as_micros() as u64;
        let peak_memory_bytes = self.alloc.map(|alloc| alloc.get_peak_memory());

        if !self.config.skip_tests {
            println!("{}", "Testing".dim());
            if let Err(error) = contender.perform_test(&keys) {
                println!("Error: {error}");
                println!("Aborting run");
                return None;
            }
        }

        let mut query_time_millis = 0;
        if self.config.num_queries > 0 {
            println!("{}", "Preparing query plan".dim());
            let plan = QueryPlan::generate(
                &keys,
                self.seed,
                self.config.num_query_threads,
                self.config.num_queries,
            );
            contender.before_queries(&plan);
            self.cooldown();
            println!("{}", "Querying".dim());
            query_time_millis = executor::execute(&*contender, &plan).as_millis() as u64;
        }

        let measurement = Measurement {
            name,
            num_keys: self.config.num_keys,
            load_factor: self.config.load_factor,
            size_bits: contender.size_bits(),
            construction_time_micros,
            query_time_millis,
            queries_per_thread: self.config.num_queries,
            num_threads: self.config.num_threads,
            num_query_threads: self.config.num_query_threads,
            peak_memory_bytes,
            extra_fields: contender.result_fields(),
        };
        self.reporter.report(&measurement);
        Some(measurement)
    }

    fn cooldown(&self) {
        if self.config.cooldown.is_zero() {
            return;
        }
        println!("{}", "Cooldown".dim());
        std::thread::sleep(self.config.cooldown);
    }
}
