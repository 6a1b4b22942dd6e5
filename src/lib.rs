#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_imports,
    unused_qualifications,
    missing_docs
)]

//! Harness for benchmarking (minimal) perfect hash function implementations
//! against each other under identical conditions: the same key set and the
//! same configuration for every contender.
//!
//! A benchmarked algorithm plugs in by implementing [`Contender`]. The
//! [`Runner`] drives every contender through the same lifecycle (generate
//! keys, construct (timed), verify the function really is an injection into
//! its claimed range, then fire a pre-generated query plan from one or more
//! worker threads, also timed) and emits one `RESULT` line per completed run.
//! Concrete adapters stay thin: translate the library's API into
//! `construct`, `size_bits` and per-key evaluation, and let the harness do
//! the rest.
//!
//! # Example
//! ```rust
//! use mphf_bench::config::Config;
//! use mphf_bench::contenders::rank::RankContender;
//! use mphf_bench::runner::Runner;
//!
//! let config = Config {
//!     num_keys: 1_000,
//!     num_queries: 1_000,
//!     seed: Some(42),
//!     cooldown: std::time::Duration::ZERO,
//!     ..Config::default()
//! };
//!
//! let runner = Runner::new(config);
//! let measurement = runner
//!     .run(&mut RankContender::minimal(1_000, false))
//!     .expect("rank baseline always constructs");
//! assert!(measurement.bits_per_key() > 0.0);
//! ```
//!
//! # Peak memory
//! Installing an instrumented global allocator and handing it to the runner
//! via [`Runner::set_alloc`] adds the construction phase's peak heap use to
//! the result line:
//! ```rust,no_run
//! use mphf_bench::{PeakMemAlloc, INSTRUMENTED_SYSTEM};
//!
//! #[global_allocator]
//! pub static GLOBAL: &PeakMemAlloc<std::alloc::System> = &INSTRUMENTED_SYSTEM;
//! ```

pub use peakmem_alloc::*;

pub mod config;
pub mod contender;
pub mod contenders;
pub mod executor;
pub mod keys;
pub mod query_plan;
pub mod registry;
pub mod report;
pub mod runner;
pub mod verify;

pub use config::Config;
pub use contender::Contender;
pub use query_plan::QueryPlan;
pub use registry::Registry;
pub use report::{Measurement, Reporter, ResultLineReporter};
pub use runner::Runner;
pub use verify::VerifyError;

/// A function that is opaque to the optimizer, used to prevent the compiler
/// from optimizing away the query results.
pub use std::hint::black_box;
