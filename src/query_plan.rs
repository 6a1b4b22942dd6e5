//! Pre-generated lookup workload for the query phase.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Mixed into the run seed so the query plan does not replay the key
/// generator's random sequence.
const QUERY_SEED_MIX: u64 = 0xbf58_476d_1ce4_e5b9;

/// A flat sequence of `num_threads * queries_per_thread` lookup keys, drawn
/// with replacement from the key set.
///
/// Duplicates are expected; the plan models a lookup-heavy workload, not a
/// uniqueness guarantee. Once generated the plan is immutable and is handed
/// to workers as contiguous, non-overlapping, equal-length slices.
pub struct QueryPlan {
    keys: Vec<String>,
    num_threads: usize,
    queries_per_thread: usize,
}

impl QueryPlan {
    /// Draws the plan from `keys` using a generator seeded with a fixed mix
    /// of the run seed, so two runs with the same configuration replay the
    /// exact same lookups.
    pub fn generate(
        keys: &[String],
        seed: u64,
        num_threads: usize,
        queries_per_thread: usize,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed ^ QUERY_SEED_MIX);
        let total = num_threads * queries_per_thread;
        let mut plan = Vec::with_capacity(total);
        for _ in 0..total {
            plan.push(keys[rng.gen_range(0..keys.len())].clone());
        }
        QueryPlan {
            keys: plan,
            num_threads,
            queries_per_thread,
        }
    }

    /// Total number of lookups in the plan.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True if the plan contains no lookups.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of worker slices the plan is partitioned into.
    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    /// Number of lookups per worker slice.
    pub fn queries_per_thread(&self) -> usize {
        self.queries_per_thread
    }

    /// The full plan, in draw order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// The per-worker slices, one per query thread.
    pub fn slices(&self) -> impl Iterator<Item = &[String]> {
        self.keys.chunks(self.queries_per_thread)
    }
}
