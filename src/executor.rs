//! Timed execution of the query workload.

use std::time::Duration;

use quanta::Instant;

use crate::black_box;
use crate::contender::Contender;
use crate::query_plan::QueryPlan;

/// Evaluates `hash` once per key, XOR-folding the results into a sink that
/// is fed to [`black_box`] so the calls cannot be optimized away.
pub fn sweep_queries<F>(keys: &[String], hash: F)
where
    F: Fn(&String) -> u64,
{
    let mut sink = 0u64;
    for key in keys {
        sink ^= hash(key);
    }
    black_box(sink);
}

/// Runs the full query plan against `contender` and returns the elapsed
/// wall-clock time.
///
/// With one query thread the plan is evaluated on the calling thread, so no
/// spawn overhead enters the measurement. With more, one worker per slice
/// is spawned and the timer spans spawn through join of the last worker;
/// that overhead is part of multi-threaded serving and is measured on
/// purpose. A panicking worker propagates and terminates the run.
pub fn execute(contender: &dyn Contender, plan: &QueryPlan) -> Duration {
    if plan.num_threads() == 1 {
        let begin = Instant::now();
        contender.perform_queries(plan.keys());
        begin.elapsed()
    } else {
        let begin = Instant::now();
        std::thread::scope(|scope| {
            for slice in plan.slices() {
                scope.spawn(move || contender.perform_queries(slice));
            }
        });
        begin.elapsed()
    }
}
