//! The contract every benchmarked hash function adapter implements.

use crate::query_plan::QueryPlan;
use crate::verify::VerifyError;

/// One benchmarked algorithm configuration.
///
/// The harness drives implementations through the fixed lifecycle
/// construct → verify → query (see [`Runner::run`](crate::runner::Runner::run));
/// an adapter only translates a concrete library's API into these calls.
/// Lookups must be reentrant: during the query phase [`perform_queries`]
/// is called concurrently from multiple threads on a shared reference.
///
/// Per-key evaluation stays monomorphized inside the adapter: implement
/// [`perform_queries`] and [`perform_test`] with the
/// [`sweep_queries`](crate::executor::sweep_queries) and
/// [`verify_injection`](crate::verify::verify_injection) helpers, handing
/// them a closure over the concrete hash function, so no dynamic dispatch
/// lands on the per-lookup hot path.
///
/// [`perform_queries`]: Contender::perform_queries
/// [`perform_test`]: Contender::perform_test
pub trait Contender: Sync {
    /// Human-readable identifier, including algorithm parameters,
    /// e.g. `"RustFmph gamma=2"`. Never empty. The prefix up to the first
    /// space is used as the category header when a run starts.
    fn name(&self) -> String;

    /// Hook to pre-process keys before any timing starts. Default no-op.
    fn before_construction(&mut self, _keys: &[String]) {}

    /// Builds the hash function over the full key set.
    ///
    /// Failures (resource exhaustion, pathological input) abort the run for
    /// this contender only: the error is logged and no measurement is
    /// emitted.
    fn construct(&mut self, keys: &[String]) -> anyhow::Result<()>;

    /// Serialized size of the constructed function in bits.
    ///
    /// Only called after [`construct`](Contender::construct) succeeded;
    /// never part of the timed construction phase.
    fn size_bits(&self) -> u64;

    /// Hook to pre-warm or reorganize data before the timed query phase,
    /// given the full plan (not per-worker slices). Default no-op.
    fn before_queries(&mut self, _plan: &QueryPlan) {}

    /// Evaluates the hash function once per key in `keys`, discarding
    /// results through an optimization barrier.
    fn perform_queries(&self, keys: &[String]);

    /// Runs the injection check over `keys`.
    fn perform_test(&self, keys: &[String]) -> Result<(), VerifyError>;

    /// Extra `key=value` tokens appended to the result line. Must start
    /// with a space when non-empty. Default empty.
    fn result_fields(&self) -> String {
        String::new()
    }
}
