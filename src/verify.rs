//! Correctness verification: checks that a constructed hash function is a
//! total injection into its claimed output range.

use bitvec::bitvec;
use thiserror::Error;

/// Tolerance on the output range upper bound, to absorb rounding of
/// non-exact load factors.
pub const LOAD_FACTOR_SLACK: f64 = 1.0001;

/// Number of output slots for `num_keys` keys at the given load factor.
pub fn table_size(num_keys: usize, load_factor: f64) -> usize {
    (num_keys as f64 * (1.0 / load_factor)) as usize
}

/// A violation of the perfect hash function contract.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VerifyError {
    /// The function returned a slot beyond the allowed upper bound.
    #[error(
        "Range wrong: key #{key_index}/{num_keys} returned {slot} but the maximum should be {allowed} (table size {table_size})"
    )]
    RangeViolation {
        /// Position of the offending key in scan order.
        key_index: usize,
        /// Total number of keys under test.
        num_keys: usize,
        /// The out-of-range slot that was returned.
        slot: u64,
        /// Largest slot accepted, `table_size` scaled by [`LOAD_FACTOR_SLACK`].
        allowed: u64,
        /// The declared output range before slack.
        table_size: usize,
    },
    /// Two distinct keys mapped to the same slot.
    #[error("Collision: key #{key_index}/{num_keys} resulted in {slot}")]
    Collision {
        /// Position of the second key that hit the occupied slot.
        key_index: usize,
        /// Total number of keys under test.
        num_keys: usize,
        /// The doubly-assigned slot.
        slot: u64,
    },
}

/// Evaluates `hash` once per key, in key order, and fails fast on the first
/// out-of-range slot or collision.
///
/// A minimal PHF over N keys must produce exactly N distinct slots in
/// `[0, N)`; a non-minimal one N distinct slots within `table_size` scaled
/// by [`LOAD_FACTOR_SLACK`]. The scan order only matters for which key an
/// error report cites, not for whether a violation is found.
pub fn verify_injection<F>(keys: &[String], table_size: usize, hash: F) -> Result<(), VerifyError>
where
    F: Fn(&String) -> u64,
{
    let allowed = (table_size as f64 * LOAD_FACTOR_SLACK) as u64;
    let mut taken = bitvec![0; allowed as usize + 1];
    for (key_index, key) in keys.iter().enumerate() {
        let slot = hash(key);
        if slot > allowed {
            return Err(VerifyError::RangeViolation {
                key_index,
                num_keys: keys.len(),
                slot,
                allowed,
                table_size,
            });
        }
        if taken[slot as usize] {
            return Err(VerifyError::Collision {
                key_index,
                num_keys: keys.len(),
                slot,
            });
        }
        taken.set(slot as usize, true);
    }
    debug_assert_eq!(taken.count_ones(), keys.len());
    Ok(())
}
