//! Deterministic generation of the benchmark key set.

use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;

const MIN_KEY_LEN: usize = 10;
const MAX_KEY_LEN: usize = 50;

/// Generates `count` unique alphanumeric string keys from `seed`.
///
/// The sequence is fully determined by `(count, seed)`, so every contender
/// benchmarked with the same configuration sees the identical key set.
/// Key lengths vary uniformly between 10 and 50 characters.
pub fn generate_keys(count: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut seen = FxHashSet::default();
    seen.reserve(count);
    let mut keys = Vec::with_capacity(count);
    while keys.len() < count {
        let len = rng.gen_range(MIN_KEY_LEN..=MAX_KEY_LEN);
        let key: String = (&mut rng)
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect();
        // Duplicate draws are discarded so the set stays a valid MPHF input.
        if seen.insert(key.clone()) {
            keys.push(key);
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_keys() {
        let a = generate_keys(500, 42);
        let b = generate_keys(500, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seed_different_keys() {
        let a = generate_keys(500, 42);
        let b = generate_keys(500, 43);
        assert_ne!(a, b);
    }

    #[test]
    fn keys_are_unique() {
        let keys = generate_keys(2000, 7);
        let distinct: FxHashSet<&String> = keys.iter().collect();
        assert_eq!(distinct.len(), keys.len());
    }

    #[test]
    fn count_and_length_bounds() {
        let keys = generate_keys(300, 1);
        assert_eq!(keys.len(), 300);
        for key in &keys {
            assert!((MIN_KEY_LEN..=MAX_KEY_LEN).contains(&key.len()));
        }
    }
}
