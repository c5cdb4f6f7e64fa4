//! Shared test utilities for fast-seq tests.
//!
//! Data generators are seeded so every run sees the same inputs.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Generates `len` integers uniformly drawn from `-range..range`.
#[allow(dead_code)]
pub fn random_series(len: usize, range: i64, seed: u64) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(-range..range)).collect()
}

/// Generates `k` sorted sources with lengths in `0..=max_len`.
///
/// Values are drawn from a small range so that ties across sources are common.
#[allow(dead_code)]
pub fn random_sorted_sources(k: usize, max_len: usize, seed: u64) -> Vec<Vec<i64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..k)
        .map(|_| {
            let len = rng.gen_range(0..=max_len);
            let mut source: Vec<i64> = (0..len).map(|_| rng.gen_range(0..20)).collect();
            source.sort_unstable();
            source
        })
        .collect()
}

/// Brute-force window extremum: rescans every window.
#[allow(dead_code)]
pub fn brute_force_windows(values: &[i64], width: usize, max: bool) -> Vec<i64> {
    if width == 0 || width > values.len() {
        return Vec::new();
    }
    values
        .windows(width)
        .map(|w| {
            if max {
                *w.iter().max().unwrap()
            } else {
                *w.iter().min().unwrap()
            }
        })
        .collect()
}

/// Returns true if `values` is non-decreasing.
#[allow(dead_code)]
pub fn is_non_decreasing<T: PartialOrd>(values: &[T]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Installs a test subscriber honouring `RUST_LOG`, once per process.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_series_is_deterministic() {
        assert_eq!(random_series(50, 10, 7), random_series(50, 10, 7));
        assert!(random_series(50, 10, 7).iter().all(|v| (-10..10).contains(v)));
    }

    #[test]
    fn test_random_sorted_sources_are_sorted() {
        for source in random_sorted_sources(8, 30, 3) {
            assert!(is_non_decreasing(&source));
        }
    }

    #[test]
    fn test_brute_force_windows() {
        let data = [1, 3, -1, -3, 5, 3, 6, 7];
        assert_eq!(brute_force_windows(&data, 3, true), vec![3, 3, 5, 5, 6, 7]);
        assert!(brute_force_windows(&data, 9, true).is_empty());
    }
}
