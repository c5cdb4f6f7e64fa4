//! Searching sorted slices.
//!
//! All functions expect `values` to be sorted in non-decreasing order. The
//! order is not verified; on unsorted input the result is unspecified but the
//! functions never panic.
//!
//! # Example
//!
//! ```
//! use fast_seq::search::{binary_search, exponential_search, first_occurrence, lower_bound};
//!
//! let values = [10, 20, 20, 20, 50];
//! assert!(matches!(binary_search(&values, &20), Some(1..=3)));
//! assert_eq!(first_occurrence(&values, &20), Some(1));
//! assert_eq!(lower_bound(&values, &25), 4);
//! assert_eq!(exponential_search(&values, &50), Some(4));
//! assert_eq!(exponential_search(&values, &15), None);
//! ```

use std::cmp::Ordering;

/// Iterative binary search.
///
/// Returns the index of *some* element equal to `key`, or `None`. With
/// duplicates, which match is returned is unspecified; use
/// [`first_occurrence`] for the leftmost one.
///
/// # Complexity
///
/// O(log n)
#[must_use]
pub fn binary_search<T: Ord>(values: &[T], key: &T) -> Option<usize> {
    // Half-open [low, high) so the bounds never underflow.
    let mut low = 0;
    let mut high = values.len();

    while low < high {
        let mid = low + (high - low) / 2;
        match values[mid].cmp(key) {
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
            Ordering::Equal => return Some(mid),
        }
    }

    None
}

/// Returns the first index whose value is not less than `key`.
///
/// This is the insertion point that keeps `values` sorted, placing `key`
/// before any equal elements. Returns `values.len()` if every value is less
/// than `key`.
///
/// # Complexity
///
/// O(log n)
#[must_use]
pub fn lower_bound<T: Ord>(values: &[T], key: &T) -> usize {
    let mut low = 0;
    let mut high = values.len();

    while low < high {
        let mid = low + (high - low) / 2;
        if values[mid] < *key {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    low
}

/// Returns the index of the leftmost element equal to `key`.
#[must_use]
pub fn first_occurrence<T: Ord>(values: &[T], key: &T) -> Option<usize> {
    let idx = lower_bound(values, key);
    (idx < values.len() && values[idx] == *key).then_some(idx)
}

/// Exponential (galloping) search.
///
/// Doubles a bound until it passes `key`, then binary searches the last
/// doubling interval. Runs in O(log i) where `i` is the position of the
/// match, which beats plain binary search when matches sit near the front.
///
/// Returns the index of some element equal to `key`, or `None`.
#[must_use]
pub fn exponential_search<T: Ord>(values: &[T], key: &T) -> Option<usize> {
    let first = values.first()?;
    if first == key {
        return Some(0);
    }

    let n = values.len();
    let mut bound = 1;
    while bound < n && values[bound] <= *key {
        bound *= 2;
    }

    let low = bound / 2;
    let high = bound.min(n - 1);
    binary_search(&values[low..=high], key).map(|idx| low + idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_search_found() {
        let values = [10, 20, 30, 40, 50];
        assert_eq!(binary_search(&values, &40), Some(3));
        assert_eq!(binary_search(&values, &10), Some(0));
        assert_eq!(binary_search(&values, &50), Some(4));
    }

    #[test]
    fn test_binary_search_missing() {
        let values = [10, 20, 30, 40, 50];
        assert_eq!(binary_search(&values, &25), None);
        assert_eq!(binary_search(&values, &5), None);
        assert_eq!(binary_search(&values, &55), None);
    }

    #[test]
    fn test_binary_search_edge_cases() {
        let empty: [i32; 0] = [];
        assert_eq!(binary_search(&empty, &1), None);
        assert_eq!(binary_search(&[5], &5), Some(0));
        assert_eq!(binary_search(&[5], &3), None);
    }

    #[test]
    fn test_lower_bound() {
        let values = [1, 3, 3, 3, 7];
        assert_eq!(lower_bound(&values, &0), 0);
        assert_eq!(lower_bound(&values, &3), 1);
        assert_eq!(lower_bound(&values, &4), 4);
        assert_eq!(lower_bound(&values, &8), 5);

        let empty: [i32; 0] = [];
        assert_eq!(lower_bound(&empty, &1), 0);
    }

    #[test]
    fn test_first_occurrence() {
        let values = [2, 2, 2, 5, 5, 9];
        assert_eq!(first_occurrence(&values, &2), Some(0));
        assert_eq!(first_occurrence(&values, &5), Some(3));
        assert_eq!(first_occurrence(&values, &4), None);
        assert_eq!(first_occurrence(&values, &10), None);
    }

    #[test]
    fn test_exponential_search() {
        let even: Vec<i32> = (0..1000).step_by(2).collect();
        assert_eq!(exponential_search(&even, &0), Some(0));
        assert_eq!(exponential_search(&even, &250), Some(125));
        assert_eq!(exponential_search(&even, &998), Some(499));
        assert_eq!(exponential_search(&even, &999), None);
        assert_eq!(exponential_search(&even, &-1), None);
    }

    #[test]
    fn test_exponential_search_edge_cases() {
        let empty: [i32; 0] = [];
        assert_eq!(exponential_search(&empty, &1), None);
        assert_eq!(exponential_search(&[4], &4), Some(0));
        assert_eq!(exponential_search(&[4], &5), None);
        assert_eq!(exponential_search(&[1, 2], &2), Some(1));
    }

    #[test]
    fn test_search_strings() {
        let words = ["apple", "banana", "cherry"];
        assert_eq!(binary_search(&words, &"banana"), Some(1));
        assert_eq!(exponential_search(&words, &"cherry"), Some(2));
        assert_eq!(lower_bound(&words, &"blueberry"), 2);
    }
}
