//! K-way merge of sorted sequences using a binary-heap frontier.
//!
//! Given K sequences that are each sorted in non-decreasing order, the merge
//! produces their sorted union in O(N log K) time and O(K) auxiliary space,
//! where N is the total number of elements.
//!
//! # Algorithm
//!
//! 1. Seed the [`Frontier`] with `(first, source, 0)` for every non-empty
//!    source.
//! 2. Until the frontier is empty: take the minimum entry, emit its value,
//!    and advance that source to `position + 1` if it has one.
//!
//! The frontier orders entries by `(value, source)`, so equal values are
//! emitted in ascending source order, and in position order within a source.
//! The output is therefore identical to a *stable* sort of the concatenated
//! inputs.
//!
//! # Sortedness
//!
//! Sources are not pre-scanned. Instead, whenever a source is advanced, its
//! next element is compared against the element just emitted from it; a
//! descent stops the merge with [`Error::UnsortedSource`]. This catches every
//! out-of-order pair inside a source at the cost of one comparison per
//! element. Callers that want the check to happen before any work is done can
//! enable [`KWayMerge::verify_sources`].
//!
//! # Example
//!
//! ```
//! use fast_seq::kernels::kway_merge::merge_k_sorted;
//!
//! let lists = vec![vec![1, 4, 5], vec![1, 3, 4], vec![2, 6]];
//! let merged = merge_k_sorted(&lists).unwrap();
//! assert_eq!(merged, vec![1, 1, 2, 3, 4, 4, 5, 6]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::kernels::frontier::{Frontier, FrontierEntry};
use crate::traits::{partial_order, total_order, SortedInput};

/// Comparator type used by [`KMergeIter::new`] for `Ord` elements.
pub type TotalOrder<T> = fn(&T, &T) -> Result<Ordering>;

/// Comparator type used by [`KMergeIter::partial`] for `PartialOrd` elements.
pub type PartialOrder<T> = fn(&T, &T) -> Result<Ordering>;

const PARTIAL_CONTEXT: &str = "merge element";

fn merge_partial_order<T: PartialOrd>(a: &T, b: &T) -> Result<Ordering> {
    partial_order(a, b, PARTIAL_CONTEXT)
}

/// A lazy k-way merge over borrowed sorted sources.
///
/// Yields `Ok(&T)` in merged order. If a comparison fails or a source is
/// found to be unsorted, the error is yielded once and the iterator is then
/// exhausted.
///
/// # Example
///
/// ```
/// use fast_seq::kernels::kway_merge::KMergeIter;
///
/// let sources = [vec![1, 5, 9], vec![2, 3], vec![]];
/// let merged: Vec<i32> = KMergeIter::new(&sources)
///     .map(|item| item.copied())
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(merged, vec![1, 2, 3, 5, 9]);
/// ```
pub struct KMergeIter<'a, T, C> {
    sources: Vec<&'a [T]>,
    frontier: Frontier<'a, T, C>,
    remaining: usize,
    check_comparable: bool,
    seeded: bool,
    done: bool,
}

impl<T: fmt::Debug, C> fmt::Debug for KMergeIter<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KMergeIter")
            .field("sources", &self.sources.len())
            .field("frontier", &self.frontier)
            .field("remaining", &self.remaining)
            .field("check_comparable", &self.check_comparable)
            .field("done", &self.done)
            .finish()
    }
}

impl<'a, T: Ord> KMergeIter<'a, T, TotalOrder<T>> {
    /// Creates a merge over `Ord` elements.
    #[must_use]
    pub fn new<S: AsRef<[T]>>(sequences: &'a [S]) -> Self {
        Self::with_comparator(sequences, total_order::<T>)
    }
}

impl<'a, T: PartialOrd> KMergeIter<'a, T, PartialOrder<T>> {
    /// Creates a merge over `PartialOrd` elements such as floats.
    ///
    /// Every element is compared with itself as it is emitted, so a value
    /// with no ordering (NaN) is reported as `Error::Incomparable` even when
    /// it never meets another element in the frontier.
    ///
    /// # Example
    ///
    /// ```
    /// use fast_seq::kernels::kway_merge::KMergeIter;
    /// use fast_seq::Error;
    ///
    /// let sources = [vec![f64::NAN], vec![]];
    /// let items: Vec<_> = KMergeIter::partial(&sources).collect();
    /// assert!(matches!(items[..], [Err(Error::Incomparable { .. })]));
    /// ```
    #[must_use]
    pub fn partial<S: AsRef<[T]>>(sequences: &'a [S]) -> Self {
        Self::with_comparator(sequences, merge_partial_order::<T>).check_comparable(true)
    }
}

impl<'a, T, C> KMergeIter<'a, T, C>
where
    C: FnMut(&T, &T) -> Result<Ordering>,
{
    /// Creates a merge ordered by a fallible comparator.
    ///
    /// Nothing is compared until the first call to `next`.
    #[must_use]
    pub fn with_comparator<S: AsRef<[T]>>(sequences: &'a [S], compare: C) -> Self {
        let sources: Vec<&'a [T]> = sequences.iter().map(AsRef::as_ref).collect();
        let remaining = sources.iter().map(|s| s.len()).sum();
        let frontier = Frontier::with_capacity(sources.len(), compare);

        Self {
            sources,
            frontier,
            remaining,
            check_comparable: false,
            seeded: false,
            done: false,
        }
    }

    /// Compares every element with itself before yielding it.
    ///
    /// Off by default. Turn it on when `compare` can fail for a single value,
    /// as a partial order does for NaN; a lone such value is otherwise never
    /// compared and would be yielded as `Ok`.
    #[must_use]
    pub fn check_comparable(mut self, check: bool) -> Self {
        self.check_comparable = check;
        self
    }

    /// Returns the number of elements not yet yielded.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    fn seed(&mut self) -> Result<()> {
        for (source, values) in self.sources.iter().copied().enumerate() {
            if let Some(first) = values.first() {
                self.frontier.push(FrontierEntry::new(first, source, 0))?;
            }
        }
        trace!(
            target: "fast_seq::merge",
            live_sources = self.frontier.len(),
            "seeded merge frontier"
        );
        Ok(())
    }

    fn advance(&mut self) -> Result<Option<&'a T>> {
        if !self.seeded {
            self.seeded = true;
            self.seed()?;
        }

        let Some(top) = self.frontier.peek().copied() else {
            return Ok(None);
        };
        if self.check_comparable {
            self.frontier.compare_values(top.value, top.value)?;
        }

        let source: &'a [T] = self.sources[top.source];
        let next_position = top.position + 1;
        match source.get(next_position) {
            Some(next) => {
                if self.frontier.compare_values(next, top.value)? == Ordering::Less {
                    return Err(Error::UnsortedSource {
                        source_index: top.source,
                        position: next_position,
                    });
                }
                self.frontier
                    .replace_top(FrontierEntry::new(next, top.source, next_position))?;
            }
            None => {
                self.frontier.pop()?;
            }
        }

        self.remaining -= 1;
        Ok(Some(top.value))
    }
}

impl<'a, T, C> Iterator for KMergeIter<'a, T, C>
where
    C: FnMut(&T, &T) -> Result<Ordering>,
{
    type Item = Result<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let step = self.advance();
        if !matches!(step, Ok(Some(_))) {
            self.done = true;
        }
        step.transpose()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            // An error can cut the merge short, so only the upper bound is exact.
            (0, Some(self.remaining))
        }
    }
}

/// Returns the total number of elements across all sources.
#[must_use]
pub fn merge_len<T, S: AsRef<[T]>>(sequences: &[S]) -> usize {
    sequences.iter().map(|s| s.as_ref().len()).sum()
}

fn merge_with<T, S, C>(sequences: &[S], compare: C, output: &mut Vec<T>) -> Result<usize>
where
    T: Clone,
    S: AsRef<[T]>,
    C: FnMut(&T, &T) -> Result<Ordering>,
{
    let total = merge_len(sequences);
    debug!(
        target: "fast_seq::merge",
        sources = sequences.len(),
        total,
        "merging sorted sources"
    );

    let start = output.len();
    output.reserve(total);

    for item in KMergeIter::with_comparator(sequences, compare) {
        match item {
            Ok(value) => output.push(value.clone()),
            Err(err) => {
                debug!(target: "fast_seq::merge", %err, "merge aborted");
                output.truncate(start);
                return Err(err);
            }
        }
    }

    Ok(output.len() - start)
}

/// Merges sorted sequences of `Ord` elements into one sorted vector.
///
/// Equal elements keep a deterministic order: ascending source index, then
/// position within the source.
///
/// # Arguments
///
/// * `sequences` - The sources, each sorted in non-decreasing order
///
/// # Errors
///
/// Returns `Error::UnsortedSource` if a source is found to descend.
///
/// # Example
///
/// ```
/// use fast_seq::kernels::kway_merge::merge_k_sorted;
///
/// let empty: Vec<Vec<i32>> = vec![];
/// assert!(merge_k_sorted(&empty).unwrap().is_empty());
///
/// let single = vec![vec![1, 2, 3]];
/// assert_eq!(merge_k_sorted(&single).unwrap(), vec![1, 2, 3]);
/// ```
pub fn merge_k_sorted<T, S>(sequences: &[S]) -> Result<Vec<T>>
where
    T: Ord + Clone,
    S: AsRef<[T]>,
{
    let mut output = Vec::new();
    merge_with(sequences, total_order::<T>, &mut output)?;
    Ok(output)
}

/// Merges sorted sequences ordered by `compare`.
///
/// Each source must be sorted with respect to the same comparator.
///
/// # Errors
///
/// Returns `Error::UnsortedSource` if a source is found to descend.
///
/// # Example
///
/// ```
/// use fast_seq::kernels::kway_merge::merge_k_sorted_by;
///
/// // Descending sources merged with a reversed comparator.
/// let lists = vec![vec![9, 4, 1], vec![8, 2]];
/// let merged = merge_k_sorted_by(&lists, |a: &i32, b: &i32| b.cmp(a)).unwrap();
/// assert_eq!(merged, vec![9, 8, 4, 2, 1]);
/// ```
pub fn merge_k_sorted_by<T, S, F>(sequences: &[S], mut compare: F) -> Result<Vec<T>>
where
    T: Clone,
    S: AsRef<[T]>,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut output = Vec::new();
    merge_with(sequences, |a: &T, b: &T| Ok(compare(a, b)), &mut output)?;
    Ok(output)
}

/// Merges sorted sequences of `PartialOrd` elements, such as floats.
///
/// Every element is first checked to be comparable with itself, which
/// rejects NaN even when it would never meet another element in the heap.
///
/// # Errors
///
/// - `Error::Incomparable` if any element has no ordering
/// - `Error::UnsortedSource` if a source is found to descend
///
/// # Example
///
/// ```
/// use fast_seq::kernels::kway_merge::merge_k_sorted_partial;
/// use fast_seq::Error;
///
/// let lists = vec![vec![0.5_f64, 2.5], vec![1.5]];
/// assert_eq!(merge_k_sorted_partial(&lists).unwrap(), vec![0.5, 1.5, 2.5]);
///
/// let bad = vec![vec![1.0_f64, f64::NAN]];
/// assert!(matches!(merge_k_sorted_partial(&bad), Err(Error::Incomparable { .. })));
/// ```
pub fn merge_k_sorted_partial<T, S>(sequences: &[S]) -> Result<Vec<T>>
where
    T: PartialOrd + Clone,
    S: AsRef<[T]>,
{
    for values in sequences {
        for value in values.as_ref() {
            partial_order(value, value, PARTIAL_CONTEXT)?;
        }
    }

    let mut output = Vec::new();
    merge_with(sequences, merge_partial_order::<T>, &mut output)?;
    Ok(output)
}

/// Appends the merge of `sequences` to `output`.
///
/// Returns the number of elements appended. On error, `output` is restored to
/// its original length.
///
/// # Errors
///
/// Returns `Error::UnsortedSource` if a source is found to descend.
pub fn merge_k_sorted_into<T, S>(sequences: &[S], output: &mut Vec<T>) -> Result<usize>
where
    T: Ord + Clone,
    S: AsRef<[T]>,
{
    merge_with(sequences, total_order::<T>, output)
}

/// Merges by concatenating and stable-sorting.
///
/// O(N log N). Provided for comparison and testing; the result has exactly
/// the same order as [`merge_k_sorted`] for sorted inputs.
#[must_use]
pub fn merge_k_sorted_naive<T, S>(sequences: &[S]) -> Vec<T>
where
    T: Ord + Clone,
    S: AsRef<[T]>,
{
    let mut all: Vec<T> = sequences
        .iter()
        .flat_map(|s| s.as_ref().iter().cloned())
        .collect();
    all.sort();
    all
}

/// Configuration for a k-way merge.
///
/// # Example
///
/// ```
/// use fast_seq::kernels::KWayMerge;
///
/// let lists = vec![vec![1, 2, 2], vec![2, 3]];
///
/// let all = KWayMerge::new().compute(&lists).unwrap();
/// assert_eq!(all, vec![1, 2, 2, 2, 3]);
///
/// let union = KWayMerge::new().dedup(true).compute(&lists).unwrap();
/// assert_eq!(union, vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KWayMerge {
    verify_sources: bool,
    dedup: bool,
}

impl KWayMerge {
    /// Creates a merge configuration with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            verify_sources: false,
            dedup: false,
        }
    }

    /// Scans every source for sortedness before merging.
    ///
    /// Costs one extra O(N) pass but guarantees that an unsorted input is
    /// reported before any merging happens.
    ///
    /// Default: false
    #[must_use]
    pub const fn verify_sources(mut self, verify: bool) -> Self {
        self.verify_sources = verify;
        self
    }

    /// Collapses runs of equal elements in the output, producing the sorted
    /// set union of the sources.
    ///
    /// Default: false
    #[must_use]
    pub const fn dedup(mut self, dedup: bool) -> Self {
        self.dedup = dedup;
        self
    }

    /// Merges `sequences` using the configured options.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsortedSource` if a source is not sorted.
    pub fn compute<T, S>(&self, sequences: &[S]) -> Result<Vec<T>>
    where
        T: Ord + Clone,
        S: AsRef<[T]>,
    {
        if self.verify_sources {
            for (source_index, values) in sequences.iter().enumerate() {
                values
                    .as_ref()
                    .validate_sorted_by(source_index, total_order::<T>)?;
            }
        }

        let mut merged = merge_k_sorted(sequences)?;
        if self.dedup {
            merged.dedup();
        }
        Ok(merged)
    }
}
