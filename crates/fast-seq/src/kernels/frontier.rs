//! The merge frontier: a binary min-heap of per-source cursors.
//!
//! [`Frontier`] stores [`FrontierEntry`] values, each one the smallest
//! not-yet-emitted element of a source sequence. Entries are ordered by
//! `(value, source)`, so equal values always leave the heap in ascending
//! source order regardless of insertion order.
//!
//! The heap is an explicit array with sift-up / sift-down rather than
//! [`std::collections::BinaryHeap`] for two reasons: the ordering comes from a
//! caller-supplied comparator instead of an `Ord` impl, and that comparator is
//! fallible (see [`partial_order`](crate::traits::partial_order)). It also
//! provides [`Frontier::replace_top`], which the merge loop uses to advance a
//! source with a single sift-down.
//!
//! # Example
//!
//! ```
//! use fast_seq::kernels::frontier::{Frontier, FrontierEntry};
//! use fast_seq::traits::total_order;
//!
//! let values = [5, 1, 1];
//! let mut frontier = Frontier::with_capacity(3, total_order);
//! frontier.push(FrontierEntry::new(&values[0], 0, 0)).unwrap();
//! frontier.push(FrontierEntry::new(&values[2], 2, 0)).unwrap();
//! frontier.push(FrontierEntry::new(&values[1], 1, 0)).unwrap();
//!
//! // Equal values come out in source order.
//! assert_eq!(frontier.pop().unwrap().map(|e| e.source), Some(1));
//! assert_eq!(frontier.pop().unwrap().map(|e| e.source), Some(2));
//! assert_eq!(frontier.pop().unwrap().map(|e| *e.value), Some(5));
//! assert!(frontier.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::error::Result;

/// One cursor into a source sequence.
#[derive(Debug, PartialEq, Eq)]
pub struct FrontierEntry<'a, T> {
    /// The source's smallest not-yet-emitted element.
    pub value: &'a T,
    /// Index of the source sequence. Secondary sort key.
    pub source: usize,
    /// Position of `value` within its source.
    pub position: usize,
}

impl<'a, T> FrontierEntry<'a, T> {
    /// Creates a new entry.
    #[inline]
    #[must_use]
    pub const fn new(value: &'a T, source: usize, position: usize) -> Self {
        Self {
            value,
            source,
            position,
        }
    }
}

// Manual impls: the entry only holds a reference, so it is Copy for any T.
impl<T> Clone for FrontierEntry<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FrontierEntry<'_, T> {}

/// A binary min-heap of [`FrontierEntry`] values ordered by `(value, source)`.
///
/// `C` is the value comparator, `FnMut(&T, &T) -> Result<Ordering>`. Any error
/// it returns is propagated out of the heap operation that triggered it; the
/// heap may be left partially sifted afterwards and should be discarded.
pub struct Frontier<'a, T, C> {
    entries: Vec<FrontierEntry<'a, T>>,
    compare: C,
}

impl<T: fmt::Debug, C> fmt::Debug for Frontier<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frontier")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

impl<'a, T, C> Frontier<'a, T, C>
where
    C: FnMut(&T, &T) -> Result<Ordering>,
{
    /// Creates an empty frontier with room for `capacity` sources.
    #[must_use]
    pub fn with_capacity(capacity: usize, compare: C) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            compare,
        }
    }

    /// Returns the number of live entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries remain.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all entries.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the minimum entry without removing it.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<&FrontierEntry<'a, T>> {
        self.entries.first()
    }

    /// Compares two values with the frontier's comparator.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the comparator.
    #[inline]
    pub fn compare_values(&mut self, a: &T, b: &T) -> Result<Ordering> {
        (self.compare)(a, b)
    }

    /// Pushes an entry.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the comparator.
    ///
    /// # Complexity
    ///
    /// O(log n).
    pub fn push(&mut self, entry: FrontierEntry<'a, T>) -> Result<()> {
        self.entries.push(entry);
        self.sift_up(self.entries.len() - 1)
    }

    /// Removes and returns the minimum entry.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the comparator.
    ///
    /// # Complexity
    ///
    /// O(log n).
    pub fn pop(&mut self) -> Result<Option<FrontierEntry<'a, T>>> {
        let Some(last) = self.entries.pop() else {
            return Ok(None);
        };

        if self.entries.is_empty() {
            return Ok(Some(last));
        }

        let top = std::mem::replace(&mut self.entries[0], last);
        self.sift_down(0)?;
        Ok(Some(top))
    }

    /// Replaces the minimum entry with `entry` and restores the heap order.
    ///
    /// Cheaper than `pop` followed by `push`: a single sift-down. Returns the
    /// replaced entry, or `None` (after inserting `entry`) if the frontier
    /// was empty.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the comparator.
    pub fn replace_top(
        &mut self,
        entry: FrontierEntry<'a, T>,
    ) -> Result<Option<FrontierEntry<'a, T>>> {
        if self.entries.is_empty() {
            self.entries.push(entry);
            return Ok(None);
        }

        let top = std::mem::replace(&mut self.entries[0], entry);
        self.sift_down(0)?;
        Ok(Some(top))
    }

    /// Returns `true` if the entry at `i` sorts strictly before the one at `j`.
    #[inline]
    fn less(&mut self, i: usize, j: usize) -> Result<bool> {
        let a = self.entries[i];
        let b = self.entries[j];
        let ordering = (self.compare)(a.value, b.value)?.then(a.source.cmp(&b.source));
        Ok(ordering == Ordering::Less)
    }

    fn sift_up(&mut self, mut idx: usize) -> Result<()> {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.less(idx, parent)? {
                self.entries.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
        Ok(())
    }

    fn sift_down(&mut self, mut idx: usize) -> Result<()> {
        let len = self.entries.len();
        loop {
            let left = 2 * idx + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let smallest = if right < len && self.less(right, left)? {
                right
            } else {
                left
            };

            if self.less(smallest, idx)? {
                self.entries.swap(idx, smallest);
                idx = smallest;
            } else {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::traits::{partial_order, total_order};

    fn drain<T, C>(frontier: &mut Frontier<'_, T, C>) -> Vec<(T, usize)>
    where
        T: Copy,
        C: FnMut(&T, &T) -> Result<Ordering>,
    {
        let mut out = Vec::new();
        while let Some(entry) = frontier.pop().unwrap() {
            out.push((*entry.value, entry.source));
        }
        out
    }

    #[test]
    fn test_frontier_empty() {
        let mut frontier: Frontier<'_, i32, _> = Frontier::with_capacity(4, total_order);
        assert!(frontier.is_empty());
        assert_eq!(frontier.len(), 0);
        assert!(frontier.peek().is_none());
        assert!(frontier.pop().unwrap().is_none());
    }

    #[test]
    fn test_frontier_orders_by_value() {
        let values = [7, 3, 9, 1, 5];
        let mut frontier = Frontier::with_capacity(values.len(), total_order);
        for (source, value) in values.iter().enumerate() {
            frontier.push(FrontierEntry::new(value, source, 0)).unwrap();
        }

        assert_eq!(frontier.len(), 5);
        assert_eq!(frontier.peek().map(|e| *e.value), Some(1));

        let drained: Vec<i32> = drain(&mut frontier).into_iter().map(|(v, _)| v).collect();
        assert_eq!(drained, vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn test_frontier_ties_break_on_source() {
        let value = 4;
        let mut frontier = Frontier::with_capacity(4, total_order);
        // Insert in reverse source order to make sure insertion order is irrelevant.
        for source in (0..4).rev() {
            frontier.push(FrontierEntry::new(&value, source, 0)).unwrap();
        }

        let sources: Vec<usize> = drain(&mut frontier).into_iter().map(|(_, s)| s).collect();
        assert_eq!(sources, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_frontier_replace_top() {
        let values = [1, 2, 3, 10];
        let mut frontier = Frontier::with_capacity(3, total_order);
        frontier.push(FrontierEntry::new(&values[0], 0, 0)).unwrap();
        frontier.push(FrontierEntry::new(&values[1], 1, 0)).unwrap();
        frontier.push(FrontierEntry::new(&values[2], 2, 0)).unwrap();

        let old = frontier
            .replace_top(FrontierEntry::new(&values[3], 0, 1))
            .unwrap();
        assert_eq!(old.map(|e| *e.value), Some(1));
        assert_eq!(frontier.len(), 3);
        assert_eq!(drain(&mut frontier), vec![(2, 1), (3, 2), (10, 0)]);
    }

    #[test]
    fn test_frontier_replace_top_on_empty_inserts() {
        let value = 8;
        let mut frontier = Frontier::with_capacity(1, total_order);
        assert!(frontier
            .replace_top(FrontierEntry::new(&value, 0, 0))
            .unwrap()
            .is_none());
        assert_eq!(frontier.len(), 1);
    }

    #[test]
    fn test_frontier_clear() {
        let value = 1;
        let mut frontier = Frontier::with_capacity(2, total_order);
        frontier.push(FrontierEntry::new(&value, 0, 0)).unwrap();
        frontier.clear();
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_frontier_propagates_comparator_error() {
        let values = [1.0_f64, f64::NAN];
        let mut frontier = Frontier::with_capacity(2, |a: &f64, b: &f64| {
            partial_order(a, b, "frontier test")
        });
        frontier.push(FrontierEntry::new(&values[0], 0, 0)).unwrap();
        let result = frontier.push(FrontierEntry::new(&values[1], 1, 0));
        assert_eq!(
            result,
            Err(Error::Incomparable {
                context: "frontier test"
            })
        );
    }
}
