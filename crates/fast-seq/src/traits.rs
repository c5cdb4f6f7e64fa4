//! Core traits and ordering helpers for fast-seq.
//!
//! # Overview
//!
//! The kernels in this crate are written once against a *fallible* comparator,
//! `FnMut(&T, &T) -> Result<Ordering>`. This module provides the pieces that
//! adapt the usual ordering sources into that shape:
//!
//! - [`total_order`] for `Ord` types, which never fails
//! - [`partial_order`] for `PartialOrd` types such as `f64`, which fails with
//!   [`Error::Incomparable`] when two values have no ordering (NaN)
//! - [`Extremum`], the single ordering parameter that selects between
//!   maximum and minimum tracking
//!
//! It also provides [`SortedInput`], an extension trait for checking the
//! sortedness precondition of merge sources up front.
//!
//! # Example
//!
//! ```
//! use std::cmp::Ordering;
//! use fast_seq::traits::{partial_order, SortedInput};
//!
//! assert_eq!(partial_order(&1.0_f64, &2.0, "example").unwrap(), Ordering::Less);
//! assert!(partial_order(&f64::NAN, &2.0, "example").is_err());
//!
//! let data = [1, 2, 2, 5, 4];
//! assert_eq!(data.first_descent_by(|a, b| Ok(a.cmp(b))).unwrap(), Some(4));
//! ```

use std::cmp::Ordering;

use crate::error::{Error, Result};

/// Which extremum a sliding window tracks.
///
/// Max and min tracking share one implementation; this value decides which
/// direction of the comparison wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Extremum {
    /// Track the largest value in each window.
    #[default]
    Max,
    /// Track the smallest value in each window.
    Min,
}

impl Extremum {
    /// Returns a short lowercase name, used in log events.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Max => "max",
            Self::Min => "min",
        }
    }

    /// Returns the opposite extremum.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Max => Self::Min,
            Self::Min => Self::Max,
        }
    }

    /// Returns `true` if a newer value with `ordering = cmp(newer, older)`
    /// makes the older value useless as a future answer.
    ///
    /// For max tracking that is `newer >= older`, for min tracking
    /// `newer <= older`. Ties evict, which keeps the candidate deque strictly
    /// monotonic.
    #[inline]
    #[must_use]
    pub const fn dominates(self, ordering: Ordering) -> bool {
        match self {
            Self::Max => !matches!(ordering, Ordering::Less),
            Self::Min => !matches!(ordering, Ordering::Greater),
        }
    }

    /// Returns `true` if a value with `ordering = cmp(value, best)` is a
    /// strictly better answer than `best`.
    #[inline]
    #[must_use]
    pub const fn improves(self, ordering: Ordering) -> bool {
        match self {
            Self::Max => matches!(ordering, Ordering::Greater),
            Self::Min => matches!(ordering, Ordering::Less),
        }
    }
}

/// Compares two `Ord` values. Never fails.
///
/// # Errors
///
/// This function is infallible; the `Result` matches the comparator shape
/// used by the kernels.
#[inline]
pub fn total_order<T: Ord + ?Sized>(a: &T, b: &T) -> Result<Ordering> {
    Ok(a.cmp(b))
}

/// Compares two `PartialOrd` values.
///
/// # Errors
///
/// Returns `Error::Incomparable` with the given `context` if the values have
/// no ordering (for example when either is NaN).
#[inline]
pub fn partial_order<T: PartialOrd + ?Sized>(
    a: &T,
    b: &T,
    context: &'static str,
) -> Result<Ordering> {
    a.partial_cmp(b).ok_or(Error::Incomparable { context })
}

/// Extension trait for checking that a sequence is sorted.
///
/// The merge kernels never run this pre-scan themselves; it is offered for
/// callers that want the precondition verified before any output is
/// produced (see [`KWayMerge::verify_sources`](crate::kernels::KWayMerge::verify_sources)).
pub trait SortedInput<T> {
    /// Returns the position of the first element that compares less than its
    /// predecessor, or `None` if the sequence is non-decreasing.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by `compare`.
    fn first_descent_by<F>(&self, compare: F) -> Result<Option<usize>>
    where
        F: FnMut(&T, &T) -> Result<Ordering>;

    /// Validates that the sequence is non-decreasing.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsortedSource` tagged with `source_index` if a descent
    /// is found, or any error returned by `compare`.
    #[inline]
    fn validate_sorted_by<F>(&self, source_index: usize, compare: F) -> Result<()>
    where
        F: FnMut(&T, &T) -> Result<Ordering>,
    {
        match self.first_descent_by(compare)? {
            Some(position) => Err(Error::UnsortedSource {
                source_index,
                position,
            }),
            None => Ok(()),
        }
    }
}

impl<T> SortedInput<T> for [T] {
    fn first_descent_by<F>(&self, mut compare: F) -> Result<Option<usize>>
    where
        F: FnMut(&T, &T) -> Result<Ordering>,
    {
        for (position, pair) in self.windows(2).enumerate() {
            if compare(&pair[1], &pair[0])? == Ordering::Less {
                return Ok(Some(position + 1));
            }
        }
        Ok(None)
    }
}

/// Validates that a window width is usable.
///
/// # Errors
///
/// Returns `Error::InvalidWidth` if the width is zero.
#[inline]
pub const fn validate_width(width: usize) -> Result<()> {
    if width == 0 {
        Err(Error::InvalidWidth {
            width,
            reason: "width must be at least 1",
        })
    } else {
        Ok(())
    }
}
