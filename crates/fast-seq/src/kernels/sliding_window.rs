//! Sliding-window maximum / minimum using a monotonic deque.
//!
//! For every contiguous window of a fixed width, this module reports the
//! window's maximum or minimum in a single left-to-right pass.
//!
//! # Algorithm
//!
//! The [`MonotonicDeque`] holds indices of candidate answers such that the
//! values at those indices are strictly decreasing (max tracking) or strictly
//! increasing (min tracking). For each new index `i`:
//!
//! 1. indices at the back whose values are dominated by `values[i]` are
//!    evicted; they can never be the answer while `i` is in the window,
//! 2. `i` is pushed to the back,
//! 3. indices that slid out of the window are evicted from the front,
//! 4. once a full window exists, the front index is the answer.
//!
//! # Complexity
//!
//! - Time: O(n), every index is pushed once and popped at most once
//! - Space: O(w) for the deque, where w is the width
//!
//! # Example
//!
//! ```
//! use fast_seq::kernels::sliding_window::{sliding_max, sliding_min};
//!
//! let data = [1, 3, -1, -3, 5, 3, 6, 7];
//! assert_eq!(sliding_max(&data, 3).unwrap(), vec![3, 3, 5, 5, 6, 7]);
//! assert_eq!(sliding_min(&data, 3).unwrap(), vec![-1, -3, -3, -3, 3, 3]);
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;

use tracing::debug;

use crate::error::{Error, Result};
use crate::traits::{partial_order, total_order, validate_width, Extremum};

/// A monotonic deque of candidate indices for one window width.
///
/// The deque stores indices into a caller-owned slice; the same slice must be
/// passed to every call.
#[derive(Debug, Clone)]
pub struct MonotonicDeque<T> {
    /// Candidate indices, front = current extremum
    deque: VecDeque<usize>,
    width: usize,
    mode: Extremum,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> MonotonicDeque<T> {
    /// Creates an empty deque for windows of `width` elements.
    ///
    /// # Example
    ///
    /// ```
    /// use fast_seq::kernels::sliding_window::MonotonicDeque;
    /// use fast_seq::Extremum;
    ///
    /// let deque: MonotonicDeque<i64> = MonotonicDeque::new(5, Extremum::Min);
    /// assert!(deque.is_empty());
    /// ```
    #[must_use]
    pub fn new(width: usize, mode: Extremum) -> Self {
        Self {
            deque: VecDeque::with_capacity(width),
            width,
            mode,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns the window width.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns which extremum is tracked.
    #[must_use]
    pub const fn mode(&self) -> Extremum {
        self.mode
    }

    /// Returns true if the deque is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deque.is_empty()
    }

    /// Returns the number of candidate indices.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.deque.len()
    }

    /// Clears the deque.
    #[inline]
    pub fn clear(&mut self) {
        self.deque.clear();
    }

    /// Iterates over the candidate indices from front to back.
    pub fn candidates(&self) -> impl Iterator<Item = usize> + '_ {
        self.deque.iter().copied()
    }

    /// Admits `data[index]` as a candidate using `compare`.
    ///
    /// `index` must be one past the previously pushed index.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by `compare`; the deque is unchanged
    /// except for evictions already made.
    ///
    /// # Panics
    ///
    /// Panics if `index` or a stored candidate is out of bounds for `data`.
    #[inline]
    pub fn push_by<F>(&mut self, index: usize, data: &[T], mut compare: F) -> Result<()>
    where
        F: FnMut(&T, &T) -> Result<Ordering>,
    {
        let value = &data[index];

        while let Some(&back) = self.deque.back() {
            if self.mode.dominates(compare(value, &data[back])?) {
                self.deque.pop_back();
            } else {
                break;
            }
        }

        self.deque.push_back(index);
        self.remove_expired(index);
        Ok(())
    }

    /// Removes indices that are outside the window ending at `current_index`.
    #[inline]
    fn remove_expired(&mut self, current_index: usize) {
        if current_index >= self.width {
            let window_start = current_index + 1 - self.width;
            while let Some(&front) = self.deque.front() {
                if front < window_start {
                    self.deque.pop_front();
                } else {
                    break;
                }
            }
        }
    }

    /// Returns the index of the current extremum.
    #[inline]
    #[must_use]
    pub fn front_index(&self) -> Option<usize> {
        self.deque.front().copied()
    }

    /// Returns the current extremum from `data`, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn extremum<'d>(&self, data: &'d [T]) -> Option<&'d T> {
        self.front_index().map(|idx| &data[idx])
    }
}

impl<T: Ord> MonotonicDeque<T> {
    /// Admits `data[index]` using the natural order of `T`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for `data`.
    #[inline]
    pub fn push(&mut self, index: usize, data: &[T]) {
        let value = &data[index];
        while let Some(&back) = self.deque.back() {
            if self.mode.dominates(value.cmp(&data[back])) {
                self.deque.pop_back();
            } else {
                break;
            }
        }
        self.deque.push_back(index);
        self.remove_expired(index);
    }
}

/// Output holding both sliding maxima and minima.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowExtremaOutput<T> {
    /// The sliding maxima.
    pub max: Vec<T>,
    /// The sliding minima.
    pub min: Vec<T>,
}

/// Returns the number of complete windows of `width` over `len` elements.
///
/// That is `len - width + 1`, or 0 when `width` is 0 or exceeds `len`.
///
/// # Example
///
/// ```
/// use fast_seq::kernels::sliding_window::sliding_window_len;
///
/// assert_eq!(sliding_window_len(8, 3), 6);
/// assert_eq!(sliding_window_len(2, 3), 0);
/// ```
#[inline]
#[must_use]
pub const fn sliding_window_len(len: usize, width: usize) -> usize {
    if width == 0 || width > len {
        0
    } else {
        len - width + 1
    }
}

/// Runs the deque over `values`, calling `emit(k, value)` for window `k`.
fn run_window<T, C, E>(
    values: &[T],
    width: usize,
    mode: Extremum,
    mut compare: C,
    mut emit: E,
) -> Result<()>
where
    C: FnMut(&T, &T) -> Result<Ordering>,
    E: FnMut(usize, &T),
{
    let mut deque = MonotonicDeque::new(width, mode);

    for i in 0..values.len() {
        deque.push_by(i, values, &mut compare)?;

        if i + 1 >= width {
            if let Some(value) = deque.extremum(values) {
                emit(i + 1 - width, value);
            }
        }
    }

    Ok(())
}

fn extremum_with<T, C>(values: &[T], width: usize, mode: Extremum, compare: C) -> Result<Vec<T>>
where
    T: Clone,
    C: FnMut(&T, &T) -> Result<Ordering>,
{
    validate_width(width)?;

    let count = sliding_window_len(values.len(), width);
    debug!(
        target: "fast_seq::window",
        len = values.len(),
        width,
        mode = mode.name(),
        windows = count,
        "computing sliding window extremum"
    );

    let mut result = Vec::with_capacity(count);
    if count == 0 {
        return Ok(result);
    }

    run_window(values, width, mode, compare, |_, value| {
        result.push(value.clone());
    })?;
    Ok(result)
}

/// Computes the extremum of every window of `width` consecutive values.
///
/// # Arguments
///
/// * `values` - The input sequence
/// * `width` - The window width, at least 1
/// * `mode` - Whether to report maxima or minima
///
/// # Returns
///
/// A vector of `max(0, values.len() - width + 1)` values where element `k` is
/// the extremum of `values[k..k + width]`. A width larger than the input
/// yields an empty vector.
///
/// # Errors
///
/// Returns `Error::InvalidWidth` if `width` is zero.
///
/// # Example
///
/// ```
/// use fast_seq::kernels::sliding_window::sliding_window_extremum;
/// use fast_seq::Extremum;
///
/// let data = [4, 2, 12, 3, 8];
/// assert_eq!(
///     sliding_window_extremum(&data, 2, Extremum::Min).unwrap(),
///     vec![2, 2, 3, 3]
/// );
/// assert!(sliding_window_extremum(&data, 6, Extremum::Max).unwrap().is_empty());
/// ```
pub fn sliding_window_extremum<T: Ord + Clone>(
    values: &[T],
    width: usize,
    mode: Extremum,
) -> Result<Vec<T>> {
    extremum_with(values, width, mode, total_order::<T>)
}

/// Computes the sliding maximum. See [`sliding_window_extremum`].
///
/// # Errors
///
/// Returns `Error::InvalidWidth` if `width` is zero.
pub fn sliding_max<T: Ord + Clone>(values: &[T], width: usize) -> Result<Vec<T>> {
    sliding_window_extremum(values, width, Extremum::Max)
}

/// Computes the sliding minimum. See [`sliding_window_extremum`].
///
/// # Errors
///
/// Returns `Error::InvalidWidth` if `width` is zero.
pub fn sliding_min<T: Ord + Clone>(values: &[T], width: usize) -> Result<Vec<T>> {
    sliding_window_extremum(values, width, Extremum::Min)
}

/// Computes sliding extrema with a custom comparator.
///
/// # Errors
///
/// Returns `Error::InvalidWidth` if `width` is zero.
///
/// # Example
///
/// ```
/// use fast_seq::kernels::sliding_window::sliding_window_extremum_by;
/// use fast_seq::Extremum;
///
/// let words = ["pear", "fig", "banana", "kiwi"];
/// let longest = sliding_window_extremum_by(&words, 2, Extremum::Max, |a, b| {
///     a.len().cmp(&b.len())
/// })
/// .unwrap();
/// assert_eq!(longest, vec!["pear", "banana", "banana"]);
/// ```
pub fn sliding_window_extremum_by<T, F>(
    values: &[T],
    width: usize,
    mode: Extremum,
    mut compare: F,
) -> Result<Vec<T>>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    extremum_with(values, width, mode, |a: &T, b: &T| Ok(compare(a, b)))
}

/// Computes sliding extrema over `PartialOrd` values such as floats.
///
/// Every value is first checked to be comparable with itself, so a NaN is
/// rejected even in a window of width 1. A width larger than the input has no
/// complete window to compare, so it returns an empty vector without looking
/// at the values.
///
/// # Errors
///
/// - `Error::InvalidWidth` if `width` is zero
/// - `Error::Incomparable` if any value has no ordering and at least one
///   window exists
///
/// # Example
///
/// ```
/// use fast_seq::kernels::sliding_window::sliding_window_extremum_partial;
/// use fast_seq::{Error, Extremum};
///
/// let data = [1.5_f64, 0.5, 2.5];
/// let max = sliding_window_extremum_partial(&data, 2, Extremum::Max).unwrap();
/// assert_eq!(max, vec![1.5, 2.5]);
///
/// let bad = [1.0_f64, f64::NAN];
/// assert!(matches!(
///     sliding_window_extremum_partial(&bad, 1, Extremum::Max),
///     Err(Error::Incomparable { .. })
/// ));
/// ```
pub fn sliding_window_extremum_partial<T: PartialOrd + Clone>(
    values: &[T],
    width: usize,
    mode: Extremum,
) -> Result<Vec<T>> {
    const CONTEXT: &str = "sliding window value";

    validate_width(width)?;
    if sliding_window_len(values.len(), width) == 0 {
        return Ok(Vec::new());
    }
    for value in values {
        partial_order(value, value, CONTEXT)?;
    }

    extremum_with(values, width, mode, |a: &T, b: &T| {
        partial_order(a, b, CONTEXT)
    })
}

/// Computes sliding extrema into a pre-allocated buffer.
///
/// Writes the `sliding_window_len(values.len(), width)` results to the front
/// of `output` and leaves the rest of the buffer untouched.
///
/// # Returns
///
/// The number of values written.
///
/// # Errors
///
/// - `Error::InvalidWidth` if `width` is zero
/// - `Error::BufferTooSmall` if `output` cannot hold every window
pub fn sliding_window_extremum_into<T: Ord + Clone>(
    values: &[T],
    width: usize,
    mode: Extremum,
    output: &mut [T],
) -> Result<usize> {
    validate_width(width)?;

    let count = sliding_window_len(values.len(), width);
    if output.len() < count {
        return Err(Error::BufferTooSmall {
            required: count,
            actual: output.len(),
        });
    }

    run_window(values, width, mode, total_order::<T>, |k, value| {
        output[k].clone_from(value);
    })?;
    Ok(count)
}

/// Computes both sliding maxima and minima in a single pass.
///
/// # Errors
///
/// Returns `Error::InvalidWidth` if `width` is zero.
///
/// # Example
///
/// ```
/// use fast_seq::kernels::sliding_window::sliding_window_extrema;
///
/// let out = sliding_window_extrema(&[3, 1, 4, 1, 5], 3).unwrap();
/// assert_eq!(out.max, vec![4, 4, 5]);
/// assert_eq!(out.min, vec![1, 1, 1]);
/// ```
pub fn sliding_window_extrema<T: Ord + Clone>(
    values: &[T],
    width: usize,
) -> Result<WindowExtremaOutput<T>> {
    validate_width(width)?;

    let count = sliding_window_len(values.len(), width);
    let mut output = WindowExtremaOutput {
        max: Vec::with_capacity(count),
        min: Vec::with_capacity(count),
    };

    let mut max_deque = MonotonicDeque::new(width, Extremum::Max);
    let mut min_deque = MonotonicDeque::new(width, Extremum::Min);

    for i in 0..values.len() {
        max_deque.push(i, values);
        min_deque.push(i, values);

        if i + 1 >= width {
            if let (Some(max), Some(min)) =
                (max_deque.extremum(values), min_deque.extremum(values))
            {
                output.max.push(max.clone());
                output.min.push(min.clone());
            }
        }
    }

    Ok(output)
}

/// Computes sliding extrema with the naive O(n×w) rescan of every window.
///
/// Provided for comparison and testing. It is NOT recommended for
/// production use - use [`sliding_window_extremum`] instead.
///
/// # Errors
///
/// Returns `Error::InvalidWidth` if `width` is zero.
pub fn sliding_window_extremum_naive<T: Ord + Clone>(
    values: &[T],
    width: usize,
    mode: Extremum,
) -> Result<Vec<T>> {
    validate_width(width)?;

    let mut result = Vec::with_capacity(sliding_window_len(values.len(), width));
    for window in values.windows(width) {
        let mut best = &window[0];
        for value in &window[1..] {
            if mode.improves(value.cmp(best)) {
                best = value;
            }
        }
        result.push(best.clone());
    }

    Ok(result)
}

/// Configuration for a sliding-window extremum.
///
/// # Example
///
/// ```
/// use fast_seq::kernels::SlidingWindow;
/// use fast_seq::Extremum;
///
/// let data = [1, 3, -1, -3, 5, 3, 6, 7];
/// let lows = SlidingWindow::new().width(3).mode(Extremum::Min).compute(&data).unwrap();
/// assert_eq!(lows, vec![-1, -3, -3, -3, 3, 3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidingWindow {
    width: usize,
    mode: Extremum,
}

impl Default for SlidingWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl SlidingWindow {
    /// Creates a configuration with default parameters (width 3, maximum).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            width: 3,
            mode: Extremum::Max,
        }
    }

    /// Sets the window width.
    ///
    /// Default: 3
    #[must_use]
    pub const fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets which extremum is reported.
    ///
    /// Default: `Extremum::Max`
    #[must_use]
    pub const fn mode(mut self, mode: Extremum) -> Self {
        self.mode = mode;
        self
    }

    /// Returns the number of results for an input of `len` elements.
    #[must_use]
    pub const fn output_len(&self, len: usize) -> usize {
        sliding_window_len(len, self.width)
    }

    /// Computes the configured extremum over `values`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidWidth` if the configured width is zero.
    pub fn compute<T: Ord + Clone>(&self, values: &[T]) -> Result<Vec<T>> {
        sliding_window_extremum(values, self.width, self.mode)
    }

    /// Computes the configured extremum over `PartialOrd` values.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidWidth` if the configured width is zero
    /// - `Error::Incomparable` if any value has no ordering
    pub fn compute_partial<T: PartialOrd + Clone>(&self, values: &[T]) -> Result<Vec<T>> {
        sliding_window_extremum_partial(values, self.width, self.mode)
    }

    /// Computes the configured extremum into a pre-allocated buffer.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidWidth` if the configured width is zero
    /// - `Error::BufferTooSmall` if `output` is too short
    pub fn compute_into<T: Ord + Clone>(&self, values: &[T], output: &mut [T]) -> Result<usize> {
        sliding_window_extremum_into(values, self.width, self.mode, output)
    }
}
