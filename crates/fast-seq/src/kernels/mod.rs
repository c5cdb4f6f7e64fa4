//! Bounded-state streaming kernels over finite sequences.
//!
//! # Kernels
//!
//! - [`kway_merge`]: heap-based merge of K sorted sequences, O(N log K)
//! - [`sliding_window`]: monotonic deque sliding max/min, O(N)
//! - [`frontier`]: the comparator-keyed binary heap behind `kway_merge`
//!
//! The two public kernels are independent of each other. Both are
//! single-threaded and allocate only their own working state plus the output.

pub mod frontier;
pub mod kway_merge;
pub mod sliding_window;

// Re-export kernel types for convenient access, e.g.
// `use fast_seq::kernels::sliding_max;`

pub use frontier::{Frontier, FrontierEntry};
pub use kway_merge::{
    merge_k_sorted, merge_k_sorted_by, merge_k_sorted_into, merge_k_sorted_naive,
    merge_k_sorted_partial, merge_len, KMergeIter, KWayMerge, PartialOrder, TotalOrder,
};
pub use sliding_window::{
    sliding_max, sliding_min, sliding_window_extrema, sliding_window_extremum,
    sliding_window_extremum_by, sliding_window_extremum_into, sliding_window_extremum_naive,
    sliding_window_extremum_partial, sliding_window_len, MonotonicDeque, SlidingWindow,
    WindowExtremaOutput,
};
