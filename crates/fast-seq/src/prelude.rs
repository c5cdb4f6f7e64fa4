//! Commonly used types and functions for convenient importing.
//!
//! # Usage
//!
//! ```
//! use fast_seq::prelude::*;
//!
//! let lows = sliding_window_extremum(&[4, 2, 12, 3], 2, Extremum::Min).unwrap();
//! assert_eq!(lows, vec![2, 2, 3]);
//!
//! let ladder = word_ladder("cold", "warm", &["cord", "card", "ward", "warm"]).unwrap();
//! assert_eq!(ladder.steps(), 5);
//! ```
//!
//! # Contents
//!
//! - [`Error`] and [`Result`]
//! - [`Extremum`] and [`SortedInput`]
//! - the merge and sliding-window kernels with their `_by`, `_partial` and
//!   `_into` variants, and the [`KWayMerge`] / [`SlidingWindow`] configs
//! - the sorted search functions and [`word_ladder`]
//! - [`BatchProcessor`] and [`process_batch`]

// Error types
pub use crate::error::{Error, Result};

// Traits
pub use crate::traits::{Extremum, SortedInput};

// Merge kernel
pub use crate::kernels::kway_merge::{
    merge_k_sorted, merge_k_sorted_by, merge_k_sorted_into, merge_k_sorted_partial, KMergeIter,
    KWayMerge,
};

// Sliding-window kernel
pub use crate::kernels::sliding_window::{
    sliding_max, sliding_min, sliding_window_extrema, sliding_window_extremum,
    sliding_window_extremum_by, sliding_window_extremum_into, sliding_window_extremum_partial,
    sliding_window_len, SlidingWindow, WindowExtremaOutput,
};

// Search and graph helpers
pub use crate::search::{binary_search, exponential_search, first_occurrence, lower_bound};
pub use crate::word_ladder::{word_ladder, Ladder};

// Batching
pub use crate::batch::{process_batch, BatchProcessor};
