//! fast-seq: bounded-state kernels over finite sequences
//!
//! This crate provides small, deterministic sequence algorithms that
//! keep only a bounded working set while they scan their input.
//!
//! # Features
//!
//! - **K-way merge**: merge K sorted sequences in O(N log K) with a
//!   deterministic tie-break on source index
//! - **Sliding-window extrema**: max or min of every window in O(N) with a
//!   monotonic deque
//! - **Sorted search**: binary, lower-bound and exponential search
//! - **Word ladders**: shortest one-letter transformation paths by BFS
//! - **Batching**: apply any kernel to many inputs, in parallel with the
//!   `parallel` feature
//!
//! # Quick Start
//!
//! ```
//! use fast_seq::prelude::*;
//!
//! let merged = merge_k_sorted(&[vec![1, 4, 5], vec![1, 3, 4], vec![2, 6]]).unwrap();
//! assert_eq!(merged, vec![1, 1, 2, 3, 4, 4, 5, 6]);
//!
//! let maxima = sliding_max(&[1, 3, -1, -3, 5, 3, 6, 7], 3).unwrap();
//! assert_eq!(maxima, vec![3, 3, 5, 5, 6, 7]);
//! ```
//!
//! # Error Handling
//!
//! Fallible functions return [`Result<T, Error>`]. Bad parameters and
//! violated preconditions are reported, never silently corrected:
//!
//! ```
//! use fast_seq::prelude::*;
//!
//! // A zero width is a bad parameter...
//! assert!(matches!(sliding_max(&[1, 2, 3], 0), Err(Error::InvalidWidth { .. })));
//!
//! // ...while a width longer than the input just has no complete window.
//! assert!(sliding_max(&[1, 2, 3], 4).unwrap().is_empty());
//!
//! // Unsorted merge sources are detected as the merge reaches them.
//! assert!(matches!(
//!     merge_k_sorted(&[vec![3, 1]]),
//!     Err(Error::UnsortedSource { source_index: 0, position: 1 })
//! ));
//! ```
//!
//! # Logging
//!
//! Kernels emit `tracing` events under the `fast_seq::*` targets at `debug`
//! and `trace` level. The library never installs a subscriber.

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::useless_conversion)]
#![allow(clippy::module_name_repetitions)]

pub mod batch;
pub mod error;
pub mod kernels;
pub mod prelude;
pub mod search;
pub mod traits;
pub mod word_ladder;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use kernels::{merge_k_sorted, sliding_window_extremum};
pub use traits::{Extremum, SortedInput};
