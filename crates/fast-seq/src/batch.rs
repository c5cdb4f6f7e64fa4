//! Batch processing of many independent inputs.
//!
//! Every kernel in this crate is a pure function of one input, so a batch of
//! inputs can be processed in parallel with no coordination. With the
//! `parallel` feature enabled, [`BatchProcessor`] uses Rayon once the batch
//! is large enough to amortise the thread-pool overhead.
//!
//! # Feature Flag
//!
//! ```toml
//! [dependencies]
//! fast-seq = { version = "0.1", features = ["parallel"] }
//! ```
//!
//! # Example
//!
//! ```
//! use fast_seq::batch::BatchProcessor;
//! use fast_seq::kernels::sliding_max;
//!
//! let series = vec![
//!     vec![1, 3, -1, -3, 5, 3, 6, 7],
//!     vec![9, 8, 7, 6],
//! ];
//!
//! let results = BatchProcessor::new()
//!     .process(&series, |s| sliding_max(s, 3))
//!     .unwrap();
//! assert_eq!(results, vec![vec![3, 3, 5, 5, 6, 7], vec![9, 8]]);
//! ```

use tracing::debug;

use crate::error::Result;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Default number of inputs below which batches run sequentially.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Batch processor applying one kernel to many inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchProcessor {
    /// Minimum number of inputs to use parallel processing.
    min_parallel_threshold: usize,
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchProcessor {
    /// Creates a new batch processor with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Sets the minimum number of inputs required to use parallel processing.
    ///
    /// Smaller batches are processed sequentially. Has no effect without the
    /// `parallel` feature.
    ///
    /// Default: 64
    #[must_use]
    pub const fn min_parallel_threshold(mut self, threshold: usize) -> Self {
        self.min_parallel_threshold = threshold;
        self
    }

    /// Returns true if a batch of `len` inputs would run in parallel.
    #[must_use]
    pub const fn is_parallel_for(&self, len: usize) -> bool {
        cfg!(feature = "parallel") && len >= self.min_parallel_threshold
    }

    /// Applies `kernel` to every input, preserving input order.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `kernel`.
    #[cfg(feature = "parallel")]
    pub fn process<T, F, R>(&self, inputs: &[Vec<T>], kernel: F) -> Result<Vec<R>>
    where
        T: Sync,
        F: Fn(&[T]) -> Result<R> + Send + Sync,
        R: Send,
    {
        let refs: Vec<&[T]> = inputs.iter().map(Vec::as_slice).collect();
        self.process_refs(&refs, kernel)
    }

    /// Applies `kernel` to every input, preserving input order.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `kernel`.
    #[cfg(not(feature = "parallel"))]
    pub fn process<T, F, R>(&self, inputs: &[Vec<T>], kernel: F) -> Result<Vec<R>>
    where
        F: Fn(&[T]) -> Result<R>,
    {
        let refs: Vec<&[T]> = inputs.iter().map(Vec::as_slice).collect();
        self.process_refs(&refs, kernel)
    }

    /// Applies `kernel` to every borrowed input, preserving input order.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `kernel`.
    #[cfg(feature = "parallel")]
    pub fn process_refs<T, F, R>(&self, inputs: &[&[T]], kernel: F) -> Result<Vec<R>>
    where
        T: Sync,
        F: Fn(&[T]) -> Result<R> + Send + Sync,
        R: Send,
    {
        if self.is_parallel_for(inputs.len()) {
            debug!(target: "fast_seq::batch", inputs = inputs.len(), "processing batch in parallel");
            inputs
                .par_iter()
                .map(|input| kernel(input))
                .collect::<Result<Vec<R>>>()
        } else {
            process_sequential(inputs, kernel)
        }
    }

    /// Applies `kernel` to every borrowed input, preserving input order.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `kernel`.
    #[cfg(not(feature = "parallel"))]
    pub fn process_refs<T, F, R>(&self, inputs: &[&[T]], kernel: F) -> Result<Vec<R>>
    where
        F: Fn(&[T]) -> Result<R>,
    {
        process_sequential(inputs, kernel)
    }
}

fn process_sequential<T, F, R>(inputs: &[&[T]], kernel: F) -> Result<Vec<R>>
where
    F: Fn(&[T]) -> Result<R>,
{
    debug!(target: "fast_seq::batch", inputs = inputs.len(), "processing batch sequentially");
    let mut results = Vec::with_capacity(inputs.len());
    for input in inputs {
        results.push(kernel(input)?);
    }
    Ok(results)
}

/// Processes a batch with a default [`BatchProcessor`].
///
/// # Errors
///
/// Returns the first error produced by `kernel`.
#[cfg(feature = "parallel")]
pub fn process_batch<T, F, R>(inputs: &[Vec<T>], kernel: F) -> Result<Vec<R>>
where
    T: Sync,
    F: Fn(&[T]) -> Result<R> + Send + Sync,
    R: Send,
{
    BatchProcessor::new().process(inputs, kernel)
}

/// Processes a batch with a default [`BatchProcessor`].
///
/// # Errors
///
/// Returns the first error produced by `kernel`.
#[cfg(not(feature = "parallel"))]
pub fn process_batch<T, F, R>(inputs: &[Vec<T>], kernel: F) -> Result<Vec<R>>
where
    F: Fn(&[T]) -> Result<R>,
{
    BatchProcessor::new().process(inputs, kernel)
}
