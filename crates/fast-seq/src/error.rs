//! Error types for fast-seq.
//!
//! This module defines the error types used throughout the fast-seq library
//! for handling bad parameters and precondition violations.

use thiserror::Error;

/// The main error type for fast-seq operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The window width parameter is invalid.
    ///
    /// Returned when a sliding-window operation is asked for a window of
    /// width zero. A width larger than the input is *not* an error: it simply
    /// produces no complete windows.
    #[error("invalid width {width}: {reason}")]
    InvalidWidth {
        /// The invalid width value that was provided.
        width: usize,
        /// Description of why the width is invalid.
        reason: &'static str,
    },

    /// A merge source is not sorted in non-decreasing order.
    ///
    /// The element at `position` of source `source_index` compares less than the
    /// element before it.
    #[error("source {source_index} is not sorted: descent at position {position}")]
    UnsortedSource {
        /// Index of the offending source sequence.
        source_index: usize,
        /// Position of the first element found out of order.
        position: usize,
    },

    /// Two elements could not be ordered against each other.
    ///
    /// Typically caused by NaN values in floating-point input.
    #[error("elements are not comparable: {context}")]
    Incomparable {
        /// Where the failing comparison happened.
        context: &'static str,
    },

    /// A caller-provided output buffer is shorter than the result.
    #[error("output buffer too small: required {required} elements, got {actual}")]
    BufferTooSmall {
        /// The number of slots required.
        required: usize,
        /// The number of slots provided.
        actual: usize,
    },
}

/// Convenience type alias for Results using the fast-seq Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_width_error() {
        let err = Error::InvalidWidth {
            width: 0,
            reason: "width must be at least 1",
        };
        assert_eq!(err.to_string(), "invalid width 0: width must be at least 1");
    }

    #[test]
    fn test_unsorted_source_error() {
        let err = Error::UnsortedSource {
            source_index: 2,
            position: 7,
        };
        assert_eq!(
            err.to_string(),
            "source 2 is not sorted: descent at position 7"
        );
    }

    #[test]
    fn test_incomparable_error() {
        let err = Error::Incomparable {
            context: "sliding window candidate",
        };
        assert_eq!(
            err.to_string(),
            "elements are not comparable: sliding window candidate"
        );
    }

    #[test]
    fn test_buffer_too_small_error() {
        let err = Error::BufferTooSmall {
            required: 6,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "output buffer too small: required 6 elements, got 3"
        );
    }

    #[test]
    fn test_error_equality() {
        let err1 = Error::UnsortedSource {
            source_index: 0,
            position: 1,
        };
        let err2 = Error::UnsortedSource {
            source_index: 0,
            position: 1,
        };
        let err3 = Error::UnsortedSource {
            source_index: 1,
            position: 1,
        };

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }

    #[test]
    fn test_result_type_alias() {
        fn test_fn(succeed: bool) -> Result<i32> {
            if succeed {
                Ok(42)
            } else {
                Err(Error::Incomparable { context: "test" })
            }
        }

        assert_eq!(test_fn(true).unwrap(), 42);
        assert!(test_fn(false).is_err());
    }

    #[test]
    fn test_error_is_std_error() {
        fn accepts_std_error<E: std::error::Error>(_: E) {}
        accepts_std_error(Error::Incomparable { context: "test" });
    }
}
