//! Error types for list access and growth configuration.

use std::error::Error;
use std::fmt;

/// Errors reported by the checked list accessors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListError {
    /// An index at or past the logical length.
    OutOfBounds {
        /// The requested index.
        index: usize,
        /// The logical length at the time of the call.
        len: usize,
    },
    /// A removal range that does not fit inside the logical contents.
    RangeOutOfBounds {
        /// First index of the range.
        index: usize,
        /// Number of elements in the range.
        length: usize,
        /// The logical length at the time of the call.
        len: usize,
    },
    /// The list has no elements to remove.
    Empty,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for list of length {len}")
            }
            Self::RangeOutOfBounds { index, length, len } => {
                write!(
                    f,
                    "range {index}..{index}+{length} out of bounds for list of length {len}"
                )
            }
            Self::Empty => write!(f, "list is empty"),
        }
    }
}

impl Error for ListError {}

/// Errors from [`GrowthPolicy::validate`](crate::GrowthPolicy::validate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The proportional growth divisor was zero.
    ZeroDivisor,
    /// The constant growth increment was zero, so a zero-capacity
    /// list could never grow.
    ZeroIncrement,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDivisor => write!(f, "growth divisor must be at least 1"),
            Self::ZeroIncrement => write!(f, "growth increment must be at least 1"),
        }
    }
}

impl Error for ConfigError {}
