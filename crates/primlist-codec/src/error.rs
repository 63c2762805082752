//! Error types for list encoding and decoding.

use std::fmt;
use std::io;

use crate::tag::ListTag;

/// Errors that can occur while encoding or decoding a list block.
#[derive(Debug)]
pub enum CodecError {
    /// An I/O error occurred while streaming a block.
    Io(io::Error),
    /// The input ends before the bytes the block needs.
    Truncated {
        /// Bytes required to continue decoding.
        needed: usize,
        /// Bytes actually available.
        available: usize,
    },
    /// The header carries a type tag this build does not know.
    UnknownTag {
        /// The unrecognized raw tag.
        tag: i32,
    },
    /// The block holds a different element kind than the target list.
    TagMismatch {
        /// Kind of the list being decoded into.
        expected: ListTag,
        /// Kind named by the block header.
        found: ListTag,
    },
    /// The header's element count is negative.
    NegativeCount {
        /// The raw count from the header.
        count: i32,
    },
    /// The header's byte length disagrees with its tag and count.
    LengthMismatch {
        /// Byte length recorded in the header.
        declared: i32,
        /// Byte length implied by the tag and element count.
        expected: usize,
    },
    /// An element's own encoding is invalid.
    MalformedElement {
        /// Byte offset of the element within the block.
        offset: usize,
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// The encoded block would not fit the 32-bit length field.
    TooLarge {
        /// Size the block would have, in bytes.
        bytes: usize,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Truncated { needed, available } => {
                write!(f, "truncated block: need {needed} bytes, have {available}")
            }
            Self::UnknownTag { tag } => write!(f, "unknown list tag {tag}"),
            Self::TagMismatch { expected, found } => {
                write!(f, "tag mismatch: expected {expected}, found {found}")
            }
            Self::NegativeCount { count } => write!(f, "negative element count {count}"),
            Self::LengthMismatch { declared, expected } => {
                write!(
                    f,
                    "length mismatch: header declares {declared} bytes, layout needs {expected}"
                )
            }
            Self::MalformedElement { offset, detail } => {
                write!(f, "malformed element at offset {offset}: {detail}")
            }
            Self::TooLarge { bytes } => {
                write!(f, "block of {bytes} bytes exceeds the 32-bit length field")
            }
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CodecError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
