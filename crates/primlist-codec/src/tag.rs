//! Type tags identifying the element kind of an encoded block.

use std::fmt;

/// Element kind of an encoded list, stored as the first header field.
///
/// The discriminants are the on-wire values and must never change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ListTag {
    /// Signed 32-bit integers, 4 bytes each.
    Int32 = 10,
    /// IEEE-754 single-precision floats, 4 bytes each.
    Float32 = 11,
    /// Booleans, 1 byte each (1 = true).
    Bool = 12,
    /// Pairs of signed 32-bit integers, 16 bytes each.
    PairInt32 = 13,
}

impl ListTag {
    /// All known tags, in discriminant order.
    pub const ALL: [ListTag; 4] = [
        ListTag::Int32,
        ListTag::Float32,
        ListTag::Bool,
        ListTag::PairInt32,
    ];

    /// The on-wire value of this tag.
    pub const fn raw(self) -> i32 {
        self as i32
    }

    /// Look up a tag by its on-wire value.
    pub fn from_raw(raw: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.raw() == raw)
    }

    /// Encoded size of one element of this kind, in bytes.
    pub const fn element_width(self) -> usize {
        match self {
            Self::Int32 | Self::Float32 => 4,
            Self::Bool => 1,
            Self::PairInt32 => 16,
        }
    }

    /// Short lowercase name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int32 => "list<i32>",
            Self::Float32 => "list<f32>",
            Self::Bool => "list<bool>",
            Self::PairInt32 => "list<pair<i32>>",
        }
    }
}

impl fmt::Display for ListTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (tag {})", self.name(), self.raw())
    }
}
