//! A list whose element kind is chosen at run time.
//!
//! [`TypedList`] is the dynamic counterpart of `List<T: Element>`: the
//! variant is picked at construction (or from a block header) and every
//! codec operation is a `match` over it.

use primlist_core::{List, Pair};

use crate::error::CodecError;
use crate::header::Header;
use crate::serializable::Serializable;
use crate::tag::ListTag;

/// A list of one of the four serializable element kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum TypedList {
    /// Signed 32-bit integers.
    Int(List<i32>),
    /// Single-precision floats.
    Float(List<f32>),
    /// Booleans.
    Bool(List<bool>),
    /// Pairs of signed 32-bit integers.
    Pair(List<Pair<i32>>),
}

macro_rules! dispatch {
    ($self:expr, $list:ident => $body:expr) => {
        match $self {
            TypedList::Int($list) => $body,
            TypedList::Float($list) => $body,
            TypedList::Bool($list) => $body,
            TypedList::Pair($list) => $body,
        }
    };
}

impl TypedList {
    /// An empty list of the kind named by `tag`.
    pub fn new(tag: ListTag) -> Self {
        match tag {
            ListTag::Int32 => Self::Int(List::new()),
            ListTag::Float32 => Self::Float(List::new()),
            ListTag::Bool => Self::Bool(List::new()),
            ListTag::PairInt32 => Self::Pair(List::new()),
        }
    }

    /// Decode a block, choosing the variant from its header tag.
    ///
    /// Unlike [`Serializable::from_bytes`], empty input is an error here:
    /// there is no tag to choose a variant from.
    pub fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        let header = Header::parse(bytes)?;
        let mut list = Self::new(header.tag);
        list.from_bytes(bytes)?;
        Ok(list)
    }

    /// The element kind of this list.
    pub fn tag(&self) -> ListTag {
        match self {
            Self::Int(_) => ListTag::Int32,
            Self::Float(_) => ListTag::Float32,
            Self::Bool(_) => ListTag::Bool,
            Self::Pair(_) => ListTag::PairInt32,
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        dispatch!(self, list => list.len())
    }

    /// `true` if the list holds no live elements.
    pub fn is_empty(&self) -> bool {
        dispatch!(self, list => list.is_empty())
    }

    /// Logically clear the list, keeping its kind and capacity.
    pub fn reset(&mut self) {
        dispatch!(self, list => list.reset())
    }
}

impl Serializable for TypedList {
    fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        dispatch!(self, list => list.to_bytes())
    }

    fn from_bytes(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        dispatch!(self, list => list.from_bytes(bytes))
    }

    fn bytes_length(&self) -> usize {
        dispatch!(self, list => list.bytes_length())
    }
}

impl From<List<i32>> for TypedList {
    fn from(list: List<i32>) -> Self {
        Self::Int(list)
    }
}

impl From<List<f32>> for TypedList {
    fn from(list: List<f32>) -> Self {
        Self::Float(list)
    }
}

impl From<List<bool>> for TypedList {
    fn from(list: List<bool>) -> Self {
        Self::Bool(list)
    }
}

impl From<List<Pair<i32>>> for TypedList {
    fn from(list: List<Pair<i32>>) -> Self {
        Self::Pair(list)
    }
}
