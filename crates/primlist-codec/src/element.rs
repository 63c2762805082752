//! Per-kind element encodings.
//!
//! [`Element`] is sealed: only `i32`, `f32`, `bool`, and `Pair<i32>`
//! have a wire layout, so a `List<T>` of any other kind simply does not
//! implement [`Serializable`](crate::Serializable).

use primlist_core::Pair;

use crate::error::CodecError;
use crate::tag::ListTag;
use crate::wire::{get_f32_be, get_i32_be, get_u8, put_f32_be, put_i32_be, put_u8};

/// Tag of the nested block each pair element is written as.
pub const PAIR_BLOCK_TAG: i32 = 4;

/// Byte length of one nested pair block (tag, length, first, second).
pub const PAIR_BLOCK_LEN: i32 = 16;

mod sealed {
    pub trait Sealed {}

    impl Sealed for i32 {}
    impl Sealed for f32 {}
    impl Sealed for bool {}
    impl Sealed for primlist_core::Pair<i32> {}
}

/// An element kind with a fixed-width wire encoding.
pub trait Element: Copy + Default + sealed::Sealed {
    /// Header tag of a list of this kind.
    const TAG: ListTag;

    /// Encoded width of one element in bytes.
    const WIDTH: usize = Self::TAG.element_width();

    /// Append this element's encoding to `buf`.
    fn encode(&self, buf: &mut Vec<u8>);

    /// Decode one element starting at `offset` within `data`.
    fn decode(data: &[u8], offset: usize) -> Result<Self, CodecError>;
}

impl Element for i32 {
    const TAG: ListTag = ListTag::Int32;

    fn encode(&self, buf: &mut Vec<u8>) {
        put_i32_be(buf, *self);
    }

    fn decode(data: &[u8], offset: usize) -> Result<Self, CodecError> {
        get_i32_be(data, offset)
    }
}

impl Element for f32 {
    const TAG: ListTag = ListTag::Float32;

    fn encode(&self, buf: &mut Vec<u8>) {
        put_f32_be(buf, *self);
    }

    fn decode(data: &[u8], offset: usize) -> Result<Self, CodecError> {
        get_f32_be(data, offset)
    }
}

impl Element for bool {
    const TAG: ListTag = ListTag::Bool;

    fn encode(&self, buf: &mut Vec<u8>) {
        put_u8(buf, u8::from(*self));
    }

    /// Only `1` decodes as `true`; every other byte is `false`.
    fn decode(data: &[u8], offset: usize) -> Result<Self, CodecError> {
        Ok(get_u8(data, offset)? == 1)
    }
}

impl Element for Pair<i32> {
    const TAG: ListTag = ListTag::PairInt32;

    fn encode(&self, buf: &mut Vec<u8>) {
        put_i32_be(buf, PAIR_BLOCK_TAG);
        put_i32_be(buf, PAIR_BLOCK_LEN);
        put_i32_be(buf, self.first);
        put_i32_be(buf, self.second);
    }

    fn decode(data: &[u8], offset: usize) -> Result<Self, CodecError> {
        let tag = get_i32_be(data, offset)?;
        if tag != PAIR_BLOCK_TAG {
            return Err(CodecError::MalformedElement {
                offset,
                detail: format!("pair tag {tag}, expected {PAIR_BLOCK_TAG}"),
            });
        }
        let len = get_i32_be(data, offset + 4)?;
        if len != PAIR_BLOCK_LEN {
            return Err(CodecError::MalformedElement {
                offset,
                detail: format!("pair length {len}, expected {PAIR_BLOCK_LEN}"),
            });
        }
        Ok(Pair::new(
            get_i32_be(data, offset + 8)?,
            get_i32_be(data, offset + 12)?,
        ))
    }
}
