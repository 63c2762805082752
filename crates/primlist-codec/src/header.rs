//! The fixed 12-byte block header.

use crate::error::CodecError;
use crate::tag::ListTag;
use crate::wire::{get_i32_be, put_i32_be};
use crate::HEADER_LEN;

/// Decoded block header: tag, total byte length, element count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    /// Element kind of the block.
    pub tag: ListTag,
    /// Byte length of the whole block, header included.
    pub total_len: usize,
    /// Number of encoded elements.
    pub count: usize,
}

impl Header {
    /// Header for `count` elements of kind `tag`.
    ///
    /// Returns `None` if the block length overflows `usize`.
    pub fn for_elements(tag: ListTag, count: usize) -> Option<Self> {
        let total_len = count
            .checked_mul(tag.element_width())?
            .checked_add(HEADER_LEN)?;
        Some(Self {
            tag,
            total_len,
            count,
        })
    }

    /// Parse and validate the header at the start of `bytes`.
    ///
    /// Checks the tag, the count's sign, and that the declared length
    /// matches the layout the tag and count imply. Does not check that
    /// the element bytes are present.
    pub fn parse(bytes: &[u8]) -> Result<Self, CodecError> {
        if bytes.len() < HEADER_LEN {
            return Err(CodecError::Truncated {
                needed: HEADER_LEN,
                available: bytes.len(),
            });
        }
        let raw_tag = get_i32_be(bytes, 0)?;
        let tag = ListTag::from_raw(raw_tag).ok_or(CodecError::UnknownTag { tag: raw_tag })?;
        let declared = get_i32_be(bytes, 4)?;
        let raw_count = get_i32_be(bytes, 8)?;
        let count =
            usize::try_from(raw_count).map_err(|_| CodecError::NegativeCount { count: raw_count })?;

        // i32 count times a 16-byte width cannot overflow a 64-bit usize.
        let header = Self::for_elements(tag, count).ok_or(CodecError::LengthMismatch {
            declared,
            expected: usize::MAX,
        })?;
        if usize::try_from(declared).ok() != Some(header.total_len) {
            return Err(CodecError::LengthMismatch {
                declared,
                expected: header.total_len,
            });
        }
        Ok(header)
    }

    /// Append the encoded header to `buf`.
    pub fn write(&self, buf: &mut Vec<u8>) -> Result<(), CodecError> {
        let too_large = || CodecError::TooLarge {
            bytes: self.total_len,
        };
        let total = i32::try_from(self.total_len).map_err(|_| too_large())?;
        let count = i32::try_from(self.count).map_err(|_| too_large())?;
        put_i32_be(buf, self.tag.raw());
        put_i32_be(buf, total);
        put_i32_be(buf, count);
        Ok(())
    }
}
