//! The serialize/deserialize contract and its implementation for [`List`].

use std::io::{Read, Write};

use primlist_core::List;

use crate::element::Element;
use crate::error::CodecError;
use crate::header::Header;
use crate::HEADER_LEN;

/// A value with a self-describing binary block encoding.
///
/// `to_bytes` and `from_bytes` are inverses. An empty value encodes to
/// zero bytes, and decoding zero bytes is a successful no-op that leaves
/// the target untouched.
pub trait Serializable {
    /// Encode the current contents as one block.
    fn to_bytes(&self) -> Result<Vec<u8>, CodecError>;

    /// Replace the contents with the block at the start of `bytes`.
    ///
    /// Bytes past the header's declared length are ignored. On error
    /// the target is left unchanged.
    fn from_bytes(&mut self, bytes: &[u8]) -> Result<(), CodecError>;

    /// Length in bytes of what [`to_bytes`](Self::to_bytes) would produce.
    fn bytes_length(&self) -> usize;

    /// Encode and write the block to `w`.
    fn write_to(&self, w: &mut dyn Write) -> Result<(), CodecError> {
        w.write_all(&self.to_bytes()?)?;
        Ok(())
    }

    /// Read exactly one block from `r` and decode it into `self`.
    ///
    /// Returns `Ok(false)` on clean EOF (no bytes available), leaving
    /// `self` unchanged. A partial header is an error.
    fn read_from(&mut self, r: &mut dyn Read) -> Result<bool, CodecError> {
        let mut block = vec![0u8; HEADER_LEN];
        let mut filled = 0;
        while filled < HEADER_LEN {
            match r.read(&mut block[filled..]) {
                Ok(0) if filled == 0 => return Ok(false),
                Ok(0) => {
                    return Err(CodecError::Truncated {
                        needed: HEADER_LEN,
                        available: filled,
                    })
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(CodecError::Io(e)),
            }
        }
        let header = Header::parse(&block)?;
        // Grow with the data actually read rather than trusting the header.
        let remaining = (header.total_len - HEADER_LEN) as u64;
        Read::take(&mut *r, remaining).read_to_end(&mut block)?;
        if block.len() < header.total_len {
            return Err(CodecError::Truncated {
                needed: header.total_len,
                available: block.len(),
            });
        }
        self.from_bytes(&block)?;
        Ok(true)
    }
}

impl<T: Element> Serializable for List<T> {
    fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        if self.is_empty() {
            return Ok(Vec::new());
        }
        let header = Header::for_elements(T::TAG, self.len()).ok_or(CodecError::TooLarge {
            bytes: usize::MAX,
        })?;
        let mut buf = Vec::with_capacity(header.total_len);
        header.write(&mut buf)?;
        for value in self {
            value.encode(&mut buf);
        }
        debug_assert_eq!(buf.len(), header.total_len);
        Ok(buf)
    }

    fn from_bytes(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        if bytes.is_empty() {
            return Ok(());
        }
        let tag = T::TAG;
        match decode_elements::<T>(bytes) {
            Ok(items) => {
                tracing::debug!(tag = %tag, count = items.len(), "decoded list block");
                self.replace(items);
                Ok(())
            }
            Err(e) => {
                tracing::debug!(tag = %tag, error = %e, "rejected list block");
                Err(e)
            }
        }
    }

    fn bytes_length(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.len()
            .saturating_mul(T::WIDTH)
            .saturating_add(HEADER_LEN)
    }
}

/// Validate the block at the start of `bytes` and decode its elements.
fn decode_elements<T: Element>(bytes: &[u8]) -> Result<Vec<T>, CodecError> {
    let header = Header::parse(bytes)?;
    if header.tag != T::TAG {
        return Err(CodecError::TagMismatch {
            expected: T::TAG,
            found: header.tag,
        });
    }
    if bytes.len() < header.total_len {
        return Err(CodecError::Truncated {
            needed: header.total_len,
            available: bytes.len(),
        });
    }
    (0..header.count)
        .map(|i| T::decode(bytes, HEADER_LEN + i * T::WIDTH))
        .collect()
}
