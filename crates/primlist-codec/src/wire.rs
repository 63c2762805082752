//! Big-endian primitive readers and writers.
//!
//! Writers append to a `Vec<u8>`. Readers take a byte slice and an
//! absolute offset and report [`CodecError::Truncated`] instead of
//! panicking when the slice is too short.

use crate::error::CodecError;

// ── Primitive writers ───────────────────────────────────────────

/// Append a single byte.
#[inline]
pub fn put_u8(buf: &mut Vec<u8>, v: u8) {
    buf.push(v);
}

/// Append a big-endian i32.
#[inline]
pub fn put_i32_be(buf: &mut Vec<u8>, v: i32) {
    buf.extend_from_slice(&v.to_be_bytes());
}

/// Append a big-endian f32.
#[inline]
pub fn put_f32_be(buf: &mut Vec<u8>, v: f32) {
    buf.extend_from_slice(&v.to_be_bytes());
}

// ── Primitive readers ───────────────────────────────────────────

/// Borrow `N` bytes at `offset`.
#[inline]
fn take<const N: usize>(data: &[u8], offset: usize) -> Result<[u8; N], CodecError> {
    let end = offset.checked_add(N).ok_or(CodecError::Truncated {
        needed: usize::MAX,
        available: data.len(),
    })?;
    match data.get(offset..end) {
        Some(bytes) => {
            let mut out = [0u8; N];
            out.copy_from_slice(bytes);
            Ok(out)
        }
        None => Err(CodecError::Truncated {
            needed: end,
            available: data.len(),
        }),
    }
}

/// Read the byte at `offset`.
#[inline]
pub fn get_u8(data: &[u8], offset: usize) -> Result<u8, CodecError> {
    Ok(take::<1>(data, offset)?[0])
}

/// Read a big-endian i32 at `offset`.
#[inline]
pub fn get_i32_be(data: &[u8], offset: usize) -> Result<i32, CodecError> {
    take::<4>(data, offset).map(i32::from_be_bytes)
}

/// Read a big-endian f32 at `offset`.
#[inline]
pub fn get_f32_be(data: &[u8], offset: usize) -> Result<f32, CodecError> {
    take::<4>(data, offset).map(f32::from_be_bytes)
}
