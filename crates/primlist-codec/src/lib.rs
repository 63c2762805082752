//! Tagged fixed-layout binary encoding for primlist lists.
//!
//! Every encoded list is one self-describing block. All multi-byte
//! fields are big-endian.
//!
//! # Format
//!
//! ```text
//! offset 0   i32  type tag        (see ListTag)
//! offset 4   i32  block length    (header + elements, in bytes)
//! offset 8   i32  element count N
//! offset 12  N × width bytes of elements, in list order
//! ```
//!
//! | tag | value | width | element |
//! |---|---|---|---|
//! | [`ListTag::Int32`] | 10 | 4 | i32 |
//! | [`ListTag::Float32`] | 11 | 4 | IEEE-754 f32 |
//! | [`ListTag::Bool`] | 12 | 1 | `1` true, `0` false |
//! | [`ListTag::PairInt32`] | 13 | 16 | nested pair block: tag 4, length 16, first, second |
//!
//! An empty list encodes to zero bytes, and decoding zero bytes leaves
//! the target untouched.
//!
//! # Architecture
//!
//! - [`Serializable`] is the encode/decode/length contract
//! - [`Element`] gives each serializable kind its tag and wire layout
//! - `List<T: Element>` implements [`Serializable`] statically
//! - [`TypedList`] picks the kind at run time and dispatches by `match`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod element;
pub mod error;
pub mod header;
pub mod serializable;
pub mod tag;
pub mod typed;
pub mod wire;

pub use element::Element;
pub use error::CodecError;
pub use header::Header;
pub use serializable::Serializable;
pub use tag::ListTag;
pub use typed::TypedList;

/// Size of the fixed block header in bytes.
pub const HEADER_LEN: usize = 12;
