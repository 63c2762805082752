//! primlist: growable primitive lists with a compact tagged binary encoding.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the primlist sub-crates. For most users, adding `primlist` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use primlist::prelude::*;
//!
//! let mut scores: List<i32> = List::new();
//! scores.push(3);
//! scores.push(1);
//! scores.push(2);
//! scores.sort();
//! assert_eq!(scores.as_slice(), &[1, 2, 3]);
//!
//! let bytes = scores.to_bytes().unwrap();
//! assert_eq!(bytes.len(), scores.bytes_length());
//!
//! let mut restored = List::<i32>::new();
//! restored.from_bytes(&bytes).unwrap();
//! assert_eq!(restored, scores);
//!
//! // Or let the header pick the element kind.
//! let dynamic = TypedList::decode(&bytes).unwrap();
//! assert_eq!(dynamic.tag(), ListTag::Int32);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`list`] | `primlist-core` | `List`, `GrowthPolicy`, `Pair`, list errors |
//! | [`codec`] | `primlist-codec` | `Serializable`, tags, header, `TypedList`, codec errors |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The list container and its growth policy (`primlist-core`).
pub use primlist_core as list;

/// Binary encoding of lists (`primlist-codec`).
///
/// [`codec::Serializable`] is implemented for every `List<T>` whose
/// element kind implements [`codec::Element`], and for
/// [`codec::TypedList`].
pub use primlist_codec as codec;

/// Common imports for typical primlist usage.
///
/// ```rust
/// use primlist::prelude::*;
/// ```
pub mod prelude {
    // Container
    pub use primlist_core::{GrowthPolicy, List, NaturalOrd, Pair};

    // Codec
    pub use primlist_codec::{Element, Header, ListTag, Serializable, TypedList};

    // Errors
    pub use primlist_codec::CodecError;
    pub use primlist_core::{ConfigError, ListError};
}
