//! Growable primitive-element lists for the primlist workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the [`List`] container, its [`GrowthPolicy`], the [`Pair`] element
//! type, and the [`NaturalOrd`] ordering used by [`List::sort`].
//!
//! # Storage model
//!
//! ```text
//! storage: [ e0 | e1 | ... | e(len-1) | stale | ... | stale ]
//!           └──────── live ─────────┘ └──── spare capacity ───┘
//! ```
//!
//! Only the live range is ever observable. `sort`, `replace`, and
//! decoding (in `primlist-codec`) reset capacity to exactly `len`;
//! every other operation leaves capacity unchanged or grows it.
//!
//! This crate contains `unsafe` only in the two unchecked accessors.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod list;
pub mod order;
pub mod pair;

pub use config::GrowthPolicy;
pub use error::{ConfigError, ListError};
pub use list::List;
pub use order::NaturalOrd;
pub use pair::Pair;
