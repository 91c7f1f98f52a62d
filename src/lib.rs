//! # ordered-index-set
//!
//! An insertion-ordered set with positional indexing and order-aware set
//! algebra.
//!
//! ## Overview
//!
//! [`OrderedSet`](ordered::OrderedSet) behaves like a `Vec` that refuses
//! duplicates and keeps an index from each element to its position:
//!
//! - **Positional access**: `get_by_index` with negative indices, slices,
//!   strided selections and fancy indexing by a list of positions
//! - **Lookup by value**: `contains`, `index_of`, `index_of_many`
//! - **Set algebra**: union, intersection, difference and symmetric
//!   difference, each with a precise ordering rule
//! - **Persistence**: a plain snapshot type and optional `serde` support
//!
//! ## Feature Flags
//!
//! - `ordered`: the [`ordered`] module (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` for sets and snapshots
//! - `rayon`: parallel iteration
//! - `fxhash`: hash positions with `rustc-hash`
//! - `ahash`: hash positions with `ahash`
//! - `full`: `ordered`, `serde` and `rayon`
//!
//! ## Example
//!
//! ```rust
//! use ordered_index_set::prelude::*;
//!
//! let mut set: OrderedSet<&str> = ["red", "green", "blue"].into_iter().collect();
//! assert_eq!(set.index_of(&"green"), Ok(1));
//!
//! set.discard(&"red");
//! assert_eq!(set.index_of(&"green"), Ok(0));
//! assert_eq!(set.get_by_index(-1), Ok(&"blue"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use ordered_index_set::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "ordered")]
    pub use crate::ordered::*;
}

#[cfg(feature = "ordered")]
pub mod ordered;
