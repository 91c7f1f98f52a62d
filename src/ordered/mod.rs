//! Insertion-ordered sets with positional indexing.
//!
//! This module provides [`OrderedSet`], a set that behaves like an array with
//! a uniqueness guarantee and an index:
//!
//! - [`OrderedSet`]: the set itself, with order-aware set algebra
//! - [`OrderedSetError`]: failures reported by fallible operations
//! - [`SliceSelection`]: `start:stop:step` positional selections
//! - [`SetLike`]: the order-insensitive view used for set comparisons
//! - [`OrderedSetState`]: a plain snapshot used for persistence
//!
//! # Ordering Rules
//!
//! | Operation              | Result order                                           |
//! |------------------------|--------------------------------------------------------|
//! | `union`                | first appearance across `self` then each other         |
//! | `intersection`         | order of `self`                                        |
//! | `difference`           | order of `self`                                        |
//! | `symmetric_difference` | `self`-only elements, then `other`-only elements       |
//! | `==` with `OrderedSet` | order-sensitive                                        |
//! | `==` with plain sets   | order-insensitive                                      |
//!
//! # Hashing
//!
//! The position map hashes with [`DefaultHashBuilder`], which is selected by
//! feature flags:
//!
//! - default: `std::collections::hash_map::RandomState`
//! - `fxhash`: `rustc_hash::FxBuildHasher`
//! - `ahash`: `ahash::RandomState` (ignored when `fxhash` is also enabled)
//!
//! Any other hasher can be supplied through [`OrderedSet::with_hasher`].
//!
//! # Examples
//!
//! ```rust
//! use ordered_index_set::ordered::OrderedSet;
//! use std::collections::HashSet;
//!
//! let left: OrderedSet<i32> = [1, 2].into_iter().collect();
//! let right: OrderedSet<i32> = [2, 1].into_iter().collect();
//! let plain: HashSet<i32> = [2, 1].into_iter().collect();
//!
//! assert_ne!(left, right);
//! assert_eq!(left, plain);
//! ```

mod error;
mod iter;
mod selection;
mod set;
mod set_like;
mod state;

pub use error::OrderedSetError;
pub use iter::IntoIter;
pub use iter::Iter;
pub use selection::SliceSelection;
pub use set::OrderedSet;
pub use set_like::SetLike;
pub use state::OrderedSetState;

#[cfg(feature = "rayon")]
pub use iter::IntoParIter;
#[cfg(feature = "rayon")]
pub use iter::ParIter;

/// Hasher used by [`OrderedSet`] when none is given explicitly.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// Hasher used by [`OrderedSet`] when none is given explicitly.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// Hasher used by [`OrderedSet`] when none is given explicitly.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;
