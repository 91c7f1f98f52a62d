//! Order-insensitive view over set collections.
//!
//! [`SetLike`] is the seam used when an [`OrderedSet`] is compared against
//! another collection as a plain set: equality with unordered sets, and the
//! subset, superset and disjointness checks. Implementations must report
//! membership and a length that counts each distinct element once.

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

use super::OrderedSet;

/// A collection of distinct elements that can answer membership queries.
///
/// # Examples
///
/// ```rust
/// use ordered_index_set::ordered::{OrderedSet, SetLike};
/// use std::collections::HashSet;
///
/// let plain: HashSet<i32> = [3, 1, 2].into_iter().collect();
/// assert_eq!(SetLike::len(&plain), 3);
/// assert!(SetLike::contains(&plain, &1));
///
/// let ordered: OrderedSet<i32> = [1, 2].into_iter().collect();
/// assert!(ordered.is_subset(&plain));
/// ```
pub trait SetLike<T: ?Sized> {
    /// Returns the number of distinct elements.
    fn len(&self) -> usize;

    /// Returns `true` if `element` is a member.
    fn contains(&self, element: &T) -> bool;

    /// Returns an iterator over the members, in no particular order.
    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a;

    /// Returns `true` if there are no members.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Eq + Hash, S: BuildHasher> SetLike<T> for HashSet<T, S> {
    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn contains(&self, element: &T) -> bool {
        Self::contains(self, element)
    }

    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}

impl<T: Ord> SetLike<T> for BTreeSet<T> {
    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn contains(&self, element: &T) -> bool {
        Self::contains(self, element)
    }

    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}

impl<T: Clone + Eq + Hash, S: BuildHasher> SetLike<T> for OrderedSet<T, S> {
    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn contains(&self, element: &T) -> bool {
        Self::contains(self, element)
    }

    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}
