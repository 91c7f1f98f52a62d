//! Insertion-ordered set with positional indexing.
//!
//! This module provides [`OrderedSet`], a mutable collection of unique
//! elements that remembers the order in which elements were first added.
//! Every element has a position, so the set can be indexed like a `Vec` and
//! searched like a `HashSet`.
//!
//! # Overview
//!
//! `OrderedSet` keeps two co-indexed views of the same data:
//! - an element sequence (`Vec<T>`) that defines iteration order and the
//!   meaning of "position `i`";
//! - a position map (`HashMap<T, usize>`) that answers membership and
//!   value-to-position lookups.
//!
//! The two views are kept mutually consistent after every mutation: every
//! element of the sequence has exactly one entry in the map, holding its
//! current position, and the map holds nothing else.
//!
//! New elements are always appended. Removing an element shifts every later
//! element down by one position, which costs O(n).
//!
//! # Time Complexity
//!
//! | Operation                      | Complexity        |
//! |--------------------------------|-------------------|
//! | `add`                          | O(1) expected     |
//! | `contains` / `index_of`        | O(1) expected     |
//! | `get_by_index`                 | O(1)              |
//! | `pop`                          | O(1) expected     |
//! | `discard` / `remove`           | O(n)              |
//! | `get_slice` / `get_by_indices` | O(k)              |
//! | `union`                        | O(n + m)          |
//! | `intersection` / `difference`  | O(n + m)          |
//! | `symmetric_difference`         | O(n + m)          |
//! | `retain` and `*_update`        | O(n + m)          |
//!
//! # Examples
//!
//! ```rust
//! use ordered_index_set::ordered::OrderedSet;
//!
//! let mut set: OrderedSet<i32> = [3, 1, 4, 1, 5].into_iter().collect();
//! assert_eq!(set.to_vec(), vec![3, 1, 4, 5]);
//!
//! // Positional access and lookup by value
//! assert_eq!(set.get_by_index(-1), Ok(&5));
//! assert_eq!(set.index_of(&4), Ok(2));
//!
//! // Adding an existing element returns its position
//! assert_eq!(set.add(1), 1);
//! assert_eq!(set.add(9), 4);
//!
//! // Order-aware set algebra
//! let union = set.union([vec![2, 0]]);
//! assert_eq!(union.to_vec(), vec![3, 1, 4, 5, 9, 2, 0]);
//! ```

use std::borrow::Borrow;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};
use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Bound, Index, RangeBounds, Sub,
    SubAssign,
};

#[cfg(feature = "rayon")]
use rayon::iter::{IntoParallelIterator, IntoParallelRefIterator};

use super::iter::{IntoIter, Iter};
use super::{DefaultHashBuilder, OrderedSetError, SetLike, SliceSelection};

/// An insertion-ordered collection of unique elements.
///
/// Elements keep the position at which they were first added. Adding an
/// element that is already present is a no-op that reports its existing
/// position. Removing an element moves every later element one position
/// towards the front.
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement `Clone`, `Eq`, and `Hash`.
/// * `S` - The hasher used by the position map.
///
/// # Examples
///
/// ```rust
/// use ordered_index_set::ordered::OrderedSet;
///
/// let mut set = OrderedSet::new();
/// assert_eq!(set.add("a"), 0);
/// assert_eq!(set.add("b"), 1);
/// assert_eq!(set.add("a"), 0);
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set[1], "b");
/// ```
#[derive(Clone)]
pub struct OrderedSet<T, S = DefaultHashBuilder> {
    items: Vec<T>,
    positions: HashMap<T, usize, S>,
}

static_assertions::assert_impl_all!(OrderedSet<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(OrderedSet<String>: Send, Sync, Clone, Default);

impl<T> OrderedSet<T, DefaultHashBuilder> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_index_set::ordered::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = OrderedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty set with room for at least `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<T, S> OrderedSet<T, S> {
    /// Creates an empty set that hashes its elements with `hasher`.
    #[inline]
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            items: Vec::new(),
            positions: HashMap::with_hasher(hasher),
        }
    }

    /// Creates an empty set with room for `capacity` elements that hashes its
    /// elements with `hasher`.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a reference to the position map's hasher.
    #[inline]
    pub fn hasher(&self) -> &S {
        self.positions.hasher()
    }

    /// Returns an iterator over the elements in stored order.
    ///
    /// Each call reads the current state of the set, so iterating again
    /// after a mutation reflects the mutation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_index_set::ordered::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [2, 0, 1].into_iter().collect();
    /// let elements: Vec<&i32> = set.iter().collect();
    /// assert_eq!(elements, vec![&2, &0, &1]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.items.iter(),
        }
    }

    /// Returns an iterator over the elements from last to first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_index_set::ordered::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [2, 0, 1].into_iter().collect();
    /// let elements: Vec<&i32> = set.reverse_iter().collect();
    /// assert_eq!(elements, vec![&1, &0, &2]);
    /// ```
    #[inline]
    pub fn reverse_iter(&self) -> std::iter::Rev<Iter<'_, T>> {
        self.iter().rev()
    }

    /// Returns the elements as a slice, in stored order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the set and returns its elements in stored order.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Returns the element at `position`, or `None` if it is out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&T> {
        self.items.get(position)
    }

    /// Returns the first element, or `None` if the set is empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns the last element, or `None` if the set is empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the element at `index`, counting from the end when `index`
    /// is negative.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedSetError::OutOfRange`] when `index` lies outside
    /// `[-len, len - 1]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_index_set::ordered::{OrderedSet, OrderedSetError};
    ///
    /// let set: OrderedSet<char> = "xyz".chars().collect();
    /// assert_eq!(set.get_by_index(0), Ok(&'x'));
    /// assert_eq!(set.get_by_index(-1), Ok(&'z'));
    /// assert_eq!(
    ///     set.get_by_index(-4),
    ///     Err(OrderedSetError::OutOfRange { index: -4, len: 3 })
    /// );
    /// ```
    pub fn get_by_index(&self, index: isize) -> Result<&T, OrderedSetError> {
        self.resolve_index(index).map(|position| &self.items[position])
    }

    /// Removes every element, leaving both views empty.
    pub fn clear(&mut self) {
        self.items.clear();
        self.positions.clear();
    }

    /// Maps a possibly negative index onto a position inside the sequence.
    fn resolve_index(&self, index: isize) -> Result<usize, OrderedSetError> {
        let len = self.items.len();
        let position = if index < 0 {
            len.checked_sub(index.unsigned_abs())
        } else {
            Some(index.unsigned_abs())
        };
        position
            .filter(|&position| position < len)
            .ok_or(OrderedSetError::OutOfRange { index, len })
    }
}

impl<T: Clone + Eq + Hash, S: BuildHasher> OrderedSet<T, S> {
    /// Returns `true` if the set contains `key`.
    ///
    /// Supports borrowed forms of the element type, so an
    /// `OrderedSet<String>` can be searched with a `&str`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_index_set::ordered::OrderedSet;
    ///
    /// let set: OrderedSet<String> = ["apple", "pear"].iter().map(ToString::to_string).collect();
    /// assert!(set.contains("pear"));
    /// assert!(!set.contains("plum"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.contains_key(key)
    }

    /// Returns the position of `key`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedSetError::KeyNotFound`] if `key` is not in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_index_set::ordered::{OrderedSet, OrderedSetError};
    ///
    /// let set: OrderedSet<i32> = [10, 20, 30].into_iter().collect();
    /// assert_eq!(set.index_of(&20), Ok(1));
    /// assert_eq!(set.index_of(&40), Err(OrderedSetError::KeyNotFound));
    /// ```
    pub fn index_of<Q>(&self, key: &Q) -> Result<usize, OrderedSetError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions
            .get(key)
            .copied()
            .ok_or(OrderedSetError::KeyNotFound)
    }

    /// Returns the position of every key in `keys`, in the order given.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedSetError::KeyNotFound`] as soon as one key is
    /// missing. No partial result is produced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_index_set::ordered::OrderedSet;
    ///
    /// let set: OrderedSet<&str> = ["a", "b", "c"].into_iter().collect();
    /// assert_eq!(set.index_of_many(&["c", "a"]), Ok(vec![2, 0]));
    /// assert!(set.index_of_many(&["a", "z"]).is_err());
    /// ```
    pub fn index_of_many<'k, Q, I>(&self, keys: I) -> Result<Vec<usize>, OrderedSetError>
    where
        I: IntoIterator<Item = &'k Q>,
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'k,
    {
        keys.into_iter().map(|key| self.index_of(key)).collect()
    }

    /// Adds `key` at the end of the set and returns its position.
    ///
    /// If `key` is already present nothing changes and its existing position
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_index_set::ordered::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// assert_eq!(set.add('q'), 0);
    /// assert_eq!(set.add('r'), 1);
    /// assert_eq!(set.add('q'), 0);
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn add(&mut self, key: T) -> usize {
        if let Some(&position) = self.positions.get(&key) {
            return position;
        }
        let position = self.items.len();
        self.positions.insert(key.clone(), position);
        self.items.push(key);
        position
    }

    /// Alias for [`add`](Self::add).
    #[inline]
    pub fn append(&mut self, key: T) -> usize {
        self.add(key)
    }

    /// Adds every element of `items` in order and returns the position of the
    /// last one processed, or `None` if `items` was empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_index_set::ordered::OrderedSet;
    ///
    /// let mut set: OrderedSet<i32> = [1, 2].into_iter().collect();
    /// assert_eq!(set.update([3, 1]), Some(0));
    /// assert_eq!(set.to_vec(), vec![1, 2, 3]);
    /// assert_eq!(set.update(Vec::new()), None);
    /// ```
    pub fn update<I>(&mut self, items: I) -> Option<usize>
    where
        I: IntoIterator<Item = T>,
    {
        let items = items.into_iter();
        self.reserve(items.size_hint().0);
        items.fold(None, |_, item| Some(self.add(item)))
    }

    /// Reserves room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.items.reserve(additional);
        self.positions.reserve(additional);
    }

    /// Removes `key` if present and reports whether it was.
    ///
    /// Every element after the removed one moves down by one position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_index_set::ordered::OrderedSet;
    ///
    /// let mut set: OrderedSet<i32> = [1, 2, 3, 4, 5].into_iter().collect();
    /// assert!(set.discard(&3));
    /// assert!(!set.discard(&3));
    /// assert_eq!(set.index_of(&4), Ok(2));
    /// assert_eq!(set.index_of(&5), Ok(3));
    /// ```
    pub fn discard<Q>(&mut self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove(key).is_ok()
    }

    /// Removes `key` and returns the stored element.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedSetError::KeyNotFound`] if `key` is not in the set;
    /// the set is left unchanged.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<T, OrderedSetError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let position = self
            .positions
            .remove(key)
            .ok_or(OrderedSetError::KeyNotFound)?;
        let removed = self.items.remove(position);
        self.renumber_from(position);
        log::trace!(
            "removed element at position {position}, shifted {} later elements",
            self.items.len() - position
        );
        self.debug_check_invariants();
        Ok(removed)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedSetError::Empty`] if the set has no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_index_set::ordered::{OrderedSet, OrderedSetError};
    ///
    /// let mut set: OrderedSet<i32> = [7, 8].into_iter().collect();
    /// assert_eq!(set.pop(), Ok(8));
    /// assert_eq!(set.pop(), Ok(7));
    /// assert_eq!(set.pop(), Err(OrderedSetError::Empty));
    /// ```
    pub fn pop(&mut self) -> Result<T, OrderedSetError> {
        let last = self.items.pop().ok_or(OrderedSetError::Empty)?;
        self.positions.remove(&last);
        self.debug_check_invariants();
        Ok(last)
    }

    /// Keeps only the elements for which `keep` returns `true`, preserving
    /// their relative order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_index_set::ordered::OrderedSet;
    ///
    /// let mut set: OrderedSet<i32> = (1..=6).collect();
    /// set.retain(|element| element % 2 == 0);
    /// assert_eq!(set.to_vec(), vec![2, 4, 6]);
    /// assert_eq!(set.index_of(&4), Ok(1));
    /// ```
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mask: Vec<bool> = self.items.iter().map(&mut keep).collect();
        self.retain_mask(&mask);
    }

    /// Returns a copy of the elements in stored order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }

    /// Returns `true` if every element of `self` is in `other`.
    ///
    /// Returns `false` without scanning when `self` is larger than `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_index_set::ordered::OrderedSet;
    /// use std::collections::HashSet;
    ///
    /// let set: OrderedSet<i32> = [1, 2, 3].into_iter().collect();
    /// let wider: HashSet<i32> = [1, 2, 3, 4].into_iter().collect();
    /// let narrower: HashSet<i32> = [1, 2].into_iter().collect();
    /// assert!(set.is_subset(&wider));
    /// assert!(!set.is_subset(&narrower));
    /// ```
    pub fn is_subset<O: SetLike<T>>(&self, other: &O) -> bool {
        if self.len() > other.len() {
            return false;
        }
        self.items.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if every element of `other` is in `self`.
    ///
    /// Returns `false` without scanning when `self` is smaller than `other`.
    pub fn is_superset<O: SetLike<T>>(&self, other: &O) -> bool {
        if self.len() < other.len() {
            return false;
        }
        other.elements().all(|element| self.contains(element))
    }

    /// Returns `true` if `self` and `other` share no elements.
    pub fn is_disjoint<O: SetLike<T>>(&self, other: &O) -> bool {
        if self.len() <= other.len() {
            self.items.iter().all(|element| !other.contains(element))
        } else {
            other.elements().all(|element| !self.contains(element))
        }
    }

    /// Compares against `other` as unordered sets: same members, order ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_index_set::ordered::OrderedSet;
    ///
    /// let left: OrderedSet<i32> = [1, 2].into_iter().collect();
    /// let right: OrderedSet<i32> = [2, 1].into_iter().collect();
    /// assert_ne!(left, right);
    /// assert!(left.set_eq(&right));
    /// ```
    pub fn set_eq<O: SetLike<T>>(&self, other: &O) -> bool {
        self.len() == other.len() && self.items.iter().all(|element| other.contains(element))
    }

    /// Removes, in place, every element that appears in any of `others`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_index_set::ordered::OrderedSet;
    ///
    /// let mut set: OrderedSet<i32> = [1, 2, 3, 4].into_iter().collect();
    /// set.difference_update([vec![2], vec![4, 9]]);
    /// assert_eq!(set.to_vec(), vec![1, 3]);
    /// ```
    pub fn difference_update<I, J>(&mut self, others: I)
    where
        I: IntoIterator<Item = J>,
        J: IntoIterator,
        J::Item: Borrow<T>,
    {
        let mut mask = vec![true; self.items.len()];
        for other in others {
            for element in other {
                if let Some(&position) = self.positions.get(element.borrow()) {
                    mask[position] = false;
                }
            }
        }
        self.retain_mask(&mask);
    }

    /// Removes, in place, every element that does not appear in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_index_set::ordered::OrderedSet;
    ///
    /// let mut set: OrderedSet<i32> = [1, 4, 3, 5, 7].into_iter().collect();
    /// set.intersection_update([9, 7, 1, 3, 2]);
    /// assert_eq!(set.to_vec(), vec![1, 3, 7]);
    /// ```
    pub fn intersection_update<J>(&mut self, other: J)
    where
        J: IntoIterator,
        J::Item: Borrow<T>,
    {
        let mut mask = vec![false; self.items.len()];
        self.mark_present(other, &mut mask);
        self.retain_mask(&mask);
    }

    /// Sets `mask[p]` for the position `p` of every element of `source`
    /// that is also in `self`.
    fn mark_present<J>(&self, source: J, mask: &mut [bool])
    where
        J: IntoIterator,
        J::Item: Borrow<T>,
    {
        for element in source {
            if let Some(&position) = self.positions.get(element.borrow()) {
                mask[position] = true;
            }
        }
    }

    /// Drops every element whose slot in `mask` is `false` and rebuilds the
    /// position map in a single pass.
    fn retain_mask(&mut self, mask: &[bool]) {
        debug_assert_eq!(mask.len(), self.items.len());
        if mask.iter().all(|&keep| keep) {
            return;
        }

        let before = self.items.len();
        let mut slots = mask.iter();
        self.items.retain(|_| slots.next().copied().unwrap_or(true));
        self.positions.retain(|_, position| mask[*position]);
        self.renumber_from(0);

        log::trace!("retained {} of {before} elements", self.items.len());
        self.debug_check_invariants();
    }

    /// Rewrites the stored position of every element from `start` onwards.
    fn renumber_from(&mut self, start: usize) {
        for (offset, element) in self.items[start..].iter().enumerate() {
            if let Some(position) = self.positions.get_mut(element) {
                *position = start + offset;
            }
        }
    }

    #[inline]
    fn debug_check_invariants(&self) {
        debug_assert_eq!(
            self.items.len(),
            self.positions.len(),
            "{}",
            POSITION_INVARIANT_PANIC_MESSAGE
        );
        debug_assert!(
            self.items
                .iter()
                .enumerate()
                .all(|(position, element)| self.positions.get(element) == Some(&position)),
            "{}",
            POSITION_INVARIANT_PANIC_MESSAGE
        );
    }
}

impl<T: Clone + Eq + Hash, S: BuildHasher + Clone> OrderedSet<T, S> {
    /// Returns a new set with the elements in `range`, in stored order.
    ///
    /// Bounds past the end are clamped, so a too-wide range yields the
    /// elements that exist. The full range `..` returns a copy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_index_set::ordered::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [10, 20, 30, 40].into_iter().collect();
    /// assert_eq!(set.get_slice(1..3).to_vec(), vec![20, 30]);
    /// assert_eq!(set.get_slice(2..).to_vec(), vec![30, 40]);
    /// assert_eq!(set.get_slice(..), set);
    /// ```
    #[must_use]
    pub fn get_slice<R: RangeBounds<usize>>(&self, range: R) -> Self {
        let len = self.items.len();
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(len);
        let end = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => len,
        }
        .min(len);

        if start >= end {
            return self.empty_like(0);
        }
        self.collect_like(self.items[start..end].iter().cloned())
    }

    /// Returns a new set with the elements picked by a `start:stop:step`
    /// selection, in the order the selection visits them.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedSetError::InvalidArgument`] if the step is zero.
    pub fn get_selection(&self, selection: SliceSelection) -> Result<Self, OrderedSetError> {
        if selection.is_full() {
            return Ok(self.clone());
        }
        let positions = selection.positions(self.items.len())?;
        Ok(self.collect_like(
            positions
                .into_iter()
                .map(|position| self.items[position].clone()),
        ))
    }

    /// Returns a new set with the elements at `indices`, in the order the
    /// indices are given. Repeated indices collapse to one element.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedSetError::OutOfRange`] for the first index outside
    /// `[-len, len - 1]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_index_set::ordered::OrderedSet;
    ///
    /// let set: OrderedSet<char> = "abcde".chars().collect();
    /// let picked = set.get_by_indices(&[3, 0, -1, 0]).unwrap();
    /// assert_eq!(picked.to_vec(), vec!['d', 'a', 'e']);
    /// ```
    pub fn get_by_indices(&self, indices: &[isize]) -> Result<Self, OrderedSetError> {
        let mut result = self.empty_like(indices.len());
        for &index in indices {
            let position = self.resolve_index(index)?;
            result.add(self.items[position].clone());
        }
        Ok(result)
    }

    /// Returns all elements of `self` followed by those of each of `others`,
    /// keeping the first appearance of every element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_index_set::ordered::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [3, 1, 4, 1, 5].into_iter().collect();
    /// let union = set.union([vec![1, 3], vec![2, 0]]);
    /// assert_eq!(union.to_vec(), vec![3, 1, 4, 5, 2, 0]);
    /// ```
    #[must_use]
    pub fn union<I, J>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = J>,
        J: IntoIterator,
        J::Item: Borrow<T>,
    {
        let mut result = self.clone();
        for other in others {
            result.update(other.into_iter().map(|element| element.borrow().clone()));
        }
        result
    }

    /// Returns the elements of `self` that appear in every one of `others`,
    /// in the order of `self`. With no `others`, returns a copy of `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_index_set::ordered::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [0, 1, 2, 3].into_iter().collect();
    /// let common = set.intersection([vec![3, 2, 1]]);
    /// assert_eq!(common.to_vec(), vec![1, 2, 3]);
    ///
    /// let narrowed = common.intersection([vec![2, 4, 5], vec![1, 2, 3, 4]]);
    /// assert_eq!(narrowed.to_vec(), vec![2]);
    /// ```
    #[must_use]
    pub fn intersection<I, J>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = J>,
        J: IntoIterator,
        J::Item: Borrow<T>,
    {
        // `hits[p]` counts how many of the sources seen so far contain the
        // element at position `p`; each source bumps it at most once.
        let mut hits = vec![0_usize; self.items.len()];
        let mut sources = 0_usize;
        for other in others {
            for element in other {
                if let Some(&position) = self.positions.get(element.borrow())
                    && hits[position] == sources
                {
                    hits[position] += 1;
                }
            }
            sources += 1;
        }

        if sources == 0 {
            return self.clone();
        }
        self.collect_like(
            self.items
                .iter()
                .zip(&hits)
                .filter(|&(_, &count)| count == sources)
                .map(|(element, _)| element.clone()),
        )
    }

    /// Returns the elements of `self` that appear in none of `others`, in the
    /// order of `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_index_set::ordered::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(set.difference([vec![2]]).to_vec(), vec![1, 3]);
    /// assert_eq!(set.difference([vec![1], vec![3]]).to_vec(), vec![2]);
    /// ```
    #[must_use]
    pub fn difference<I, J>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = J>,
        J: IntoIterator,
        J::Item: Borrow<T>,
    {
        let mut excluded = vec![false; self.items.len()];
        for other in others {
            self.mark_present(other, &mut excluded);
        }
        self.collect_like(
            self.items
                .iter()
                .zip(&excluded)
                .filter(|&(_, &excluded)| !excluded)
                .map(|(element, _)| element.clone()),
        )
    }

    /// Returns the elements in exactly one of `self` and `other`: first those
    /// only in `self` (in its order), then those only in `other` (in its
    /// order).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_index_set::ordered::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [1, 4, 3, 5, 7].into_iter().collect();
    /// let result = set.symmetric_difference([9, 7, 1, 3, 2]);
    /// assert_eq!(result.to_vec(), vec![4, 5, 9, 2]);
    /// ```
    #[must_use]
    pub fn symmetric_difference<J>(&self, other: J) -> Self
    where
        J: IntoIterator,
        J::Item: Borrow<T>,
    {
        let other = self.collect_like(other.into_iter().map(|element| element.borrow().clone()));
        let only_self = self.difference([&other]);
        let only_other = other.difference([self]);
        only_self.union([&only_other])
    }

    /// Replaces `self` with its symmetric difference with `other`.
    ///
    /// The elements only in `other` are computed before `self` changes, then
    /// every element of `other` is discarded from `self` and those elements are
    /// appended in `other`'s order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_index_set::ordered::OrderedSet;
    ///
    /// let mut set: OrderedSet<i32> = [1, 4, 3, 5, 7].into_iter().collect();
    /// set.symmetric_difference_update([9, 7, 1, 3, 2]);
    /// assert_eq!(set.to_vec(), vec![4, 5, 9, 2]);
    /// ```
    pub fn symmetric_difference_update<J>(&mut self, other: J)
    where
        J: IntoIterator,
        J::Item: Borrow<T>,
    {
        let other = self.collect_like(other.into_iter().map(|element| element.borrow().clone()));
        let only_other = other.difference([&*self]);
        self.difference_update([&other]);
        self.update(only_other);
    }

    /// Creates an empty set sharing this set's hasher.
    fn empty_like(&self, capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, self.positions.hasher().clone())
    }

    /// Builds a set from `elements` with this set's hasher.
    fn collect_like<I: IntoIterator<Item = T>>(&self, elements: I) -> Self {
        let mut result = self.empty_like(0);
        result.update(elements);
        result
    }
}

/// Message for debug assertions on the sequence/position-map bijection.
const POSITION_INVARIANT_PANIC_MESSAGE: &str =
    "position map must hold exactly the sequence's elements at their current positions";

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, S: Default> Default for OrderedSet<T, S> {
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T: std::fmt::Debug, S> std::fmt::Debug for OrderedSet<T, S> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.items.is_empty() {
            return formatter.write_str("OrderedSet()");
        }
        formatter.write_str("OrderedSet(")?;
        formatter.debug_list().entries(&self.items).finish()?;
        formatter.write_str(")")
    }
}

/// Two ordered sets are equal only if they hold the same elements in the
/// same order. Use [`OrderedSet::set_eq`] to ignore order.
impl<T: PartialEq, S, S2> PartialEq<OrderedSet<T, S2>> for OrderedSet<T, S> {
    fn eq(&self, other: &OrderedSet<T, S2>) -> bool {
        self.items == other.items
    }
}

impl<T: Eq, S> Eq for OrderedSet<T, S> {}

/// Comparison with a plain `HashSet` ignores order.
impl<T, S, S2> PartialEq<HashSet<T, S2>> for OrderedSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher,
    S2: BuildHasher,
{
    fn eq(&self, other: &HashSet<T, S2>) -> bool {
        self.set_eq(other)
    }
}

/// Comparison with a plain `BTreeSet` ignores order.
impl<T, S> PartialEq<BTreeSet<T>> for OrderedSet<T, S>
where
    T: Clone + Eq + Hash + Ord,
    S: BuildHasher,
{
    fn eq(&self, other: &BTreeSet<T>) -> bool {
        self.set_eq(other)
    }
}

/// Comparison from the `HashSet` side ignores order as well.
impl<T, S, S2> PartialEq<OrderedSet<T, S>> for HashSet<T, S2>
where
    T: Clone + Eq + Hash,
    S: BuildHasher,
    S2: BuildHasher,
{
    fn eq(&self, other: &OrderedSet<T, S>) -> bool {
        other.set_eq(self)
    }
}

/// Comparison from the `BTreeSet` side ignores order as well.
impl<T, S> PartialEq<OrderedSet<T, S>> for BTreeSet<T>
where
    T: Clone + Eq + Hash + Ord,
    S: BuildHasher,
{
    fn eq(&self, other: &OrderedSet<T, S>) -> bool {
        other.set_eq(self)
    }
}

impl<T, S> Index<usize> for OrderedSet<T, S> {
    type Output = T;

    #[inline]
    fn index(&self, position: usize) -> &Self::Output {
        &self.items[position]
    }
}

impl<T, S> FromIterator<T> for OrderedSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.update(iter);
        set
    }
}

impl<T, S> Extend<T> for OrderedSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.update(iter);
    }
}

impl<'a, T, S> Extend<&'a T> for OrderedSet<T, S>
where
    T: Copy + Eq + Hash + 'a,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.update(iter.into_iter().copied());
    }
}

impl<T, S, const N: usize> From<[T; N]> for OrderedSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Default,
{
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T, S> From<Vec<T>> for OrderedSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Default,
{
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T, S> IntoIterator for OrderedSet<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.items.into_iter(),
        }
    }
}

impl<'a, T, S> IntoIterator for &'a OrderedSet<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Operators
// =============================================================================

impl<T: Clone + Eq + Hash, S: BuildHasher + Clone> BitOr for &OrderedSet<T, S> {
    type Output = OrderedSet<T, S>;

    fn bitor(self, other: Self) -> Self::Output {
        self.union([other])
    }
}

impl<T: Clone + Eq + Hash, S: BuildHasher + Clone> BitAnd for &OrderedSet<T, S> {
    type Output = OrderedSet<T, S>;

    fn bitand(self, other: Self) -> Self::Output {
        self.intersection([other])
    }
}

impl<T: Clone + Eq + Hash, S: BuildHasher + Clone> Sub for &OrderedSet<T, S> {
    type Output = OrderedSet<T, S>;

    fn sub(self, other: Self) -> Self::Output {
        self.difference([other])
    }
}

impl<T: Clone + Eq + Hash, S: BuildHasher + Clone> BitXor for &OrderedSet<T, S> {
    type Output = OrderedSet<T, S>;

    fn bitxor(self, other: Self) -> Self::Output {
        self.symmetric_difference(other)
    }
}

impl<T, S> BitOrAssign<&OrderedSet<T, S>> for OrderedSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher,
{
    fn bitor_assign(&mut self, other: &Self) {
        self.update(other.iter().cloned());
    }
}

impl<T, S> BitAndAssign<&OrderedSet<T, S>> for OrderedSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher,
{
    fn bitand_assign(&mut self, other: &Self) {
        self.intersection_update(other);
    }
}

impl<T, S> SubAssign<&OrderedSet<T, S>> for OrderedSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher,
{
    fn sub_assign(&mut self, other: &Self) {
        self.difference_update([other]);
    }
}

impl<T, S> BitXorAssign<&OrderedSet<T, S>> for OrderedSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Clone,
{
    fn bitxor_assign(&mut self, other: &Self) {
        self.symmetric_difference_update(other);
    }
}

// =============================================================================
// Rayon Support
// =============================================================================

#[cfg(feature = "rayon")]
impl<T: Send, S> IntoParallelIterator for OrderedSet<T, S> {
    type Iter = super::iter::IntoParIter<T>;
    type Item = T;

    fn into_par_iter(self) -> Self::Iter {
        self.items.into_par_iter()
    }
}

#[cfg(feature = "rayon")]
impl<'a, T: Sync, S> IntoParallelIterator for &'a OrderedSet<T, S> {
    type Iter = super::iter::ParIter<'a, T>;
    type Item = &'a T;

    fn into_par_iter(self) -> Self::Iter {
        self.items.par_iter()
    }
}

// =============================================================================
// Tests
// =============================================================================
