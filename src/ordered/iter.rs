//! Iterators over an [`OrderedSet`](super::OrderedSet).
//!
//! Both iterators walk the element sequence in stored order and support
//! reverse traversal through [`DoubleEndedIterator`].

use std::iter::FusedIterator;

/// Iterator over references to the elements of an `OrderedSet`, in order.
///
/// Created by [`OrderedSet::iter`](super::OrderedSet::iter). Holding this
/// iterator borrows the set, so the set cannot be mutated while iterating.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    pub(super) inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.inner.nth(n)
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over the elements of an `OrderedSet`, in order.
#[derive(Debug)]
pub struct IntoIter<T> {
    pub(super) inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

// =============================================================================
// Rayon Support
// =============================================================================

/// Parallel iterator over references to the elements of an `OrderedSet`.
#[cfg(feature = "rayon")]
pub type ParIter<'a, T> = rayon::slice::Iter<'a, T>;

/// Parallel owning iterator over the elements of an `OrderedSet`.
#[cfg(feature = "rayon")]
pub type IntoParIter<T> = rayon::vec::IntoIter<T>;

#[cfg(test)]
mod tests {
    use super::super::OrderedSet;
    use rstest::rstest;

    #[rstest]
    fn test_iter_is_double_ended_and_exact() {
        let set: OrderedSet<i32> = [5, 6, 7, 8].into_iter().collect();
        let mut iter = set.iter();

        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(&5));
        assert_eq!(iter.next_back(), Some(&8));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.collect::<Vec<_>>(), vec![&6, &7]);
    }

    #[rstest]
    fn test_into_iter_yields_owned_in_order() {
        let set: OrderedSet<String> = ["b", "a", "c"].iter().map(ToString::to_string).collect();
        let owned: Vec<String> = set.into_iter().collect();
        assert_eq!(owned, vec!["b", "a", "c"]);
    }

    #[rstest]
    fn test_into_iter_reversed() {
        let set: OrderedSet<i32> = [1, 2, 3].into_iter().collect();
        let reversed: Vec<i32> = set.into_iter().rev().collect();
        assert_eq!(reversed, vec![3, 2, 1]);
    }
}
