//! Persistence state for [`OrderedSet`].
//!
//! [`OrderedSetState`] is a plain data snapshot of a set: the elements in
//! order, or an explicit marker for the empty set. Converting to and from it
//! is pure data-in/data-out and never touches a serializer, so hosts whose
//! storage layer cannot represent an empty sequence can still round-trip an
//! empty set.
//!
//! With the `serde` feature, `OrderedSet` itself serializes as a plain
//! sequence and deserializes by replaying [`OrderedSet::add`] over it, and
//! `OrderedSetState` serializes as `null` for the empty marker.

use std::hash::{BuildHasher, Hash};

use super::OrderedSet;

/// A snapshot of an [`OrderedSet`] suitable for persistence.
///
/// # Examples
///
/// ```rust
/// use ordered_index_set::ordered::{OrderedSet, OrderedSetState};
///
/// let empty: OrderedSet<i32> = OrderedSet::new();
/// assert_eq!(empty.to_state(), OrderedSetState::Empty);
///
/// let set: OrderedSet<i32> = [3, 1, 2].into_iter().collect();
/// let state = set.to_state();
/// assert_eq!(state, OrderedSetState::Items(vec![3, 1, 2]));
///
/// let restored: OrderedSet<i32> = OrderedSet::from_state(state);
/// assert_eq!(restored, set);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderedSetState<T> {
    /// The set had no elements.
    Empty,
    /// The set's elements in stored order.
    Items(Vec<T>),
}

impl<T> OrderedSetState<T> {
    /// Returns the number of elements recorded in the state.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Items(items) => items.len(),
        }
    }

    /// Returns `true` if the state describes an empty set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone + Eq + Hash, S: BuildHasher> OrderedSet<T, S> {
    /// Captures the set's elements, in order, as a persistence state.
    ///
    /// An empty set is captured as [`OrderedSetState::Empty`].
    #[must_use]
    pub fn to_state(&self) -> OrderedSetState<T> {
        if self.is_empty() {
            OrderedSetState::Empty
        } else {
            OrderedSetState::Items(self.to_vec())
        }
    }
}

impl<T: Clone + Eq + Hash, S: BuildHasher + Default> OrderedSet<T, S> {
    /// Rebuilds a set from a persistence state by replaying `add` over its
    /// elements. Duplicates in the state collapse to their first occurrence.
    #[must_use]
    pub fn from_state(state: OrderedSetState<T>) -> Self {
        match state {
            OrderedSetState::Empty => Self::default(),
            OrderedSetState::Items(items) => {
                log::debug!("restoring ordered set from {} stored elements", items.len());
                items.into_iter().collect()
            }
        }
    }
}

impl<T, S> From<OrderedSetState<T>> for OrderedSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Default,
{
    fn from(state: OrderedSetState<T>) -> Self {
        Self::from_state(state)
    }
}

impl<T, S> From<&OrderedSet<T, S>> for OrderedSetState<T>
where
    T: Clone + Eq + Hash,
    S: BuildHasher,
{
    fn from(set: &OrderedSet<T, S>) -> Self {
        set.to_state()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, S> serde::Serialize for OrderedSet<T, S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct OrderedSetVisitor<T, S> {
    marker: std::marker::PhantomData<(T, S)>,
}

#[cfg(feature = "serde")]
impl<T, S> OrderedSetVisitor<T, S> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::de::Visitor<'de> for OrderedSetVisitor<T, S>
where
    T: serde::Deserialize<'de> + Clone + Eq + Hash,
    S: BuildHasher + Default,
{
    type Value = OrderedSet<T, S>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set = OrderedSet::with_capacity_and_hasher(
            seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATED_ELEMENTS),
            S::default(),
        );
        while let Some(element) = seq.next_element()? {
            set.add(element);
        }
        Ok(set)
    }
}

/// Upper bound on capacity reserved from an untrusted size hint.
#[cfg(feature = "serde")]
const MAX_PREALLOCATED_ELEMENTS: usize = 4096;

#[cfg(feature = "serde")]
impl<'de, T, S> serde::Deserialize<'de> for OrderedSet<T, S>
where
    T: serde::Deserialize<'de> + Clone + Eq + Hash,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(OrderedSetVisitor::new())
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for OrderedSetState<T> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        match self {
            Self::Empty => serializer.serialize_none(),
            Self::Items(items) => serializer.serialize_some(items),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for OrderedSetState<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let items: Option<Vec<T>> = serde::Deserialize::deserialize(deserializer)?;
        Ok(items.map_or(Self::Empty, Self::Items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::empty(vec![])]
    #[case::single(vec![42])]
    #[case::several(vec![5, 3, 9, 1])]
    fn test_state_round_trip(#[case] elements: Vec<i32>) {
        let set: OrderedSet<i32> = elements.iter().copied().collect();
        let restored: OrderedSet<i32> = OrderedSet::from_state(set.to_state());
        assert_eq!(restored.to_vec(), elements);
    }

    #[rstest]
    fn test_empty_set_uses_marker() {
        let set: OrderedSet<i32> = OrderedSet::new();
        assert_eq!(set.to_state(), OrderedSetState::Empty);
        assert!(set.to_state().is_empty());
    }

    #[rstest]
    fn test_from_state_collapses_duplicates() {
        let state = OrderedSetState::Items(vec![2, 1, 2, 3, 1]);
        assert_eq!(state.len(), 5);
        let set: OrderedSet<i32> = state.into();
        assert_eq!(set.to_vec(), vec![2, 1, 3]);
    }

    #[rstest]
    fn test_from_empty_items_is_empty() {
        let set: OrderedSet<i32> = OrderedSet::from_state(OrderedSetState::Items(Vec::new()));
        assert!(set.is_empty());
    }

    #[rstest]
    fn test_state_from_reference() {
        let set: OrderedSet<&str> = ["x", "y"].into_iter().collect();
        let state: OrderedSetState<&str> = (&set).into();
        assert_eq!(state, OrderedSetState::Items(vec!["x", "y"]));
    }
}
