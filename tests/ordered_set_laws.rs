#![cfg(feature = "ordered")]
//! Property-based tests for OrderedSet laws.
//!
//! These tests verify that the element sequence and the position map stay in
//! agreement under arbitrary operation sequences, and that every set
//! operation follows its ordering rule.

use ordered_index_set::ordered::{OrderedSet, OrderedSetState};
use proptest::prelude::*;
use std::collections::HashSet;

/// Reference model: first-occurrence deduplication of a sequence.
fn dedup_first(elements: impl IntoIterator<Item = i32>) -> Vec<i32> {
    let mut seen = HashSet::new();
    elements.into_iter().filter(|element| seen.insert(*element)).collect()
}

fn positions_agree(set: &OrderedSet<i32>) -> bool {
    set.iter()
        .enumerate()
        .all(|(position, element)| set.index_of(element) == Ok(position))
        && set.iter().count() == set.len()
}

#[derive(Debug, Clone)]
enum Operation {
    Add(i32),
    Discard(i32),
    Pop,
    Update(Vec<i32>),
    DifferenceUpdate(Vec<i32>),
    IntersectionUpdate(Vec<i32>),
    SymmetricDifferenceUpdate(Vec<i32>),
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    let element = 0..20_i32;
    let elements = prop::collection::vec(0..20_i32, 0..8);
    prop_oneof![
        element.clone().prop_map(Operation::Add),
        element.prop_map(Operation::Discard),
        Just(Operation::Pop),
        elements.clone().prop_map(Operation::Update),
        elements.clone().prop_map(Operation::DifferenceUpdate),
        elements.clone().prop_map(Operation::IntersectionUpdate),
        elements.prop_map(Operation::SymmetricDifferenceUpdate),
    ]
}

/// Applies `operation` to both the set and a plain `Vec` model.
fn apply(set: &mut OrderedSet<i32>, model: &mut Vec<i32>, operation: &Operation) {
    match operation {
        Operation::Add(element) => {
            set.add(*element);
            if !model.contains(element) {
                model.push(*element);
            }
        }
        Operation::Discard(element) => {
            set.discard(element);
            model.retain(|existing| existing != element);
        }
        Operation::Pop => {
            let popped = set.pop().ok();
            assert_eq!(popped, model.pop());
        }
        Operation::Update(elements) => {
            set.update(elements.iter().copied());
            *model = dedup_first(model.iter().chain(elements).copied());
        }
        Operation::DifferenceUpdate(elements) => {
            set.difference_update([elements]);
            model.retain(|existing| !elements.contains(existing));
        }
        Operation::IntersectionUpdate(elements) => {
            set.intersection_update(elements);
            model.retain(|existing| elements.contains(existing));
        }
        Operation::SymmetricDifferenceUpdate(elements) => {
            set.symmetric_difference_update(elements);
            let only_other: Vec<i32> = dedup_first(elements.iter().copied())
                .into_iter()
                .filter(|element| !model.contains(element))
                .collect();
            model.retain(|existing| !elements.contains(existing));
            model.extend(only_other);
        }
    }
}

// =============================================================================
// Position Map Law
// Description: after every operation, position[e] == sequence.index_of(e)
// =============================================================================

proptest! {
    #[test]
    fn prop_positions_agree_after_every_operation(
        initial in prop::collection::vec(0..20_i32, 0..20),
        operations in prop::collection::vec(operation_strategy(), 0..40)
    ) {
        let mut set: OrderedSet<i32> = initial.iter().copied().collect();
        let mut model = dedup_first(initial);

        for operation in &operations {
            apply(&mut set, &mut model, operation);
            prop_assert!(positions_agree(&set));
            prop_assert_eq!(set.to_vec(), model.clone());
        }
    }
}

// =============================================================================
// Idempotent Add Law
// Description: adding an element twice changes nothing the second time
// =============================================================================

proptest! {
    #[test]
    fn prop_add_idempotent(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        element: i32
    ) {
        let mut set: OrderedSet<i32> = elements.into_iter().collect();
        let first = set.add(element);
        let snapshot = set.clone();
        let second = set.add(element);

        prop_assert_eq!(first, second);
        prop_assert_eq!(set, snapshot);
    }
}

// =============================================================================
// Order Preservation Law
// Description: construction keeps first occurrences in input order
// =============================================================================

proptest! {
    #[test]
    fn prop_construction_keeps_first_occurrences(
        elements in prop::collection::vec(0..30_i32, 0..60)
    ) {
        let set: OrderedSet<i32> = elements.iter().copied().collect();
        prop_assert_eq!(set.to_vec(), dedup_first(elements));
    }
}

// =============================================================================
// Union Ordering Law
// Description: union is first-appearance order over self then others
// =============================================================================

proptest! {
    #[test]
    fn prop_union_is_first_appearance(
        elements in prop::collection::vec(0..30_i32, 0..30),
        first in prop::collection::vec(0..30_i32, 0..30),
        second in prop::collection::vec(0..30_i32, 0..30)
    ) {
        let set: OrderedSet<i32> = elements.iter().copied().collect();
        let union = set.union([&first, &second]);
        let expected = dedup_first(
            elements.iter().chain(&first).chain(&second).copied()
        );
        prop_assert_eq!(union.to_vec(), expected);
    }
}

// =============================================================================
// Intersection / Difference Ordering Laws
// Description: results are subsequences of self
// =============================================================================

proptest! {
    #[test]
    fn prop_intersection_orders_by_self(
        elements in prop::collection::vec(0..30_i32, 0..30),
        first in prop::collection::vec(0..30_i32, 0..30),
        second in prop::collection::vec(0..30_i32, 0..30)
    ) {
        let set: OrderedSet<i32> = elements.iter().copied().collect();
        let common = set.intersection([&first, &second]);
        let expected: Vec<i32> = set
            .iter()
            .copied()
            .filter(|element| first.contains(element) && second.contains(element))
            .collect();
        prop_assert_eq!(common.to_vec(), expected);
    }

    #[test]
    fn prop_difference_orders_by_self(
        elements in prop::collection::vec(0..30_i32, 0..30),
        first in prop::collection::vec(0..30_i32, 0..30),
        second in prop::collection::vec(0..30_i32, 0..30)
    ) {
        let set: OrderedSet<i32> = elements.iter().copied().collect();
        let difference = set.difference([&first, &second]);
        let expected: Vec<i32> = set
            .iter()
            .copied()
            .filter(|element| !first.contains(element) && !second.contains(element))
            .collect();
        prop_assert_eq!(difference.to_vec(), expected);
    }
}

// =============================================================================
// Symmetric Difference Law
// Description: (self - other) then (other - self), each in source order
// =============================================================================

proptest! {
    #[test]
    fn prop_symmetric_difference_composition(
        left in prop::collection::vec(0..30_i32, 0..30),
        right in prop::collection::vec(0..30_i32, 0..30)
    ) {
        let left: OrderedSet<i32> = left.into_iter().collect();
        let right: OrderedSet<i32> = right.into_iter().collect();

        let expected = left.difference([&right]).union([&right.difference([&left])]);
        prop_assert_eq!(left.symmetric_difference(&right), expected.clone());

        let mut updated = left.clone();
        updated.symmetric_difference_update(&right);
        prop_assert_eq!(updated, expected);
    }
}

// =============================================================================
// Discard Renumbering Law
// Description: discarding shifts every later element down by one
// =============================================================================

proptest! {
    #[test]
    fn prop_discard_shifts_later_positions(
        elements in prop::collection::vec(0..50_i32, 1..40),
        pick in any::<prop::sample::Index>()
    ) {
        let mut set: OrderedSet<i32> = elements.into_iter().collect();
        let before = set.to_vec();
        let removed_at = pick.index(before.len());
        let target = before[removed_at];

        set.discard(&target);

        for (position, element) in before.iter().enumerate() {
            let expected = match position.cmp(&removed_at) {
                std::cmp::Ordering::Less => Some(position),
                std::cmp::Ordering::Equal => None,
                std::cmp::Ordering::Greater => Some(position - 1),
            };
            prop_assert_eq!(set.index_of(element).ok(), expected);
        }
    }
}

// =============================================================================
// Persistence Round-Trip Law
// =============================================================================

proptest! {
    #[test]
    fn prop_state_round_trip(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let set: OrderedSet<i32> = elements.into_iter().collect();
        let state = set.to_state();
        prop_assert_eq!(state == OrderedSetState::Empty, set.is_empty());

        let restored: OrderedSet<i32> = OrderedSet::from_state(state);
        prop_assert_eq!(restored.to_vec(), set.to_vec());
    }
}

// =============================================================================
// Subset / Superset Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_subset_superset_duality(
        left in prop::collection::vec(0..15_i32, 0..15),
        right in prop::collection::vec(0..15_i32, 0..15)
    ) {
        let left: OrderedSet<i32> = left.into_iter().collect();
        let right: OrderedSet<i32> = right.into_iter().collect();

        prop_assert_eq!(left.is_subset(&right), right.is_superset(&left));
        prop_assert!(left.intersection([&right]).is_subset(&left));
        prop_assert!(left.union([&right]).is_superset(&right));
    }
}
