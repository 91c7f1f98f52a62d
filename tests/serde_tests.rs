#![cfg(all(feature = "serde", feature = "ordered"))]

//! Integration tests for serde support.
//!
//! These tests verify that ordered sets and their persistence snapshots
//! survive a JSON round trip with order intact, including the empty set.

use ordered_index_set::ordered::{OrderedSet, OrderedSetState};
use rstest::rstest;

#[rstest]
#[case::empty(vec![])]
#[case::single(vec![1])]
#[case::unsorted(vec![9, 2, 7, 4])]
fn test_ordered_set_json_roundtrip(#[case] elements: Vec<i32>) {
    let set: OrderedSet<i32> = elements.iter().copied().collect();
    let json = serde_json::to_string(&set).unwrap();
    let restored: OrderedSet<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, set);
    assert_eq!(restored.to_vec(), elements);
}

#[rstest]
fn test_ordered_set_of_strings_roundtrip() {
    let set: OrderedSet<String> = ["delta", "alpha", "charlie"]
        .iter()
        .map(ToString::to_string)
        .collect();
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, r#"["delta","alpha","charlie"]"#);
    let restored: OrderedSet<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.index_of("charlie"), Ok(2));
}

#[rstest]
fn test_deserialize_rejects_non_sequence() {
    let result: Result<OrderedSet<i32>, _> = serde_json::from_str(r#"{"a": 1}"#);
    assert!(result.is_err());
}

#[rstest]
#[case::empty(vec![])]
#[case::several(vec![3, 1, 2])]
fn test_state_json_roundtrip(#[case] elements: Vec<i32>) {
    let set: OrderedSet<i32> = elements.iter().copied().collect();
    let json = serde_json::to_string(&set.to_state()).unwrap();
    let state: OrderedSetState<i32> = serde_json::from_str(&json).unwrap();
    let restored: OrderedSet<i32> = OrderedSet::from_state(state);
    assert_eq!(restored.to_vec(), elements);
}

#[rstest]
fn test_empty_state_serializes_as_null() {
    let set: OrderedSet<i32> = OrderedSet::new();
    assert_eq!(serde_json::to_string(&set.to_state()).unwrap(), "null");
}

#[rstest]
fn test_nested_in_struct() {
    #[derive(serde::Serialize, serde::Deserialize)]
    struct Document {
        tags: OrderedSet<String>,
    }

    let document = Document {
        tags: ["b", "a"].iter().map(ToString::to_string).collect(),
    };
    let json = serde_json::to_string(&document).unwrap();
    assert_eq!(json, r#"{"tags":["b","a"]}"#);
    let restored: Document = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.tags, document.tags);
}
