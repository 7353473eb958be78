//! Integration tests for Sequence
//!
//! Tests structural sharing, independence of clones, and in-place primitives.

use seqkit_foundation::{Sequence, Value};

#[test]
fn sequence_empty() {
    let s: Sequence<Value> = Sequence::new();
    assert!(s.is_empty());
    assert_eq!(s.len(), 0);
    assert_eq!(s.last(), None);
}

#[test]
fn sequence_from_vec_and_array() {
    let a: Sequence<i32> = vec![1, 2, 3].into();
    let b = Sequence::from([1, 2, 3]);
    assert_eq!(a, b);
}

#[test]
fn clone_mutation_does_not_leak() {
    let mut original: Sequence<i32> = (0..1000).collect();
    let copy = original.clone();

    original.push_back(1000);
    original.pop_front();

    assert_eq!(copy.len(), 1000);
    assert_eq!(copy.first(), Some(&0));
    assert_eq!(original.first(), Some(&1));
}

#[test]
fn drain_and_insert_round_out() {
    let mut s: Sequence<&str> = vec!["a", "b", "c", "d"].into();
    let removed = s.drain(1..3);
    s.insert_all(1, removed.clone());
    assert_eq!(removed.to_vec(), vec!["b", "c"]);
    assert_eq!(s.to_vec(), vec!["a", "b", "c", "d"]);
}

#[test]
fn iteration_both_directions() {
    let s: Sequence<i32> = vec![1, 2, 3].into();
    let forward: Vec<_> = s.iter().copied().collect();
    let backward: Vec<_> = s.iter().rev().copied().collect();
    assert_eq!(forward, vec![1, 2, 3]);
    assert_eq!(backward, vec![3, 2, 1]);
}

#[test]
fn consuming_iteration() {
    let s: Sequence<String> = vec!["x".to_string(), "y".to_string()].into();
    let joined: String = s.into_iter().collect();
    assert_eq!(joined, "xy");
}

#[test]
fn extend_appends() {
    let mut s: Sequence<i32> = Sequence::new();
    s.extend([1, 2]);
    s.extend(vec![3]);
    assert_eq!(s.to_vec(), vec![1, 2, 3]);
}
