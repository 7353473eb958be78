//! Everyday array idioms, written against the public API.

use seqkit::foundation::{Record, Sequence, Value};
use seqkit::stdlib::{
    append_many, construct, construct_with, distinct, every, filter, find, includes, index_of,
    join, map, prepend_one, reduce, reduce_unseeded, remove_first, remove_last, slice, some,
    sort_in_place, sorted_copy, splice_at, split_text, truthy,
};

fn strings(items: &[&str]) -> Sequence<Value> {
    items.iter().map(|s| Value::from(*s)).collect()
}

fn inventory() -> Sequence<Value> {
    vec![
        Record::new().with("name", "apples").with("quantity", 2).into_value(),
        Record::new().with("name", "bananas").with("quantity", 0).into_value(),
        Record::new().with("name", "cherries").with("quantity", 5).into_value(),
    ]
    .into()
}

fn quantity(item: &Value) -> f64 {
    item.field("quantity").and_then(Value::as_number).unwrap_or(0.0)
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn construct_five_fruit() {
    let fruit = construct(5, Value::from("fruit")).unwrap();
    assert_eq!(fruit.to_vec(), vec![Value::from("fruit"); 5]);
}

#[test]
fn construct_negative_is_rejected() {
    assert!(construct(-2, 0).unwrap_err().is_invalid_argument());
}

#[test]
fn shared_fill_vs_factory() {
    // A constant fill repeats one reference; a factory makes a fresh one per slot.
    let shared = construct(3, Record::new().into_value()).unwrap();
    let fresh = construct_with(3, || Record::new().into_value()).unwrap();

    assert_eq!(index_of(&shared, &shared[2]), Some(0));
    assert_eq!(index_of(&fresh, &fresh[2]), Some(2));
}

// =============================================================================
// Records
// =============================================================================

#[test]
fn total_quantity() {
    let total = reduce(&inventory(), |acc, item| acc + quantity(item), 0.0);
    assert!((total - 7.0).abs() < f64::EPSILON);
}

#[test]
fn names_in_stock() {
    let items = inventory();
    let in_stock = filter(&items, |item| quantity(item) > 0.0);
    let names = map(&in_stock, |item, _| item.field("name").cloned().unwrap_or(Value::Undefined));
    assert_eq!(join(&names, ", "), "apples, cherries");
    assert_eq!(items.len(), 3);
}

#[test]
fn find_is_explicit_about_absence() {
    let items = inventory();
    let bananas = find(&items, |item| item.field("name") == Some(&Value::from("bananas")));
    assert_eq!(bananas.map(quantity), Some(0.0));
    let kiwis = find(&items, |item| item.field("name") == Some(&Value::from("kiwis")));
    assert!(kiwis.is_none());
}

#[test]
fn includes_compares_records_by_reference() {
    let items = inventory();
    let cherries = items[2].clone();
    let copy_of_cherries = Record::new()
        .with("name", "cherries")
        .with("quantity", 5)
        .into_value();

    assert!(includes(&items, &cherries));
    assert!(!includes(&items, &copy_of_cherries));
    assert!(some(&items, |item| *item == copy_of_cherries));
}

#[test]
fn sort_records_by_quantity() {
    let items = inventory();
    let by_quantity = sorted_copy(&items, |a, b| quantity(a).total_cmp(&quantity(b)));
    let names: Vec<_> = by_quantity
        .iter()
        .filter_map(|item| item.field("name").and_then(Value::as_str))
        .collect();
    assert_eq!(names, vec!["bananas", "apples", "cherries"]);
    // Original order is untouched.
    assert_eq!(items[0].field("name"), Some(&Value::from("apples")));
}

// =============================================================================
// In-place Operations
// =============================================================================

#[test]
fn splice_colors() {
    let mut colors = strings(&["green", "yellow", "blue", "purple"]);
    let removed = splice_at(
        &mut colors,
        2,
        Some(2),
        [Value::from("pink"), Value::from("orange")],
    );
    assert_eq!(removed, strings(&["blue", "purple"]));
    assert_eq!(colors, strings(&["green", "yellow", "pink", "orange"]));
}

#[test]
fn queue_and_stack_idioms() {
    let mut queue = strings(&["a"]);
    assert_eq!(append_many(&mut queue, [Value::from("b"), Value::from("c")]), 3);
    assert_eq!(prepend_one(&mut queue, Value::from("z")), 4);
    assert_eq!(remove_first(&mut queue), Some(Value::from("z")));
    assert_eq!(remove_last(&mut queue), Some(Value::from("c")));
    assert_eq!(queue, strings(&["a", "b"]));
}

#[test]
fn sort_in_place_only_touches_target() {
    let original: Sequence<i32> = vec![3, 1, 2].into();
    let mut copy = original.clone();
    sort_in_place(&mut copy, i32::cmp);
    assert_eq!(copy.to_vec(), vec![1, 2, 3]);
    assert_eq!(original.to_vec(), vec![3, 1, 2]);
}

// =============================================================================
// Mixed Values
// =============================================================================

#[test]
fn distinct_mixed() {
    let mixed: Sequence<Value> = vec![
        Value::from("a"),
        Value::from(1),
        Value::from(2),
        Value::from("a"),
        Value::from("a"),
        Value::from(3),
        Value::from(4),
    ]
    .into();
    let expected: Sequence<Value> = vec![
        Value::from("a"),
        Value::from(1),
        Value::from(2),
        Value::from(3),
        Value::from(4),
    ]
    .into();
    assert_eq!(distinct(&mixed), expected);
}

#[test]
fn truthy_then_join() {
    let mixed: Sequence<Value> = vec![
        Value::from("x"),
        Value::from(0),
        Value::Null,
        Value::from(""),
        Value::from("y"),
    ]
    .into();
    assert_eq!(join(&truthy(&mixed), "+"), "x+y");
}

#[test]
fn split_words_and_quantify() {
    let words = split_text("red green blue", " ");
    assert!(every(&words, |w| !w.is_empty()));
    assert!(some(&words, |w| w == "green"));
    assert_eq!(slice(&words, -1, None).to_vec(), vec!["blue"]);
}

#[test]
fn reduce_without_seed_on_empty_fails() {
    let empty: Sequence<f64> = Sequence::new();
    assert!(reduce_unseeded(&empty, |a, b| a + b).unwrap_err().is_empty_reduction());
    assert!((reduce(&empty, |a, b| a + b, 0.0)).abs() < f64::EPSILON);
}
