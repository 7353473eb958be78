//! Property tests for the collection utilities.

use proptest::prelude::*;
use seqkit::foundation::{SameValue, Sequence};
use seqkit::stdlib::{
    distinct, every, filter, includes, map, slice, sort_in_place, sorted_copy, splice_at,
};

fn sequence_of_ints() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-20i32..20, 0..40)
}

proptest! {
    #[test]
    fn map_identity_is_equal_and_non_mutating(items in sequence_of_ints()) {
        let s: Sequence<i32> = items.clone().into();
        let mapped = map(&s, |x, _| *x);
        prop_assert_eq!(&mapped, &s);
        prop_assert_eq!(s.to_vec(), items);
    }

    #[test]
    fn filter_preserves_order_and_predicate(items in sequence_of_ints(), pivot in -20i32..20) {
        let s: Sequence<i32> = items.clone().into();
        let kept = filter(&s, |x| *x > pivot);
        prop_assert!(every(&kept, |x| *x > pivot));
        let expected: Vec<i32> = items.into_iter().filter(|x| *x > pivot).collect();
        prop_assert_eq!(kept.to_vec(), expected);
    }

    #[test]
    fn distinct_has_no_duplicates_and_loses_nothing(items in sequence_of_ints()) {
        let s: Sequence<i32> = items.into();
        let unique = distinct(&s);
        for (i, a) in unique.iter().enumerate() {
            for b in unique.iter().skip(i + 1) {
                prop_assert!(!a.same_value(b));
            }
        }
        prop_assert!(every(&s, |x| includes(&unique, x)));
    }

    #[test]
    fn splice_length_arithmetic(
        items in sequence_of_ints(),
        start in 0usize..50,
        count in prop::option::of(0usize..50),
    ) {
        let mut s: Sequence<i32> = items.into();
        let n = s.len();
        let i = start.min(n);
        let removed = splice_at(&mut s, i64::try_from(start).unwrap(), count, []);
        let expected_removed = count.map_or(n - i, |k| k.min(n - i));
        prop_assert_eq!(removed.len(), expected_removed);
        prop_assert_eq!(s.len(), n - expected_removed);
    }

    #[test]
    fn sorted_copy_never_mutates(items in sequence_of_ints()) {
        let s: Sequence<i32> = items.clone().into();
        let sorted = sorted_copy(&s, i32::cmp);
        prop_assert_eq!(s.to_vec(), items.clone());

        let mut expected = items;
        expected.sort_unstable();
        prop_assert_eq!(sorted.to_vec(), expected);
    }

    #[test]
    fn sort_in_place_matches_sorted_copy(items in sequence_of_ints()) {
        let s: Sequence<i32> = items.into();
        let mut target = s.clone();
        sort_in_place(&mut target, |a, b| b.cmp(a));
        prop_assert_eq!(target, sorted_copy(&s, |a, b| b.cmp(a)));
    }

    #[test]
    fn slice_matches_range(items in sequence_of_ints(), a in 0usize..45, b in 0usize..45) {
        let s: Sequence<i32> = items.clone().into();
        let (lo, hi) = (a.min(b), a.max(b));
        let sliced = slice(&s, i64::try_from(lo).unwrap(), Some(i64::try_from(hi).unwrap()));
        let len = items.len();
        let expected = items[lo.min(len)..hi.min(len)].to_vec();
        prop_assert_eq!(sliced.to_vec(), expected);
    }
}
