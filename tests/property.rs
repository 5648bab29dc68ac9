//! Property Tests
//!
//! Algebraic laws of the query and mutation operations over small
//! generated collections of scalars and records.

use proptest::collection::{btree_map, vec};
use proptest::prelude::*;
use serde_json::Value;

use seekvec::{
    count, exists, find_all, find_index, find_indexes, find_one, remove, unique, values_equal,
    CollectionSorter, Filter, SortSpec,
};

const KEYS: [&str; 3] = ["k1", "k2", "k3"];

fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![Just(KEYS[0]), Just(KEYS[1]), Just(KEYS[2])].prop_map(str::to_string)
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        (-50i64..50).prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        "[a-c]{0,2}".prop_map(Value::from),
    ]
}

fn arb_record() -> impl Strategy<Value = Value> {
    btree_map(arb_key(), arb_scalar(), 0..3)
        .prop_map(|fields| Value::Object(fields.into_iter().collect()))
}

fn arb_element() -> impl Strategy<Value = Value> {
    prop_oneof![arb_scalar(), arb_record()]
}

fn arb_collection() -> impl Strategy<Value = Vec<Value>> {
    vec(arb_element(), 0..12)
}

fn arb_int_record() -> impl Strategy<Value = Value> {
    btree_map(arb_key(), (-50i64..50).prop_map(Value::from), 0..3)
        .prop_map(|fields| Value::Object(fields.into_iter().collect()))
}

proptest! {
    #[test]
    fn find_one_is_the_head_of_find_all(
        collection in arb_collection(),
        target in arb_element(),
    ) {
        let filter = Filter::from(&target);
        let head = find_all(&collection, filter, false).and_then(|values| values.first().copied());
        prop_assert_eq!(find_one(&collection, filter, false), head);
    }

    #[test]
    fn find_index_is_the_head_of_find_indexes(
        collection in arb_collection(),
        target in arb_element(),
    ) {
        let filter = Filter::from(&target);
        let head = find_indexes(&collection, filter, false)
            .and_then(|indexes| indexes.first().copied());
        prop_assert_eq!(find_index(&collection, filter, false), head);
    }

    #[test]
    fn count_equals_the_index_mode_length(
        collection in arb_collection(),
        target in arb_element(),
    ) {
        let filter = Filter::from(&target);
        let expected = find_indexes(&collection, filter, false)
            .map_or(0, |indexes| indexes.len());
        prop_assert_eq!(count(&collection, filter), expected);
    }

    #[test]
    fn matched_indexes_point_at_matching_elements(
        collection in arb_collection(),
        target in arb_element(),
    ) {
        let filter = Filter::from(&target);
        if let Some(indexes) = find_indexes(&collection, filter, false) {
            prop_assert!(!indexes.is_empty());
            let values = find_all(&collection, filter, false).unwrap();
            prop_assert_eq!(indexes.len(), values.len());
            for (&index, &value) in indexes.iter().zip(values.iter()) {
                prop_assert_eq!(&collection[index], value);
            }
        }
    }

    #[test]
    fn remove_shrinks_by_the_match_count(
        mut collection in arb_collection(),
        target in arb_element(),
    ) {
        let before = collection.len();
        let matches = count(&collection, Filter::from(&target));

        let removed = remove(&mut collection, Filter::from(&target));

        prop_assert_eq!(removed, matches);
        prop_assert_eq!(collection.len(), before - matches);
        prop_assert!(!exists(&collection, &target));
    }

    #[test]
    fn unique_leaves_no_deep_equal_pair(mut collection in arb_collection()) {
        unique(&mut collection);
        for i in 0..collection.len() {
            for j in (i + 1)..collection.len() {
                prop_assert!(!values_equal(&collection[i], &collection[j], false));
            }
        }
    }

    #[test]
    fn unique_keeps_first_occurrences_in_order(collection in arb_collection()) {
        let mut deduped = collection.clone();
        unique(&mut deduped);

        let mut expected: Vec<Value> = Vec::new();
        for element in &collection {
            if !expected.iter().any(|seen| values_equal(seen, element, false)) {
                expected.push(element.clone());
            }
        }
        prop_assert_eq!(deduped, expected);
    }

    #[test]
    fn sort_orders_adjacent_pairs(mut collection in vec(arb_int_record(), 0..12)) {
        CollectionSorter::sort(&mut collection, &SortSpec::asc("k1"));
        for pair in collection.windows(2) {
            let a = pair[0].get("k1").and_then(Value::as_i64);
            let b = pair[1].get("k1").and_then(Value::as_i64);
            prop_assert!(a <= b);
        }
    }

    #[test]
    fn descending_sort_orders_adjacent_pairs(mut collection in vec(arb_int_record(), 0..12)) {
        CollectionSorter::sort(&mut collection, &SortSpec::desc("k1"));
        for pair in collection.windows(2) {
            let a = pair[0].get("k1").and_then(Value::as_i64);
            let b = pair[1].get("k1").and_then(Value::as_i64);
            prop_assert!(a >= b);
        }
    }
}
