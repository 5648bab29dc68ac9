//! In-place deduplication
//!
//! Removes later occurrences of deep-equal elements, preserving the
//! relative order of first occurrences.

use serde_json::Value;
use tracing::debug;

use crate::filter::values_equal;

/// Removes every element deep-equal to an earlier one.
///
/// Walks the collection front to back; an element that already appeared
/// at a lower position is deleted, shrinking the collection in place.
/// Returns the number of elements removed.
pub fn unique(collection: &mut Vec<Value>) -> usize {
    let mut removed = 0;
    let mut position = 1;
    while position < collection.len() {
        let (seen, rest) = collection.split_at(position);
        if seen.iter().any(|earlier| values_equal(earlier, &rest[0], false)) {
            collection.remove(position);
            removed += 1;
        } else {
            position += 1;
        }
    }
    if removed > 0 {
        debug!(removed, "unique applied");
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unique_removes_scalar_duplicates() {
        let mut collection = vec![json!(1), json!(2), json!(1), json!(3), json!(2)];

        let removed = unique(&mut collection);
        assert_eq!(removed, 2);
        assert_eq!(collection, vec![json!(1), json!(2), json!(3)]);
    }

    #[test]
    fn test_unique_removes_deep_equal_records() {
        let mut collection = vec![json!({"a": 1}), json!({"a": 1}), json!({"a": 2})];

        let removed = unique(&mut collection);
        assert_eq!(removed, 1);
        assert_eq!(collection, vec![json!({"a": 1}), json!({"a": 2})]);
    }

    #[test]
    fn test_unique_treats_equal_numbers_as_duplicates() {
        let mut collection = vec![json!(1), json!(1.0), json!(1.5)];

        unique(&mut collection);
        assert_eq!(collection, vec![json!(1), json!(1.5)]);
    }

    #[test]
    fn test_unique_preserves_first_seen_order() {
        let mut collection = vec![
            json!("b"),
            json!("a"),
            json!("b"),
            json!("c"),
            json!("a"),
        ];

        unique(&mut collection);
        assert_eq!(collection, vec![json!("b"), json!("a"), json!("c")]);
    }

    #[test]
    fn test_unique_on_distinct_elements_is_a_noop() {
        let mut collection = vec![json!(1), json!("1"), json!({"n": 1})];
        let before = collection.clone();

        let removed = unique(&mut collection);
        assert_eq!(removed, 0);
        assert_eq!(collection, before);
    }
}
