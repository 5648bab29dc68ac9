//! In-place multi-key sorting for collections of records
//!
//! Sorting is deterministic for distinct keys; runs of equal keys carry
//! no order guarantee (unstable algorithm).

use std::cmp::Ordering;

use serde_json::Value;

use super::errors::{SortError, SortResult};
use super::spec::{SortDirection, SortSpec};

/// Sorts collections of records
pub struct CollectionSorter;

impl CollectionSorter {
    /// Sorts the collection in place according to the spec.
    ///
    /// Elements compare by the primary field, falling back to the
    /// tie-break field when the primary values are equal. `Desc` inverts
    /// the combined ordering.
    pub fn sort(collection: &mut [Value], spec: &SortSpec) {
        collection.sort_unstable_by(|a, b| {
            let mut ordering = Self::compare_field(a, b, &spec.field);
            if ordering == Ordering::Equal {
                if let Some(then_by) = &spec.then_by {
                    ordering = Self::compare_field(a, b, then_by);
                }
            }
            match spec.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    fn compare_field(a: &Value, b: &Value, field: &str) -> Ordering {
        Self::compare_values(a.get(field), b.get(field))
    }

    /// Compares two field values for sorting.
    ///
    /// Ordering rules:
    /// - absent < null < bool < number < string < array < object
    /// - For same types, natural ordering
    fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a_val), Some(b_val)) => {
                let type_order = |v: &Value| -> u8 {
                    match v {
                        Value::Null => 0,
                        Value::Bool(_) => 1,
                        Value::Number(_) => 2,
                        Value::String(_) => 3,
                        Value::Array(_) => 4,
                        Value::Object(_) => 5,
                    }
                };

                let a_type = type_order(a_val);
                let b_type = type_order(b_val);
                if a_type != b_type {
                    return a_type.cmp(&b_type);
                }

                match (a_val, b_val) {
                    (Value::Bool(a_b), Value::Bool(b_b)) => a_b.cmp(b_b),
                    (Value::Number(a_n), Value::Number(b_n)) => {
                        let a_f = a_n.as_f64().unwrap_or(0.0);
                        let b_f = b_n.as_f64().unwrap_or(0.0);
                        a_f.partial_cmp(&b_f).unwrap_or(Ordering::Equal)
                    }
                    (Value::String(a_s), Value::String(b_s)) => a_s.cmp(b_s),
                    _ => Ordering::Equal, // Null, arrays, and objects carry no inner order
                }
            }
        }
    }
}

/// Sorts `collection` in place when both a collection and a spec are
/// supplied.
///
/// A missing collection is an error; a missing spec leaves the collection
/// untouched and succeeds.
pub fn sort_by(collection: Option<&mut [Value]>, spec: Option<&SortSpec>) -> SortResult<()> {
    let Some(collection) = collection else {
        return Err(SortError::MissingCollection);
    };
    if let Some(spec) = spec {
        CollectionSorter::sort(collection, spec);
    }
    Ok(())
}
