//! Element matching against filters
//!
//! Decides whether a single element satisfies a filter. No side effects,
//! no coercion beyond the comparison rules in `compare`.

use serde_json::Value;

use super::ast::Filter;
use super::compare::values_equal;

/// Evaluates filters against elements
pub struct ElementMatcher;

impl ElementMatcher {
    /// Checks if an element satisfies the filter.
    ///
    /// A scalar filter is a direct equality target. A fields filter
    /// requires every named field to compare equal on the element (AND
    /// semantics); a missing field fails the whole conjunction, and
    /// element fields not named in the filter are ignored. A filter with
    /// no fields is vacuously true and matches every element.
    pub fn matches(element: &Value, filter: Filter<'_>, case_insensitive: bool) -> bool {
        match filter {
            Filter::Scalar(target) => values_equal(element, target, case_insensitive),
            Filter::Fields(fields) => fields.iter().all(|(name, expected)| {
                match element.get(name.as_str()) {
                    Some(actual) => values_equal(actual, expected, case_insensitive),
                    None => false, // Missing field = no match
                }
            }),
        }
    }
}
