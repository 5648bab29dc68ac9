//! Derived mutators built on the query engine
//!
//! Each operation locates matches through the engine's index mode, then
//! counts, overwrites, splices, or tests membership. A non-matching
//! filter leaves the collection untouched; that is a no-op, not an error.

use serde_json::Value;
use tracing::debug;

use crate::filter::Filter;
use crate::query::{find, find_indexes, find_one, FindOptions};

/// Number of elements matching the filter
pub fn count(collection: &[Value], filter: Filter<'_>) -> usize {
    find(collection, filter, FindOptions::new().with_indexes())
        .map_or(0, |outcome| outcome.match_count())
}

/// Overwrites every matching element in place with a clone of
/// `replacement`.
///
/// Returns the number of replacements; the collection length never
/// changes.
pub fn replace(collection: &mut [Value], filter: Filter<'_>, replacement: &Value) -> usize {
    let Some(positions) = find_indexes(collection, filter, false) else {
        return 0;
    };
    for &position in &positions {
        collection[position] = replacement.clone();
    }
    debug!(replaced = positions.len(), "replace applied");
    positions.len()
}

/// Removes every matching element in place.
///
/// Positions are deleted from highest to lowest so pending deletions are
/// never invalidated by earlier ones. Returns the number removed.
pub fn remove(collection: &mut Vec<Value>, filter: Filter<'_>) -> usize {
    let Some(positions) = find_indexes(collection, filter, false) else {
        return 0;
    };
    for &position in positions.iter().rev() {
        collection.remove(position);
    }
    debug!(removed = positions.len(), "remove applied");
    positions.len()
}

/// Whether any element matches `element` taken as a filter
pub fn exists(collection: &[Value], element: &Value) -> bool {
    find_one(collection, Filter::from(element), false).is_some()
}
