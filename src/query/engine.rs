//! Query engine for collection scans
//!
//! Scans a collection in order, applying the matcher to every element and
//! collecting matches as values or positions per the caller's options.
//! Scans never mutate the collection; absence of matches is `None`, never
//! an empty list.

use std::ops::ControlFlow;

use serde_json::Value;

use crate::collection::each;
use crate::filter::{ElementMatcher, Filter};

use super::options::FindOptions;
use super::result::FindOutcome;

/// Scans `collection` for elements satisfying `filter`.
///
/// With `only_one` set, the scan stops at the first match and the bare
/// value (or position, with `indexes`) is returned; otherwise the full
/// ordered list of matches. `None` when nothing matched.
pub fn find<'a>(
    collection: &'a [Value],
    filter: Filter<'_>,
    options: FindOptions,
) -> Option<FindOutcome<'a>> {
    let hits = matching_positions(
        collection,
        filter,
        options.only_one,
        options.case_insensitive,
    );
    if hits.is_empty() {
        return None;
    }

    let outcome = match (options.only_one, options.indexes) {
        (true, true) => FindOutcome::Index(hits[0]),
        (true, false) => FindOutcome::Value(&collection[hits[0]]),
        (false, true) => FindOutcome::Indexes(hits),
        (false, false) => {
            FindOutcome::Values(hits.iter().map(|&position| &collection[position]).collect())
        }
    };
    Some(outcome)
}

/// All matching elements in collection order, or `None`
pub fn find_all<'a>(
    collection: &'a [Value],
    filter: Filter<'_>,
    case_insensitive: bool,
) -> Option<Vec<&'a Value>> {
    find(collection, filter, base_options(case_insensitive))?.into_values()
}

/// The first matching element, or `None`
pub fn find_one<'a>(
    collection: &'a [Value],
    filter: Filter<'_>,
    case_insensitive: bool,
) -> Option<&'a Value> {
    find(collection, filter, base_options(case_insensitive).with_only_one())?.as_value()
}

/// Positions of all matching elements, ascending, or `None`
pub fn find_indexes(
    collection: &[Value],
    filter: Filter<'_>,
    case_insensitive: bool,
) -> Option<Vec<usize>> {
    find(collection, filter, base_options(case_insensitive).with_indexes())?.into_indexes()
}

/// Position of the first matching element, or `None`
pub fn find_index(
    collection: &[Value],
    filter: Filter<'_>,
    case_insensitive: bool,
) -> Option<usize> {
    find(
        collection,
        filter,
        base_options(case_insensitive).with_only_one().with_indexes(),
    )?
    .as_index()
}

fn base_options(case_insensitive: bool) -> FindOptions {
    FindOptions {
        case_insensitive,
        ..FindOptions::new()
    }
}

/// Collects positions of matching elements in scan order; stops after the
/// first hit when `first_only` is set.
fn matching_positions(
    collection: &[Value],
    filter: Filter<'_>,
    first_only: bool,
    case_insensitive: bool,
) -> Vec<usize> {
    let mut positions = Vec::new();
    each(collection, |position, element| {
        if ElementMatcher::matches(element, filter, case_insensitive) {
            positions.push(position);
            if first_only {
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    });
    positions
}
