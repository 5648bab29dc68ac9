//! Result types for collection queries

use serde_json::Value;

/// Outcome of a successful `find`.
///
/// The shape follows the options that produced it: a bare value or
/// position in single-result mode, an ordered list otherwise. Lists are
/// never empty; a scan with no matches yields no outcome at all.
#[derive(Debug, Clone, PartialEq)]
pub enum FindOutcome<'a> {
    /// The single matched element
    Value(&'a Value),
    /// All matched elements, in collection order
    Values(Vec<&'a Value>),
    /// Position of the single matched element
    Index(usize),
    /// Positions of all matched elements, ascending
    Indexes(Vec<usize>),
}

impl<'a> FindOutcome<'a> {
    /// Number of matches carried by this outcome
    pub fn match_count(&self) -> usize {
        match self {
            FindOutcome::Value(_) | FindOutcome::Index(_) => 1,
            FindOutcome::Values(values) => values.len(),
            FindOutcome::Indexes(indexes) => indexes.len(),
        }
    }

    /// The matched element, if this is a single-value outcome
    pub fn as_value(&self) -> Option<&'a Value> {
        match self {
            FindOutcome::Value(value) => Some(value),
            _ => None,
        }
    }

    /// The matched position, if this is a single-index outcome
    pub fn as_index(&self) -> Option<usize> {
        match self {
            FindOutcome::Index(index) => Some(*index),
            _ => None,
        }
    }

    /// The matched elements, if this is a value-list outcome
    pub fn into_values(self) -> Option<Vec<&'a Value>> {
        match self {
            FindOutcome::Values(values) => Some(values),
            _ => None,
        }
    }

    /// The matched positions, if this is an index-list outcome
    pub fn into_indexes(self) -> Option<Vec<usize>> {
        match self {
            FindOutcome::Indexes(indexes) => Some(indexes),
            _ => None,
        }
    }
}
