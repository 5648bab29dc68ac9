//! seekvec - an in-memory query and mutation toolkit for JSON collections
//!
//! Locates elements matching a filter (scalar equality or top-level field
//! conjunction), optionally case-insensitively, returning values or
//! positions, singly or as a list. Derived operations (count, replace,
//! remove, existence check, deduplication, multi-key sort) share the same
//! matching semantics.

pub mod collection;
pub mod filter;
pub mod mutate;
pub mod query;
pub mod sorter;

pub use collection::{copy, each};
pub use filter::{values_equal, ElementMatcher, Filter};
pub use mutate::{count, exists, remove, replace, unique};
pub use query::{find, find_all, find_index, find_indexes, find_one, FindOptions, FindOutcome};
pub use sorter::{sort_by, CollectionSorter, SortDirection, SortError, SortResult, SortSpec};
