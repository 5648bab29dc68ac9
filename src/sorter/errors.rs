//! Sorter error types

use thiserror::Error;

/// Result type for sort operations
pub type SortResult<T> = Result<T, SortError>;

/// Sorter errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    /// `sort_by` was called without a collection
    #[error("no collection supplied")]
    MissingCollection,
}
