//! Derived mutation subsystem
//!
//! Operations that consume query results to count, overwrite, splice, or
//! deduplicate a collection in place. All share the matching semantics of
//! the filter subsystem.

mod dedup;
mod mutators;

pub use dedup::unique;
pub use mutators::{count, exists, remove, replace};
