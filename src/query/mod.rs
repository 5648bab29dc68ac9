//! Query engine subsystem
//!
//! The `find` family: in-order scans collecting matches as values or
//! positions, singly or as a list, driven by named options.
//!
//! # Invariants
//!
//! - Scans never mutate the collection
//! - No match is always `None`, never an empty list
//! - Matched values are references into the collection, never clones

mod engine;
mod options;
mod result;

pub use engine::{find, find_all, find_index, find_indexes, find_one};
pub use options::FindOptions;
pub use result::FindOutcome;
