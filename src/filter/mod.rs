//! Filter and matching subsystem
//!
//! Decides whether a single element satisfies a filter: scalar equality,
//! or a conjunction of top-level field constraints, honoring the
//! case-insensitive comparison mode for strings.

mod ast;
mod compare;
mod matcher;

pub use ast::Filter;
pub use compare::values_equal;
pub use matcher::ElementMatcher;
