//! Collection traversal and copying helpers
//!
//! Plain element-wise helpers the query and mutation layers build on:
//! ordered traversal with early exit, and deep structural copying.

use std::ops::ControlFlow;

use serde_json::Value;

/// Visits every element in order, passing the position and the element.
///
/// The visitor returns `ControlFlow::Break(())` to stop the traversal
/// early.
pub fn each<'a, F>(collection: &'a [Value], mut visit: F)
where
    F: FnMut(usize, &'a Value) -> ControlFlow<()>,
{
    for (position, element) in collection.iter().enumerate() {
        if visit(position, element).is_break() {
            break;
        }
    }
}

/// Returns independently-allocated deep clones of every element.
///
/// Mutating the copy never affects the original.
pub fn copy(collection: &[Value]) -> Vec<Value> {
    collection.to_vec()
}
