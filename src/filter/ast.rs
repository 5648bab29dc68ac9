//! Filter representation
//!
//! A filter is a borrowed view over a caller-owned value: a scalar is a
//! direct equality target, an object is a conjunction of field constraints.

use serde_json::{Map, Value};

/// A query filter borrowed from the caller
#[derive(Debug, Clone, Copy)]
pub enum Filter<'f> {
    /// Direct equality target
    Scalar(&'f Value),
    /// Field name -> expected value, combined with AND
    Fields(&'f Map<String, Value>),
}

impl<'f> From<&'f Value> for Filter<'f> {
    fn from(value: &'f Value) -> Self {
        match value {
            Value::Object(fields) => Filter::Fields(fields),
            scalar => Filter::Scalar(scalar),
        }
    }
}

impl Filter<'_> {
    /// Returns true if this is a direct equality target
    pub fn is_scalar(&self) -> bool {
        matches!(self, Filter::Scalar(_))
    }

    /// Returns true if this is a field conjunction
    pub fn is_fields(&self) -> bool {
        matches!(self, Filter::Fields(_))
    }
}
