//! Sort specification

use serde::{Deserialize, Serialize};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Sort specification: primary field, optional tie-break field, direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Field to sort by
    pub field: String,
    /// Tie-break field, consulted only when primary values compare equal
    pub then_by: Option<String>,
    /// Direction, applied to the combined ordering
    pub direction: SortDirection,
}

impl SortSpec {
    /// Ascending sort on `field`
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            then_by: None,
            direction: SortDirection::Asc,
        }
    }

    /// Descending sort on `field`
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            then_by: None,
            direction: SortDirection::Desc,
        }
    }

    /// Sets the tie-break field
    pub fn with_then_by(mut self, field: impl Into<String>) -> Self {
        self.then_by = Some(field.into());
        self
    }
}
