//! Query options
//!
//! Named options replace positional boolean flags so call sites state
//! which behaviors they select.

use serde::{Deserialize, Serialize};

/// Options controlling a `find` scan, all off by default
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FindOptions {
    /// Stop at the first match and return it bare
    pub only_one: bool,
    /// Record positions instead of values
    pub indexes: bool,
    /// Fold string case before comparison
    pub case_insensitive: bool,
}

impl FindOptions {
    /// Creates options with every behavior off
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop at the first match
    pub fn with_only_one(mut self) -> Self {
        self.only_one = true;
        self
    }

    /// Return positions instead of values
    pub fn with_indexes(mut self) -> Self {
        self.indexes = true;
        self
    }

    /// Fold string case before comparison
    pub fn with_case_insensitive(mut self) -> Self {
        self.case_insensitive = true;
        self
    }
}
