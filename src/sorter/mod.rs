//! Multi-key sorting subsystem
//!
//! In-place sorting of record collections by a primary field with an
//! optional tie-break field, ascending or descending. Independent of the
//! query engine; shares no state with it.

mod errors;
mod sorter;
mod spec;

pub use errors::{SortError, SortResult};
pub use sorter::{sort_by, CollectionSorter};
pub use spec::{SortDirection, SortSpec};
