//! Pure catalog engine: filtering, sorting and derived stats
//!
//! Everything in this module is deterministic and side-effect free. The
//! engine consumes owned `Vec`s of records, reads field projections
//! through [`CatalogRecord`](crate::core::record::CatalogRecord) and hands
//! back a new ordering of the same records.

pub mod filter;
pub mod query;
pub mod sort;
pub mod stats;

pub use filter::{filter_records, FilterSpec, Selection, Toggle};
pub use query::CatalogQuery;
pub use sort::{sort_records, SortDirection, SortSpec};
pub use stats::{derive_stats, StatDefinition, StatKind, StatValue};
