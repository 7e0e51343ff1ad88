//! Record traits defining the core abstraction for all catalog types

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::field::FieldValue;

/// Base trait for every record the platform syncs and displays.
///
/// All records have:
/// - id: Unique identifier, immutable for the record's lifetime
/// - created_at: Creation timestamp
/// - updated_at: Last modification timestamp
///
/// The resource names map the type onto the REST API paths
/// (`/api/{resource_name}`).
pub trait Record: Clone + Send + Sync + 'static {
    /// The plural resource name used in URLs (e.g., "tools", "templates")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "tool", "template")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this record instance
    fn id(&self) -> Uuid;

    /// Get the creation timestamp
    fn created_at(&self) -> DateTime<Utc>;

    /// Get the last update timestamp
    fn updated_at(&self) -> DateTime<Utc>;
}

/// Field accessor registry that makes a record filterable and sortable.
///
/// The catalog engine never touches concrete structs; it asks the record
/// for named field projections and works on the returned [`FieldValue`]s.
/// Implementations list which fields text search scans and answer dynamic
/// field lookups.
pub trait CatalogRecord: Record {
    /// Fields scanned by free-text search, in addition to [`Self::tag_fields`]
    fn searchable_fields() -> &'static [&'static str];

    /// String-list fields whose elements text search also scans
    fn tag_fields() -> &'static [&'static str] {
        &[]
    }

    /// Get the value of a specific field by name.
    ///
    /// `None` means the record has no such field. Implementations may
    /// project derived fields that do not exist as struct members (for
    /// example a `status` string derived from an `is_active` flag).
    fn field(&self, name: &str) -> Option<FieldValue>;
}
