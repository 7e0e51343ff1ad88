//! Macros for reducing boilerplate when defining records
//!
//! Every record carries the same base fields (id, created_at, updated_at)
//! and the same [`Record`](crate::core::record::Record) plumbing; the macro
//! generates those so entity files only spell out what is specific to them:
//! the [`CatalogRecord`](crate::core::record::CatalogRecord) field registry
//! and the draft schema.

/// Complete macro to create a record type with automatic trait implementation
///
/// # Example
///
/// ```rust,ignore
/// use toolshed::impl_record;
///
/// impl_record!(
///     Gadget,
///     "gadget",
///     "gadgets",
///     {
///         name: String,
///         is_active: bool,
///     }
/// );
///
/// // Usage
/// let gadget = Gadget::new("Wrench".to_string(), true);
/// ```
#[macro_export]
macro_rules! impl_record {
    (
        $type:ident,
        $singular:expr,
        $plural:expr,
        {
            $( $specific_field:ident : $specific_type:ty ),* $(,)?
        }
    ) => {
        #[derive(Debug, Clone, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $type {
            /// Unique identifier for this record
            pub id: ::uuid::Uuid,

            /// When this record was created
            pub created_at: ::chrono::DateTime<::chrono::Utc>,

            /// When this record was last updated
            pub updated_at: ::chrono::DateTime<::chrono::Utc>,

            $( pub $specific_field : $specific_type ),*
        }

        impl $crate::core::record::Record for $type {
            fn resource_name() -> &'static str {
                $plural
            }

            fn resource_name_singular() -> &'static str {
                $singular
            }

            fn id(&self) -> ::uuid::Uuid {
                self.id
            }

            fn created_at(&self) -> ::chrono::DateTime<::chrono::Utc> {
                self.created_at
            }

            fn updated_at(&self) -> ::chrono::DateTime<::chrono::Utc> {
                self.updated_at
            }
        }

        // Utility methods
        impl $type {
            /// Create a new record with a fresh id and current timestamps
            pub fn new( $( $specific_field: $specific_type ),* ) -> Self {
                Self::new_with_id(::uuid::Uuid::new_v4(), $( $specific_field ),*)
            }

            /// Create a record with a caller-chosen id (seeding, fixtures)
            pub fn new_with_id(
                id: ::uuid::Uuid,
                $( $specific_field: $specific_type ),*
            ) -> Self {
                let now = ::chrono::Utc::now();
                Self {
                    id,
                    created_at: now,
                    updated_at: now,
                    $( $specific_field ),*
                }
            }

            /// Update the updated_at timestamp to now
            pub fn touch(&mut self) {
                self.updated_at = ::chrono::Utc::now();
            }
        }
    };
}
