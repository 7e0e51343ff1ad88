//! Core module containing fundamental traits and types for the crate

pub mod error;
pub mod field;
pub mod record;
pub mod service;
pub mod slug;

pub use error::{SyncError, SyncResult};
pub use field::{FieldFormat, FieldValue};
pub use record::{CatalogRecord, Record};
pub use service::{LoadResponse, SyncService, UploadReceipt, UploadService};
pub use slug::{is_valid_slug, slugify};
