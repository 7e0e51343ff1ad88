//! # Toolshed
//!
//! Client-side catalog engine, form state controller and remote sync adapter
//! for the tools platform's admin pages.
//!
//! ## Features
//!
//! - **Pure Catalog Engine**: Filtering, sorting and derived stats over owned
//!   record collections, no I/O anywhere
//! - **Field Projections**: Records expose named [`FieldValue`] projections so
//!   the engine never touches concrete structs
//! - **Form Drafts**: Schema-driven create/edit state with slug derivation,
//!   tag/feature lists, metadata and wire-shape payload projection
//! - **Remote Sync**: Async CRUD services reconciling server-authoritative
//!   responses into local collections by id
//! - **Configuration-Based Pages**: Default sort and stat definitions per
//!   admin page via YAML configuration
//! - **Automatic Timestamps**: created_at and updated_at managed by the
//!   record macro
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use toolshed::prelude::*;
//!
//! // Load a collection through a sync service, then run the pure engine
//! let service = InMemorySyncService::<Tool>::new();
//! let mut collection = Collection::new();
//! collection.replace_all(service.load().await?.items);
//!
//! let query = CatalogQuery::new()
//!     .with_filter(FilterSpec::new().with_equals("status", "active"))
//!     .with_sort(SortSpec::desc("created_at"));
//! let visible = query.apply(collection.snapshot());
//!
//! // Drive a create form and push the payload back
//! let mut draft = Draft::create(Tool::draft_schema());
//! draft.set_field("name", "JSON Formatter".into());
//! assert!(draft.validate().is_valid());
//! let created = service.create(draft.to_payload()).await?;
//! collection.apply_created(created);
//! ```
//!
//! [`FieldValue`]: crate::core::field::FieldValue

pub mod catalog;
pub mod config;
pub mod core;
pub mod draft;
pub mod entities;
pub mod sync;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{SyncError, SyncResult},
        field::{FieldFormat, FieldValue},
        record::{CatalogRecord, Record},
        service::{LoadResponse, SyncService, UploadReceipt, UploadService},
        slug::{is_valid_slug, slugify},
    };

    // === Catalog engine ===
    pub use crate::catalog::{
        filter::{filter_records, FilterSpec, Selection, Toggle},
        query::CatalogQuery,
        sort::{sort_records, SortDirection, SortSpec},
        stats::{derive_stats, StatDefinition, StatKind, StatValue},
    };

    // === Form drafts ===
    pub use crate::draft::{
        schema::{DraftSchema, ValidationIssue, ValidationReport},
        split_tag_input, Draft, DraftMode, ListField,
    };

    // === Macros ===
    pub use crate::impl_record;

    // === Entities ===
    pub use crate::entities::{ActivityEntry, Post, Subscription, Template, Tool, User};

    // === Sync ===
    pub use crate::sync::{Collection, InMemorySyncService, InMemoryUploadService};
    #[cfg(feature = "rest")]
    pub use crate::sync::{RestSyncService, RestUploadService};

    // === Config ===
    pub use crate::config::{CatalogConfig, PageConfig};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use indexmap::IndexMap;
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
