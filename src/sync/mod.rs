//! Remote sync: the boundary between local collections and the platform API
//!
//! A [`Collection`] is the caller-owned snapshot the catalog engine reads
//! from; the [`SyncService`](crate::core::service::SyncService)
//! implementations move records between that snapshot and the API. The
//! server's response body is always the authority: reconciliation applies
//! what came back over the wire, never the locally constructed value.

pub mod collection;
pub mod in_memory;
#[cfg(feature = "rest")]
pub mod rest;
pub mod upload;

pub use collection::Collection;
pub use in_memory::InMemorySyncService;
#[cfg(feature = "rest")]
pub use rest::RestSyncService;
#[cfg(feature = "rest")]
pub use upload::RestUploadService;
pub use upload::InMemoryUploadService;
