//! Service traits for the remote sync boundary

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::core::error::SyncResult;
use crate::core::record::Record;

/// Body shape of a `GET /api/{resource}` response.
///
/// The server may attach precomputed stats next to the items; callers
/// that prefer local figures derive them from the items instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadResponse<R> {
    pub items: Vec<R>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Value>,
}

/// Body shape of a successful upload response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadReceipt {
    pub url: String,
    pub size: u64,
}

/// CRUD boundary between a local [`Collection`](crate::sync::Collection)
/// and the platform API.
///
/// Implementations never touch local state; callers reconcile the returned
/// records into their collection by id. Mutations take JSON payloads (the
/// wire shape a [`Draft`](crate::draft::Draft) projects) and return the
/// server's authoritative record. Concurrent writers are resolved
/// last-write-wins by the server; this trait does no retrying, debouncing
/// or cancellation.
#[async_trait]
pub trait SyncService<R: Record>: Send + Sync {
    /// Fetch the full collection for this resource
    async fn load(&self) -> SyncResult<LoadResponse<R>>;

    /// Create a record from a payload, returning the stored record
    async fn create(&self, payload: Value) -> SyncResult<R>;

    /// Patch an existing record, returning the stored record
    async fn update(&self, id: &Uuid, patch: Value) -> SyncResult<R>;

    /// Delete a record by id
    async fn delete(&self, id: &Uuid) -> SyncResult<()>;
}

/// File upload boundary (`POST /api/upload`, multipart)
#[async_trait]
pub trait UploadService: Send + Sync {
    /// Upload a file into a bucket/folder, returning its public URL
    async fn upload(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        bucket: &str,
        folder: &str,
    ) -> SyncResult<UploadReceipt>;
}
