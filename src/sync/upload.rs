//! File upload services (`POST /api/upload`, multipart)

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::error::{SyncError, SyncResult};
use crate::core::service::{UploadReceipt, UploadService};

/// One upload accepted by [`InMemoryUploadService`]
#[derive(Debug, Clone, PartialEq)]
pub struct StoredUpload {
    pub file_name: String,
    pub bucket: String,
    pub folder: String,
    pub size: u64,
}

/// In-memory upload service for testing and development.
///
/// Returns deterministic `memory://` URLs and keeps a log of what was
/// received, so tests can assert on uploads without a server.
#[derive(Clone, Default)]
pub struct InMemoryUploadService {
    uploads: Arc<RwLock<Vec<StoredUpload>>>,
}

impl InMemoryUploadService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything uploaded so far, in order
    pub async fn uploads(&self) -> Vec<StoredUpload> {
        self.uploads.read().await.clone()
    }
}

#[async_trait]
impl UploadService for InMemoryUploadService {
    async fn upload(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        bucket: &str,
        folder: &str,
    ) -> SyncResult<UploadReceipt> {
        let receipt = UploadReceipt {
            url: format!("memory://{bucket}/{folder}/{file_name}"),
            size: bytes.len() as u64,
        };

        let mut uploads = self.uploads.write().await;
        uploads.push(StoredUpload {
            file_name: file_name.to_string(),
            bucket: bucket.to_string(),
            folder: folder.to_string(),
            size: receipt.size,
        });

        Ok(receipt)
    }
}

/// Upload service that posts multipart bodies to `{base_url}/api/upload`
#[cfg(feature = "rest")]
#[derive(Clone)]
pub struct RestUploadService {
    client: reqwest::Client,
    base_url: String,
    tenant_id: Option<uuid::Uuid>,
}

#[cfg(feature = "rest")]
impl RestUploadService {
    /// Create a service for `base_url` (trailing slashes are ignored)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            tenant_id: None,
        }
    }

    /// Attach a tenant id, sent as `X-Tenant-ID` on every request
    pub fn with_tenant(mut self, tenant_id: uuid::Uuid) -> Self {
        self.tenant_id = Some(tenant_id);
        self
    }

    /// Reuse an existing client (connection pooling across services)
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    fn upload_url(&self) -> String {
        format!("{}/api/upload", self.base_url)
    }
}

#[cfg(feature = "rest")]
#[async_trait]
impl UploadService for RestUploadService {
    async fn upload(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        bucket: &str,
        folder: &str,
    ) -> SyncResult<UploadReceipt> {
        use crate::sync::rest::TENANT_HEADER;

        let url = self.upload_url();
        tracing::debug!(file_name, bucket, folder, url, "upload request");

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("bucket", bucket.to_string())
            .text("folder", folder.to_string());

        let mut request = self.client.post(&url).multipart(form);
        if let Some(tenant_id) = &self.tenant_id {
            request = request.header(TENANT_HEADER, tenant_id.to_string());
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "upload failed");
            return Err(SyncError::from_status(
                "upload",
                status.as_u16(),
                body,
                None,
            ));
        }

        serde_json::from_str(&body).map_err(|e| SyncError::payload("upload", e))
    }
}
