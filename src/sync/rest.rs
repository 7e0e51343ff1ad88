//! REST implementation of SyncService backed by the platform API

use std::marker::PhantomData;

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

use crate::core::error::{SyncError, SyncResult};
use crate::core::record::Record;
use crate::core::service::{LoadResponse, SyncService};

/// Header carrying the tenant on every request, for multi-tenant isolation
pub const TENANT_HEADER: &str = "X-Tenant-ID";

/// Sync service that talks to `{base_url}/api/{resource}` over HTTP.
///
/// One instance per resource type; the resource segment comes from
/// [`Record::resource_name`]. All bodies are JSON. Responses are decoded
/// from text so a malformed body surfaces as [`SyncError::Payload`]
/// instead of a transport error.
#[derive(Clone)]
pub struct RestSyncService<R: Record> {
    client: reqwest::Client,
    base_url: String,
    tenant_id: Option<Uuid>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> RestSyncService<R> {
    /// Create a service for `base_url` (trailing slashes are ignored)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            tenant_id: None,
            _record: PhantomData,
        }
    }

    /// Attach a tenant id, sent as `X-Tenant-ID` on every request
    pub fn with_tenant(mut self, tenant_id: Uuid) -> Self {
        self.tenant_id = Some(tenant_id);
        self
    }

    /// Reuse an existing client (connection pooling across services)
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    fn collection_url(&self) -> String {
        format!("{}/api/{}", self.base_url, R::resource_name())
    }

    fn record_url(&self, id: &Uuid) -> String {
        format!("{}/{}", self.collection_url(), id)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        tracing::debug!(resource = R::resource_name(), %method, url, "sync request");

        let mut request = self.client.request(method, url);
        if let Some(tenant_id) = &self.tenant_id {
            request = request.header(TENANT_HEADER, tenant_id.to_string());
        }
        request
    }

    /// Turn a response into `T`, classifying non-success statuses.
    ///
    /// `id` is the mutation target, so a 404 can be reported as
    /// [`SyncError::NotFound`].
    async fn decode<T: DeserializeOwned>(response: Response, id: Option<Uuid>) -> SyncResult<T> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(
                resource = R::resource_name(),
                status = status.as_u16(),
                "sync request failed"
            );
            return Err(SyncError::from_status(
                R::resource_name(),
                status.as_u16(),
                body,
                id,
            ));
        }

        serde_json::from_str(&body).map_err(|e| SyncError::payload(R::resource_name(), e))
    }

    /// Like [`Self::decode`] but for endpoints whose body we discard
    async fn expect_success(response: Response, id: Option<Uuid>) -> SyncResult<()> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await?;
            tracing::warn!(
                resource = R::resource_name(),
                status = status.as_u16(),
                "sync request failed"
            );
            return Err(SyncError::from_status(
                R::resource_name(),
                status.as_u16(),
                body,
                id,
            ));
        }

        Ok(())
    }
}

#[async_trait]
impl<R> SyncService<R> for RestSyncService<R>
where
    R: Record + DeserializeOwned,
{
    async fn load(&self) -> SyncResult<LoadResponse<R>> {
        let response = self
            .request(Method::GET, &self.collection_url())
            .send()
            .await?;

        Self::decode(response, None).await
    }

    async fn create(&self, payload: Value) -> SyncResult<R> {
        let response = self
            .request(Method::POST, &self.collection_url())
            .json(&payload)
            .send()
            .await?;

        Self::decode(response, None).await
    }

    async fn update(&self, id: &Uuid, patch: Value) -> SyncResult<R> {
        let response = self
            .request(Method::PATCH, &self.record_url(id))
            .json(&patch)
            .send()
            .await?;

        Self::decode(response, Some(*id)).await
    }

    async fn delete(&self, id: &Uuid) -> SyncResult<()> {
        let response = self
            .request(Method::DELETE, &self.record_url(id))
            .send()
            .await?;

        Self::expect_success(response, Some(*id)).await
    }
}
