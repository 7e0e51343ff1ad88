//! In-memory implementation of SyncService for testing and development

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use indexmap::IndexMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::{SyncError, SyncResult};
use crate::core::record::Record;
use crate::core::service::{LoadResponse, SyncService};

/// In-memory sync service implementation.
///
/// Useful for testing and development. Behaves like the platform API:
/// ids and timestamps are assigned here, never taken from the payload,
/// and `load` returns records in insertion order.
#[derive(Clone)]
pub struct InMemorySyncService<R: Record> {
    records: Arc<RwLock<IndexMap<Uuid, R>>>,
}

impl<R> InMemorySyncService<R>
where
    R: Record + Serialize + DeserializeOwned,
{
    /// Create an empty in-memory sync service
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Create a service pre-seeded with records, keeping their ids
    pub async fn with_records(records: Vec<R>) -> Self {
        let service = Self::new();
        {
            let mut stored = service.records.write().await;
            for record in records {
                stored.insert(record.id(), record);
            }
        }
        service
    }

    /// Parse a stored-record JSON value back into `R`
    fn decode(value: Value) -> SyncResult<R> {
        serde_json::from_value(value).map_err(|e| SyncError::payload(R::resource_name(), e))
    }

    /// Require the payload to be a JSON object, like the API does
    fn as_object(payload: Value) -> SyncResult<serde_json::Map<String, Value>> {
        match payload {
            Value::Object(map) => Ok(map),
            other => Err(SyncError::payload(
                R::resource_name(),
                format!("expected a JSON object, got {other}"),
            )),
        }
    }
}

impl<R> Default for InMemorySyncService<R>
where
    R: Record + Serialize + DeserializeOwned,
{
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R> SyncService<R> for InMemorySyncService<R>
where
    R: Record + Serialize + DeserializeOwned,
{
    async fn load(&self) -> SyncResult<LoadResponse<R>> {
        let records = self.records.read().await;

        Ok(LoadResponse {
            items: records.values().cloned().collect(),
            stats: None,
        })
    }

    async fn create(&self, payload: Value) -> SyncResult<R> {
        let mut body = Self::as_object(payload)?;

        // Server-assigned fields win over anything the client sent
        let id = Uuid::new_v4();
        let now = Utc::now();
        body.insert("id".to_string(), json!(id));
        body.insert("created_at".to_string(), json!(now));
        body.insert("updated_at".to_string(), json!(now));

        let record = Self::decode(Value::Object(body))?;

        let mut records = self.records.write().await;
        records.insert(record.id(), record.clone());

        Ok(record)
    }

    async fn update(&self, id: &Uuid, patch: Value) -> SyncResult<R> {
        let patch = Self::as_object(patch)?;

        let mut records = self.records.write().await;

        let stored = records.get(id).ok_or(SyncError::NotFound {
            resource: R::resource_name(),
            id: *id,
        })?;

        let mut body = Self::as_object(
            serde_json::to_value(stored)
                .map_err(|e| SyncError::payload(R::resource_name(), e))?,
        )?;
        for (key, value) in patch {
            body.insert(key, value);
        }
        // The id is immutable and the server owns updated_at
        body.insert("id".to_string(), json!(id));
        body.insert("updated_at".to_string(), json!(Utc::now()));

        let record = Self::decode(Value::Object(body))?;
        records.insert(*id, record.clone());

        Ok(record)
    }

    async fn delete(&self, id: &Uuid) -> SyncResult<()> {
        let mut records = self.records.write().await;

        records
            .shift_remove(id)
            .map(|_| ())
            .ok_or(SyncError::NotFound {
                resource: R::resource_name(),
                id: *id,
            })
    }
}
