//! Activity log entries shown on the dashboard

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::core::field::FieldValue;
use crate::core::record::CatalogRecord;
use crate::draft::schema::DraftSchema;
use crate::impl_record;

impl_record!(
    ActivityEntry,
    "activity_entry",
    "activity_entries",
    {
        actor: String,
        action: String,
        target: String,
        level: String,
        happened_at: DateTime<Utc>,
    }
);

impl CatalogRecord for ActivityEntry {
    fn searchable_fields() -> &'static [&'static str] {
        &["actor", "action", "target"]
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Uuid(self.id)),
            "actor" => Some(FieldValue::String(self.actor.clone())),
            "action" => Some(FieldValue::String(self.action.clone())),
            "target" => Some(FieldValue::String(self.target.clone())),
            "level" => Some(FieldValue::String(self.level.clone())),
            "happened_at" => Some(FieldValue::DateTime(self.happened_at)),
            "created_at" => Some(FieldValue::DateTime(self.created_at)),
            "updated_at" => Some(FieldValue::DateTime(self.updated_at)),
            _ => None,
        }
    }
}

impl ActivityEntry {
    /// The stock form for manually logged entries
    pub fn draft_schema() -> DraftSchema {
        DraftSchema::new("activity_entries", "actor")
            .require("action")
            .require("target")
            .default_field("level", json!("info"))
    }
}
