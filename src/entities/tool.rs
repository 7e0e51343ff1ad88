//! Tool entity: the platform's primary catalog record
//!
//! Tools carry the full feature set the form controller supports (tags,
//! ordered features, key-value metadata), which makes them the reference
//! entity for the admin pages. The `status` filter the tools page exposes
//! is not a stored column; it is derived from `is_active` in the field
//! registry.

use indexmap::IndexMap;
use serde_json::json;

use crate::core::field::{FieldFormat, FieldValue};
use crate::core::record::CatalogRecord;
use crate::draft::schema::DraftSchema;
use crate::impl_record;

impl_record!(
    Tool,
    "tool",
    "tools",
    {
        name: String,
        slug: String,
        description: String,
        category: String,
        tags: Vec<String>,
        features: Vec<String>,
        metadata: IndexMap<String, String>,
        is_active: bool,
        is_premium: bool,
        usage_count: i64,
    }
);

impl CatalogRecord for Tool {
    fn searchable_fields() -> &'static [&'static str] {
        &["name", "slug", "description"]
    }

    fn tag_fields() -> &'static [&'static str] {
        &["tags"]
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Uuid(self.id)),
            "name" => Some(FieldValue::String(self.name.clone())),
            "slug" => Some(FieldValue::String(self.slug.clone())),
            "description" => Some(FieldValue::String(self.description.clone())),
            "category" => Some(FieldValue::String(self.category.clone())),
            "tags" => Some(FieldValue::StringList(self.tags.clone())),
            "features" => Some(FieldValue::StringList(self.features.clone())),
            "is_active" => Some(FieldValue::Boolean(self.is_active)),
            "is_premium" => Some(FieldValue::Boolean(self.is_premium)),
            "usage_count" => Some(FieldValue::Integer(self.usage_count)),
            // Derived: the admin page filters on "status", not "is_active"
            "status" => Some(FieldValue::String(
                if self.is_active { "active" } else { "inactive" }.to_string(),
            )),
            "created_at" => Some(FieldValue::DateTime(self.created_at)),
            "updated_at" => Some(FieldValue::DateTime(self.updated_at)),
            _ => None,
        }
    }
}

impl Tool {
    /// The stock create/edit form for tools
    pub fn draft_schema() -> DraftSchema {
        DraftSchema::new("tools", "name")
            .with_slug("slug")
            .require("category")
            .format("slug", FieldFormat::Slug)
            .with_tags()
            .with_features()
            .with_metadata()
            .default_field("description", json!(""))
            .default_field("category", json!(""))
            .default_field("is_active", json!(true))
            .default_field("is_premium", json!(false))
            .default_field("usage_count", json!(0))
    }
}
