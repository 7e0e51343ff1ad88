//! Template entity: downloadable starter kits sold on the marketplace
//!
//! The optional `category_id` is the canonical nullable column: records
//! without one project `FieldValue::Null`, so an equality filter on
//! `category_id` never matches them.

use serde_json::json;
use uuid::Uuid;

use crate::core::field::{FieldFormat, FieldValue};
use crate::core::record::CatalogRecord;
use crate::draft::schema::DraftSchema;
use crate::impl_record;

impl_record!(
    Template,
    "template",
    "templates",
    {
        name: String,
        slug: String,
        description: String,
        category_id: Option<Uuid>,
        tags: Vec<String>,
        is_premium: bool,
        price: f64,
        downloads: i64,
        file_url: String,
        preview_url: Option<String>,
        status: String,
    }
);

impl CatalogRecord for Template {
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
            "category_id" => Some(
                self.category_id
                    .map(FieldValue::Uuid)
                    .unwrap_or(FieldValue::Null),
            ),
            "tags" => Some(FieldValue::StringList(self.tags.clone())),
            "is_premium" => Some(FieldValue::Boolean(self.is_premium)),
            "price" => Some(FieldValue::Float(self.price)),
            "downloads" => Some(FieldValue::Integer(self.downloads)),
            "file_url" => Some(FieldValue::String(self.file_url.clone())),
            "preview_url" => Some(
                self.preview_url
                    .clone()
                    .map(FieldValue::String)
                    .unwrap_or(FieldValue::Null),
            ),
            "status" => Some(FieldValue::String(self.status.clone())),
            "created_at" => Some(FieldValue::DateTime(self.created_at)),
            "updated_at" => Some(FieldValue::DateTime(self.updated_at)),
            _ => None,
        }
    }
}

impl Template {
    /// The stock create/edit form for templates
    pub fn draft_schema() -> DraftSchema {
        DraftSchema::new("templates", "name")
            .with_slug("slug")
            .nullable_when_empty("category_id")
            .nullable_when_empty("preview_url")
            .format("slug", FieldFormat::Slug)
            .format("file_url", FieldFormat::Url)
            .format("preview_url", FieldFormat::Url)
            .with_tags()
            .default_field("description", json!(""))
            .default_field("is_premium", json!(false))
            .default_field("price", json!(0.0))
            .default_field("downloads", json!(0))
            .default_field("status", json!("draft"))
    }
}
