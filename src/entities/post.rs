//! Blog post entity
//!
//! Posts use the comma-separated tags input instead of the tag list
//! widget, so their schema routes a `tags_input` field into the `tags`
//! array at payload time.

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::core::field::{FieldFormat, FieldValue};
use crate::core::record::CatalogRecord;
use crate::draft::schema::DraftSchema;
use crate::impl_record;

impl_record!(
    Post,
    "post",
    "posts",
    {
        title: String,
        slug: String,
        excerpt: String,
        author: String,
        tags: Vec<String>,
        is_published: bool,
        published_at: Option<DateTime<Utc>>,
        views: i64,
    }
);

impl CatalogRecord for Post {
    fn searchable_fields() -> &'static [&'static str] {
        &["title", "slug", "excerpt", "author"]
    }

    fn tag_fields() -> &'static [&'static str] {
        &["tags"]
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Uuid(self.id)),
            "title" => Some(FieldValue::String(self.title.clone())),
            "slug" => Some(FieldValue::String(self.slug.clone())),
            "excerpt" => Some(FieldValue::String(self.excerpt.clone())),
            "author" => Some(FieldValue::String(self.author.clone())),
            "tags" => Some(FieldValue::StringList(self.tags.clone())),
            "is_published" => Some(FieldValue::Boolean(self.is_published)),
            "published_at" => Some(
                self.published_at
                    .map(FieldValue::DateTime)
                    .unwrap_or(FieldValue::Null),
            ),
            "views" => Some(FieldValue::Integer(self.views)),
            "created_at" => Some(FieldValue::DateTime(self.created_at)),
            "updated_at" => Some(FieldValue::DateTime(self.updated_at)),
            _ => None,
        }
    }
}

impl Post {
    /// The stock create/edit form for posts
    pub fn draft_schema() -> DraftSchema {
        DraftSchema::new("posts", "title")
            .with_slug("slug")
            .format("slug", FieldFormat::Slug)
            .with_tags_input("tags_input")
            .default_field("excerpt", json!(""))
            .default_field("author", json!(""))
            .default_field("is_published", json!(false))
            .default_field("views", json!(0))
    }
}
