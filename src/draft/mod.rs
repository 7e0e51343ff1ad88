//! Form state for creating and editing records
//!
//! A [`Draft`] owns everything a create/edit form displays: scalar
//! fields, tag and feature lists, key-value metadata and the slug
//! latch. Operations never fail; invalid input is a no-op whose
//! outcome the return value reports, and [`Draft::validate`] returns
//! collected issues rather than an error. [`Draft::to_payload`]
//! projects the state into the JSON body the API expects.

pub mod schema;

use indexmap::IndexMap;
use serde_json::{json, Map, Value};
use uuid::Uuid;

use crate::core::slug::slugify;

pub use schema::{DraftSchema, ValidationIssue, ValidationReport};

/// Whether a draft creates a new record or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftMode {
    Create,
    Edit(Uuid),
}

/// The two list structures a form can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListField {
    /// Unordered set of short labels; duplicates are rejected
    Tags,
    /// Ordered list of selling points; duplicates are allowed
    Features,
}

/// Split comma-separated tag entry into trimmed, non-empty items.
///
/// ```
/// use toolshed::draft::split_tag_input;
///
/// assert_eq!(split_tag_input("a, b, ,c"), vec!["a", "b", "c"]);
/// assert!(split_tag_input("  ,  ").is_empty());
/// ```
pub fn split_tag_input(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn dedup_tags(items: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn string_items(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// Mutable form state for one record
#[derive(Debug, Clone)]
pub struct Draft {
    schema: DraftSchema,
    mode: DraftMode,
    fields: Map<String, Value>,
    tags: Vec<String>,
    features: Vec<String>,
    metadata: IndexMap<String, String>,
    slug_edited: bool,
}

impl Draft {
    /// Start a fresh draft seeded with the schema's defaults
    pub fn create(schema: DraftSchema) -> Self {
        let fields = schema.defaults.clone();
        Self {
            schema,
            mode: DraftMode::Create,
            fields,
            tags: Vec::new(),
            features: Vec::new(),
            metadata: IndexMap::new(),
            slug_edited: false,
        }
    }

    /// Start an edit draft seeded from an existing record's JSON.
    ///
    /// `id`, `created_at` and `updated_at` never become form fields;
    /// tags, features and metadata move into their dedicated structures
    /// when the schema carries them.
    pub fn edit(schema: DraftSchema, id: Uuid, source: &Value) -> Self {
        let mut draft = Self {
            schema,
            mode: DraftMode::Edit(id),
            fields: Map::new(),
            tags: Vec::new(),
            features: Vec::new(),
            metadata: IndexMap::new(),
            slug_edited: false,
        };

        let Some(object) = source.as_object() else {
            return draft;
        };

        for (key, value) in object {
            match key.as_str() {
                "id" | "created_at" | "updated_at" => {}
                "tags" if draft.schema.has_tags => {
                    let tags = string_items(value);
                    match draft.schema.tags_input_field {
                        Some(input) => {
                            draft
                                .fields
                                .insert(input.to_string(), Value::String(tags.join(", ")));
                        }
                        None => draft.tags = tags,
                    }
                }
                "features" if draft.schema.has_features => {
                    draft.features = string_items(value);
                }
                "metadata" if draft.schema.has_metadata => {
                    if let Some(entries) = value.as_object() {
                        for (k, v) in entries {
                            if let Some(text) = scalar_to_string(v) {
                                draft.metadata.insert(k.clone(), text);
                            }
                        }
                    }
                }
                _ => {
                    draft.fields.insert(key.clone(), value.clone());
                }
            }
        }

        draft
    }

    pub fn mode(&self) -> DraftMode {
        self.mode
    }

    pub fn is_create(&self) -> bool {
        matches!(self.mode, DraftMode::Create)
    }

    /// Plural resource name the payload targets
    pub fn resource(&self) -> &'static str {
        self.schema.resource
    }

    pub fn schema(&self) -> &DraftSchema {
        &self.schema
    }

    /// Current value of a scalar field
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Current string value of a scalar field
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Replace one scalar field.
    ///
    /// While the draft creates a new record and the slug has never been
    /// touched, setting the name field also derives the slug from it.
    /// Setting the slug field directly stops that derivation for good.
    pub fn set_field(&mut self, name: &str, value: Value) {
        if self.schema.slug_field == Some(name) {
            self.slug_edited = true;
        }

        let derive_slug = self.is_create() && !self.slug_edited && name == self.schema.name_field;
        if derive_slug {
            if let (Some(slug_field), Some(text)) = (self.schema.slug_field, value.as_str()) {
                self.fields
                    .insert(slug_field.to_string(), Value::String(slugify(text)));
            }
        }

        self.fields.insert(name.to_string(), value);
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn metadata(&self) -> &IndexMap<String, String> {
        &self.metadata
    }

    /// Append an item to a list field.
    ///
    /// The item is trimmed first; empty input is rejected. Tags reject
    /// exact duplicates, features keep every entry. Returns whether the
    /// item was added.
    pub fn add_list_item(&mut self, list: ListField, item: &str) -> bool {
        let trimmed = item.trim();
        if trimmed.is_empty() {
            return false;
        }

        match list {
            ListField::Tags => {
                if self.tags.iter().any(|tag| tag == trimmed) {
                    return false;
                }
                self.tags.push(trimmed.to_string());
                true
            }
            ListField::Features => {
                self.features.push(trimmed.to_string());
                true
            }
        }
    }

    /// Remove a list item by position, returning it when in range
    pub fn remove_list_item(&mut self, list: ListField, index: usize) -> Option<String> {
        let items = match list {
            ListField::Tags => &mut self.tags,
            ListField::Features => &mut self.features,
        };

        if index < items.len() {
            Some(items.remove(index))
        } else {
            None
        }
    }

    /// Insert or replace a metadata entry.
    ///
    /// Key and value are trimmed; either being empty rejects the entry.
    pub fn set_metadata_entry(&mut self, key: &str, value: &str) -> bool {
        let key = key.trim();
        let value = value.trim();
        if key.is_empty() || value.is_empty() {
            return false;
        }

        self.metadata.insert(key.to_string(), value.to_string());
        true
    }

    /// Remove a metadata entry, returning its value when present
    pub fn remove_metadata_entry(&mut self, key: &str) -> Option<String> {
        self.metadata.shift_remove(key)
    }

    /// Replace the whole tag state from comma-separated text.
    ///
    /// Forms with a tags input field store the raw text (splitting
    /// happens at payload time); forms with a tag-list widget get the
    /// split, deduplicated items directly.
    pub fn set_tags_input(&mut self, raw: &str) {
        match self.schema.tags_input_field {
            Some(input) => {
                self.fields
                    .insert(input.to_string(), Value::String(raw.to_string()));
            }
            None => {
                self.tags = dedup_tags(split_tag_input(raw));
            }
        }
    }

    /// Check the draft against its schema, collecting every issue
    pub fn validate(&self) -> ValidationReport {
        self.schema.check(&self.fields)
    }

    /// Project the draft into the JSON body the API expects.
    ///
    /// Empty strings in schema-listed optional fields become `null`, the
    /// tags input field (when present) is split into the `tags` array and
    /// dropped from the scalars, and edit drafts carry their record id.
    pub fn to_payload(&self) -> Value {
        let mut payload = self.fields.clone();

        for field in &self.schema.nullable_when_empty {
            if let Some(Value::String(s)) = payload.get(*field) {
                if s.trim().is_empty() {
                    payload.insert(field.to_string(), Value::Null);
                }
            }
        }

        if self.schema.has_tags {
            let tags = match self.schema.tags_input_field {
                Some(input) => {
                    let raw = match payload.remove(input) {
                        Some(Value::String(s)) => s,
                        _ => String::new(),
                    };
                    dedup_tags(split_tag_input(&raw))
                }
                None => self.tags.clone(),
            };
            payload.insert("tags".to_string(), json!(tags));
        }

        if self.schema.has_features {
            payload.insert("features".to_string(), json!(self.features));
        }

        if self.schema.has_metadata {
            payload.insert("metadata".to_string(), json!(self.metadata));
        }

        if let DraftMode::Edit(id) = self.mode {
            payload.insert("id".to_string(), json!(id));
        }

        Value::Object(payload)
    }
}
