//! User entity for the members admin page

use serde_json::json;

use crate::core::field::{FieldFormat, FieldValue};
use crate::core::record::CatalogRecord;
use crate::draft::schema::DraftSchema;
use crate::impl_record;

impl_record!(
    User,
    "user",
    "users",
    {
        name: String,
        email: String,
        role: String,
        status: String,
        plan: String,
    }
);

impl CatalogRecord for User {
    fn searchable_fields() -> &'static [&'static str] {
        &["name", "email"]
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Uuid(self.id)),
            "name" => Some(FieldValue::String(self.name.clone())),
            "email" => Some(FieldValue::String(self.email.clone())),
            "role" => Some(FieldValue::String(self.role.clone())),
            "status" => Some(FieldValue::String(self.status.clone())),
            "plan" => Some(FieldValue::String(self.plan.clone())),
            "created_at" => Some(FieldValue::DateTime(self.created_at)),
            "updated_at" => Some(FieldValue::DateTime(self.updated_at)),
            _ => None,
        }
    }
}

impl User {
    /// The stock create/edit form for users
    pub fn draft_schema() -> DraftSchema {
        DraftSchema::new("users", "name")
            .require("email")
            .format("email", FieldFormat::Email)
            .default_field("role", json!("member"))
            .default_field("status", json!("active"))
            .default_field("plan", json!("free"))
    }
}
