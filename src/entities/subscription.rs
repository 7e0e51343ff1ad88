//! Subscription entity for the billing admin page
//!
//! `renew_date` drives the default sort (soonest renewal last when
//! descending) and `amount` feeds the monthly revenue stat.

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::core::field::{FieldFormat, FieldValue};
use crate::core::record::CatalogRecord;
use crate::draft::schema::DraftSchema;
use crate::impl_record;

impl_record!(
    Subscription,
    "subscription",
    "subscriptions",
    {
        customer_email: String,
        plan: String,
        status: String,
        amount: f64,
        renew_date: DateTime<Utc>,
        started_at: DateTime<Utc>,
    }
);

impl CatalogRecord for Subscription {
    fn searchable_fields() -> &'static [&'static str] {
        &["customer_email", "plan"]
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Uuid(self.id)),
            "customer_email" => Some(FieldValue::String(self.customer_email.clone())),
            "plan" => Some(FieldValue::String(self.plan.clone())),
            "status" => Some(FieldValue::String(self.status.clone())),
            "amount" => Some(FieldValue::Float(self.amount)),
            "renew_date" => Some(FieldValue::DateTime(self.renew_date)),
            "started_at" => Some(FieldValue::DateTime(self.started_at)),
            "created_at" => Some(FieldValue::DateTime(self.created_at)),
            "updated_at" => Some(FieldValue::DateTime(self.updated_at)),
            _ => None,
        }
    }
}

impl Subscription {
    /// The stock create/edit form for subscriptions
    pub fn draft_schema() -> DraftSchema {
        DraftSchema::new("subscriptions", "customer_email")
            .require("plan")
            .format("customer_email", FieldFormat::Email)
            .default_field("status", json!("active"))
            .default_field("amount", json!(0.0))
    }
}
