//! Form schemas and validation reports
//!
//! A [`DraftSchema`] declares what a record's form looks like: which
//! scalar fields exist, which are required, which formats apply and
//! which auxiliary structures (tags, features, metadata) the form
//! carries. Validation collects issues instead of failing fast so the
//! form can annotate every offending control at once.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::core::field::FieldFormat;

/// One failed check, addressed to the control that caused it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

/// The outcome of validating a draft: zero or more issues, never an error
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            field: field.into(),
            message: message.into(),
        });
    }

    /// First message attached to a field, for inline form display
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.issues
            .iter()
            .find(|issue| issue.field == field)
            .map(|issue| issue.message.as_str())
    }
}

/// Declarative description of a record's create/edit form
#[derive(Debug, Clone)]
pub struct DraftSchema {
    /// Plural resource name the payload targets
    pub resource: &'static str,
    /// The display-name field that drives slug derivation
    pub name_field: &'static str,
    /// The slug field, when the record has one
    pub slug_field: Option<&'static str>,
    /// Fields that must be present and non-empty
    pub required: Vec<&'static str>,
    /// Optional fields whose empty string becomes `null` in the payload
    pub nullable_when_empty: Vec<&'static str>,
    /// Format checks applied to non-empty string fields
    pub formats: Vec<(&'static str, FieldFormat)>,
    /// Whether the form carries a tag list
    pub has_tags: bool,
    /// Whether the form carries an ordered feature list
    pub has_features: bool,
    /// Whether the form carries key-value metadata
    pub has_metadata: bool,
    /// A comma-separated text field that feeds the tags array instead of
    /// the tag list widget
    pub tags_input_field: Option<&'static str>,
    /// Initial scalar values for a fresh draft
    pub defaults: Map<String, Value>,
}

impl DraftSchema {
    pub fn new(resource: &'static str, name_field: &'static str) -> Self {
        Self {
            resource,
            name_field,
            slug_field: None,
            required: vec![name_field],
            nullable_when_empty: Vec::new(),
            formats: Vec::new(),
            has_tags: false,
            has_features: false,
            has_metadata: false,
            tags_input_field: None,
            defaults: Map::new(),
        }
    }

    /// Derive `field` from the name field while the user has not touched it
    pub fn with_slug(mut self, field: &'static str) -> Self {
        self.slug_field = Some(field);
        self
    }

    /// Mark a field as required
    pub fn require(mut self, field: &'static str) -> Self {
        if !self.required.contains(&field) {
            self.required.push(field);
        }
        self
    }

    /// Send `null` instead of an empty string for this field
    pub fn nullable_when_empty(mut self, field: &'static str) -> Self {
        self.nullable_when_empty.push(field);
        self
    }

    /// Attach a format check to a field
    pub fn format(mut self, field: &'static str, format: FieldFormat) -> Self {
        self.formats.push((field, format));
        self
    }

    pub fn with_tags(mut self) -> Self {
        self.has_tags = true;
        self
    }

    pub fn with_features(mut self) -> Self {
        self.has_features = true;
        self
    }

    pub fn with_metadata(mut self) -> Self {
        self.has_metadata = true;
        self
    }

    /// Feed the tags array from a comma-separated text field
    pub fn with_tags_input(mut self, field: &'static str) -> Self {
        self.has_tags = true;
        self.tags_input_field = Some(field);
        self
    }

    /// Seed a scalar field on fresh drafts
    pub fn default_field(mut self, field: &str, value: Value) -> Self {
        self.defaults.insert(field.to_string(), value);
        self
    }

    /// Run every check against the draft's scalar fields.
    ///
    /// Required fields must be present and, for strings, non-blank.
    /// Format checks only apply to non-empty strings; emptiness is the
    /// required check's business.
    pub fn check(&self, fields: &Map<String, Value>) -> ValidationReport {
        let mut report = ValidationReport::default();

        for field in &self.required {
            let blank = match fields.get(*field) {
                None | Some(Value::Null) => true,
                Some(Value::String(s)) => s.trim().is_empty(),
                Some(_) => false,
            };
            if blank {
                report.push(*field, format!("{} is required", field));
            }
        }

        for (field, format) in &self.formats {
            if let Some(Value::String(s)) = fields.get(*field) {
                if !s.trim().is_empty() && !format.validate(s.trim()) {
                    report.push(*field, format_message(field, format));
                }
            }
        }

        report
    }
}

fn format_message(field: &str, format: &FieldFormat) -> String {
    match format {
        FieldFormat::Email => format!("{} must be a valid email address", field),
        FieldFormat::Url => format!("{} must be a valid URL", field),
        FieldFormat::Slug => format!(
            "{} may only contain lowercase letters, digits and hyphens",
            field
        ),
        FieldFormat::Custom(_) => format!("{} has an invalid format", field),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> DraftSchema {
        DraftSchema::new("tools", "name")
            .with_slug("slug")
            .require("category")
            .format("slug", FieldFormat::Slug)
            .format("docs_url", FieldFormat::Url)
    }

    #[test]
    fn test_missing_required_fields_are_reported() {
        let fields = Map::new();
        let report = schema().check(&fields);

        assert!(!report.is_valid());
        assert_eq!(report.message_for("name"), Some("name is required"));
        assert_eq!(report.message_for("category"), Some("category is required"));
    }

    #[test]
    fn test_blank_string_counts_as_missing() {
        let mut fields = Map::new();
        fields.insert("name".to_string(), json!("   "));
        fields.insert("category".to_string(), json!("developer"));

        let report = schema().check(&fields);
        assert_eq!(report.issues().len(), 1);
        assert_eq!(report.issues()[0].field, "name");
    }

    #[test]
    fn test_null_counts_as_missing() {
        let mut fields = Map::new();
        fields.insert("name".to_string(), json!(null));
        fields.insert("category".to_string(), json!("developer"));

        let report = schema().check(&fields);
        assert_eq!(report.message_for("name"), Some("name is required"));
    }

    #[test]
    fn test_format_check_applies_to_non_empty_strings_only() {
        let mut fields = Map::new();
        fields.insert("name".to_string(), json!("PDF Merger"));
        fields.insert("category".to_string(), json!("documents"));
        fields.insert("slug".to_string(), json!("PDF merger"));
        fields.insert("docs_url".to_string(), json!(""));

        let report = schema().check(&fields);
        assert_eq!(report.issues().len(), 1);
        assert_eq!(report.issues()[0].field, "slug");

        fields.insert("slug".to_string(), json!("pdf-merger"));
        let report = schema().check(&fields);
        assert!(report.is_valid());
    }

    #[test]
    fn test_valid_fields_produce_empty_report() {
        let mut fields = Map::new();
        fields.insert("name".to_string(), json!("PDF Merger"));
        fields.insert("category".to_string(), json!("documents"));
        fields.insert("slug".to_string(), json!("pdf-merger"));
        fields.insert("docs_url".to_string(), json!("https://docs.example.com"));

        let report = schema().check(&fields);
        assert!(report.is_valid());
        assert!(report.issues().is_empty());
    }

    #[test]
    fn test_require_deduplicates() {
        let schema = DraftSchema::new("tools", "name").require("name").require("name");
        assert_eq!(schema.required, vec!["name"]);
    }
}
