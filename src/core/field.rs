//! Field value types and format validation

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::OnceLock;
use uuid::Uuid;

/// A polymorphic field value that can hold different types
///
/// Records project their fields into this enum so that filtering,
/// sorting and stats can work without knowing the concrete record type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Uuid(Uuid),
    DateTime(DateTime<Utc>),
    StringList(Vec<String>),
    Null,
}

impl FieldValue {
    /// Get the value as a string if possible
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as a boolean if possible
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Numeric projection: integers, floats and datetimes (epoch millis)
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            FieldValue::DateTime(dt) => Some(dt.timestamp_millis() as f64),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Case-insensitive equality against a string form of the value
    ///
    /// This is the comparison used by equality filters: strings compare
    /// case-insensitively, scalar kinds compare by parsed value, and
    /// lists / nulls never match.
    pub fn matches_str(&self, expected: &str) -> bool {
        match self {
            FieldValue::String(s) => s.to_lowercase() == expected.to_lowercase(),
            FieldValue::Integer(i) => expected.parse::<i64>().map(|p| p == *i).unwrap_or(false),
            FieldValue::Float(f) => expected.parse::<f64>().map(|p| p == *f).unwrap_or(false),
            FieldValue::Boolean(b) => match expected.to_lowercase().as_str() {
                "true" => *b,
                "false" => !*b,
                _ => false,
            },
            FieldValue::Uuid(u) => Uuid::parse_str(expected).map(|p| p == *u).unwrap_or(false),
            FieldValue::DateTime(dt) => DateTime::parse_from_rfc3339(expected)
                .map(|p| p.with_timezone(&Utc) == *dt)
                .unwrap_or(false),
            FieldValue::StringList(_) | FieldValue::Null => false,
        }
    }

    /// Substring match used by text search
    ///
    /// `needle` must already be lowercased. Strings match on their own
    /// content, string lists match if any element does.
    pub fn contains_text(&self, needle: &str) -> bool {
        match self {
            FieldValue::String(s) => s.to_lowercase().contains(needle),
            FieldValue::StringList(items) => {
                items.iter().any(|item| item.to_lowercase().contains(needle))
            }
            _ => false,
        }
    }

    /// Total ordering across all variants
    ///
    /// Same-kind values compare by value (strings case-insensitively,
    /// integer and float unified numerically). Mixed kinds fall back to a
    /// fixed variant rank so the order stays total. Null ranks last.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        use FieldValue::*;
        match (self, other) {
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Integer(a), Float(b)) => (*a as f64).partial_cmp(b).unwrap_or(Ordering::Equal),
            (Float(a), Integer(b)) => a.partial_cmp(&(*b as f64)).unwrap_or(Ordering::Equal),
            (Boolean(a), Boolean(b)) => a.cmp(b),
            (DateTime(a), DateTime(b)) => a.cmp(b),
            (Uuid(a), Uuid(b)) => a.cmp(b),
            (String(a), String(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (StringList(a), StringList(b)) => {
                let a: Vec<std::string::String> = a.iter().map(|s| s.to_lowercase()).collect();
                let b: Vec<std::string::String> = b.iter().map(|s| s.to_lowercase()).collect();
                a.cmp(&b)
            }
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            FieldValue::Boolean(_) => 0,
            FieldValue::Integer(_) | FieldValue::Float(_) => 1,
            FieldValue::DateTime(_) => 2,
            FieldValue::Uuid(_) => 3,
            FieldValue::String(_) => 4,
            FieldValue::StringList(_) => 5,
            FieldValue::Null => 6,
        }
    }
}

/// Field format validators for draft validation
#[derive(Debug, Clone)]
pub enum FieldFormat {
    Email,
    Url,
    Slug,
    Custom(Regex),
}

impl FieldFormat {
    /// Validate a string value against this format
    pub fn validate(&self, value: &str) -> bool {
        match self {
            FieldFormat::Email => Self::is_valid_email(value),
            FieldFormat::Url => Self::is_valid_url(value),
            FieldFormat::Slug => crate::core::slug::is_valid_slug(value),
            FieldFormat::Custom(regex) => regex.is_match(value),
        }
    }

    fn is_valid_email(email: &str) -> bool {
        static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = EMAIL_REGEX.get_or_init(|| {
            Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
        });
        regex.is_match(email)
    }

    fn is_valid_url(url: &str) -> bool {
        static URL_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = URL_REGEX.get_or_init(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap());
        regex.is_match(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_string() {
        let value = FieldValue::String("test".to_string());
        assert_eq!(value.as_str(), Some("test"));
        assert_eq!(value.as_bool(), None);
        assert!(!value.is_missing());
    }

    #[test]
    fn test_field_value_null() {
        let value = FieldValue::Null;
        assert!(value.is_missing());
        assert_eq!(value.as_str(), None);
    }

    #[test]
    fn test_as_f64_projections() {
        assert_eq!(FieldValue::Integer(42).as_f64(), Some(42.0));
        assert_eq!(FieldValue::Float(9.99).as_f64(), Some(9.99));
        assert_eq!(FieldValue::String("42".to_string()).as_f64(), None);

        let dt = Utc::now();
        assert_eq!(
            FieldValue::DateTime(dt).as_f64(),
            Some(dt.timestamp_millis() as f64)
        );
    }

    #[test]
    fn test_matches_str_is_case_insensitive() {
        let value = FieldValue::String("Active".to_string());
        assert!(value.matches_str("active"));
        assert!(value.matches_str("ACTIVE"));
        assert!(!value.matches_str("inactive"));
    }

    #[test]
    fn test_matches_str_scalar_kinds() {
        assert!(FieldValue::Integer(42).matches_str("42"));
        assert!(!FieldValue::Integer(42).matches_str("43"));
        assert!(FieldValue::Float(9.99).matches_str("9.99"));
        assert!(FieldValue::Boolean(true).matches_str("true"));
        assert!(FieldValue::Boolean(true).matches_str("TRUE"));
        assert!(!FieldValue::Boolean(true).matches_str("false"));

        let id = Uuid::new_v4();
        assert!(FieldValue::Uuid(id).matches_str(&id.to_string()));
        assert!(!FieldValue::Uuid(id).matches_str("not-a-uuid"));
    }

    #[test]
    fn test_matches_str_never_matches_lists_or_null() {
        let list = FieldValue::StringList(vec!["pdf".to_string()]);
        assert!(!list.matches_str("pdf"));
        assert!(!FieldValue::Null.matches_str(""));
    }

    #[test]
    fn test_contains_text() {
        let name = FieldValue::String("JSON Formatter".to_string());
        assert!(name.contains_text("json"));
        assert!(name.contains_text("format"));
        assert!(!name.contains_text("xml"));

        let tags = FieldValue::StringList(vec!["pdf".to_string(), "Converter".to_string()]);
        assert!(tags.contains_text("convert"));
        assert!(!tags.contains_text("image"));

        assert!(!FieldValue::Integer(7).contains_text("7"));
    }

    #[test]
    fn test_compare_same_kind() {
        let a = FieldValue::String("apple".to_string());
        let b = FieldValue::String("Banana".to_string());
        assert_eq!(a.compare(&b), Ordering::Less);

        assert_eq!(
            FieldValue::Integer(2).compare(&FieldValue::Float(2.5)),
            Ordering::Less
        );

        let earlier = FieldValue::DateTime(Utc::now() - chrono::Duration::days(1));
        let later = FieldValue::DateTime(Utc::now());
        assert_eq!(earlier.compare(&later), Ordering::Less);
    }

    #[test]
    fn test_compare_mixed_kinds_is_total() {
        let int = FieldValue::Integer(1);
        let string = FieldValue::String("a".to_string());
        assert_eq!(int.compare(&string), Ordering::Less);
        assert_eq!(string.compare(&int), Ordering::Greater);
        assert_eq!(FieldValue::Null.compare(&string), Ordering::Greater);
        assert_eq!(FieldValue::Null.compare(&FieldValue::Null), Ordering::Equal);
    }

    #[test]
    fn test_email_validation() {
        let format = FieldFormat::Email;

        assert!(format.validate("test@example.com"));
        assert!(format.validate("user.name+tag@example.co.uk"));
        assert!(!format.validate("invalid-email"));
        assert!(!format.validate("@example.com"));
    }

    #[test]
    fn test_url_validation() {
        let format = FieldFormat::Url;

        assert!(format.validate("https://example.com"));
        assert!(format.validate("http://test.com/path?query=1"));
        assert!(!format.validate("not a url"));
    }

    #[test]
    fn test_slug_validation() {
        let format = FieldFormat::Slug;

        assert!(format.validate("json-formatter"));
        assert!(format.validate("a1"));
        assert!(!format.validate("JSON Formatter"));
        assert!(!format.validate("-leading"));
        assert!(!format.validate(""));
    }

    #[test]
    fn test_custom_regex_validation() {
        let format = FieldFormat::Custom(Regex::new(r"^[A-Z]{3}\d{3}$").unwrap());

        assert!(format.validate("ABC123"));
        assert!(!format.validate("abc123"));
        assert!(!format.validate("ABCD123"));
    }

    #[test]
    fn test_serde_roundtrip_string_list() {
        let original = FieldValue::StringList(vec!["pdf".to_string(), "ocr".to_string()]);
        let json = serde_json::to_string(&original).expect("serialize should succeed");
        assert_eq!(json, r#"["pdf","ocr"]"#);
        let restored: FieldValue =
            serde_json::from_str(&json).expect("deserialize should succeed");
        assert_eq!(original, restored);
    }

    #[test]
    fn test_serde_roundtrip_null() {
        let original = FieldValue::Null;
        let json = serde_json::to_string(&original).expect("serialize should succeed");
        let restored: FieldValue =
            serde_json::from_str(&json).expect("deserialize should succeed");
        assert_eq!(original, restored);
    }
}
