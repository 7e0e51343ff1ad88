//! Filtering over record collections
//!
//! A [`FilterSpec`] mirrors the controls of a catalog page: one free-text
//! search box, any number of equality dropdowns and any number of boolean
//! toggles. Dropdowns and toggles carry an explicit "all" position that
//! never excludes anything, so a page can serialize its whole control state
//! without special-casing unset controls.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::record::CatalogRecord;

/// One equality dropdown: either the "all" position or a concrete value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Is(String),
}

impl Selection {
    /// Build a selection from raw control input, mapping `"all"` to [`Selection::All`]
    pub fn from_input(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("all") {
            Selection::All
        } else {
            Selection::Is(raw.to_string())
        }
    }
}

impl Serialize for Selection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Selection::All => serializer.serialize_str("all"),
            Selection::Is(value) => serializer.serialize_str(value),
        }
    }
}

impl<'de> Deserialize<'de> for Selection {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Selection::from_input(&raw))
    }
}

/// One boolean toggle: "all", or only records where the flag is `true`/`false`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Toggle {
    #[default]
    All,
    Only(bool),
}

impl Serialize for Toggle {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Toggle::All => serializer.serialize_str("all"),
            Toggle::Only(value) => serializer.serialize_bool(*value),
        }
    }
}

impl<'de> Deserialize<'de> for Toggle {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Bool(bool),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Bool(value) => Ok(Toggle::Only(value)),
            Raw::Text(text) if text.eq_ignore_ascii_case("all") => Ok(Toggle::All),
            Raw::Text(text) => match text.to_lowercase().as_str() {
                "true" => Ok(Toggle::Only(true)),
                "false" => Ok(Toggle::Only(false)),
                other => Err(serde::de::Error::custom(format!(
                    "expected \"all\", \"true\" or \"false\", got \"{}\"",
                    other
                ))),
            },
        }
    }
}

/// The complete filter state of a catalog page
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    /// Free-text query matched against searchable and tag fields
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text_query: String,

    /// Equality filters keyed by field name
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub equality: BTreeMap<String, Selection>,

    /// Boolean filters keyed by field name
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub toggles: BTreeMap<String, Toggle>,
}

impl FilterSpec {
    /// A spec with every control in its "all" position
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text query
    pub fn with_text(mut self, query: impl Into<String>) -> Self {
        self.text_query = query.into();
        self
    }

    /// Require `field` to equal `value` (case-insensitive)
    pub fn with_equals(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.equality
            .insert(field.into(), Selection::Is(value.into()));
        self
    }

    /// Put `field`'s dropdown in the "all" position explicitly
    pub fn with_any(mut self, field: impl Into<String>) -> Self {
        self.equality.insert(field.into(), Selection::All);
        self
    }

    /// Require `field` to be the given boolean
    pub fn with_toggle(mut self, field: impl Into<String>, value: bool) -> Self {
        self.toggles.insert(field.into(), Toggle::Only(value));
        self
    }

    /// Check whether any control would actually exclude records
    pub fn is_passthrough(&self) -> bool {
        self.text_query.trim().is_empty()
            && self.equality.values().all(|s| *s == Selection::All)
            && self.toggles.values().all(|t| *t == Toggle::All)
    }

    /// Check whether a single record passes every active control
    pub fn matches<R: CatalogRecord>(&self, record: &R) -> bool {
        let query = self.text_query.trim().to_lowercase();
        if !query.is_empty() && !text_matches(record, &query) {
            return false;
        }

        for (field, selection) in &self.equality {
            if let Selection::Is(expected) = selection {
                let matched = record
                    .field(field)
                    .map(|value| value.matches_str(expected))
                    .unwrap_or(false);
                if !matched {
                    return false;
                }
            }
        }

        for (field, toggle) in &self.toggles {
            if let Toggle::Only(expected) = toggle {
                let matched = record
                    .field(field)
                    .and_then(|value| value.as_bool())
                    .map(|actual| actual == *expected)
                    .unwrap_or(false);
                if !matched {
                    return false;
                }
            }
        }

        true
    }
}

fn text_matches<R: CatalogRecord>(record: &R, query: &str) -> bool {
    R::searchable_fields()
        .iter()
        .chain(R::tag_fields())
        .any(|field| {
            record
                .field(field)
                .map(|value| value.contains_text(query))
                .unwrap_or(false)
        })
}

/// Keep the records that pass every active control.
///
/// The output is a subsequence of the input: relative order is preserved
/// and no record is synthesized or duplicated. Records that lack a
/// filtered field are excluded, never an error.
pub fn filter_records<R: CatalogRecord>(records: Vec<R>, spec: &FilterSpec) -> Vec<R> {
    if spec.is_passthrough() {
        return records;
    }

    records
        .into_iter()
        .filter(|record| spec.matches(record))
        .collect()
}
