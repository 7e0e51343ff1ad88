//! Derived statistics over record collections
//!
//! Catalog pages show headline figures (total tools, active tools,
//! monthly revenue) next to the filtered list. Definitions are plain
//! data so they can live in the page configuration, and deriving them
//! never mutates the records.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::record::CatalogRecord;

/// How a single stat is computed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    /// Count every record
    Total {},
    /// Count records whose field equals a value (same matching rules as
    /// equality filters)
    CountWhere { field: String, equals: String },
    /// Sum a numeric field over records where it is present
    Sum { field: String },
}

/// A labelled stat definition, deserializable from page configuration
///
/// ```yaml
/// - label: totalTools
///   total: {}
/// - label: activeTools
///   count_where: { field: status, equals: active }
/// - label: monthlyRevenue
///   sum: { field: amount }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatDefinition {
    pub label: String,
    #[serde(flatten)]
    pub kind: StatKind,
}

impl StatDefinition {
    /// Count every record
    pub fn total(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: StatKind::Total {},
        }
    }

    /// Count records where `field` equals `value`
    pub fn count_where(
        label: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            kind: StatKind::CountWhere {
                field: field.into(),
                equals: value.into(),
            },
        }
    }

    /// Sum `field` over all records that carry it
    pub fn sum(label: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: StatKind::Sum {
                field: field.into(),
            },
        }
    }
}

/// A computed stat value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatValue {
    Count(usize),
    Sum(f64),
}

impl StatValue {
    pub fn as_f64(&self) -> f64 {
        match self {
            StatValue::Count(n) => *n as f64,
            StatValue::Sum(s) => *s,
        }
    }
}

/// Compute every definition over the records.
///
/// Output order follows definition order. When two definitions share a
/// label the later one wins. An empty collection yields `Count(0)` and
/// `Sum(0.0)` rather than missing entries.
pub fn derive_stats<R: CatalogRecord>(
    records: &[R],
    definitions: &[StatDefinition],
) -> IndexMap<String, StatValue> {
    let mut stats = IndexMap::with_capacity(definitions.len());

    for definition in definitions {
        let value = match &definition.kind {
            StatKind::Total {} => StatValue::Count(records.len()),
            StatKind::CountWhere { field, equals } => StatValue::Count(
                records
                    .iter()
                    .filter(|record| {
                        record
                            .field(field)
                            .map(|value| value.matches_str(equals))
                            .unwrap_or(false)
                    })
                    .count(),
            ),
            StatKind::Sum { field } => StatValue::Sum(
                records
                    .iter()
                    .filter_map(|record| record.field(field))
                    .filter_map(|value| value.as_f64())
                    .sum(),
            ),
        };
        stats.insert(definition.label.clone(), value);
    }

    stats
}
