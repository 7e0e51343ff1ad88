//! Sorting over record collections
//!
//! Sort keys come from the same field projections the filters use. The
//! sort is stable, so records with equal keys keep their input order,
//! and records missing the sort field go last whatever the direction.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::core::record::CatalogRecord;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// A sort request: one field name plus a direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    /// Sort ascending by `field`
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    /// Sort descending by `field`
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }

    /// Parse the `field:direction` query format.
    ///
    /// `"amount:desc"` sorts descending, `"amount:asc"` and plain
    /// `"amount"` sort ascending. An unknown direction falls back to
    /// ascending; an empty field name yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.splitn(2, ':');
        let field = parts.next().unwrap_or("").trim();
        if field.is_empty() {
            return None;
        }

        let direction = match parts.next().map(str::trim) {
            Some(dir) if dir.eq_ignore_ascii_case("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        };

        Some(Self {
            field: field.to_string(),
            direction,
        })
    }

    /// Compare two records by this spec's field.
    ///
    /// Descending order reverses the comparison of present values only;
    /// records without the field (or with a null value) compare greater
    /// than any present value, so they always end up last.
    pub fn compare<R: CatalogRecord>(&self, a: &R, b: &R) -> Ordering {
        let left = a.field(&self.field).filter(|v| !v.is_missing());
        let right = b.field(&self.field).filter(|v| !v.is_missing());

        match (left, right) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(l), Some(r)) => {
                let ordering = l.compare(&r);
                match self.direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            }
        }
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir = match self.direction {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        write!(f, "{}:{}", self.field, dir)
    }
}

/// Stable-sort records by the spec's field.
///
/// String keys compare case-insensitively, numeric and datetime keys
/// numerically. Sorting never drops, duplicates or mutates records.
pub fn sort_records<R: CatalogRecord>(mut records: Vec<R>, spec: &SortSpec) -> Vec<R> {
    records.sort_by(|a, b| spec.compare(a, b));
    records
}
