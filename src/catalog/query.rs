//! Query composition: filter first, then sort

use serde::{Deserialize, Serialize};

use crate::catalog::filter::{filter_records, FilterSpec};
use crate::catalog::sort::{sort_records, SortSpec};
use crate::core::record::CatalogRecord;

/// The full query state of a catalog page.
///
/// Serializable so pages can snapshot and restore their control state.
/// `apply` is pure: the same records, filter and sort always produce the
/// same output, which makes results safe to memoize on those inputs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogQuery {
    pub filter: FilterSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortSpec>,
}

impl CatalogQuery {
    /// A query that passes everything through unchanged
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the filter state
    pub fn with_filter(mut self, filter: FilterSpec) -> Self {
        self.filter = filter;
        self
    }

    /// Replace the sort request
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Filter the records, then sort the survivors.
    ///
    /// Without a sort request the filtered records keep their input order.
    pub fn apply<R: CatalogRecord>(&self, records: Vec<R>) -> Vec<R> {
        let filtered = filter_records(records, &self.filter);
        match &self.sort {
            Some(spec) => sort_records(filtered, spec),
            None => filtered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldValue;
    use crate::core::record::Record;
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    #[derive(Clone, Debug)]
    struct Item {
        id: Uuid,
        name: String,
        rank: i64,
        active: bool,
        created_at: DateTime<Utc>,
    }

    impl Item {
        fn new(name: &str, rank: i64, active: bool) -> Self {
            Self {
                id: Uuid::new_v4(),
                name: name.to_string(),
                rank,
                active,
                created_at: Utc::now(),
            }
        }
    }

    impl Record for Item {
        fn resource_name() -> &'static str {
            "items"
        }

        fn resource_name_singular() -> &'static str {
            "item"
        }

        fn id(&self) -> Uuid {
            self.id
        }

        fn created_at(&self) -> DateTime<Utc> {
            self.created_at
        }

        fn updated_at(&self) -> DateTime<Utc> {
            self.created_at
        }
    }

    impl CatalogRecord for Item {
        fn searchable_fields() -> &'static [&'static str] {
            &["name"]
        }

        fn field(&self, name: &str) -> Option<FieldValue> {
            match name {
                "name" => Some(FieldValue::String(self.name.clone())),
                "rank" => Some(FieldValue::Integer(self.rank)),
                "active" => Some(FieldValue::Boolean(self.active)),
                _ => None,
            }
        }
    }

    fn sample() -> Vec<Item> {
        vec![
            Item::new("gamma", 3, true),
            Item::new("alpha", 1, false),
            Item::new("beta", 2, true),
        ]
    }

    #[test]
    fn test_apply_filters_then_sorts() {
        let query = CatalogQuery::new()
            .with_filter(FilterSpec::new().with_toggle("active", true))
            .with_sort(SortSpec::asc("rank"));

        let out = query.apply(sample());
        let names: Vec<&str> = out.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["beta", "gamma"]);
    }

    #[test]
    fn test_apply_without_sort_keeps_filtered_order() {
        let query = CatalogQuery::new().with_filter(FilterSpec::new().with_toggle("active", true));

        let out = query.apply(sample());
        let names: Vec<&str> = out.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["gamma", "beta"]);
    }

    #[test]
    fn test_apply_is_deterministic() {
        let query = CatalogQuery::new()
            .with_filter(FilterSpec::new().with_text("a"))
            .with_sort(SortSpec::desc("rank"));

        let first: Vec<String> = query.apply(sample()).iter().map(|i| i.name.clone()).collect();
        let second: Vec<String> = query.apply(sample()).iter().map(|i| i.name.clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_default_query_is_identity() {
        let records = sample();
        let names: Vec<String> = records.iter().map(|i| i.name.clone()).collect();

        let out = CatalogQuery::new().apply(records);
        let out_names: Vec<String> = out.iter().map(|i| i.name.clone()).collect();
        assert_eq!(out_names, names);
    }

    #[test]
    fn test_query_serde_roundtrip() {
        let query = CatalogQuery::new()
            .with_filter(FilterSpec::new().with_equals("category", "media"))
            .with_sort(SortSpec::desc("rank"));

        let json = serde_json::to_string(&query).expect("serialize should succeed");
        let back: CatalogQuery = serde_json::from_str(&json).expect("deserialize should succeed");
        assert_eq!(query, back);
    }
}
