//! Configuration loading and management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::catalog::sort::SortSpec;
use crate::catalog::stats::StatDefinition;

/// Configuration for one admin page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// Plural resource name the page displays (e.g., "tools")
    pub resource: String,

    /// Initial sort as "field" or "field:desc"
    #[serde(default)]
    pub default_sort: Option<String>,

    /// Headline stats shown next to the list
    #[serde(default)]
    pub stats: Vec<StatDefinition>,
}

impl PageConfig {
    /// Parse `default_sort` into a [`SortSpec`]
    ///
    /// `None` when the page has no default sort or the string is malformed;
    /// callers fall back to load order.
    pub fn sort_spec(&self) -> Option<SortSpec> {
        self.default_sort.as_deref().and_then(SortSpec::parse)
    }
}

/// Complete configuration for the catalog pages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// List of page configurations
    pub pages: Vec<PageConfig>,
}

impl CatalogConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {path}"))?;
        let config: Self =
            serde_yaml::from_str(&content).with_context(|| format!("invalid config in {path}"))?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).context("invalid config YAML")?;
        Ok(config)
    }

    /// Find the page configuration for a resource
    pub fn page(&self, resource: &str) -> Option<&PageConfig> {
        self.pages.iter().find(|page| page.resource == resource)
    }

    /// Create the stock configuration for the platform's admin pages
    pub fn default_config() -> Self {
        Self {
            pages: vec![
                PageConfig {
                    resource: "tools".to_string(),
                    default_sort: Some("created_at:desc".to_string()),
                    stats: vec![
                        StatDefinition::total("totalTools"),
                        StatDefinition::count_where("activeTools", "status", "active"),
                        StatDefinition::count_where("premiumTools", "is_premium", "true"),
                    ],
                },
                PageConfig {
                    resource: "templates".to_string(),
                    default_sort: Some("downloads:desc".to_string()),
                    stats: vec![
                        StatDefinition::total("totalTemplates"),
                        StatDefinition::count_where("published", "status", "published"),
                    ],
                },
                PageConfig {
                    resource: "users".to_string(),
                    default_sort: Some("created_at:desc".to_string()),
                    stats: vec![
                        StatDefinition::total("totalUsers"),
                        StatDefinition::count_where("activeUsers", "status", "active"),
                    ],
                },
                PageConfig {
                    resource: "subscriptions".to_string(),
                    default_sort: Some("renew_date:desc".to_string()),
                    stats: vec![
                        StatDefinition::total("totalSubscriptions"),
                        StatDefinition::sum("monthlyRevenue", "amount"),
                    ],
                },
                PageConfig {
                    resource: "posts".to_string(),
                    default_sort: Some("created_at:desc".to_string()),
                    stats: vec![
                        StatDefinition::total("totalPosts"),
                        StatDefinition::count_where("published", "is_published", "true"),
                    ],
                },
                PageConfig {
                    resource: "activity_entries".to_string(),
                    default_sort: Some("happened_at:desc".to_string()),
                    stats: vec![],
                },
            ],
        }
    }
}
