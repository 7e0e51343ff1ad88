//! Shared test harness for the catalog engine and sync tests
//!
//! Provides deterministic sample collections (tools with a known
//! active/inactive split, subscriptions with duplicate renew dates)
//! and small assertion helpers.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! mod catalog_harness;
//! use catalog_harness::*;
//! ```

#![allow(dead_code)]

use chrono::{Duration, Utc};
use indexmap::IndexMap;

use toolshed::prelude::*;

/// Initialize tracing once for the whole test binary.
///
/// Respects `RUST_LOG`; defaults to `info`.
pub fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_test_writer()
            .try_init();
    });
}

// ---------------------------------------------------------------------------
// Tool fixtures
// ---------------------------------------------------------------------------

/// Build a tool with a controlled creation time (`minutes_ago` before now)
pub fn tool(
    name: &str,
    slug: &str,
    category: &str,
    tags: &[&str],
    is_active: bool,
    is_premium: bool,
    usage_count: i64,
    minutes_ago: i64,
) -> Tool {
    let mut tool = Tool::new(
        name.to_string(),
        slug.to_string(),
        format!("{name} for the catalog"),
        category.to_string(),
        tags.iter().map(|t| t.to_string()).collect(),
        Vec::new(),
        IndexMap::new(),
        is_active,
        is_premium,
        usage_count,
    );
    let stamp = Utc::now() - Duration::minutes(minutes_ago);
    tool.created_at = stamp;
    tool.updated_at = stamp;
    tool
}

/// Five tools, two of them inactive (Logo Studio, Pitch Deck Builder).
///
/// Creation times descend with position: the first tool is the oldest,
/// so `created_at:desc` yields the reverse of this order.
pub fn sample_tools() -> Vec<Tool> {
    vec![
        tool(
            "JSON Formatter",
            "json-formatter",
            "developer",
            &["json", "formatting"],
            true,
            false,
            120,
            50,
        ),
        tool(
            "AI Essay Writer",
            "ai-essay-writer",
            "writing",
            &["ai", "writing"],
            true,
            true,
            300,
            40,
        ),
        tool(
            "Logo Studio",
            "logo-studio",
            "design",
            &["design", "branding"],
            false,
            true,
            85,
            30,
        ),
        tool(
            "Regex Tester",
            "regex-tester",
            "developer",
            &["regex", "testing"],
            true,
            false,
            210,
            20,
        ),
        tool(
            "Pitch Deck Builder",
            "pitch-deck-builder",
            "business",
            &["slides"],
            false,
            false,
            15,
            10,
        ),
    ]
}

/// Names of the given tools, in order
pub fn tool_names(tools: &[Tool]) -> Vec<&str> {
    tools.iter().map(|t| t.name.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Subscription fixtures
// ---------------------------------------------------------------------------

/// Build a subscription renewing `renew_in_days` from now
pub fn subscription(
    customer_email: &str,
    plan: &str,
    status: &str,
    amount: f64,
    renew_in_days: i64,
) -> Subscription {
    let now = Utc::now();
    Subscription::new(
        customer_email.to_string(),
        plan.to_string(),
        status.to_string(),
        amount,
        now + Duration::days(renew_in_days),
        now - Duration::days(90),
    )
}

/// Four subscriptions; grace@ and alan@ share the exact same renew date
/// (grace@ listed first) to exercise stable-sort guarantees.
pub fn sample_subscriptions() -> Vec<Subscription> {
    let mut subscriptions = vec![
        subscription("ada@example.com", "pro", "active", 49.0, 30),
        subscription("grace@example.com", "starter", "active", 9.0, 10),
        subscription("alan@example.com", "starter", "cancelled", 9.0, 10),
        subscription("edsger@example.com", "enterprise", "active", 199.0, 45),
    ];
    subscriptions[2].renew_date = subscriptions[1].renew_date;
    subscriptions
}

/// Customer emails of the given subscriptions, in order
pub fn subscription_emails(subscriptions: &[Subscription]) -> Vec<&str> {
    subscriptions
        .iter()
        .map(|s| s.customer_email.as_str())
        .collect()
}
