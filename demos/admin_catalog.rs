//! Admin catalog walkthrough
//!
//! This demo drives the complete client pipeline against the in-memory
//! sync service:
//! - Loading records into a collection
//! - Filtering, sorting and headline stats through a page config
//! - A create form flow: draft → validate → payload → sync
//! - Server-authoritative reconciliation after every mutation

use serde_json::json;
use toolshed::prelude::*;

fn seed_tool(
    name: &str,
    slug: &str,
    category: &str,
    tags: &[&str],
    is_active: bool,
    is_premium: bool,
    usage_count: i64,
) -> Tool {
    Tool::new(
        name.to_string(),
        slug.to_string(),
        format!("{name} for everyone"),
        category.to_string(),
        tags.iter().map(|t| t.to_string()).collect(),
        Vec::new(),
        IndexMap::new(),
        is_active,
        is_premium,
        usage_count,
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("🚀 Toolshed Admin Catalog Demo");
    println!("==============================\n");

    // Stock page configuration: default sort + headline stats per resource
    let config = CatalogConfig::default_config();
    let page = config.page("tools").unwrap();
    println!("✅ Loaded config for /{}", page.resource);
    if let Some(sort) = page.sort_spec() {
        println!("   Default sort: {sort}");
    }
    println!("   Stats: {}\n", page.stats.len());

    // A backend stand-in seeded with catalog data
    let service = InMemorySyncService::with_records(vec![
        seed_tool("JSON Formatter", "json-formatter", "developer", &["json"], true, false, 120),
        seed_tool("AI Essay Writer", "ai-essay-writer", "writing", &["ai"], true, true, 300),
        seed_tool("Logo Studio", "logo-studio", "design", &["branding"], false, true, 85),
        seed_tool("Regex Tester", "regex-tester", "developer", &["regex"], true, false, 210),
    ])
    .await;

    // Load the collection the way a page does on mount
    let response = service.load().await?;
    let mut collection = Collection::new();
    collection.replace_all(response.items);
    println!("📦 Loaded {} tools\n", collection.len());

    // Render the page: active tools only, newest first
    let query = CatalogQuery::new()
        .with_filter(FilterSpec::new().with_equals("status", "active"))
        .with_sort(page.sort_spec().unwrap_or_else(|| SortSpec::desc("created_at")));

    println!("🔍 Active tools:");
    for tool in query.apply(collection.snapshot()) {
        println!("   - {} [{}] {} uses", tool.name, tool.category, tool.usage_count);
    }

    let snapshot = collection.snapshot();
    println!("\n📊 Headline stats:");
    for (label, value) in derive_stats(&snapshot, &page.stats) {
        match value {
            StatValue::Count(n) => println!("   {label}: {n}"),
            StatValue::Sum(total) => println!("   {label}: {total:.2}"),
        }
    }

    // The "New Tool" form: defaults, slug derivation, validation
    println!("\n📝 Creating a tool through a draft...");
    let mut draft = Draft::create(Tool::draft_schema());
    draft.set_field("name", json!("Markdown Previewer"));
    draft.set_field("category", json!("developer"));
    draft.add_list_item(ListField::Tags, "markdown");
    draft.add_list_item(ListField::Tags, "preview");

    let report = draft.validate();
    println!("   Valid: {}", report.is_valid());
    println!("   Derived slug: {}", draft.field_str("slug").unwrap_or("-"));

    let created = service.create(draft.to_payload()).await?;
    collection.apply_created(created.clone());
    println!("   Server assigned id {}", created.id);

    // Patch it and reconcile with what the server returns
    let updated = service
        .update(&created.id, json!({"usage_count": 1, "is_premium": true}))
        .await?;
    collection.apply_updated(updated);

    // And remove it again
    service.delete(&created.id).await?;
    collection.apply_deleted(&created.id);

    println!("\n🧹 Back to {} tools after delete", collection.len());

    Ok(())
}
