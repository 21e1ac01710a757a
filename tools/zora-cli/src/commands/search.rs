//! `zora search` - run the full aggregation pipeline from the terminal.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::DateTime;
use clap::Args;

use crate::commands::load_vocabulary;
use crate::output::Output;
use zora_catalog::{InMemoryCatalog, SearchFilters};
use zora_search::{SearchAggregator, SearchRequest};

/// The bundled demo catalog, same schema as `--catalog` files.
const DEMO_CATALOG: &str = include_str!("../../data/demo_catalog.json");

#[derive(Args)]
pub struct SearchArgs {
    /// Free-text query
    query: String,

    /// Restrict to a category
    #[arg(long)]
    category: Option<String>,

    /// Minimum price, inclusive
    #[arg(long)]
    min_price: Option<f64>,

    /// Maximum price, inclusive
    #[arg(long)]
    max_price: Option<f64>,

    /// Restrict to a cultural region
    #[arg(long)]
    region: Option<String>,

    /// Shopper identity; enables recommendations
    #[arg(long)]
    user: Option<String>,

    /// Catalog JSON file (defaults to the bundled demo catalog)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Vocabulary TOML override
    #[arg(long)]
    vocabulary: Option<PathBuf>,
}

pub async fn run(args: SearchArgs, output: &Output) -> Result<()> {
    let catalog = match &args.catalog {
        Some(path) => InMemoryCatalog::from_path(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => InMemoryCatalog::from_json(DEMO_CATALOG)
            .context("parsing the bundled demo catalog")?,
    };
    output.debug(&format!("catalog loaded: {} products", catalog.len()));

    let vocabulary = load_vocabulary(args.vocabulary.as_deref())?;
    let aggregator = SearchAggregator::new(Arc::new(catalog)).with_vocabulary(vocabulary);

    let mut filters = SearchFilters::new();
    if let Some(category) = args.category {
        filters = filters.with_category(category);
    }
    if let Some(region) = args.region {
        filters = filters.with_region(region);
    }
    filters = filters.with_price_range(args.min_price, args.max_price);

    let mut request = SearchRequest::new(&args.query).with_filters(filters);
    if let Some(user) = args.user {
        request = request.with_user_id(user);
    }

    let response = aggregator.search(request).await;

    if output.is_json() {
        output.json(&response);
        return Ok(());
    }

    output.header(&format!(
        "Results for {:?} ({})",
        args.query, response.results.len()
    ));
    for product in &response.results {
        output.list_item(&format!(
            "{} — {} (${:.2}, {})",
            product.id, product.name, product.price, product.category
        ));
    }

    if !response.suggestions.is_empty() {
        output.header("Suggestions");
        for suggestion in &response.suggestions {
            let vendor = suggestion
                .vendor_name
                .as_deref()
                .map(|v| format!(" by {}", v))
                .unwrap_or_default();
            output.list_item(&format!(
                "[{}] {}{} ({:.0})",
                suggestion.suggestion_type.as_str(),
                suggestion.text,
                vendor,
                suggestion.popularity
            ));
        }
    }

    if !response.recommendations.is_empty() {
        output.header("Recommended for you");
        for rec in &response.recommendations {
            output.list_item(&format!(
                "{} — {} ({:.1}, {})",
                rec.product.name,
                rec.reason,
                rec.score,
                rec.based_on.as_str()
            ));
        }
    }

    output.header("Analytics");
    let when = DateTime::from_timestamp_millis(response.analytics.timestamp_ms)
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| response.analytics.timestamp_ms.to_string());
    output.kv("query", &response.analytics.query);
    output.kv("timestamp", &when);
    output.kv("result_count", &response.analytics.result_count.to_string());

    Ok(())
}
