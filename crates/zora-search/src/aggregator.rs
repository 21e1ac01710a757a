//! Fan-out/fan-in aggregation over the five matching strategies.

use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;

use tracing::{debug, warn};
use zora_catalog::{CatalogError, CatalogSource, Product};

use crate::recommend::build_recommendations;
use crate::request::SearchRequest;
use crate::response::{SearchAnalytics, SearchResponse};
use crate::strategy;
use crate::suggest::build_suggestions;
use crate::vocabulary::SearchVocabulary;

/// Merge order; also the order ties are broken in when deduplicating.
const STRATEGY_NAMES: [&str; 5] = ["basic", "fuzzy", "semantic", "category", "trending"];

/// The marketplace search front door.
///
/// Holds a shared catalog source and a vocabulary. `search` is total: it
/// returns a well-formed [`SearchResponse`] no matter how many strategies
/// or vendor lookups fail underneath.
pub struct SearchAggregator<S: CatalogSource> {
    source: Arc<S>,
    vocabulary: SearchVocabulary,
}

impl<S: CatalogSource> SearchAggregator<S> {
    /// Create an aggregator with the default Zora vocabulary.
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            vocabulary: SearchVocabulary::default(),
        }
    }

    /// Replace the vocabulary.
    pub fn with_vocabulary(mut self, vocabulary: SearchVocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Run one search: strategy fan-out, dedup, suggestions,
    /// recommendations, analytics.
    pub async fn search(&self, request: SearchRequest) -> SearchResponse {
        let query = request.query.trim().to_lowercase();
        let source = self.source.as_ref();
        let vocab = &self.vocabulary;

        let (basic, fuzzy, semantic, category, trending) = futures::join!(
            guard(STRATEGY_NAMES[0], strategy::basic(source, &query, &request.filters)),
            guard(STRATEGY_NAMES[1], strategy::fuzzy(source, vocab, &query)),
            guard(STRATEGY_NAMES[2], strategy::semantic(source, vocab, &query)),
            guard(STRATEGY_NAMES[3], strategy::category(source, vocab, &query)),
            guard(STRATEGY_NAMES[4], strategy::trending(source, vocab, &query)),
        );

        let results = dedup_by_id([basic, fuzzy, semantic, category, trending]);
        debug!(query = %request.query, results = results.len(), "search aggregated");

        let suggestions = build_suggestions(source, vocab, &query, &results).await;
        let recommendations = build_recommendations(request.user_id.as_deref(), &results);
        let analytics = SearchAnalytics::record(request.query, results.len());

        SearchResponse {
            results,
            suggestions,
            analytics,
            recommendations,
        }
    }

    /// The trending-phrase list in its stable order.
    pub fn trending_searches(&self) -> &[String] {
        &self.vocabulary.trending
    }

    /// The vocabulary in use.
    pub fn vocabulary(&self) -> &SearchVocabulary {
        &self.vocabulary
    }
}

/// Error boundary around one strategy: a failure becomes an empty
/// contribution, never a failed call.
async fn guard<F>(name: &'static str, future: F) -> Vec<Product>
where
    F: Future<Output = Result<Vec<Product>, CatalogError>>,
{
    match future.await {
        Ok(products) => {
            debug!(strategy = name, count = products.len(), "strategy finished");
            products
        }
        Err(error) => {
            warn!(strategy = name, %error, "strategy failed, contributing nothing");
            Vec::new()
        }
    }
}

/// Merge strategy outputs in fixed order, keeping the first occurrence of
/// each product ID.
fn dedup_by_id(batches: [Vec<Product>; 5]) -> Vec<Product> {
    let mut seen = HashSet::new();
    let mut results = Vec::new();
    for product in batches.into_iter().flatten() {
        if seen.insert(product.id.clone()) {
            results.push(product);
        }
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str) -> Product {
        Product::new(id, id, "", "Food & Spices", 1.0, "v-1")
    }

    #[test]
    fn test_dedup_keeps_first_occurrence_order() {
        let batches = [
            vec![product("a"), product("b")],
            vec![product("b"), product("c")],
            vec![product("a")],
            Vec::new(),
            vec![product("d"), product("c")],
        ];
        let merged = dedup_by_id(batches);
        let ids: Vec<_> = merged.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c", "d"]);
    }
}
