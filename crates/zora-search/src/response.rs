//! Search response types.

use serde::{Deserialize, Serialize};
use zora_catalog::Product;

use crate::recommend::Recommendation;
use crate::suggest::SearchSuggestion;

/// The complete output of one search call.
///
/// The aggregator API returns this directly, not a `Result`: a fully
/// degraded call still yields a well-formed response with empty lists.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchResponse {
    /// Deduplicated products, first-seen order.
    pub results: Vec<Product>,
    /// Typed suggestions, sorted by popularity descending.
    pub suggestions: Vec<SearchSuggestion>,
    /// Analytics record; persistence is the caller's concern.
    pub analytics: SearchAnalytics,
    /// Personalized recommendations; empty without a user.
    pub recommendations: Vec<Recommendation>,
}

impl SearchResponse {
    /// An empty-but-well-formed response for a query, used on the
    /// fully-degraded path.
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            results: Vec::new(),
            suggestions: Vec::new(),
            analytics: SearchAnalytics::record(query, 0),
            recommendations: Vec::new(),
        }
    }
}

/// What the caller needs to log a search.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SearchAnalytics {
    /// The query as typed, before normalization.
    pub query: String,
    /// Unix timestamp in milliseconds.
    pub timestamp_ms: i64,
    /// Number of deduplicated results returned.
    pub result_count: usize,
}

impl SearchAnalytics {
    /// Record a search at the current time.
    pub fn record(query: impl Into<String>, result_count: usize) -> Self {
        Self {
            query: query.into(),
            timestamp_ms: current_timestamp_ms(),
            result_count,
        }
    }
}

/// Get current Unix timestamp in milliseconds.
fn current_timestamp_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_response_is_well_formed() {
        let response = SearchResponse::empty("jollof");
        assert!(response.results.is_empty());
        assert!(response.suggestions.is_empty());
        assert!(response.recommendations.is_empty());
        assert_eq!(response.analytics.query, "jollof");
        assert_eq!(response.analytics.result_count, 0);
        assert!(response.analytics.timestamp_ms > 0);
    }
}
