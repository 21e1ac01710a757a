//! Search request type.

use serde::{Deserialize, Serialize};
use zora_catalog::SearchFilters;

/// A single search invocation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchRequest {
    /// Free-text query as typed by the shopper.
    pub query: String,
    /// Shopper identity, when known; enables recommendations.
    pub user_id: Option<String>,
    /// Optional filters.
    pub filters: SearchFilters,
}

impl SearchRequest {
    /// Create a request for a query with no user or filters.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            user_id: None,
            filters: SearchFilters::default(),
        }
    }

    /// Attach the shopper's identity.
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Attach filters.
    pub fn with_filters(mut self, filters: SearchFilters) -> Self {
        self.filters = filters;
        self
    }
}
