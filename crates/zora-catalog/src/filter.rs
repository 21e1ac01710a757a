//! Search filters and the catalog query unit.

use crate::product::Product;
use serde::{Deserialize, Serialize};

/// Optional filters applied to a catalog search.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SearchFilters {
    /// Restrict to a category (case-insensitive equality).
    pub category: Option<String>,
    /// Minimum price, inclusive.
    pub min_price: Option<f64>,
    /// Maximum price, inclusive.
    pub max_price: Option<f64>,
    /// Restrict to a cultural region (case-insensitive equality).
    pub region: Option<String>,
}

impl SearchFilters {
    /// Create an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set an inclusive price range; either bound may be `None`.
    pub fn with_price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Restrict to a region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Whether no filter is set.
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.region.is_none()
    }

    /// Check a product against every set filter.
    pub fn accepts(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if !product.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if product.price > max {
                return false;
            }
        }
        if let Some(region) = &self.region {
            match &product.region {
                Some(r) if r.eq_ignore_ascii_case(region) => {}
                _ => return false,
            }
        }
        true
    }
}

/// One unit of work handed to a catalog source: text plus filters plus a cap.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogQuery {
    /// Free-text query, matched as a case-insensitive substring.
    pub text: String,
    /// Filters to apply.
    pub filters: SearchFilters,
    /// Maximum number of results; `None` means unbounded.
    pub limit: Option<usize>,
}

impl CatalogQuery {
    /// Create a text query with no filters or cap.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            filters: SearchFilters::default(),
            limit: None,
        }
    }

    /// Apply filters.
    pub fn with_filters(mut self, filters: SearchFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Cap the number of results.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product::new("p-1", "Shea Butter", "Raw unrefined", "Beauty", 18.5, "v-1")
            .with_region("west-africa")
    }

    #[test]
    fn test_empty_filters_accept_everything() {
        assert!(SearchFilters::new().accepts(&sample()));
    }

    #[test]
    fn test_category_filter_case_insensitive() {
        let filters = SearchFilters::new().with_category("beauty");
        assert!(filters.accepts(&sample()));
        let filters = SearchFilters::new().with_category("Clothing");
        assert!(!filters.accepts(&sample()));
    }

    #[test]
    fn test_price_bounds_inclusive() {
        let filters = SearchFilters::new().with_price_range(Some(18.5), Some(18.5));
        assert!(filters.accepts(&sample()));
        let filters = SearchFilters::new().with_price_range(Some(20.0), None);
        assert!(!filters.accepts(&sample()));
        let filters = SearchFilters::new().with_price_range(None, Some(10.0));
        assert!(!filters.accepts(&sample()));
    }

    #[test]
    fn test_region_filter_requires_region() {
        let filters = SearchFilters::new().with_region("West-Africa");
        assert!(filters.accepts(&sample()));

        let mut no_region = sample();
        no_region.region = None;
        assert!(!filters.accepts(&no_region));
    }
}
