//! In-memory catalog backed by the mock marketplace dataset.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use zora_slug::generate_unique_vendor_slug;

use crate::error::CatalogError;
use crate::filter::CatalogQuery;
use crate::ids::VendorId;
use crate::product::{Product, Vendor};
use crate::source::CatalogSource;

/// On-disk shape of the mock dataset.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    products: Vec<Product>,
    #[serde(default)]
    vendors: Vec<Vendor>,
}

/// Reference [`CatalogSource`] over an owned product list and vendor map.
///
/// Matching is the naive case-insensitive substring scan the marketplace
/// dataset was designed for; no indexing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
    vendors: HashMap<VendorId, Vendor>,
}

impl InMemoryCatalog {
    /// Build a catalog from products and vendors.
    ///
    /// Vendors without a slug get one derived from their shop name, made
    /// unique against every slug already present. Vendors whose names
    /// cannot produce a slug (symbol-only names) are kept slug-less and
    /// fall back to ID-based routing.
    pub fn new(products: Vec<Product>, vendors: Vec<Vendor>) -> Self {
        let mut taken: HashSet<String> = vendors
            .iter()
            .filter_map(|v| v.slug.clone())
            .collect();

        let vendors = vendors
            .into_iter()
            .map(|mut vendor| {
                if vendor.slug.is_none() {
                    if let Ok(slug) = generate_unique_vendor_slug(&vendor.name, &taken) {
                        taken.insert(slug.clone());
                        vendor.slug = Some(slug);
                    }
                }
                (vendor.id.clone(), vendor)
            })
            .collect();

        Self { products, vendors }
    }

    /// Parse a catalog from the mock dataset JSON
    /// (`{ "products": [...], "vendors": [...] }`).
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Ok(Self::new(file.products, file.vendors))
    }

    /// Load a catalog from a JSON file on disk.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All vendors, in no particular order.
    pub fn vendors(&self) -> impl Iterator<Item = &Vendor> {
        self.vendors.values()
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalog {
    async fn search(&self, query: &CatalogQuery) -> Result<Vec<Product>, CatalogError> {
        let needle = query.text.trim().to_lowercase();
        let cap = query.limit.unwrap_or(usize::MAX);

        Ok(self
            .products
            .iter()
            .filter(|p| needle.is_empty() || p.matches_text(&needle))
            .filter(|p| query.filters.accepts(p))
            .take(cap)
            .cloned()
            .collect())
    }

    async fn products_in_category(
        &self,
        category: &str,
        limit: usize,
    ) -> Result<Vec<Product>, CatalogError> {
        Ok(self
            .products
            .iter()
            .filter(|p| p.category.eq_ignore_ascii_case(category))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn all_products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.clone())
    }

    async fn vendor(&self, id: &VendorId) -> Result<Option<Vendor>, CatalogError> {
        Ok(self.vendors.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::SearchFilters;

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::new(
            vec![
                Product::new(
                    "p-1",
                    "Jollof Rice Spice Mix",
                    "Authentic West African seasoning",
                    "Food & Spices",
                    12.99,
                    "v-1",
                )
                .with_region("west-africa"),
                Product::new(
                    "p-2",
                    "Ankara Print Dress",
                    "Vibrant wax print",
                    "Clothing",
                    45.0,
                    "v-2",
                ),
                Product::new(
                    "p-3",
                    "Berbere Spice Blend",
                    "Ethiopian chili seasoning",
                    "Food & Spices",
                    9.5,
                    "v-1",
                )
                .with_region("east-africa"),
            ],
            vec![
                Vendor::new("v-1", "Mama Ngozi Kitchen"),
                Vendor::new("v-2", "Ankara House").with_slug("ankara-house"),
            ],
        )
    }

    #[tokio::test]
    async fn test_search_substring_match() {
        let results = catalog()
            .search(&CatalogQuery::new("spice"))
            .await
            .unwrap();
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn test_search_respects_filters_and_limit() {
        let query = CatalogQuery::new("")
            .with_filters(SearchFilters::new().with_category("food & spices"))
            .with_limit(1);
        let results = catalog().search(&query).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].category, "Food & Spices");
    }

    #[tokio::test]
    async fn test_category_lookup() {
        let results = catalog()
            .products_in_category("FOOD & SPICES", 10)
            .await
            .unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_missing_vendor_slug_is_backfilled() {
        let catalog = catalog();
        let vendor = catalog.vendors.get(&VendorId::new("v-1")).unwrap();
        assert_eq!(vendor.slug.as_deref(), Some("mama-ngozi-kitchen"));
        // Pre-existing slugs are left alone.
        let vendor = catalog.vendors.get(&VendorId::new("v-2")).unwrap();
        assert_eq!(vendor.slug.as_deref(), Some("ankara-house"));
    }

    #[test]
    fn test_backfilled_slugs_are_unique() {
        let catalog = InMemoryCatalog::new(
            Vec::new(),
            vec![
                Vendor::new("v-1", "Tech Gear"),
                Vendor::new("v-2", "Tech Gear"),
                Vendor::new("v-3", "Tech  Gear!"),
            ],
        );
        let slugs: HashSet<_> = catalog
            .vendors()
            .filter_map(|v| v.slug.clone())
            .collect();
        assert_eq!(slugs.len(), 3);
        assert!(slugs.contains("tech-gear"));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "products": [
                {
                    "id": "p-1",
                    "name": "Kente Scarf",
                    "description": "Handwoven",
                    "category": "Accessories",
                    "price": 30.0,
                    "vendor_id": "v-1"
                }
            ],
            "vendors": [
                { "id": "v-1", "name": "Accra Weavers" }
            ]
        }"#;
        let catalog = InMemoryCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.vendors().next().unwrap().slug.as_deref(),
            Some("accra-weavers")
        );
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(matches!(
            InMemoryCatalog::from_json("not json"),
            Err(CatalogError::Malformed(_))
        ));
    }
}
