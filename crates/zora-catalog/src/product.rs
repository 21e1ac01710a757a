//! Product and vendor records as supplied by the marketplace dataset.

use crate::ids::{ProductId, VendorId};
use serde::{Deserialize, Serialize};

/// A product in the marketplace catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// Category name (e.g., "Food & Spices").
    pub category: String,
    /// Price in the marketplace display currency.
    pub price: f64,
    /// Vendor that sells this product.
    pub vendor_id: VendorId,
    /// Cultural region of origin (e.g., "west-africa").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Tags for filtering/search.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Product {
    /// Create a new product record.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        vendor_id: impl Into<VendorId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            category: category.into(),
            price,
            vendor_id: vendor_id.into(),
            region: None,
            tags: Vec::new(),
        }
    }

    /// Set the region of origin.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Add a tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Case-insensitive substring match over name, description and category.
    pub fn matches_text(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.description.to_lowercase().contains(needle_lower)
            || self.category.to_lowercase().contains(needle_lower)
    }
}

/// A vendor (shop) record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vendor {
    /// Unique vendor identifier.
    pub id: VendorId,
    /// Shop display name.
    pub name: String,
    /// URL-safe store slug; backfilled at load time when missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Shop logo URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    /// Vendor's home region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl Vendor {
    /// Create a new vendor record.
    pub fn new(id: impl Into<VendorId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: None,
            logo_url: None,
            region: None,
        }
    }

    /// Set the store slug.
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Set the logo URL.
    pub fn with_logo(mut self, url: impl Into<String>) -> Self {
        self.logo_url = Some(url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product::new(
            "p-1",
            "Jollof Rice Spice Mix",
            "Authentic West African seasoning blend",
            "Food & Spices",
            12.99,
            "v-1",
        )
        .with_region("west-africa")
    }

    #[test]
    fn test_text_match_is_case_insensitive() {
        let product = sample();
        assert!(product.matches_text("jollof"));
        assert!(product.matches_text("seasoning"));
        assert!(product.matches_text("food"));
        assert!(!product.matches_text("kente"));
    }

    #[test]
    fn test_product_json_shape() {
        let json = r#"{
            "id": "p-2",
            "name": "Ankara Print Dress",
            "description": "Vibrant wax print",
            "category": "Clothing",
            "price": 45.0,
            "vendor_id": "v-2"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id.as_str(), "p-2");
        assert!(product.region.is_none());
        assert!(product.tags.is_empty());
    }
}
