//! The read-only catalog source abstraction.

use crate::error::CatalogError;
use crate::filter::CatalogQuery;
use crate::ids::VendorId;
use crate::product::{Product, Vendor};
use async_trait::async_trait;

/// A read-only provider of the product collection.
///
/// Implementations own their transport concerns (timeouts, retries,
/// backpressure); callers treat any `Err` as an empty contribution when
/// they can degrade, or surface it when they cannot.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Text search with filters and an optional result cap.
    async fn search(&self, query: &CatalogQuery) -> Result<Vec<Product>, CatalogError>;

    /// Up to `limit` products in a category (case-insensitive name match).
    async fn products_in_category(
        &self,
        category: &str,
        limit: usize,
    ) -> Result<Vec<Product>, CatalogError>;

    /// The full product collection.
    async fn all_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Look up a vendor by ID.
    async fn vendor(&self, id: &VendorId) -> Result<Option<Vendor>, CatalogError>;
}
