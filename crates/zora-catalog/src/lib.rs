//! Catalog domain types for the Zora marketplace.
//!
//! This crate defines the product/vendor records the marketplace dataset
//! exposes, the filter and query types strategies hand to a data source,
//! and the [`CatalogSource`] trait behind which providers live. The
//! bundled [`InMemoryCatalog`] is the reference implementation over the
//! mock JSON dataset; vendor store slugs missing from the data are
//! backfilled on load via `zora-slug`.

pub mod error;
pub mod filter;
pub mod ids;
pub mod memory;
pub mod product;
pub mod source;

pub use error::CatalogError;
pub use filter::{CatalogQuery, SearchFilters};
pub use ids::{ProductId, VendorId};
pub use memory::InMemoryCatalog;
pub use product::{Product, Vendor};
pub use source::CatalogSource;
