//! Route helpers built on the slug codec.
//!
//! Route generation never fails: codec errors degrade to ID-based routes
//! so a bad identifier can never break navigation.

use crate::product::encode_product_slug;
use crate::vendor::is_valid_vendor_slug;

/// Build the route for a product page.
///
/// `/product/{base62}` when the ID is a canonical UUID, `/product/{id}`
/// for legacy or non-UUID identifiers.
pub fn product_route(product_id: &str) -> String {
    match encode_product_slug(product_id) {
        Ok(slug) => format!("/product/{}", slug),
        Err(_) => format!("/product/{}", product_id),
    }
}

/// Build the route for a vendor page.
///
/// `/store/{slug}` when a valid vendor slug is available, `/vendor/{id}`
/// otherwise.
pub fn vendor_route(vendor_id: &str, slug: Option<&str>) -> String {
    match slug {
        Some(s) if is_valid_vendor_slug(s) => format!("/store/{}", s),
        _ => format!("/vendor/{}", vendor_id),
    }
}
