//! Slug codecs for the Zora marketplace.
//!
//! Two independent codecs live here:
//!
//! - **Product slugs**: a bidirectional mapping between 128-bit UUIDs and
//!   compact Base62 tokens, used in `/product/{slug}` routes.
//! - **Vendor slugs**: human-readable shop names normalized into URL-safe
//!   `/store/{slug}` identifiers, with collision handling against a
//!   caller-supplied set of taken slugs.
//!
//! Both are pure and stateless; the route helpers in [`routes`] add the
//! fallback behavior callers rely on (codec errors degrade to ID routes).
//!
//! # Example
//!
//! ```rust
//! use zora_slug::{decode_product_slug, encode_product_slug};
//!
//! let slug = encode_product_slug("018f1234-5678-7890-abcd-ef1234567890").unwrap();
//! assert_eq!(
//!     decode_product_slug(&slug).unwrap(),
//!     "018f1234-5678-7890-abcd-ef1234567890"
//! );
//! ```

pub mod base62;
pub mod error;
pub mod product;
pub mod routes;
pub mod vendor;

pub use error::SlugError;
pub use product::{
    decode_product_slug, decode_to_uuid, encode_product_slug, encode_uuid, is_valid_product_slug,
};
pub use routes::{product_route, vendor_route};
pub use vendor::{
    generate_unique_vendor_slug, generate_vendor_slug, is_valid_vendor_slug, MAX_VENDOR_SLUG_LEN,
};
