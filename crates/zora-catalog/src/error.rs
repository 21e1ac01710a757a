//! Catalog error types.

use thiserror::Error;

/// Errors that can occur while loading or querying a catalog source.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog data could not be parsed.
    #[error("Malformed catalog data: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The catalog file could not be read.
    #[error("Catalog I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The provider rejected or failed the request (timeout, outage, ...).
    #[error("Catalog source unavailable: {0}")]
    Unavailable(String),
}
