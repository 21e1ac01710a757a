//! CLI command implementations.

pub mod search;
pub mod slug;
pub mod trending;

pub use search::SearchArgs;
pub use slug::SlugArgs;
pub use trending::TrendingArgs;

use anyhow::{Context, Result};
use std::path::Path;
use zora_search::SearchVocabulary;

/// Load a vocabulary override from a TOML file, or the default Zora one.
pub fn load_vocabulary(path: Option<&Path>) -> Result<SearchVocabulary> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading vocabulary file {}", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("parsing vocabulary file {}", path.display()))
        }
        None => Ok(SearchVocabulary::default()),
    }
}
