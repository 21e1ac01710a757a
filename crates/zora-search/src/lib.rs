//! Multi-strategy product search for the Zora marketplace.
//!
//! One call fans out five independent matching strategies (basic, fuzzy,
//! semantic, category, trending) over a [`CatalogSource`], merges and
//! deduplicates what comes back, and derives typed suggestions, stubbed
//! recommendations and an analytics record. The call is total: any
//! strategy failure degrades to an empty contribution, and a fully failed
//! source still produces a well-formed empty response.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use zora_catalog::InMemoryCatalog;
//! use zora_search::{SearchAggregator, SearchRequest};
//!
//! let catalog = Arc::new(InMemoryCatalog::from_json(dataset)?);
//! let aggregator = SearchAggregator::new(catalog);
//! let response = aggregator.search(SearchRequest::new("jollof")).await;
//! println!("{} results", response.results.len());
//! ```

pub mod aggregator;
pub mod recommend;
pub mod request;
pub mod response;
pub mod strategy;
pub mod suggest;
pub mod vocabulary;

pub use aggregator::SearchAggregator;
pub use recommend::{BasedOn, Recommendation};
pub use request::SearchRequest;
pub use response::{SearchAnalytics, SearchResponse};
pub use suggest::{SearchSuggestion, SuggestionType};
pub use vocabulary::{IntentBucket, SearchVocabulary};

pub use zora_catalog::CatalogSource;
