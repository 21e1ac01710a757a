//! Suggestion generation with deterministic rank-based popularity.

use serde::{Deserialize, Serialize};
use zora_catalog::{CatalogSource, Product};

use crate::vocabulary::SearchVocabulary;

/// Caps matching the marketplace search dropdown layout.
const MAX_PRODUCT_SUGGESTIONS: usize = 5;
const MAX_CATEGORY_SUGGESTIONS: usize = 3;
const MAX_TRENDING_SUGGESTIONS: usize = 3;

/// What kind of suggestion an entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionType {
    /// A concrete product.
    Product,
    /// A category among the results.
    Category,
    /// A trending phrase related to the query.
    Trending,
}

impl SuggestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionType::Product => "product",
            SuggestionType::Category => "category",
            SuggestionType::Trending => "trending",
        }
    }
}

/// One entry in the search dropdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchSuggestion {
    /// Kind of suggestion.
    pub suggestion_type: SuggestionType,
    /// Display text.
    pub text: String,
    /// Ranking weight; higher sorts first.
    pub popularity: f64,
    /// Vendor shop name, for product suggestions when resolvable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
    /// Vendor logo URL, for product suggestions when resolvable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_logo: Option<String>,
}

/// Build the suggestion list for a set of deduplicated results.
///
/// Popularity is rank-based rather than random so repeated calls with the
/// same inputs produce identical output: products score in [0, 100),
/// categories in [0, 80), trending phrases in [95, 100). No two entries
/// share a `(type, text)` pair, and trending entries also skip any text
/// already suggested. Vendor lookups that fail degrade to `None`.
pub async fn build_suggestions<S: CatalogSource>(
    source: &S,
    vocabulary: &SearchVocabulary,
    query_lower: &str,
    results: &[Product],
) -> Vec<SearchSuggestion> {
    let mut suggestions: Vec<SearchSuggestion> = Vec::new();

    for (rank, product) in results.iter().take(MAX_PRODUCT_SUGGESTIONS).enumerate() {
        if suggestion_exists(&suggestions, SuggestionType::Product, &product.name) {
            continue;
        }
        let vendor = source.vendor(&product.vendor_id).await.unwrap_or(None);
        suggestions.push(SearchSuggestion {
            suggestion_type: SuggestionType::Product,
            text: product.name.clone(),
            popularity: 90.0 - 10.0 * rank as f64,
            vendor_name: vendor.as_ref().map(|v| v.name.clone()),
            vendor_logo: vendor.as_ref().and_then(|v| v.logo_url.clone()),
        });
    }

    let mut categories_seen = 0usize;
    for product in results {
        if categories_seen == MAX_CATEGORY_SUGGESTIONS {
            break;
        }
        let category = product.category.trim();
        if category.is_empty()
            || suggestion_exists(&suggestions, SuggestionType::Category, category)
        {
            continue;
        }
        suggestions.push(SearchSuggestion {
            suggestion_type: SuggestionType::Category,
            text: category.to_string(),
            popularity: 75.0 - 10.0 * categories_seen as f64,
            vendor_name: None,
            vendor_logo: None,
        });
        categories_seen += 1;
    }

    let mut trending_seen = 0usize;
    for phrase in vocabulary.trending_for(query_lower) {
        if trending_seen == MAX_TRENDING_SUGGESTIONS {
            break;
        }
        // Trending entries skip any text already suggested, whatever its type.
        if suggestions.iter().any(|s| s.text.eq_ignore_ascii_case(phrase)) {
            continue;
        }
        suggestions.push(SearchSuggestion {
            suggestion_type: SuggestionType::Trending,
            text: phrase.to_string(),
            popularity: 99.0 - trending_seen as f64,
            vendor_name: None,
            vendor_logo: None,
        });
        trending_seen += 1;
    }

    // Stable sort keeps equal-popularity entries in insertion order.
    suggestions.sort_by(|a, b| {
        b.popularity
            .partial_cmp(&a.popularity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    suggestions
}

fn suggestion_exists(
    suggestions: &[SearchSuggestion],
    suggestion_type: SuggestionType,
    text: &str,
) -> bool {
    suggestions
        .iter()
        .any(|s| s.suggestion_type == suggestion_type && s.text.eq_ignore_ascii_case(text))
}
