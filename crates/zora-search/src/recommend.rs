//! Personalized recommendation stubs.
//!
//! Until a real recommendation model exists, recommendations are derived
//! from the search results themselves with canned reasons and a fixed
//! score ladder.

use serde::{Deserialize, Serialize};
use zora_catalog::Product;

const MAX_RECOMMENDATIONS: usize = 5;

const REASONS: [&str; 5] = [
    "Popular with shoppers like you",
    "Pairs well with your recent orders",
    "Loved by the Zora community",
    "Trending in your region",
    "Shoppers with similar taste bought this",
];

/// What signal a recommendation is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasedOn {
    PurchaseHistory,
    BrowsingHistory,
    CommunityFavorites,
    RegionalTrends,
    SimilarShoppers,
}

impl BasedOn {
    const CYCLE: [BasedOn; 5] = [
        BasedOn::PurchaseHistory,
        BasedOn::BrowsingHistory,
        BasedOn::CommunityFavorites,
        BasedOn::RegionalTrends,
        BasedOn::SimilarShoppers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BasedOn::PurchaseHistory => "purchase_history",
            BasedOn::BrowsingHistory => "browsing_history",
            BasedOn::CommunityFavorites => "community_favorites",
            BasedOn::RegionalTrends => "regional_trends",
            BasedOn::SimilarShoppers => "similar_shoppers",
        }
    }
}

/// A recommended product with its attribution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    /// The recommended product.
    pub product: Product,
    /// Human-readable reason shown next to the card.
    pub reason: String,
    /// Confidence score, decreasing with position.
    pub score: f64,
    /// Signal the recommendation is attributed to.
    pub based_on: BasedOn,
}

/// Build recommendations for a signed-in shopper.
///
/// Empty unless a user is present and results are non-empty. Otherwise up
/// to 5 results become recommendations with score `0.8 - 0.1 * index`,
/// reasons and attributions cycling through their fixed lists.
pub fn build_recommendations(
    user_id: Option<&str>,
    results: &[Product],
) -> Vec<Recommendation> {
    if user_id.is_none() || results.is_empty() {
        return Vec::new();
    }

    results
        .iter()
        .take(MAX_RECOMMENDATIONS)
        .enumerate()
        .map(|(index, product)| Recommendation {
            product: product.clone(),
            reason: REASONS[index % REASONS.len()].to_string(),
            score: 0.8 - 0.1 * index as f64,
            based_on: BasedOn::CYCLE[index % BasedOn::CYCLE.len()],
        })
        .collect()
}
