//! The search vocabulary: synonym, intent, category and trending tables.
//!
//! The vocabulary is an explicit value handed to the aggregator rather
//! than a set of module constants, so tests can run with controlled
//! word lists and deployments can ship regional overrides. Ordered maps
//! keep fan-out and suggestion output deterministic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A query-intent bucket: trigger keywords plus the categories they imply.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IntentBucket {
    /// Bucket name (e.g., "food").
    pub name: String,
    /// Lowercase keywords that activate this bucket when contained in the query.
    pub keywords: Vec<String>,
    /// Categories whose products belong to this bucket.
    pub categories: Vec<String>,
}

impl IntentBucket {
    /// Create a bucket from keyword and category lists.
    pub fn new(
        name: impl Into<String>,
        keywords: &[&str],
        categories: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            categories: categories.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Whether a lowercase query activates this bucket.
    pub fn matches_query(&self, query_lower: &str) -> bool {
        self.keywords.iter().any(|k| query_lower.contains(k.as_str()))
    }
}

/// Word lists driving fuzzy expansion, intent classification, category
/// extraction and trending matches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchVocabulary {
    /// Query term -> expansion variants for the fuzzy strategy.
    pub synonyms: BTreeMap<String, Vec<String>>,
    /// Intent buckets for the semantic strategy.
    pub intents: Vec<IntentBucket>,
    /// Keyword -> category name for the category strategy.
    pub category_keywords: BTreeMap<String, String>,
    /// Trending phrases, in their stable display order.
    pub trending: Vec<String>,
}

impl SearchVocabulary {
    /// An empty vocabulary; every strategy that depends on a table
    /// degrades to its fallback behavior.
    pub fn empty() -> Self {
        Self {
            synonyms: BTreeMap::new(),
            intents: Vec::new(),
            category_keywords: BTreeMap::new(),
            trending: Vec::new(),
        }
    }

    /// Synonym variants for a lowercase query, if any.
    pub fn variants_for(&self, query_lower: &str) -> &[String] {
        self.synonyms
            .get(query_lower)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Intent buckets a lowercase query activates.
    pub fn matched_intents(&self, query_lower: &str) -> Vec<&IntentBucket> {
        self.intents
            .iter()
            .filter(|b| b.matches_query(query_lower))
            .collect()
    }

    /// Categories whose keyword appears in the lowercase query, deduplicated
    /// in table order.
    pub fn categories_for(&self, query_lower: &str) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for (keyword, category) in &self.category_keywords {
            if query_lower.contains(keyword.as_str())
                && !categories.contains(&category.as_str())
            {
                categories.push(category);
            }
        }
        categories
    }

    /// Trending phrases related to a lowercase query, by bidirectional
    /// substring containment.
    pub fn trending_for(&self, query_lower: &str) -> Vec<&str> {
        self.trending
            .iter()
            .map(|s| s.as_str())
            .filter(|phrase| {
                let phrase_lower = phrase.to_lowercase();
                phrase_lower.contains(query_lower) || query_lower.contains(&phrase_lower)
            })
            .collect()
    }
}

impl Default for SearchVocabulary {
    /// The production Zora vocabulary.
    fn default() -> Self {
        let mut synonyms = BTreeMap::new();
        synonyms.insert(
            "jollof".to_string(),
            vec!["jollof rice".to_string(), "jolof".to_string()],
        );
        synonyms.insert(
            "ankara".to_string(),
            vec!["ankara fabric".to_string(), "wax print".to_string()],
        );
        synonyms.insert(
            "shea".to_string(),
            vec!["shea butter".to_string(), "karite".to_string()],
        );
        synonyms.insert(
            "kente".to_string(),
            vec!["kente cloth".to_string(), "kente fabric".to_string()],
        );
        synonyms.insert(
            "suya".to_string(),
            vec!["suya spice".to_string(), "yaji".to_string()],
        );

        let intents = vec![
            IntentBucket::new(
                "food",
                &[
                    "jollof", "rice", "spice", "soup", "egusi", "suya", "plantain",
                    "snack", "food", "tea", "sauce",
                ],
                &["Food & Spices", "Snacks", "Beverages"],
            ),
            IntentBucket::new(
                "clothing",
                &[
                    "ankara", "kente", "dashiki", "agbada", "dress", "fabric",
                    "scarf", "clothing", "wear", "gele",
                ],
                &["Clothing", "Accessories", "Fabrics"],
            ),
            IntentBucket::new(
                "cultural-region",
                &[
                    "nigeria", "nigerian", "ghana", "ghanaian", "ethiopia",
                    "ethiopian", "kenya", "kenyan", "senegal", "african",
                    "west africa", "east africa",
                ],
                &[],
            ),
        ];

        let mut category_keywords = BTreeMap::new();
        for (keyword, category) in [
            ("spice", "Food & Spices"),
            ("seasoning", "Food & Spices"),
            ("snack", "Snacks"),
            ("tea", "Beverages"),
            ("dress", "Clothing"),
            ("fabric", "Fabrics"),
            ("scarf", "Accessories"),
            ("jewelry", "Accessories"),
            ("soap", "Beauty"),
            ("butter", "Beauty"),
            ("hair", "Beauty"),
            ("art", "Home & Decor"),
            ("basket", "Home & Decor"),
        ] {
            category_keywords.insert(keyword.to_string(), category.to_string());
        }

        let trending = [
            "jollof rice",
            "ankara fabric",
            "shea butter",
            "kente cloth",
            "egusi soup",
            "suya spice",
            "dashiki",
            "black soap",
            "waist beads",
            "plantain chips",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        Self {
            synonyms,
            intents,
            category_keywords,
            trending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_ten_trending_phrases() {
        let vocab = SearchVocabulary::default();
        assert_eq!(vocab.trending.len(), 10);
        assert_eq!(vocab.trending[0], "jollof rice");
    }

    #[test]
    fn test_variants_lookup() {
        let vocab = SearchVocabulary::default();
        assert_eq!(vocab.variants_for("jollof"), ["jollof rice", "jolof"]);
        assert!(vocab.variants_for("quinoa").is_empty());
    }

    #[test]
    fn test_intent_matching() {
        let vocab = SearchVocabulary::default();
        let matched = vocab.matched_intents("nigerian spice");
        let names: Vec<_> = matched.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["food", "cultural-region"]);
    }

    #[test]
    fn test_category_extraction_dedups_in_table_order() {
        let vocab = SearchVocabulary::default();
        assert_eq!(
            vocab.categories_for("spice seasoning dress"),
            ["Clothing", "Food & Spices"]
        );
    }

    #[test]
    fn test_trending_bidirectional_containment() {
        let vocab = SearchVocabulary::default();
        // Query contained in phrase.
        assert_eq!(vocab.trending_for("jollof"), ["jollof rice"]);
        // Phrase contained in query.
        assert_eq!(vocab.trending_for("best dashiki shirts"), ["dashiki"]);
        assert!(vocab.trending_for("quinoa").is_empty());
    }

    #[test]
    fn test_round_trips_through_serde() {
        let vocab = SearchVocabulary::default();
        let json = serde_json::to_string(&vocab).unwrap();
        let back: SearchVocabulary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vocab);
    }
}
