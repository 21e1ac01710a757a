//! The five matching strategies fanned out per query.
//!
//! Each strategy is an independent async function over the catalog source.
//! They return `Result` so a provider failure stays visible to the
//! aggregator, which converts it into an empty contribution.

use zora_catalog::{CatalogError, CatalogQuery, CatalogSource, Product, SearchFilters};

use crate::vocabulary::{IntentBucket, SearchVocabulary};

const BASIC_LIMIT: usize = 20;
const FUZZY_LIMIT_PER_VARIANT: usize = 10;
const CATEGORY_LIMIT_PER_CATEGORY: usize = 10;
const TRENDING_LIMIT_PER_PHRASE: usize = 5;

/// Substring/keyword match using the query and filters as-is.
pub async fn basic<S: CatalogSource>(
    source: &S,
    query: &str,
    filters: &SearchFilters,
) -> Result<Vec<Product>, CatalogError> {
    let query = CatalogQuery::new(query)
        .with_filters(filters.clone())
        .with_limit(BASIC_LIMIT);
    source.search(&query).await
}

/// Expand the query into synonym variants and match each.
pub async fn fuzzy<S: CatalogSource>(
    source: &S,
    vocabulary: &SearchVocabulary,
    query: &str,
) -> Result<Vec<Product>, CatalogError> {
    let mut products = Vec::new();
    for variant in vocabulary.variants_for(query) {
        let query = CatalogQuery::new(variant).with_limit(FUZZY_LIMIT_PER_VARIANT);
        products.extend(source.search(&query).await?);
    }
    Ok(products)
}

/// Classify query intent into vocabulary buckets and collect products that
/// belong to any matched bucket; falls back to a plain substring match when
/// no bucket matches.
pub async fn semantic<S: CatalogSource>(
    source: &S,
    vocabulary: &SearchVocabulary,
    query: &str,
) -> Result<Vec<Product>, CatalogError> {
    let buckets = vocabulary.matched_intents(query);
    if buckets.is_empty() {
        let query = CatalogQuery::new(query).with_limit(BASIC_LIMIT);
        return source.search(&query).await;
    }

    let products = source.all_products().await?;
    Ok(products
        .into_iter()
        .filter(|p| buckets.iter().any(|b| in_bucket(p, b)))
        .collect())
}

/// Whether a product belongs to an intent bucket: its category equals one
/// of the bucket's categories, or its text mentions a bucket keyword.
fn in_bucket(product: &Product, bucket: &IntentBucket) -> bool {
    if bucket
        .categories
        .iter()
        .any(|c| product.category.eq_ignore_ascii_case(c))
    {
        return true;
    }

    let haystack = format!(
        "{} {} {}",
        product.name,
        product.description,
        product.region.as_deref().unwrap_or_default()
    )
    .to_lowercase();
    bucket.keywords.iter().any(|k| haystack.contains(k.as_str()))
}

/// Extract category keywords from the query and fetch each category.
pub async fn category<S: CatalogSource>(
    source: &S,
    vocabulary: &SearchVocabulary,
    query: &str,
) -> Result<Vec<Product>, CatalogError> {
    let mut products = Vec::new();
    for category in vocabulary.categories_for(query) {
        products.extend(
            source
                .products_in_category(category, CATEGORY_LIMIT_PER_CATEGORY)
                .await?,
        );
    }
    Ok(products)
}

/// Match trending phrases against the query and fetch a few products for
/// each related phrase.
pub async fn trending<S: CatalogSource>(
    source: &S,
    vocabulary: &SearchVocabulary,
    query: &str,
) -> Result<Vec<Product>, CatalogError> {
    let mut products = Vec::new();
    for phrase in vocabulary.trending_for(query) {
        let query = CatalogQuery::new(phrase).with_limit(TRENDING_LIMIT_PER_PHRASE);
        products.extend(source.search(&query).await?);
    }
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use zora_catalog::InMemoryCatalog;

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::new(
            vec![
                Product::new(
                    "p-1",
                    "Jollof Rice Spice Mix",
                    "Authentic West African seasoning",
                    "Food & Spices",
                    12.99,
                    "v-1",
                ),
                Product::new(
                    "p-2",
                    "Ankara Print Dress",
                    "Vibrant wax print",
                    "Clothing",
                    45.0,
                    "v-2",
                ),
                Product::new(
                    "p-3",
                    "Carved Wooden Mask",
                    "Nigerian ceremonial art",
                    "Home & Decor",
                    80.0,
                    "v-3",
                ),
            ],
            Vec::new(),
        )
    }

    #[tokio::test]
    async fn test_basic_applies_filters() {
        let filters = SearchFilters::new().with_price_range(None, Some(20.0));
        let results = basic(&catalog(), "spice", &filters).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id.as_str(), "p-1");
    }

    #[tokio::test]
    async fn test_fuzzy_uses_synonym_variants() {
        // "jollof" itself is not searched, only its variants.
        let results = fuzzy(&catalog(), &SearchVocabulary::default(), "jollof")
            .await
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id.as_str(), "p-1");

        let results = fuzzy(&catalog(), &SearchVocabulary::empty(), "jollof")
            .await
            .unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_semantic_bucket_filter() {
        // "nigerian" activates only the cultural-region bucket, which has no
        // categories; membership comes from keyword mentions in the text.
        // "West African" in p-1's description counts, the dress does not.
        let results = semantic(&catalog(), &SearchVocabulary::default(), "nigerian")
            .await
            .unwrap();
        let ids: Vec<_> = results.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p-1", "p-3"]);
    }

    #[tokio::test]
    async fn test_semantic_falls_back_to_substring() {
        let results = semantic(&catalog(), &SearchVocabulary::empty(), "mask")
            .await
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id.as_str(), "p-3");
    }

    #[tokio::test]
    async fn test_category_extraction() {
        let results = category(&catalog(), &SearchVocabulary::default(), "spice dress")
            .await
            .unwrap();
        let ids: Vec<_> = results.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p-2", "p-1"]);
    }

    #[tokio::test]
    async fn test_trending_phrase_fetch() {
        let results = trending(&catalog(), &SearchVocabulary::default(), "jollof")
            .await
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id.as_str(), "p-1");
    }
}
