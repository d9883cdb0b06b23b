//! Catalog search engine.
//!
//! Matching is a normalized substring test on name and description, combined
//! with an exact (normalized) category filter and an optional stock filter.
//! Normalization lowercases, decomposes to NFD and drops diacritics (combining
//! marks and their spacing forms), so `"Randonnée"` and `"randonnee"` compare
//! equal.

use serde::Deserialize;
use tracing::debug;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use super::product::Product;
use super::store::CatalogStore;

/// A single search request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Substring searched in name and description. Empty matches everything.
    pub query: String,

    /// Exact category filter. `None` or an empty string disables it.
    #[serde(default)]
    pub category: Option<String>,

    /// Stock filter. `None` disables it.
    #[serde(default)]
    pub in_stock: Option<bool>,
}

impl SearchQuery {
    /// Create a query with no filters.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// Restrict results to a category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Restrict results by stock availability.
    pub fn with_in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = Some(in_stock);
        self
    }
}

/// Lowercase and strip diacritical marks.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_diacritic(*c))
        .collect()
}

/// Combining marks plus the spacing diacritics NFD leaves in place
/// (`^`, `` ` ``, `¨`, `¯`, `´`, `·`, `¸` and the spacing modifier letters).
fn is_diacritic(c: char) -> bool {
    is_combining_mark(c)
        || matches!(
            c,
            '^' | '`' | '\u{A8}' | '\u{AF}' | '\u{B4}' | '\u{B7}' | '\u{B8}' | '\u{2B0}'..='\u{2FF}'
        )
}

/// Run a query against the store, returning matches in catalog order.
pub fn search<'a>(store: &'a CatalogStore, query: &SearchQuery) -> Vec<&'a Product> {
    let needle = normalize(&query.query);
    let category = query
        .category
        .as_deref()
        .filter(|c| !c.is_empty())
        .map(normalize);

    let matches: Vec<&Product> = store
        .products()
        .iter()
        .filter(|product| {
            let matches_query = normalize(&product.name).contains(&needle)
                || normalize(&product.description).contains(&needle);
            let matches_category = category
                .as_ref()
                .is_none_or(|c| normalize(&product.category) == *c);
            let matches_stock = query.in_stock.is_none_or(|s| product.in_stock == s);

            matches_query && matches_category && matches_stock
        })
        .collect();

    debug!(
        query = %query.query,
        category = ?query.category,
        in_stock = ?query.in_stock,
        "Catalog search matched {} product(s)",
        matches.len()
    );

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_normalize_strips_diacritics() {
        assert_eq!(normalize("Randonnée"), "randonnee");
        assert_eq!(normalize("CAFÉ"), "cafe");
        assert_eq!(normalize("Décontracté"), "decontracte");
    }

    #[test]
    fn test_normalize_strips_spacing_diacritics() {
        assert_eq!(normalize("caf\u{00B4}e"), "cafe");
        assert_eq!(normalize("cre^me"), "creme");
        assert_eq!(normalize("a`b\u{00A8}c\u{02DC}d"), "abcd");
    }

    #[test]
    fn test_normalize_plain_ascii_is_lowercased() {
        assert_eq!(normalize("Hiking Shoes"), "hiking shoes");
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let store = CatalogStore::seeded();
        let results = search(&store, &SearchQuery::new(""));
        assert_eq!(ids(&results), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_diacritic_insensitive_query() {
        let store = CatalogStore::seeded();
        let results = search(&store, &SearchQuery::new("randonnee"));
        assert_eq!(ids(&results), vec![1]);
    }

    #[test]
    fn test_accented_query_matches_unaccented_text() {
        let store = CatalogStore::seeded();
        let results = search(&store, &SearchQuery::new("HÏKING"));
        assert_eq!(ids(&results), vec![1]);
    }

    #[test]
    fn test_query_matches_description() {
        let store = CatalogStore::seeded();
        let results = search(&store, &SearchQuery::new("ankle support"));
        assert_eq!(ids(&results), vec![4]);
    }

    #[test]
    fn test_query_preserves_catalog_order() {
        let store = CatalogStore::seeded();
        let results = search(&store, &SearchQuery::new("shoes"));
        assert_eq!(ids(&results), vec![1, 2, 4]);
    }

    #[test]
    fn test_category_is_exact_not_substring() {
        let store = CatalogStore::seeded();
        let results = search(&store, &SearchQuery::new("").with_category("Hiking"));
        assert!(results.is_empty());
    }

    #[test]
    fn test_category_is_case_and_diacritic_insensitive() {
        let store = CatalogStore::seeded();
        let results = search(
            &store,
            &SearchQuery::new("").with_category("hiking / randonnee"),
        );
        assert_eq!(ids(&results), vec![1]);
        assert!(results.iter().all(|p| normalize(&p.category) == "hiking / randonnee"));
    }

    #[test]
    fn test_empty_category_disables_filter() {
        let store = CatalogStore::seeded();
        let results = search(&store, &SearchQuery::new("").with_category(""));
        assert_eq!(results.len(), 5);
    }

    #[test]
    fn test_in_stock_filter() {
        let store = CatalogStore::seeded();
        let in_stock = search(&store, &SearchQuery::new("").with_in_stock(true));
        assert_eq!(ids(&in_stock), vec![1, 2, 4, 5]);

        let out_of_stock = search(&store, &SearchQuery::new("").with_in_stock(false));
        assert_eq!(ids(&out_of_stock), vec![3]);
    }

    #[test]
    fn test_all_filters_combined() {
        let store = CatalogStore::seeded();
        let results = search(
            &store,
            &SearchQuery::new("baskets")
                .with_category("CASUAL / DÉCONTRACTÉ")
                .with_in_stock(true),
        );
        assert!(results.is_empty());
    }

    #[test]
    fn test_no_match() {
        let store = CatalogStore::seeded();
        let results = search(&store, &SearchQuery::new("zzz-nonexistent"));
        assert!(results.is_empty());
    }

    #[test]
    fn test_repeated_search_is_stable() {
        let store = CatalogStore::seeded();
        let query = SearchQuery::new("chaussures");
        let first = ids(&search(&store, &query));
        let second = ids(&search(&store, &query));
        assert_eq!(first, second);
        assert_eq!(first, vec![1, 2, 4, 5]);
    }

    #[test]
    fn test_deserialize_from_arguments() {
        let query: SearchQuery = serde_json::from_value(serde_json::json!({
            "query": "shoes",
            "inStock": false
        }))
        .unwrap();
        assert_eq!(query, SearchQuery::new("shoes").with_in_stock(false));
    }
}
