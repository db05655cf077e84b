//! The catalog store: fixture loading and read accessors

use crate::category::Category;
use crate::item::{Item, Tier};
use find7_core::{Error, Result, ResultExt};
use once_cell::sync::Lazy;
use serde::Deserialize;

/// The shipped fixture catalog, embedded at compile time
const FIXTURE_JSON: &str = include_str!("../data/catalog.json");

static BUILTIN: Lazy<CatalogStore> = Lazy::new(|| {
    // The embedded fixture is validated by tests; a parse failure here is
    // a build defect, not a runtime condition.
    CatalogStore::from_json(FIXTURE_JSON)
        .unwrap_or_else(|e| panic!("embedded catalog fixture is invalid: {e}"))
});

/// Map a category key to its quality tier.
///
/// Fixed table; categories absent from it derive [`Tier::C`].
#[must_use]
pub fn tier_for_category(key: &str) -> Tier {
    match key {
        "best_premium" => Tier::S,
        "best_overall" | "best_performance" => Tier::A,
        "best_value" | "best_design" => Tier::B,
        _ => Tier::C,
    }
}

#[derive(Debug, Deserialize)]
struct FixtureFile {
    categories: Vec<Category>,
    items: Vec<Item>,
}

/// Read-only catalog: every item and category, loaded once.
#[derive(Debug)]
pub struct CatalogStore {
    categories: Vec<Category>,
    items: Vec<Item>,
}

impl CatalogStore {
    /// Parse a catalog from fixture JSON, deriving each item's tier.
    pub fn from_json(json: &str) -> Result<Self> {
        let fixture: FixtureFile = serde_json::from_str(json)
            .map_err(Error::from)
            .context("Failed to parse catalog fixture")?;

        let mut items = fixture.items;
        for item in &mut items {
            item.tier = tier_for_category(&item.category);
        }

        tracing::debug!(
            categories = fixture.categories.len(),
            items = items.len(),
            "catalog loaded"
        );

        Ok(Self {
            categories: fixture.categories,
            items,
        })
    }

    /// The catalog shipped with the binary
    #[must_use]
    pub fn builtin() -> &'static CatalogStore {
        &BUILTIN
    }

    /// Every item, in catalog order
    #[must_use]
    pub fn all_items(&self) -> &[Item] {
        &self.items
    }

    /// Every category, in display order
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Items belonging to a curated collection (category key match)
    #[must_use]
    pub fn collection(&self, key: &str) -> Vec<&Item> {
        self.items.iter().filter(|i| i.category == key).collect()
    }

    /// Look up a category by its canonical key
    #[must_use]
    pub fn category(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Look up a category by its URL slug
    #[must_use]
    pub fn category_by_slug(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    /// Look up an item by category key and item slug
    #[must_use]
    pub fn item(&self, category: &str, slug: &str) -> Option<&Item> {
        self.items
            .iter()
            .find(|i| i.category == category && i.slug == slug)
    }

    /// Look up an item by slug alone (compare selections store bare
    /// slugs); first catalog-order match wins
    #[must_use]
    pub fn item_by_slug(&self, slug: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.slug == slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_shape() {
        let catalog = CatalogStore::builtin();
        assert_eq!(catalog.categories().len(), 7);
        assert_eq!(catalog.all_items().len(), 49);
        for category in catalog.categories() {
            assert_eq!(catalog.collection(&category.key).len(), 7);
        }
    }

    #[test]
    fn test_tier_derivation_at_load() {
        let catalog = CatalogStore::builtin();
        let tier_s: Vec<_> = catalog
            .all_items()
            .iter()
            .filter(|i| i.tier == Tier::S)
            .collect();
        assert_eq!(tier_s.len(), 7);
        assert!(tier_s.iter().all(|i| i.category == "best_premium"));
    }

    #[test]
    fn test_unmapped_category_defaults_to_c() {
        let json = r#"{
            "categories": [],
            "items": [{
                "slug": "mystery",
                "category": "best_mystery",
                "title": "Mystery Pick",
                "subtitle": "Unmapped",
                "price": "$10",
                "rating": 3.0
            }]
        }"#;
        let catalog = CatalogStore::from_json(json).unwrap();
        assert_eq!(catalog.all_items()[0].tier, Tier::C);
    }

    #[test]
    fn test_category_lookups() {
        let catalog = CatalogStore::builtin();
        assert!(catalog.category("best_value").is_some());
        assert!(catalog.category_by_slug("best-value").is_some());
        assert!(catalog.category_by_slug("best_value").is_none());
        assert!(catalog.category_by_slug("best-vaporware").is_none());
    }

    #[test]
    fn test_item_lookup() {
        let catalog = CatalogStore::builtin();
        let item = catalog.item("best_overall", "overall-pick-1").unwrap();
        assert_eq!(item.title, "Overall Pick #1");
        assert!((item.rating - 4.8).abs() < f64::EPSILON);
        assert!(catalog.item("best_overall", "premium-pick-1").is_none());
    }

    #[test]
    fn test_item_by_slug() {
        let catalog = CatalogStore::builtin();
        assert_eq!(
            catalog.item_by_slug("premium-pick-2").unwrap().category,
            "best_premium"
        );
        assert!(catalog.item_by_slug("vapor-pick-1").is_none());
    }

    #[test]
    fn test_malformed_fixture_is_error() {
        let err = CatalogStore::from_json("{ not json").unwrap_err();
        assert!(err.context.is_some());
    }
}
