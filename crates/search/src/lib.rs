//! Search engine for The Find 7 storefront.
//!
//! This crate provides:
//! - Weighted relevance scoring with a Levenshtein fuzzy fallback
//! - The faceted filter/sort pipeline (collection, price, tier, sort)
//! - A fuzzy substring locator for result highlighting
//!
//! # Example
//!
//! ```rust
//! use find7_catalog::CatalogStore;
//! use find7_search::{run_search, SearchRequest};
//!
//! let catalog = CatalogStore::builtin();
//! let results = run_search(
//!     catalog,
//!     &SearchRequest {
//!         query: Some("overall".to_string()),
//!         ..SearchRequest::default()
//!     },
//! );
//! assert_eq!(results[0].title, "Overall Pick #1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

mod fuzzy;
mod pipeline;
mod relevance;

pub use fuzzy::{levenshtein_distance, locate_fuzzy, FuzzySpan};
pub use pipeline::{apply, FilterSet, SortBy};
pub use relevance::score_item;

use find7_catalog::{CatalogStore, Item, Tier};

/// A matched item paired with its relevance score.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchResult<T> {
    /// The matched item
    pub item: T,
    /// Relevance score (higher is better)
    pub score: f64,
}

/// Everything a search call can specify; unset fields are unrestricted.
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    /// Free-text query; `None` or blank means "no ranking, natural order"
    pub query: Option<String>,
    /// Restrict to one curated collection
    pub collection: Option<String>,
    /// Inclusive price bounds
    pub price: Option<(f64, f64)>,
    /// Tier restriction; empty means all tiers
    pub tiers: Vec<Tier>,
    /// Result ordering
    pub sort: SortBy,
}

impl SearchRequest {
    /// The query normalized the way the scoring stage expects:
    /// trimmed, lower-cased, absent coerced to empty.
    #[must_use]
    pub fn normalized_query(&self) -> String {
        self.query
            .as_deref()
            .unwrap_or("")
            .trim()
            .to_lowercase()
    }
}

/// The single search entry point: scoring plus the facet pipeline.
pub fn run_search(catalog: &CatalogStore, request: &SearchRequest) -> Vec<Item> {
    let query = request.normalized_query();
    let filters = FilterSet {
        collection: request.collection.clone(),
        price: request.price,
        tiers: request.tiers.clone(),
        sort: request.sort,
    };

    pipeline::apply(catalog.all_items(), &query, &filters)
        .into_iter()
        .cloned()
        .collect()
}

/// Convenience wrapper: text query only, every other facet off.
pub fn search_items(catalog: &CatalogStore, query: &str) -> Vec<Item> {
    run_search(
        catalog,
        &SearchRequest {
            query: Some(query.to_string()),
            ..SearchRequest::default()
        },
    )
}
