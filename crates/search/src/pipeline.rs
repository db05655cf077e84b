//! The facet filter and sort pipeline.
//!
//! Stages run in a fixed order; each narrows or reorders the previous
//! stage's output:
//!
//! 1. collection (exact category key)
//! 2. relevance scoring + zero-score filter + descending sort
//! 3. price range (inclusive)
//! 4. tier membership
//! 5. explicit sort override
//!
//! Stages with an unset facet pass items through untouched. The whole
//! pipeline is a pure function of its inputs.

use crate::relevance::score_item;
use find7_catalog::{Item, Tier};

/// One independent filter dimension per field, plus the sort strategy.
///
/// Every recognized facet is an explicit field with an explicit "unset"
/// sentinel: `None` for collection and price, an empty list for tiers
/// (empty means "no restriction", not "match nothing"), and
/// [`SortBy::Relevance`] for sort.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    /// Restrict to one curated collection (category key)
    pub collection: Option<String>,
    /// Inclusive `[min, max]` bounds on the parsed price
    pub price: Option<(f64, f64)>,
    /// Keep only these tiers; empty keeps everything
    pub tiers: Vec<Tier>,
    /// Final ordering strategy
    pub sort: SortBy,
}

impl FilterSet {
    /// True when every facet is at its unset sentinel
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collection.is_none()
            && self.price.is_none()
            && self.tiers.is_empty()
            && self.sort == SortBy::Relevance
    }
}

/// Result ordering strategy.
///
/// `Relevance` keeps the scoring stage's order (catalog order when there
/// is no query); the other variants supersede it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
    /// Score order from the relevance stage (the default)
    #[default]
    Relevance,
    /// Cheapest first
    PriceLow,
    /// Most expensive first
    PriceHigh,
    /// Highest rated first
    Rating,
}

impl SortBy {
    /// Canonical wire/CLI key for this strategy
    #[must_use]
    pub fn as_key(&self) -> &'static str {
        match self {
            SortBy::Relevance => "relevance",
            SortBy::PriceLow => "price_low",
            SortBy::PriceHigh => "price_high",
            SortBy::Rating => "rating",
        }
    }

    /// Parse a wire/CLI key; unknown keys are not a strategy
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "relevance" => Some(SortBy::Relevance),
            "price_low" => Some(SortBy::PriceLow),
            "price_high" => Some(SortBy::PriceHigh),
            "rating" => Some(SortBy::Rating),
            _ => None,
        }
    }
}

/// Run the full pipeline over a candidate set.
///
/// `query` must already be normalized (lower-cased, trimmed); an empty
/// query skips the scoring stage entirely, preserving input order.
#[must_use]
pub fn apply<'a>(items: &'a [Item], query: &str, filters: &FilterSet) -> Vec<&'a Item> {
    let mut current: Vec<&Item> = items.iter().collect();

    if let Some(collection) = &filters.collection {
        current.retain(|i| i.category == *collection);
    }

    if !query.is_empty() {
        current = rank_by_relevance(current, query);
    }

    if let Some((min, max)) = filters.price {
        current.retain(|i| {
            let price = i.price_value();
            price >= min && price <= max
        });
    }

    if !filters.tiers.is_empty() {
        current.retain(|i| filters.tiers.contains(&i.tier));
    }

    // Explicit sort supersedes relevance order; all sorts are stable so
    // the prior stage's order remains the tie-break
    match filters.sort {
        SortBy::Relevance => {}
        SortBy::PriceLow => current.sort_by(|a, b| a.price_value().total_cmp(&b.price_value())),
        SortBy::PriceHigh => current.sort_by(|a, b| b.price_value().total_cmp(&a.price_value())),
        SortBy::Rating => current.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }

    tracing::trace!(
        results = current.len(),
        query = %query,
        sort = filters.sort.as_key(),
        "pipeline applied"
    );

    current
}

/// Score, drop zero-score items, and sort descending.
///
/// The sort is stable, so equal scores keep catalog order.
fn rank_by_relevance<'a>(items: Vec<&'a Item>, query: &str) -> Vec<&'a Item> {
    #[cfg(feature = "parallel")]
    let scored: Vec<(f64, &Item)> = {
        use rayon::prelude::*;
        items
            .into_par_iter()
            .map(|i| (score_item(i, query), i))
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let scored: Vec<(f64, &Item)> = items.into_iter().map(|i| (score_item(i, query), i)).collect();

    let mut matched: Vec<(f64, &Item)> =
        scored.into_iter().filter(|(score, _)| *score > 0.0).collect();
    matched.sort_by(|a, b| b.0.total_cmp(&a.0));
    matched.into_iter().map(|(_, item)| item).collect()
}
