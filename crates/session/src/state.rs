//! The search orchestrator: UI-facing search state.
//!
//! Owns `{query, filters, page}` for one search view. Query keystrokes
//! are staged behind a debounce timer; facet changes apply immediately
//! and reset pagination. A subset of state syncs to the URL: `q` after
//! the debounce fires, `tier` on every tier change. Hydration reads
//! `tier` and `collection` once at construction; the session never reads
//! the URL again after that.
//!
//! Recomputation is a pure function of `{catalog, query, filters}`;
//! callers never observe a partially-applied update.

use crate::debounce::Debouncer;
use find7_catalog::{CatalogStore, Item, Tier};
use find7_core::config::SearchConfig;
use find7_core::urlquery::QueryParams;
use find7_search::{run_search, FilterSet, SearchRequest, SortBy};
use std::time::{Duration, Instant};

/// One clearable filter dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    /// The collection restriction
    Collection,
    /// The price range
    Price,
    /// The tier set
    Tiers,
    /// The sort strategy
    Sort,
}

/// Search state for a single search view.
pub struct SearchSession<'c> {
    catalog: &'c CatalogStore,
    query: String,
    pending_query: Option<String>,
    filters: FilterSet,
    page: usize,
    page_size: usize,
    debounce: Debouncer,
    url: QueryParams,
    pending_url: Option<String>,
    filtered: Vec<Item>,
}

impl<'c> SearchSession<'c> {
    /// Create a session with no URL state
    #[must_use]
    pub fn new(catalog: &'c CatalogStore, config: &SearchConfig) -> Self {
        Self::hydrate(catalog, config, "")
    }

    /// Create a session, hydrating `tier` and `collection` from a URL
    /// query string. Unrecognized params are preserved for later writes.
    #[must_use]
    pub fn hydrate(catalog: &'c CatalogStore, config: &SearchConfig, query_string: &str) -> Self {
        let url = QueryParams::parse(query_string);

        let mut filters = FilterSet::default();
        if let Some(collection) = url.get("collection") {
            if !collection.is_empty() {
                filters.collection = Some(collection.to_string());
            }
        }
        filters.tiers = dedup_tiers(
            url.get_list("tier")
                .iter()
                .filter_map(|letter| Tier::from_letter(letter))
                .collect(),
        );

        let mut session = Self {
            catalog,
            query: String::new(),
            pending_query: None,
            filters,
            page: 1,
            page_size: config.page_size,
            debounce: Debouncer::new(Duration::from_millis(config.debounce_ms)),
            url,
            pending_url: None,
            filtered: Vec::new(),
        };
        session.recompute();
        session
    }

    // --- query -----------------------------------------------------------

    /// Stage a query change behind the debounce timer.
    ///
    /// Each keystroke re-arms the timer; only the final text commits.
    pub fn set_query(&mut self, query: &str, now: Instant) {
        if self.pending_query.is_none() && query == self.query {
            return;
        }
        self.pending_query = Some(query.to_string());
        self.debounce.arm(now);
    }

    /// Drive the debounce timer. Returns `true` when a staged query
    /// committed (page reset, results recomputed, URL write staged).
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.debounce.poll(now) {
            return false;
        }
        let Some(staged) = self.pending_query.take() else {
            return false;
        };
        if staged == self.query {
            return false;
        }

        tracing::debug!(query = %staged, "query committed");
        self.query = staged;
        self.page = 1;
        self.recompute();
        self.write_query_param();
        true
    }

    // --- facets ----------------------------------------------------------

    /// Restrict (or unrestrict) the collection. Applies immediately.
    pub fn set_collection(&mut self, collection: Option<String>) {
        if self.filters.collection == collection {
            return;
        }
        self.filters.collection = collection;
        self.reset_and_recompute();
    }

    /// Set (or clear) the inclusive price range. Applies immediately.
    pub fn set_price(&mut self, price: Option<(f64, f64)>) {
        if self.filters.price == price {
            return;
        }
        self.filters.price = price;
        self.reset_and_recompute();
    }

    /// Set the sort strategy. Applies immediately.
    pub fn set_sort(&mut self, sort: SortBy) {
        if self.filters.sort == sort {
            return;
        }
        self.filters.sort = sort;
        self.reset_and_recompute();
    }

    /// Replace the tier set. Applies immediately and, alone among the
    /// facets, writes its state back into the URL.
    pub fn set_tiers(&mut self, tiers: Vec<Tier>) {
        let tiers = dedup_tiers(tiers);
        if self.filters.tiers == tiers {
            return;
        }
        self.filters.tiers = tiers;
        self.reset_and_recompute();
        self.write_tier_param();
    }

    /// Reset a single facet to its unset sentinel
    pub fn clear(&mut self, facet: Facet) {
        match facet {
            Facet::Collection => self.set_collection(None),
            Facet::Price => self.set_price(None),
            Facet::Tiers => self.set_tiers(Vec::new()),
            Facet::Sort => self.set_sort(SortBy::Relevance),
        }
    }

    /// Reset every facet and the query
    pub fn clear_all(&mut self) {
        self.pending_query = None;
        self.debounce.cancel();
        self.query.clear();
        self.filters = FilterSet::default();
        self.page = 1;
        self.recompute();
        self.url.remove("q");
        self.url.remove("tier");
        self.stage_url_write();
    }

    // --- pagination ------------------------------------------------------

    /// The slice of results currently materialized to the UI
    #[must_use]
    pub fn displayed(&self) -> &[Item] {
        let end = (self.page * self.page_size).min(self.filtered.len());
        &self.filtered[..end]
    }

    /// True while more results exist beyond the displayed slice
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.displayed().len() < self.filtered.len()
    }

    /// The scroll sentinel became visible: materialize one more page.
    ///
    /// Idempotent at the end of the result set: repeated signals while
    /// `has_more` is false never advance the page.
    pub fn sentinel_visible(&mut self) {
        if self.has_more() {
            self.page += 1;
            tracing::debug!(page = self.page, "page advanced");
        }
    }

    // --- accessors -------------------------------------------------------

    /// The committed query
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The active filters
    #[must_use]
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Pages materialized so far (1-based)
    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    /// The full filtered result set
    #[must_use]
    pub fn filtered(&self) -> &[Item] {
        &self.filtered
    }

    /// Take the staged URL write, if any. Last write wins; at most one
    /// is ever pending.
    pub fn take_url_update(&mut self) -> Option<String> {
        self.pending_url.take()
    }

    // --- internals -------------------------------------------------------

    fn reset_and_recompute(&mut self) {
        self.page = 1;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.filtered = run_search(
            self.catalog,
            &SearchRequest {
                query: Some(self.query.clone()),
                collection: self.filters.collection.clone(),
                price: self.filters.price,
                tiers: self.filters.tiers.clone(),
                sort: self.filters.sort,
            },
        );
        tracing::trace!(results = self.filtered.len(), "results recomputed");
    }

    fn write_query_param(&mut self) {
        if self.query.is_empty() {
            self.url.remove("q");
        } else {
            self.url.set("q", self.query.clone());
        }
        self.stage_url_write();
    }

    fn write_tier_param(&mut self) {
        let letters: Vec<&str> = self.filters.tiers.iter().map(Tier::as_str).collect();
        self.url.set_list("tier", &letters);
        self.stage_url_write();
    }

    fn stage_url_write(&mut self) {
        self.pending_url = Some(self.url.to_query_string());
    }
}

fn dedup_tiers(tiers: Vec<Tier>) -> Vec<Tier> {
    let mut out = Vec::with_capacity(tiers.len());
    for tier in tiers {
        if !out.contains(&tier) {
            out.push(tier);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn session() -> SearchSession<'static> {
        SearchSession::new(CatalogStore::builtin(), &SearchConfig::default())
    }

    #[test]
    fn test_hydrate_tier_and_collection() {
        let s = SearchSession::hydrate(
            CatalogStore::builtin(),
            &SearchConfig::default(),
            "?tier=S,A&collection=best_premium",
        );
        assert_eq!(s.filters().tiers, vec![Tier::S, Tier::A]);
        assert_eq!(s.filters().collection.as_deref(), Some("best_premium"));
        assert_eq!(s.filtered().len(), 7);
    }

    #[test]
    fn test_hydrate_ignores_junk_tiers() {
        let s = SearchSession::hydrate(
            CatalogStore::builtin(),
            &SearchConfig::default(),
            "tier=S,X,S,a",
        );
        assert_eq!(s.filters().tiers, vec![Tier::S, Tier::A]);
    }

    #[test]
    fn test_query_commits_after_debounce() {
        let mut s = session();
        let start = Instant::now();

        s.set_query("overall", start);
        assert!(!s.poll(start + Duration::from_millis(100)));
        assert_eq!(s.query(), "");

        assert!(s.poll(start + Duration::from_millis(300)));
        assert_eq!(s.query(), "overall");
        assert_eq!(s.page(), 1);
        assert_eq!(s.displayed()[0].slug, "overall-pick-1");

        let url = s.take_url_update().unwrap();
        assert!(url.contains("q=overall"));
    }

    #[test]
    fn test_rapid_keystrokes_last_write_wins() {
        let mut s = session();
        let start = Instant::now();

        s.set_query("o", start);
        s.set_query("ov", start + Duration::from_millis(100));
        s.set_query("overall", start + Duration::from_millis(200));

        // The first keystroke's deadline has passed, but it was re-armed
        assert!(!s.poll(start + Duration::from_millis(350)));
        assert!(s.poll(start + Duration::from_millis(500)));
        assert_eq!(s.query(), "overall");
    }

    #[test]
    fn test_filter_change_resets_page_immediately() {
        let mut s = session();
        s.sentinel_visible();
        s.sentinel_visible();
        assert_eq!(s.page(), 3);

        s.set_price(Some((50.0, 300.0)));
        assert_eq!(s.page(), 1);
        assert!(s.filtered().iter().all(|i| {
            let p = i.price_value();
            (50.0..=300.0).contains(&p)
        }));
    }

    #[test]
    fn test_tier_change_writes_url_collection_does_not() {
        let mut s = session();

        s.set_collection(Some("best_value".to_string()));
        assert!(s.take_url_update().is_none());

        s.set_tiers(vec![Tier::S]);
        let url = s.take_url_update().unwrap();
        assert!(url.contains("tier=S"));
    }

    #[test]
    fn test_url_update_is_one_shot() {
        let mut s = session();
        s.set_tiers(vec![Tier::B]);
        assert!(s.take_url_update().is_some());
        assert!(s.take_url_update().is_none());
    }

    #[test]
    fn test_hydrated_foreign_params_survive_writes() {
        let mut s = SearchSession::hydrate(
            CatalogStore::builtin(),
            &SearchConfig::default(),
            "utm_source=newsletter",
        );
        s.set_tiers(vec![Tier::S]);
        let url = s.take_url_update().unwrap();
        assert!(url.contains("utm_source=newsletter"));
        assert!(url.contains("tier=S"));
    }

    #[test]
    fn test_pagination_default_page_size() {
        let s = session();
        assert_eq!(s.displayed().len(), 12);
        assert!(s.has_more());
    }

    #[test]
    fn test_sentinel_idempotent_at_end() {
        let mut s = session();
        for _ in 0..20 {
            s.sentinel_visible();
        }
        assert_eq!(s.displayed().len(), s.filtered().len());
        assert!(!s.has_more());

        let page_at_end = s.page();
        s.sentinel_visible();
        s.sentinel_visible();
        assert_eq!(s.page(), page_at_end);
    }

    #[test]
    fn test_displayed_monotonic_and_has_more_boundary() {
        let mut s = session();
        let mut previous = s.displayed().len();
        while s.has_more() {
            s.sentinel_visible();
            let current = s.displayed().len();
            assert!(current >= previous);
            previous = current;
        }
        assert_eq!(s.displayed().len(), s.filtered().len());
    }

    #[test]
    fn test_clear_single_facet() {
        let mut s = session();
        s.set_collection(Some("best_budget".to_string()));
        s.set_sort(SortBy::PriceHigh);
        s.sentinel_visible();

        s.clear(Facet::Collection);
        assert!(s.filters().collection.is_none());
        assert_eq!(s.page(), 1);
        // Sort untouched by clearing another facet
        assert_eq!(s.filters().sort, SortBy::PriceHigh);

        s.clear(Facet::Sort);
        assert_eq!(s.filters().sort, SortBy::Relevance);
    }

    #[test]
    fn test_clear_all_resets_query_too() {
        let mut s = session();
        let start = Instant::now();
        s.set_query("premium", start);
        assert!(s.poll(start + Duration::from_millis(300)));
        s.set_tiers(vec![Tier::S]);
        s.take_url_update();

        s.clear_all();
        assert_eq!(s.query(), "");
        assert!(s.filters().is_empty());
        assert_eq!(s.page(), 1);
        assert_eq!(s.filtered().len(), 49);

        let url = s.take_url_update().unwrap();
        assert!(!url.contains("q="));
        assert!(!url.contains("tier="));
    }

    #[test]
    fn test_recompute_is_pure_replay() {
        let mut a = session();
        let mut b = session();
        let start = Instant::now();
        for s in [&mut a, &mut b] {
            s.set_query("pick", start);
            s.poll(start + Duration::from_millis(300));
            s.set_tiers(vec![Tier::A, Tier::B]);
        }
        let slugs_a: Vec<_> = a.filtered().iter().map(|i| i.slug.clone()).collect();
        let slugs_b: Vec<_> = b.filtered().iter().map(|i| i.slug.clone()).collect();
        assert_eq!(slugs_a, slugs_b);
    }

    proptest! {
        // displayed never exceeds filtered, and sentinel signals only
        // ever grow the displayed slice
        #[test]
        fn prop_pagination_monotonic(signals in 0usize..40) {
            let mut s = session();
            let mut previous = s.displayed().len();
            for _ in 0..signals {
                s.sentinel_visible();
                let current = s.displayed().len();
                prop_assert!(current >= previous);
                prop_assert!(current <= s.filtered().len());
                previous = current;
            }
        }
    }
}
