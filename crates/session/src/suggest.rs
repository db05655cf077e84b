//! Quick suggestions: the search box's type-ahead companion.
//!
//! Shares the relevance engine with the main results but runs on a
//! shorter debounce so suggestions feel immediate without racing the
//! full result grid.

use crate::debounce::Debouncer;
use find7_catalog::CatalogStore;
use find7_core::config::SearchConfig;
use find7_search::{score_item, SearchResult};
use std::time::{Duration, Instant};

/// Debounced top-N title suggestions for a partial query.
pub struct Suggester<'c> {
    catalog: &'c CatalogStore,
    debounce: Debouncer,
    pending: Option<String>,
    suggestions: Vec<SearchResult<String>>,
    limit: usize,
}

impl<'c> Suggester<'c> {
    /// Create a suggester over a catalog
    #[must_use]
    pub fn new(catalog: &'c CatalogStore, config: &SearchConfig) -> Self {
        Self {
            catalog,
            debounce: Debouncer::new(Duration::from_millis(config.suggest_debounce_ms)),
            pending: None,
            suggestions: Vec::new(),
            limit: config.suggest_limit,
        }
    }

    /// Stage a keystroke; suggestions refresh once the debounce fires
    pub fn type_ahead(&mut self, query: &str, now: Instant) {
        self.pending = Some(query.to_string());
        self.debounce.arm(now);
    }

    /// Drive the timer. Returns `true` when the suggestion list changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.debounce.poll(now) {
            return false;
        }
        let Some(staged) = self.pending.take() else {
            return false;
        };
        self.recompute(&staged);
        true
    }

    /// The current suggestions, best first
    #[must_use]
    pub fn suggestions(&self) -> &[SearchResult<String>] {
        &self.suggestions
    }

    fn recompute(&mut self, query: &str) {
        let normalized = query.trim().to_lowercase();
        if normalized.is_empty() {
            self.suggestions.clear();
            return;
        }

        let mut scored: Vec<SearchResult<String>> = self
            .catalog
            .all_items()
            .iter()
            .map(|item| SearchResult {
                item: item.title.clone(),
                score: score_item(item, &normalized),
            })
            .filter(|result| result.score > 0.0)
            .collect();
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(self.limit);
        self.suggestions = scored;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggester() -> Suggester<'static> {
        Suggester::new(CatalogStore::builtin(), &SearchConfig::default())
    }

    #[test]
    fn test_suggestions_after_debounce() {
        let mut s = suggester();
        let start = Instant::now();

        s.type_ahead("premium", start);
        assert!(!s.poll(start + Duration::from_millis(100)));
        assert!(s.poll(start + Duration::from_millis(180)));

        assert_eq!(s.suggestions().len(), 5);
        assert_eq!(s.suggestions()[0].item, "Premium Pick #1");
    }

    #[test]
    fn test_blank_query_clears() {
        let mut s = suggester();
        let start = Instant::now();

        s.type_ahead("travel", start);
        assert!(s.poll(start + Duration::from_millis(180)));
        assert!(!s.suggestions().is_empty());

        s.type_ahead("", start + Duration::from_millis(200));
        assert!(s.poll(start + Duration::from_millis(380)));
        assert!(s.suggestions().is_empty());
    }

    #[test]
    fn test_shorter_debounce_than_search_box() {
        let config = SearchConfig::default();
        assert!(config.suggest_debounce_ms < config.debounce_ms);
    }
}
