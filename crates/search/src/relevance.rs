//! Relevance scoring for catalog items.

use crate::fuzzy::levenshtein_distance;
use find7_catalog::Item;

/// Query is a prefix of the title
const TITLE_PREFIX_BONUS: f64 = 60.0;
/// Query appears anywhere in the title (stacks with the prefix bonus)
const TITLE_CONTAINS_BONUS: f64 = 35.0;
/// Query appears in the category key
const CATEGORY_CONTAINS_BONUS: f64 = 20.0;
/// Query appears in the subtitle
const SUBTITLE_CONTAINS_BONUS: f64 = 15.0;
/// Query appears in the description
const DESCRIPTION_CONTAINS_BONUS: f64 = 8.0;
/// Whole title within one edit of the query
const FUZZY_CLOSE_BONUS: f64 = 20.0;
/// Whole title within two edits of the query
const FUZZY_NEAR_BONUS: f64 = 10.0;
/// Per-star weight of the rating prior
const RATING_WEIGHT: f64 = 2.0;

/// Score an item's relevance for a normalized query.
///
/// `query` must be lower-cased, trimmed, and non-empty; the pipeline
/// short-circuits empty queries before scoring is ever reached.
///
/// The score is a weighted sum of match signals (title prefix/substring,
/// category, subtitle, description, whole-title edit distance). An item
/// with no match signal at all scores `0.0` and is excluded from results;
/// matched items additionally receive a brevity bonus (shorter titles
/// break ties) and a rating prior (`rating × 2`).
#[must_use]
pub fn score_item(item: &Item, query: &str) -> f64 {
    let title = item.title.to_lowercase();

    let mut signal = 0.0;
    if title.starts_with(query) {
        signal += TITLE_PREFIX_BONUS;
    }
    if title.contains(query) {
        signal += TITLE_CONTAINS_BONUS;
    }
    if item.category.to_lowercase().contains(query) {
        signal += CATEGORY_CONTAINS_BONUS;
    }
    if item.subtitle.to_lowercase().contains(query) {
        signal += SUBTITLE_CONTAINS_BONUS;
    }
    if let Some(description) = &item.description {
        if description.to_lowercase().contains(query) {
            signal += DESCRIPTION_CONTAINS_BONUS;
        }
    }
    signal += match levenshtein_distance(&title, query) {
        0 | 1 => FUZZY_CLOSE_BONUS,
        2 => FUZZY_NEAR_BONUS,
        _ => 0.0,
    };

    if signal == 0.0 {
        return 0.0;
    }

    let title_len = title.chars().count() as f64;
    let brevity = (10.0 - title_len / 5.0).max(0.0);
    let popularity = item.rating.max(0.0) * RATING_WEIGHT;

    signal + brevity + popularity
}
