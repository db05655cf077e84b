//! Categories: the catalog's curated partitions

use serde::{Deserialize, Serialize};

/// Descriptive metadata for a catalog partition.
///
/// `key` is the canonical underscore form used in data and query params;
/// `slug` is the hyphenated URL form. The two are bijective transforms of
/// each other. 1:N with [`crate::Item`] via `Item::category == key`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Canonical key, underscore form (`best_overall`)
    pub key: String,
    /// URL slug, hyphen form (`best-overall`)
    pub slug: String,
    /// Display name
    pub name: String,
    /// One-line pitch shown on the category page
    pub tagline: String,
    /// Decorative emoji
    pub emoji: String,
}

/// Convert a canonical category key to its URL slug
#[must_use]
pub fn key_to_slug(key: &str) -> String {
    key.replace('_', "-")
}

/// Convert a URL slug back to its canonical category key
#[must_use]
pub fn slug_to_key(slug: &str) -> String {
    slug.replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_slug_bijection() {
        assert_eq!(key_to_slug("best_overall"), "best-overall");
        assert_eq!(slug_to_key("best-overall"), "best_overall");
        assert_eq!(slug_to_key(&key_to_slug("best_battery_life")), "best_battery_life");
    }
}
