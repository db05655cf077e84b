//! Catalog items and their derived fields

use serde::{Deserialize, Serialize};
use std::fmt;

/// Asset served when an item ships without imagery
pub const PLACEHOLDER_IMAGE: &str = "/assets/placeholder.svg";

/// Coarse quality/price bucket derived from an item's category.
///
/// Variant order is best-first, so `S` sorts ahead of `C`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum Tier {
    /// Top shelf
    S,
    /// Strong pick
    A,
    /// Solid
    B,
    /// Baseline
    #[default]
    C,
}

impl Tier {
    /// The tier's single-letter form
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::S => "S",
            Tier::A => "A",
            Tier::B => "B",
            Tier::C => "C",
        }
    }

    /// Parse a tier letter, case-insensitively
    #[must_use]
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter.trim() {
            "S" | "s" => Some(Tier::S),
            "A" | "a" => Some(Tier::A),
            "B" | "b" => Some(Tier::B),
            "C" | "c" => Some(Tier::C),
            _ => None,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog entry.
///
/// Items are created once at catalog load and never mutated. `slug` is
/// unique within `category`; `tier` is derived from the category at load
/// time and defaults to [`Tier::C`] for unmapped categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// URL-safe identifier, unique within the category
    pub slug: String,
    /// Owning category key (underscore form)
    pub category: String,
    /// Display title
    pub title: String,
    /// Short strapline shown under the title
    pub subtitle: String,
    /// Longer copy for the detail page
    #[serde(default)]
    pub description: Option<String>,
    /// Image asset path
    #[serde(default)]
    pub image: Option<String>,
    /// Currency-formatted display price, e.g. `"$199"`
    #[serde(default)]
    pub price: String,
    /// Average rating, 0.0–5.0
    #[serde(default)]
    pub rating: f64,
    /// Derived quality bucket (filled in at catalog load)
    #[serde(default)]
    pub tier: Tier,
}

impl Item {
    /// Numeric value of the display price; malformed prices read as 0.
    #[must_use]
    pub fn price_value(&self) -> f64 {
        parse_price(&self.price)
    }

    /// Image path, falling back to the shared placeholder
    #[must_use]
    pub fn image_or_placeholder(&self) -> &str {
        self.image.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }
}

/// Parse a display price into a non-negative number.
///
/// Strips every character outside `[0-9.]` and parses the rest as a
/// float. Empty or malformed input parses to `0.0`; bad price copy is a
/// cosmetic defect, not a failure.
#[must_use]
pub fn parse_price(price: &str) -> f64 {
    let digits: String = price.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
    digits.parse::<f64>().unwrap_or(0.0)
}

/// Format a numeric price back into display form.
///
/// Whole-dollar amounts render without cents (`$199`), everything else
/// with two places (`$19.99`).
#[must_use]
pub fn format_price(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("${:.0}", value)
    } else {
        format!("${:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_item() -> Item {
        Item {
            slug: "aria-pro".to_string(),
            category: "best_overall".to_string(),
            title: "Aria Pro".to_string(),
            subtitle: "Flagship sound".to_string(),
            description: None,
            image: None,
            price: "$199".to_string(),
            rating: 4.6,
            tier: Tier::A,
        }
    }

    #[test]
    fn test_parse_price_plain() {
        assert_eq!(parse_price("$199"), 199.0);
        assert_eq!(parse_price("$19.99"), 19.99);
        assert_eq!(parse_price("1,299"), 1299.0);
    }

    #[test]
    fn test_parse_price_malformed() {
        assert_eq!(parse_price(""), 0.0);
        assert_eq!(parse_price("free"), 0.0);
        assert_eq!(parse_price("$1.2.3"), 0.0);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(199.0), "$199");
        assert_eq!(format_price(19.99), "$19.99");
    }

    #[test]
    fn test_tier_letter_round_trip() {
        for tier in [Tier::S, Tier::A, Tier::B, Tier::C] {
            assert_eq!(Tier::from_letter(tier.as_str()), Some(tier));
        }
        assert_eq!(Tier::from_letter("s"), Some(Tier::S));
        assert_eq!(Tier::from_letter("X"), None);
    }

    #[test]
    fn test_tier_order_best_first() {
        assert!(Tier::S < Tier::A);
        assert!(Tier::B < Tier::C);
    }

    #[test]
    fn test_image_fallback() {
        let mut item = sample_item();
        assert_eq!(item.image_or_placeholder(), PLACEHOLDER_IMAGE);
        item.image = Some("/assets/aria.webp".to_string());
        assert_eq!(item.image_or_placeholder(), "/assets/aria.webp");
    }

    proptest! {
        // parse(format(parse(p))) == parse(p) for well-formed "$N" strings
        #[test]
        fn prop_price_parse_idempotent(dollars in 0u32..100_000) {
            let price = format!("${}", dollars);
            let parsed = parse_price(&price);
            prop_assert_eq!(parse_price(&format_price(parsed)), parsed);
        }

        #[test]
        fn prop_price_parse_never_negative(s in "\\PC*") {
            prop_assert!(parse_price(&s) >= 0.0);
        }
    }
}
