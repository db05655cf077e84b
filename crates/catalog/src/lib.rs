//! Static product catalog for The Find 7
//!
//! The catalog is fixture data: loaded once, immutable for the life of
//! the process. This crate provides:
//!
//! - The [`Item`] and [`Category`] data model
//! - Tier derivation (S/A/B/C quality buckets keyed by category)
//! - Display-price parsing that never fails
//! - The [`CatalogStore`] accessors the search pipeline reads from
//!
//! # Example
//!
//! ```rust
//! use find7_catalog::CatalogStore;
//!
//! let catalog = CatalogStore::builtin();
//! assert!(!catalog.all_items().is_empty());
//! let premium = catalog.collection("best_premium");
//! assert_eq!(premium.len(), 7);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

mod category;
mod item;
mod store;

pub use category::{key_to_slug, slug_to_key, Category};
pub use item::{format_price, parse_price, Item, Tier, PLACEHOLDER_IMAGE};
pub use store::{tier_for_category, CatalogStore};
