//! The `search` subcommand: the full orchestrator, driven once.

use find7_catalog::{CatalogStore, Tier};
use find7_core::config::Config;
use find7_core::Error;
use find7_search::{locate_fuzzy, SortBy};
use find7_session::SearchSession;
use owo_colors::OwoColorize;
use std::time::{Duration, Instant};

/// Parsed `search` arguments
pub struct SearchArgs {
    /// Free-text query
    pub query: Option<String>,
    /// Collection key or slug
    pub collection: Option<String>,
    /// Lower price bound
    pub min_price: Option<f64>,
    /// Upper price bound
    pub max_price: Option<f64>,
    /// Tier letters
    pub tiers: Vec<String>,
    /// Sort key
    pub sort: String,
    /// Pages to materialize
    pub pages: usize,
}

pub fn run(config: &Config, args: SearchArgs, json: bool) -> anyhow::Result<()> {
    let catalog = CatalogStore::builtin();
    let mut session = SearchSession::new(catalog, &config.schema.search);

    if let Some(collection) = &args.collection {
        let key = resolve_collection_key(catalog, collection)?;
        session.set_collection(Some(key));
    }

    if args.min_price.is_some() || args.max_price.is_some() {
        session.set_price(Some((
            args.min_price.unwrap_or(0.0),
            args.max_price.unwrap_or(f64::MAX),
        )));
    }

    let tiers: Vec<Tier> = args
        .tiers
        .iter()
        .filter_map(|letter| {
            let tier = Tier::from_letter(letter);
            if tier.is_none() {
                tracing::warn!(letter = %letter, "ignoring unknown tier");
            }
            tier
        })
        .collect();
    session.set_tiers(tiers);

    match SortBy::from_key(&args.sort) {
        Some(sort) => session.set_sort(sort),
        None => tracing::warn!(sort = %args.sort, "unknown sort key, using relevance"),
    }

    if let Some(query) = &args.query {
        let now = Instant::now();
        session.set_query(query, now);
        // One-shot invocation: jump the clock past the debounce window
        session.poll(now + Duration::from_millis(config.schema.search.debounce_ms));
    }

    for _ in 1..args.pages {
        session.sentinel_visible();
    }

    if let Some(url) = session.take_url_update() {
        tracing::debug!(url = %url, "url state synced");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(session.displayed())?);
        return Ok(());
    }

    if session.displayed().is_empty() {
        println!("{}", "No results.".dimmed());
        return Ok(());
    }

    for (index, item) in session.displayed().iter().enumerate() {
        println!(
            "{:>2}. {} {} - {}  {}  {}{}",
            index + 1,
            format!("[{}]", item.tier).yellow(),
            emphasized_title(&item.title, session.query()),
            item.subtitle,
            item.price.green(),
            "★".yellow(),
            format!("{:.1}", item.rating)
        );
    }

    let shown = session.displayed().len();
    let total = session.filtered().len();
    if session.has_more() {
        println!(
            "{}",
            format!("showing {shown} of {total}, pass --pages to see more").dimmed()
        );
    } else {
        println!("{}", format!("showing all {total} results").dimmed());
    }

    Ok(())
}

/// Underline the query's closest window inside a matched title
fn emphasized_title(title: &str, query: &str) -> String {
    if query.is_empty() {
        return title.bold().to_string();
    }
    match locate_fuzzy(title, query) {
        Some(span) => format!(
            "{}{}{}",
            (&title[..span.start]).bold(),
            (&title[span.start..span.end]).bold().underline(),
            (&title[span.end..]).bold()
        ),
        None => title.bold().to_string(),
    }
}

/// Accept a collection as either canonical key or URL slug
fn resolve_collection_key(catalog: &CatalogStore, collection: &str) -> Result<String, Error> {
    if catalog.category(collection).is_some() {
        return Ok(collection.to_string());
    }
    if let Some(category) = catalog.category_by_slug(collection) {
        return Ok(category.key.clone());
    }
    Err(Error::unknown_category(collection))
}
