//! The `suggest` subcommand: the type-ahead box, driven once.

use find7_catalog::CatalogStore;
use find7_core::config::Config;
use find7_session::Suggester;
use owo_colors::OwoColorize;
use std::time::{Duration, Instant};

pub fn run(config: &Config, prefix: &str, json: bool) -> anyhow::Result<()> {
    let catalog = CatalogStore::builtin();
    let mut suggester = Suggester::new(catalog, &config.schema.search);

    let now = Instant::now();
    suggester.type_ahead(prefix, now);
    suggester.poll(now + Duration::from_millis(config.schema.search.suggest_debounce_ms));

    if json {
        println!("{}", serde_json::to_string_pretty(suggester.suggestions())?);
        return Ok(());
    }

    if suggester.suggestions().is_empty() {
        println!("{}", "No suggestions.".dimmed());
        return Ok(());
    }

    for suggestion in suggester.suggestions() {
        println!(
            "{}  {}",
            suggestion.item,
            format!("({:.1})", suggestion.score).dimmed()
        );
    }

    Ok(())
}
