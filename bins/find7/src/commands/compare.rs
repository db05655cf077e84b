//! The `compare` subcommands: the durable selection, from the terminal.

use find7_catalog::CatalogStore;
use find7_compare::{CompareStore, MAX_COMPARE_ITEMS};
use find7_core::config::Config;
use find7_core::Error;
use owo_colors::OwoColorize;

fn open_store(config: &Config) -> anyhow::Result<CompareStore> {
    Ok(CompareStore::with_config(&config.schema.compare)?)
}

fn require_slug(slug: &str) -> Result<(), Error> {
    if CatalogStore::builtin().item_by_slug(slug).is_none() {
        return Err(Error::unknown_slug(slug));
    }
    Ok(())
}

pub fn add(config: &Config, slug: &str, json: bool) -> anyhow::Result<()> {
    require_slug(slug)?;
    let store = open_store(config)?;
    let added = store.add(slug)?;
    let snapshot = store.snapshot();

    if json {
        return print_json(&store);
    }

    if added {
        println!(
            "Added {} ({}/{})",
            slug.bold(),
            snapshot.len(),
            MAX_COMPARE_ITEMS
        );
    } else if snapshot.limit_reached() {
        println!(
            "{}",
            format!("Compare is full ({MAX_COMPARE_ITEMS} items), remove one first").yellow()
        );
    } else {
        println!("{} is already selected", slug.bold());
    }

    Ok(())
}

pub fn remove(config: &Config, slug: &str, json: bool) -> anyhow::Result<()> {
    let store = open_store(config)?;
    let removed = store.remove(slug)?;

    if json {
        return print_json(&store);
    }

    if removed {
        println!("Removed {}", slug.bold());
    } else {
        println!("{} was not selected", slug.bold());
    }

    Ok(())
}

pub fn toggle(config: &Config, slug: &str, json: bool) -> anyhow::Result<()> {
    require_slug(slug)?;
    let store = open_store(config)?;
    store.toggle(slug)?;

    if json {
        return print_json(&store);
    }

    let snapshot = store.snapshot();
    if snapshot.contains(slug) {
        println!("Added {}", slug.bold());
    } else if snapshot.limit_reached() {
        println!(
            "{}",
            format!("Compare is full ({MAX_COMPARE_ITEMS} items), remove one first").yellow()
        );
    } else {
        println!("Removed {}", slug.bold());
    }

    Ok(())
}

pub fn list(config: &Config, json: bool) -> anyhow::Result<()> {
    let store = open_store(config)?;

    if json {
        return print_json(&store);
    }

    let snapshot = store.snapshot();
    if snapshot.is_empty() {
        println!("{}", "Nothing selected for comparison.".dimmed());
        return Ok(());
    }

    let catalog = CatalogStore::builtin();
    for (index, slug) in snapshot.items().iter().enumerate() {
        match catalog.item_by_slug(slug) {
            Some(item) => println!(
                "{}. {} {} {}",
                index + 1,
                item.title.bold(),
                item.price.green(),
                format!("({slug})").dimmed()
            ),
            None => println!("{}. {} {}", index + 1, slug, "(no longer in catalog)".dimmed()),
        }
    }
    println!(
        "{}",
        format!("{} of {} slots used", snapshot.len(), MAX_COMPARE_ITEMS).dimmed()
    );

    Ok(())
}

pub fn clear(config: &Config, json: bool) -> anyhow::Result<()> {
    let store = open_store(config)?;
    store.clear()?;

    if json {
        return print_json(&store);
    }

    println!("Compare selection cleared");
    Ok(())
}

fn print_json(store: &CompareStore) -> anyhow::Result<()> {
    let snapshot = store.snapshot();
    let payload = serde_json::json!({
        "items": snapshot.items(),
        "last_added": snapshot.last_added(),
        "limit_reached": snapshot.limit_reached(),
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
