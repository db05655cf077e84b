//! The `categories` and `show` subcommands.

use find7_catalog::CatalogStore;
use find7_core::Error;
use owo_colors::OwoColorize;

pub fn categories(json: bool) -> anyhow::Result<()> {
    let catalog = CatalogStore::builtin();

    if json {
        println!("{}", serde_json::to_string_pretty(catalog.categories())?);
        return Ok(());
    }

    for category in catalog.categories() {
        let count = catalog.collection(&category.key).len();
        println!(
            "{} {} {} - {} {}",
            category.emoji,
            category.name.bold(),
            format!("({})", category.slug).dimmed(),
            category.tagline,
            format!("[{count} items]").dimmed()
        );
    }

    Ok(())
}

pub fn show(category: &str, slug: &str, json: bool) -> anyhow::Result<()> {
    let catalog = CatalogStore::builtin();

    let resolved = catalog
        .category(category)
        .or_else(|| catalog.category_by_slug(category))
        .ok_or_else(|| Error::unknown_category(category))?;

    let item = catalog
        .item(&resolved.key, slug)
        .ok_or_else(|| Error::unknown_item(&resolved.key, slug))?;

    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
        return Ok(());
    }

    println!("{} {}", item.title.bold(), format!("[{}]", item.tier).yellow());
    println!("{}", item.subtitle);
    if let Some(description) = &item.description {
        println!();
        println!("{description}");
    }
    println!();
    println!(
        "{}  {} {:.1}  {} {}",
        item.price.green().bold(),
        "★".yellow(),
        item.rating,
        "·".dimmed(),
        format!("{} / {}", resolved.name, item.slug).dimmed()
    );
    println!("{}", item.image_or_placeholder().dimmed());

    Ok(())
}
