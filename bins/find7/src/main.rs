//! The Find 7 CLI
//!
//! Search the curated catalog, inspect items, and manage the durable
//! compare set from the terminal.

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::{catalog, compare, search, suggest};
use find7_core::config::Config;
use find7_core::error::exit_codes;

/// Catalog search and compare tooling for The Find 7
#[derive(Parser)]
#[command(name = "find7")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text")]
    format: String,

    /// Path to a configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog
    Search {
        /// Free-text query
        query: Option<String>,

        /// Restrict to a collection (category key or slug)
        #[arg(short, long)]
        collection: Option<String>,

        /// Minimum price
        #[arg(long)]
        min_price: Option<f64>,

        /// Maximum price
        #[arg(long)]
        max_price: Option<f64>,

        /// Tier letter, repeatable (-t S -t A)
        #[arg(short, long)]
        tier: Vec<String>,

        /// Sort order: relevance, price_low, price_high, rating
        #[arg(short, long, default_value = "relevance")]
        sort: String,

        /// Pages of results to materialize
        #[arg(short, long, default_value = "1")]
        pages: usize,
    },

    /// List the curated categories
    Categories,

    /// Show one item's detail page
    Show {
        /// Category key or slug
        category: String,

        /// Item slug
        slug: String,
    },

    /// Type-ahead suggestions for a partial query
    Suggest {
        /// Partial query text
        prefix: String,
    },

    /// Manage the compare set
    Compare {
        #[command(subcommand)]
        action: CompareAction,
    },
}

#[derive(Subcommand)]
enum CompareAction {
    /// Add an item by slug
    Add {
        /// Item slug
        slug: String,
    },

    /// Remove an item by slug
    Remove {
        /// Item slug
        slug: String,
    },

    /// Toggle an item by slug
    Toggle {
        /// Item slug
        slug: String,
    },

    /// Show the current selection
    List,

    /// Empty the selection
    Clear,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::from(exit_code_for(&err) as u8)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let json = cli.format == "json";

    match &cli.command {
        Commands::Search {
            query,
            collection,
            min_price,
            max_price,
            tier,
            sort,
            pages,
        } => search::run(
            &config,
            search::SearchArgs {
                query: query.clone(),
                collection: collection.clone(),
                min_price: *min_price,
                max_price: *max_price,
                tiers: tier.clone(),
                sort: sort.clone(),
                pages: (*pages).max(1),
            },
            json,
        ),
        Commands::Categories => catalog::categories(json),
        Commands::Show { category, slug } => catalog::show(category, slug, json),
        Commands::Suggest { prefix } => suggest::run(&config, prefix, json),
        Commands::Compare { action } => match action {
            CompareAction::Add { slug } => compare::add(&config, slug, json),
            CompareAction::Remove { slug } => compare::remove(&config, slug, json),
            CompareAction::Toggle { slug } => compare::toggle(&config, slug, json),
            CompareAction::List => compare::list(&config, json),
            CompareAction::Clear => compare::clear(&config, json),
        },
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<find7_core::Error>() {
        Some(core_err) => match core_err.code.category() {
            "Catalog" => exit_codes::NOT_FOUND,
            "Configuration" => exit_codes::CONFIG_ERROR,
            _ => exit_codes::FAILURE,
        },
        None => exit_codes::FAILURE,
    }
}
