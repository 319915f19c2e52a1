//! Atelier CLI
//!
//! Thin wrapper around atelier-core for inspecting a catalog without
//! opening the desktop app.
//!
//! ## Usage
//!
//! ```bash
//! # Category filters in display order
//! atelier categories
//!
//! # Cards shown by the full gallery for one category
//! atelier list --variant page --category Branding
//!
//! # Featured strip on the landing page, with project 2 highlighted
//! atelier list --variant home --highlight 2
//!
//! # Full record for one project
//! atelier show 3
//!
//! # Check a catalog file
//! atelier --catalog ./catalog.json validate
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use atelier_core::{present, Catalog, GalleryView, ProjectId, Variant, ALL_CATEGORY};
use clap::{Parser, Subcommand};

/// Atelier - Portfolio Gallery
#[derive(Parser)]
#[command(name = "atelier")]
#[command(version = "0.1.0")]
#[command(about = "Atelier - inspect and validate portfolio catalogs")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Catalog JSON file (default: <config dir>/atelier/catalog.json, else built-in)
    #[arg(short, long, global = true, conflicts_with = "builtin")]
    catalog: Option<PathBuf>,

    /// Ignore catalog files and use the built-in sample catalog
    #[arg(long, global = true)]
    builtin: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List category filters ("All" first)
    Categories,

    /// List the cards a gallery variant shows
    List {
        /// Gallery variant: home or page
        #[arg(long, default_value = "page")]
        variant: String,

        /// Category filter
        #[arg(long, default_value = ALL_CATEGORY)]
        category: String,

        /// Mark this project as highlighted
        #[arg(long)]
        highlight: Option<ProjectId>,

        /// Print the cards as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show every field of one project
    Show {
        /// Project id
        id: ProjectId,
    },

    /// Load the catalog and report what it contains
    Validate,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn load_catalog(cli: &Cli) -> Result<Catalog> {
    if cli.builtin {
        return Ok(Catalog::builtin());
    }
    let catalog = Catalog::resolve(cli.catalog.as_deref());
    match &cli.catalog {
        Some(path) => catalog.with_context(|| format!("Failed to load catalog {}", path.display())),
        None => catalog.context("Failed to load catalog"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let catalog = load_catalog(&cli)?;

    match cli.command {
        Commands::Categories => {
            for category in catalog.categories() {
                println!("{}", category);
            }
        }

        Commands::List {
            variant,
            category,
            highlight,
            json,
        } => {
            let variant: Variant = variant.parse()?;
            let mut view = GalleryView::new(catalog, variant);
            view.select_category(category);
            let visible = view.visible();
            let cards = present(&visible, highlight, false, variant);

            if json {
                println!("{}", serde_json::to_string_pretty(&cards)?);
                return Ok(());
            }

            println!("{} ({}, category: {})", variant.heading(), variant, view.selected_category());
            if visible.is_empty() {
                println!("  (no projects)");
            }
            for (card, project) in cards.iter().zip(&visible) {
                let marker = if card.active { "*" } else { " " };
                println!(
                    "{} [{}] {} · {} · {}",
                    marker, card.id, card.title, project.category, project.year
                );
            }
            if variant.shows_view_all() {
                println!();
                println!("View All Works -> /gallery");
            }
        }

        Commands::Show { id } => {
            let project = catalog.require(id)?;

            println!("{}", project.title);
            println!("  ID: {}", project.id);
            println!("  Artist: {}", project.artist);
            println!("  Category: {}", project.category);
            println!("  Year: {}", project.year);
            println!("  Dimensions: {}", project.dimensions);
            println!("  Price: {}", project.price);
            println!("  Image: {}", project.image);
            println!();
            println!("{}", project.description);
        }

        Commands::Validate => {
            let categories = catalog.categories();
            println!("Catalog OK");
            println!("  Projects: {}", catalog.len());
            println!("  Categories: {}", categories.len() - 1);
            for category in &categories[1..] {
                let count = catalog
                    .list()
                    .iter()
                    .filter(|p| p.category == *category)
                    .count();
                println!("    {} ({})", category, count);
            }
        }
    }

    Ok(())
}
