#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use atelier_core::{Catalog, GalleryConfig};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Catalog loaded before launch
static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Settings from the command line
static CONFIG: OnceLock<GalleryConfig> = OnceLock::new();

/// Get the loaded catalog (built-in sample if launch did not set one)
pub fn get_catalog() -> Catalog {
    CATALOG.get().cloned().unwrap_or_else(Catalog::builtin)
}

/// Get the gallery configuration (defaults if launch did not set one)
pub fn get_config() -> GalleryConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Atelier - Portfolio Gallery
#[derive(Parser, Debug)]
#[command(name = "atelier-desktop")]
#[command(about = "Atelier - portfolio gallery with featured works and category filters")]
struct Args {
    /// Catalog JSON file (default: <config dir>/atelier/catalog.json, else built-in)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// How long a clicked card stays highlighted, in milliseconds
    #[arg(long, default_value_t = GalleryConfig::default().hold_ms)]
    hold_ms: u64,

    /// Delay before cards fade in, in milliseconds
    #[arg(long, default_value_t = GalleryConfig::default().warmup_ms)]
    warmup_ms: u64,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config = GalleryConfig {
        hold_ms: args.hold_ms,
        warmup_ms: args.warmup_ms,
        catalog_path: args.catalog,
    };

    let catalog = Catalog::resolve(config.catalog_path.as_deref())
        .context("Failed to load catalog")?;

    tracing::info!(
        projects = catalog.len(),
        hold_ms = config.hold_ms,
        warmup_ms = config.warmup_ms,
        "Starting Atelier"
    );

    let _ = CATALOG.set(catalog);
    let _ = CONFIG.set(config);

    let window_width = 1200.0;
    let window_height = 900.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Atelier")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
