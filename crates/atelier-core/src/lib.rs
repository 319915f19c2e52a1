//! Atelier Core Library
//!
//! Catalog, filtering and transient view state for a portfolio gallery.
//!
//! ## Overview
//!
//! A gallery shows a read-only [`Catalog`] of projects as a grid of cards.
//! Visitors narrow the grid by category, and clicking a card highlights it
//! for a few seconds before it settles back.
//!
//! - [`view`]: category list and visible subset (pure)
//! - [`selection`]: the auto-expiring highlight
//! - [`warmup`]: entrance fade-in flag
//! - [`present`]: per-card values for the renderer (pure)
//!
//! ## Quick Start
//!
//! ```ignore
//! use atelier_core::{Catalog, GalleryView, SelectionTimer, Variant, present};
//!
//! let mut view = GalleryView::new(Catalog::builtin(), Variant::Page);
//! view.select_category("Branding");
//!
//! let mut timer = SelectionTimer::default();
//! timer.select(view.visible()[0].id);
//!
//! let cards = present(&view.visible(), timer.highlighted(), false, view.variant());
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod present;
pub mod selection;
pub mod types;
pub mod variant;
pub mod view;
pub mod warmup;

// Re-exports
pub use catalog::Catalog;
pub use config::GalleryConfig;
pub use error::{GalleryError, GalleryResult};
pub use present::{present, CardView};
pub use selection::{SelectionState, SelectionTimer, DEFAULT_HOLD};
pub use types::{Project, ProjectId};
pub use variant::Variant;
pub use view::{categories, visible_projects, GalleryView, ALL_CATEGORY};
pub use warmup::{WarmupGate, DEFAULT_WARMUP};
