//! Catalog and configuration context for Atelier.
//!
//! The catalog is loaded once in `main` and handed to components through
//! `use_context` rather than read from a global inside each component.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(get_catalog);
//!
//! // In child components
//! let catalog = use_catalog();
//! ```

use atelier_core::{Catalog, GalleryConfig};
use dioxus::prelude::*;

/// Get the catalog loaded at launch.
pub fn get_catalog() -> Catalog {
    crate::get_catalog()
}

/// Get the configuration parsed at launch.
pub fn get_config() -> GalleryConfig {
    crate::get_config()
}

/// Hook to access the catalog from context.
pub fn use_catalog() -> Catalog {
    use_context::<Catalog>()
}

/// Hook to access the gallery configuration from context.
pub fn use_config() -> GalleryConfig {
    use_context::<GalleryConfig>()
}
