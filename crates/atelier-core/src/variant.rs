//! Display variants
//!
//! | Variant | Items | Columns | Filter pills | "View All" link |
//! |---------|-------|---------|--------------|-----------------|
//! | Home    | 4     | 2       | no           | yes             |
//! | Page    | 6     | 3       | yes          | no              |

use std::str::FromStr;

use crate::error::GalleryError;

/// How the gallery is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Condensed "featured" strip on the landing page
    Home,
    /// Full gallery page
    #[default]
    Page,
}

impl Variant {
    /// Maximum number of cards shown
    pub fn max_items(&self) -> usize {
        match self {
            Variant::Home => 4,
            Variant::Page => 6,
        }
    }

    /// Grid columns on wide screens
    pub fn columns(&self) -> usize {
        match self {
            Variant::Home => 2,
            Variant::Page => 3,
        }
    }

    /// Number of leading cards whose images load eagerly
    pub fn priority_count(&self) -> usize {
        match self {
            Variant::Home => 2,
            Variant::Page => 3,
        }
    }

    pub fn shows_filter(&self) -> bool {
        matches!(self, Variant::Page)
    }

    pub fn shows_view_all(&self) -> bool {
        matches!(self, Variant::Home)
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Variant::Home => "Featured Works",
            Variant::Page => "Creative Portfolio",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Variant::Home => "A glimpse into our creative journey and design excellence",
            Variant::Page => "Explore our collection of creative works, showcasing innovative design solutions and artistic excellence",
        }
    }

    /// CSS modifier class for the section and grid
    pub fn class(&self) -> &'static str {
        match self {
            Variant::Home => "gallery--home",
            Variant::Page => "gallery--page",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Home => "home",
            Variant::Page => "page",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = GalleryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" => Ok(Variant::Home),
            "page" => Ok(Variant::Page),
            _ => Err(GalleryError::UnknownVariant(s.to_string())),
        }
    }
}
