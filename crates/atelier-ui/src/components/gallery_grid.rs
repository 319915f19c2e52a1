//! Gallery Grid Component
//!
//! Lays out project cards in a responsive grid: one column on narrow
//! windows, two or three on wide ones depending on the variant.

use atelier_core::{CardView, ProjectId, Variant};
use dioxus::prelude::*;

use super::ProjectCard;

/// CSS classes for the grid container
pub fn grid_class(variant: Variant) -> String {
    format!("gallery-grid gallery-grid--cols-{}", variant.columns())
}

/// Grid of project cards
#[component]
pub fn GalleryGrid(
    /// Cards in display order
    cards: Vec<CardView>,
    /// Determines the column count
    variant: Variant,
    /// Click handler (receives the project id)
    on_select: EventHandler<ProjectId>,
) -> Element {
    let class = grid_class(variant);

    rsx! {
        div { class: "{class}",
            if cards.is_empty() {
                p { class: "gallery-grid__empty", "No works in this category yet." }
            }
            for card in cards.iter() {
                ProjectCard {
                    key: "{card.id}",
                    card: card.clone(),
                    on_select: on_select,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_columns_follow_variant() {
        assert_eq!(grid_class(Variant::Home), "gallery-grid gallery-grid--cols-2");
        assert_eq!(grid_class(Variant::Page), "gallery-grid gallery-grid--cols-3");
    }
}
