//! Card presentation
//!
//! Turns the visible projects plus transient view state into the per-card
//! values the renderer needs. Same inputs, same cards.

use serde::Serialize;

use crate::types::{Project, ProjectId};
use crate::variant::Variant;

/// Stagger between successive card fade-ins
pub const STAGGER_MS: u64 = 100;

/// Everything needed to draw one gallery card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: ProjectId,
    /// Overlay text, also used as image alt text
    pub title: String,
    pub image: String,
    /// Highlighted by the selection timer
    pub active: bool,
    /// Past the warm-up delay
    pub revealed: bool,
    pub transition_delay_ms: u64,
    /// Load the image eagerly
    pub priority: bool,
}

impl CardView {
    /// CSS classes for the card wrapper
    pub fn class(&self) -> String {
        let mut class = String::from("gallery-card");
        class.push_str(if self.revealed { " revealed" } else { " hidden" });
        if self.active {
            class.push_str(" active");
        }
        class
    }

    /// Inline style carrying the staggered transition delay
    pub fn style(&self) -> String {
        format!("transition-delay: {}ms", self.transition_delay_ms)
    }
}

/// Build the cards for the currently visible projects
pub fn present(
    visible: &[&Project],
    highlighted: Option<ProjectId>,
    is_loading: bool,
    variant: Variant,
) -> Vec<CardView> {
    visible
        .iter()
        .enumerate()
        .map(|(index, project)| CardView {
            id: project.id,
            title: project.title.clone(),
            image: project.image.clone(),
            active: highlighted == Some(project.id),
            revealed: !is_loading,
            transition_delay_ms: index as u64 * STAGGER_MS,
            priority: index < variant.priority_count(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::view::{visible_projects, ALL_CATEGORY};

    #[test]
    fn test_cards_follow_visible_order() {
        let catalog = Catalog::builtin();
        let visible = visible_projects(&catalog, ALL_CATEGORY, 6);
        let cards = present(&visible, None, false, Variant::Page);

        let titles: Vec<&str> = cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Digital Art Collection",
                "Brand Identity Project",
                "Creative Direction",
                "Visual Storytelling"
            ]
        );
        let delays: Vec<u64> = cards.iter().map(|c| c.transition_delay_ms).collect();
        assert_eq!(delays, vec![0, 100, 200, 300]);
    }

    #[test]
    fn test_only_highlighted_card_is_active() {
        let catalog = Catalog::builtin();
        let visible = visible_projects(&catalog, ALL_CATEGORY, 4);
        let cards = present(&visible, Some(ProjectId(3)), false, Variant::Home);

        let active: Vec<ProjectId> = cards.iter().filter(|c| c.active).map(|c| c.id).collect();
        assert_eq!(active, vec![ProjectId(3)]);
        assert!(cards[2].class().contains("active"));
        assert!(!cards[0].class().contains("active"));
    }

    #[test]
    fn test_highlight_outside_visible_set_marks_nothing() {
        let catalog = Catalog::builtin();
        let visible = visible_projects(&catalog, "Branding", 6);
        let cards = present(&visible, Some(ProjectId(1)), false, Variant::Page);
        assert!(cards.iter().all(|c| !c.active));
    }

    #[test]
    fn test_loading_hides_cards() {
        let catalog = Catalog::builtin();
        let visible = visible_projects(&catalog, ALL_CATEGORY, 4);

        let loading = present(&visible, None, true, Variant::Home);
        assert!(loading.iter().all(|c| !c.revealed && c.class().contains("hidden")));

        let ready = present(&visible, None, false, Variant::Home);
        assert!(ready.iter().all(|c| c.revealed && c.class().contains("revealed")));
    }

    #[test]
    fn test_priority_depends_on_variant() {
        let catalog = Catalog::builtin();
        let visible = visible_projects(&catalog, ALL_CATEGORY, 4);

        let home: Vec<bool> = present(&visible, None, false, Variant::Home)
            .iter()
            .map(|c| c.priority)
            .collect();
        assert_eq!(home, vec![true, true, false, false]);

        let page: Vec<bool> = present(&visible, None, false, Variant::Page)
            .iter()
            .map(|c| c.priority)
            .collect();
        assert_eq!(page, vec![true, true, true, false]);
    }

    #[test]
    fn test_present_is_deterministic() {
        let catalog = Catalog::builtin();
        let visible = visible_projects(&catalog, ALL_CATEGORY, 6);
        let a = present(&visible, Some(ProjectId(2)), false, Variant::Page);
        let b = present(&visible, Some(ProjectId(2)), false, Variant::Page);
        assert_eq!(a, b);
        assert_eq!(a[1].style(), "transition-delay: 100ms");
    }
}
