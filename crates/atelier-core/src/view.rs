//! Gallery view model
//!
//! Pure derivations over a [`Catalog`]: the category list shown as filter
//! pills and the subset of projects visible for a selected category.

use crate::catalog::Catalog;
use crate::types::Project;
use crate::variant::Variant;

/// Sentinel category that matches every project
pub const ALL_CATEGORY: &str = "All";

/// "All" followed by each distinct category in order of first appearance.
pub fn categories(catalog: &Catalog) -> Vec<String> {
    let mut out = vec![ALL_CATEGORY.to_string()];
    for project in catalog.list() {
        if !out[1..].iter().any(|c| *c == project.category) {
            out.push(project.category.clone());
        }
    }
    out
}

/// Projects in `selected_category` (or all of them for "All"), in catalog
/// order, truncated to `max_count`.
///
/// An unknown category simply matches nothing.
pub fn visible_projects<'a>(
    catalog: &'a Catalog,
    selected_category: &str,
    max_count: usize,
) -> Vec<&'a Project> {
    catalog
        .list()
        .iter()
        .filter(|p| selected_category == ALL_CATEGORY || p.category == selected_category)
        .take(max_count)
        .collect()
}

/// Filter state for one displayed gallery
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryView {
    catalog: Catalog,
    variant: Variant,
    selected_category: String,
}

impl GalleryView {
    /// Create a view showing every category
    pub fn new(catalog: Catalog, variant: Variant) -> Self {
        Self {
            catalog,
            variant,
            selected_category: ALL_CATEGORY.to_string(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    /// Change the active filter. Any label is accepted.
    pub fn select_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
        tracing::debug!(category = %self.selected_category, "Category selected");
    }

    pub fn categories(&self) -> Vec<String> {
        categories(&self.catalog)
    }

    /// Visible projects for the current filter and variant limit
    pub fn visible(&self) -> Vec<&Project> {
        visible_projects(&self.catalog, &self.selected_category, self.variant.max_items())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProjectId;

    fn catalog_of(categories: &[&str]) -> Catalog {
        let projects = categories
            .iter()
            .enumerate()
            .map(|(i, cat)| Project {
                id: ProjectId(i as u32 + 1),
                title: format!("Work {}", i + 1),
                artist: "Studio".to_string(),
                description: String::new(),
                category: cat.to_string(),
                year: "2024".to_string(),
                dimensions: "1 x 1".to_string(),
                price: "-".to_string(),
                image: format!("/images/{}.jpg", i + 1),
            })
            .collect();
        Catalog::new(projects).unwrap()
    }

    fn ids(projects: &[&Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_categories_first_seen_order() {
        let catalog = catalog_of(&["Print", "Ink", "Print", "Oil", "Ink"]);
        assert_eq!(categories(&catalog), vec!["All", "Print", "Ink", "Oil"]);
    }

    #[test]
    fn test_visible_all_truncates() {
        let catalog = catalog_of(&["A", "B", "A", "C", "A", "B", "C", "A"]);
        assert_eq!(ids(&visible_projects(&catalog, ALL_CATEGORY, 6)), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(ids(&visible_projects(&catalog, ALL_CATEGORY, 4)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_visible_filters_by_category() {
        let catalog = catalog_of(&["A", "B", "A", "C", "A", "B", "C", "A"]);
        assert_eq!(ids(&visible_projects(&catalog, "A", 6)), vec![1, 3, 5, 8]);
        assert_eq!(ids(&visible_projects(&catalog, "A", 2)), vec![1, 3]);
        assert_eq!(ids(&visible_projects(&catalog, "C", 6)), vec![4, 7]);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let catalog = catalog_of(&["A", "B"]);
        assert!(visible_projects(&catalog, "Sculpture", 6).is_empty());
    }

    #[test]
    fn test_category_match_is_exact() {
        let catalog = catalog_of(&["Branding", "branding"]);
        assert_eq!(ids(&visible_projects(&catalog, "Branding", 6)), vec![1]);
        assert!(visible_projects(&catalog, "all", 6).is_empty());
    }

    #[test]
    fn test_page_branding_example() {
        let mut view = GalleryView::new(Catalog::builtin(), Variant::Page);
        view.select_category("Branding");

        let visible = view.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, ProjectId(2));
        assert_eq!(visible[0].title, "Brand Identity Project");
    }

    #[test]
    fn test_home_all_example() {
        let view = GalleryView::new(Catalog::builtin(), Variant::Home);
        assert_eq!(view.selected_category(), ALL_CATEGORY);
        assert_eq!(ids(&view.visible()), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_view_limits_follow_variant() {
        let catalog = catalog_of(&["A"; 10]);
        assert_eq!(GalleryView::new(catalog.clone(), Variant::Home).visible().len(), 4);
        assert_eq!(GalleryView::new(catalog, Variant::Page).visible().len(), 6);
    }
}
