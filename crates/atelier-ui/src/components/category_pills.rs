//! Category Pills Component
//!
//! Centered, wrapping row of category filters. Exactly one pill is active;
//! "All" comes first.

use dioxus::prelude::*;

use super::{Button, ButtonVariant};

/// Properties for the CategoryPills component
#[derive(Clone, PartialEq, Props)]
pub struct CategoryPillsProps {
    /// Category labels in display order
    pub categories: Vec<String>,
    /// Currently selected category
    pub selected: String,
    /// Handler called with the clicked label
    pub on_select: EventHandler<String>,
}

/// Displays the gallery category filter
///
/// # Example
///
/// ```rust,ignore
/// let mut category = use_signal(|| ALL_CATEGORY.to_string());
///
/// rsx! {
///     CategoryPills {
///         categories: catalog.categories(),
///         selected: category(),
///         on_select: move |cat| category.set(cat)
///     }
/// }
/// ```
#[component]
pub fn CategoryPills(props: CategoryPillsProps) -> Element {
    rsx! {
        div {
            class: "category-pills",
            role: "radiogroup",
            "aria-label": "Filter by category",
            for cat in props.categories.iter() {
                {
                    let label = cat.clone();
                    let is_selected = props.selected == *cat;
                    let on_select = props.on_select;
                    rsx! {
                        Button {
                            key: "{cat}",
                            variant: ButtonVariant::filter(is_selected),
                            role: "radio".to_string(),
                            checked: is_selected,
                            onclick: move |_| on_select.call(label.clone()),
                            "{cat}"
                        }
                    }
                }
            }
        }
    }
}
