//! Gallery Component
//!
//! The stateful part of the UI. One mounted `Gallery` owns:
//! - the selected category (page variant only exposes the pills)
//! - a [`SelectionTimer`] for the highlighted card
//! - a [`WarmupGate`] driving the entrance fade-in
//!
//! Both timers live in signals owned by this scope, so unmounting drops
//! them and cancels anything still pending.

use std::time::Duration;

use atelier_core::{
    present, visible_projects, Catalog, ProjectId, SelectionTimer, Variant, WarmupGate,
    ALL_CATEGORY, DEFAULT_HOLD, DEFAULT_WARMUP,
};
use dioxus::prelude::*;

use super::{Button, ButtonVariant, CategoryPills, GalleryGrid};

/// Portfolio gallery section
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Gallery {
///         catalog: use_catalog(),
///         variant: Variant::Home,
///         on_view_all: move |_| navigator.push(Route::GalleryPage {}),
///     }
/// }
/// ```
#[component]
pub fn Gallery(
    /// Projects to show
    catalog: Catalog,
    /// Layout variant
    #[props(default)]
    variant: Variant,
    /// How long a clicked card stays highlighted
    #[props(default = DEFAULT_HOLD)]
    hold: Duration,
    /// Delay before cards fade in
    #[props(default = DEFAULT_WARMUP)]
    warmup: Duration,
    /// "View All Works" handler (home variant only)
    #[props(default)]
    on_view_all: Option<EventHandler<()>>,
) -> Element {
    let mut category = use_signal(|| ALL_CATEGORY.to_string());
    let mut highlighted: Signal<Option<ProjectId>> = use_signal(|| None);
    let mut loading = use_signal(|| true);

    let mut timer = use_signal(|| SelectionTimer::new(hold));
    let gate = use_signal(|| WarmupGate::start(warmup));

    // Mirror timer transitions (including expiry) into the render state
    use_effect(move || {
        let mut rx = timer.peek().subscribe();
        spawn(async move {
            while rx.changed().await.is_ok() {
                let current = rx.borrow_and_update().highlighted();
                highlighted.set(current);
            }
        });
    });

    use_effect(move || {
        let mut rx = gate.peek().subscribe();
        spawn(async move {
            while rx.changed().await.is_ok() {
                let value = *rx.borrow_and_update();
                loading.set(value);
            }
        });
    });

    let selected = category();
    let visible = visible_projects(&catalog, &selected, variant.max_items());
    let cards = present(&visible, highlighted(), loading(), variant);
    let categories = catalog.categories();

    let section_class = format!("gallery {}", variant.class());
    let heading = variant.heading();
    let tagline = variant.tagline();

    rsx! {
        section { class: "{section_class}",
            div { class: "gallery__inner",
                h2 { class: "gallery__heading", "{heading}" }
                p { class: "gallery__tagline", "{tagline}" }

                if variant.shows_filter() {
                    CategoryPills {
                        categories: categories,
                        selected: selected.clone(),
                        on_select: move |cat: String| category.set(cat),
                    }
                }

                GalleryGrid {
                    cards: cards,
                    variant: variant,
                    on_select: move |id: ProjectId| {
                        tracing::debug!(%id, "Card clicked");
                        timer.write().select(id);
                    },
                }

                if variant.shows_view_all() {
                    div { class: "gallery__footer",
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| {
                                if let Some(handler) = &on_view_all {
                                    handler.call(());
                                }
                            },
                            "View All Works"
                        }
                    }
                }
            }
        }
    }
}
