//! Project Card Component
//!
//! Square image tile. Hover darkens the tile and slides the title up;
//! a highlighted card stays zoomed until its selection expires.

use atelier_core::{CardView, ProjectId};
use dioxus::prelude::*;

/// Value for the `loading` attribute of a card image
pub fn image_loading(card: &CardView) -> &'static str {
    if card.priority {
        "eager"
    } else {
        "lazy"
    }
}

/// Single gallery card
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ProjectCard {
///         card: card.clone(),
///         on_select: move |id| timer.write().select(id),
///     }
/// }
/// ```
#[component]
pub fn ProjectCard(
    /// Presentation values for this card
    card: CardView,
    /// Click handler (receives the project id)
    on_select: EventHandler<ProjectId>,
) -> Element {
    let id = card.id;
    let class = card.class();
    let style = card.style();
    let loading = image_loading(&card);

    rsx! {
        div { class: "{class}", style: "{style}",
            div {
                class: "gallery-card__frame",
                role: "button",
                "aria-pressed": if card.active { "true" } else { "false" },
                onclick: move |_| on_select.call(id),

                img {
                    class: "gallery-card__img",
                    src: "{card.image}",
                    alt: "{card.title}",
                    "loading": loading,
                }

                div { class: "gallery-card__overlay",
                    h3 { class: "gallery-card__title", "{card.title}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(priority: bool) -> CardView {
        CardView {
            id: ProjectId(1),
            title: "Digital Art Collection".to_string(),
            image: "/images/IMG-1.jpg".to_string(),
            active: false,
            revealed: true,
            transition_delay_ms: 0,
            priority,
        }
    }

    #[test]
    fn priority_cards_load_eagerly() {
        assert_eq!(image_loading(&card(true)), "eager");
        assert_eq!(image_loading(&card(false)), "lazy");
    }
}
