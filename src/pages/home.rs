//! Landing page - studio introduction and the featured works strip.
//!
//! "View All Works" leads to the full gallery.

use atelier_core::Variant;
use atelier_ui::Gallery;
use dioxus::prelude::*;

use crate::app::Route;
use crate::context::{use_catalog, use_config};

/// Landing page component.
#[component]
pub fn Home() -> Element {
    let navigator = use_navigator();
    let catalog = use_catalog();
    let config = use_config();

    rsx! {
        main { class: "home",
            header { class: "hero",
                h1 { class: "page-title", "Atelier" }
                p { class: "tagline", "Digital art, branding and visual storytelling" }
            }

            Gallery {
                catalog: catalog,
                variant: Variant::Home,
                hold: config.hold(),
                warmup: config.warmup(),
                on_view_all: move |_| {
                    navigator.push(Route::GalleryPage {});
                },
            }
        }
    }
}
