//! Full gallery page with category filters.

use atelier_core::Variant;
use atelier_ui::Gallery;
use dioxus::prelude::*;

use crate::app::Route;
use crate::context::{use_catalog, use_config};

/// Gallery page component.
#[component]
pub fn GalleryPage() -> Element {
    let catalog = use_catalog();
    let config = use_config();

    rsx! {
        main { class: "gallery-page",
            nav { class: "page-nav",
                Link { class: "page-nav__back", to: Route::Home {}, "\u{2190} Home" }
            }

            Gallery {
                catalog: catalog,
                variant: Variant::Page,
                hold: config.hold(),
                warmup: config.warmup(),
            }
        }
    }
}
