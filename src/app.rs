use dioxus::prelude::*;

use crate::context::{get_catalog, get_config};
use crate::pages::{GalleryPage, Home};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page with the featured works strip
/// - `/gallery` - Full gallery with category filters
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/gallery")]
    GalleryPage {},
}

/// Root application component.
///
/// Provides global styles, catalog and config context, and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(get_catalog);
    use_context_provider(get_config);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
