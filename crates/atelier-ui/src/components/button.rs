//! Button Components
//!
//! Rounded pill buttons used across the gallery:
//! - Primary: purple call-to-action ("View All Works")
//! - Filter: idle category pill
//! - FilterActive: selected category pill

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled purple, darker on hover
    #[default]
    Primary,
    /// Gray pill, lighter on hover
    Filter,
    /// Purple pill marking the current filter
    FilterActive,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Filter => "btn-pill",
            ButtonVariant::FilterActive => "btn-pill selected",
        }
    }

    /// Pill variant for a filter in the given selection state
    pub fn filter(selected: bool) -> Self {
        if selected {
            ButtonVariant::FilterActive
        } else {
            ButtonVariant::Filter
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// ARIA role override (e.g. "radio" inside a radiogroup)
    #[props(default)]
    pub role: Option<String>,
    /// Sets `aria-checked` when present
    #[props(default)]
    pub checked: Option<bool>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Primary,
///         onclick: move |_| navigator.push(Route::GalleryPage {}),
///         "View All Works"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = props.variant.class();
    let role = props.role.clone().unwrap_or_else(|| "button".to_string());
    let checked = props.checked.map(|c| if c { "true" } else { "false" });

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            role: "{role}",
            "aria-checked": checked,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}
