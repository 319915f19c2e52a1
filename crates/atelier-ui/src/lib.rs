//! Atelier UI Components
//!
//! Dioxus components for the portfolio gallery.
//!
//! ## Design
//!
//! - **Black (#000)**: page background, cards sit directly on it
//! - **Purple (#9333ea)**: active filter pill and call-to-action buttons
//! - **Gray (#1f2937)**: idle filter pills
//!
//! Cards fade in with a staggered delay, reveal their title on hover and
//! zoom while highlighted.

pub mod components;

pub use components::*;
