//! Styling for Atelier.

mod styles;

pub use styles::GLOBAL_STYLES;
