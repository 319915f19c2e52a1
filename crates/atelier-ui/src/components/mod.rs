//! Reusable gallery components
//!
//! State lives in [`Gallery`]; everything below it renders from props.

mod button;
mod category_pills;
mod gallery;
mod gallery_grid;
mod project_card;

pub use button::*;
pub use category_pills::*;
pub use gallery::*;
pub use gallery_grid::*;
pub use project_card::*;
