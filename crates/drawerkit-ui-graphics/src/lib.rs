//! Pure math/data shared by drawerkit crates
//!
//! Colors and the handful of geometry primitives the drawer needs to describe
//! where its panel, edge strip and overlay sit.

mod color;
mod geometry;

pub use color::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{Point, Rect, Size};
}
