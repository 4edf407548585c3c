//! Pure math/data for drawing & units in Contour
//!
//! This crate contains geometry primitives, paths, color definitions, brushes,
//! and unit types that are used by the layout and material crates.

mod brush;
mod color;
mod geometry;
mod path;
mod typography;
mod unit;

pub use brush::*;
pub use color::*;
pub use geometry::*;
pub use path::*;
pub use typography::*;
pub use unit::*;

pub mod prelude {
    pub use crate::brush::Brush;
    pub use crate::color::Color;
    pub use crate::geometry::{CornerRadii, EdgeInsets, Point, Rect, RoundedCornerShape, Size};
    pub use crate::path::{Path, PathCommand, Stroke};
    pub use crate::unit::{Density, Dp, Sp};
}
