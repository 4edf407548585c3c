//! Brush definitions for painting

use crate::color::Color;

#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
}

impl Brush {
    pub fn solid(color: Color) -> Self {
        Brush::Solid(color)
    }

    /// Color the brush resolves to.
    pub fn color(&self) -> Color {
        match self {
            Brush::Solid(color) => *color,
        }
    }
}
