//! Writing direction and the explicit layout context handed to widgets.

use crate::measure::MeasureScope;
use contour_ui_graphics::{Density, Dp, Sp};

/// Horizontal writing direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}

impl LayoutDirection {
    #[inline]
    pub fn is_rtl(self) -> bool {
        matches!(self, LayoutDirection::Rtl)
    }
}

/// Ambient values the host passes into measurement and drawing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutContext {
    pub density: Density,
    pub layout_direction: LayoutDirection,
}

impl LayoutContext {
    pub fn new(density: Density, layout_direction: LayoutDirection) -> Self {
        Self {
            density,
            layout_direction,
        }
    }

    pub fn with_direction(mut self, layout_direction: LayoutDirection) -> Self {
        self.layout_direction = layout_direction;
        self
    }

    pub fn dp(&self, dp: Dp) -> f32 {
        self.density.dp_to_px(dp)
    }

    pub fn sp(&self, sp: Sp) -> f32 {
        self.density.sp_to_px(sp)
    }
}

impl MeasureScope for LayoutContext {
    fn density(&self) -> f32 {
        self.density.density
    }

    fn font_scale(&self) -> f32 {
        self.density.font_scale
    }

    fn layout_direction(&self) -> LayoutDirection {
        self.layout_direction
    }
}
