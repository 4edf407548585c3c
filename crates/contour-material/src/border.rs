//! Outlined border with a gap in the top edge for the floating label.

use crate::defaults::{
    CORNER_RADIUS, OUTLINED_TEXT_FIELD_INNER_PADDING, TEXT_FIELD_PADDING, UNFOCUSED_BORDER_WIDTH,
};
use contour_ui_graphics::{Brush, Color, DrawScope, Path, Rect, RoundedCornerShape, Size, Stroke};
use contour_ui_layout::{LayoutContext, LayoutDirection};

/// Border state of one field, updated as width, color and label size change.
/// Lengths are in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutlinedBorderParams {
    pub border_width: f32,
    pub color: Color,
    pub corner_radius: f32,
    /// Width of the interruption in the top edge; 0 draws a closed outline.
    pub label_gap_width: f32,
}

impl OutlinedBorderParams {
    pub fn new(ctx: &LayoutContext) -> Self {
        Self {
            border_width: ctx.dp(UNFOCUSED_BORDER_WIDTH),
            color: Color::TRANSPARENT,
            corner_radius: ctx.dp(CORNER_RADIUS),
            label_gap_width: 0.0,
        }
    }

    /// Sizes the gap for a measured label scaled by `label_progress`, so a
    /// resting label (progress 0) leaves the top edge unbroken.
    pub fn set_label_width(
        &mut self,
        label_width: Option<f32>,
        label_progress: f32,
        ctx: &LayoutContext,
    ) {
        let width = label_width.unwrap_or(0.0) * label_progress.clamp(0.0, 1.0);
        self.label_gap_width = if width > 0.0 {
            width + 2.0 * ctx.dp(OUTLINED_TEXT_FIELD_INNER_PADDING)
        } else {
            0.0
        };
    }

    /// Corner radius for a box of `size`, at most half its smaller side.
    pub fn resolved_corner_radius(&self, size: Size) -> f32 {
        RoundedCornerShape::uniform(self.corner_radius)
            .resolve(size.width, size.height)
            .top_left
    }
}

/// Offset of the gap from the start edge.
pub fn label_gap_start(ctx: &LayoutContext) -> f32 {
    ctx.dp(TEXT_FIELD_PADDING) - ctx.dp(OUTLINED_TEXT_FIELD_INNER_PADDING)
}

/// Builds the outline of a `size` box, inset by half the stroke so the
/// stroke stays inside the box.
///
/// The top edge is interrupted between `gap_start` and `gap_start +
/// params.label_gap_width`, measured from the start edge. An open outline
/// runs clockwise from the end of the gap back to its start.
pub fn outline_path(
    size: Size,
    params: &OutlinedBorderParams,
    gap_start: f32,
    direction: LayoutDirection,
) -> Path {
    let bounds = Rect::from_size(size).deflate(params.border_width / 2.0);
    let (left, top, right, bottom) = (bounds.x, bounds.y, bounds.right(), bounds.bottom());
    let radius = params
        .resolved_corner_radius(size)
        .min(bounds.width.min(bounds.height) / 2.0);
    let diameter = 2.0 * radius;

    let gap = if params.label_gap_width > 0.0 {
        let (start, end) = match direction {
            LayoutDirection::Ltr => (gap_start, gap_start + params.label_gap_width),
            LayoutDirection::Rtl => (
                size.width - gap_start - params.label_gap_width,
                size.width - gap_start,
            ),
        };
        let start = start.max(left + radius);
        let end = end.min(right - radius);
        (end > start).then_some((start, end))
    } else {
        None
    };

    let mut path = Path::new();
    match gap {
        Some((_, gap_end)) => path.move_to(gap_end, top),
        None => path.move_to(left + radius, top),
    };
    path.line_to(right - radius, top);
    if radius > 0.0 {
        path.arc_to(
            Rect::from_ltrb(right - diameter, top, right, top + diameter),
            270.0,
            90.0,
        );
    }
    path.line_to(right, bottom - radius);
    if radius > 0.0 {
        path.arc_to(
            Rect::from_ltrb(right - diameter, bottom - diameter, right, bottom),
            0.0,
            90.0,
        );
    }
    path.line_to(left + radius, bottom);
    if radius > 0.0 {
        path.arc_to(
            Rect::from_ltrb(left, bottom - diameter, left + diameter, bottom),
            90.0,
            90.0,
        );
    }
    path.line_to(left, top + radius);
    if radius > 0.0 {
        path.arc_to(
            Rect::from_ltrb(left, top, left + diameter, top + diameter),
            180.0,
            90.0,
        );
    }
    match gap {
        Some((gap_start, _)) => {
            path.line_to(gap_start, top);
        }
        None => {
            path.close();
        }
    }
    path
}

/// Strokes the outline into `scope`.
pub fn draw_outlined_border(
    scope: &mut dyn DrawScope,
    params: &OutlinedBorderParams,
    ctx: &LayoutContext,
) {
    let size = scope.size();
    if size.width <= 0.0 || size.height <= 0.0 || params.border_width <= 0.0 {
        return;
    }
    let path = outline_path(size, params, label_gap_start(ctx), ctx.layout_direction);
    scope.draw_path(path, Brush::solid(params.color), Stroke::new(params.border_width));
}

#[cfg(test)]
#[path = "tests/border_tests.rs"]
mod tests;
