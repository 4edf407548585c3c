//! Core layout traits and types shared by Contour widgets.

use crate::constraints::Constraints;
use crate::direction::LayoutDirection;
use contour_ui_graphics::{Point, Size};

/// Identifier the host assigns to a measurable child.
pub type NodeId = usize;

/// Object capable of measuring a layout child and exposing intrinsic sizes.
pub trait Measurable {
    /// Measures the child with the provided constraints, returning a [`Placeable`].
    fn measure(&self, constraints: Constraints) -> Box<dyn Placeable>;

    /// Returns the minimum width achievable for the given height.
    fn min_intrinsic_width(&self, height: f32) -> f32;

    /// Returns the maximum width achievable for the given height.
    fn max_intrinsic_width(&self, height: f32) -> f32;

    /// Returns the minimum height achievable for the given width.
    fn min_intrinsic_height(&self, width: f32) -> f32;

    /// Returns the maximum height achievable for the given width.
    fn max_intrinsic_height(&self, width: f32) -> f32;
}

/// Result of running a measurement pass for a single child.
pub trait Placeable {
    /// Returns the measured width of the child.
    fn width(&self) -> f32;

    /// Returns the measured height of the child.
    fn height(&self) -> f32;

    /// Returns the identifier for the underlying layout node.
    fn node_id(&self) -> NodeId;

    /// Offset of the underlying node inside this placeable. Non-zero for
    /// decorators that wrap a child (e.g. padding).
    fn content_offset(&self) -> Point {
        Point::ZERO
    }
}

/// Width of an optional placeable, zero when absent.
pub fn width_or_zero(placeable: Option<&dyn Placeable>) -> f32 {
    placeable.map_or(0.0, |p| p.width())
}

/// Height of an optional placeable, zero when absent.
pub fn height_or_zero(placeable: Option<&dyn Placeable>) -> f32 {
    placeable.map_or(0.0, |p| p.height())
}

/// Scope for measurement operations.
pub trait MeasureScope {
    /// Returns the current density for converting Dp to pixels.
    fn density(&self) -> f32 {
        1.0
    }

    /// Returns the current font scale for converting Sp to pixels.
    fn font_scale(&self) -> f32 {
        1.0
    }

    /// Returns the writing direction children are placed in.
    fn layout_direction(&self) -> LayoutDirection {
        LayoutDirection::Ltr
    }
}

/// Layout algorithm for a parent over its children `C`.
///
/// `C` is whatever shape the parent holds its children in: a slice for
/// homogeneous rows, a fixed struct for slot-based widgets.
pub trait MeasurePolicy<C: ?Sized> {
    /// Runs the measurement pass with the provided children and constraints.
    fn measure(
        &self,
        children: &C,
        constraints: Constraints,
        scope: &dyn MeasureScope,
    ) -> MeasureResult;

    /// Computes the minimum intrinsic width of this policy.
    fn min_intrinsic_width(&self, children: &C, height: f32, scope: &dyn MeasureScope) -> f32;

    /// Computes the maximum intrinsic width of this policy.
    fn max_intrinsic_width(&self, children: &C, height: f32, scope: &dyn MeasureScope) -> f32;

    /// Computes the minimum intrinsic height of this policy.
    fn min_intrinsic_height(&self, children: &C, width: f32, scope: &dyn MeasureScope) -> f32;

    /// Computes the maximum intrinsic height of this policy.
    fn max_intrinsic_height(&self, children: &C, width: f32, scope: &dyn MeasureScope) -> f32;
}

/// Result of a measurement operation.
#[derive(Clone, Debug)]
pub struct MeasureResult {
    pub size: Size,
    pub placements: Vec<Placement>,
}

impl MeasureResult {
    pub fn new(size: Size, placements: Vec<Placement>) -> Self {
        Self { size, placements }
    }

    /// Finds the placement recorded for `node_id`.
    pub fn placement_of(&self, node_id: NodeId) -> Option<&Placement> {
        self.placements.iter().find(|p| p.node_id == node_id)
    }
}

/// Placement information for a measured child.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub node_id: NodeId,
    pub x: f32,
    pub y: f32,
    pub z_index: i32,
}

impl Placement {
    pub fn new(node_id: NodeId, x: f32, y: f32, z_index: i32) -> Self {
        Self {
            node_id,
            x,
            y,
            z_index,
        }
    }

    /// Places `placeable` at a start-relative position inside a parent of
    /// `parent_width`, mirroring x for right-to-left layouts.
    pub fn relative(
        placeable: &dyn Placeable,
        x: f32,
        y: f32,
        parent_width: f32,
        direction: LayoutDirection,
    ) -> Self {
        let x = match direction {
            LayoutDirection::Ltr => x,
            LayoutDirection::Rtl => parent_width - x - placeable.width(),
        };
        let offset = placeable.content_offset();
        Self::new(placeable.node_id(), x + offset.x, y + offset.y, 0)
    }
}
