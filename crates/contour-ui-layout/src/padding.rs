//! Padding decorator for measurables.

use crate::constraints::Constraints;
use crate::measure::{Measurable, NodeId, Placeable};
use contour_ui_graphics::{EdgeInsets, Point};

/// Wraps a child and reserves `padding` around it.
///
/// The wrapper reports the padded size and forwards the child's node id, with
/// [`Placeable::content_offset`] pointing at the child's top-left corner.
pub struct PaddedMeasurable {
    inner: Box<dyn Measurable>,
    padding: EdgeInsets,
}

impl PaddedMeasurable {
    pub fn new(inner: Box<dyn Measurable>, padding: EdgeInsets) -> Self {
        Self { inner, padding }
    }

    /// Skips the wrapper when there is nothing to pad.
    pub fn wrap(inner: Box<dyn Measurable>, padding: EdgeInsets) -> Box<dyn Measurable> {
        if padding.is_zero() {
            inner
        } else {
            Box::new(Self::new(inner, padding))
        }
    }
}

impl Measurable for PaddedMeasurable {
    fn measure(&self, constraints: Constraints) -> Box<dyn Placeable> {
        let horizontal = self.padding.horizontal_sum();
        let vertical = self.padding.vertical_sum();
        let inner = self.inner.measure(constraints.offset(-horizontal, -vertical));
        Box::new(PaddedPlaceable {
            width: inner.width() + horizontal,
            height: inner.height() + vertical,
            padding: self.padding,
            inner,
        })
    }

    fn min_intrinsic_width(&self, height: f32) -> f32 {
        let inner_height = (height - self.padding.vertical_sum()).max(0.0);
        self.inner.min_intrinsic_width(inner_height) + self.padding.horizontal_sum()
    }

    fn max_intrinsic_width(&self, height: f32) -> f32 {
        let inner_height = (height - self.padding.vertical_sum()).max(0.0);
        self.inner.max_intrinsic_width(inner_height) + self.padding.horizontal_sum()
    }

    fn min_intrinsic_height(&self, width: f32) -> f32 {
        let inner_width = (width - self.padding.horizontal_sum()).max(0.0);
        self.inner.min_intrinsic_height(inner_width) + self.padding.vertical_sum()
    }

    fn max_intrinsic_height(&self, width: f32) -> f32 {
        let inner_width = (width - self.padding.horizontal_sum()).max(0.0);
        self.inner.max_intrinsic_height(inner_width) + self.padding.vertical_sum()
    }
}

struct PaddedPlaceable {
    inner: Box<dyn Placeable>,
    padding: EdgeInsets,
    width: f32,
    height: f32,
}

impl Placeable for PaddedPlaceable {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn node_id(&self) -> NodeId {
        self.inner.node_id()
    }

    fn content_offset(&self) -> Point {
        let inner = self.inner.content_offset();
        Point::new(inner.x + self.padding.left, inner.y + self.padding.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::LayoutDirection;
    use crate::measure::Placement;

    struct Fixed {
        id: NodeId,
        width: f32,
        height: f32,
    }

    struct FixedPlaceable {
        id: NodeId,
        width: f32,
        height: f32,
    }

    impl Placeable for FixedPlaceable {
        fn width(&self) -> f32 {
            self.width
        }
        fn height(&self) -> f32 {
            self.height
        }
        fn node_id(&self) -> NodeId {
            self.id
        }
    }

    impl Measurable for Fixed {
        fn measure(&self, constraints: Constraints) -> Box<dyn Placeable> {
            let (width, height) = constraints.constrain(self.width, self.height);
            Box::new(FixedPlaceable {
                id: self.id,
                width,
                height,
            })
        }
        fn min_intrinsic_width(&self, _height: f32) -> f32 {
            self.width
        }
        fn max_intrinsic_width(&self, _height: f32) -> f32 {
            self.width
        }
        fn min_intrinsic_height(&self, _width: f32) -> f32 {
            self.height
        }
        fn max_intrinsic_height(&self, _width: f32) -> f32 {
            self.height
        }
    }

    fn fixed(width: f32, height: f32) -> Box<dyn Measurable> {
        Box::new(Fixed {
            id: 7,
            width,
            height,
        })
    }

    #[test]
    fn padded_child_grows_by_insets() {
        let padded = PaddedMeasurable::new(fixed(24.0, 24.0), EdgeInsets::horizontal(12.0));
        let placeable = padded.measure(Constraints::loose(100.0, 100.0));
        assert_eq!(placeable.width(), 48.0);
        assert_eq!(placeable.height(), 24.0);
        assert_eq!(placeable.node_id(), 7);
        assert_eq!(placeable.content_offset(), Point::new(12.0, 0.0));
    }

    #[test]
    fn padding_is_taken_from_the_constraints() {
        let padded = PaddedMeasurable::new(fixed(200.0, 24.0), EdgeInsets::horizontal(16.0));
        let placeable = padded.measure(Constraints::loose(100.0, 100.0));
        assert_eq!(placeable.width(), 100.0);
    }

    #[test]
    fn intrinsics_include_padding() {
        let padded = PaddedMeasurable::new(
            fixed(10.0, 20.0),
            EdgeInsets::from_components(1.0, 2.0, 3.0, 4.0),
        );
        assert_eq!(padded.min_intrinsic_width(f32::INFINITY), 14.0);
        assert_eq!(padded.max_intrinsic_height(f32::INFINITY), 26.0);
    }

    #[test]
    fn zero_padding_does_not_wrap() {
        let wrapped = PaddedMeasurable::wrap(fixed(10.0, 10.0), EdgeInsets::default());
        let placeable = wrapped.measure(Constraints::unbounded());
        assert_eq!(placeable.content_offset(), Point::ZERO);
    }

    #[test]
    fn relative_placement_mirrors_in_rtl() {
        let padded = PaddedMeasurable::new(fixed(20.0, 10.0), EdgeInsets::horizontal(5.0));
        let placeable = padded.measure(Constraints::unbounded());
        let ltr = Placement::relative(placeable.as_ref(), 0.0, 3.0, 100.0, LayoutDirection::Ltr);
        let rtl = Placement::relative(placeable.as_ref(), 0.0, 3.0, 100.0, LayoutDirection::Rtl);
        assert_eq!((ltr.x, ltr.y), (5.0, 3.0));
        assert_eq!((rtl.x, rtl.y), (75.0, 3.0));
    }
}
