//! Vector paths and stroke styles.

use crate::geometry::{Point, Rect};
use smallvec::SmallVec;

/// A single segment of a [`Path`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Elliptical arc inscribed in `oval`, angles in degrees, clockwise from
    /// the positive x axis (y grows downwards).
    ArcTo {
        oval: Rect,
        start_angle: f32,
        sweep_angle: f32,
    },
    Close,
}

/// Ordered list of path commands.
///
/// Outlines built by widgets are short, so the commands live inline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: SmallVec<[PathCommand; 12]>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    pub fn line_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    pub fn arc_to(&mut self, oval: Rect, start_angle: f32, sweep_angle: f32) -> &mut Self {
        self.commands.push(PathCommand::ArcTo {
            oval,
            start_angle,
            sweep_angle,
        });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns true when the last command closes the contour.
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// Point where the pen ends after replaying the commands.
    pub fn current_point(&self) -> Option<Point> {
        let mut start = None;
        let mut current = None;
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(point) => {
                    start = Some(point);
                    current = Some(point);
                }
                PathCommand::LineTo(point) => current = Some(point),
                PathCommand::ArcTo {
                    oval,
                    start_angle,
                    sweep_angle,
                } => current = Some(arc_point(oval, start_angle + sweep_angle)),
                PathCommand::Close => current = start,
            }
        }
        current
    }
}

/// Point on the ellipse inscribed in `oval` at `angle_degrees`.
pub fn arc_point(oval: Rect, angle_degrees: f32) -> Point {
    let radians = angle_degrees.to_radians();
    let rx = oval.width / 2.0;
    let ry = oval.height / 2.0;
    Point::new(
        oval.x + rx + rx * radians.cos(),
        oval.y + ry + ry * radians.sin(),
    )
}

/// Stroke style for outlined drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub width: f32,
}

impl Stroke {
    pub const fn new(width: f32) -> Self {
        Self { width }
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::new(1.0)
    }
}
