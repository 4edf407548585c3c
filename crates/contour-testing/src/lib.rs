//! Testing utilities for Contour widgets.
//!
//! - [`FixedMeasurable`]: a child with a preferred size that records the
//!   constraints it was measured with.
//! - [`FrameDriver`]: steps frame-driven state at a fixed frame rate.

use contour_ui_layout::{Constraints, Measurable, NodeId, Placeable};
use std::cell::RefCell;
use std::rc::Rc;
use web_time::Duration;

/// Duration of one frame at 60 fps.
pub const FRAME: Duration = Duration::from_nanos(16_666_667);

/// Measurable child with a preferred size, clamped into the incoming
/// constraints. Clones share the record of received constraints.
#[derive(Clone, Debug)]
pub struct FixedMeasurable {
    node_id: NodeId,
    width: f32,
    height: f32,
    received: Rc<RefCell<Vec<Constraints>>>,
}

impl FixedMeasurable {
    pub fn new(node_id: NodeId, width: f32, height: f32) -> Self {
        Self {
            node_id,
            width,
            height,
            received: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn node_id(&self) -> NodeId {
        self.node_id
    }

    /// Constraints passed to the most recent `measure` call.
    pub fn last_constraints(&self) -> Option<Constraints> {
        self.received.borrow().last().copied()
    }

    pub fn measure_count(&self) -> usize {
        self.received.borrow().len()
    }

    pub fn boxed(&self) -> Box<dyn Measurable> {
        Box::new(self.clone())
    }
}

struct FixedPlaceable {
    node_id: NodeId,
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
        self.node_id
    }
}

impl Measurable for FixedMeasurable {
    fn measure(&self, constraints: Constraints) -> Box<dyn Placeable> {
        self.received.borrow_mut().push(constraints);
        let (width, height) = constraints.constrain(self.width, self.height);
        Box::new(FixedPlaceable {
            node_id: self.node_id,
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

/// Steps frame-driven state in fixed increments and collects samples.
#[derive(Clone, Copy, Debug)]
pub struct FrameDriver {
    frame: Duration,
    elapsed: Duration,
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new(FRAME)
    }
}

impl FrameDriver {
    pub fn new(frame: Duration) -> Self {
        Self {
            frame,
            elapsed: Duration::ZERO,
        }
    }

    pub fn frame(&self) -> Duration {
        self.frame
    }

    /// Total time stepped so far.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Calls `step` with the frame duration `frames` times, collecting results.
    pub fn run<T>(&mut self, frames: usize, mut step: impl FnMut(Duration) -> T) -> Vec<T> {
        (0..frames)
            .map(|_| {
                self.elapsed += self.frame;
                step(self.frame)
            })
            .collect()
    }

    /// Steps until `step` reports it is done (returns `false`) or `max_frames`
    /// elapse. Returns the number of frames stepped.
    pub fn run_until_idle(
        &mut self,
        max_frames: usize,
        mut step: impl FnMut(Duration) -> bool,
    ) -> usize {
        for frame in 1..=max_frames {
            self.elapsed += self.frame;
            if !step(self.frame) {
                return frame;
            }
        }
        max_frames
    }
}
