//! Layout constraints system

/// Constraints used during layout measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Constraints {
    /// Creates constraints with exact width and height.
    pub fn tight(width: f32, height: f32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
        }
    }

    /// Creates constraints with loose bounds (min = 0, max = given values).
    pub fn loose(max_width: f32, max_height: f32) -> Self {
        Self {
            min_width: 0.0,
            max_width,
            min_height: 0.0,
            max_height,
        }
    }

    /// Constraints with no upper bound on either axis.
    pub fn unbounded() -> Self {
        Self::loose(f32::INFINITY, f32::INFINITY)
    }

    /// Returns true if all bounds are finite.
    pub fn is_bounded(&self) -> bool {
        self.max_width.is_finite() && self.max_height.is_finite()
    }

    /// Constrains the provided width and height to fit within these constraints.
    pub fn constrain(&self, width: f32, height: f32) -> (f32, f32) {
        (
            width.clamp(self.min_width, self.max_width),
            height.clamp(self.min_height, self.max_height),
        )
    }

    /// Creates new constraints with the given width bounds.
    pub fn copy_with_width(self, min_width: f32, max_width: f32) -> Self {
        Self {
            min_width,
            max_width,
            ..self
        }
    }

    /// Creates new constraints with the given height bounds.
    pub fn copy_with_height(self, min_height: f32, max_height: f32) -> Self {
        Self {
            min_height,
            max_height,
            ..self
        }
    }

    /// Creates new constraints with loosened minimums (min = 0).
    pub fn loosen(self) -> Self {
        Self {
            min_width: 0.0,
            min_height: 0.0,
            ..self
        }
    }

    /// Shifts every bound by the given deltas. Minimums never drop below zero,
    /// maximums never drop below their minimum, infinite maximums stay infinite.
    pub fn offset(self, horizontal: f32, vertical: f32) -> Self {
        let min_width = (self.min_width + horizontal).max(0.0);
        let min_height = (self.min_height + vertical).max(0.0);
        Self {
            min_width,
            max_width: add_max(self.max_width, horizontal, min_width),
            min_height,
            max_height: add_max(self.max_height, vertical, min_height),
        }
    }

    /// Raises the minimums to at least the given size, capped at the maximums.
    pub fn with_min_size(self, min_width: f32, min_height: f32) -> Self {
        let min_width = self.min_width.max(min_width).min(self.max_width);
        let min_height = self.min_height.max(min_height).min(self.max_height);
        Self {
            min_width,
            min_height,
            ..self
        }
    }
}

fn add_max(max: f32, delta: f32, floor: f32) -> f32 {
    if max.is_infinite() {
        max
    } else {
        (max + delta).max(floor)
    }
}

#[cfg(test)]
#[path = "tests/constraints_tests.rs"]
mod tests;
