use contour_ui_graphics::Color;
use web_time::Duration;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for Color {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Color::lerp(self, target, fraction)
    }
}

/// Linear tween with an optional start delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Delay before starting animation in milliseconds.
    pub delay_millis: u64,
}

impl AnimationSpec {
    /// Create a linear tween animation.
    pub fn linear(duration_millis: u64) -> Self {
        Self {
            duration_millis,
            delay_millis: 0,
        }
    }

    /// Add a delay before the animation starts.
    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

/// Critically damped spring configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Stiffness constant. Higher values = faster animation.
    pub stiffness: f32,
    /// Velocity threshold to stop animation, in progress units per second.
    pub velocity_threshold: f32,
    /// Position threshold to stop animation, in progress units.
    pub position_threshold: f32,
}

impl SpringSpec {
    /// Critically damped spring with medium stiffness.
    pub fn default_spring() -> Self {
        Self {
            stiffness: 1500.0,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

/// Animation type specification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationType {
    /// Time-based tween animation.
    Tween(AnimationSpec),
    /// Physics-based spring animation.
    Spring(SpringSpec),
}

impl Default for AnimationType {
    fn default() -> Self {
        AnimationType::Spring(SpringSpec::default())
    }
}

/// Value that moves towards a target over explicitly advanced time.
///
/// Internally the animation tracks a progress scalar from the start value
/// (0.0) to the target (1.0); the visible value is `start.lerp(target, p)`.
#[derive(Debug, Clone)]
pub struct Animatable<T: Lerp + Clone + PartialEq> {
    current: T,
    start: T,
    target: T,
    animation_type: AnimationType,
    elapsed_nanos: u64,
    /// Spring displacement from the target, in progress units (progress - 1).
    displacement: f32,
    /// Spring velocity, in progress units per second.
    velocity: f32,
    running: bool,
}

impl<T: Lerp + Clone + PartialEq> Animatable<T> {
    /// Create a new animatable resting at the given value.
    pub fn new(initial: T) -> Self {
        Self {
            current: initial.clone(),
            start: initial.clone(),
            target: initial,
            animation_type: AnimationType::default(),
            elapsed_nanos: 0,
            displacement: 0.0,
            velocity: 0.0,
            running: false,
        }
    }

    /// Animate to the target value using the specified animation.
    ///
    /// An in-flight animation is interrupted and the new one starts from the
    /// current value. Re-requesting the same target with the same spec is a
    /// no-op so callers may retarget every frame.
    pub fn animateTo(&mut self, target: T, animation: AnimationType) {
        if target == self.target && animation == self.animation_type {
            return;
        }
        self.start = self.current.clone();
        self.target = target;
        self.animation_type = animation;
        self.elapsed_nanos = 0;
        self.displacement = -1.0;
        self.velocity = 0.0;
        self.running = self.start != self.target;
        if !self.running {
            self.settle();
        }
    }

    /// Snap immediately to the target value without animating.
    pub fn snapTo(&mut self, target: T) {
        self.current = target.clone();
        self.target = target;
        self.settle();
    }

    /// Current interpolated value.
    pub fn value(&self) -> T {
        self.current.clone()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Steps the animation by `delta`. Returns `true` while it is still running.
    pub fn advance(&mut self, delta: Duration) -> bool {
        if !self.running {
            return false;
        }
        let delta_nanos = u64::try_from(delta.as_nanos()).unwrap_or(u64::MAX);
        self.elapsed_nanos = self.elapsed_nanos.saturating_add(delta_nanos);

        match self.animation_type {
            AnimationType::Tween(spec) => self.step_tween(spec),
            AnimationType::Spring(spec) => self.step_spring(spec, delta.as_secs_f32()),
        }
        self.running
    }

    fn step_tween(&mut self, spec: AnimationSpec) {
        let delay_nanos = spec.delay_millis.saturating_mul(1_000_000);
        if self.elapsed_nanos < delay_nanos {
            return;
        }
        let duration_nanos = spec.duration_millis.saturating_mul(1_000_000).max(1);
        let animation_elapsed = self.elapsed_nanos - delay_nanos;
        let progress = (animation_elapsed as f32 / duration_nanos as f32).clamp(0.0, 1.0);
        if progress >= 1.0 {
            self.current = self.target.clone();
            self.settle();
        } else {
            self.current = self.start.lerp(&self.target, progress);
        }
    }

    fn step_spring(&mut self, spec: SpringSpec, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        // Closed form of the critically damped oscillator.
        let omega = spec.stiffness.max(0.0).sqrt();
        let x0 = self.displacement;
        let v0 = self.velocity;
        let b = v0 + omega * x0;
        let decay = (-omega * dt).exp();
        self.displacement = (x0 + b * dt) * decay;
        self.velocity = (v0 - omega * b * dt) * decay;

        let at_rest = self.velocity.abs() < spec.velocity_threshold;
        let near_target = self.displacement.abs() < spec.position_threshold;
        if at_rest && near_target {
            self.current = self.target.clone();
            self.settle();
        } else {
            let progress = (1.0 + self.displacement).clamp(0.0, 1.0);
            self.current = self.start.lerp(&self.target, progress);
        }
    }

    fn settle(&mut self) {
        self.start = self.target.clone();
        self.elapsed_nanos = 0;
        self.displacement = 0.0;
        self.velocity = 0.0;
        self.running = false;
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
