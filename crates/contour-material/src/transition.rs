//! Focus/content driven transition of the label, border and placeholder.
//!
//! The field is always in one of three [`InputPhase`]s. Each phase maps to a
//! set of targets; on a phase change every animated value is retargeted from
//! wherever it currently is, with the timing of that particular edge.

use crate::defaults::{
    ANIMATION_DURATION_MILLIS, FOCUSED_BORDER_WIDTH, PLACEHOLDER_ANIMATION_DELAY_OR_DURATION_MILLIS,
    PLACEHOLDER_ANIMATION_DURATION_MILLIS, UNFOCUSED_BORDER_WIDTH,
};
use contour_animation::{Animatable, AnimationSpec, AnimationType, SpringSpec};
use contour_ui_graphics::Color;
use web_time::Duration;

/// Visual phase of the field, derived from focus and displayed content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputPhase {
    Focused,
    UnfocusedEmpty,
    UnfocusedNotEmpty,
}

impl InputPhase {
    /// Focus takes precedence over emptiness.
    pub fn derive(focused: bool, empty: bool) -> Self {
        match (focused, empty) {
            (true, _) => InputPhase::Focused,
            (false, true) => InputPhase::UnfocusedEmpty,
            (false, false) => InputPhase::UnfocusedNotEmpty,
        }
    }
}

/// Values a phase settles at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionTargets {
    pub label_progress: f32,
    /// Border width in dp.
    pub indicator_width: f32,
    pub placeholder_opacity: f32,
}

impl TransitionTargets {
    pub fn for_phase(phase: InputPhase, has_label: bool) -> Self {
        match phase {
            InputPhase::Focused => Self {
                label_progress: 1.0,
                indicator_width: FOCUSED_BORDER_WIDTH.0,
                placeholder_opacity: 1.0,
            },
            InputPhase::UnfocusedEmpty => Self {
                label_progress: 0.0,
                indicator_width: UNFOCUSED_BORDER_WIDTH.0,
                placeholder_opacity: if has_label { 0.0 } else { 1.0 },
            },
            InputPhase::UnfocusedNotEmpty => Self {
                label_progress: 1.0,
                indicator_width: UNFOCUSED_BORDER_WIDTH.0,
                placeholder_opacity: 0.0,
            },
        }
    }
}

/// Animation used for the label, border width and colors.
pub fn standard_animation() -> AnimationType {
    AnimationType::Tween(AnimationSpec::linear(ANIMATION_DURATION_MILLIS))
}

/// Animation used for the placeholder opacity on the `from -> to` edge.
pub fn placeholder_animation(from: InputPhase, to: InputPhase) -> AnimationType {
    match (from, to) {
        (InputPhase::Focused, InputPhase::UnfocusedEmpty) => AnimationType::Tween(
            AnimationSpec::linear(PLACEHOLDER_ANIMATION_DELAY_OR_DURATION_MILLIS),
        ),
        (InputPhase::UnfocusedEmpty, InputPhase::Focused)
        | (InputPhase::UnfocusedNotEmpty, InputPhase::UnfocusedEmpty) => AnimationType::Tween(
            AnimationSpec::linear(PLACEHOLDER_ANIMATION_DURATION_MILLIS)
                .with_delay(PLACEHOLDER_ANIMATION_DELAY_OR_DURATION_MILLIS),
        ),
        _ => AnimationType::Spring(SpringSpec::default_spring()),
    }
}

/// Snapshot of every animated value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionValues {
    pub label_progress: f32,
    /// Border width in dp.
    pub indicator_width: f32,
    pub placeholder_opacity: f32,
    pub label_color: Color,
    pub indicator_color: Color,
}

/// Phase-driven transition owned by one field.
#[derive(Debug, Clone)]
pub struct InputTransition {
    phase: Option<InputPhase>,
    has_label: bool,
    label_progress: Animatable<f32>,
    indicator_width: Animatable<f32>,
    placeholder_opacity: Animatable<f32>,
    label_color: Animatable<Color>,
    indicator_color: Animatable<Color>,
}

impl Default for InputTransition {
    fn default() -> Self {
        Self::new()
    }
}

impl InputTransition {
    pub fn new() -> Self {
        Self {
            phase: None,
            has_label: false,
            label_progress: Animatable::new(0.0),
            indicator_width: Animatable::new(UNFOCUSED_BORDER_WIDTH.0),
            placeholder_opacity: Animatable::new(0.0),
            label_color: Animatable::new(Color::TRANSPARENT),
            indicator_color: Animatable::new(Color::TRANSPARENT),
        }
    }

    /// Phase of the last update, `None` before the first one.
    pub fn phase(&self) -> Option<InputPhase> {
        self.phase
    }

    /// Retargets the animations for `phase`. The first call snaps to the
    /// targets instead of animating.
    pub fn update(
        &mut self,
        phase: InputPhase,
        has_label: bool,
        label_color: Color,
        indicator_color: Color,
    ) {
        let targets = TransitionTargets::for_phase(phase, has_label);
        let Some(previous) = self.phase else {
            self.label_progress.snapTo(targets.label_progress);
            self.indicator_width.snapTo(targets.indicator_width);
            self.placeholder_opacity.snapTo(targets.placeholder_opacity);
            self.label_color.snapTo(label_color);
            self.indicator_color.snapTo(indicator_color);
            self.phase = Some(phase);
            self.has_label = has_label;
            return;
        };

        if previous != phase {
            log::debug!("text field phase {previous:?} -> {phase:?}");
            self.label_progress
                .animateTo(targets.label_progress, standard_animation());
            self.indicator_width
                .animateTo(targets.indicator_width, standard_animation());
            self.placeholder_opacity.animateTo(
                targets.placeholder_opacity,
                placeholder_animation(previous, phase),
            );
            self.phase = Some(phase);
        } else if has_label != self.has_label {
            self.placeholder_opacity.animateTo(
                targets.placeholder_opacity,
                AnimationType::Spring(SpringSpec::default_spring()),
            );
        }
        self.has_label = has_label;

        self.label_color.animateTo(label_color, standard_animation());
        self.indicator_color
            .animateTo(indicator_color, standard_animation());
    }

    /// Steps every animation by `delta` and returns the new values.
    pub fn advance(&mut self, delta: Duration) -> TransitionValues {
        let mut running = false;
        running |= self.label_progress.advance(delta);
        running |= self.indicator_width.advance(delta);
        running |= self.placeholder_opacity.advance(delta);
        running |= self.label_color.advance(delta);
        running |= self.indicator_color.advance(delta);
        if running {
            log::trace!("text field transition stepped by {delta:?}");
        }
        self.values()
    }

    pub fn values(&self) -> TransitionValues {
        TransitionValues {
            label_progress: self.label_progress.value().clamp(0.0, 1.0),
            indicator_width: self.indicator_width.value(),
            placeholder_opacity: self.placeholder_opacity.value().clamp(0.0, 1.0),
            label_color: self.label_color.value(),
            indicator_color: self.indicator_color.value(),
        }
    }

    pub fn is_animating(&self) -> bool {
        self.label_progress.is_running()
            || self.indicator_width.is_running()
            || self.placeholder_opacity.is_running()
            || self.label_color.is_running()
            || self.indicator_color.is_running()
    }
}

#[cfg(test)]
#[path = "tests/transition_tests.rs"]
mod tests;
