//! Color resolution for the outlined text field.
//!
//! Every color the field paints is asked from a [`TextFieldColors`] strategy
//! with the current interaction state, so hosts can theme the field without
//! touching the widget.

use crate::defaults::DISABLED_CONTENT_ALPHA;
use contour_ui_graphics::Color;
use std::fmt;

/// Interaction state colors are resolved against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColorState {
    pub enabled: bool,
    pub is_error: bool,
    pub focused: bool,
}

impl ColorState {
    pub fn new(enabled: bool, is_error: bool, focused: bool) -> Self {
        Self {
            enabled,
            is_error,
            focused,
        }
    }
}

/// Strategy resolving the field's colors for a given state.
pub trait TextFieldColors: fmt::Debug {
    fn text_color(&self, enabled: bool) -> Color;

    fn cursor_color(&self, is_error: bool) -> Color;

    /// Color of the outlined border.
    fn indicator_color(&self, state: ColorState) -> Color;

    fn label_color(&self, state: ColorState) -> Color;

    fn placeholder_color(&self, enabled: bool) -> Color;

    fn leading_icon_color(&self, enabled: bool, is_error: bool) -> Color;

    fn trailing_icon_color(&self, enabled: bool, is_error: bool) -> Color;

    fn background_color(&self, enabled: bool) -> Color;

    /// Resolves every non-animated color at once.
    fn resolve(&self, state: ColorState) -> ResolvedColors {
        ResolvedColors {
            text: self.text_color(state.enabled),
            cursor: self.cursor_color(state.is_error),
            placeholder: self.placeholder_color(state.enabled),
            leading_icon: self.leading_icon_color(state.enabled, state.is_error),
            trailing_icon: self.trailing_icon_color(state.enabled, state.is_error),
            background: self.background_color(state.enabled),
        }
    }
}

/// Colors that switch immediately with the state. Label and border colors
/// are animated and live in the transition values instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedColors {
    pub text: Color,
    pub cursor: Color,
    pub placeholder: Color,
    pub leading_icon: Color,
    pub trailing_icon: Color,
    pub background: Color,
}

const PRIMARY: Color = Color::from_argb(0xFF6200EE);
const ERROR: Color = Color::from_argb(0xFFB00020);
const ON_SURFACE: Color = Color::BLACK;

/// Material baseline palette.
#[derive(Clone, Debug, PartialEq)]
pub struct DefaultTextFieldColors {
    pub text_color: Color,
    pub disabled_text_color: Color,
    pub cursor_color: Color,
    pub error_cursor_color: Color,
    pub focused_indicator_color: Color,
    pub unfocused_indicator_color: Color,
    pub disabled_indicator_color: Color,
    pub error_indicator_color: Color,
    pub focused_label_color: Color,
    pub unfocused_label_color: Color,
    pub disabled_label_color: Color,
    pub error_label_color: Color,
    pub placeholder_color: Color,
    pub disabled_placeholder_color: Color,
    pub icon_color: Color,
    pub disabled_icon_color: Color,
    pub error_trailing_icon_color: Color,
    pub background_color: Color,
}

impl Default for DefaultTextFieldColors {
    fn default() -> Self {
        let disabled = ON_SURFACE.with_alpha(DISABLED_CONTENT_ALPHA);
        Self {
            text_color: ON_SURFACE.with_alpha(0.87),
            disabled_text_color: disabled,
            cursor_color: PRIMARY,
            error_cursor_color: ERROR,
            focused_indicator_color: PRIMARY.with_alpha(0.87),
            unfocused_indicator_color: ON_SURFACE.with_alpha(0.38),
            disabled_indicator_color: ON_SURFACE.with_alpha(0.12),
            error_indicator_color: ERROR,
            focused_label_color: PRIMARY.with_alpha(0.87),
            unfocused_label_color: ON_SURFACE.with_alpha(0.6),
            disabled_label_color: disabled,
            error_label_color: ERROR,
            placeholder_color: ON_SURFACE.with_alpha(0.6),
            disabled_placeholder_color: disabled,
            icon_color: ON_SURFACE.with_alpha(0.54),
            disabled_icon_color: disabled,
            error_trailing_icon_color: ERROR,
            background_color: Color::TRANSPARENT,
        }
    }
}

impl DefaultTextFieldColors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_focused_colors(mut self, color: Color) -> Self {
        self.focused_indicator_color = color;
        self.focused_label_color = color;
        self.cursor_color = color;
        self
    }

    pub fn with_error_color(mut self, color: Color) -> Self {
        self.error_indicator_color = color;
        self.error_label_color = color;
        self.error_cursor_color = color;
        self.error_trailing_icon_color = color;
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }
}

impl TextFieldColors for DefaultTextFieldColors {
    fn text_color(&self, enabled: bool) -> Color {
        if enabled {
            self.text_color
        } else {
            self.disabled_text_color
        }
    }

    fn cursor_color(&self, is_error: bool) -> Color {
        if is_error {
            self.error_cursor_color
        } else {
            self.cursor_color
        }
    }

    fn indicator_color(&self, state: ColorState) -> Color {
        if !state.enabled {
            self.disabled_indicator_color
        } else if state.is_error {
            self.error_indicator_color
        } else if state.focused {
            self.focused_indicator_color
        } else {
            self.unfocused_indicator_color
        }
    }

    fn label_color(&self, state: ColorState) -> Color {
        if !state.enabled {
            self.disabled_label_color
        } else if state.is_error {
            self.error_label_color
        } else if state.focused {
            self.focused_label_color
        } else {
            self.unfocused_label_color
        }
    }

    fn placeholder_color(&self, enabled: bool) -> Color {
        if enabled {
            self.placeholder_color
        } else {
            self.disabled_placeholder_color
        }
    }

    fn leading_icon_color(&self, enabled: bool, _is_error: bool) -> Color {
        if enabled {
            self.icon_color
        } else {
            self.disabled_icon_color
        }
    }

    fn trailing_icon_color(&self, enabled: bool, is_error: bool) -> Color {
        if !enabled {
            self.disabled_icon_color
        } else if is_error {
            self.error_trailing_icon_color
        } else {
            self.icon_color
        }
    }

    fn background_color(&self, _enabled: bool) -> Color {
        self.background_color
    }
}
