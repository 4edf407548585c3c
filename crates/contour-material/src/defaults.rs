//! Dimensions, durations and typography used by the outlined text field.

use contour_ui_graphics::{Dp, TextStyle};

/// Horizontal padding of the input and placeholder, and the vertical padding
/// above/below the input.
pub const TEXT_FIELD_PADDING: Dp = Dp(16.0);

/// Space between the floating label and the ends of the border gap.
pub const OUTLINED_TEXT_FIELD_INNER_PADDING: Dp = Dp(4.0);

/// Padding between an icon and the edge of the field.
pub const HORIZONTAL_ICON_PADDING: Dp = Dp(12.0);

pub const CORNER_RADIUS: Dp = Dp(4.0);

pub const FOCUSED_BORDER_WIDTH: Dp = Dp(2.0);
pub const UNFOCUSED_BORDER_WIDTH: Dp = Dp(1.0);

pub const MIN_WIDTH: Dp = Dp(280.0);
pub const MIN_HEIGHT: Dp = Dp(56.0);

/// Duration of the label, border width and color transitions.
pub const ANIMATION_DURATION_MILLIS: u64 = 150;
/// Duration of the delayed placeholder fade-in.
pub const PLACEHOLDER_ANIMATION_DURATION_MILLIS: u64 = 83;
/// Fade-in delay, also the duration of the placeholder fade-out.
pub const PLACEHOLDER_ANIMATION_DELAY_OR_DURATION_MILLIS: u64 = 67;

/// Opacity applied to content of a disabled field.
pub const DISABLED_CONTENT_ALPHA: f32 = 0.38;

/// Font size of the input text and the resting label, in sp.
pub const BODY_FONT_SIZE: f32 = 16.0;
/// Font size of the floating label, in sp.
pub const CAPTION_FONT_SIZE: f32 = 12.0;

/// Style of the input text and of the label while it rests inside the field.
pub fn body_text_style() -> TextStyle {
    TextStyle {
        font_size: Some(BODY_FONT_SIZE),
        letter_spacing: Some(0.15),
        ..TextStyle::default()
    }
}

/// Style of the label once it has floated onto the border.
pub fn caption_text_style() -> TextStyle {
    TextStyle {
        font_size: Some(CAPTION_FONT_SIZE),
        letter_spacing: Some(0.4),
        ..TextStyle::default()
    }
}
