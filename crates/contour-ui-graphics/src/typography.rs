//! Typography data structures (font styles, weights, text styles)

use crate::color::Color;

/// Font style (normal, italic, oblique)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontStyle {
    Normal,
    Italic,
    Oblique,
}

/// Font weight (100-900)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const LIGHT: FontWeight = FontWeight(300);
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const MEDIUM: FontWeight = FontWeight(500);
    pub const BOLD: FontWeight = FontWeight(700);
}

/// Text style (data only, no rendering). Sizes are in sp.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextStyle {
    pub color: Option<Color>,
    pub font_family: Option<String>,
    pub font_size: Option<f32>,
    pub font_weight: Option<FontWeight>,
    pub font_style: Option<FontStyle>,
    pub letter_spacing: Option<f32>,
    pub line_height: Option<f32>,
}

impl TextStyle {
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = Some(font_size);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Fills unset fields of `self` from `other`.
    pub fn merge(&self, other: &TextStyle) -> TextStyle {
        TextStyle {
            color: self.color.or(other.color),
            font_family: self.font_family.clone().or_else(|| other.font_family.clone()),
            font_size: self.font_size.or(other.font_size),
            font_weight: self.font_weight.or(other.font_weight),
            font_style: self.font_style.or(other.font_style),
            letter_spacing: self.letter_spacing.or(other.letter_spacing),
            line_height: self.line_height.or(other.line_height),
        }
    }
}

/// Interpolates between two styles. Numeric fields present on both sides are
/// blended; everything else switches at the halfway point.
pub fn lerp_text_style(start: &TextStyle, stop: &TextStyle, fraction: f32) -> TextStyle {
    let t = fraction.clamp(0.0, 1.0);
    let blend = |a: Option<f32>, b: Option<f32>| match (a, b) {
        (Some(a), Some(b)) => Some(a + (b - a) * t),
        _ => {
            if t < 0.5 {
                a
            } else {
                b
            }
        }
    };
    let pick = |a: &TextStyle, b: &TextStyle| if t < 0.5 { a.clone() } else { b.clone() };
    let discrete = pick(start, stop);
    TextStyle {
        color: match (start.color, stop.color) {
            (Some(a), Some(b)) => Some(a.lerp(&b, t)),
            _ => discrete.color,
        },
        font_size: blend(start.font_size, stop.font_size),
        letter_spacing: blend(start.letter_spacing, stop.letter_spacing),
        line_height: blend(start.line_height, stop.line_height),
        ..discrete
    }
}
