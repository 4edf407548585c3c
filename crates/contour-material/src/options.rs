//! Configuration of an outlined text field.

use crate::colors::{DefaultTextFieldColors, TextFieldColors};
use crate::defaults::{MIN_HEIGHT, MIN_WIDTH};
use crate::error::TextFieldError;
use contour_foundation::text::{
    ImeAction, KeyboardOptions, NoTransformation, TextFieldLineLimits, VisualTransformation,
};
use contour_foundation::InteractionSource;
use contour_ui_graphics::{Color, Dp, TextStyle};
use contour_ui_layout::Measurable;
use std::fmt;
use std::rc::Rc;

/// What a slot renderer is asked to draw with.
#[derive(Clone, Debug, PartialEq)]
pub struct SlotDecoration {
    /// Color the slot content should use (icon tint, label or placeholder text).
    pub content_color: Color,
    /// Style for text slots. Icons may ignore it.
    pub text_style: TextStyle,
    /// Opacity to apply to the whole slot.
    pub alpha: f32,
}

/// Produces the measurable content of an optional slot.
pub type SlotRenderer = Rc<dyn Fn(&SlotDecoration) -> Box<dyn Measurable>>;

/// Callback invoked with the keyboard action the user triggered.
pub type ImeActionHandler = Rc<dyn Fn(ImeAction)>;

/// Visual style of the field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum TextFieldStyle {
    #[default]
    Outlined,
}

/// Options for an outlined text field. Build with [`Default`] and the
/// `with_*` setters.
#[derive(Clone)]
pub struct TextFieldOptions {
    pub enabled: bool,
    pub read_only: bool,
    pub text_style: TextStyle,
    pub label: Option<SlotRenderer>,
    pub placeholder: Option<SlotRenderer>,
    pub leading_icon: Option<SlotRenderer>,
    pub trailing_icon: Option<SlotRenderer>,
    pub is_error: bool,
    pub visual_transformation: Rc<dyn VisualTransformation>,
    pub keyboard_options: KeyboardOptions,
    pub on_ime_action: Option<ImeActionHandler>,
    /// Forces one visible line and replaces typed newlines with spaces.
    pub single_line: bool,
    /// Ignored when `single_line` is set.
    pub max_lines: usize,
    pub interaction_source: InteractionSource,
    pub colors: Rc<dyn TextFieldColors>,
    pub style: TextFieldStyle,
    pub min_width: Dp,
    pub min_height: Dp,
}

impl Default for TextFieldOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            read_only: false,
            text_style: TextStyle::default(),
            label: None,
            placeholder: None,
            leading_icon: None,
            trailing_icon: None,
            is_error: false,
            visual_transformation: Rc::new(NoTransformation),
            keyboard_options: KeyboardOptions::default(),
            on_ime_action: None,
            single_line: false,
            max_lines: usize::MAX,
            interaction_source: InteractionSource::new(),
            colors: Rc::new(DefaultTextFieldColors::default()),
            style: TextFieldStyle::default(),
            min_width: MIN_WIDTH,
            min_height: MIN_HEIGHT,
        }
    }
}

impl fmt::Debug for TextFieldOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextFieldOptions")
            .field("enabled", &self.enabled)
            .field("read_only", &self.read_only)
            .field("text_style", &self.text_style)
            .field("label", &self.label.is_some())
            .field("placeholder", &self.placeholder.is_some())
            .field("leading_icon", &self.leading_icon.is_some())
            .field("trailing_icon", &self.trailing_icon.is_some())
            .field("is_error", &self.is_error)
            .field("visual_transformation", &self.visual_transformation)
            .field("keyboard_options", &self.keyboard_options)
            .field("single_line", &self.single_line)
            .field("max_lines", &self.max_lines)
            .field("colors", &self.colors)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

impl TextFieldOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn with_text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }

    pub fn with_label(
        mut self,
        label: impl Fn(&SlotDecoration) -> Box<dyn Measurable> + 'static,
    ) -> Self {
        self.label = Some(Rc::new(label));
        self
    }

    pub fn with_placeholder(
        mut self,
        placeholder: impl Fn(&SlotDecoration) -> Box<dyn Measurable> + 'static,
    ) -> Self {
        self.placeholder = Some(Rc::new(placeholder));
        self
    }

    pub fn with_leading_icon(
        mut self,
        icon: impl Fn(&SlotDecoration) -> Box<dyn Measurable> + 'static,
    ) -> Self {
        self.leading_icon = Some(Rc::new(icon));
        self
    }

    pub fn with_trailing_icon(
        mut self,
        icon: impl Fn(&SlotDecoration) -> Box<dyn Measurable> + 'static,
    ) -> Self {
        self.trailing_icon = Some(Rc::new(icon));
        self
    }

    pub fn with_error(mut self, is_error: bool) -> Self {
        self.is_error = is_error;
        self
    }

    pub fn with_visual_transformation(
        mut self,
        transformation: impl VisualTransformation + 'static,
    ) -> Self {
        self.visual_transformation = Rc::new(transformation);
        self
    }

    pub fn with_keyboard_options(mut self, keyboard_options: KeyboardOptions) -> Self {
        self.keyboard_options = keyboard_options;
        self
    }

    pub fn with_on_ime_action(mut self, handler: impl Fn(ImeAction) + 'static) -> Self {
        self.on_ime_action = Some(Rc::new(handler));
        self
    }

    pub fn with_single_line(mut self, single_line: bool) -> Self {
        self.single_line = single_line;
        self
    }

    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    pub fn with_interaction_source(mut self, source: InteractionSource) -> Self {
        self.interaction_source = source;
        self
    }

    pub fn with_colors(mut self, colors: impl TextFieldColors + 'static) -> Self {
        self.colors = Rc::new(colors);
        self
    }

    pub fn with_min_size(mut self, min_width: Dp, min_height: Dp) -> Self {
        self.min_width = min_width;
        self.min_height = min_height;
        self
    }

    /// Checks the options for contract violations.
    pub fn validate(&self) -> Result<(), TextFieldError> {
        if !self.single_line && self.max_lines == 0 {
            return Err(TextFieldError::InvalidMaxLines {
                max_lines: self.max_lines,
            });
        }
        let (width, height) = (self.min_width.0, self.min_height.0);
        if !(width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0) {
            return Err(TextFieldError::InvalidMinSize { width, height });
        }
        Ok(())
    }

    /// Effective line limits. Single-line mode caps the field at one line.
    pub fn line_limits(&self) -> TextFieldLineLimits {
        TextFieldLineLimits::from_options(self.single_line, self.max_lines)
    }

    /// True when user edits are accepted.
    pub fn is_editable(&self) -> bool {
        self.enabled && !self.read_only
    }

    /// Keyboard action the host should offer for these options.
    pub fn ime_action(&self) -> ImeAction {
        self.keyboard_options.resolved_ime_action(self.single_line)
    }
}

#[cfg(test)]
#[path = "tests/options_tests.rs"]
mod tests;
