//! Outlined text field.
//!
//! The field is driven by its host one frame at a time:
//!
//! 1. [`set_value`](OutlinedTextField::set_value) pushes the externally owned value,
//! 2. [`advance`](OutlinedTextField::advance) steps the transition and reports
//!    what to render,
//! 3. [`measure`](OutlinedTextField::measure) lays the content out,
//! 4. [`draw`](OutlinedTextField::draw) emits the border.
//!
//! Edits coming from the input service go through
//! [`handle_edit`](OutlinedTextField::handle_edit). The caller decides whether
//! an edit sticks by pushing a new value; a value that is not pushed back is
//! reverted on the next frame.

use crate::border::{draw_outlined_border, OutlinedBorderParams};
use crate::colors::{ColorState, ResolvedColors};
use crate::defaults::{
    body_text_style, caption_text_style, HORIZONTAL_ICON_PADDING, TEXT_FIELD_PADDING,
};
use crate::error::TextFieldError;
use crate::layout::{OutlinedTextFieldMeasurePolicy, TextFieldMeasureResult, TextFieldSlots};
use crate::options::{SlotDecoration, SlotRenderer, TextFieldOptions};
use crate::transition::{InputPhase, InputTransition, TransitionValues};
use contour_foundation::interaction::ListenerId;
use contour_foundation::text::{
    filter_for_single_line, ImeAction, TextFieldLineLimits, TextFieldValue, TransformedText,
};
use contour_ui_graphics::{lerp_text_style, Color, DrawScope, Dp, EdgeInsets, TextStyle};
use contour_ui_layout::{Constraints, LayoutContext, Measurable, PaddedMeasurable};
use std::cell::Cell;
use std::rc::Rc;
use web_time::Duration;

/// Everything the host needs to render one frame of the field.
#[derive(Clone, Debug)]
pub struct TextFieldFrame {
    pub phase: InputPhase,
    pub values: TransitionValues,
    pub colors: ResolvedColors,
    /// Style of the input text, colored for the current state.
    pub text_style: TextStyle,
    /// Label style interpolated between its resting and floating sizes.
    pub label_style: TextStyle,
    /// The value as the host should edit it.
    pub value: TextFieldValue,
    /// The text as the host should display it.
    pub transformed: TransformedText,
    pub line_limits: TextFieldLineLimits,
    pub ime_action: ImeAction,
    pub editable: bool,
    /// True while any transition is still running.
    pub animating: bool,
}

/// Owner of the value shown by an [`OutlinedTextField`].
pub trait TextFieldValueHolder {
    /// Value to display this frame.
    fn displayed(&self) -> TextFieldValue;

    /// Applies an edit from the input service.
    fn apply_edit(&mut self, edit: TextFieldValue);
}

/// Plain-string value. Selection and composition are kept by the field.
pub struct PlainTextValue {
    value: String,
    state: TextFieldValue,
    on_value_change: Box<dyn FnMut(String)>,
}

impl TextFieldValueHolder for PlainTextValue {
    fn displayed(&self) -> TextFieldValue {
        self.state.copy_with_text(self.value.as_str())
    }

    fn apply_edit(&mut self, edit: TextFieldValue) {
        let changed = edit.text != self.value;
        self.state = edit;
        if changed {
            (self.on_value_change)(self.state.text.clone());
        }
    }
}

/// Full value record owned by the caller.
pub struct RichTextValue {
    value: TextFieldValue,
    on_value_change: Box<dyn FnMut(TextFieldValue)>,
}

impl TextFieldValueHolder for RichTextValue {
    fn displayed(&self) -> TextFieldValue {
        self.value.clone()
    }

    fn apply_edit(&mut self, edit: TextFieldValue) {
        (self.on_value_change)(edit);
    }
}

/// Material outlined text field.
pub struct OutlinedTextField<V: TextFieldValueHolder> {
    holder: V,
    options: TextFieldOptions,
    transition: InputTransition,
    border: Option<OutlinedBorderParams>,
    last_frame: Option<TextFieldFrame>,
    invalidated: Rc<Cell<bool>>,
    listener: ListenerId,
}

impl OutlinedTextField<PlainTextValue> {
    /// Creates a field over a plain string.
    ///
    /// # Panics
    ///
    /// Panics when `options` fail [`TextFieldOptions::validate`].
    pub fn new(
        value: impl Into<String>,
        on_value_change: impl FnMut(String) + 'static,
        options: TextFieldOptions,
    ) -> Self {
        match Self::try_new(value, on_value_change, options) {
            Ok(field) => field,
            Err(err) => panic!("invalid text field options: {err}"),
        }
    }

    pub fn try_new(
        value: impl Into<String>,
        on_value_change: impl FnMut(String) + 'static,
        options: TextFieldOptions,
    ) -> Result<Self, TextFieldError> {
        let value = value.into();
        let holder = PlainTextValue {
            state: TextFieldValue::new(value.as_str()),
            value,
            on_value_change: Box::new(on_value_change),
        };
        Self::with_holder(holder, options)
    }

    /// Pushes the externally owned text.
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value != self.holder.value {
            self.invalidated.set(true);
        }
        self.holder.value = value;
    }

    pub fn value(&self) -> &str {
        &self.holder.value
    }
}

impl OutlinedTextField<RichTextValue> {
    /// Creates a field over a full value record.
    ///
    /// # Panics
    ///
    /// Panics when `options` fail [`TextFieldOptions::validate`].
    pub fn with_value(
        value: TextFieldValue,
        on_value_change: impl FnMut(TextFieldValue) + 'static,
        options: TextFieldOptions,
    ) -> Self {
        match Self::try_with_value(value, on_value_change, options) {
            Ok(field) => field,
            Err(err) => panic!("invalid text field options: {err}"),
        }
    }

    pub fn try_with_value(
        value: TextFieldValue,
        on_value_change: impl FnMut(TextFieldValue) + 'static,
        options: TextFieldOptions,
    ) -> Result<Self, TextFieldError> {
        let holder = RichTextValue {
            value: value.coerced(),
            on_value_change: Box::new(on_value_change),
        };
        Self::with_holder(holder, options)
    }

    /// Pushes the externally owned value, clamping its ranges into the text.
    pub fn set_value(&mut self, value: TextFieldValue) {
        let value = value.coerced();
        if value != self.holder.value {
            self.invalidated.set(true);
        }
        self.holder.value = value;
    }

    pub fn value(&self) -> &TextFieldValue {
        &self.holder.value
    }
}

impl<V: TextFieldValueHolder> OutlinedTextField<V> {
    fn with_holder(holder: V, options: TextFieldOptions) -> Result<Self, TextFieldError> {
        options.validate()?;
        let invalidated = Rc::new(Cell::new(true));
        let listener = {
            let invalidated = Rc::clone(&invalidated);
            options
                .interaction_source
                .add_listener(move |_, _| invalidated.set(true))
        };
        Ok(Self {
            holder,
            options,
            transition: InputTransition::new(),
            border: None,
            last_frame: None,
            invalidated,
            listener,
        })
    }

    pub fn options(&self) -> &TextFieldOptions {
        &self.options
    }

    /// The value the field shows this frame.
    pub fn displayed_value(&self) -> TextFieldValue {
        self.holder.displayed()
    }

    pub fn is_editable(&self) -> bool {
        self.options.is_editable()
    }

    /// True when the host should produce another frame: a transition is
    /// running, or focus or the value changed since the last one.
    pub fn needs_frame(&self) -> bool {
        self.invalidated.get() || self.transition.is_animating()
    }

    /// Applies an edit from the input service. Ignored unless the field is
    /// editable.
    pub fn handle_edit(&mut self, edit: TextFieldValue) {
        if !self.is_editable() {
            log::warn!(
                "ignoring edit on non-editable text field (enabled: {}, read_only: {})",
                self.options.enabled,
                self.options.read_only
            );
            return;
        }
        let edit = if self.options.single_line && edit.text.contains('\n') {
            edit.copy_with_text(filter_for_single_line(&edit.text))
        } else {
            edit
        };
        self.holder.apply_edit(edit);
        self.invalidated.set(true);
    }

    /// Forwards the keyboard action to the configured handler. Returns false
    /// when there is no handler.
    pub fn perform_ime_action(&self, action: ImeAction) -> bool {
        match &self.options.on_ime_action {
            Some(handler) => {
                handler(action);
                true
            }
            None => false,
        }
    }

    /// Steps the transition by `delta` and resolves the frame.
    pub fn advance(&mut self, delta: Duration) -> TextFieldFrame {
        self.invalidated.set(false);
        let options = &self.options;
        let value = self.holder.displayed();
        let transformed = options.visual_transformation.filter(&value.text);
        // A disabled field cannot hold focus.
        let focused = options.enabled && options.interaction_source.is_focused();
        let phase = InputPhase::derive(focused, transformed.text.is_empty());

        let state = ColorState::new(options.enabled, options.is_error, focused);
        let colors = &options.colors;
        self.transition.update(
            phase,
            options.label.is_some(),
            colors.label_color(state),
            colors.indicator_color(state),
        );
        let values = self.transition.advance(delta);
        let resolved = colors.resolve(state);

        let label_style = lerp_text_style(
            &body_text_style(),
            &caption_text_style(),
            values.label_progress,
        )
        .with_color(values.label_color);
        let text_style = options
            .text_style
            .merge(&body_text_style())
            .with_color(resolved.text);

        let frame = TextFieldFrame {
            phase,
            values,
            colors: resolved,
            text_style,
            label_style,
            value,
            transformed,
            line_limits: options.line_limits(),
            ime_action: options.ime_action(),
            editable: options.is_editable(),
            animating: self.transition.is_animating(),
        };
        self.last_frame = Some(frame.clone());
        frame
    }

    /// Lays out the field around `text_input`, the host's measurable for the
    /// editable text. Optional slots are rendered through their renderers.
    pub fn measure(
        &mut self,
        text_input: Box<dyn Measurable>,
        constraints: Constraints,
        ctx: &LayoutContext,
    ) -> TextFieldMeasureResult {
        let frame = match self.last_frame.clone() {
            Some(frame) => frame,
            None => self.advance(Duration::ZERO),
        };
        let options = &self.options;
        let direction = ctx.layout_direction;
        let mirror = |insets: EdgeInsets| {
            if direction.is_rtl() {
                insets.mirrored()
            } else {
                insets
            }
        };
        let text_padding = EdgeInsets::horizontal(ctx.dp(TEXT_FIELD_PADDING));
        let icon_padding = ctx.dp(HORIZONTAL_ICON_PADDING);

        let icon_decoration = |color: Color| SlotDecoration {
            content_color: color,
            text_style: frame.text_style.clone(),
            alpha: 1.0,
        };
        let render = |renderer: &Option<SlotRenderer>, decoration: SlotDecoration| {
            renderer.as_ref().map(|f| f(&decoration))
        };

        let leading = render(
            &options.leading_icon,
            icon_decoration(frame.colors.leading_icon),
        )
        .map(|m| {
            PaddedMeasurable::wrap(
                m,
                mirror(EdgeInsets::from_components(icon_padding, 0.0, 0.0, 0.0)),
            )
        });
        let trailing = render(
            &options.trailing_icon,
            icon_decoration(frame.colors.trailing_icon),
        )
        .map(|m| {
            PaddedMeasurable::wrap(
                m,
                mirror(EdgeInsets::from_components(0.0, 0.0, icon_padding, 0.0)),
            )
        });
        let label = render(
            &options.label,
            SlotDecoration {
                content_color: frame.values.label_color,
                text_style: frame.label_style.clone(),
                alpha: 1.0,
            },
        );
        let placeholder = if frame.transformed.text.is_empty() {
            render(
                &options.placeholder,
                SlotDecoration {
                    content_color: frame.colors.placeholder,
                    text_style: frame.text_style.clone().with_color(frame.colors.placeholder),
                    alpha: frame.values.placeholder_opacity,
                },
            )
            .map(|m| PaddedMeasurable::wrap(m, text_padding))
        } else {
            None
        };
        let text_field = PaddedMeasurable::wrap(text_input, text_padding);

        let slots = TextFieldSlots::new(&*text_field)
            .with_leading(leading.as_deref())
            .with_trailing(trailing.as_deref())
            .with_label(label.as_deref())
            .with_placeholder(placeholder.as_deref());
        let constraints =
            constraints.with_min_size(ctx.dp(options.min_width), ctx.dp(options.min_height));
        let policy =
            OutlinedTextFieldMeasurePolicy::new(options.single_line, frame.values.label_progress);
        let measured = policy.measure_slots(&slots, constraints, ctx);

        let border = self
            .border
            .get_or_insert_with(|| OutlinedBorderParams::new(ctx));
        border.border_width = ctx.dp(Dp(frame.values.indicator_width));
        border.color = frame.values.indicator_color;
        border.set_label_width(measured.label_width, frame.values.label_progress, ctx);
        measured
    }

    /// Border parameters recorded by the last [`measure`](Self::measure).
    pub fn border(&self) -> Option<&OutlinedBorderParams> {
        self.border.as_ref()
    }

    /// Draws the outlined border into `scope`. Does nothing before the first
    /// [`measure`](Self::measure).
    pub fn draw(&self, scope: &mut dyn DrawScope, ctx: &LayoutContext) {
        if let Some(border) = &self.border {
            draw_outlined_border(scope, border, ctx);
        }
    }
}

impl<V: TextFieldValueHolder> Drop for OutlinedTextField<V> {
    fn drop(&mut self) {
        self.options.interaction_source.remove_listener(self.listener);
    }
}

#[cfg(test)]
#[path = "tests/text_field_tests.rs"]
mod tests;
