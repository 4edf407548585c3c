//! Measurement and placement of the outlined text field's content.
//!
//! Five slots take part: leading and trailing icons, the floating label, the
//! placeholder and the input itself. Icons take their width first, the label
//! and the input share what remains, and the label's height reserves space at
//! the top so the input never slides under the floated label.

use crate::defaults::TEXT_FIELD_PADDING;
use contour_ui_graphics::Size;
use contour_ui_layout::{
    height_or_zero, width_or_zero, Constraints, Measurable, MeasurePolicy, MeasureResult,
    MeasureScope, Placeable, Placement, VerticalAlignment,
};

/// The field's content, one entry per slot. Only the input is mandatory.
#[derive(Clone, Copy)]
pub struct TextFieldSlots<'a> {
    pub leading: Option<&'a dyn Measurable>,
    pub trailing: Option<&'a dyn Measurable>,
    pub label: Option<&'a dyn Measurable>,
    pub placeholder: Option<&'a dyn Measurable>,
    pub text_field: &'a dyn Measurable,
}

impl<'a> TextFieldSlots<'a> {
    pub fn new(text_field: &'a dyn Measurable) -> Self {
        Self {
            leading: None,
            trailing: None,
            label: None,
            placeholder: None,
            text_field,
        }
    }

    pub fn with_leading(mut self, leading: Option<&'a dyn Measurable>) -> Self {
        self.leading = leading;
        self
    }

    pub fn with_trailing(mut self, trailing: Option<&'a dyn Measurable>) -> Self {
        self.trailing = trailing;
        self
    }

    pub fn with_label(mut self, label: Option<&'a dyn Measurable>) -> Self {
        self.label = label;
        self
    }

    pub fn with_placeholder(mut self, placeholder: Option<&'a dyn Measurable>) -> Self {
        self.placeholder = placeholder;
        self
    }
}

/// Layout result plus the measured label width the border gap is cut for.
#[derive(Clone, Debug)]
pub struct TextFieldMeasureResult {
    pub result: MeasureResult,
    pub label_width: Option<f32>,
}

/// Lays out the outlined field's slots.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutlinedTextFieldMeasurePolicy {
    pub single_line: bool,
    /// 0.0 with the label resting inside the field, 1.0 once it sits on the border.
    pub label_progress: f32,
}

impl OutlinedTextFieldMeasurePolicy {
    pub fn new(single_line: bool, label_progress: f32) -> Self {
        Self {
            single_line,
            label_progress: label_progress.clamp(0.0, 1.0),
        }
    }

    /// Measures and places every slot.
    pub fn measure_slots(
        &self,
        slots: &TextFieldSlots<'_>,
        constraints: Constraints,
        scope: &dyn MeasureScope,
    ) -> TextFieldMeasureResult {
        let padding = TEXT_FIELD_PADDING.to_px(scope.density());
        let loose = constraints.loosen();

        let leading = slots.leading.map(|m| m.measure(loose));
        let mut occupied_width = width_or_zero(leading.as_deref());

        let trailing = slots
            .trailing
            .map(|m| m.measure(loose.offset(-occupied_width, 0.0)));
        occupied_width += width_or_zero(trailing.as_deref());

        let label = slots
            .label
            .map(|m| m.measure(loose.offset(-occupied_width, -padding)));
        let label_width = label.as_ref().map(|l| l.width());

        let top_padding = (height_or_zero(label.as_deref()) / 2.0).max(padding);
        let text_constraints = constraints.offset(-occupied_width, -padding - top_padding);
        let text_constraints = text_constraints.copy_with_height(0.0, text_constraints.max_height);
        let text_field = slots.text_field.measure(text_constraints);

        let placeholder_constraints =
            text_constraints.copy_with_width(0.0, text_constraints.max_width);
        let placeholder = slots
            .placeholder
            .map(|m| m.measure(placeholder_constraints));

        let width = calculate_width(
            leading.as_deref(),
            trailing.as_deref(),
            &*text_field,
            label.as_deref(),
            placeholder.as_deref(),
            constraints,
        );
        let height = calculate_height(
            leading.as_deref(),
            trailing.as_deref(),
            &*text_field,
            label.as_deref(),
            placeholder.as_deref(),
            constraints,
            padding,
        );

        let placements = self.place(
            width,
            height,
            leading.as_deref(),
            trailing.as_deref(),
            &*text_field,
            label.as_deref(),
            placeholder.as_deref(),
            padding,
            scope,
        );
        log::debug!("outlined text field measured {width}x{height}, label width {label_width:?}");

        TextFieldMeasureResult {
            result: MeasureResult::new(Size { width, height }, placements),
            label_width,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn place(
        &self,
        width: f32,
        height: f32,
        leading: Option<&dyn Placeable>,
        trailing: Option<&dyn Placeable>,
        text_field: &dyn Placeable,
        label: Option<&dyn Placeable>,
        placeholder: Option<&dyn Placeable>,
        padding: f32,
        scope: &dyn MeasureScope,
    ) -> Vec<Placement> {
        let direction = scope.layout_direction();
        let center = VerticalAlignment::CenterVertically;
        let leading_width = width_or_zero(leading);
        let mut placements = Vec::with_capacity(5);

        if let Some(leading) = leading {
            let y = center.align(height, leading.height());
            placements.push(Placement::relative(leading, 0.0, y, width, direction));
        }
        if let Some(trailing) = trailing {
            let y = center.align(height, trailing.height());
            placements.push(Placement::relative(
                trailing,
                width - trailing.width(),
                y,
                width,
                direction,
            ));
        }
        if let Some(label) = label {
            let progress = self.label_progress;
            let start_y = if self.single_line {
                center.align(height, label.height())
            } else {
                padding
            };
            let y = start_y * (1.0 - progress) - (label.height() / 2.0) * progress;
            let resting_x = padding + leading_width;
            let x = resting_x + (padding - resting_x) * progress;
            let mut placement = Placement::relative(label, x, y, width, direction);
            placement.z_index = 1;
            placements.push(placement);
        }

        let input_y = |child_height: f32| {
            if self.single_line {
                center.align(height, child_height)
            } else {
                padding
            }
        };
        if let Some(placeholder) = placeholder {
            placements.push(Placement::relative(
                placeholder,
                leading_width,
                input_y(placeholder.height()),
                width,
                direction,
            ));
        }
        placements.push(Placement::relative(
            text_field,
            leading_width,
            input_y(text_field.height()),
            width,
            direction,
        ));
        placements
    }

    fn intrinsic_width(
        &self,
        slots: &TextFieldSlots<'_>,
        height: f32,
        measure: impl Fn(&dyn Measurable, f32) -> f32,
    ) -> f32 {
        let side = |slot: Option<&dyn Measurable>| slot.map_or(0.0, |m| measure(m, height));
        let middle = measure(slots.text_field, height)
            .max(side(slots.label))
            .max(side(slots.placeholder));
        side(slots.leading) + middle + side(slots.trailing)
    }

    fn intrinsic_height(
        &self,
        slots: &TextFieldSlots<'_>,
        width: f32,
        scope: &dyn MeasureScope,
        measure: impl Fn(&dyn Measurable, f32) -> f32,
    ) -> f32 {
        let padding = TEXT_FIELD_PADDING.to_px(scope.density());
        let icon_width = |slot: Option<&dyn Measurable>| {
            slot.map_or(0.0, |m| m.max_intrinsic_width(f32::INFINITY))
        };
        let remaining = (width - icon_width(slots.leading) - icon_width(slots.trailing)).max(0.0);
        let side = |slot: Option<&dyn Measurable>, w: f32| slot.map_or(0.0, |m| measure(m, w));
        let input = measure(slots.text_field, remaining).max(side(slots.placeholder, remaining));
        let label = side(slots.label, remaining);
        let middle = (input + padding + padding.max(label / 2.0)).round();
        middle
            .max(side(slots.leading, width))
            .max(side(slots.trailing, width))
    }
}

impl<'a> MeasurePolicy<TextFieldSlots<'a>> for OutlinedTextFieldMeasurePolicy {
    fn measure(
        &self,
        children: &TextFieldSlots<'a>,
        constraints: Constraints,
        scope: &dyn MeasureScope,
    ) -> MeasureResult {
        self.measure_slots(children, constraints, scope).result
    }

    fn min_intrinsic_width(
        &self,
        children: &TextFieldSlots<'a>,
        height: f32,
        _scope: &dyn MeasureScope,
    ) -> f32 {
        self.intrinsic_width(children, height, |m, h| m.min_intrinsic_width(h))
    }

    fn max_intrinsic_width(
        &self,
        children: &TextFieldSlots<'a>,
        height: f32,
        _scope: &dyn MeasureScope,
    ) -> f32 {
        self.intrinsic_width(children, height, |m, h| m.max_intrinsic_width(h))
    }

    fn min_intrinsic_height(
        &self,
        children: &TextFieldSlots<'a>,
        width: f32,
        scope: &dyn MeasureScope,
    ) -> f32 {
        self.intrinsic_height(children, width, scope, |m, w| m.min_intrinsic_height(w))
    }

    fn max_intrinsic_height(
        &self,
        children: &TextFieldSlots<'a>,
        width: f32,
        scope: &dyn MeasureScope,
    ) -> f32 {
        self.intrinsic_height(children, width, scope, |m, w| m.max_intrinsic_height(w))
    }
}

/// Width of the composite: icons plus the widest middle slot, at least the
/// minimum width.
pub fn calculate_width(
    leading: Option<&dyn Placeable>,
    trailing: Option<&dyn Placeable>,
    text_field: &dyn Placeable,
    label: Option<&dyn Placeable>,
    placeholder: Option<&dyn Placeable>,
    constraints: Constraints,
) -> f32 {
    let middle = text_field
        .width()
        .max(width_or_zero(label))
        .max(width_or_zero(placeholder));
    let wrap = width_or_zero(leading) + middle + width_or_zero(trailing);
    constraints.min_width.max(wrap)
}

/// Height of the composite: the tallest of the icons and the middle column,
/// where the middle column leaves room for half the label above the input.
pub fn calculate_height(
    leading: Option<&dyn Placeable>,
    trailing: Option<&dyn Placeable>,
    text_field: &dyn Placeable,
    label: Option<&dyn Placeable>,
    placeholder: Option<&dyn Placeable>,
    constraints: Constraints,
    padding: f32,
) -> f32 {
    let input = text_field.height().max(height_or_zero(placeholder));
    let middle = (input + padding + padding.max(height_or_zero(label) / 2.0)).round();
    constraints
        .min_height
        .max(height_or_zero(leading))
        .max(height_or_zero(trailing))
        .max(middle)
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
