//! End-to-end frames of an outlined text field driven like a host would.

use contour_foundation::text::TextFieldValue;
use contour_foundation::InteractionSource;
use contour_material::{
    InputPhase, OutlinedTextField, PlainTextValue, SlotDecoration, TextFieldOptions,
};
use contour_testing::{FixedMeasurable, FrameDriver, FRAME};
use contour_ui_graphics::{DrawPrimitive, DrawScopeDefault, PathCommand, Point, Size};
use contour_ui_layout::{Constraints, LayoutContext};
use std::cell::RefCell;
use std::rc::Rc;

const LABEL: usize = 1;
const INPUT: usize = 2;

struct Host {
    field: OutlinedTextField<PlainTextValue>,
    focus: InteractionSource,
    model: Rc<RefCell<String>>,
    label_widths: Rc<RefCell<Vec<f32>>>,
    gaps: Vec<f32>,
    ctx: LayoutContext,
}

impl Host {
    /// A host whose model accepts every edit.
    fn new(text: &str) -> Self {
        let focus = InteractionSource::new();
        let model = Rc::new(RefCell::new(text.to_string()));
        let label_widths = Rc::new(RefCell::new(Vec::new()));
        let options = {
            let label_widths = Rc::clone(&label_widths);
            TextFieldOptions::new()
                .with_single_line(true)
                .with_interaction_source(focus.clone())
                .with_label(move |decoration: &SlotDecoration| {
                    // Label text is five glyphs of roughly half the font size.
                    let font_size = decoration.text_style.font_size.unwrap_or(16.0);
                    let width = 5.0 * font_size * 0.5;
                    label_widths.borrow_mut().push(width);
                    FixedMeasurable::new(LABEL, width, font_size * 1.25).boxed()
                })
        };
        let field = {
            let model = Rc::clone(&model);
            OutlinedTextField::new(text, move |text| *model.borrow_mut() = text, options)
        };
        Self {
            field,
            focus,
            model,
            label_widths,
            gaps: Vec::new(),
            ctx: LayoutContext::default(),
        }
    }

    fn frame(&mut self) -> (InputPhase, f32) {
        self.field.set_value(self.model.borrow().clone());
        let frame = self.field.advance(FRAME);
        let input = FixedMeasurable::new(INPUT, 120.0, 20.0).boxed();
        let measured = self
            .field
            .measure(input, Constraints::loose(360.0, 200.0), &self.ctx);
        let progress = frame.values.label_progress;
        let gap = self.field.border().map_or(0.0, |border| border.label_gap_width);
        // The gap tracks the floating part of the label plus 4dp either side.
        let floated = measured.label_width.unwrap_or(0.0) * progress;
        let expected = if floated > 0.0 { floated + 8.0 } else { 0.0 };
        assert!((gap - expected).abs() < 1e-4, "gap {gap}, expected {expected}");
        self.gaps.push(gap);
        (frame.phase, progress)
    }
}

#[test]
fn typing_into_a_focused_field_keeps_label_floated() {
    let mut host = Host::new("");
    assert_eq!(host.frame(), (InputPhase::UnfocusedEmpty, 0.0));

    host.focus.set_focused(true);
    let mut driver = FrameDriver::default();
    driver.run(12, |_| host.frame());
    assert_eq!(host.frame(), (InputPhase::Focused, 1.0));

    host.field.handle_edit(TextFieldValue::new("hello"));
    assert_eq!(*host.model.borrow(), "hello");
    host.focus.set_focused(false);
    let frames = driver.run(12, |_| host.frame());
    assert!(frames
        .iter()
        .all(|(phase, progress)| *phase == InputPhase::UnfocusedNotEmpty && *progress == 1.0));
}

#[test]
fn border_gap_follows_the_shrinking_label() {
    let mut host = Host::new("");
    host.frame();
    host.focus.set_focused(true);
    let mut driver = FrameDriver::default();
    driver.run(12, |_| host.frame());

    let widths = host.label_widths.borrow();
    // 5 glyphs at 16sp resting, 12sp floated.
    assert_eq!(widths.first().copied(), Some(40.0));
    assert_eq!(widths.last().copied(), Some(30.0));
    assert!(widths.windows(2).all(|pair| pair[1] <= pair[0]));
}

#[test]
fn focused_outline_has_a_gap_for_the_label() {
    let mut host = Host::new("filled");
    host.focus.set_focused(true);
    let mut driver = FrameDriver::default();
    driver.run(12, |_| host.frame());

    let mut scope = DrawScopeDefault::new(Size::new(360.0, 56.0));
    host.field.draw(&mut scope, &host.ctx);
    let [DrawPrimitive::Path { path, stroke, .. }] = scope.primitives() else {
        panic!("expected a single outline");
    };
    assert_eq!(stroke.width, 2.0);
    // Gap runs from 12 to 12 + 30 + 8 along the top edge.
    assert_eq!(
        path.commands().first(),
        Some(&PathCommand::MoveTo(Point::new(50.0, 1.0)))
    );
    assert_eq!(
        path.current_point(),
        Some(Point::new(12.0, 1.0))
    );
}

#[test]
fn rejected_edit_is_reverted_on_next_frame() {
    let mut host = Host::new("abc");
    host.frame();
    let calls = Rc::new(RefCell::new(0));
    // Swap in a model that refuses edits.
    let refusing = {
        let calls = Rc::clone(&calls);
        OutlinedTextField::new(
            "abc",
            move |_| *calls.borrow_mut() += 1,
            TextFieldOptions::default(),
        )
    };
    host.field = refusing;
    host.field.handle_edit(TextFieldValue::new("abcd"));
    host.frame();
    host.frame();
    assert_eq!(host.field.displayed_value().text, "abc");
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn resting_label_leaves_the_outline_closed() {
    let mut host = Host::new("");
    assert_eq!(host.frame(), (InputPhase::UnfocusedEmpty, 0.0));
    assert_eq!(host.gaps, [0.0]);

    let mut scope = DrawScopeDefault::new(Size::new(360.0, 56.0));
    host.field.draw(&mut scope, &host.ctx);
    let [DrawPrimitive::Path { path, stroke, .. }] = scope.primitives() else {
        panic!("expected a single outline");
    };
    assert_eq!(stroke.width, 1.0);
    assert!(path.is_closed());
}

#[test]
fn border_gap_opens_as_the_label_floats() {
    let mut host = Host::new("");
    host.frame();
    host.focus.set_focused(true);
    let mut driver = FrameDriver::default();
    driver.run(12, |_| host.frame());
    host.frame();

    assert_eq!(host.gaps.first().copied(), Some(0.0));
    assert!(host.gaps.windows(2).all(|pair| pair[1] >= pair[0]));
    // Settled: 30 wide floated label plus 4dp either side.
    assert_eq!(host.gaps.last().copied(), Some(38.0));
    assert!(host.gaps.iter().any(|gap| *gap > 8.0 && *gap < 38.0));
}
