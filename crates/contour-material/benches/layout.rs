use contour_foundation::InteractionSource;
use contour_material::{
    OutlinedTextField, OutlinedTextFieldMeasurePolicy, PlainTextValue, SlotDecoration,
    TextFieldOptions, TextFieldSlots,
};
use contour_testing::{FixedMeasurable, FRAME};
use contour_ui_graphics::{DrawScopeDefault, Size};
use contour_ui_layout::{Constraints, LayoutContext, LayoutDirection};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const ROOT_SIZE: Size = Size::new(360.0, 640.0);
const PROGRESS_SAMPLES: &[f32] = &[0.0, 0.5, 1.0];

struct Slots {
    leading: FixedMeasurable,
    trailing: FixedMeasurable,
    label: FixedMeasurable,
    placeholder: FixedMeasurable,
    input: FixedMeasurable,
}

impl Slots {
    fn new() -> Self {
        Self {
            leading: FixedMeasurable::new(1, 24.0, 24.0),
            trailing: FixedMeasurable::new(2, 24.0, 24.0),
            label: FixedMeasurable::new(3, 60.0, 20.0),
            placeholder: FixedMeasurable::new(4, 80.0, 20.0),
            input: FixedMeasurable::new(5, 100.0, 20.0),
        }
    }

    fn slots(&self) -> TextFieldSlots<'_> {
        TextFieldSlots::new(&self.input)
            .with_leading(Some(&self.leading))
            .with_trailing(Some(&self.trailing))
            .with_label(Some(&self.label))
            .with_placeholder(Some(&self.placeholder))
    }
}

fn bench_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure_slots");
    let fixture = Slots::new();
    let constraints = Constraints::loose(ROOT_SIZE.width, ROOT_SIZE.height);
    for &progress in PROGRESS_SAMPLES {
        for direction in [LayoutDirection::Ltr, LayoutDirection::Rtl] {
            let ctx = LayoutContext::default().with_direction(direction);
            group.bench_with_input(
                BenchmarkId::new(format!("{direction:?}"), progress),
                &progress,
                |b, &progress| {
                    let policy = OutlinedTextFieldMeasurePolicy::new(true, progress);
                    b.iter(|| {
                        let measured = policy.measure_slots(&fixture.slots(), constraints, &ctx);
                        black_box(measured);
                    });
                },
            );
        }
    }
    group.finish();
}

fn labelled_field(focus: &InteractionSource) -> OutlinedTextField<PlainTextValue> {
    let options = TextFieldOptions::new()
        .with_single_line(true)
        .with_interaction_source(focus.clone())
        .with_label(|decoration: &SlotDecoration| {
            let font_size = decoration.text_style.font_size.unwrap_or(16.0);
            FixedMeasurable::new(3, 5.0 * font_size * 0.5, font_size * 1.25).boxed()
        })
        .with_placeholder(|_: &SlotDecoration| FixedMeasurable::new(4, 80.0, 20.0).boxed());
    OutlinedTextField::new("", |_| {}, options)
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");
    let ctx = LayoutContext::default();
    let constraints = Constraints::loose(ROOT_SIZE.width, ROOT_SIZE.height);

    group.bench_function("idle", |b| {
        let focus = InteractionSource::new();
        let mut field = labelled_field(&focus);
        b.iter(|| {
            field.advance(FRAME);
            let measured = field.measure(
                FixedMeasurable::new(5, 100.0, 20.0).boxed(),
                constraints,
                &ctx,
            );
            let mut scope = DrawScopeDefault::new(measured.result.size);
            field.draw(&mut scope, &ctx);
            black_box(scope);
        });
    });

    group.bench_function("focus_transition", |b| {
        let focus = InteractionSource::new();
        let mut field = labelled_field(&focus);
        let mut focused = false;
        b.iter(|| {
            if !field.needs_frame() {
                focused = !focused;
                focus.set_focused(focused);
            }
            field.advance(FRAME);
            let measured = field.measure(
                FixedMeasurable::new(5, 100.0, 20.0).boxed(),
                constraints,
                &ctx,
            );
            let mut scope = DrawScopeDefault::new(measured.result.size);
            field.draw(&mut scope, &ctx);
            black_box(scope);
        });
    });
    group.finish();
}

criterion_group!(layout, bench_measure, bench_frame);
criterion_main!(layout);
