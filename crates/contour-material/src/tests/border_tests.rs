use super::*;
use contour_ui_graphics::{Density, DrawPrimitive, DrawScopeDefault, PathCommand, Point};

const SIZE: Size = Size::new(100.0, 56.0);

fn params(label_width: Option<f32>) -> OutlinedBorderParams {
    let ctx = LayoutContext::default();
    let mut params = OutlinedBorderParams::new(&ctx);
    params.color = Color::BLACK;
    params.set_label_width(label_width, 1.0, &ctx);
    params
}

fn first_point(path: &Path) -> Option<Point> {
    match path.commands().first() {
        Some(PathCommand::MoveTo(point)) => Some(*point),
        _ => None,
    }
}

#[test]
fn gap_width_adds_inner_padding() {
    assert_eq!(params(Some(40.0)).label_gap_width, 48.0);
    assert_eq!(params(None).label_gap_width, 0.0);
    assert_eq!(params(Some(0.0)).label_gap_width, 0.0);
}

#[test]
fn gap_follows_label_progress() {
    let ctx = LayoutContext::default();
    let mut params = OutlinedBorderParams::new(&ctx);

    params.set_label_width(Some(40.0), 0.0, &ctx);
    assert_eq!(params.label_gap_width, 0.0);
    assert!(outline_path(SIZE, &params, 12.0, LayoutDirection::Ltr).is_closed());

    params.set_label_width(Some(40.0), 0.5, &ctx);
    assert_eq!(params.label_gap_width, 28.0);

    params.set_label_width(Some(40.0), 1.0, &ctx);
    assert_eq!(params.label_gap_width, 48.0);
}

#[test]
fn gap_scales_with_density() {
    let ctx = LayoutContext::new(Density::new(2.0, 1.0), LayoutDirection::Ltr);
    let mut params = OutlinedBorderParams::new(&ctx);
    params.set_label_width(Some(40.0), 1.0, &ctx);
    assert_eq!(params.label_gap_width, 56.0);
    assert_eq!(params.corner_radius, 8.0);
    assert_eq!(label_gap_start(&ctx), 24.0);
}

#[test]
fn outline_without_label_is_closed() {
    let path = outline_path(SIZE, &params(None), 12.0, LayoutDirection::Ltr);
    assert!(path.is_closed());
    assert_eq!(first_point(&path), Some(Point::new(4.5, 0.5)));
}

#[test]
fn outline_with_label_leaves_gap_after_start_offset() {
    let path = outline_path(SIZE, &params(Some(40.0)), 12.0, LayoutDirection::Ltr);
    assert!(!path.is_closed());
    assert_eq!(first_point(&path), Some(Point::new(60.0, 0.5)));
    assert_eq!(path.current_point(), Some(Point::new(12.0, 0.5)));
    let arcs = path
        .commands()
        .iter()
        .filter(|command| matches!(command, PathCommand::ArcTo { .. }))
        .count();
    assert_eq!(arcs, 4);
}

#[test]
fn gap_mirrors_in_rtl() {
    let path = outline_path(SIZE, &params(Some(40.0)), 12.0, LayoutDirection::Rtl);
    assert_eq!(first_point(&path), Some(Point::new(88.0, 0.5)));
    assert_eq!(path.current_point(), Some(Point::new(40.0, 0.5)));
}

#[test]
fn gap_is_clamped_to_straight_top_edge() {
    let path = outline_path(SIZE, &params(Some(200.0)), 12.0, LayoutDirection::Ltr);
    assert_eq!(first_point(&path), Some(Point::new(95.5, 0.5)));
    assert_eq!(path.current_point(), Some(Point::new(12.0, 0.5)));
}

#[test]
fn corner_radius_is_clamped_to_half_the_smaller_side() {
    let params = params(None);
    assert_eq!(params.corner_radius, 4.0);
    assert_eq!(params.resolved_corner_radius(Size::new(100.0, 6.0)), 3.0);
    assert_eq!(params.resolved_corner_radius(SIZE), 4.0);
}

#[test]
fn draws_one_stroked_path() {
    let mut scope = DrawScopeDefault::new(SIZE);
    let mut params = params(Some(40.0));
    params.border_width = 2.0;
    draw_outlined_border(&mut scope, &params, &LayoutContext::default());

    let primitives = scope.primitives();
    assert_eq!(primitives.len(), 1);
    let DrawPrimitive::Path {
        path,
        brush,
        stroke,
    } = &primitives[0];
    assert_eq!(stroke.width, 2.0);
    assert_eq!(brush.color(), Color::BLACK);
    // Inset by half the stroke.
    assert_eq!(first_point(path), Some(Point::new(60.0, 1.0)));
}

#[test]
fn empty_box_draws_nothing() {
    let mut scope = DrawScopeDefault::new(Size::ZERO);
    draw_outlined_border(&mut scope, &params(None), &LayoutContext::default());
    assert!(scope.primitives().is_empty());
}
