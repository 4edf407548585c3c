use super::*;

#[test]
fn offset_reduces_bounds_without_going_negative() {
    let constraints = Constraints {
        min_width: 10.0,
        max_width: 100.0,
        min_height: 0.0,
        max_height: 40.0,
    };
    let shifted = constraints.offset(-30.0, -60.0);
    assert_eq!(shifted.min_width, 0.0);
    assert_eq!(shifted.max_width, 70.0);
    assert_eq!(shifted.min_height, 0.0);
    assert_eq!(shifted.max_height, 0.0);
}

#[test]
fn offset_keeps_infinite_max() {
    let shifted = Constraints::unbounded().offset(-16.0, -16.0);
    assert!(shifted.max_width.is_infinite());
    assert!(shifted.max_height.is_infinite());
    assert!(!shifted.is_bounded());
}

#[test]
fn offset_keeps_max_at_least_min() {
    let constraints = Constraints::tight(20.0, 20.0);
    let shifted = constraints.offset(5.0, -30.0);
    assert_eq!(shifted.min_width, 25.0);
    assert_eq!(shifted.max_width, 25.0);
    assert!(shifted.max_height >= shifted.min_height);
}

#[test]
fn with_min_size_respects_max() {
    let constraints = Constraints::loose(200.0, 40.0).with_min_size(280.0, 56.0);
    assert_eq!(constraints.min_width, 200.0);
    assert_eq!(constraints.min_height, 40.0);
}

#[test]
fn constrain_clamps_both_axes() {
    let constraints = Constraints {
        min_width: 10.0,
        max_width: 50.0,
        min_height: 5.0,
        max_height: 8.0,
    };
    assert_eq!(constraints.constrain(100.0, 1.0), (50.0, 5.0));
}
