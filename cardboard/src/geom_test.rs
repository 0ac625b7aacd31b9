#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Point
// =============================================================

#[test]
fn distance_sq_is_symmetric() {
    let a = Point::new(1.0, 2.0);
    let b = Point::new(4.0, 6.0);
    assert_eq!(a.distance_sq(b), 25.0);
    assert_eq!(b.distance_sq(a), 25.0);
}

#[test]
fn sub_is_componentwise() {
    assert_eq!(Point::new(5.0, 3.0).sub(Point::new(2.0, 7.0)), Point::new(3.0, -4.0));
}

// =============================================================
// Rect
// =============================================================

#[test]
fn center_is_midpoint() {
    let r = Rect::new(10.0, 20.0, 100.0, 40.0);
    assert_eq!(r.center(), Point::new(60.0, 40.0));
}

#[test]
fn contains_includes_edges() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(r.contains(Point::new(0.0, 0.0)));
    assert!(r.contains(Point::new(10.0, 10.0)));
    assert!(r.contains(Point::new(5.0, 5.0)));
    assert!(!r.contains(Point::new(10.5, 5.0)));
    assert!(!r.contains(Point::new(5.0, -0.1)));
}

// =============================================================
// Viewport
// =============================================================

#[test]
fn unknown_viewport_does_not_clamp() {
    let vp = Viewport::default();
    let offset = Point::new(-500.0, 9000.0);
    assert_eq!(vp.clamp_offset(&Rect::new(0.0, 0.0, 10.0, 10.0), offset), offset);
}

#[test]
fn clamp_keeps_rect_inside_window() {
    let vp = Viewport::new(800.0, 600.0);
    let rect = Rect::new(100.0, 100.0, 200.0, 100.0);
    assert_eq!(vp.clamp_offset(&rect, Point::new(-300.0, 0.0)), Point::new(-100.0, 0.0));
    assert_eq!(vp.clamp_offset(&rect, Point::new(900.0, 900.0)), Point::new(500.0, 400.0));
    assert_eq!(vp.clamp_offset(&rect, Point::new(20.0, -20.0)), Point::new(20.0, -20.0));
}

#[test]
fn oversized_rect_pins_to_top_left() {
    let vp = Viewport::new(100.0, 100.0);
    let rect = Rect::new(10.0, 10.0, 300.0, 50.0);
    assert_eq!(vp.clamp_offset(&rect, Point::new(40.0, 0.0)), Point::new(-10.0, 0.0));
}
