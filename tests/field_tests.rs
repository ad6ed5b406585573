// Host-side tests for the continuous pointer fields.

use glam::Vec2;
use grid_core::config::Driver;
use grid_core::field::{influence, shaped_influence, FieldDriver};
use grid_core::{Cell, Phase, PointerState, Variant, VariantConfig};

fn field(variant: Variant) -> FieldDriver {
    match VariantConfig::default_for(variant).driver() {
        Driver::Field(f) => f,
        other => panic!("{variant} is not a field variant: {other:?}"),
    }
}

fn pointer(x: f32, y: f32, pressed: bool) -> PointerState {
    PointerState {
        x,
        y,
        active: true,
        pressed,
    }
}

#[test]
fn falloff_is_linear_and_monotonic() {
    assert!((influence(50.0, 100.0) - 0.5).abs() < 1e-6);
    assert!((shaped_influence(50.0, 100.0, 1.5) - 0.353_553).abs() < 1e-4);
    let mut last = f32::MAX;
    for d in 0..=120 {
        let v = shaped_influence(d as f32, 100.0, 1.5);
        assert!(v <= last);
        assert!((0.0..=1.0).contains(&v));
        last = v;
    }
    assert_eq!(last, 0.0);
}

#[test]
fn spread_pushes_away_from_the_pointer() {
    let f = field(Variant::SpreadBw);
    let (left, reached) = f.target(Vec2::new(50.0, 0.0), &pointer(100.0, 0.0, false), 100.0);
    assert!(reached);
    assert!((left.offset.x + 20.0).abs() < 1e-4);
    assert_eq!(left.offset.y, 0.0);

    let (right, _) = f.target(Vec2::new(150.0, 0.0), &pointer(100.0, 0.0, false), 100.0);
    assert!((right.offset.x - 20.0).abs() < 1e-4);

    let (far, reached) = f.target(Vec2::new(400.0, 0.0), &pointer(100.0, 0.0, false), 100.0);
    assert!(!reached);
    assert_eq!(far.offset, Vec2::ZERO);
}

#[test]
fn inactive_pointer_targets_rest() {
    let f = field(Variant::PressGrow);
    let idle = PointerState::default();
    let (t, reached) = f.target(Vec2::new(10.0, 10.0), &idle, 400.0);
    assert!(!reached);
    assert_eq!(t, f.rest);
}

#[test]
fn turn_faces_the_pointer_with_smooth_falloff() {
    let f = field(Variant::PressGrow);
    // Pointer straight to the right at half the radius: 0 deg + 90 deg offset.
    let (t, _) = f.target(Vec2::ZERO, &pointer(50.0, 0.0, false), 100.0);
    assert!((t.rotation - 90.0 * 0.353_553).abs() < 1e-2);
}

#[test]
fn anxiety_releases_everything_while_pressed() {
    let f = field(Variant::CursorAnxiety);
    let (free, reached) = f.target(Vec2::ZERO, &pointer(100.0, 0.0, false), 300.0);
    assert!(reached);
    assert!(free.offset.x > 0.0);
    assert!(free.rotation != 0.0);

    let (held, reached) = f.target(Vec2::ZERO, &pointer(100.0, 0.0, true), 300.0);
    assert!(!reached);
    assert_eq!(held, f.rest);
    assert!(f.smoothing(true).offset > f.smoothing(false).offset);
}

#[test]
fn spread_color_snaps_colour_and_opacity() {
    let f = field(Variant::SpreadColor);
    let mut c = Cell::new(0, Vec2::new(50.0, 0.0), f.rest);
    assert_eq!(c.values().opacity, 0.0);
    assert!(f.drive(&mut c, &pointer(100.0, 0.0, false), 100.0, 16.0));
    assert_eq!(c.values().opacity, 1.0);
    assert!((c.values().color_mix - 0.5).abs() < 1e-4);
    // Width glides.
    assert!(c.values().width > 1.5 && c.values().width < 8.25);

    f.drive(&mut c, &pointer(900.0, 0.0, false), 100.0, 32.0);
    assert_eq!(c.values().opacity, 0.0);
    assert_eq!(c.values().color_mix, 0.0);
}

#[test]
fn driven_cell_activates_then_settles() {
    let f = field(Variant::SpreadBw);
    let mut c = Cell::new(0, Vec2::new(50.0, 0.0), f.rest);
    f.drive(&mut c, &pointer(100.0, 0.0, false), 100.0, 16.0);
    assert_eq!(c.phase(), Phase::Active);
    assert_eq!(c.activated_at(), 16.0);
    f.drive(&mut c, &pointer(100.0, 0.0, false), 100.0, 32.0);
    assert_eq!(c.activated_at(), 16.0);

    let away = PointerState::default();
    assert!(f.drive(&mut c, &away, 100.0, 48.0));
    assert_eq!(c.phase(), Phase::Shrinking);
    let mut now = 48.0;
    while c.phase() != Phase::Idle {
        now += 16.0;
        f.drive(&mut c, &away, 100.0, now);
        assert!(now < 10_000.0, "cell never settled");
    }
    assert!(c.values().offset.x.abs() < 0.01);
}
