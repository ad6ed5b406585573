// Host-side scenario tests for the engine on a virtual clock.

use glam::Vec2;
use grid_core::{DeviceClass, Engine, Phase, PointerInput, Variant, VariantConfig, Viewport};

const FRAME_MS: f64 = 16.0;

fn engine(variant: Variant) -> Engine {
    Engine::new(
        VariantConfig::default_for(variant),
        Viewport::new(800.0, 600.0),
        DeviceClass::Desktop,
    )
}

/// Advance frame by frame from `from` to `to`, checking the per-cell timer
/// bound on every frame.
fn run(e: &mut Engine, from: f64, to: f64) {
    let mut now = from;
    while now < to {
        now = (now + FRAME_MS).min(to);
        e.advance(now);
        assert_single_timers(e);
    }
}

fn assert_single_timers(e: &Engine) {
    for i in 0..e.cells().len() {
        assert!(e.timers_for(i) <= 1, "cell {i} has {} timers", e.timers_for(i));
    }
}

fn count(e: &Engine, phase: Phase) -> usize {
    e.cells().iter().filter(|c| c.phase() == phase).count()
}

#[test]
fn mount_builds_the_first_epoch() {
    let e = engine(Variant::PianoBw);
    assert_eq!(e.epoch(), 1);
    assert_eq!(e.cells().len(), 520);
    assert_eq!(e.live_timers(), 0);
    assert_eq!(count(&e, Phase::Idle), 520);
}

#[test]
fn piano_press_grows_radius_then_release_staggers_back_to_idle() {
    let mut e = engine(Variant::PianoBw);
    e.handle_input(PointerInput::MouseDown { x: 400.0, y: 300.0 }, 0.0);
    assert!(e.sweeping());
    let first = count(&e, Phase::Growing);
    assert!(first > 0);

    run(&mut e, 0.0, 1000.0);
    assert!(e.radius().radius() > 140.0);
    let engaged = e.cells().iter().filter(|c| c.phase().is_engaged()).count();
    assert!(engaged > first);
    // Nothing outside the radius was touched.
    let r2 = e.radius().radius() * e.radius().radius();
    let centre = Vec2::new(400.0, 300.0);
    for c in e.cells().iter().filter(|c| c.phase() != Phase::Idle) {
        assert!(c.center().distance_squared(centre) <= r2 + 1.0);
    }

    e.handle_input(PointerInput::MouseUp, 1000.0);
    assert!(!e.sweeping());
    assert_eq!(e.radius().radius(), 50.0);
    assert_eq!(e.live_timers(), engaged);
    assert_single_timers(&e);

    run(&mut e, 1000.0, 6000.0);
    assert_eq!(count(&e, Phase::Idle), e.cells().len());
    assert_eq!(e.live_timers(), 0);
    assert_eq!(e.live_frames(), 0);
    assert!(e.cells().iter().all(|c| c.values().level == 0.0));
}

#[test]
fn release_never_cuts_growth_short() {
    let mut e = engine(Variant::PianoBw);
    e.handle_input(PointerInput::MouseDown { x: 400.0, y: 300.0 }, 0.0);
    e.advance(16.0);
    e.handle_input(PointerInput::MouseUp, 100.0);
    e.advance(200.0);
    let growing: Vec<usize> = e
        .cells()
        .iter()
        .filter(|c| c.phase() == Phase::Growing)
        .map(|c| c.index())
        .collect();
    assert!(!growing.is_empty());
    for &i in &growing {
        assert!(e.cells()[i].shrink_pending());
    }
    // Growth takes 500ms from activation at t=0.
    e.advance(499.0);
    assert!(growing.iter().all(|&i| e.cells()[i].phase() == Phase::Growing));
    e.advance(500.0);
    for &i in &growing {
        assert_eq!(e.cells()[i].phase(), Phase::Shrinking);
        assert_eq!(e.cells()[i].values().level, 1.0);
    }
}

#[test]
fn piano_color_leave_waits_for_growth_then_delay() {
    let mut e = engine(Variant::PianoColor);
    e.handle_input(PointerInput::MouseMove { x: 25.0, y: 50.0 }, 0.0);
    let i = e.hovered().unwrap();
    assert_eq!(e.cells()[i].phase(), Phase::Growing);

    e.handle_input(PointerInput::MouseLeave, 100.0);
    assert_eq!(e.hovered(), None);
    assert!(e.cells()[i].shrink_pending());

    e.advance(1000.0);
    assert_eq!(e.cells()[i].phase(), Phase::Active);
    assert_eq!(e.timers_for(i), 1);
    e.advance(2100.0);
    assert_eq!(e.cells()[i].phase(), Phase::Active);
    e.advance(2200.0);
    assert_eq!(e.cells()[i].phase(), Phase::Shrinking);
    e.advance(3700.0);
    assert_eq!(e.cells()[i].phase(), Phase::Idle);
    assert_eq!(e.live_timers(), 0);
}

#[test]
fn piano_reenter_cancels_pending_shrink() {
    let mut e = engine(Variant::PianoColor);
    e.handle_input(PointerInput::MouseMove { x: 25.0, y: 50.0 }, 0.0);
    let i = e.hovered().unwrap();
    e.advance(1000.0);
    e.handle_input(PointerInput::MouseLeave, 1000.0);
    assert_eq!(e.timers_for(i), 1);
    e.handle_input(PointerInput::MouseMove { x: 25.0, y: 50.0 }, 1500.0);
    assert_eq!(e.timers_for(i), 0);
    e.advance(5000.0);
    assert_eq!(e.cells()[i].phase(), Phase::Active);
}

#[test]
fn rotation_spins_holds_and_returns() {
    let mut e = engine(Variant::RotationBw);
    e.handle_input(PointerInput::MouseMove { x: 4.0, y: 40.0 }, 0.0);
    assert_eq!(e.hovered(), Some(0));
    e.advance(50.0);
    assert!(e.cells()[0].is_spinning());
    let held = e.cells()[0].values().rotation;
    assert!(held > 0.0 && held < 360.0);

    e.handle_input(PointerInput::MouseMove { x: 400.0, y: 300.0 }, 50.0);
    assert!(!e.cells()[0].is_spinning());
    assert_eq!(e.timers_for(0), 1);
    run(&mut e, 50.0, 2000.0);
    assert_eq!(e.cells()[0].values().rotation, held);
    run(&mut e, 2000.0, 2100.0);
    assert_eq!(e.cells()[0].phase(), Phase::Shrinking);
    run(&mut e, 2100.0, 3100.0);
    assert_eq!(e.cells()[0].phase(), Phase::Idle);
    assert_eq!(e.cells()[0].values().rotation, 0.0);
}

/// Ending a press by lifting off the surface must still hand the cell back
/// to the hold-then-return path.
fn assert_returns_home_after_release_edge(e: &mut Engine, held: f32) {
    assert!(!e.cells()[0].is_spinning());
    assert_eq!(e.hovered(), None);
    assert_eq!(e.timers_for(0), 1);
    run(e, 50.0, 2000.0);
    assert_eq!(e.cells()[0].values().rotation, held);
    run(e, 2000.0, 2100.0);
    assert_eq!(e.cells()[0].phase(), Phase::Shrinking);
    run(e, 2100.0, 3100.0);
    assert_eq!(e.cells()[0].phase(), Phase::Idle);
    assert_eq!(e.cells()[0].values().rotation, 0.0);
}

#[test]
fn touch_end_counts_as_leave_for_rotation() {
    let mut e = engine(Variant::RotationBw);
    e.handle_input(PointerInput::TouchStart { x: 4.0, y: 40.0 }, 0.0);
    assert_eq!(e.hovered(), Some(0));
    assert!(e.cells()[0].is_spinning());
    e.advance(50.0);
    let held = e.cells()[0].values().rotation;
    assert!(held > 0.0);

    e.handle_input(PointerInput::TouchEnd, 50.0);
    assert_returns_home_after_release_edge(&mut e, held);
}

#[test]
fn leaving_while_pressed_returns_rotation_home() {
    let mut e = engine(Variant::RotationBw);
    e.handle_input(PointerInput::MouseMove { x: 4.0, y: 40.0 }, 0.0);
    e.handle_input(PointerInput::MouseDown { x: 4.0, y: 40.0 }, 0.0);
    assert!(e.cells()[0].is_spinning());
    e.advance(50.0);
    let held = e.cells()[0].values().rotation;
    assert!(held > 0.0);

    e.handle_input(PointerInput::MouseLeave, 50.0);
    assert_returns_home_after_release_edge(&mut e, held);
}

#[test]
fn rapid_hover_toggling_keeps_one_timer() {
    let mut e = engine(Variant::RotationBw);
    let mut now = 0.0;
    for _ in 0..20 {
        e.handle_input(PointerInput::MouseMove { x: 4.0, y: 40.0 }, now);
        now += 5.0;
        e.advance(now);
        e.handle_input(PointerInput::MouseMove { x: 400.0, y: 300.0 }, now);
        now += 5.0;
        e.advance(now);
        assert!(e.timers_for(0) <= 1);
    }
    assert_eq!(e.timers_for(0), 1);
}

#[test]
fn rebuild_orphans_old_timers_and_drops_them_when_due() {
    let mut e = engine(Variant::PianoBw);
    e.handle_input(PointerInput::MouseDown { x: 400.0, y: 300.0 }, 0.0);
    run(&mut e, 0.0, 600.0);
    e.handle_input(PointerInput::MouseUp, 600.0);
    let armed = e.live_timers();
    assert!(armed > 0);

    e.reconfigure(VariantConfig::default_for(Variant::PianoBw), 600.0);
    assert_eq!(e.epoch(), 2);
    assert_eq!(e.live_timers(), 0);
    assert_eq!(e.scheduler().live(), armed);
    assert_eq!(count(&e, Phase::Idle), e.cells().len());

    e.advance(5000.0);
    assert_eq!(e.scheduler().stale_dropped(), armed as u64);
    assert_eq!(e.scheduler().live(), 0);
    assert_eq!(count(&e, Phase::Idle), e.cells().len());
}

#[test]
fn resize_is_debounced_into_one_rebuild() {
    let mut e = engine(Variant::PianoBw);
    e.request_resize(Viewport::new(400.0, 300.0), DeviceClass::Desktop, 0.0);
    e.advance(150.0);
    e.request_resize(Viewport::new(1000.0, 900.0), DeviceClass::Touch, 150.0);
    e.advance(300.0);
    assert!(e.resize_pending());
    assert_eq!(e.epoch(), 1);
    e.advance(350.0);
    assert!(!e.resize_pending());
    assert_eq!(e.epoch(), 2);
    assert_eq!(e.viewport(), Viewport::new(1000.0, 900.0));
    assert_eq!(e.device(), DeviceClass::Touch);
    assert_eq!(e.cells().len(), 20 * 50);
}

#[test]
fn teardown_is_idempotent_and_final() {
    let mut e = engine(Variant::PianoBw);
    e.handle_input(PointerInput::MouseDown { x: 400.0, y: 300.0 }, 0.0);
    e.handle_input(PointerInput::MouseUp, 10.0);
    assert!(e.teardown());
    assert!(!e.teardown());
    assert!(e.is_torn_down());
    assert!(e.cells().is_empty());
    assert_eq!(e.scheduler().live(), 0);

    let outcome = e.handle_input(PointerInput::TouchStart { x: 1.0, y: 1.0 }, 20.0);
    assert!(!outcome.prevent_default);
    e.advance(10_000.0);
    e.request_resize(Viewport::new(10.0, 10.0), DeviceClass::Desktop, 30.0);
    assert!(!e.resize_pending());
    e.reconfigure(VariantConfig::default_for(Variant::SpreadBw), 40.0);
    assert!(e.cells().is_empty());
}

#[test]
fn spread_field_follows_and_releases() {
    let mut e = engine(Variant::SpreadBw);
    e.handle_input(PointerInput::MouseMove { x: 400.0, y: 300.0 }, 0.0);
    run(&mut e, 0.0, 160.0);
    let moved = e
        .cells()
        .iter()
        .filter(|c| c.values().offset.x.abs() > 1.0)
        .count();
    assert!(moved > 0);
    assert!(count(&e, Phase::Active) >= moved);

    e.handle_input(PointerInput::MouseLeave, 160.0);
    run(&mut e, 160.0, 5000.0);
    assert_eq!(count(&e, Phase::Idle), e.cells().len());
    assert_eq!(e.live_timers(), 0);
}

#[test]
fn touch_scroll_policy_per_variant() {
    let mut rotation = engine(Variant::RotationBw);
    let start = PointerInput::TouchStart { x: 10.0, y: 10.0 };
    assert!(!rotation.handle_input(start, 0.0).prevent_default);

    let mut piano = engine(Variant::PianoBw);
    assert!(piano.handle_input(start, 0.0).prevent_default);
    assert!(piano
        .handle_input(PointerInput::TouchMove { x: 30.0, y: 10.0 }, 10.0)
        .prevent_default);
    assert!(!piano.handle_input(PointerInput::TouchEnd, 20.0).prevent_default);
}

#[test]
fn sweep_catch_up_is_bounded_after_a_stall() {
    let mut e = engine(Variant::PianoBw);
    e.handle_input(PointerInput::MouseDown { x: 400.0, y: 300.0 }, 0.0);
    e.advance(60_000.0);
    // At most 30 catch-up ticks of 100/60 px.
    assert!(e.radius().radius() <= 50.0 + 30.0 * 100.0 / 60.0 + 1e-3);
    assert!(e.sweeping());
}
