// Host-side tests for press-radius growth.

use grid_core::radius::{elapsed_radius, RadiusConfig};
use grid_core::{DeviceClass, RadiusController, RadiusGrowth, Variant, VariantConfig};

fn controller(variant: Variant, device: DeviceClass) -> RadiusController {
    RadiusController::new(VariantConfig::default_for(variant).radius_config(), device)
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn elapsed_growth_is_linear_then_capped() {
    assert!(approx(elapsed_radius(100.0, 150.0, 400.0, 1.0), 250.0));
    assert!(approx(elapsed_radius(100.0, 150.0, 400.0, 2.0), 400.0));
    assert!(approx(elapsed_radius(100.0, 150.0, 400.0, -1.0), 100.0));

    let mut r = controller(Variant::SpreadBw, DeviceClass::Desktop);
    r.press(0.0);
    r.update(1000.0);
    assert!(approx(r.radius(), 250.0));
    r.update(2000.0);
    assert!(approx(r.radius(), 400.0));
    r.update(10_000.0);
    assert!(approx(r.radius(), 400.0));
    r.release();
    assert!(approx(r.radius(), 100.0));
    r.update(11_000.0);
    assert!(approx(r.radius(), 100.0));
}

#[test]
fn touch_devices_grow_at_a_third_of_the_rate() {
    let mut r = controller(Variant::SpreadBw, DeviceClass::Touch);
    assert!(approx(r.config().growth_rate, 50.0));
    r.press(0.0);
    r.update(1000.0);
    assert!(approx(r.radius(), 150.0));

    let stepped = controller(Variant::PianoBw, DeviceClass::Touch);
    assert!(approx(stepped.config().growth_rate, 100.0 / 3.0));

    match controller(Variant::PressGrow, DeviceClass::Touch).config().growth {
        RadiusGrowth::Eased { grow_speed, shrink_speed, .. } => {
            assert!(approx(grow_speed, 0.01));
            assert!(approx(shrink_speed, 0.025));
        }
        other => panic!("unexpected growth {other:?}"),
    }
}

#[test]
fn classification_needs_touch_and_a_narrow_viewport() {
    assert_eq!(DeviceClass::classify(true, 400.0), DeviceClass::Touch);
    assert_eq!(DeviceClass::classify(true, 1280.0), DeviceClass::Desktop);
    assert_eq!(DeviceClass::classify(false, 400.0), DeviceClass::Desktop);
}

#[test]
fn stepped_radius_advances_per_tick_and_resets_on_press() {
    let mut r = controller(Variant::PianoBw, DeviceClass::Desktop);
    r.press(0.0);
    for _ in 0..60 {
        assert!(r.step_tick());
    }
    assert!(approx(r.radius(), 150.0));
    r.update(5000.0);
    assert!(approx(r.radius(), 150.0));
    r.release();
    assert!(approx(r.radius(), 50.0));
    r.press(6000.0);
    assert!(approx(r.radius(), 50.0));
}

#[test]
fn smoothed_radius_lerps_toward_the_elapsed_target() {
    let mut r = controller(Variant::SpreadColor, DeviceClass::Desktop);
    r.press(0.0);
    r.update(1000.0);
    // 100 + (250 - 100) * 0.05
    assert!(approx(r.radius(), 107.5));
    r.release();
    let before = r.radius();
    r.update(1016.0);
    assert!(r.radius() < before && r.radius() > 100.0);
}

#[test]
fn eased_radius_stays_between_base_and_max() {
    let mut r = controller(Variant::PressGrow, DeviceClass::Desktop);
    r.press(0.0);
    let mut last = r.radius();
    for frame in 1..=600 {
        r.update(frame as f64 * 16.0);
        assert!(r.radius() >= last && r.radius() <= 400.0);
        last = r.radius();
    }
    assert!(r.radius() > 399.0);

    r.release();
    for frame in 601..=1200 {
        r.update(frame as f64 * 16.0);
        assert!(r.radius() <= last && r.radius() >= 100.0);
        last = r.radius();
    }
    assert!(r.radius() < 101.0);
}

#[test]
fn max_below_base_is_raised_to_base() {
    let r = RadiusController::new(
        RadiusConfig {
            base: 200.0,
            max: 50.0,
            growth_rate: 10.0,
            growth: RadiusGrowth::Elapsed,
        },
        DeviceClass::Desktop,
    );
    assert_eq!(r.config().max, 200.0);
    assert_eq!(r.radius(), 200.0);
}
