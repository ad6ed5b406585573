// Host-side tests for the cell -> sprite mapping.

use glam::Vec2;
use grid_core::cell::TweenTiming;
use grid_core::config::Driver;
use grid_core::visual::sprite;
use grid_core::{Cell, Glyph, Rgb, Variant, VariantConfig};

fn piano_color_timing(config: &VariantConfig) -> TweenTiming {
    match config.driver() {
        Driver::Piano(plan) => plan.timing,
        other => panic!("unexpected driver {other:?}"),
    }
}

#[test]
fn piano_color_phases_pick_colour_and_alpha() {
    let config = VariantConfig::default_for(Variant::PianoColor);
    let timing = piano_color_timing(&config);
    let mut cell = Cell::new(0, Vec2::new(10.0, 22.5), config.rest_values());
    assert!(!sprite(&cell, &config).is_visible());

    cell.begin_grow(0.0, &timing);
    cell.step(500.0, &timing);
    let growing = sprite(&cell, &config);
    assert!(growing.is_visible());
    assert_eq!(growing.color, Rgb::new(0xC8, 0x80, 0xFD));
    assert!(growing.width > 1.2 && growing.width < 10.0);

    cell.step(1000.0, &timing);
    let held = sprite(&cell, &config);
    assert_eq!(held.color, Rgb::new(0xF0, 0x3D, 0x2A));
    assert!((held.width - 10.0).abs() < 1e-5);
    assert_eq!(held.alpha, 1.0);

    cell.request_shrink(1000.0, &timing);
    cell.step(1750.0, &timing);
    let fading = sprite(&cell, &config);
    assert_eq!(fading.color, held.color);
    assert!(fading.alpha > 0.0 && fading.alpha < 1.0);
    assert!((fading.alpha - cell.values().level).abs() < 1e-6);
}

#[test]
fn piano_bw_scales_line_width() {
    let config = VariantConfig::default_for(Variant::PianoBw);
    let cell = Cell::new(0, Vec2::ZERO, config.rest_values());
    let s = sprite(&cell, &config);
    assert!((s.width - 1.2).abs() < 1e-6);
    assert_eq!(s.height, 45.0);
    assert_eq!(s.glyph, Glyph::Line);
    assert_eq!(s.color, Rgb::BLACK);
}

#[test]
fn spread_color_is_invisible_at_rest() {
    let config = VariantConfig::default_for(Variant::SpreadColor);
    let cell = Cell::new(0, Vec2::ZERO, config.rest_values());
    let s = sprite(&cell, &config);
    assert_eq!(s.alpha, 0.0);
    assert!(!s.is_visible());
    assert_eq!(s.color, Rgb::new(200, 128, 253));
}

#[test]
fn cursor_glyph_has_outline_and_square_box() {
    let config = VariantConfig::default_for(Variant::CursorAnxiety);
    let cell = Cell::new(3, Vec2::new(40.0, 40.0), config.rest_values());
    let s = sprite(&cell, &config);
    assert_eq!(s.glyph, Glyph::Cursor);
    assert_eq!((s.width, s.height), (54.0, 54.0));
    assert_eq!(s.stroke, Some(Rgb::WHITE));
    assert_eq!(s.origin(), Vec2::new(40.0, 40.0));
}
