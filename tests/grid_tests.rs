// Host-side tests for grid population and hit testing.

use glam::Vec2;
use grid_core::{Grid, GridLayout, Rounding, Variant, VariantConfig, Viewport};

fn layout(variant: Variant, w: f32, h: f32) -> GridLayout {
    GridLayout::compute(
        &VariantConfig::default_for(variant).grid_spec(),
        Viewport::new(w, h),
    )
}

#[test]
fn piano_bw_floors_both_axes() {
    let l = layout(Variant::PianoBw, 800.0, 600.0);
    assert_eq!((l.rows, l.cols, l.count), (13, 40, 520));
    assert_eq!(l.pitch, Vec2::new(20.0, 45.0));
}

#[test]
fn piano_color_ceils_both_axes() {
    let l = layout(Variant::PianoColor, 810.0, 600.0);
    assert_eq!((l.rows, l.cols, l.count), (14, 41, 574));
}

#[test]
fn spread_color_is_capped_unless_disabled() {
    let l = layout(Variant::SpreadColor, 1920.0, 1080.0);
    assert_eq!((l.rows, l.cols), (24, 96));
    assert_eq!(l.count, 2000);

    let uncapped = VariantConfig::from_json(r#"{"variant":"spread-color","maxCells":null}"#).unwrap();
    let l = GridLayout::compute(&uncapped.grid_spec(), Viewport::new(1920.0, 1080.0));
    assert_eq!(l.count, 2304);

    // Other variants have no ceiling by default.
    assert_eq!(layout(Variant::SpreadBw, 1920.0, 1080.0).count, 2304);
}

#[test]
fn huge_uncapped_layouts_are_flagged_before_allocation() {
    assert!(!layout(Variant::SpreadBw, 800.0, 600.0).is_oversized());
    assert!(!layout(Variant::SpreadColor, 20_000.0, 20_000.0).is_oversized());

    let l = layout(Variant::SpreadBw, 20_000.0, 20_000.0);
    assert!(l.count > 100_000);
    assert!(l.is_oversized());
}

#[test]
fn stretched_pitch_spans_the_viewport() {
    let l = layout(Variant::RotationBw, 800.0, 600.0);
    assert_eq!((l.rows, l.cols), (7, 89));
    assert!((l.pitch.x * l.cols as f32 - 800.0).abs() < 1e-3);
    assert!((l.pitch.y * l.rows as f32 - 600.0).abs() < 1e-3);
}

#[test]
fn empty_or_degenerate_viewport_has_no_cells() {
    assert_eq!(layout(Variant::PianoBw, 0.0, 600.0).count, 0);
    assert_eq!(layout(Variant::PianoBw, f32::NAN, 600.0).count, 0);
    assert_eq!(Rounding::Ceil.fit(-10.0, 20.0), 0);
    assert_eq!(Rounding::Floor.fit(100.0, 0.0), 0);
}

#[test]
fn centres_are_cached_and_hit_testing_matches() {
    let config = VariantConfig::default_for(Variant::PianoBw);
    let grid = Grid::populate(
        &config.grid_spec(),
        Viewport::new(800.0, 600.0),
        3,
        config.rest_values(),
    );
    assert_eq!(grid.epoch(), 3);
    assert_eq!(grid.cells()[0].center(), Vec2::new(10.0, 22.5));
    assert_eq!(grid.cells()[41].center(), Vec2::new(30.0, 67.5));

    assert_eq!(grid.cell_at(Vec2::new(25.0, 50.0)), Some(41));
    assert_eq!(grid.cell_at(Vec2::new(-1.0, 50.0)), None);
    // Strip past the last full column.
    assert_eq!(grid.cell_at(Vec2::new(799.0, 50.0)), Some(79));
    assert_eq!(grid.cell_at(Vec2::new(400.0, 590.0)), None);

    for (i, cell) in grid.cells().iter().enumerate() {
        assert_eq!(cell.index(), i);
        assert_eq!(grid.cell_at(cell.center()), Some(i));
    }
}
