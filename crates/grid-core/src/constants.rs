// Timing, sizing and falloff constants shared by every variant.

// Radius sweep while pressed (discrete variants)
pub const SWEEP_RATE_HZ: f64 = 60.0;
pub const SWEEP_INTERVAL_MS: f64 = 1000.0 / SWEEP_RATE_HZ;
pub const SWEEP_MAX_CATCH_UP_TICKS: u32 = 30; // bound work after a stalled tab

// Resize debounce before the grid is rebuilt
pub const RESIZE_DEBOUNCE_MS: f64 = 200.0;

// Device policy
pub const TOUCH_VIEWPORT_MAX_WIDTH: f32 = 768.0;
pub const TOUCH_GROWTH_DIVISOR: f32 = 3.0;

// Grid
pub const MIN_CELL_SIZE: f32 = 1.0; // px; smaller sizes are clamped
pub const DENSE_GRID_CELL_CAP: usize = 2000;
pub const LARGE_GRID_WARN_CELLS: usize = 100_000; // uncapped layouts above this are logged

// Release wave
pub const PIANO_BW_STAGGER_MS: f64 = 10.0;
pub const PIANO_COLOR_STAGGER_MS: f64 = 5.0;

// Influence shaping
pub const SMOOTH_FALLOFF_EXPONENT: f32 = 1.5;

// Continuous cells closer than this to their rest values count as idle
pub const REST_EPSILON: f32 = 0.01;

// Glyph orientation
pub const LINE_ANGLE_OFFSET_DEG: f32 = 90.0; // lines are vertical at rest
pub const CURSOR_ANGLE_OFFSET_DEG: f32 = 135.0; // arrow glyph points up-left

// Cursor anxiety drift
pub const CURSOR_MAX_DRIFT_PX: f32 = 50.0;
pub const CURSOR_DRIFT_NEAR_POWER: f32 = 0.3;
pub const CURSOR_DRIFT_EDGE_POWER: i32 = 3;
pub const CURSOR_RETURN_LERP: f32 = 0.08; // used for every channel while pressed
pub const CURSOR_DRIFT_LERP: f32 = 0.01;
pub const CURSOR_OUTPUT_STEP: f32 = 0.1; // rendered values are rounded to this step

// Rotation variant
pub const ROTATION_RETURN_MS: f64 = 1000.0;
