// DOM wiring
pub const AUTO_MOUNT_CANVAS_ID: &str = "app-canvas";
pub const CONFIG_ATTRIBUTE: &str = "data-config";

// Cursor glyph, authored in a 48x48 box centred on (24, 24)
pub const CURSOR_PATH: &str = "M10 6L10 32L18 26L24 38L28 36L22 24L32 24Z";
pub const CURSOR_VIEWBOX: f64 = 48.0;
pub const CURSOR_STROKE_WIDTH: f64 = 2.0;
