//! Variant configuration.
//!
//! A mount is described by one JSON object tagged with `"variant"`. Every
//! other field is optional and falls back to the variant's defaults. Numbers
//! are sanitized rather than rejected; only malformed JSON, an unknown variant
//! name or an unparsable colour is an error.

use std::fmt;
use std::str::FromStr;

use glam::Vec2;
use serde::Deserialize;

use crate::cell::{CellValues, TweenTiming};
use crate::color::Rgb;
use crate::constants::{
    CURSOR_DRIFT_LERP, CURSOR_RETURN_LERP, DENSE_GRID_CELL_CAP, PIANO_BW_STAGGER_MS,
    PIANO_COLOR_STAGGER_MS, ROTATION_RETURN_MS,
};
use crate::easing::Easing;
use crate::error::ConfigError;
use crate::field::{FieldDriver, FieldKind, Smoothing};
use crate::grid::{GridSpec, Rounding};
use crate::pointer::TouchScroll;
use crate::radius::{RadiusConfig, RadiusGrowth};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    RotationBw,
    PianoBw,
    PianoColor,
    SpreadBw,
    SpreadColor,
    PressGrow,
    CursorAnxiety,
}

impl Variant {
    pub const ALL: [Variant; 7] = [
        Variant::RotationBw,
        Variant::PianoBw,
        Variant::PianoColor,
        Variant::SpreadBw,
        Variant::SpreadColor,
        Variant::PressGrow,
        Variant::CursorAnxiety,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Variant::RotationBw => "rotation-bw",
            Variant::PianoBw => "piano-bw",
            Variant::PianoColor => "piano-color",
            Variant::SpreadBw => "spread-bw",
            Variant::SpreadColor => "spread-color",
            Variant::PressGrow => "press-grow",
            Variant::CursorAnxiety => "cursor-anxiety",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| ConfigError::UnknownVariant(s.to_string()))
    }
}

// Sanitizing helpers: non-finite values fall back to the default, negative
// values clamp to zero.
fn finite_or(v: f32, default: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        default
    }
}

fn non_neg(v: f32, default: f32) -> f32 {
    finite_or(v, default).max(0.0)
}

fn non_neg_ms(v: f64, default: f64) -> f64 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        default
    }
}

fn unit(v: f32, default: f32) -> f32 {
    finite_or(v, default).clamp(0.0, 1.0)
}

/// Spins lines while hovered and eases them back after a hold.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RotationBwConfig {
    pub grid_row_height: f32,
    pub grid_col_width: f32,
    /// Degrees per second.
    pub spin_speed: f32,
    pub ease_out_delay: f64,
    pub return_duration: f64,
    pub line_thickness: f32,
    pub line_color: Rgb,
    pub line_width: f32,
    pub line_height: f32,
    pub background_color: Rgb,
    pub max_cells: Option<usize>,
}

impl Default for RotationBwConfig {
    fn default() -> Self {
        Self {
            grid_row_height: 80.0,
            grid_col_width: 9.0,
            spin_speed: 10_000.0,
            ease_out_delay: 2000.0,
            return_duration: ROTATION_RETURN_MS,
            line_thickness: 1.2,
            line_color: Rgb::BLACK,
            line_width: 1.0,
            line_height: 45.0,
            background_color: Rgb::WHITE,
            max_cells: None,
        }
    }
}

impl RotationBwConfig {
    fn sanitized(mut self) -> Self {
        let d = Self::default();
        self.grid_row_height = non_neg(self.grid_row_height, d.grid_row_height);
        self.grid_col_width = non_neg(self.grid_col_width, d.grid_col_width);
        self.spin_speed = finite_or(self.spin_speed, d.spin_speed);
        self.ease_out_delay = non_neg_ms(self.ease_out_delay, d.ease_out_delay);
        self.return_duration = non_neg_ms(self.return_duration, d.return_duration);
        self.line_thickness = non_neg(self.line_thickness, d.line_thickness);
        self.line_width = non_neg(self.line_width, d.line_width);
        self.line_height = non_neg(self.line_height, d.line_height);
        self
    }
}

/// Black lines that widen on hover and under a growing press radius.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PianoBwConfig {
    pub grid_row_height: f32,
    pub grid_col_width: f32,
    pub grow_duration: f64,
    /// Duration of the shrink tween.
    pub shrink_delay: f64,
    /// Wait after a hover leave before shrinking.
    pub leave_delay: f64,
    pub initial_scale_x: f32,
    pub target_scale_x: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub radius_growth_rate: f32,
    pub stagger: f64,
    pub easing: Easing,
    pub line_color: Rgb,
    pub line_width: f32,
    pub line_height: f32,
    pub background_color: Rgb,
    pub max_cells: Option<usize>,
}

impl Default for PianoBwConfig {
    fn default() -> Self {
        Self {
            grid_row_height: 45.0,
            grid_col_width: 20.0,
            grow_duration: 500.0,
            shrink_delay: 1200.0,
            leave_delay: 0.0,
            initial_scale_x: 1.2,
            target_scale_x: 10.0,
            min_radius: 50.0,
            max_radius: 500.0,
            radius_growth_rate: 100.0,
            stagger: PIANO_BW_STAGGER_MS,
            easing: Easing::QuadInOut,
            line_color: Rgb::BLACK,
            line_width: 1.0,
            line_height: 45.0,
            background_color: Rgb::WHITE,
            max_cells: None,
        }
    }
}

impl PianoBwConfig {
    fn sanitized(mut self) -> Self {
        let d = Self::default();
        self.grid_row_height = non_neg(self.grid_row_height, d.grid_row_height);
        self.grid_col_width = non_neg(self.grid_col_width, d.grid_col_width);
        self.grow_duration = non_neg_ms(self.grow_duration, d.grow_duration);
        self.shrink_delay = non_neg_ms(self.shrink_delay, d.shrink_delay);
        self.leave_delay = non_neg_ms(self.leave_delay, d.leave_delay);
        self.initial_scale_x = non_neg(self.initial_scale_x, d.initial_scale_x);
        self.target_scale_x = non_neg(self.target_scale_x, d.target_scale_x);
        self.min_radius = non_neg(self.min_radius, d.min_radius);
        self.max_radius = non_neg(self.max_radius, d.max_radius);
        self.radius_growth_rate = non_neg(self.radius_growth_rate, d.radius_growth_rate);
        self.stagger = non_neg_ms(self.stagger, d.stagger);
        self.line_width = non_neg(self.line_width, d.line_width);
        self.line_height = non_neg(self.line_height, d.line_height);
        self
    }
}

/// Transparent lines that flash two colours while widening.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PianoColorConfig {
    pub grid_row_height: f32,
    pub grid_col_width: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub radius_growth_rate: f32,
    /// Colour while growing.
    pub active_color: Rgb,
    /// Colour once fully grown.
    pub growing_color: Rgb,
    pub line_width: f32,
    pub line_height: f32,
    pub active_width: f32,
    pub background_color: Rgb,
    pub grow_duration: f64,
    pub shrink_duration: f64,
    /// Wait after a hover leave before shrinking.
    pub shrink_delay: f64,
    pub stagger: f64,
    pub max_cells: Option<usize>,
}

impl Default for PianoColorConfig {
    fn default() -> Self {
        Self {
            grid_row_height: 45.0,
            grid_col_width: 20.0,
            min_radius: 50.0,
            max_radius: 500.0,
            radius_growth_rate: 100.0,
            active_color: Rgb::new(0xC8, 0x80, 0xFD),
            growing_color: Rgb::new(0xF0, 0x3D, 0x2A),
            line_width: 1.2,
            line_height: 45.0,
            active_width: 10.0,
            background_color: Rgb::new(0x0E, 0x0E, 0x0E),
            grow_duration: 1000.0,
            shrink_duration: 1500.0,
            shrink_delay: 1200.0,
            stagger: PIANO_COLOR_STAGGER_MS,
            max_cells: None,
        }
    }
}

impl PianoColorConfig {
    fn sanitized(mut self) -> Self {
        let d = Self::default();
        self.grid_row_height = non_neg(self.grid_row_height, d.grid_row_height);
        self.grid_col_width = non_neg(self.grid_col_width, d.grid_col_width);
        self.min_radius = non_neg(self.min_radius, d.min_radius);
        self.max_radius = non_neg(self.max_radius, d.max_radius);
        self.radius_growth_rate = non_neg(self.radius_growth_rate, d.radius_growth_rate);
        self.line_width = non_neg(self.line_width, d.line_width);
        self.line_height = non_neg(self.line_height, d.line_height);
        self.active_width = non_neg(self.active_width, d.active_width);
        self.grow_duration = non_neg_ms(self.grow_duration, d.grow_duration);
        self.shrink_duration = non_neg_ms(self.shrink_duration, d.shrink_duration);
        self.shrink_delay = non_neg_ms(self.shrink_delay, d.shrink_delay);
        self.stagger = non_neg_ms(self.stagger, d.stagger);
        self
    }
}

/// Lines pushed sideways away from the pointer.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpreadBwConfig {
    pub grid_row_height: f32,
    pub grid_col_width: f32,
    pub base_interaction_radius: f32,
    pub max_interaction_radius: f32,
    pub radius_growth_rate: f32,
    pub max_move_distance: f32,
    /// Per-frame smoothing of the sideways offset.
    pub transition_lerp: f32,
    pub line_color: Rgb,
    pub line_width: f32,
    pub line_height: f32,
    pub background_color: Rgb,
    pub max_cells: Option<usize>,
}

impl Default for SpreadBwConfig {
    fn default() -> Self {
        Self {
            grid_row_height: 45.0,
            grid_col_width: 20.0,
            base_interaction_radius: 100.0,
            max_interaction_radius: 400.0,
            radius_growth_rate: 150.0,
            max_move_distance: 40.0,
            transition_lerp: 0.15,
            line_color: Rgb::BLACK,
            line_width: 1.5,
            line_height: 46.0,
            background_color: Rgb::WHITE,
            max_cells: None,
        }
    }
}

impl SpreadBwConfig {
    fn sanitized(mut self) -> Self {
        let d = Self::default();
        self.grid_row_height = non_neg(self.grid_row_height, d.grid_row_height);
        self.grid_col_width = non_neg(self.grid_col_width, d.grid_col_width);
        self.base_interaction_radius = non_neg(self.base_interaction_radius, d.base_interaction_radius);
        self.max_interaction_radius = non_neg(self.max_interaction_radius, d.max_interaction_radius);
        self.radius_growth_rate = non_neg(self.radius_growth_rate, d.radius_growth_rate);
        self.max_move_distance = finite_or(self.max_move_distance, d.max_move_distance);
        self.transition_lerp = unit(self.transition_lerp, d.transition_lerp);
        self.line_width = non_neg(self.line_width, d.line_width);
        self.line_height = non_neg(self.line_height, d.line_height);
        self
    }
}

/// Spread with width, colour and opacity following the influence.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpreadColorConfig {
    pub grid_row_height: f32,
    pub grid_col_width: f32,
    pub base_radius: f32,
    pub max_radius: f32,
    pub growth_rate: f32,
    pub max_move: f32,
    pub min_w: f32,
    pub max_w: f32,
    pub lerp: f32,
    pub lerp_width: f32,
    pub radius_lerp: f32,
    pub color1: Rgb,
    pub color2: Rgb,
    pub line_height: f32,
    pub background_color: Rgb,
    pub max_cells: Option<usize>,
}

impl Default for SpreadColorConfig {
    fn default() -> Self {
        Self {
            grid_row_height: 45.0,
            grid_col_width: 20.0,
            base_radius: 100.0,
            max_radius: 400.0,
            growth_rate: 150.0,
            max_move: 40.0,
            min_w: 1.5,
            max_w: 15.0,
            lerp: 0.03,
            lerp_width: 0.03,
            radius_lerp: 0.05,
            color1: Rgb::new(200, 128, 253),
            color2: Rgb::new(240, 61, 42),
            line_height: 46.0,
            background_color: Rgb::new(0x0E, 0x0E, 0x0E),
            max_cells: Some(DENSE_GRID_CELL_CAP),
        }
    }
}

impl SpreadColorConfig {
    fn sanitized(mut self) -> Self {
        let d = Self::default();
        self.grid_row_height = non_neg(self.grid_row_height, d.grid_row_height);
        self.grid_col_width = non_neg(self.grid_col_width, d.grid_col_width);
        self.base_radius = non_neg(self.base_radius, d.base_radius);
        self.max_radius = non_neg(self.max_radius, d.max_radius);
        self.growth_rate = non_neg(self.growth_rate, d.growth_rate);
        self.max_move = finite_or(self.max_move, d.max_move);
        self.min_w = non_neg(self.min_w, d.min_w);
        self.max_w = non_neg(self.max_w, d.max_w);
        self.lerp = unit(self.lerp, d.lerp);
        self.lerp_width = unit(self.lerp_width, d.lerp_width);
        self.radius_lerp = unit(self.radius_lerp, d.radius_lerp);
        self.line_height = non_neg(self.line_height, d.line_height);
        self
    }
}

/// Lines turning toward the pointer; the radius widens smoothly while held.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PressGrowConfig {
    pub grid_row_height: f32,
    pub grid_col_width: f32,
    pub base_interaction_radius: f32,
    pub pressed_interaction_radius: f32,
    pub grow_speed: f32,
    pub shrink_speed: f32,
    pub easing_power: f32,
    pub lerp_factor: f32,
    pub base_effect_strength: f32,
    pub line_color: Rgb,
    pub line_width: f32,
    pub line_height: f32,
    pub background_color: Rgb,
    pub max_cells: Option<usize>,
}

impl Default for PressGrowConfig {
    fn default() -> Self {
        Self {
            grid_row_height: 45.0,
            grid_col_width: 20.0,
            base_interaction_radius: 100.0,
            pressed_interaction_radius: 400.0,
            grow_speed: 0.03,
            shrink_speed: 0.025,
            easing_power: 3.0,
            lerp_factor: 0.02,
            base_effect_strength: 1.0,
            line_color: Rgb::BLACK,
            line_width: 1.5,
            line_height: 46.0,
            background_color: Rgb::WHITE,
            max_cells: None,
        }
    }
}

impl PressGrowConfig {
    fn sanitized(mut self) -> Self {
        let d = Self::default();
        self.grid_row_height = non_neg(self.grid_row_height, d.grid_row_height);
        self.grid_col_width = non_neg(self.grid_col_width, d.grid_col_width);
        self.base_interaction_radius = non_neg(self.base_interaction_radius, d.base_interaction_radius);
        self.pressed_interaction_radius =
            non_neg(self.pressed_interaction_radius, d.pressed_interaction_radius);
        self.grow_speed = unit(self.grow_speed, d.grow_speed);
        self.shrink_speed = unit(self.shrink_speed, d.shrink_speed);
        self.easing_power = non_neg(self.easing_power, d.easing_power);
        self.lerp_factor = unit(self.lerp_factor, d.lerp_factor);
        self.base_effect_strength = finite_or(self.base_effect_strength, d.base_effect_strength);
        self.line_width = non_neg(self.line_width, d.line_width);
        self.line_height = non_neg(self.line_height, d.line_height);
        self
    }
}

/// Cursor glyphs that turn toward the pointer and creep closer.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CursorAnxietyConfig {
    pub grid_row_height: f32,
    pub grid_col_width: f32,
    pub interaction_radius: f32,
    pub movement_radius: f32,
    pub lerp_factor: f32,
    pub base_effect_strength: f32,
    pub cursor_size: f32,
    pub cursor_color: Rgb,
    pub outline_color: Rgb,
    pub background_color: Rgb,
    pub max_cells: Option<usize>,
}

impl Default for CursorAnxietyConfig {
    fn default() -> Self {
        Self {
            grid_row_height: 80.0,
            grid_col_width: 80.0,
            interaction_radius: 300.0,
            movement_radius: 300.0,
            lerp_factor: 0.05,
            base_effect_strength: 1.0,
            cursor_size: 54.0,
            cursor_color: Rgb::BLACK,
            outline_color: Rgb::WHITE,
            background_color: Rgb::WHITE,
            max_cells: None,
        }
    }
}

impl CursorAnxietyConfig {
    fn sanitized(mut self) -> Self {
        let d = Self::default();
        self.grid_row_height = non_neg(self.grid_row_height, d.grid_row_height);
        self.grid_col_width = non_neg(self.grid_col_width, d.grid_col_width);
        self.interaction_radius = non_neg(self.interaction_radius, d.interaction_radius);
        self.movement_radius = non_neg(self.movement_radius, d.movement_radius);
        self.lerp_factor = unit(self.lerp_factor, d.lerp_factor);
        self.base_effect_strength = finite_or(self.base_effect_strength, d.base_effect_strength);
        self.cursor_size = non_neg(self.cursor_size, d.cursor_size);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "variant", rename_all = "kebab-case")]
pub enum VariantConfig {
    RotationBw(RotationBwConfig),
    PianoBw(PianoBwConfig),
    PianoColor(PianoColorConfig),
    SpreadBw(SpreadBwConfig),
    SpreadColor(SpreadColorConfig),
    PressGrow(PressGrowConfig),
    CursorAnxiety(CursorAnxietyConfig),
}

/// Discrete piano behaviour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PianoPlan {
    pub timing: TweenTiming,
    /// Wait after a hover leave (or after growth, if the leave came early).
    pub leave_delay_ms: f64,
    pub stagger_ms: f64,
}

/// How a variant's cells are animated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Driver {
    /// Spin while hovered, hold, then ease back.
    HoverSpin {
        deg_per_sec: f32,
        hold_ms: f64,
        return_ms: f64,
    },
    /// Eased grow/shrink tweens from hover and a press-radius sweep.
    Piano(PianoPlan),
    /// Per-frame smoothing toward a pointer field.
    Field(FieldDriver),
}

impl Default for VariantConfig {
    fn default() -> Self {
        VariantConfig::PianoBw(PianoBwConfig::default())
    }
}

impl VariantConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if let Some(name) = value.get("variant").and_then(|v| v.as_str()) {
            name.parse::<Variant>()?;
        }
        let config: VariantConfig = serde_json::from_value(value)?;
        Ok(config.sanitized())
    }

    pub fn default_for(variant: Variant) -> Self {
        match variant {
            Variant::RotationBw => VariantConfig::RotationBw(Default::default()),
            Variant::PianoBw => VariantConfig::PianoBw(Default::default()),
            Variant::PianoColor => VariantConfig::PianoColor(Default::default()),
            Variant::SpreadBw => VariantConfig::SpreadBw(Default::default()),
            Variant::SpreadColor => VariantConfig::SpreadColor(Default::default()),
            Variant::PressGrow => VariantConfig::PressGrow(Default::default()),
            Variant::CursorAnxiety => VariantConfig::CursorAnxiety(Default::default()),
        }
    }

    pub fn sanitized(self) -> Self {
        match self {
            VariantConfig::RotationBw(c) => VariantConfig::RotationBw(c.sanitized()),
            VariantConfig::PianoBw(c) => VariantConfig::PianoBw(c.sanitized()),
            VariantConfig::PianoColor(c) => VariantConfig::PianoColor(c.sanitized()),
            VariantConfig::SpreadBw(c) => VariantConfig::SpreadBw(c.sanitized()),
            VariantConfig::SpreadColor(c) => VariantConfig::SpreadColor(c.sanitized()),
            VariantConfig::PressGrow(c) => VariantConfig::PressGrow(c.sanitized()),
            VariantConfig::CursorAnxiety(c) => VariantConfig::CursorAnxiety(c.sanitized()),
        }
    }

    pub fn variant(&self) -> Variant {
        match self {
            VariantConfig::RotationBw(_) => Variant::RotationBw,
            VariantConfig::PianoBw(_) => Variant::PianoBw,
            VariantConfig::PianoColor(_) => Variant::PianoColor,
            VariantConfig::SpreadBw(_) => Variant::SpreadBw,
            VariantConfig::SpreadColor(_) => Variant::SpreadColor,
            VariantConfig::PressGrow(_) => Variant::PressGrow,
            VariantConfig::CursorAnxiety(_) => Variant::CursorAnxiety,
        }
    }

    pub fn grid_spec(&self) -> GridSpec {
        use Rounding::{Ceil, Floor};
        let (cell_width, cell_height, max_cells) = match self {
            VariantConfig::RotationBw(c) => (c.grid_col_width, c.grid_row_height, c.max_cells),
            VariantConfig::PianoBw(c) => (c.grid_col_width, c.grid_row_height, c.max_cells),
            VariantConfig::PianoColor(c) => (c.grid_col_width, c.grid_row_height, c.max_cells),
            VariantConfig::SpreadBw(c) => (c.grid_col_width, c.grid_row_height, c.max_cells),
            VariantConfig::SpreadColor(c) => (c.grid_col_width, c.grid_row_height, c.max_cells),
            VariantConfig::PressGrow(c) => (c.grid_col_width, c.grid_row_height, c.max_cells),
            VariantConfig::CursorAnxiety(c) => (c.grid_col_width, c.grid_row_height, c.max_cells),
        };
        // (rows, cols, stretched tracks)
        let (rows, cols, stretch) = match self.variant() {
            Variant::RotationBw => (Floor, Ceil, true),
            Variant::PianoBw | Variant::SpreadBw | Variant::SpreadColor => (Floor, Floor, false),
            Variant::PianoColor => (Ceil, Ceil, false),
            Variant::PressGrow => (Ceil, Ceil, true),
            Variant::CursorAnxiety => (Floor, Floor, true),
        };
        GridSpec {
            cell_width,
            cell_height,
            rows,
            cols,
            stretch,
            max_cells,
        }
    }

    pub fn radius_config(&self) -> RadiusConfig {
        match self {
            VariantConfig::RotationBw(_) => RadiusConfig {
                base: 0.0,
                max: 0.0,
                growth_rate: 0.0,
                growth: RadiusGrowth::Fixed,
            },
            VariantConfig::PianoBw(c) => RadiusConfig {
                base: c.min_radius,
                max: c.max_radius,
                growth_rate: c.radius_growth_rate,
                growth: RadiusGrowth::Stepped,
            },
            VariantConfig::PianoColor(c) => RadiusConfig {
                base: c.min_radius,
                max: c.max_radius,
                growth_rate: c.radius_growth_rate,
                growth: RadiusGrowth::Stepped,
            },
            VariantConfig::SpreadBw(c) => RadiusConfig {
                base: c.base_interaction_radius,
                max: c.max_interaction_radius,
                growth_rate: c.radius_growth_rate,
                growth: RadiusGrowth::Elapsed,
            },
            VariantConfig::SpreadColor(c) => RadiusConfig {
                base: c.base_radius,
                max: c.max_radius,
                growth_rate: c.growth_rate,
                growth: RadiusGrowth::Smoothed {
                    lerp: c.radius_lerp,
                },
            },
            VariantConfig::PressGrow(c) => RadiusConfig {
                base: c.base_interaction_radius,
                max: c.pressed_interaction_radius,
                growth_rate: 0.0,
                growth: RadiusGrowth::Eased {
                    grow_speed: c.grow_speed,
                    shrink_speed: c.shrink_speed,
                    power: c.easing_power,
                },
            },
            VariantConfig::CursorAnxiety(c) => RadiusConfig {
                base: c.interaction_radius,
                max: c.interaction_radius,
                growth_rate: 0.0,
                growth: RadiusGrowth::Fixed,
            },
        }
    }

    /// Values of a cell at rest.
    pub fn rest_values(&self) -> CellValues {
        let width = match self {
            VariantConfig::RotationBw(c) => c.line_width,
            VariantConfig::PianoBw(c) => c.line_width,
            VariantConfig::PianoColor(c) => c.line_width,
            VariantConfig::SpreadBw(c) => c.line_width,
            VariantConfig::SpreadColor(c) => c.min_w,
            VariantConfig::PressGrow(c) => c.line_width,
            VariantConfig::CursorAnxiety(c) => c.cursor_size,
        };
        let opacity = match self {
            VariantConfig::SpreadColor(_) => 0.0,
            _ => 1.0,
        };
        CellValues {
            level: 0.0,
            rotation: 0.0,
            offset: Vec2::ZERO,
            width,
            color_mix: 0.0,
            opacity,
        }
    }

    pub fn driver(&self) -> Driver {
        let rest = self.rest_values();
        match self {
            VariantConfig::RotationBw(c) => Driver::HoverSpin {
                deg_per_sec: c.spin_speed,
                hold_ms: c.ease_out_delay,
                return_ms: c.return_duration,
            },
            VariantConfig::PianoBw(c) => Driver::Piano(PianoPlan {
                timing: TweenTiming {
                    grow_ms: c.grow_duration,
                    shrink_ms: c.shrink_delay,
                    grow_easing: c.easing,
                    shrink_easing: c.easing,
                },
                leave_delay_ms: c.leave_delay,
                stagger_ms: c.stagger,
            }),
            VariantConfig::PianoColor(c) => Driver::Piano(PianoPlan {
                timing: TweenTiming {
                    grow_ms: c.grow_duration,
                    shrink_ms: c.shrink_duration,
                    grow_easing: Easing::QuadOut,
                    shrink_easing: Easing::QuadOut,
                },
                leave_delay_ms: c.shrink_delay,
                stagger_ms: c.stagger,
            }),
            VariantConfig::SpreadBw(c) => Driver::Field(FieldDriver {
                kind: FieldKind::Spread {
                    max_move: c.max_move_distance,
                },
                rest,
                smoothing: Smoothing::uniform(c.transition_lerp),
                pressed_smoothing: None,
            }),
            VariantConfig::SpreadColor(c) => Driver::Field(FieldDriver {
                kind: FieldKind::SpreadColor {
                    max_move: c.max_move,
                    min_width: c.min_w,
                    max_width: c.max_w,
                },
                rest,
                // Colour and opacity snap; offset and width glide.
                smoothing: Smoothing {
                    offset: c.lerp,
                    width: c.lerp_width,
                    rotation: 1.0,
                    color_mix: 1.0,
                    opacity: 1.0,
                },
                pressed_smoothing: None,
            }),
            VariantConfig::PressGrow(c) => Driver::Field(FieldDriver {
                kind: FieldKind::Turn {
                    strength: c.base_effect_strength,
                },
                rest,
                smoothing: Smoothing::uniform(c.lerp_factor),
                pressed_smoothing: None,
            }),
            VariantConfig::CursorAnxiety(c) => Driver::Field(FieldDriver {
                kind: FieldKind::Anxiety {
                    strength: c.base_effect_strength,
                    movement_radius: c.movement_radius,
                },
                rest,
                smoothing: Smoothing {
                    offset: CURSOR_DRIFT_LERP,
                    width: 1.0,
                    rotation: c.lerp_factor,
                    color_mix: 1.0,
                    opacity: 1.0,
                },
                pressed_smoothing: Some(Smoothing::uniform(CURSOR_RETURN_LERP)),
            }),
        }
    }

    pub fn touch_scroll(&self) -> TouchScroll {
        match self {
            VariantConfig::RotationBw(_) => TouchScroll::Allow,
            _ => TouchScroll::Suppress,
        }
    }

    pub fn background(&self) -> Rgb {
        match self {
            VariantConfig::RotationBw(c) => c.background_color,
            VariantConfig::PianoBw(c) => c.background_color,
            VariantConfig::PianoColor(c) => c.background_color,
            VariantConfig::SpreadBw(c) => c.background_color,
            VariantConfig::SpreadColor(c) => c.background_color,
            VariantConfig::PressGrow(c) => c.background_color,
            VariantConfig::CursorAnxiety(c) => c.background_color,
        }
    }
}
