//! Renderer-neutral description of what each cell looks like.

use glam::Vec2;

use crate::cell::{Cell, Phase};
use crate::color::Rgb;
use crate::config::VariantConfig;
use crate::constants::CURSOR_OUTPUT_STEP;
use crate::easing::lerp;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Glyph {
    /// Filled rectangle, vertical at zero rotation.
    #[default]
    Line,
    /// Arrow pointer glyph drawn inside a `width` x `height` box.
    Cursor,
}

/// One cell, ready to draw.
///
/// Fields:
/// - `center`: cached cell centre in CSS pixels
/// - `offset`: translation applied before rotation
/// - `rotation_deg`: clockwise rotation about the translated centre
/// - `width`/`height`: glyph box
/// - `color`/`alpha`: fill; an `alpha` of 0 draws nothing
/// - `stroke`: optional outline colour
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub center: Vec2,
    pub offset: Vec2,
    pub rotation_deg: f32,
    pub width: f32,
    pub height: f32,
    pub color: Rgb,
    pub alpha: f32,
    pub stroke: Option<Rgb>,
    pub glyph: Glyph,
}

impl Sprite {
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.alpha > 0.0 && self.width > 0.0 && self.height > 0.0
    }

    /// Position of the glyph centre after translation.
    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.center + self.offset
    }
}

#[inline]
fn quantize(v: f32, step: f32) -> f32 {
    (v / step).round() * step
}

pub fn sprite(cell: &Cell, config: &VariantConfig) -> Sprite {
    let v = cell.values();
    let line = |width: f32, height: f32, color: Rgb| Sprite {
        center: cell.center(),
        offset: v.offset,
        rotation_deg: v.rotation,
        width,
        height,
        color,
        alpha: 1.0,
        stroke: None,
        glyph: Glyph::Line,
    };
    match config {
        VariantConfig::RotationBw(c) => {
            line(c.line_width * c.line_thickness, c.line_height, c.line_color)
        }
        VariantConfig::PianoBw(c) => {
            let scale = lerp(c.initial_scale_x, c.target_scale_x, v.level);
            line(c.line_width * scale, c.line_height, c.line_color)
        }
        VariantConfig::PianoColor(c) => {
            let width = lerp(c.line_width, c.active_width, v.level);
            let (color, alpha) = match cell.phase() {
                Phase::Idle => (c.growing_color, 0.0),
                Phase::Growing => (c.active_color, 1.0),
                Phase::Active => (c.growing_color, 1.0),
                Phase::Shrinking => (c.growing_color, v.level.clamp(0.0, 1.0)),
            };
            Sprite {
                alpha,
                ..line(width, c.line_height, color)
            }
        }
        VariantConfig::SpreadBw(c) => line(c.line_width, c.line_height, c.line_color),
        VariantConfig::SpreadColor(c) => Sprite {
            alpha: v.opacity.clamp(0.0, 1.0),
            ..line(v.width, c.line_height, c.color1.mix(c.color2, v.color_mix))
        },
        VariantConfig::PressGrow(c) => line(c.line_width, c.line_height, c.line_color),
        VariantConfig::CursorAnxiety(c) => Sprite {
            center: cell.center(),
            offset: Vec2::new(
                quantize(v.offset.x, CURSOR_OUTPUT_STEP),
                quantize(v.offset.y, CURSOR_OUTPUT_STEP),
            ),
            rotation_deg: quantize(v.rotation, CURSOR_OUTPUT_STEP),
            width: c.cursor_size,
            height: c.cursor_size,
            color: c.cursor_color,
            alpha: 1.0,
            stroke: Some(c.outline_color),
            glyph: Glyph::Cursor,
        },
    }
}
