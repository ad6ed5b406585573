//! Continuous pointer fields.
//!
//! Every frame each cell gets a target computed from its cached centre, the
//! pointer and the current radius, and its values are smoothed toward that
//! target. Distances are compared squared; the square root is only taken for
//! cells inside the radius.

use glam::Vec2;

use crate::cell::{Cell, CellValues, Phase};
use crate::constants::{
    CURSOR_ANGLE_OFFSET_DEG, CURSOR_DRIFT_EDGE_POWER, CURSOR_DRIFT_NEAR_POWER, CURSOR_MAX_DRIFT_PX,
    LINE_ANGLE_OFFSET_DEG, REST_EPSILON, SMOOTH_FALLOFF_EXPONENT,
};
use crate::easing::approach;
use crate::pointer::PointerState;

/// Linear falloff: 1 at the pointer, 0 at and beyond `radius`.
#[inline]
pub fn influence(distance: f32, radius: f32) -> f32 {
    if !(radius > 0.0) || !(distance < radius) {
        return 0.0;
    }
    1.0 - distance.max(0.0) / radius
}

/// [`influence`] raised to `exponent`.
#[inline]
pub fn shaped_influence(distance: f32, radius: f32, exponent: f32) -> f32 {
    influence(distance, radius).powf(exponent)
}

/// Offset from `center` to `pointer` and its length, if strictly inside `radius`.
#[inline]
fn reach(center: Vec2, pointer: Vec2, radius: f32) -> Option<(Vec2, f32)> {
    let delta = pointer - center;
    let d2 = delta.length_squared();
    (d2 < radius * radius).then(|| (delta, d2.sqrt()))
}

/// Angle from a cell to the pointer in degrees.
#[inline]
fn bearing_deg(delta: Vec2) -> f32 {
    delta.y.atan2(delta.x).to_degrees()
}

/// Per-channel smoothing factors applied each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Smoothing {
    pub offset: f32,
    pub width: f32,
    pub rotation: f32,
    pub color_mix: f32,
    pub opacity: f32,
}

impl Smoothing {
    pub const fn uniform(factor: f32) -> Self {
        Self {
            offset: factor,
            width: factor,
            rotation: factor,
            color_mix: factor,
            opacity: factor,
        }
    }
}

/// Target rule of a continuous variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldKind {
    /// Push lines sideways away from the pointer.
    Spread { max_move: f32 },
    /// Spread plus width, colour and opacity driven by the same influence.
    SpreadColor {
        max_move: f32,
        min_width: f32,
        max_width: f32,
    },
    /// Rotate lines toward the pointer with a smooth falloff.
    Turn { strength: f32 },
    /// Rotate cursor glyphs toward the pointer and drift them closer.
    Anxiety {
        strength: f32,
        movement_radius: f32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldDriver {
    pub kind: FieldKind,
    pub rest: CellValues,
    pub smoothing: Smoothing,
    /// Used instead of `smoothing` while the pointer is held.
    pub pressed_smoothing: Option<Smoothing>,
}

impl FieldDriver {
    /// Target values for a cell at `center`, and whether the pointer reaches it.
    pub fn target(&self, center: Vec2, pointer: &PointerState, radius: f32) -> (CellValues, bool) {
        let rest = self.rest;
        if !pointer.active {
            return (rest, false);
        }
        match self.kind {
            FieldKind::Spread { max_move } => match reach(center, pointer.position(), radius) {
                Some((delta, d)) => {
                    let push = -sign(delta.x) * influence(d, radius) * max_move;
                    let mut t = rest;
                    t.offset = Vec2::new(push, 0.0);
                    (t, true)
                }
                None => (rest, false),
            },
            FieldKind::SpreadColor {
                max_move,
                min_width,
                max_width,
            } => match reach(center, pointer.position(), radius) {
                Some((delta, d)) => {
                    let inf = influence(d, radius);
                    let dir = if delta.x > 0.0 { 1.0 } else { -1.0 };
                    let push = -dir * inf * max_move;
                    let mut t = rest;
                    t.offset = Vec2::new(push, 0.0);
                    t.width = min_width + (max_width - min_width) * inf;
                    t.color_mix = if max_move > 0.0 {
                        (push.abs() / max_move).min(1.0)
                    } else {
                        inf
                    };
                    t.opacity = 1.0;
                    (t, true)
                }
                None => (rest, false),
            },
            FieldKind::Turn { strength } => match reach(center, pointer.position(), radius) {
                Some((delta, d)) => {
                    let angle = bearing_deg(delta) + LINE_ANGLE_OFFSET_DEG;
                    let weight = shaped_influence(d, radius, SMOOTH_FALLOFF_EXPONENT) * strength;
                    let mut t = rest;
                    t.rotation = angle * weight;
                    (t, true)
                }
                None => (rest, false),
            },
            FieldKind::Anxiety {
                strength,
                movement_radius,
            } => {
                // Held pointer: everything returns home.
                if pointer.pressed {
                    return (rest, false);
                }
                match reach(center, pointer.position(), radius) {
                    Some((delta, d)) => {
                        let angle = bearing_deg(delta) + CURSOR_ANGLE_OFFSET_DEG;
                        let weight =
                            shaped_influence(d, radius, SMOOTH_FALLOFF_EXPONENT) * strength;
                        let mut t = rest;
                        t.rotation = angle * weight;
                        t.offset = cursor_drift(delta, d, movement_radius);
                        (t, true)
                    }
                    None => (rest, false),
                }
            }
        }
    }

    #[inline]
    pub fn smoothing(&self, pressed: bool) -> Smoothing {
        match self.pressed_smoothing {
            Some(s) if pressed => s,
            _ => self.smoothing,
        }
    }

    /// Advance one cell by one frame. Returns whether the cell is still moving.
    pub fn drive(&self, cell: &mut Cell, pointer: &PointerState, radius: f32, now_ms: f64) -> bool {
        let (target, reached) = self.target(cell.center(), pointer, radius);
        let s = self.smoothing(pointer.pressed);
        let v = &mut cell.values;
        v.offset = Vec2::new(
            approach(v.offset.x, target.offset.x, s.offset),
            approach(v.offset.y, target.offset.y, s.offset),
        );
        v.width = approach(v.width, target.width, s.width);
        v.rotation = approach(v.rotation, target.rotation, s.rotation);
        v.color_mix = approach(v.color_mix, target.color_mix, s.color_mix);
        v.opacity = approach(v.opacity, target.opacity, s.opacity);

        let settled = at_rest(v, &self.rest);
        cell.phase = match (reached, cell.phase) {
            (true, Phase::Active) => Phase::Active,
            (true, _) => {
                cell.activated_at = now_ms;
                Phase::Active
            }
            (false, _) if settled => Phase::Idle,
            (false, _) => Phase::Shrinking,
        };
        cell.phase != Phase::Idle
    }
}

/// Drift toward the pointer: strongest mid-radius, fading at both the pointer
/// and the movement radius edge.
pub fn cursor_drift(delta: Vec2, distance: f32, movement_radius: f32) -> Vec2 {
    if !(distance < movement_radius) || !(distance > 0.0) {
        return Vec2::ZERO;
    }
    let n = distance / movement_radius;
    let strength = n.powf(CURSOR_DRIFT_NEAR_POWER) * (1.0 - n.powi(CURSOR_DRIFT_EDGE_POWER));
    delta / distance * (strength * CURSOR_MAX_DRIFT_PX)
}

fn at_rest(v: &CellValues, rest: &CellValues) -> bool {
    (v.offset - rest.offset).length() < REST_EPSILON
        && (v.width - rest.width).abs() < REST_EPSILON
        && (v.rotation - rest.rotation).abs() < REST_EPSILON
        && (v.color_mix - rest.color_mix).abs() < REST_EPSILON
        && (v.opacity - rest.opacity).abs() < REST_EPSILON
}

// Zero stays zero, unlike f32::signum.
#[inline]
fn sign(x: f32) -> f32 {
    if x == 0.0 {
        0.0
    } else {
        x.signum()
    }
}
