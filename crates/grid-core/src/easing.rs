//! Easing curves and interpolation helpers.
//!
//! Duration-based tweens map `elapsed / duration` through an [`Easing`] to a
//! progress in \[0, 1\]. Continuous smoothing uses [`approach`], an
//! exponential step that never lands exactly on its target.

use serde::Deserialize;

/// Shape of a duration-based tween. Every curve is monotonic and stays within
/// \[0, 1\], so tweens never overshoot their end value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    #[default]
    QuadOut,
    QuadInOut,
}

impl Easing {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

/// Linear tween progress clamped to \[0, 1\]. A zero (or negative, or
/// non-finite) duration completes on first evaluation.
#[inline]
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f32 {
    if !(duration_ms > 0.0) || !duration_ms.is_finite() {
        return 1.0;
    }
    if !(elapsed_ms > 0.0) {
        return 0.0;
    }
    (elapsed_ms / duration_ms).min(1.0) as f32
}

/// Power ease-in-out used to accelerate radius smoothing as the gap closes.
#[inline]
pub fn ease_in_out_pow(t: f32, power: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2f32.powf(power - 1.0) * t.powf(power)
    } else {
        1.0 - (-2.0 * t + 2.0).powf(power) / 2.0
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// One step of exponential smoothing: `current += (target - current) * factor`.
#[inline]
pub fn approach(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}
