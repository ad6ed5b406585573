//! Interaction radius that widens while the pointer is held.

use crate::constants::SWEEP_RATE_HZ;
use crate::device::DeviceClass;
use crate::easing::{self, ease_in_out_pow};

/// How the radius responds to a held press.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RadiusGrowth {
    /// Constant radius.
    Fixed,
    /// `growth_rate / 60` added per sweep tick, snapping back on release.
    Stepped,
    /// `min(base + growth_rate * seconds_held, max)`.
    Elapsed,
    /// Elapsed-time target, approached by `lerp` each frame.
    Smoothed { lerp: f32 },
    /// Approach `max` while pressed and `base` otherwise. The step factor is
    /// boosted by a power ease as the remaining gap closes.
    Eased {
        grow_speed: f32,
        shrink_speed: f32,
        power: f32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusConfig {
    pub base: f32,
    pub max: f32,
    /// Pixels per second.
    pub growth_rate: f32,
    pub growth: RadiusGrowth,
}

/// Elapsed-time radius, capped at `max`.
#[inline]
pub fn elapsed_radius(base: f32, growth_rate: f32, max: f32, seconds: f32) -> f32 {
    (base + growth_rate * seconds.max(0.0)).min(max)
}

#[derive(Clone, Debug)]
pub struct RadiusController {
    config: RadiusConfig,
    radius: f32,
    pressed_at: Option<f64>,
}

impl RadiusController {
    /// Growth figures are adjusted for `device` once, here.
    pub fn new(config: RadiusConfig, device: DeviceClass) -> Self {
        let mut config = config;
        config.max = config.max.max(config.base);
        config.growth_rate = device.adjust_growth_rate(config.growth_rate);
        if let RadiusGrowth::Eased { grow_speed, .. } = &mut config.growth {
            *grow_speed = device.adjust_growth_rate(*grow_speed);
        }
        Self {
            radius: config.base,
            config,
            pressed_at: None,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn config(&self) -> &RadiusConfig {
        &self.config
    }

    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.pressed_at.is_some()
    }

    pub fn press(&mut self, now_ms: f64) {
        self.pressed_at = Some(now_ms);
        if matches!(
            self.config.growth,
            RadiusGrowth::Stepped | RadiusGrowth::Elapsed
        ) {
            self.radius = self.config.base;
        }
        log::debug!("[radius] press at {now_ms:.1}ms");
    }

    pub fn release(&mut self) {
        self.pressed_at = None;
        match self.config.growth {
            RadiusGrowth::Fixed | RadiusGrowth::Stepped | RadiusGrowth::Elapsed => {
                self.radius = self.config.base;
            }
            // Smoothed variants decay toward base on subsequent updates.
            RadiusGrowth::Smoothed { .. } | RadiusGrowth::Eased { .. } => {}
        }
    }

    /// One fixed-rate sweep tick. Returns whether the radius changed.
    pub fn step_tick(&mut self) -> bool {
        if !self.is_pressed() || self.config.growth != RadiusGrowth::Stepped {
            return false;
        }
        if self.radius >= self.config.max {
            return false;
        }
        let step = self.config.growth_rate / SWEEP_RATE_HZ as f32;
        self.radius = (self.radius + step).min(self.config.max);
        true
    }

    /// Per-frame update for the time-driven growth modes.
    pub fn update(&mut self, now_ms: f64) {
        let RadiusConfig {
            base,
            max,
            growth_rate,
            growth,
        } = self.config;
        let held_secs = self
            .pressed_at
            .map(|t| ((now_ms - t) / 1000.0) as f32)
            .unwrap_or(0.0);
        match growth {
            RadiusGrowth::Fixed | RadiusGrowth::Stepped => {}
            RadiusGrowth::Elapsed => {
                self.radius = if self.is_pressed() {
                    elapsed_radius(base, growth_rate, max, held_secs)
                } else {
                    base
                };
            }
            RadiusGrowth::Smoothed { lerp } => {
                let target = if self.is_pressed() {
                    elapsed_radius(base, growth_rate, max, held_secs)
                } else {
                    base
                };
                self.radius = easing::approach(self.radius, target, lerp);
            }
            RadiusGrowth::Eased {
                grow_speed,
                shrink_speed,
                power,
            } => {
                let (target, speed) = if self.is_pressed() {
                    (max, grow_speed)
                } else {
                    (base, shrink_speed)
                };
                let span = (max - base).abs();
                let gap = if span > 0.0 {
                    ((self.radius - target).abs() / span).min(1.0)
                } else {
                    0.0
                };
                let eased = speed * (1.0 + ease_in_out_pow(1.0 - gap, power));
                self.radius = easing::lerp(self.radius, target, eased.min(1.0));
            }
        }
    }
}
