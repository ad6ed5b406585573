//! Per-cell animation state.
//!
//! Discrete variants drive a cell through `Idle -> Growing -> Active ->
//! Shrinking -> Idle` with eased tweens; continuous variants lerp the same
//! value record toward per-frame targets. A cell owns at most one
//! [`Motion`] (its live frame request) and at most one timer id; arming either
//! replaces the previous one.

use glam::Vec2;

use crate::easing::{self, Easing};
use crate::scheduler::TimerId;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Growing,
    Active,
    Shrinking,
}

impl Phase {
    /// Growing or held at the grown value.
    #[inline]
    pub fn is_engaged(self) -> bool {
        matches!(self, Phase::Growing | Phase::Active)
    }
}

/// Animated values. Which fields matter depends on the variant.
///
/// - `level`: 0 at rest, 1 fully grown (discrete tweens)
/// - `rotation`: degrees
/// - `offset`: translation from the cell centre in pixels
/// - `width`: line width in pixels
/// - `color_mix`: 0..1 blend between the variant's two colours
/// - `opacity`: 0..1
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CellValues {
    pub level: f32,
    pub rotation: f32,
    pub offset: Vec2,
    pub width: f32,
    pub color_mix: f32,
    pub opacity: f32,
}

/// Value a tween writes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Level,
    Rotation,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub channel: Channel,
    pub from: f32,
    pub to: f32,
    pub start_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Tween {
    /// Value at `now` and whether the tween has finished. The value is
    /// clamped between the endpoints and equals `to` exactly on completion.
    pub fn sample(&self, now_ms: f64) -> (f32, bool) {
        let t = easing::progress(now_ms - self.start_ms, self.duration_ms);
        if t >= 1.0 {
            return (self.to, true);
        }
        let (lo, hi) = if self.from <= self.to {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        };
        let v = easing::lerp(self.from, self.to, self.easing.apply(t));
        (v.clamp(lo, hi), false)
    }
}

/// A cell's live per-frame animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    Tween(Tween),
    /// Unbounded rotation at a constant angular speed.
    Spin { deg_per_sec: f32, last_ms: f64 },
}

/// Durations and curves for the grow/shrink tweens of a discrete variant.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TweenTiming {
    pub grow_ms: f64,
    pub shrink_ms: f64,
    pub grow_easing: Easing,
    pub shrink_easing: Easing,
}

/// Result of asking a cell to shrink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShrinkRequest {
    /// Growth is still in flight; the shrink starts once it completes.
    Deferred,
    Started,
    Ignored,
}

/// Notable transitions produced by [`Cell::step`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepEvent {
    /// No motion, nothing happened.
    Quiet,
    /// Motion advanced, no phase change.
    Running,
    /// Growth completed; the cell now holds at the grown value.
    Grown,
    /// Growth completed with a deferred shrink that must wait `delay_ms`.
    ShrinkAfter { delay_ms: f64 },
    /// Growth completed and the deferred shrink started immediately.
    ShrinkStarted,
    /// Shrink (or return) completed; the cell is idle again.
    Settled,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    index: usize,
    center: Vec2,
    pub(crate) phase: Phase,
    pub(crate) values: CellValues,
    pub(crate) activated_at: f64,
    /// Delay to apply once growth completes, when a shrink was requested mid-growth.
    pub(crate) deferred_shrink: Option<f64>,
    pub(crate) motion: Option<Motion>,
    pub(crate) timer: Option<TimerId>,
}

impl Cell {
    pub fn new(index: usize, center: Vec2, rest: CellValues) -> Self {
        Self {
            index,
            center,
            phase: Phase::Idle,
            values: rest,
            activated_at: 0.0,
            deferred_shrink: None,
            motion: None,
            timer: None,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn values(&self) -> &CellValues {
        &self.values
    }

    #[inline]
    pub fn activated_at(&self) -> f64 {
        self.activated_at
    }

    #[inline]
    pub fn shrink_pending(&self) -> bool {
        self.deferred_shrink.is_some()
    }

    #[inline]
    pub fn motion(&self) -> Option<&Motion> {
        self.motion.as_ref()
    }

    #[inline]
    pub fn timer(&self) -> Option<TimerId> {
        self.timer
    }

    #[inline]
    pub fn is_spinning(&self) -> bool {
        matches!(self.motion, Some(Motion::Spin { .. }))
    }

    /// Detach the cell's timer id so the caller can cancel it.
    #[inline]
    pub(crate) fn take_timer(&mut self) -> Option<TimerId> {
        self.timer.take()
    }

    #[inline]
    pub(crate) fn set_timer(&mut self, id: TimerId) {
        debug_assert!(self.timer.is_none(), "previous timer must be cancelled first");
        self.timer = Some(id);
    }

    /// Start growing toward level 1 from the current level.
    ///
    /// No-op while `Active`; while `Growing` the tween keeps running and only a
    /// deferred shrink is dropped. From `Shrinking` the shrink tween is
    /// replaced, so the value continues from where it was.
    pub fn begin_grow(&mut self, now_ms: f64, timing: &TweenTiming) -> bool {
        match self.phase {
            Phase::Active => false,
            Phase::Growing => {
                self.deferred_shrink = None;
                false
            }
            Phase::Idle | Phase::Shrinking => {
                self.motion = Some(Motion::Tween(Tween {
                    channel: Channel::Level,
                    from: self.values.level,
                    to: 1.0,
                    start_ms: now_ms,
                    duration_ms: timing.grow_ms,
                    easing: timing.grow_easing,
                }));
                self.phase = Phase::Growing;
                self.deferred_shrink = None;
                self.activated_at = now_ms;
                true
            }
        }
    }

    /// Shrink now if held, or once growth completes if still growing.
    pub fn request_shrink(&mut self, now_ms: f64, timing: &TweenTiming) -> ShrinkRequest {
        match self.phase {
            Phase::Growing => {
                self.deferred_shrink = Some(0.0);
                ShrinkRequest::Deferred
            }
            Phase::Active => {
                self.start_shrink(now_ms, timing);
                ShrinkRequest::Started
            }
            Phase::Idle | Phase::Shrinking => ShrinkRequest::Ignored,
        }
    }

    /// Mark a growing cell to shrink `delay_ms` after its growth completes.
    pub fn defer_shrink(&mut self, delay_ms: f64) -> bool {
        if self.phase == Phase::Growing {
            self.deferred_shrink = Some(delay_ms.max(0.0));
            true
        } else {
            false
        }
    }

    fn start_shrink(&mut self, now_ms: f64, timing: &TweenTiming) {
        self.motion = Some(Motion::Tween(Tween {
            channel: Channel::Level,
            from: self.values.level,
            to: 0.0,
            start_ms: now_ms,
            duration_ms: timing.shrink_ms,
            easing: timing.shrink_easing,
        }));
        self.phase = Phase::Shrinking;
    }

    /// Spin continuously from the current angle. No-op if already spinning.
    pub fn begin_spin(&mut self, now_ms: f64, deg_per_sec: f32) -> bool {
        if self.is_spinning() {
            return false;
        }
        self.motion = Some(Motion::Spin {
            deg_per_sec,
            last_ms: now_ms,
        });
        if self.phase != Phase::Active {
            self.activated_at = now_ms;
        }
        self.phase = Phase::Active;
        true
    }

    /// Stop spinning and hold the current angle.
    pub fn stop_spin(&mut self) -> bool {
        if !self.is_spinning() {
            return false;
        }
        self.motion = None;
        true
    }

    /// Ease the rotation of a held cell back to zero.
    pub fn begin_return(&mut self, now_ms: f64, duration_ms: f64, easing: Easing) -> bool {
        if self.phase != Phase::Active || self.is_spinning() {
            return false;
        }
        self.motion = Some(Motion::Tween(Tween {
            channel: Channel::Rotation,
            from: self.values.rotation,
            to: 0.0,
            start_ms: now_ms,
            duration_ms,
            easing,
        }));
        self.phase = Phase::Shrinking;
        true
    }

    /// Advance the live motion to `now`.
    pub fn step(&mut self, now_ms: f64, timing: &TweenTiming) -> StepEvent {
        let Some(motion) = self.motion.as_mut() else {
            return StepEvent::Quiet;
        };
        match motion {
            Motion::Spin {
                deg_per_sec,
                last_ms,
            } => {
                let dt = (now_ms - *last_ms).max(0.0);
                *last_ms = now_ms;
                let turned = self.values.rotation + *deg_per_sec * (dt / 1000.0) as f32;
                self.values.rotation = turned.rem_euclid(360.0);
                StepEvent::Running
            }
            Motion::Tween(tween) => {
                let (value, done) = tween.sample(now_ms);
                match tween.channel {
                    Channel::Level => self.values.level = value,
                    Channel::Rotation => self.values.rotation = value,
                }
                if !done {
                    return StepEvent::Running;
                }
                self.motion = None;
                self.finish_phase(now_ms, timing)
            }
        }
    }

    fn finish_phase(&mut self, now_ms: f64, timing: &TweenTiming) -> StepEvent {
        match self.phase {
            Phase::Growing => {
                self.phase = Phase::Active;
                match self.deferred_shrink.take() {
                    None => StepEvent::Grown,
                    Some(delay_ms) if delay_ms > 0.0 => StepEvent::ShrinkAfter { delay_ms },
                    Some(_) => {
                        self.start_shrink(now_ms, timing);
                        StepEvent::ShrinkStarted
                    }
                }
            }
            Phase::Shrinking => {
                self.phase = Phase::Idle;
                StepEvent::Settled
            }
            Phase::Idle | Phase::Active => StepEvent::Running,
        }
    }
}
