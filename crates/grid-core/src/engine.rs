//! The mounted engine: one grid, one pointer stream, one clock.
//!
//! The host feeds normalized pointer input through [`Engine::handle_input`]
//! and calls [`Engine::advance`] once per display frame with the frame
//! timestamp. Everything temporal (sweep ticks, per-cell timers, tweens,
//! field smoothing, debounced rebuilds) happens inside `advance` against that
//! clock, in a fixed order.

use crate::cell::{Cell, Phase, StepEvent, TweenTiming};
use crate::config::{Driver, PianoPlan, VariantConfig};
use crate::constants::{RESIZE_DEBOUNCE_MS, SWEEP_INTERVAL_MS, SWEEP_MAX_CATCH_UP_TICKS};
use crate::device::DeviceClass;
use crate::easing::Easing;
use crate::grid::{Grid, Viewport};
use crate::pointer::{InputOutcome, PointerInput, PointerState, PointerTracker, PressEdge};
use crate::radius::RadiusController;
use crate::release;
use crate::scheduler::{Scheduler, TimerFire, TimerKind};
use crate::visual::{self, Sprite};

#[derive(Clone, Copy, Debug, PartialEq)]
struct PendingResize {
    viewport: Viewport,
    device: DeviceClass,
    due_ms: f64,
}

#[derive(Debug)]
pub struct Engine {
    config: VariantConfig,
    driver: Driver,
    viewport: Viewport,
    device: DeviceClass,
    epoch: u64,
    grid: Grid,
    pointer: PointerTracker,
    radius: RadiusController,
    scheduler: Scheduler,
    hovered: Option<usize>,
    /// Due time of the next radius sweep tick while a discrete variant is held.
    sweep: Option<f64>,
    pending_resize: Option<PendingResize>,
    torn_down: bool,
}

impl Engine {
    pub fn new(config: VariantConfig, viewport: Viewport, device: DeviceClass) -> Self {
        let mut engine = Self {
            driver: config.driver(),
            pointer: PointerTracker::new(config.touch_scroll()),
            radius: RadiusController::new(config.radius_config(), device),
            config,
            viewport,
            device,
            epoch: 0,
            grid: Grid::empty(0),
            scheduler: Scheduler::new(),
            hovered: None,
            sweep: None,
            pending_resize: None,
            torn_down: false,
        };
        engine.rebuild(0.0);
        log::info!(
            "[grid] mounted {} ({} cells, {:?})",
            engine.config.variant(),
            engine.grid.len(),
            device
        );
        engine
    }

    // Accessors

    #[inline]
    pub fn config(&self) -> &VariantConfig {
        &self.config
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        self.grid.cells()
    }

    #[inline]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn device(&self) -> DeviceClass {
        self.device
    }

    #[inline]
    pub fn pointer(&self) -> PointerState {
        self.pointer.state()
    }

    #[inline]
    pub fn radius(&self) -> &RadiusController {
        &self.radius
    }

    #[inline]
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    #[inline]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    #[inline]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    #[inline]
    pub fn resize_pending(&self) -> bool {
        self.pending_resize.is_some()
    }

    #[inline]
    pub fn sweeping(&self) -> bool {
        self.sweep.is_some()
    }

    /// Timers armed against the current grid.
    pub fn live_timers(&self) -> usize {
        self.scheduler.live_in(self.epoch)
    }

    /// Cells with a live per-frame motion.
    pub fn live_frames(&self) -> usize {
        self.grid.cells().iter().filter(|c| c.motion().is_some()).count()
    }

    pub fn timers_for(&self, cell: usize) -> usize {
        self.scheduler.live_for(cell, self.epoch)
    }

    pub fn sprites(&self) -> impl Iterator<Item = Sprite> + '_ {
        self.grid
            .cells()
            .iter()
            .map(move |cell| visual::sprite(cell, &self.config))
    }

    // Input

    pub fn handle_input(&mut self, input: PointerInput, now_ms: f64) -> InputOutcome {
        if self.torn_down {
            return InputOutcome::default();
        }
        let outcome = self.pointer.apply(input);
        match outcome.edge {
            Some(PressEdge::Pressed) => self.on_press(now_ms),
            Some(PressEdge::Released) => self.on_release(now_ms),
            None => {}
        }
        // Piano hover is skipped while held and on the release edge itself.
        let silent = matches!(self.driver, Driver::Piano(_))
            && (outcome.edge == Some(PressEdge::Released) || self.pointer.state().pressed);
        self.update_hover(now_ms, silent);
        if outcome.moved && self.pointer.state().pressed {
            self.activate_in_radius(now_ms);
        }
        outcome
    }

    fn on_press(&mut self, now_ms: f64) {
        self.radius.press(now_ms);
        if matches!(self.driver, Driver::Piano(_)) {
            self.activate_in_radius(now_ms);
            self.sweep = Some(now_ms + SWEEP_INTERVAL_MS);
        }
    }

    fn on_release(&mut self, now_ms: f64) {
        self.sweep = None;
        self.radius.release();
        if let Driver::Piano(plan) = self.driver {
            self.release_wave(now_ms, &plan);
        }
    }

    fn update_hover(&mut self, now_ms: f64, silent: bool) {
        let state = self.pointer.state();
        let next = if state.active {
            self.grid.cell_at(state.position())
        } else {
            None
        };
        if next == self.hovered {
            return;
        }
        let prev = std::mem::replace(&mut self.hovered, next);
        if silent {
            return;
        }
        if let Some(index) = prev {
            self.hover_leave(index, now_ms);
        }
        if let Some(index) = next {
            self.hover_enter(index, now_ms);
        }
    }

    fn hover_enter(&mut self, index: usize, now_ms: f64) {
        let Some(cell) = self.grid.get_mut(index) else {
            return;
        };
        match self.driver {
            Driver::HoverSpin { deg_per_sec, .. } => {
                if let Some(id) = cell.take_timer() {
                    self.scheduler.cancel(id);
                }
                cell.begin_spin(now_ms, deg_per_sec);
            }
            Driver::Piano(plan) => {
                if let Some(id) = cell.take_timer() {
                    self.scheduler.cancel(id);
                }
                cell.begin_grow(now_ms, &plan.timing);
            }
            Driver::Field(_) => {}
        }
    }

    fn hover_leave(&mut self, index: usize, now_ms: f64) {
        let epoch = self.epoch;
        let Some(cell) = self.grid.get_mut(index) else {
            return;
        };
        match self.driver {
            Driver::HoverSpin { hold_ms, .. } => {
                if cell.stop_spin() {
                    if let Some(id) = cell.take_timer() {
                        self.scheduler.cancel(id);
                    }
                    let id = self
                        .scheduler
                        .arm(index, TimerKind::ReturnHome, now_ms + hold_ms, epoch);
                    cell.set_timer(id);
                }
            }
            Driver::Piano(plan) => {
                if cell.defer_shrink(plan.leave_delay_ms) {
                    return;
                }
                if cell.phase() == Phase::Active {
                    if let Some(id) = cell.take_timer() {
                        self.scheduler.cancel(id);
                    }
                    let due = now_ms + plan.leave_delay_ms;
                    let id = self.scheduler.arm(index, TimerKind::ShrinkStart, due, epoch);
                    cell.set_timer(id);
                }
            }
            Driver::Field(_) => {}
        }
    }

    /// Start growing every idle or shrinking cell inside the press radius.
    fn activate_in_radius(&mut self, now_ms: f64) {
        let Driver::Piano(plan) = self.driver else {
            return;
        };
        if !self.radius.is_pressed() {
            return;
        }
        let pointer = self.pointer.state().position();
        let r = self.radius.radius();
        let r2 = r * r;
        for cell in self.grid.cells_mut() {
            if cell.phase().is_engaged() || cell.center().distance_squared(pointer) > r2 {
                continue;
            }
            if let Some(id) = cell.take_timer() {
                self.scheduler.cancel(id);
            }
            cell.begin_grow(now_ms, &plan.timing);
        }
    }

    fn release_wave(&mut self, now_ms: f64, plan: &PianoPlan) {
        let wave = release::plan_release(self.grid.cells(), plan.stagger_ms);
        let epoch = self.epoch;
        for step in &wave {
            let Some(cell) = self.grid.get_mut(step.cell) else {
                continue;
            };
            if let Some(id) = cell.take_timer() {
                self.scheduler.cancel(id);
            }
            let id = self.scheduler.arm(
                step.cell,
                TimerKind::ShrinkStart,
                now_ms + step.delay_ms,
                epoch,
            );
            cell.set_timer(id);
        }
        if let Some(last) = wave.last() {
            log::info!(
                "[release] {} cells, last shrink in {:.0}ms",
                wave.len(),
                last.delay_ms
            );
        }
    }

    // Lifecycle

    /// Schedule a rebuild for a new viewport. Repeated calls push the rebuild
    /// back so a resize storm produces one rebuild.
    pub fn request_resize(&mut self, viewport: Viewport, device: DeviceClass, now_ms: f64) {
        if self.torn_down {
            return;
        }
        self.pending_resize = Some(PendingResize {
            viewport,
            device,
            due_ms: now_ms + RESIZE_DEBOUNCE_MS,
        });
    }

    /// Replace the configuration and rebuild at once.
    pub fn reconfigure(&mut self, config: VariantConfig, now_ms: f64) {
        if self.torn_down {
            return;
        }
        if let Some(pending) = self.pending_resize.take() {
            self.viewport = pending.viewport;
            self.device = pending.device;
        }
        self.driver = config.driver();
        self.pointer.set_touch_scroll(config.touch_scroll());
        self.config = config;
        self.sweep = None;
        log::info!("[grid] reconfigured to {}", self.config.variant());
        self.rebuild(now_ms);
    }

    /// Discard every cell and pending timer. Safe to call repeatedly.
    pub fn teardown(&mut self) -> bool {
        if self.torn_down {
            return false;
        }
        self.torn_down = true;
        self.scheduler.clear();
        self.epoch += 1;
        self.grid = Grid::empty(self.epoch);
        self.hovered = None;
        self.sweep = None;
        self.pending_resize = None;
        log::info!("[grid] torn down at epoch {}", self.epoch);
        true
    }

    // Timers queued against the old epoch are not removed here; they are
    // dropped when they come due.
    fn rebuild(&mut self, now_ms: f64) {
        self.epoch += 1;
        self.radius = RadiusController::new(self.config.radius_config(), self.device);
        if self.pointer.state().pressed {
            self.radius.press(now_ms);
        }
        self.grid = Grid::populate(
            &self.config.grid_spec(),
            self.viewport,
            self.epoch,
            self.config.rest_values(),
        );
        self.hovered = None;
        let layout = self.grid.layout();
        log::debug!(
            "[grid] epoch {}: {}x{} -> {} cells",
            self.epoch,
            layout.rows,
            layout.cols,
            layout.count
        );
    }

    // Frame

    /// Advance everything to `now_ms`.
    pub fn advance(&mut self, now_ms: f64) {
        if self.torn_down {
            return;
        }
        if let Some(pending) = self.pending_resize {
            if now_ms >= pending.due_ms {
                self.pending_resize = None;
                self.viewport = pending.viewport;
                self.device = pending.device;
                self.rebuild(now_ms);
            }
        }
        self.run_sweep(now_ms);
        for fire in self.scheduler.drain_due(now_ms, self.epoch) {
            self.fire(fire);
        }
        self.radius.update(now_ms);
        match self.driver {
            Driver::Field(field) => {
                let pointer = self.pointer.state();
                let radius = self.radius.radius();
                for cell in self.grid.cells_mut() {
                    field.drive(cell, &pointer, radius, now_ms);
                }
            }
            Driver::Piano(plan) => self.step_motions(now_ms, &plan.timing),
            Driver::HoverSpin { .. } => self.step_motions(now_ms, &TweenTiming::default()),
        }
    }

    fn run_sweep(&mut self, now_ms: f64) {
        let Some(mut due) = self.sweep else {
            return;
        };
        let mut ticks = 0;
        while due <= now_ms {
            if ticks == SWEEP_MAX_CATCH_UP_TICKS {
                due = now_ms + SWEEP_INTERVAL_MS;
                break;
            }
            self.radius.step_tick();
            self.activate_in_radius(due);
            due += SWEEP_INTERVAL_MS;
            ticks += 1;
        }
        self.sweep = Some(due);
    }

    fn fire(&mut self, fire: TimerFire) {
        let Some(cell) = self.grid.get_mut(fire.cell) else {
            return;
        };
        if cell.timer() != Some(fire.id) {
            return;
        }
        cell.take_timer();
        match (fire.kind, self.driver) {
            (TimerKind::ShrinkStart, Driver::Piano(plan)) => {
                cell.request_shrink(fire.due_ms, &plan.timing);
            }
            (TimerKind::ReturnHome, Driver::HoverSpin { return_ms, .. }) => {
                cell.begin_return(fire.due_ms, return_ms, Easing::QuadOut);
            }
            _ => {}
        }
    }

    fn step_motions(&mut self, now_ms: f64, timing: &TweenTiming) {
        let epoch = self.epoch;
        for cell in self.grid.cells_mut() {
            if let StepEvent::ShrinkAfter { delay_ms } = cell.step(now_ms, timing) {
                if let Some(id) = cell.take_timer() {
                    self.scheduler.cancel(id);
                }
                let id = self.scheduler.arm(
                    cell.index(),
                    TimerKind::ShrinkStart,
                    now_ms + delay_ms,
                    epoch,
                );
                cell.set_timer(id);
            }
        }
    }
}
