//! Pointer tracking: mouse and touch input folded into one `(x, y, pressed)`
//! stream.

use glam::Vec2;

/// Latest pointer snapshot. Written only by [`PointerTracker::apply`]; the
/// animation driver reads it once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    /// Pointer is over the surface (hover variants ignore inactive pointers).
    pub active: bool,
    pub pressed: bool,
}

impl PointerState {
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Raw input normalized from DOM mouse and touch events, in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    MouseMove { x: f32, y: f32 },
    MouseDown { x: f32, y: f32 },
    MouseUp,
    MouseLeave,
    TouchStart { x: f32, y: f32 },
    TouchMove { x: f32, y: f32 },
    TouchEnd,
}

/// How touch input interacts with native page scrolling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TouchScroll {
    /// Never call `preventDefault`.
    #[default]
    Allow,
    /// Drag-style interaction: suppress on touch-start and on touch-move while
    /// pressed.
    Suppress,
}

/// Press transitions reported by the tracker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressEdge {
    Pressed,
    Released,
}

/// What the caller should do after feeding an input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputOutcome {
    pub prevent_default: bool,
    pub edge: Option<PressEdge>,
    /// Position or hover activity changed.
    pub moved: bool,
}

#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    state: PointerState,
    touch_scroll: TouchScroll,
}

impl PointerTracker {
    pub fn new(touch_scroll: TouchScroll) -> Self {
        Self {
            state: PointerState::default(),
            touch_scroll,
        }
    }

    #[inline]
    pub fn state(&self) -> PointerState {
        self.state
    }

    pub fn set_touch_scroll(&mut self, touch_scroll: TouchScroll) {
        self.touch_scroll = touch_scroll;
    }

    pub fn apply(&mut self, input: PointerInput) -> InputOutcome {
        let was_pressed = self.state.pressed;
        let mut out = InputOutcome::default();
        match input {
            PointerInput::MouseMove { x, y } => {
                self.move_to(x, y);
                out.moved = true;
            }
            PointerInput::MouseDown { x, y } => {
                self.move_to(x, y);
                self.state.pressed = true;
                out.moved = true;
            }
            PointerInput::MouseUp => {
                self.state.pressed = false;
            }
            PointerInput::MouseLeave | PointerInput::TouchEnd => {
                self.state.pressed = false;
                self.state.active = false;
                out.moved = true;
            }
            PointerInput::TouchStart { x, y } => {
                self.move_to(x, y);
                self.state.pressed = true;
                out.moved = true;
                out.prevent_default = self.touch_scroll == TouchScroll::Suppress;
            }
            PointerInput::TouchMove { x, y } => {
                self.move_to(x, y);
                out.moved = true;
                out.prevent_default = self.touch_scroll == TouchScroll::Suppress && was_pressed;
            }
        }
        out.edge = match (was_pressed, self.state.pressed) {
            (false, true) => Some(PressEdge::Pressed),
            (true, false) => Some(PressEdge::Released),
            _ => None,
        };
        out
    }

    #[inline]
    fn move_to(&mut self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.state.x = x;
            self.state.y = y;
        }
        self.state.active = true;
    }
}
