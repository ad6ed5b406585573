// DOM event -> engine input normalization. Pure; the listeners in
// `events::pointer` extract coordinates and hand them here.

use grid_core::PointerInput;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseKind {
    Down,
    Move,
    Up,
    Leave,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchKind {
    Start,
    Move,
    End,
    Cancel,
}

// (event name, kind) pairs registered on mount
pub const MOUSE_EVENTS: [(&str, MouseKind); 3] = [
    ("mousedown", MouseKind::Down),
    ("mousemove", MouseKind::Move),
    ("mouseup", MouseKind::Up),
];
pub const MOUSE_LEAVE_EVENT: &str = "mouseleave";
pub const TOUCH_EVENTS: [(&str, TouchKind); 4] = [
    ("touchstart", TouchKind::Start),
    ("touchmove", TouchKind::Move),
    ("touchend", TouchKind::End),
    ("touchcancel", TouchKind::Cancel),
];

/// Client coordinates relative to the canvas' top-left corner, in CSS pixels.
#[inline]
pub fn to_local(client_x: f32, client_y: f32, left: f32, top: f32) -> (f32, f32) {
    (client_x - left, client_y - top)
}

pub fn mouse_input(kind: MouseKind, x: f32, y: f32) -> PointerInput {
    match kind {
        MouseKind::Down => PointerInput::MouseDown { x, y },
        MouseKind::Move => PointerInput::MouseMove { x, y },
        MouseKind::Up => PointerInput::MouseUp,
        MouseKind::Leave => PointerInput::MouseLeave,
    }
}

/// `first` is the first active touch point, if the event carries one. A
/// start or move without a touch point is dropped.
pub fn touch_input(kind: TouchKind, first: Option<(f32, f32)>) -> Option<PointerInput> {
    match (kind, first) {
        (TouchKind::Start, Some((x, y))) => Some(PointerInput::TouchStart { x, y }),
        (TouchKind::Move, Some((x, y))) => Some(PointerInput::TouchMove { x, y }),
        (TouchKind::Start | TouchKind::Move, None) => None,
        (TouchKind::End | TouchKind::Cancel, _) => Some(PointerInput::TouchEnd),
    }
}
