use std::cell::RefCell;
use std::rc::Rc;

use grid_core::{Engine, PointerInput};
use instant::Instant;
use wasm_bindgen::JsCast;
use web_sys as web;

use super::Listeners;
use crate::frame::now_ms;
use crate::input::{self, MouseKind, MOUSE_EVENTS, MOUSE_LEAVE_EVENT, TOUCH_EVENTS};

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub engine: Rc<RefCell<Engine>>,
    pub origin: Instant,
}

impl PointerWiring {
    fn local(&self, client_x: f32, client_y: f32) -> (f32, f32) {
        let rect = self.canvas.get_bounding_client_rect();
        input::to_local(client_x, client_y, rect.left() as f32, rect.top() as f32)
    }

    /// Feed one input; `true` when the event's default action must be
    /// suppressed.
    fn dispatch(&self, input: PointerInput) -> bool {
        // A listener firing while the frame callback holds the engine is
        // dropped rather than panicking.
        let Ok(mut engine) = self.engine.try_borrow_mut() else {
            return false;
        };
        engine.handle_input(input, now_ms(self.origin)).prevent_default
    }
}

pub fn wire(listeners: &mut Listeners, window: &web::Window, document: &web::Document, w: PointerWiring) {
    for (name, kind) in MOUSE_EVENTS {
        let w = w.clone();
        listeners.add(window, name, true, move |ev: web::Event| {
            let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            let (x, y) = w.local(ev.client_x() as f32, ev.client_y() as f32);
            w.dispatch(input::mouse_input(kind, x, y));
        });
    }

    // The window itself never reports leaving; the root element does.
    if let Some(root) = document.document_element() {
        let w = w.clone();
        listeners.add(&root, MOUSE_LEAVE_EVENT, true, move |_ev: web::Event| {
            w.dispatch(input::mouse_input(MouseKind::Leave, 0.0, 0.0));
        });
    }

    for (name, kind) in TOUCH_EVENTS {
        let w = w.clone();
        listeners.add(window, name, false, move |ev: web::Event| {
            let Some(tev) = ev.dyn_ref::<web::TouchEvent>() else {
                return;
            };
            let first = tev
                .touches()
                .get(0)
                .map(|t| w.local(t.client_x() as f32, t.client_y() as f32));
            let Some(input) = input::touch_input(kind, first) else {
                return;
            };
            if w.dispatch(input) {
                ev.prevent_default();
            }
        });
    }
}
