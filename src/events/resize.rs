use std::cell::RefCell;
use std::rc::Rc;

use grid_core::Engine;
use instant::Instant;
use web_sys as web;

use super::Listeners;
use crate::dom;
use crate::frame::now_ms;

/// Resize the backing store at once; the grid rebuild itself is debounced by
/// the engine.
pub fn wire(
    listeners: &mut Listeners,
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    engine: &Rc<RefCell<Engine>>,
    origin: Instant,
) {
    let win = window.clone();
    let canvas = canvas.clone();
    let engine = engine.clone();
    listeners.add(window, "resize", true, move |_ev: web::Event| {
        dom::sync_canvas_backing_size(&win, &canvas);
        if let Ok(mut engine) = engine.try_borrow_mut() {
            engine.request_resize(dom::viewport(&win), dom::device_class(&win), now_ms(origin));
        }
    });
}
