use std::cell::{Cell, RefCell};
use std::rc::Rc;

use grid_core::Engine;
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::render::Painter;

/// Milliseconds since `origin`; the engine's clock.
#[inline]
pub fn now_ms(origin: Instant) -> f64 {
    origin.elapsed().as_secs_f64() * 1000.0
}

pub struct FrameContext {
    pub engine: Rc<RefCell<Engine>>,
    pub window: web::Window,
    pub canvas: web::HtmlCanvasElement,
    pub painter: Painter,
    pub origin: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = now_ms(self.origin);
        let Ok(mut engine) = self.engine.try_borrow_mut() else {
            return;
        };
        engine.advance(now);
        if engine.is_torn_down() {
            return;
        }
        let dpr = dom::sync_canvas_backing_size(&self.window, &self.canvas);
        self.painter.draw(&engine, dpr);
    }
}

/// Handle to a running requestAnimationFrame loop.
pub struct FrameLoop {
    window: web::Window,
    handle: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    /// Cancel the pending frame and release the callback. Idempotent.
    pub fn stop(&self) {
        if let Some(id) = self.handle.take() {
            _ = self.window.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request(window: &web::Window, tick: &RefCell<Option<Closure<dyn FnMut()>>>) -> Option<i32> {
    let tick = tick.borrow();
    let cb = tick.as_ref()?;
    window.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

pub fn start_loop(window: web::Window, ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let handle_clone = handle.clone();
    let win = window.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        ctx.borrow_mut().frame();
        // After stop() the slot is empty and nothing is rescheduled.
        handle_clone.set(request(&win, &tick_clone));
    }) as Box<dyn FnMut()>));

    handle.set(request(&window, &tick));
    FrameLoop {
        window,
        handle,
        tick,
    }
}
