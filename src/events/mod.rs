//! DOM listener registration. Every closure handed to the browser is kept in
//! a [`Listeners`] so unmounting can detach it again.

pub mod pointer;
pub mod resize;

use smallvec::SmallVec;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

#[derive(Default)]
pub struct Listeners {
    entries: SmallVec<[Listener; 12]>,
}

impl Listeners {
    /// Attach `handler` to `target`. Non-passive listeners may call
    /// `preventDefault`.
    pub fn add(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        passive: bool,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let options = web::AddEventListenerOptions::new();
        options.set_passive(passive);
        if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &options,
        ) {
            log::warn!("[events] failed to attach {kind}: {:?}", e);
            return;
        }
        self.entries.push(Listener {
            target: target.clone(),
            kind,
            closure,
        });
    }

    pub fn remove_all(&mut self) {
        for l in self.entries.drain(..) {
            _ = l
                .target
                .remove_event_listener_with_callback(l.kind, l.closure.as_ref().unchecked_ref());
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.remove_all();
    }
}
