#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;

use anyhow::anyhow;
use grid_core::{Engine, Variant, VariantConfig};
use instant::Instant;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;
mod viewport;

use events::pointer::PointerWiring;
use events::Listeners;
use frame::{FrameContext, FrameLoop};

thread_local! {
    static AUTO_MOUNT: RefCell<Option<GridMount>> = const { RefCell::new(None) };
}

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{e:#}"))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("grid-web starting");
    match auto_mount() {
        Ok(Some(mount)) => AUTO_MOUNT.with(|slot| *slot.borrow_mut() = Some(mount)),
        Ok(None) => {}
        Err(e) => log::warn!("[grid] auto-mount skipped: {e:#}"),
    }
    Ok(())
}

/// Mount on `#app-canvas` when the page declares a `data-config` on it.
fn auto_mount() -> anyhow::Result<Option<GridMount>> {
    let (_, document) = dom::window_document()?;
    let Some(el) = document.get_element_by_id(constants::AUTO_MOUNT_CANVAS_ID) else {
        return Ok(None);
    };
    let Some(json) = el.get_attribute(constants::CONFIG_ATTRIBUTE) else {
        return Ok(None);
    };
    mount_inner(constants::AUTO_MOUNT_CANVAS_ID, &json).map(Some)
}

struct Mounted {
    engine: Rc<RefCell<Engine>>,
    listeners: Listeners,
    frames: FrameLoop,
    origin: Instant,
}

/// A grid animation attached to one canvas.
#[wasm_bindgen]
pub struct GridMount {
    inner: Option<Mounted>,
}

fn mount_inner(canvas_id: &str, config_json: &str) -> anyhow::Result<GridMount> {
    let (window, document) = dom::window_document()?;
    let canvas = dom::canvas_by_id(&document, canvas_id)?;
    let ctx = dom::context_2d(&canvas)?;
    let painter = render::Painter::new(ctx).map_err(|e| anyhow!(format!("{:?}", e)))?;
    let config = VariantConfig::from_json(config_json)?;

    let origin = Instant::now();
    dom::sync_canvas_backing_size(&window, &canvas);
    let engine = Rc::new(RefCell::new(Engine::new(
        config,
        dom::viewport(&window),
        dom::device_class(&window),
    )));

    let mut listeners = Listeners::default();
    events::pointer::wire(
        &mut listeners,
        &window,
        &document,
        PointerWiring {
            canvas: canvas.clone(),
            engine: engine.clone(),
            origin,
        },
    );
    events::resize::wire(&mut listeners, &window, &canvas, &engine, origin);
    log::debug!("[grid] {} listeners attached to #{canvas_id}", listeners.len());

    let ctx = Rc::new(RefCell::new(FrameContext {
        engine: engine.clone(),
        window: window.clone(),
        canvas,
        painter,
        origin,
    }));
    let frames = frame::start_loop(window, ctx);

    Ok(GridMount {
        inner: Some(Mounted {
            engine,
            listeners,
            frames,
            origin,
        }),
    })
}

/// Mount the grid described by `config_json` on the canvas with id
/// `canvas_id`.
#[wasm_bindgen]
pub fn mount(canvas_id: &str, config_json: &str) -> Result<GridMount, JsValue> {
    mount_inner(canvas_id, config_json).map_err(to_js)
}

#[wasm_bindgen]
impl GridMount {
    /// Swap in a new configuration and rebuild the grid.
    pub fn reconfigure(&mut self, config_json: &str) -> Result<(), JsValue> {
        let Some(m) = self.inner.as_ref() else {
            return Err(JsValue::from_str("grid is unmounted"));
        };
        let config = VariantConfig::from_json(config_json).map_err(|e| to_js(e.into()))?;
        m.engine
            .try_borrow_mut()
            .map_err(|_| JsValue::from_str("grid is busy"))?
            .reconfigure(config, frame::now_ms(m.origin));
        Ok(())
    }

    /// Detach listeners, stop the frame loop and drop every timer. Calling it
    /// again does nothing.
    pub fn unmount(&mut self) {
        let Some(mut m) = self.inner.take() else {
            return;
        };
        m.frames.stop();
        m.listeners.remove_all();
        if let Ok(mut engine) = m.engine.try_borrow_mut() {
            engine.teardown();
        }
        log::info!("[grid] unmounted");
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.inner.is_some()
    }

    #[wasm_bindgen(getter, js_name = cellCount)]
    pub fn cell_count(&self) -> usize {
        self.inner
            .as_ref()
            .map_or(0, |m| m.engine.borrow().cells().len())
    }

    #[wasm_bindgen(getter)]
    pub fn variant(&self) -> Option<String> {
        let m = self.inner.as_ref()?;
        let name = m.engine.borrow().config().variant().name().to_string();
        Some(name)
    }
}

impl Drop for GridMount {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Names accepted in the `variant` field of a configuration.
#[wasm_bindgen]
pub fn variants() -> js_sys::Array {
    Variant::ALL
        .iter()
        .map(|v| JsValue::from_str(v.name()))
        .collect()
}
