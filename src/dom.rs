use anyhow::anyhow;
use grid_core::{DeviceClass, Viewport};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::viewport;

pub fn window_document() -> anyhow::Result<(web::Window, web::Document)> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window.document().ok_or_else(|| anyhow!("no document"))?;
    Ok((window, document))
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("no element #{id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!(format!("#{id} is not a canvas: {:?}", e)))
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!(format!("{:?}", e)))
}

/// The layout viewport in CSS pixels.
pub fn viewport(window: &web::Window) -> Viewport {
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
    Viewport::new(dim(window.inner_width()), dim(window.inner_height()))
}

pub fn device_class(window: &web::Window) -> DeviceClass {
    let has_ontouchstart =
        js_sys::Reflect::has(window, &JsValue::from_str("ontouchstart")).unwrap_or(false);
    let max_touch_points = window.navigator().max_touch_points();
    DeviceClass::classify(
        viewport::touch_capable(max_touch_points, has_ontouchstart),
        viewport(window).width,
    )
}

/// Match the backing store to the canvas' CSS size. Returns the pixel ratio
/// the renderer should scale by.
pub fn sync_canvas_backing_size(window: &web::Window, canvas: &web::HtmlCanvasElement) -> f64 {
    let dpr = viewport::effective_dpr(window.device_pixel_ratio());
    let rect = canvas.get_bounding_client_rect();
    let (w, h) = viewport::backing_size(rect.width(), rect.height(), dpr);
    if canvas.width() != w || canvas.height() != h {
        canvas.set_width(w);
        canvas.set_height(h);
        log::debug!("[dom] canvas backing store {w}x{h} (dpr {dpr})");
    }
    dpr
}
