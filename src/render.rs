//! Canvas 2D drawing of engine sprites.

use grid_core::{Engine, Glyph, Sprite};
use wasm_bindgen::JsValue;
use web_sys as web;

use crate::constants::{CURSOR_PATH, CURSOR_STROKE_WIDTH, CURSOR_VIEWBOX};

pub struct Painter {
    ctx: web::CanvasRenderingContext2d,
    cursor: web::Path2d,
}

impl Painter {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Result<Self, JsValue> {
        let cursor = web::Path2d::new_with_path_string(CURSOR_PATH)?;
        Ok(Self { ctx, cursor })
    }

    /// Clear to the variant background and draw every visible cell.
    pub fn draw(&self, engine: &Engine, dpr: f64) {
        let ctx = &self.ctx;
        let viewport = engine.viewport();
        _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        ctx.set_global_alpha(1.0);
        ctx.set_fill_style_str(&engine.config().background().to_string());
        ctx.fill_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
        for sprite in engine.sprites().filter(Sprite::is_visible) {
            self.draw_sprite(&sprite);
        }
    }

    fn draw_sprite(&self, s: &Sprite) {
        let ctx = &self.ctx;
        let origin = s.origin();
        let (w, h) = (s.width as f64, s.height as f64);
        ctx.save();
        _ = ctx.translate(origin.x as f64, origin.y as f64);
        _ = ctx.rotate((s.rotation_deg as f64).to_radians());
        ctx.set_global_alpha(s.alpha as f64);
        ctx.set_fill_style_str(&s.color.to_string());
        match s.glyph {
            Glyph::Line => ctx.fill_rect(-w / 2.0, -h / 2.0, w, h),
            Glyph::Cursor => {
                _ = ctx.scale(w / CURSOR_VIEWBOX, h / CURSOR_VIEWBOX);
                _ = ctx.translate(-CURSOR_VIEWBOX / 2.0, -CURSOR_VIEWBOX / 2.0);
                ctx.fill_with_path_2d(&self.cursor);
                if let Some(stroke) = s.stroke {
                    ctx.set_stroke_style_str(&stroke.to_string());
                    ctx.set_line_width(CURSOR_STROKE_WIDTH);
                    ctx.stroke_with_path(&self.cursor);
                }
            }
        }
        ctx.restore();
    }
}
