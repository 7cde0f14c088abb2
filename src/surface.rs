//! `web_sys` adapters for the animator's drawing surface and sprite.

use crate::core::{DrawSurface, MotionState, Rect, SpriteHost};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }
}

impl DrawSurface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }

    fn set_stroke_rgba(&mut self, rgb: [u8; 3], alpha: f64) {
        let [r, g, b] = rgb;
        self.ctx
            .set_stroke_style_str(&format!("rgba({r},{g},{b},{alpha:.3})"));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.ctx.quadratic_curve_to(cx, cy, x, y);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }
}

pub struct ElementSprite {
    el: web::HtmlElement,
}

impl ElementSprite {
    pub fn new(el: web::HtmlElement) -> Self {
        Self { el }
    }
}

impl SpriteHost for ElementSprite {
    fn bounding_rect(&self) -> Option<Rect> {
        self.el.is_connected().then(|| dom::client_rect(&self.el))
    }

    fn apply(&mut self, state: &MotionState) {
        dom::set_transform(&self.el, &state.css_transform());
    }
}
