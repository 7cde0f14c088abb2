use crate::core::trigger::{self, ElementSpan};
use crate::core::{Rect, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Current `innerWidth`/`innerHeight`; zero when unavailable.
pub fn viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::default();
    };
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Viewport::new(dim(w.inner_width()), dim(w.inner_height()))
}

#[inline]
pub fn scroll_offset() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Fraction of the document scrolled at `offset`.
pub fn page_ratio(offset: f64, viewport: &Viewport) -> f64 {
    let scroll_height = window_document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    trigger::page_ratio(offset, scroll_height, viewport.height)
}

pub fn user_agent() -> String {
    web::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default()
}

#[inline]
pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_html(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    query(document, selector).and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn client_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Element geometry in document coordinates at scroll `offset`.
pub fn element_span(el: &web::Element, offset: f64) -> ElementSpan {
    let r = client_rect(el);
    ElementSpan {
        top: r.top + offset,
        height: r.height,
    }
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::warn!("set {} failed: {:?}", property, e);
    }
}

#[inline]
pub fn set_transform(el: &web::HtmlElement, css: &str) {
    set_style(el, "transform", css);
}

/// Size the canvas backing store to the viewport in CSS px.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) {
    let vp = viewport();
    canvas.set_width(vp.width.max(0.0) as u32);
    canvas.set_height(vp.height.max(0.0) as u32);
}
