use crate::constants::{TRAIL_CANVAS_ID, TRAIL_CANVAS_PARENT, TRAIL_CANVAS_Z_INDEX};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Reuse `#akiraMouseTrail` or create it as a fixed, click-through, full-viewport canvas.
pub fn ensure_trail_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    if let Some(el) = document.get_element_by_id(TRAIL_CANVAS_ID) {
        if let Ok(canvas) = el.dyn_into::<web::HtmlCanvasElement>() {
            dom::sync_canvas_to_viewport(&canvas);
            return Ok(canvas);
        }
        log::warn!("#{} exists but is not a canvas; creating a new one", TRAIL_CANVAS_ID);
    }

    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_id(TRAIL_CANVAS_ID);
    for (property, value) in [
        ("position", "fixed"),
        ("top", "0"),
        ("left", "0"),
        ("pointer-events", "none"),
        ("z-index", TRAIL_CANVAS_Z_INDEX),
        ("background", "transparent"),
    ] {
        dom::set_style(&canvas, property, value);
    }

    let parent: web::Element = match dom::query(document, TRAIL_CANVAS_PARENT) {
        Some(p) => p,
        None => document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no body"))?
            .into(),
    };
    parent
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    dom::sync_canvas_to_viewport(&canvas);
    Ok(canvas)
}
