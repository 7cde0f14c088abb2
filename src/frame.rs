use crate::core::trigger::{ScrollRange, TriggerEdge};
use crate::core::{Animator, ScrollSample, Viewport};
use crate::dom;
use crate::surface::{CanvasSurface, ElementSprite};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Render-loop state for the chase sprite.
pub struct FrameContext {
    pub animator: Animator<CanvasSurface, ElementSprite>,
    pub canvas: web::HtmlCanvasElement,
    /// Element whose top starts the horizontal travel; without it the animator
    /// falls back to whole-page progress.
    pub progress_trigger: Option<web::Element>,
    pub progress_range: Option<ScrollRange>,
    pub started: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        let viewport = self.animator.viewport();
        let offset = dom::scroll_offset();
        let scroll = ScrollSample {
            offset,
            page_ratio: dom::page_ratio(offset, &viewport),
        };
        self.animator.frame(now_ms, scroll);
    }

    /// Scroll notification: feed trigger progress to the animator.
    pub fn on_scroll(&mut self, offset: f64) {
        if let Some(range) = self.progress_range {
            self.animator.on_progress(range.progress(offset));
        }
    }

    /// Re-measure the trigger and canvas after a layout change.
    pub fn refresh(&mut self, offset: f64, viewport: Viewport) {
        self.animator.set_viewport(viewport);
        dom::sync_canvas_to_viewport(&self.canvas);
        if viewport.is_degenerate() {
            return;
        }
        let end = TriggerEdge::below_top(self.animator.config().progress_range_vh / 100.0);
        self.progress_range = self.progress_trigger.as_ref().map(|el| {
            ScrollRange::from_edges(
                TriggerEdge::TOP_TOP,
                end,
                dom::element_span(el, offset),
                viewport.height,
            )
        });
        self.on_scroll(offset);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame: {:?}", e);
        }
    }
}
