#![cfg(target_arch = "wasm32")]
use crate::constants::{UFO_CONFIG_ATTR, UFO_SELECTOR};
use crate::core::{Animator, AnimatorConfig, DeviceProfile};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod ready;
mod scene;
mod surface;

/// Profile defaults, overridden by JSON on the sprite's `data-chase-config`.
fn load_config(host: &web::HtmlElement, profile: DeviceProfile) -> AnimatorConfig {
    let Some(json) = host.get_attribute(UFO_CONFIG_ATTR) else {
        return AnimatorConfig::for_profile(profile);
    };
    match AnimatorConfig::with_overrides(profile, &json) {
        Ok(config) => {
            log::info!("[chase] using {} overrides", UFO_CONFIG_ATTR);
            config
        }
        Err(e) => {
            log::warn!("[chase] ignoring {}: {:#}", UFO_CONFIG_ATTR, e);
            AnimatorConfig::for_profile(profile)
        }
    }
}

/// Chase sprite + trail; `Ok(None)` when the page has no sprite.
fn build_chase(
    document: &web::Document,
    profile: DeviceProfile,
) -> anyhow::Result<Option<Rc<RefCell<frame::FrameContext>>>> {
    let Some(host) = dom::query_html(document, UFO_SELECTOR) else {
        log::info!("[chase] {} not on page, skipping", UFO_SELECTOR);
        return Ok(None);
    };
    let config = load_config(&host, profile);
    let canvas = overlay::ensure_trail_canvas(document)?;
    let trail_surface = surface::CanvasSurface::new(canvas.clone())?;
    let animator = Animator::new(
        config,
        trail_surface,
        surface::ElementSprite::new(host),
        dom::viewport(),
    )?;

    let mut ctx = frame::FrameContext {
        animator,
        canvas,
        progress_trigger: dom::query(document, crate::core::parallax::PARALLAX_WRAPPER),
        progress_range: None,
        started: Instant::now(),
    };
    ctx.refresh(dom::scroll_offset(), dom::viewport());
    Ok(Some(Rc::new(RefCell::new(ctx))))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("turboturtle-fx starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    ready::dom_ready(&document).await?;

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let profile = DeviceProfile::from_user_agent(&dom::user_agent());
    log::info!("[boot] profile={:?} viewport={:?}", profile, dom::viewport());

    let scene = Rc::new(RefCell::new(scene::Scene::bind(&document, profile)));
    scene
        .borrow_mut()
        .refresh(dom::scroll_offset(), &dom::viewport());

    // Each effect is optional; a failed chase setup leaves the rest running
    let chase = match build_chase(&document, profile) {
        Ok(c) => c,
        Err(e) => {
            log::error!("[chase] setup failed: {:?}", e);
            None
        }
    };

    {
        let scene = scene.clone();
        let chase = chase.clone();
        events::wire_scroll(move || {
            let offset = dom::scroll_offset();
            scene.borrow_mut().on_scroll(offset, &dom::viewport());
            if let Some(c) = &chase {
                c.borrow_mut().on_scroll(offset);
            }
        });
    }
    {
        let scene = scene.clone();
        let chase = chase.clone();
        events::wire_resize(move || {
            let offset = dom::scroll_offset();
            let viewport = dom::viewport();
            scene.borrow_mut().refresh(offset, &viewport);
            if let Some(c) = &chase {
                c.borrow_mut().refresh(offset, viewport);
            }
        });
    }
    {
        let scene = scene.clone();
        events::wire_visibility_change(&document, move |hidden| {
            scene.borrow_mut().on_visibility(hidden, &dom::viewport());
        });
    }

    if let Some(c) = chase {
        frame::start_loop(c);
        log::info!("[boot] chase loop running");
    }
    Ok(())
}
