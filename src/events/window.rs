use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn listen_window(event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &opts,
        ) {
            log::warn!("{} listener: {:?}", event, e);
        }
    }
    closure.forget();
}

/// Page scroll notifications.
pub fn wire_scroll(handler: impl FnMut() + 'static) {
    listen_window("scroll", handler);
}

pub fn wire_resize(handler: impl FnMut() + 'static) {
    listen_window("resize", handler);
}

/// Called with `document.hidden` whenever page visibility changes.
pub fn wire_visibility_change(document: &web::Document, mut handler: impl FnMut(bool) + 'static) {
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || handler(doc.hidden())) as Box<dyn FnMut()>);
    if let Err(e) = document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref())
    {
        log::warn!("visibilitychange listener: {:?}", e);
    }
    closure.forget();
}
