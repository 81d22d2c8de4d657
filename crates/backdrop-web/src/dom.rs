use backdrop_core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const CANVAS_ID: &str = "three-canvas";

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Current window size in CSS pixels plus the clamped device pixel ratio.
pub fn viewport(window: &web::Window) -> Viewport {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
    };
    Viewport::new(
        dim(window.inner_width()),
        dim(window.inner_height()),
        window.device_pixel_ratio(),
    )
}

/// Every element matching `selector`; an invalid selector yields nothing.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("bad selector {selector}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn set_styles(el: &web::Element, styles: &[(&str, &str)]) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        let style = html.style();
        for (prop, value) in styles {
            let _ = style.set_property(prop, value);
        }
    }
}

#[inline]
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure =
        Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(web::Event)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout(window: &web::Window, ms: u32, f: impl FnOnce() + 'static) {
    let cb = Closure::once_into_js(f);
    if let Err(e) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms as i32)
    {
        log::error!("setTimeout failed: {:?}", e);
    }
}

/// Run `f` once the page has finished loading (immediately if it already has).
pub fn on_page_ready(window: &web::Window, f: impl FnOnce() + 'static) {
    let loaded = window
        .document()
        .map(|d| d.ready_state() == "complete")
        .unwrap_or(false);
    if loaded {
        f();
        return;
    }
    let cb = Closure::once_into_js(f);
    let _ = window.add_event_listener_with_callback("load", cb.unchecked_ref());
}
