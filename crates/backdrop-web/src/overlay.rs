use crate::dom;
use backdrop_core::{BackdropError, OverlaySchedule, LOAD_ERROR_MESSAGE};
use wasm_bindgen::JsCast;
use web_sys as web;

pub const OVERLAY_ID: &str = "loading-overlay";
pub const FADE_CLASS: &str = "fade-out";

#[inline]
pub fn begin_fade(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        let _ = el.class_list().add_1(FADE_CLASS);
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        dom::set_styles(&el, &[("display", "none")]);
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(OVERLAY_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .map(|el| el.style().get_property_value("display").ok().as_deref() == Some("none"))
        .unwrap_or(false)
}

/// Replace the overlay's content with the static load-failure message.
pub fn show_error(document: &web::Document) {
    match document.get_element_by_id(OVERLAY_ID) {
        Some(el) => el.set_inner_html(LOAD_ERROR_MESSAGE),
        None => log::warn!("#{} missing; cannot show load error", OVERLAY_ID),
    }
}

/// Startup failed: log it and leave the error message where the loader was.
pub fn report_init_failure(document: &web::Document, err: &BackdropError) {
    log::error!("An error occurred during backdrop initialization: {}", err);
    show_error(document);
}

/// Fade the overlay out after the first delay, then hide it outright after the
/// second whether or not the CSS transition ran.
pub fn schedule_dismiss(window: &web::Window, document: &web::Document, schedule: OverlaySchedule) {
    let doc = document.clone();
    let win = window.clone();
    dom::set_timeout(window, schedule.fade_delay_ms, move || {
        begin_fade(&doc);
        dom::set_timeout(&win, schedule.remove_delay_ms, move || hide(&doc));
    });
}
