use crate::dom;
use crate::frame::SharedDriver;
use backdrop_core::ui::{self, HoverStyle};
use backdrop_core::{FrameClock, FrameDriver, RenderSurface};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const HAMBURGER_SELECTOR: &str = ".hamburger";
pub const NAV_MENU_SELECTOR: &str = ".nav-menu";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const FORM_SELECTOR: &str = "form";
pub const FORM_NAME_SELECTOR: &str = "input[type=\"text\"]";
pub const LOGO_SELECTOR: &str = ".platform-logo";
pub const CARD_SELECTOR: &str = ".cyber-card";
pub const SECTION_SELECTOR: &str = "section";
pub const ACTIVE_CLASS: &str = "active";

/// Wire every page convenience that does not depend on the renderer.
pub fn wire_page_ui(document: &web::Document) {
    wire_nav_toggle(document);
    wire_smooth_scroll(document);
    wire_contact_form(document);
    wire_hover(document, LOGO_SELECTOR, &ui::LOGO_HOVER);
    wire_hover(document, CARD_SELECTOR, &ui::CARD_HOVER);
    wire_section_reveal(document);
}

pub fn wire_resize(window: &web::Window, driver: SharedDriver) {
    let win = window.clone();
    dom::add_listener(window, "resize", move |_| {
        let viewport = dom::viewport(&win);
        driver.borrow_mut().resize(viewport);
    });
}

/// Stop the driver when the page is really being discarded. A page entering
/// the back/forward cache keeps its driver; the browser pauses rAF itself and
/// the loop picks up again on restore.
pub fn wire_pagehide<C, S>(window: &web::Window, driver: Rc<RefCell<FrameDriver<C, S>>>)
where
    C: FrameClock + 'static,
    S: RenderSurface + 'static,
{
    dom::add_listener(window, "pagehide", move |ev| {
        let persisted = ev
            .dyn_ref::<web::PageTransitionEvent>()
            .map(|e| e.persisted())
            .unwrap_or(false);
        if persisted {
            log::debug!("[events] page cached; keeping the frame loop");
            return;
        }
        driver.borrow_mut().stop();
    });
}

pub fn wire_nav_toggle(document: &web::Document) {
    let Ok(Some(hamburger)) = document.query_selector(HAMBURGER_SELECTOR) else {
        return;
    };
    let nav = document.query_selector(NAV_MENU_SELECTOR).ok().flatten();
    let button = hamburger.clone();
    dom::add_listener(&hamburger, "click", move |_| {
        let _ = button.class_list().toggle(ACTIVE_CLASS);
        if let Some(nav) = &nav {
            let _ = nav.class_list().toggle(ACTIVE_CLASS);
        }
    });
}

pub fn wire_smooth_scroll(document: &web::Document) {
    for anchor in dom::query_all(document, ANCHOR_SELECTOR) {
        let doc = document.clone();
        let link = anchor.clone();
        dom::add_listener(&anchor, "click", move |ev| {
            ev.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(selector) = ui::anchor_target(&href) else {
                return;
            };
            if let Ok(Some(target)) = doc.query_selector(selector) {
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                opts.set_block(web::ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        });
    }
}

pub fn wire_contact_form(document: &web::Document) {
    let Some(form) = document
        .query_selector(FORM_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        return;
    };
    let f = form.clone();
    dom::add_listener(&form, "submit", move |ev| {
        ev.prevent_default();
        if let Some(w) = web::window() {
            let _ = w.alert_with_message(&contact_message(&f));
        }
        f.reset();
    });
}

/// Thank-you text for the name currently typed into `form`.
pub fn contact_message(form: &web::HtmlFormElement) -> String {
    let name = form
        .query_selector(FORM_NAME_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default();
    ui::contact_thanks(&name)
}

pub fn wire_hover(document: &web::Document, selector: &str, table: &'static [HoverStyle]) {
    for el in dom::query_all(document, selector) {
        let enter_el = el.clone();
        dom::add_listener(&el, "mouseenter", move |_| {
            apply_hover(&enter_el, table, true);
        });
        let leave_el = el.clone();
        dom::add_listener(&el, "mouseleave", move |_| {
            apply_hover(&leave_el, table, false);
        });
    }
}

fn apply_hover(el: &web::Element, table: &[HoverStyle], entering: bool) {
    let styles: Vec<(&str, &str)> = table
        .iter()
        .map(|s| (s.property, if entering { s.enter } else { s.leave }))
        .collect();
    dom::set_styles(el, &styles);
}

pub fn wire_section_reveal(document: &web::Document) {
    let sections = dom::query_all(document, SECTION_SELECTOR);
    if sections.is_empty() {
        return;
    }
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                dom::set_styles(&entry.target(), &ui::REVEAL_SHOWN);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array)>);
    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&ui::REVEAL_THRESHOLD.into());
    options.set_root_margin(ui::REVEAL_ROOT_MARGIN);
    let observer = match web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(o) => o,
        Err(e) => {
            log::warn!("IntersectionObserver unavailable: {:?}", e);
            return;
        }
    };
    callback.forget();
    for section in sections {
        dom::set_styles(&section, &ui::REVEAL_HIDDEN);
        observer.observe(&section);
    }
}
