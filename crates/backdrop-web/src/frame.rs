use crate::render::GpuState;
use backdrop_core::{FrameDriver, InstantClock};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type Driver = FrameDriver<InstantClock, GpuState>;
pub type SharedDriver = Rc<RefCell<Driver>>;

/// Drive `driver` from `requestAnimationFrame` until it leaves `Running`.
pub fn start_loop(driver: SharedDriver) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let running = {
            let mut d = driver.borrow_mut();
            d.tick();
            d.is_running()
        };
        if !running {
            return;
        }
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
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    }
}
