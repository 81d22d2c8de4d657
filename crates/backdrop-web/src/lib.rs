#![cfg(target_arch = "wasm32")]
use backdrop_core::{
    BackdropError, FrameDriver, InstantClock, OverlaySchedule, SceneConfig, SceneState,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub mod dom;
pub mod events;
pub mod frame;
pub mod overlay;
pub mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web starting");

    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    dom::on_page_ready(&window, || {
        if let Some(document) = dom::window_document() {
            events::wire_page_ui(&document);
        }
        spawn_local(async move {
            if let Err(e) = init().await {
                let err = BackdropError::init(format!("{:#}", e));
                match dom::window_document() {
                    Some(document) => overlay::report_init_failure(&document, &err),
                    None => log::error!("{}", err),
                }
            }
        });
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(dom::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", dom::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let scene = SceneState::new(&SceneConfig::default(), dom::viewport(&window))?;
    let gpu = render::GpuState::new(canvas, &scene).await?;

    let driver = Rc::new(RefCell::new(FrameDriver::new(
        scene,
        InstantClock::default(),
        gpu,
    )));
    driver.borrow_mut().start();
    frame::start_loop(driver.clone());

    overlay::schedule_dismiss(&window, &document, OverlaySchedule::default());
    events::wire_resize(&window, driver.clone());
    events::wire_pagehide(&window, driver);
    log::info!("backdrop running");
    Ok(())
}
