#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::core::{planet_styles, Camera, SceneConfig, SceneController, ViewPresenter};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod presenter;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orbit-carousel starting");

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

    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::sync_canvas_backing_size(&canvas);

    let presenter = presenter::DomPresenter::new(&document);
    let config = SceneConfig::default();
    let orbit_items = config.orbit_items;
    let scene = SceneController::new(config, presenter.carousel_len(), dom::viewport_width())
        .map_err(|e| anyhow::anyhow!("scene config: {}", e))?;

    let scene = Rc::new(RefCell::new(scene));
    let presenter = Rc::new(RefCell::new(presenter));

    events::wire_layout_handlers(events::LayoutWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        presenter: presenter.clone(),
    });
    events::wire_gesture_handlers(scene.clone());

    let camera = Camera::facing_origin(CAMERA_Z, CAMERA_FOVY_DEG, CAMERA_ZNEAR, CAMERA_ZFAR);
    let styles = planet_styles(orbit_items, PLANET_SURFACE_SEED);
    // Without WebGPU the text carousel keeps working; only the planets are lost.
    let gpu = frame::init_gpu(&canvas, camera, styles).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        presenter,
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
