use crate::constants::MAX_FRAME_DT_SEC;
use crate::core::{SceneController, TweenTarget};
use crate::presenter::DomPresenter;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<SceneController>>,
    pub presenter: Rc<RefCell<DomPresenter>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        // Idle spin and gesture tweens advance together; spin never pauses.
        let snapshot = {
            let mut scene = self.scene.borrow_mut();
            let moved = scene.tick(Duration::from_secs_f32(dt_sec));
            let text_moved = moved
                .iter()
                .any(|t| matches!(t, TweenTarget::HeadingOffset | TweenTarget::ParagraphOffset));
            if text_moved {
                scene.apply_text_offsets(&mut *self.presenter.borrow_mut());
            }
            scene.snapshot()
        };

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(dt_sec, &snapshot) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    camera: crate::core::Camera,
    styles: Vec<crate::core::PlanetStyle>,
) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, camera, styles).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
