use crate::core::SceneController;
use crate::dom;
use crate::presenter::DomPresenter;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[derive(Clone)]
pub struct LayoutWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<SceneController>>,
    pub presenter: Rc<RefCell<DomPresenter>>,
}

impl LayoutWiring {
    /// Lock text stack heights against the current layout.
    pub fn normalize(&self) {
        let mut presenter = self.presenter.borrow_mut();
        self.scene
            .borrow_mut()
            .normalize_viewports(&mut *presenter);
    }

    fn on_resize(&self) {
        dom::sync_canvas_backing_size(&self.canvas);
        self.scene.borrow_mut().on_resize(dom::viewport_width());
        self.normalize();
    }
}

/// Resize, load and font-ready hooks. Text metrics can change on each, so all
/// three re-run viewport locking; resize also re-picks the orbit radius.
pub fn wire_layout_handlers(w: LayoutWiring) {
    w.on_resize();

    let w_resize = w.clone();
    dom::add_passive_window_listener("resize", move |_ev: web::Event| {
        w_resize.on_resize();
    });

    let w_load = w.clone();
    dom::add_passive_window_listener("load", move |_ev: web::Event| {
        w_load.normalize();
    });

    wire_fonts_ready(w);
}

fn wire_fonts_ready(w: LayoutWiring) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let ready = match document.fonts().ready() {
        Ok(p) => p,
        Err(e) => {
            log::warn!("[fonts] ready promise unavailable: {:?}", e);
            return;
        }
    };
    spawn_local(async move {
        match JsFuture::from(ready).await {
            Ok(_) => {
                log::info!("[fonts] ready; re-locking text viewports");
                w.normalize();
            }
            Err(e) => log::warn!("[fonts] load failed: {:?}", e),
        }
    });
}
