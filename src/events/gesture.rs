use crate::core::SceneController;
use crate::dom;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Wheel and touch listeners feeding the scene's gesture throttle. Accepted
/// gestures queue tweens on the scene; the frame loop does the rest.
pub fn wire_gesture_handlers(scene: Rc<RefCell<SceneController>>) {
    wire_wheel(scene.clone());
    wire_touchstart(scene.clone());
    wire_touchend(scene);
}

fn wire_wheel(scene: Rc<RefCell<SceneController>>) {
    dom::add_passive_window_listener("wheel", move |ev: web::WheelEvent| {
        if let Some(t) = scene.borrow_mut().on_wheel(ev.delta_y(), Instant::now()) {
            log::info!("[wheel] {:?} -> index {:?}", t.direction, t.index);
        }
    });
}

fn wire_touchstart(scene: Rc<RefCell<SceneController>>) {
    dom::add_passive_window_listener("touchstart", move |ev: web::TouchEvent| {
        scene.borrow_mut().on_touch_start(first_touch_y(&ev.touches()));
    });
}

fn wire_touchend(scene: Rc<RefCell<SceneController>>) {
    dom::add_passive_window_listener("touchend", move |ev: web::TouchEvent| {
        let end_y = first_touch_y(&ev.changed_touches());
        if let Some(t) = scene.borrow_mut().on_touch_end(end_y, Instant::now()) {
            log::info!("[swipe] {:?} -> index {:?}", t.direction, t.index);
        }
    });
}

#[inline]
fn first_touch_y(touches: &web::TouchList) -> Option<f64> {
    touches.get(0).map(|t| t.client_y() as f64)
}
