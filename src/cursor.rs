//! Trailing cursor ring: the dot snaps to the pointer, the ring eases after it.

use crate::dom;
use crate::frame;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use visuals_core::constants::CURSOR_FOLLOW_FACTOR;
use visuals_core::Smoothed;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const RING_ID: &str = "custom-cursor";
const DOT_ID: &str = "cursor-dot";

fn place(el: &web::HtmlElement, at: Vec2) {
    let style = el.style();
    _ = style.set_property("left", &format!("{}px", at.x));
    _ = style.set_property("top", &format!("{}px", at.y));
}

fn element(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document.get_element_by_id(id)?.dyn_into().ok()
}

/// Wire the follower if the page has both elements; otherwise do nothing.
pub fn install() {
    let Some(document) = dom::window_document() else {
        return;
    };
    let (Some(ring), Some(dot)) = (element(&document, RING_ID), element(&document, DOT_ID)) else {
        log::debug!("[cursor] #{} / #{} not on page", RING_ID, DOT_ID);
        return;
    };

    let ring_pos = Rc::new(RefCell::new(Smoothed::new(Vec2::ZERO, CURSOR_FOLLOW_FACTOR)));

    let target = ring_pos.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let at = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        place(&dot, at);
        target.borrow_mut().set_target(at);
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();

    frame::start_loop(move || {
        let at = ring_pos.borrow_mut().step();
        place(&ring, at);
        true
    });
}
