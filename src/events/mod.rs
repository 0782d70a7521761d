//! DOM listeners that translate page events into [`InputEvent`]s.
//!
//! Every listener only pushes into the queue of the scene it was wired for;
//! the scene applies them on its next frame.

mod pointer;

use crate::dom;
use visuals_core::{InputEvent, InputSender, SceneKind};
use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_scene_input(kind: SceneKind, canvas: &web::HtmlCanvasElement, input: InputSender) {
    wire_resize(canvas, input.clone());
    match kind {
        SceneKind::Sphere => pointer::wire_pointer_handlers(canvas, input),
        SceneKind::Helix => wire_scroll(input),
        SceneKind::Field | SceneKind::Heart => {}
    }
}

fn wire_resize(canvas: &web::HtmlCanvasElement, input: InputSender) {
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (width, height) = dom::sync_canvas_backing_size(&canvas);
        input.push(InputEvent::Resize { width, height });
    }) as Box<dyn FnMut()>);
    add_window_listener("resize", &closure);
    closure.forget();
}

fn wire_scroll(input: InputSender) {
    input.push(InputEvent::Scroll {
        offset_y: dom::scroll_y(),
    });
    let closure = Closure::wrap(Box::new(move || {
        input.push(InputEvent::Scroll {
            offset_y: dom::scroll_y(),
        });
    }) as Box<dyn FnMut()>);
    add_window_listener("scroll", &closure);
    closure.forget();
}

pub(crate) fn add_window_listener<F: ?Sized + WasmClosure>(event: &str, closure: &Closure<F>) {
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
}
