use super::add_window_listener;
use glam::Vec2;
use visuals_core::input::ndc_from_surface;
use visuals_core::{InputEvent, InputSender};
use wasm_bindgen::closure::Closure;
use web_sys as web;

/// Pointer position relative to `canvas` in normalized device coordinates.
#[inline]
pub fn pointer_ndc(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    ndc_from_surface(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

/// Move, down and up are taken from the whole window so the sphere keeps
/// tracking while the pointer is over page content drawn above it.
pub fn wire_pointer_handlers(canvas: &web::HtmlCanvasElement, input: InputSender) {
    wire_pointermove(canvas, input.clone());
    wire_button("pointerdown", InputEvent::PointerDown, input.clone());
    wire_button("pointerup", InputEvent::PointerUp, input);
}

fn wire_pointermove(canvas: &web::HtmlCanvasElement, input: InputSender) {
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !canvas.is_connected() {
            return;
        }
        input.push(InputEvent::PointerMove {
            ndc: pointer_ndc(&ev, &canvas),
        });
    }) as Box<dyn FnMut(_)>);
    add_window_listener("pointermove", &closure);
    closure.forget();
}

fn wire_button(event: &'static str, mapped: InputEvent, input: InputSender) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if ev.is_primary() {
            input.push(mapped);
        }
    }) as Box<dyn FnMut(_)>);
    add_window_listener(event, &closure);
    closure.forget();
}
