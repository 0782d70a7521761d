// Browser smoke test: a page without scene canvases brings nothing up.
// Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]
use clinic_visuals_web::{initial_backing_size, launch};
use visuals_core::{LoopConfig, SceneKind};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn page_without_canvases_launches_nothing() {
    for kind in SceneKind::ALL {
        let launched = launch(kind, LoopConfig::default()).await;
        assert!(matches!(launched, Ok(false)), "{} launched", kind);
    }
}

#[wasm_bindgen_test]
async fn non_canvas_scene_element_is_an_error() {
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document.create_element("div").unwrap();
    div.set_id(SceneKind::Field.canvas_id());
    document.body().unwrap().append_child(&div).unwrap();

    let launched = launch(SceneKind::Field, LoopConfig::default()).await;
    div.remove();
    assert!(launched.is_err());
}

fn test_canvas(style: &str) -> web_sys::HtmlCanvasElement {
    use wasm_bindgen::JsCast;
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: web_sys::HtmlCanvasElement =
        document.create_element("canvas").unwrap().dyn_into().unwrap();
    canvas.set_attribute("style", style).unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn collapsed_canvas_backing_matches_scene_size() {
    let canvas = test_canvas("display: none");
    let size = initial_backing_size(&canvas);
    canvas.remove();
    assert_eq!(size, (1, 1));
    assert_eq!((canvas.width(), canvas.height()), size);
}

#[wasm_bindgen_test]
fn backing_size_follows_css_box_and_pixel_ratio() {
    let canvas = test_canvas("display: block; width: 40px; height: 30px");
    let dpr = web_sys::window().unwrap().device_pixel_ratio();
    let size = initial_backing_size(&canvas);
    canvas.remove();
    assert_eq!(size, ((40.0 * dpr) as u32, (30.0 * dpr) as u32));
    assert_eq!((canvas.width(), canvas.height()), size);
}
