//! Browser front-end: finds the scene canvases on the page, brings each one
//! up on its own WebGPU surface and drives it from `requestAnimationFrame`.

#![cfg(target_arch = "wasm32")]
use visuals_core::{
    parse_bpm_label, FieldParams, FieldRenderer, FieldScene, HeartParams, HeartRenderer,
    HeartScene, HelixParams, HelixRenderer, HelixScene, LoopConfig, SceneKind, SphereParams,
    SphereRenderer, SphereScene,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod ambient;
mod cursor;
mod dom;
mod events;
mod frame;

pub use dom::initial_backing_size;

fn sphere_cursor(scene: &mut SphereScene, canvas: &web::HtmlCanvasElement) {
    let cursor = if scene.pointer_over() { "none" } else { "" };
    _ = canvas.style().set_property("cursor", cursor);
}

fn heart_label(scene: &mut HeartScene, _: &web::HtmlCanvasElement) {
    if let Some(bpm) = scene.take_bpm_update() {
        dom::set_bpm_label(bpm);
    }
}

/// Bring up one scene. `Ok(false)` means the page has no surface for it.
pub async fn launch(kind: SceneKind, cfg: LoopConfig) -> anyhow::Result<bool> {
    let Some(canvas) = dom::scene_canvas(kind)? else {
        log::info!("[{}] no #{} on this page, skipping", kind, kind.canvas_id());
        return Ok(false);
    };
    let size = dom::initial_backing_size(&canvas);
    let (w, h) = size;
    match kind {
        SceneKind::Field => {
            let scene = FieldScene::new(FieldParams::default(), w, h);
            frame::run::<FieldRenderer>(canvas, size, scene, cfg, frame::no_hook).await?
        }
        SceneKind::Helix => {
            let scene = HelixScene::new(HelixParams::default(), w, h);
            frame::run::<HelixRenderer>(canvas, size, scene, cfg, frame::no_hook).await?
        }
        SceneKind::Sphere => {
            let scene = SphereScene::new(SphereParams::default(), w, h);
            frame::run::<SphereRenderer>(canvas, size, scene, cfg, sphere_cursor).await?
        }
        SceneKind::Heart => {
            let params = HeartParams {
                initial_bpm: parse_bpm_label(&dom::bpm_label_text().unwrap_or_default()),
                seed: js_sys::Math::random().to_bits(),
                ..HeartParams::default()
            };
            let scene = HeartScene::new(params, w, h);
            frame::run::<HeartRenderer>(canvas, size, scene, cfg, heart_label).await?
        }
    }
    Ok(true)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let pairs = dom::body_config();
    let (cfg, cfg_errors) =
        LoopConfig::from_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str())));
    match cfg.log_level.to_level() {
        Some(level) => _ = console_log::init_with_level(level),
        None => log::set_max_level(log::LevelFilter::Off),
    }
    for e in cfg_errors {
        log::warn!("[config] {}; keeping default", e);
    }
    log::info!(
        "clinic visuals starting | rotation {} | pause when hidden {}",
        cfg.rotation,
        cfg.pause_when_hidden
    );

    cursor::install();
    if let Err(e) = ambient::install_particles() {
        log::warn!("[particles] disabled: {:?}", e);
    }
    if let Err(e) = ambient::install_data_points() {
        log::warn!("[hero] data points disabled: {:?}", e);
    }
    for kind in SceneKind::ALL {
        let cfg = cfg.clone();
        spawn_local(async move {
            if let Err(e) = launch(kind, cfg).await {
                log::error!("[{}] disabled: {:?}", kind, e);
            }
        });
    }
    Ok(())
}
