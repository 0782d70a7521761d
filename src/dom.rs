use visuals_core::config::{KEY_LOG, KEY_PAUSE_HIDDEN, KEY_ROTATION};
use visuals_core::constants::HEART_BPM_LABEL_ID;
use visuals_core::{SceneKind, VisualsError};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Loop settings from `<body data-rotation data-pause-hidden data-log>`.
pub fn body_config() -> Vec<(&'static str, String)> {
    let Some(body) = window_document().and_then(|d| d.body()) else {
        return Vec::new();
    };
    [KEY_ROTATION, KEY_PAUSE_HIDDEN, KEY_LOG]
        .into_iter()
        .filter_map(|key| {
            body.get_attribute(&format!("data-{key}"))
                .map(|value| (key, value))
        })
        .collect()
}

/// Canvas a scene renders into, or `None` when the page doesn't have one.
///
/// The heart's id may name a container instead of a canvas; a canvas is
/// then created inside it and stretched to fill it.
pub fn scene_canvas(kind: SceneKind) -> anyhow::Result<Option<web::HtmlCanvasElement>> {
    let document = window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let Some(el) = document.get_element_by_id(kind.canvas_id()) else {
        return Ok(None);
    };
    let el = match el.dyn_into::<web::HtmlCanvasElement>() {
        Ok(canvas) => return Ok(Some(canvas)),
        Err(el) => el,
    };
    if kind != SceneKind::Heart {
        let missing = VisualsError::MissingSurface(kind.canvas_id().to_string());
        anyhow::bail!("{} (#{} is a <{}>)", missing, kind.canvas_id(), el.tag_name());
    }
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let style = canvas.style();
    _ = style.set_property("display", "block");
    _ = style.set_property("width", "100%");
    _ = style.set_property("height", "100%");
    el.append_child(&canvas)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    log::debug!("[heart] created canvas inside #{}", kind.canvas_id());
    Ok(Some(canvas))
}

/// Match the canvas backing store to its CSS box times `devicePixelRatio`.
///
/// Returns the size in physical pixels. A collapsed box (`display: none`,
/// zero height) reports a zero dimension and leaves the canvas untouched.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let Some(w) = web::window() else {
        return (canvas.width(), canvas.height());
    };
    let dpr = w.device_pixel_ratio();
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() * dpr) as u32;
    let h_px = (rect.height() * dpr) as u32;
    if w_px > 0 && h_px > 0 {
        canvas.set_width(w_px);
        canvas.set_height(h_px);
    }
    (w_px, h_px)
}

/// Size a scene is built at: the synced backing size, at least 1x1.
///
/// A collapsed box would otherwise keep the default 300x150 backing store,
/// so the canvas attributes are set to the same size the scene sees.
pub fn initial_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let (w, h) = sync_canvas_backing_size(canvas);
    let (w, h) = (w.max(1), h.max(1));
    canvas.set_width(w);
    canvas.set_height(h);
    (w, h)
}

pub fn bpm_label_text() -> Option<String> {
    window_document()?
        .get_element_by_id(HEART_BPM_LABEL_ID)?
        .text_content()
}

pub fn set_bpm_label(bpm: u32) {
    if let Some(el) = window_document().and_then(|d| d.get_element_by_id(HEART_BPM_LABEL_ID)) {
        el.set_text_content(Some(&bpm.to_string()));
    }
}

#[inline]
pub fn document_hidden() -> bool {
    window_document().map(|d| d.hidden()).unwrap_or(false)
}

#[inline]
pub fn scroll_y() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}
