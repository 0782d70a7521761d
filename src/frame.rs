use crate::dom;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use visuals_core::{LoopConfig, Scene, SceneRenderer, Stage};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-frame hook for scene-specific page feedback (cursor style, labels).
pub type AfterFrame<S> = fn(&mut S, &web::HtmlCanvasElement);

pub fn no_hook<S>(_: &mut S, _: &web::HtmlCanvasElement) {}

pub struct FrameContext<R: SceneRenderer> {
    pub stage: Stage<R>,
    pub canvas: web::HtmlCanvasElement,
    pub cfg: LoopConfig,
    pub after_frame: AfterFrame<R::Scene>,
    pub start: Instant,
}

impl<R: SceneRenderer> FrameContext<R> {
    /// Run one refresh. Returns `false` once the scene can no longer render.
    pub fn frame(&mut self) -> bool {
        if self.cfg.pause_when_hidden && dom::document_hidden() {
            self.stage.apply_input();
            return true;
        }
        let kind = <R::Scene as Scene>::KIND;
        match self.stage.frame(self.start.elapsed().as_secs_f64()) {
            Ok(_) => {
                (self.after_frame)(self.stage.scene_mut(), &self.canvas);
                true
            }
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("[{}] surface lost, reconfiguring", kind);
                self.stage.reconfigure();
                true
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("[{}] out of GPU memory, stopping", kind);
                false
            }
            Err(e) => {
                log::warn!("[{}] frame skipped: {:?}", kind, e);
                true
            }
        }
    }
}

/// Drive `tick` from `requestAnimationFrame` until it returns `false`.
pub fn start_loop(mut tick: impl FnMut() -> bool + 'static) {
    let raf: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let raf_clone = raf.clone();
    *raf.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if tick() {
            request_frame(&raf_clone);
        }
    }) as Box<dyn FnMut()>));
    request_frame(&raf);
}

fn request_frame(raf: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), raf.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Bring a scene up on `canvas` and keep it rendering.
///
/// `size` is the physical size the scene was built for; the surface is
/// configured to match it rather than to the canvas attributes.
pub async fn run<R>(
    canvas: web::HtmlCanvasElement,
    size: (u32, u32),
    scene: R::Scene,
    cfg: LoopConfig,
    after_frame: AfterFrame<R::Scene>,
) -> anyhow::Result<()>
where
    R: SceneRenderer + 'static,
{
    let kind = <R::Scene as Scene>::KIND;
    let (w, h) = size;
    let stage: Stage<R> = Stage::new(
        wgpu::SurfaceTarget::Canvas(canvas.clone()),
        w,
        h,
        scene,
        cfg.rotation,
    )
    .await
    .map_err(|e| anyhow::anyhow!("{}", e))?;

    crate::events::wire_scene_input(kind, &canvas, stage.runner.sender());

    let ctx = Rc::new(RefCell::new(FrameContext {
        stage,
        canvas,
        cfg,
        after_frame,
        start: Instant::now(),
    }));
    start_loop(move || ctx.borrow_mut().frame());
    log::info!("[{}] running at {}x{}", kind, w, h);
    Ok(())
}
