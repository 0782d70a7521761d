use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use visuals_core::config::{KEY_LOG, KEY_PAUSE_HIDDEN, KEY_ROTATION};
use visuals_core::input::ndc_from_surface;
use visuals_core::{
    FieldParams, FieldRenderer, FieldScene, HeartParams, HeartRenderer, HeartScene, HelixParams,
    HelixRenderer, HelixScene, InputEvent, LoopConfig, SceneKind, SceneRenderer, SphereParams,
    SphereRenderer, SphereScene, Stage,
};
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

// Pixels scrolled per wheel notch
const LINE_HEIGHT_PX: f32 = 40.0;

#[derive(Parser, Debug)]
#[command(name = "visuals-native", about = "Preview one clinic scene in a desktop window")]
struct Args {
    /// Scene to run: field, helix, sphere or heart
    #[arg(long, default_value = "sphere")]
    scene: SceneKind,

    #[arg(long, default_value_t = 1280)]
    width: u32,

    #[arg(long, default_value_t = 800)]
    height: u32,

    /// Rotation stepping: per-frame or time-scaled
    #[arg(long)]
    rotation: Option<String>,

    /// Stop updating while the window is occluded or minimised
    #[arg(long)]
    pause_when_hidden: bool,

    /// Log level (error, warn, info, debug, trace); RUST_LOG still applies on top
    #[arg(long)]
    log: Option<String>,
}

impl Args {
    fn config_pairs(&self) -> Vec<(&str, &str)> {
        let mut pairs = Vec::new();
        if let Some(r) = &self.rotation {
            pairs.push((KEY_ROTATION, r.as_str()));
        }
        if self.pause_when_hidden {
            pairs.push((KEY_PAUSE_HIDDEN, "true"));
        }
        if let Some(l) = &self.log {
            pairs.push((KEY_LOG, l.as_str()));
        }
        pairs
    }
}

/// Per-frame hook for scene-specific window feedback.
type AfterFrame<S> = fn(&mut S, &Window);

fn run<R>(
    event_loop: EventLoop<()>,
    window: Arc<Window>,
    scene: R::Scene,
    cfg: LoopConfig,
    after_frame: AfterFrame<R::Scene>,
) -> anyhow::Result<()>
where
    R: SceneRenderer + 'static,
{
    let size = window.inner_size();
    let mut stage: Stage<R> = pollster::block_on(Stage::new(
        window.clone(),
        size.width.max(1),
        size.height.max(1),
        scene,
        cfg.rotation,
    ))?;
    let input = stage.runner.sender();
    let start = Instant::now();
    let mut occluded = false;
    let mut scroll_y = 0.0f32;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => input.push(InputEvent::Resize {
                width: size.width,
                height: size.height,
            }),
            WindowEvent::CursorMoved { position, .. } => {
                let size = window.inner_size();
                input.push(InputEvent::PointerMove {
                    ndc: ndc_from_surface(
                        position.x as f32,
                        position.y as f32,
                        size.width as f32,
                        size.height as f32,
                    ),
                });
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => input.push(match state {
                ElementState::Pressed => InputEvent::PointerDown,
                ElementState::Released => InputEvent::PointerUp,
            }),
            WindowEvent::MouseWheel { delta, .. } => {
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y * LINE_HEIGHT_PX,
                    MouseScrollDelta::PixelDelta(p) => -p.y as f32,
                };
                scroll_y = (scroll_y + dy).max(0.0);
                input.push(InputEvent::Scroll { offset_y: scroll_y });
            }
            WindowEvent::Occluded(hidden) => {
                occluded = hidden;
                if !hidden {
                    window.request_redraw();
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            if occluded && cfg.pause_when_hidden {
                stage.apply_input();
                return;
            }
            match stage.frame(start.elapsed().as_secs_f64()) {
                Ok(_) => {
                    after_frame(stage.scene_mut(), &window);
                    window.request_redraw();
                }
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::debug!("[loop] surface lost, reconfiguring");
                    stage.reconfigure();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("[loop] out of GPU memory, exiting");
                    elwt.exit();
                }
                Err(e) => log::warn!("[loop] frame skipped: {e:?}"),
            }
        }
        _ => {}
    })?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let (cfg, cfg_errors) = LoopConfig::from_pairs(args.config_pairs());
    env_logger::builder()
        .filter_level(cfg.log_level)
        .parse_default_env()
        .init();
    for e in cfg_errors {
        log::warn!("[config] {e}; keeping default");
    }
    log::info!(
        "[native] scene {} | rotation {} | pause when hidden {}",
        args.scene,
        cfg.rotation,
        cfg.pause_when_hidden
    );

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(format!("clinic visuals: {}", args.scene))
            .with_inner_size(LogicalSize::new(args.width, args.height))
            .build(&event_loop)?,
    );
    let size = window.inner_size();
    let (w, h) = (size.width.max(1), size.height.max(1));

    match args.scene {
        SceneKind::Field => run::<FieldRenderer>(
            event_loop,
            window,
            FieldScene::new(FieldParams::default(), w, h),
            cfg,
            |_, _| {},
        ),
        SceneKind::Helix => run::<HelixRenderer>(
            event_loop,
            window,
            HelixScene::new(HelixParams::default(), w, h),
            cfg,
            |_, _| {},
        ),
        SceneKind::Sphere => run::<SphereRenderer>(
            event_loop,
            window,
            SphereScene::new(SphereParams::default(), w, h),
            cfg,
            |scene, window| window.set_cursor_visible(!scene.pointer_over()),
        ),
        SceneKind::Heart => run::<HeartRenderer>(
            event_loop,
            window,
            HeartScene::new(HeartParams::default(), w, h),
            cfg,
            |scene, window| {
                if let Some(bpm) = scene.take_bpm_update() {
                    window.set_title(&format!("clinic visuals: heart {bpm} bpm"));
                }
            },
        ),
    }
}
