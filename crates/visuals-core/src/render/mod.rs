//! wgpu renderers for the scenes plus the `Stage` that ties a scene, its
//! renderer and its surface together.

mod field;
mod heart;
pub(crate) mod helpers;
mod helix;
mod sphere;
mod surface;
pub(crate) mod targets;

pub use field::FieldRenderer;
pub use heart::HeartRenderer;
pub use helix::HelixRenderer;
pub use sphere::SphereRenderer;
pub use surface::GpuSurface;

use crate::clock::RotationMode;
use crate::error::Result;
use crate::scenes::{Scene, SceneRunner, StepOutcome};
use crate::uniforms::UniformBlock;

/// GPU half of a scene: resources are built once from the scene's drawables,
/// then each frame uploads uniforms and records draws.
pub trait SceneRenderer: Sized {
    type Scene: Scene;

    fn create(gpu: &GpuSurface, scene: &Self::Scene) -> Self;

    /// Rebuild size-dependent targets after the surface was resized.
    fn resize(&mut self, _gpu: &GpuSurface) {}

    fn encode(
        &mut self,
        gpu: &GpuSurface,
        scene: &Self::Scene,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
    );
}

/// One scene bound to its own surface.
pub struct Stage<R: SceneRenderer> {
    pub gpu: GpuSurface,
    pub runner: SceneRunner<R::Scene>,
    renderer: R,
}

impl<R: SceneRenderer> Stage<R> {
    pub async fn new(
        target: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
        scene: R::Scene,
        rotation: RotationMode,
    ) -> Result<Self> {
        let gpu = GpuSurface::new(target, width, height).await?;
        let renderer = R::create(&gpu, &scene);
        if log::log_enabled!(log::Level::Debug) {
            let mut names: Vec<_> = scene.uniforms().values().into_keys().collect();
            names.sort_unstable();
            log::debug!("[{}] uniforms: {}", <R::Scene as Scene>::KIND, names.join(", "));
        }
        Ok(Self {
            gpu,
            runner: SceneRunner::new(scene, rotation),
            renderer,
        })
    }

    pub fn scene(&self) -> &R::Scene {
        &self.runner.scene
    }

    pub fn scene_mut(&mut self) -> &mut R::Scene {
        &mut self.runner.scene
    }

    /// Apply input, advance the scene and resize the surface if needed.
    pub fn update(&mut self, now_sec: f64) -> StepOutcome {
        let outcome = self.runner.step(now_sec);
        self.resize_surface(outcome.resized);
        outcome
    }

    /// Drain pending input while paused; time and animation stay frozen.
    pub fn apply_input(&mut self) {
        let resized = self.runner.apply_input();
        self.resize_surface(resized);
    }

    fn resize_surface(&mut self, resized: Option<(u32, u32)>) {
        if let Some((w, h)) = resized {
            if self.gpu.resize(w, h) {
                self.renderer.resize(&self.gpu);
            }
        }
    }

    /// Encode and submit one frame to the surface.
    pub fn render(&mut self) -> std::result::Result<(), wgpu::SurfaceError> {
        let frame = self.gpu.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        self.renderer
            .encode(&self.gpu, &self.runner.scene, &mut encoder, &view);
        self.gpu.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    /// `update` followed by `render`.
    pub fn frame(&mut self, now_sec: f64) -> std::result::Result<StepOutcome, wgpu::SurfaceError> {
        let outcome = self.update(now_sec);
        self.render()?;
        Ok(outcome)
    }

    /// Re-apply the surface configuration after `Lost` or `Outdated`.
    pub fn reconfigure(&mut self) {
        self.gpu.reconfigure();
        self.renderer.resize(&self.gpu);
    }
}
