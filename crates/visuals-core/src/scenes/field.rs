use super::{Scene, SceneKind};
use crate::camera::Camera;
use crate::clock::FrameTick;
use crate::input::InputEvent;
use crate::uniforms::FieldUniforms;

#[derive(Clone, Debug)]
pub struct FieldParams {
    /// Alpha of the tint laid over the page.
    pub opacity: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self { opacity: 0.3 }
    }
}

/// Full-viewport distortion tint behind the page content.
pub struct FieldScene {
    camera: Camera,
    uniforms: FieldUniforms,
}

impl FieldScene {
    pub fn new(params: FieldParams, width: u32, height: u32) -> Self {
        Self {
            camera: Camera::fullscreen(width, height),
            uniforms: FieldUniforms {
                u_resolution: [width as f32, height as f32],
                u_time: 0.0,
                u_opacity: params.opacity,
            },
        }
    }
}

impl Scene for FieldScene {
    const KIND: SceneKind = SceneKind::Field;
    type Uniforms = FieldUniforms;

    fn handle_input(&mut self, event: InputEvent) {
        if let InputEvent::Resize { width, height } = event {
            if self.camera.set_viewport(width, height) {
                self.uniforms.u_resolution = [width as f32, height as f32];
            }
        }
    }

    fn advance(&mut self, tick: &FrameTick) {
        self.uniforms.u_time = tick.time as f32;
    }

    fn camera(&self) -> &Camera {
        &self.camera
    }

    fn uniforms(&self) -> FieldUniforms {
        self.uniforms
    }
}
