use super::{Scene, SceneKind};
use crate::camera::{Camera, Ray};
use crate::clock::FrameTick;
use crate::constants::{
    CLICK_SMOOTHING_FACTOR, POINTER_DECAY_FACTOR, POINTER_FOLLOW_FACTOR, POINTER_SETTLE_EPSILON,
    SPHERE_SPIN_Y, SPHERE_SPIN_Z,
};
use crate::geometry::{self, Mesh};
use crate::input::{ray_sphere, InputEvent};
use crate::noise::wobble;
use crate::smoothing::{lerp_toward, Smoothed};
use crate::uniforms::SphereUniforms;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

#[derive(Clone, Debug)]
pub struct SphereParams {
    pub fov_degrees: f32,
    pub camera_z: f32,
    pub radius: f32,
    pub detail: u32,
    /// Vertical float amplitude of the whole sphere.
    pub bob_amplitude: f32,
    pub bob_speed: f32,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self {
            fov_degrees: 60.0,
            camera_z: 2.5,
            radius: 1.0,
            detail: 128,
            bob_amplitude: 0.1,
            bob_speed: 0.5,
        }
    }
}

/// Displaced chrome sphere reacting to pointer hover and press.
pub struct SphereScene {
    params: SphereParams,
    camera: Camera,
    mesh: Mesh,
    resolution: Vec2,
    time: f32,
    spin: Vec2,
    pointer_target: Option<Vec3>,
    mouse: Vec3,
    click: Smoothed<f32>,
}

impl SphereScene {
    pub fn new(params: SphereParams, width: u32, height: u32) -> Self {
        let mesh = geometry::icosphere(params.radius, params.detail);
        log::debug!(
            "[sphere] icosphere detail {} -> {} triangles",
            params.detail,
            mesh.triangle_count()
        );
        Self {
            camera: Camera::perspective(params.fov_degrees, params.camera_z, width, height, 100.0),
            params,
            mesh,
            resolution: Vec2::new(width as f32, height as f32),
            time: 0.0,
            spin: Vec2::ZERO,
            pointer_target: None,
            mouse: Vec3::ZERO,
            click: Smoothed::new(0.0, CLICK_SMOOTHING_FACTOR),
        }
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Object rotation: `spin.x` about Y, `spin.y` about Z.
    pub fn model(&self) -> Mat4 {
        Mat4::from_quat(Quat::from_euler(EulerRot::XYZ, 0.0, self.spin.x, self.spin.y))
    }

    pub fn pointer_target(&self) -> Option<Vec3> {
        self.pointer_target
    }

    /// Whether the last pointer position was over the sphere.
    pub fn pointer_over(&self) -> bool {
        self.pointer_target.is_some()
    }

    pub fn mouse(&self) -> Vec3 {
        self.mouse
    }

    pub fn click(&self) -> f32 {
        self.click.value
    }

    /// World-space point under `ndc` on the drawn surface, if any.
    ///
    /// Intersects the undisplaced sphere first, then re-intersects once at the
    /// radius the noise wobble gives that spot.
    pub fn pick(&self, ndc: Vec2) -> Option<Vec3> {
        let ray = self.camera.ray_from_ndc(ndc);
        let model = self.model();
        let bob = Vec3::new(
            0.0,
            (self.time * self.params.bob_speed).sin() * self.params.bob_amplitude,
            0.0,
        );
        let center = model.transform_point3(bob);
        let t0 = ray_sphere(&ray, center, self.params.radius)?;
        let local = model
            .inverse()
            .transform_point3(ray.at(t0))
            - bob;
        let refined = self.params.radius + wobble(local.normalize_or_zero(), self.time);
        let t = refine(&ray, center, refined).unwrap_or(t0);
        Some(ray.at(t))
    }
}

fn refine(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    if radius <= 0.0 {
        return None;
    }
    ray_sphere(ray, center, radius)
}

impl Scene for SphereScene {
    const KIND: SceneKind = SceneKind::Sphere;
    type Uniforms = SphereUniforms;

    fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMove { ndc } => self.pointer_target = self.pick(ndc),
            InputEvent::PointerDown => self.click.set_target(1.0),
            InputEvent::PointerUp => self.click.set_target(0.0),
            InputEvent::Resize { width, height } => {
                if self.camera.set_viewport(width, height) {
                    self.resolution = Vec2::new(width as f32, height as f32);
                }
            }
            InputEvent::Scroll { .. } => {}
        }
    }

    fn advance(&mut self, tick: &FrameTick) {
        self.time = tick.time as f32;

        match self.pointer_target {
            Some(hit) => self.mouse = lerp_toward(self.mouse, hit, POINTER_FOLLOW_FACTOR),
            None => {
                self.mouse = lerp_toward(self.mouse, Vec3::ZERO, POINTER_DECAY_FACTOR);
                if self.mouse.length() < POINTER_SETTLE_EPSILON {
                    self.mouse = Vec3::ZERO;
                }
            }
        }
        self.click.step();

        self.spin.x += tick.spin(SPHERE_SPIN_Y);
        self.spin.y += tick.spin(SPHERE_SPIN_Z);
    }

    fn camera(&self) -> &Camera {
        &self.camera
    }

    fn uniforms(&self) -> SphereUniforms {
        SphereUniforms {
            u_view_proj: self.camera.view_proj().to_cols_array_2d(),
            u_model: self.model().to_cols_array_2d(),
            u_camera_pos: self.camera.eye.extend(1.0).to_array(),
            u_mouse: self.mouse.extend(0.0).to_array(),
            u_time: self.time,
            u_click: self.click.value,
            u_resolution: self.resolution.to_array(),
        }
    }
}
