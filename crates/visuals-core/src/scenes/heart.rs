use super::{Scene, SceneKind};
use crate::camera::Camera;
use crate::clock::FrameTick;
use crate::constants::{
    rgb, ACCENT_CYAN, BPM_DEFAULT, HEART_COLOR, HEART_GLOW_COLOR, HEART_PULSE_SCALE,
    HEART_SPIN_Y, PARTICLES_SPIN_Y, RING_SPIN_Z,
};
use crate::geometry::{self, Mesh, MeshVertex};
use crate::heartbeat::{cardiac_pulse, BpmDrift};
use crate::input::InputEvent;
use crate::uniforms::HeartUniforms;
use glam::{Mat4, Vec3};
use std::f32::consts::FRAC_PI_2;

#[derive(Clone, Debug)]
pub struct HeartParams {
    pub fov_degrees: f32,
    pub camera_z: f32,
    pub segments: u32,
    pub color: u32,
    pub glow_color: u32,
    pub body_opacity: f32,
    pub ring_radius: f32,
    pub ring_tube: f32,
    pub ring_radial_segments: u32,
    pub ring_tubular_segments: u32,
    pub ring_color: u32,
    pub ring_opacity: f32,
    pub particle_count: usize,
    pub particle_extent: f32,
    pub particle_opacity: f32,
    /// Initial heart-rate readout, usually parsed from the page label.
    pub initial_bpm: u32,
    pub seed: u64,
}

impl Default for HeartParams {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            camera_z: 5.0,
            segments: 64,
            color: HEART_COLOR,
            glow_color: HEART_GLOW_COLOR,
            body_opacity: 0.9,
            ring_radius: 1.8,
            ring_tube: 0.02,
            ring_radial_segments: 16,
            ring_tubular_segments: 100,
            ring_color: ACCENT_CYAN,
            ring_opacity: 0.3,
            particle_count: 200,
            particle_extent: 5.0,
            particle_opacity: 0.5,
            initial_bpm: BPM_DEFAULT,
            seed: 0x6865_6172,
        }
    }
}

/// Beating heart with an orbiting ring and a slowly turning particle cloud.
pub struct HeartScene {
    params: HeartParams,
    camera: Camera,
    body: Mesh,
    ring: Mesh,
    particles: Vec<MeshVertex>,
    time: f32,
    pulse: f32,
    heart_spin: f32,
    ring_spin: f32,
    particles_spin: f32,
    bpm: BpmDrift,
    bpm_update: Option<u32>,
}

impl HeartScene {
    pub fn new(params: HeartParams, width: u32, height: u32) -> Self {
        let mut body = geometry::uv_sphere(1.0, params.segments, params.segments);
        geometry::deform_heart(&mut body);
        let ring = geometry::torus(
            params.ring_radius,
            params.ring_tube,
            params.ring_radial_segments,
            params.ring_tubular_segments,
        );
        let particles =
            geometry::scatter_points(params.particle_count, params.particle_extent, params.seed);
        Self {
            camera: Camera::perspective(params.fov_degrees, params.camera_z, width, height, 1000.0),
            bpm: BpmDrift::new(params.initial_bpm, params.seed),
            params,
            body,
            ring,
            particles,
            time: 0.0,
            pulse: 0.0,
            heart_spin: 0.0,
            ring_spin: 0.0,
            particles_spin: 0.0,
            bpm_update: None,
        }
    }

    pub fn body(&self) -> &Mesh {
        &self.body
    }

    pub fn ring(&self) -> &Mesh {
        &self.ring
    }

    pub fn particles(&self) -> &[MeshVertex] {
        &self.particles
    }

    pub fn pulse(&self) -> f32 {
        self.pulse
    }

    pub fn bpm(&self) -> u32 {
        self.bpm.bpm()
    }

    /// New readout value produced since the last call, if any.
    pub fn take_bpm_update(&mut self) -> Option<u32> {
        self.bpm_update.take()
    }

    pub fn body_model(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(1.0 + self.pulse * HEART_PULSE_SCALE),
            glam::Quat::from_rotation_y(self.heart_spin),
            Vec3::ZERO,
        )
    }

    /// Ring lies flat (rotated onto XZ) and bobs vertically.
    pub fn ring_model(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, self.time.sin() * 0.1, 0.0))
            * Mat4::from_rotation_x(FRAC_PI_2)
            * Mat4::from_rotation_z(self.ring_spin)
    }

    pub fn particles_model(&self) -> Mat4 {
        Mat4::from_rotation_y(self.particles_spin)
    }

    pub fn ring_uniforms(&self) -> HeartUniforms {
        self.flat(self.ring_model(), self.params.ring_opacity)
    }

    pub fn particle_uniforms(&self) -> HeartUniforms {
        self.flat(self.particles_model(), self.params.particle_opacity)
    }

    fn flat(&self, model: Mat4, opacity: f32) -> HeartUniforms {
        let [r, g, b] = rgb(self.params.ring_color);
        HeartUniforms {
            u_model: model.to_cols_array_2d(),
            u_color: [r, g, b, 1.0],
            u_glow_color: [r, g, b, 1.0],
            u_opacity: opacity,
            ..self.uniforms()
        }
    }
}

impl Scene for HeartScene {
    const KIND: SceneKind = SceneKind::Heart;
    type Uniforms = HeartUniforms;

    fn handle_input(&mut self, event: InputEvent) {
        if let InputEvent::Resize { width, height } = event {
            self.camera.set_viewport(width, height);
        }
    }

    fn advance(&mut self, tick: &FrameTick) {
        self.time = tick.time as f32;
        self.pulse = cardiac_pulse(tick.time);
        if let Some(bpm) = self.bpm.step() {
            self.bpm_update = Some(bpm);
        }
        self.heart_spin += tick.spin(HEART_SPIN_Y);
        self.ring_spin += tick.spin(RING_SPIN_Z);
        self.particles_spin += tick.spin(PARTICLES_SPIN_Y);
    }

    fn camera(&self) -> &Camera {
        &self.camera
    }

    fn uniforms(&self) -> HeartUniforms {
        let [r, g, b] = rgb(self.params.color);
        let [gr, gg, gb] = rgb(self.params.glow_color);
        HeartUniforms {
            u_view_proj: self.camera.view_proj().to_cols_array_2d(),
            u_model: self.body_model().to_cols_array_2d(),
            u_color: [r, g, b, 1.0],
            u_glow_color: [gr, gg, gb, 1.0],
            u_time: self.time,
            u_pulse: self.pulse,
            u_opacity: self.params.body_opacity,
            _pad: 0.0,
        }
    }
}
