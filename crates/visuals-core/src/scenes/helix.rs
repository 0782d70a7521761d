use super::{Scene, SceneKind};
use crate::camera::Camera;
use crate::clock::FrameTick;
use crate::constants::{
    rgb, ACCENT_CYAN, HELIX_AMBIENT, HELIX_BLUE_EMISSIVE, HELIX_GREEN, HELIX_GREEN_EMISSIVE,
    HELIX_SCROLL_TILT, HELIX_SPIN_Y,
};
use crate::geometry::{self, HelixStep, Mesh};
use crate::input::InputEvent;
use crate::uniforms::{HelixUniforms, MarkerInstance, RungInstance};
use glam::{Mat4, Vec3};

#[derive(Clone, Debug)]
pub struct HelixParams {
    pub fov_degrees: f32,
    pub camera_z: f32,
    pub steps: u32,
    pub radius: f32,
    pub rise: f32,
    pub twist: f32,
    pub marker_radius: f32,
    pub marker_segments: u32,
    pub rung_radius: f32,
    pub rung_segments: u32,
    pub rung_opacity: f32,
    pub light_pos: Vec3,
}

impl Default for HelixParams {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            camera_z: 15.0,
            steps: 60,
            radius: 3.0,
            rise: 0.5,
            twist: 0.3,
            marker_radius: 0.1,
            marker_segments: 16,
            rung_radius: 0.01,
            rung_segments: 8,
            rung_opacity: 0.05,
            light_pos: Vec3::new(5.0, 5.0, 10.0),
        }
    }
}

/// Rotating double helix; the page scroll tilts it about X.
pub struct HelixScene {
    params: HelixParams,
    camera: Camera,
    steps: Vec<HelixStep>,
    marker_mesh: Mesh,
    rung_mesh: Mesh,
    spin_y: f32,
    tilt_x: f32,
}

impl HelixScene {
    pub fn new(params: HelixParams, width: u32, height: u32) -> Self {
        let steps = geometry::helix_layout(params.steps, params.radius, params.rise, params.twist);
        let marker_mesh = geometry::uv_sphere(
            params.marker_radius,
            params.marker_segments,
            params.marker_segments,
        );
        let rung_mesh =
            geometry::cylinder(params.rung_radius, params.radius * 2.0, params.rung_segments);
        Self {
            camera: Camera::perspective(params.fov_degrees, params.camera_z, width, height, 1000.0),
            params,
            steps,
            marker_mesh,
            rung_mesh,
            spin_y: 0.0,
            tilt_x: 0.0,
        }
    }

    pub fn marker_mesh(&self) -> &Mesh {
        &self.marker_mesh
    }

    pub fn rung_mesh(&self) -> &Mesh {
        &self.rung_mesh
    }

    pub fn steps(&self) -> &[HelixStep] {
        &self.steps
    }

    /// Two markers per step: cyan on one strand, green on the other.
    pub fn markers(&self) -> Vec<MarkerInstance> {
        let blue = (rgb(ACCENT_CYAN), rgb(HELIX_BLUE_EMISSIVE));
        let green = (rgb(HELIX_GREEN), rgb(HELIX_GREEN_EMISSIVE));
        self.steps
            .iter()
            .flat_map(|s| {
                [
                    MarkerInstance {
                        offset: s.strand_a.to_array(),
                        color: blue.0,
                        emissive: blue.1,
                    },
                    MarkerInstance {
                        offset: s.strand_b.to_array(),
                        color: green.0,
                        emissive: green.1,
                    },
                ]
            })
            .collect()
    }

    pub fn rungs(&self) -> Vec<RungInstance> {
        self.steps
            .iter()
            .map(|s| RungInstance {
                model: s.rung_transform().to_cols_array_2d(),
            })
            .collect()
    }

    pub fn spin_y(&self) -> f32 {
        self.spin_y
    }

    pub fn tilt_x(&self) -> f32 {
        self.tilt_x
    }

    /// Group transform: tilt about X after spinning about Y.
    pub fn model(&self) -> Mat4 {
        Mat4::from_rotation_x(self.tilt_x) * Mat4::from_rotation_y(self.spin_y)
    }
}

impl Scene for HelixScene {
    const KIND: SceneKind = SceneKind::Helix;
    type Uniforms = HelixUniforms;

    fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Resize { width, height } => {
                self.camera.set_viewport(width, height);
            }
            InputEvent::Scroll { offset_y } => self.tilt_x = offset_y * HELIX_SCROLL_TILT,
            _ => {}
        }
    }

    fn advance(&mut self, tick: &FrameTick) {
        self.spin_y += tick.spin(HELIX_SPIN_Y);
    }

    fn camera(&self) -> &Camera {
        &self.camera
    }

    fn uniforms(&self) -> HelixUniforms {
        let [ar, ag, ab] = rgb(HELIX_AMBIENT);
        HelixUniforms {
            u_view_proj: self.camera.view_proj().to_cols_array_2d(),
            u_model: self.model().to_cols_array_2d(),
            u_camera_pos: self.camera.eye.extend(1.0).to_array(),
            u_light_pos: self.params.light_pos.extend(1.0).to_array(),
            u_ambient: [ar, ag, ab, 1.0],
            u_rung_color: [1.0, 1.0, 1.0, self.params.rung_opacity],
        }
    }
}
