//! GPU uniform blocks, one per shading program.
//!
//! Each block is a plain `#[repr(C)]` struct uploaded with `bytemuck`, so a
//! value can never be missing at draw time. Blocks also expose themselves as
//! a name → value map, used for logging and to check the layout against the
//! WGSL sources. Scalars are packed after the matrices and vec4s to keep the
//! 16-byte alignment WGSL expects.

use fnv::FnvHashMap;
use glam::{Mat4, Vec2, Vec3, Vec4};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    Mat4(Mat4),
}

pub type UniformMap = FnvHashMap<&'static str, UniformValue>;

pub trait UniformBlock: bytemuck::Pod {
    /// Field names as declared in the WGSL struct, in declaration order.
    const NAMES: &'static [&'static str];

    fn values(&self) -> UniformMap;
}

#[inline]
fn v3(a: [f32; 4]) -> UniformValue {
    UniformValue::Vec3(Vec4::from(a).truncate())
}

#[inline]
fn m4(a: [[f32; 4]; 4]) -> UniformValue {
    UniformValue::Mat4(Mat4::from_cols_array_2d(&a))
}

/// Ambient distortion field.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FieldUniforms {
    pub u_resolution: [f32; 2],
    pub u_time: f32,
    pub u_opacity: f32,
}

impl UniformBlock for FieldUniforms {
    const NAMES: &'static [&'static str] = &["u_resolution", "u_time", "u_opacity"];

    fn values(&self) -> UniformMap {
        let mut map = UniformMap::default();
        map.insert("u_resolution", UniformValue::Vec2(self.u_resolution.into()));
        map.insert("u_time", UniformValue::Float(self.u_time));
        map.insert("u_opacity", UniformValue::Float(self.u_opacity));
        map
    }
}

/// Displaced interactive sphere. `u_mouse.xyz` is the smoothed world-space
/// pointer target.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereUniforms {
    pub u_view_proj: [[f32; 4]; 4],
    pub u_model: [[f32; 4]; 4],
    pub u_camera_pos: [f32; 4],
    pub u_mouse: [f32; 4],
    pub u_time: f32,
    pub u_click: f32,
    pub u_resolution: [f32; 2],
}

impl UniformBlock for SphereUniforms {
    const NAMES: &'static [&'static str] = &[
        "u_view_proj",
        "u_model",
        "u_camera_pos",
        "u_mouse",
        "u_time",
        "u_click",
        "u_resolution",
    ];

    fn values(&self) -> UniformMap {
        let mut map = UniformMap::default();
        map.insert("u_view_proj", m4(self.u_view_proj));
        map.insert("u_model", m4(self.u_model));
        map.insert("u_camera_pos", v3(self.u_camera_pos));
        map.insert("u_mouse", v3(self.u_mouse));
        map.insert("u_time", UniformValue::Float(self.u_time));
        map.insert("u_click", UniformValue::Float(self.u_click));
        map.insert("u_resolution", UniformValue::Vec2(self.u_resolution.into()));
        map
    }
}

/// Heart body; the ring and the particle cloud reuse the layout with their
/// own model matrix, colour and opacity.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct HeartUniforms {
    pub u_view_proj: [[f32; 4]; 4],
    pub u_model: [[f32; 4]; 4],
    pub u_color: [f32; 4],
    pub u_glow_color: [f32; 4],
    pub u_time: f32,
    pub u_pulse: f32,
    pub u_opacity: f32,
    pub _pad: f32,
}

impl UniformBlock for HeartUniforms {
    const NAMES: &'static [&'static str] = &[
        "u_view_proj",
        "u_model",
        "u_color",
        "u_glow_color",
        "u_time",
        "u_pulse",
        "u_opacity",
    ];

    fn values(&self) -> UniformMap {
        let mut map = UniformMap::default();
        map.insert("u_view_proj", m4(self.u_view_proj));
        map.insert("u_model", m4(self.u_model));
        map.insert("u_color", v3(self.u_color));
        map.insert("u_glow_color", v3(self.u_glow_color));
        map.insert("u_time", UniformValue::Float(self.u_time));
        map.insert("u_pulse", UniformValue::Float(self.u_pulse));
        map.insert("u_opacity", UniformValue::Float(self.u_opacity));
        map
    }
}

/// Double helix: one point light plus ambient, rungs drawn in a flat colour.
/// `u_rung_color.w` is the rung opacity.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct HelixUniforms {
    pub u_view_proj: [[f32; 4]; 4],
    pub u_model: [[f32; 4]; 4],
    pub u_camera_pos: [f32; 4],
    pub u_light_pos: [f32; 4],
    pub u_ambient: [f32; 4],
    pub u_rung_color: [f32; 4],
}

impl UniformBlock for HelixUniforms {
    const NAMES: &'static [&'static str] = &[
        "u_view_proj",
        "u_model",
        "u_camera_pos",
        "u_light_pos",
        "u_ambient",
        "u_rung_color",
    ];

    fn values(&self) -> UniformMap {
        let mut map = UniformMap::default();
        map.insert("u_view_proj", m4(self.u_view_proj));
        map.insert("u_model", m4(self.u_model));
        map.insert("u_camera_pos", v3(self.u_camera_pos));
        map.insert("u_light_pos", v3(self.u_light_pos));
        map.insert("u_ambient", v3(self.u_ambient));
        map.insert("u_rung_color", UniformValue::Vec4(self.u_rung_color.into()));
        map
    }
}

/// Per-instance data for one helix marker sphere.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MarkerInstance {
    pub offset: [f32; 3],
    pub color: [f32; 3],
    pub emissive: [f32; 3],
}

impl MarkerInstance {
    pub const ATTRIBS: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![2 => Float32x3, 3 => Float32x3, 4 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MarkerInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Per-instance model matrix for one helix rung.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RungInstance {
    pub model: [[f32; 4]; 4],
}

impl RungInstance {
    pub const ATTRIBS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        2 => Float32x4, 3 => Float32x4, 4 => Float32x4, 5 => Float32x4
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<RungInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }
}
