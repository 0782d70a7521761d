//! CPU-side geometry built once at scene bootstrap.
//!
//! Indexed triangle lists with per-vertex normals, wound counter-clockwise
//! when seen from outside.

use glam::{Mat4, Quat, Vec3};
use rand::prelude::*;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl MeshVertex {
    pub const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }

    #[inline]
    fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Rebuild smooth normals from the triangle list (area weighted).
    pub fn recompute_normals(&mut self) {
        let mut acc = vec![Vec3::ZERO; self.vertices.len()];
        for tri in self.indices.chunks_exact(3) {
            let (ia, ib, ic) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let a = Vec3::from(self.vertices[ia].position);
            let b = Vec3::from(self.vertices[ib].position);
            let c = Vec3::from(self.vertices[ic].position);
            let n = (c - b).cross(a - b);
            acc[ia] += n;
            acc[ib] += n;
            acc[ic] += n;
        }
        for (v, n) in self.vertices.iter_mut().zip(acc) {
            v.normal = n.normalize_or_zero().to_array();
        }
    }
}

/// Subdivided icosahedron projected onto a sphere of `radius`.
///
/// `detail` extra cuts per edge; each of the 20 faces becomes `(detail + 1)^2`
/// triangles. Faces do not share vertices.
pub fn icosphere(radius: f32, detail: u32) -> Mesh {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let corners = [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ];
    const FACES: [[usize; 3]; 20] = [
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];

    let cols = (detail + 1) as usize;
    let per_face = (cols + 1) * (cols + 2) / 2;
    let mut mesh = Mesh {
        vertices: Vec::with_capacity(per_face * FACES.len()),
        indices: Vec::with_capacity(cols * cols * 3 * FACES.len()),
    };

    for [ia, ib, ic] in FACES {
        let (a, b, c) = (corners[ia], corners[ib], corners[ic]);
        // rows[i][j] holds the vertex index of the j-th point on the i-th row
        let mut rows: Vec<Vec<u32>> = Vec::with_capacity(cols + 1);
        for i in 0..=cols {
            let f = i as f32 / cols as f32;
            let aj = a.lerp(c, f);
            let bj = b.lerp(c, f);
            let n_row = cols - i;
            let mut row = Vec::with_capacity(n_row + 1);
            for j in 0..=n_row {
                let p = if n_row == 0 {
                    aj
                } else {
                    aj.lerp(bj, j as f32 / n_row as f32)
                };
                let n = p.normalize();
                row.push(mesh.vertices.len() as u32);
                mesh.vertices.push(MeshVertex::new(n * radius, n));
            }
            rows.push(row);
        }
        for i in 0..cols {
            for j in 0..(2 * (cols - i) - 1) {
                let k = j / 2;
                if j % 2 == 0 {
                    mesh.indices
                        .extend_from_slice(&[rows[i][k + 1], rows[i + 1][k], rows[i][k]]);
                } else {
                    mesh.indices
                        .extend_from_slice(&[rows[i][k + 1], rows[i + 1][k + 1], rows[i + 1][k]]);
                }
            }
        }
    }
    mesh
}

/// Latitude/longitude sphere with a duplicated seam column and no pole slivers.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> Mesh {
    let w = width_segments.max(3);
    let h = height_segments.max(2);
    let mut mesh = Mesh::default();
    for iy in 0..=h {
        let theta = iy as f32 / h as f32 * PI;
        for ix in 0..=w {
            let phi = ix as f32 / w as f32 * TAU;
            let p = Vec3::new(
                -radius * phi.cos() * theta.sin(),
                radius * theta.cos(),
                radius * phi.sin() * theta.sin(),
            );
            mesh.vertices
                .push(MeshVertex::new(p, p.normalize_or_zero()));
        }
    }
    let idx = |ix: u32, iy: u32| iy * (w + 1) + ix;
    for iy in 0..h {
        for ix in 0..w {
            let a = idx(ix + 1, iy);
            let b = idx(ix, iy);
            let c = idx(ix, iy + 1);
            let d = idx(ix + 1, iy + 1);
            if iy != 0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != h - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    mesh
}

/// Deform a unit sphere into the stylised heart: stretch, widen the upper
/// lobes in proportion to height, flatten front-to-back.
///
/// Applied once at bootstrap; normals are rebuilt afterwards.
pub fn deform_heart(mesh: &mut Mesh) {
    for v in &mut mesh.vertices {
        v.position = heart_point(Vec3::from(v.position)).to_array();
    }
    mesh.recompute_normals();
}

/// Where a sphere point lands after [`deform_heart`].
#[inline]
pub fn heart_point(p: Vec3) -> Vec3 {
    let mut x = p.x * 1.2;
    let y = p.y * 1.2;
    if p.y > 0.0 {
        x *= 1.0 + p.y * 0.5;
    }
    Vec3::new(x, y, p.z * 0.8)
}

/// Torus around the Z axis: ring `radius`, tube radius `tube`.
pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> Mesh {
    let mut mesh = Mesh::default();
    for j in 0..=radial_segments {
        let v = j as f32 / radial_segments as f32 * TAU;
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * TAU;
            let p = Vec3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            mesh.vertices
                .push(MeshVertex::new(p, (p - center).normalize_or_zero()));
        }
    }
    let stride = tubular_segments + 1;
    for j in 1..=radial_segments {
        for i in 1..=tubular_segments {
            let a = stride * j + i - 1;
            let b = stride * (j - 1) + i - 1;
            let c = stride * (j - 1) + i;
            let d = stride * j + i;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    mesh
}

/// Open tube along the Y axis centred on the origin (no caps).
pub fn cylinder(radius: f32, height: f32, radial_segments: u32) -> Mesh {
    let mut mesh = Mesh::default();
    let half = height / 2.0;
    for row in 0..=1u32 {
        let y = half - row as f32 * height;
        for x in 0..=radial_segments {
            let theta = x as f32 / radial_segments as f32 * TAU;
            let n = Vec3::new(theta.sin(), 0.0, theta.cos());
            mesh.vertices
                .push(MeshVertex::new(Vec3::new(n.x * radius, y, n.z * radius), n));
        }
    }
    let stride = radial_segments + 1;
    for x in 0..radial_segments {
        let a = x;
        let b = stride + x;
        let c = stride + x + 1;
        let d = x + 1;
        mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
    }
    mesh
}

/// One base-pair step of the double helix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HelixStep {
    pub y: f32,
    pub angle: f32,
    pub strand_a: Vec3,
    pub strand_b: Vec3,
}

impl HelixStep {
    /// Transform placing a Y-aligned rung between the two strands.
    pub fn rung_transform(&self) -> Mat4 {
        Mat4::from_rotation_translation(
            Quat::from_rotation_y(-self.angle) * Quat::from_rotation_z(PI / 2.0),
            Vec3::new(0.0, self.y, 0.0),
        )
    }
}

/// Two strands of markers winding around the Y axis, centred vertically.
pub fn helix_layout(steps: u32, radius: f32, rise: f32, twist: f32) -> Vec<HelixStep> {
    let half = (steps / 2) as f32;
    (0..steps)
        .map(|i| {
            let y = (i as f32 - half) * rise;
            let angle = i as f32 * twist;
            HelixStep {
                y,
                angle,
                strand_a: Vec3::new(angle.cos() * radius, y, angle.sin() * radius),
                strand_b: Vec3::new((angle + PI).cos() * radius, y, (angle + PI).sin() * radius),
            }
        })
        .collect()
}

/// Points scattered uniformly in a cube of side `extent` centred on the origin.
pub fn scatter_points(count: usize, extent: f32, seed: u64) -> Vec<MeshVertex> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let p = Vec3::new(
                (rng.gen::<f32>() - 0.5) * extent,
                (rng.gen::<f32>() - 0.5) * extent,
                (rng.gen::<f32>() - 0.5) * extent,
            );
            MeshVertex::new(p, Vec3::ZERO)
        })
        .collect()
}
