//! Camera description and screen-to-world picking rays.
//!
//! Cameras here avoid any platform API; front-ends feed them surface sizes
//! and normalized device coordinates.

use glam::{Mat4, Vec2, Vec3, Vec4};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Projection {
    /// Vertical field of view in radians.
    Perspective { fovy_radians: f32 },
    /// Fixed view volume; the aspect ratio does not change the framing.
    Orthographic {
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
    },
}

/// Simple right-handed camera with a perspective or orthographic projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub projection: Projection,
    pub znear: f32,
    pub zfar: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

impl Camera {
    /// Perspective camera on the +Z axis looking at the origin, `fovy_degrees` vertical.
    pub fn perspective(fovy_degrees: f32, eye_z: f32, width: u32, height: u32, zfar: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, eye_z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: aspect_of(width, height),
            projection: Projection::Perspective {
                fovy_radians: fovy_degrees.to_radians(),
            },
            znear: 0.1,
            zfar,
        }
    }

    /// Orthographic camera spanning clip space exactly, for full-screen passes.
    pub fn fullscreen(width: u32, height: u32) -> Self {
        Self {
            eye: Vec3::ZERO,
            target: Vec3::NEG_Z,
            up: Vec3::Y,
            aspect: aspect_of(width, height),
            projection: Projection::Orthographic {
                left: -1.0,
                right: 1.0,
                bottom: -1.0,
                top: 1.0,
            },
            znear: 0.0,
            zfar: 1.0,
        }
    }

    /// Track a new surface size. Zero-sized surfaces are ignored and return `false`.
    pub fn set_viewport(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.aspect = width as f32 / height as f32;
        true
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        match self.projection {
            Projection::Perspective { fovy_radians } => {
                Mat4::perspective_rh(fovy_radians, self.aspect, self.znear, self.zfar)
            }
            Projection::Orthographic {
                left,
                right,
                bottom,
                top,
            } => Mat4::orthographic_rh(left, right, bottom, top, self.znear, self.zfar),
        }
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray through `ndc` (x right, y up, both in `[-1, 1]`).
    ///
    /// Unprojects the near and far plane points so the same code serves both
    /// projections; the origin sits on the near plane.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_proj().inverse();
        let p_near = inv * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p0: Vec3 = p_near.truncate() / p_near.w;
        let p1: Vec3 = p_far.truncate() / p_far.w;
        Ray {
            origin: p0,
            dir: (p1 - p0).normalize(),
        }
    }
}

#[inline]
fn aspect_of(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}
