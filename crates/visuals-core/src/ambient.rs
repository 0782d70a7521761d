//! Page decorations that animate every frame without a GPU surface: the
//! drifting background dots and the bobbing hero labels.

use crate::constants::{
    ACCENT_CYAN, FLOAT_AMPLITUDE_PX, FLOAT_PHASE_STEP, HELIX_GREEN, PARTICLE_ALPHA_MIN,
    PARTICLE_ALPHA_RANGE, PARTICLE_RADIUS_MIN, PARTICLE_RADIUS_RANGE, PARTICLE_SPEED_SPREAD,
};
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Position in CSS pixels, origin top-left.
    pub pos: Vec2,
    /// Pixels per frame.
    pub vel: Vec2,
    pub radius: f32,
    /// `0xRRGGBB`
    pub color: u32,
    pub alpha: f32,
}

impl Particle {
    fn random(rng: &mut StdRng, bounds: Vec2) -> Self {
        Self {
            pos: Vec2::new(rng.gen::<f32>(), rng.gen::<f32>()) * bounds,
            vel: (Vec2::new(rng.gen::<f32>(), rng.gen::<f32>()) - 0.5) * PARTICLE_SPEED_SPREAD,
            radius: PARTICLE_RADIUS_MIN + rng.gen::<f32>() * PARTICLE_RADIUS_RANGE,
            color: if rng.gen_bool(0.5) { ACCENT_CYAN } else { HELIX_GREEN },
            alpha: PARTICLE_ALPHA_MIN + rng.gen::<f32>() * PARTICLE_ALPHA_RANGE,
        }
    }
}

/// Dots drifting at constant speed and bouncing off the viewport edges.
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Vec2,
}

impl ParticleField {
    /// `count` dots scattered over a `width` x `height` viewport.
    pub fn new(count: usize, width: f32, height: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let bounds = Vec2::new(width.max(0.0), height.max(0.0));
        let particles = (0..count).map(|_| Particle::random(&mut rng, bounds)).collect();
        Self { particles, bounds }
    }

    pub fn with_particles(particles: Vec<Particle>, width: f32, height: f32) -> Self {
        Self {
            particles,
            bounds: Vec2::new(width.max(0.0), height.max(0.0)),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// New viewport size. Dots left outside drift back in.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width.max(0.0), height.max(0.0));
    }

    /// Move every dot one frame, then reverse any axis that has left the bounds.
    ///
    /// Only a velocity still heading outward is flipped, so a dot stranded by a
    /// shrinking viewport comes back instead of jittering in place.
    pub fn step(&mut self) {
        let bounds = self.bounds;
        for p in &mut self.particles {
            p.pos += p.vel;
            if (p.pos.x < 0.0 && p.vel.x < 0.0) || (p.pos.x > bounds.x && p.vel.x > 0.0) {
                p.vel.x = -p.vel.x;
            }
            if (p.pos.y < 0.0 && p.vel.y < 0.0) || (p.pos.y > bounds.y && p.vel.y > 0.0) {
                p.vel.y = -p.vel.y;
            }
        }
    }
}

/// Phase of one floating label; each frame it advances and yields a vertical offset.
#[derive(Clone, Copy, Debug)]
pub struct FloatPhase {
    pub angle: f32,
}

impl FloatPhase {
    pub fn new(angle: f32) -> Self {
        Self { angle }
    }

    /// Advance one frame and return the offset in CSS pixels, within `±10`.
    pub fn step(&mut self) -> f32 {
        self.angle += FLOAT_PHASE_STEP;
        self.angle.sin() * FLOAT_AMPLITUDE_PX
    }
}
