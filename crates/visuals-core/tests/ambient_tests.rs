// Background particles and floating labels.

use glam::Vec2;
use visuals_core::constants::{ACCENT_CYAN, HELIX_GREEN, PARTICLE_COUNT};
use visuals_core::{FloatPhase, Particle, ParticleField};

fn dot(pos: Vec2, vel: Vec2) -> Particle {
    Particle {
        pos,
        vel,
        radius: 2.0,
        color: ACCENT_CYAN,
        alpha: 0.2,
    }
}

#[test]
fn seeded_field_is_reproducible_and_in_range() {
    let a = ParticleField::new(PARTICLE_COUNT, 800.0, 600.0, 11);
    let b = ParticleField::new(PARTICLE_COUNT, 800.0, 600.0, 11);
    assert_eq!(a.particles(), b.particles());
    assert_eq!(a.particles().len(), 50);
    for p in a.particles() {
        assert!((0.0..=800.0).contains(&p.pos.x) && (0.0..=600.0).contains(&p.pos.y));
        assert!(p.vel.x.abs() <= 0.25 && p.vel.y.abs() <= 0.25, "vel {:?}", p.vel);
        assert!((1.0..4.0).contains(&p.radius));
        assert!((0.1..0.4).contains(&p.alpha));
        assert!(p.color == ACCENT_CYAN || p.color == HELIX_GREEN);
    }
}

#[test]
fn different_seeds_scatter_differently() {
    let a = ParticleField::new(PARTICLE_COUNT, 800.0, 600.0, 1);
    let b = ParticleField::new(PARTICLE_COUNT, 800.0, 600.0, 2);
    assert_ne!(a.particles(), b.particles());
}

#[test]
fn crossing_right_edge_reverses_x() {
    let mut field = ParticleField::with_particles(
        vec![dot(Vec2::new(99.9, 50.0), Vec2::new(0.5, 0.0))],
        100.0,
        100.0,
    );
    field.step();
    let p = field.particles()[0];
    assert!((p.pos.x - 100.4).abs() < 1e-4);
    assert_eq!(p.vel, Vec2::new(-0.5, 0.0));
    field.step();
    assert!((field.particles()[0].pos.x - 99.9).abs() < 1e-4);
}

#[test]
fn crossing_top_edge_reverses_y() {
    let mut field = ParticleField::with_particles(
        vec![dot(Vec2::new(10.0, 0.1), Vec2::new(0.1, -0.25))],
        100.0,
        100.0,
    );
    field.step();
    let p = field.particles()[0];
    assert!(p.pos.y < 0.0);
    assert_eq!(p.vel, Vec2::new(0.1, 0.25));
}

#[test]
fn dots_stay_near_the_viewport() {
    let mut field = ParticleField::new(PARTICLE_COUNT, 320.0, 240.0, 5);
    for _ in 0..10_000 {
        field.step();
    }
    for p in field.particles() {
        assert!(p.pos.x >= -0.3 && p.pos.x <= 320.3, "x={}", p.pos.x);
        assert!(p.pos.y >= -0.3 && p.pos.y <= 240.3, "y={}", p.pos.y);
    }
}

#[test]
fn resize_moves_the_bounce_edges() {
    let mut field = ParticleField::with_particles(
        vec![dot(Vec2::new(80.0, 20.0), Vec2::new(0.5, 0.0))],
        100.0,
        100.0,
    );
    field.resize(50.0, 100.0);
    assert_eq!(field.bounds(), Vec2::new(50.0, 100.0));
    field.step();
    // Outside after the shrink and heading out: turned around at once.
    assert_eq!(field.particles()[0].vel.x, -0.5);
    for _ in 0..200 {
        field.step();
        let x = field.particles()[0].pos.x;
        assert!(x <= 80.5, "x={}", x);
    }
    assert!(field.particles()[0].pos.x <= 50.5);
}

#[test]
fn resize_then_grow_lets_dots_travel_further() {
    let mut field = ParticleField::with_particles(
        vec![dot(Vec2::new(99.0, 10.0), Vec2::new(0.5, 0.0))],
        100.0,
        100.0,
    );
    field.resize(200.0, 100.0);
    for _ in 0..10 {
        field.step();
    }
    assert_eq!(field.particles()[0].vel.x, 0.5);
    assert!((field.particles()[0].pos.x - 104.0).abs() < 1e-3);
}

#[test]
fn float_phase_advances_and_stays_within_amplitude() {
    let mut phase = FloatPhase::new(0.0);
    let first = phase.step();
    assert!((phase.angle - 0.02).abs() < 1e-6);
    assert!((first - 0.02f32.sin() * 10.0).abs() < 1e-5);
    for _ in 0..1_000 {
        let y = phase.step();
        assert!(y.abs() <= 10.0);
    }
    assert!((phase.angle - 1001.0 * 0.02).abs() < 1e-2);
}
