use glam::Vec3;
use visuals_core::constants::WOBBLE_AMPLITUDE;
use visuals_core::noise::{simplex3, wobble};

fn sample_points() -> impl Iterator<Item = Vec3> {
    (0..500).map(|i| {
        let f = i as f32;
        Vec3::new((f * 0.37).sin() * 4.0, (f * 0.11).cos() * 3.0, f * 0.05 - 10.0)
    })
}

#[test]
fn simplex_is_deterministic() {
    for p in sample_points() {
        assert_eq!(simplex3(p).to_bits(), simplex3(p).to_bits());
    }
}

#[test]
fn simplex_stays_near_unit_range() {
    for p in sample_points() {
        let n = simplex3(p);
        assert!(n.is_finite());
        assert!(n.abs() <= 1.05, "noise {} at {:?}", n, p);
    }
}

#[test]
fn simplex_is_not_constant() {
    let values: Vec<f32> = sample_points().map(simplex3).collect();
    let min = values.iter().cloned().fold(f32::MAX, f32::min);
    let max = values.iter().cloned().fold(f32::MIN, f32::max);
    assert!(max - min > 0.5);
}

#[test]
fn wobble_is_bounded_by_amplitude() {
    for p in sample_points() {
        for t in [0.0, 1.3, 77.0] {
            assert!(wobble(p.normalize_or_zero(), t).abs() <= WOBBLE_AMPLITUDE * 1.05);
        }
    }
}
