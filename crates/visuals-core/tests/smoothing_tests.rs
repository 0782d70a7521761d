// Exponential smoothing toward targets.

use glam::Vec3;
use visuals_core::smoothing::lerp_toward;
use visuals_core::Smoothed;

#[test]
fn converges_without_overshoot() {
    let mut s = Smoothed::new(0.0f32, 0.1);
    s.set_target(1.0);
    let mut prev = s.value;
    for _ in 0..200 {
        let v = s.step();
        assert!(v >= prev, "not monotonic: {} after {}", v, prev);
        assert!(v <= 1.0, "overshoot: {}", v);
        prev = v;
    }
    assert!((1.0 - prev).abs() < 1e-6);
}

#[test]
fn converges_downward_too() {
    let mut s = Smoothed::new(1.0f32, 0.15);
    s.set_target(0.0);
    let mut prev = s.value;
    for _ in 0..100 {
        let v = s.step();
        assert!(v <= prev && v >= 0.0);
        prev = v;
    }
    assert!(prev < 1e-6);
}

#[test]
fn gap_shrinks_geometrically() {
    let mut s = Smoothed::new(0.0f32, 0.1);
    s.set_target(1.0);
    for n in 1..=30 {
        s.step();
        let expected = 1.0 - 0.9f32.powi(n);
        assert!((s.value - expected).abs() < 1e-5, "frame {}", n);
    }
}

#[test]
fn factor_one_snaps() {
    let mut s = Smoothed::new(Vec3::ZERO, 1.0);
    s.set_target(Vec3::new(0.2, -0.4, 0.9));
    assert_eq!(s.step(), Vec3::new(0.2, -0.4, 0.9));
}

#[test]
fn factor_is_clamped_into_unit_interval() {
    assert_eq!(Smoothed::new(0.0f32, 3.0).factor(), 1.0);
    assert!(Smoothed::new(0.0f32, 0.0).factor() > 0.0);
}

#[test]
fn lerp_toward_vectors() {
    let v = lerp_toward(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO, 0.05);
    assert!((v.x - 0.95).abs() < 1e-6);
}
