// Pointer picking, smoothing and resize on the interactive sphere.

use glam::{Vec2, Vec3};
use visuals_core::{
    InputEvent, RotationMode, Scene, SceneRunner, SphereParams, SphereScene,
};

const FRAME: f64 = 1.0 / 60.0;

fn small_sphere() -> SceneRunner<SphereScene> {
    let params = SphereParams {
        detail: 4,
        ..SphereParams::default()
    };
    SceneRunner::new(SphereScene::new(params, 800, 600), RotationMode::PerFrame)
}

fn run_frames(runner: &mut SceneRunner<SphereScene>, start: usize, n: usize) {
    for i in start..start + n {
        runner.step(i as f64 * FRAME);
    }
}

#[test]
fn centre_of_screen_hits_the_front_of_the_sphere() {
    let mut runner = small_sphere();
    runner.sender().push(InputEvent::PointerMove { ndc: Vec2::ZERO });
    runner.step(0.0);
    let hit = runner.scene.pointer_target().expect("centre ray should hit");
    assert!(hit.z > 0.9 && hit.z < 1.1, "hit {:?}", hit);
    assert!(hit.x.abs() < 1e-3 && hit.y.abs() < 1e-3);
    assert!(runner.scene.pointer_over());
}

#[test]
fn hit_point_is_adopted_in_one_frame() {
    let mut runner = small_sphere();
    runner.sender().push(InputEvent::PointerMove { ndc: Vec2::ZERO });
    runner.step(0.0);
    let hit = runner.scene.pointer_target().unwrap();
    assert!((runner.scene.mouse() - hit).length() < 1e-6);
}

#[test]
fn corner_of_screen_misses() {
    let mut runner = small_sphere();
    runner.sender().push(InputEvent::PointerMove {
        ndc: Vec2::new(0.95, 0.95),
    });
    runner.step(0.0);
    assert!(runner.scene.pointer_target().is_none());
    assert!(!runner.scene.pointer_over());
    assert_eq!(runner.scene.mouse(), Vec3::ZERO);
}

#[test]
fn miss_decays_toward_origin_monotonically() {
    let mut runner = small_sphere();
    let input = runner.sender();
    input.push(InputEvent::PointerMove { ndc: Vec2::ZERO });
    runner.step(0.0);
    input.push(InputEvent::PointerMove {
        ndc: Vec2::new(0.95, 0.95),
    });

    let mut prev = runner.scene.mouse().length();
    assert!(prev > 0.9);
    for i in 1..400 {
        runner.step(i as f64 * FRAME);
        let len = runner.scene.mouse().length();
        assert!(len <= prev, "frame {} grew {} -> {}", i, prev, len);
        prev = len;
    }
    // Settles exactly rather than creeping forever.
    assert_eq!(runner.scene.mouse(), Vec3::ZERO);
}

#[test]
fn first_decay_step_is_five_percent() {
    let mut runner = small_sphere();
    let input = runner.sender();
    input.push(InputEvent::PointerMove { ndc: Vec2::ZERO });
    runner.step(0.0);
    let before = runner.scene.mouse();
    input.push(InputEvent::PointerMove {
        ndc: Vec2::new(0.95, 0.95),
    });
    runner.step(FRAME);
    assert!((runner.scene.mouse() - before * 0.95).length() < 1e-5);
}

#[test]
fn held_click_follows_geometric_curve() {
    let mut runner = small_sphere();
    runner.sender().push(InputEvent::PointerDown);
    run_frames(&mut runner, 0, 20);
    let expected = 1.0 - 0.9f32.powi(20);
    assert!((runner.scene.click() - expected).abs() < 1e-4);
    assert!((runner.scene.click() - 0.878).abs() < 1e-3);
}

#[test]
fn release_eases_click_back_down() {
    let mut runner = small_sphere();
    let input = runner.sender();
    input.push(InputEvent::PointerDown);
    run_frames(&mut runner, 0, 30);
    let peak = runner.scene.click();
    input.push(InputEvent::PointerUp);
    runner.step(30.0 * FRAME);
    let after = runner.scene.click();
    assert!(after < peak && after > 0.0);
    assert!((after - peak * 0.9).abs() < 1e-5);
}

#[test]
fn down_and_up_in_one_frame_nets_to_release() {
    let mut runner = small_sphere();
    let input = runner.sender();
    input.push(InputEvent::PointerDown);
    input.push(InputEvent::PointerUp);
    runner.step(0.0);
    assert_eq!(runner.scene.click(), 0.0);
}

#[test]
fn resize_sets_exact_aspect() {
    let mut runner = small_sphere();
    runner.sender().push(InputEvent::Resize {
        width: 1200,
        height: 800,
    });
    let outcome = runner.step(0.0);
    assert_eq!(runner.scene.camera().aspect, 1.5);
    assert_eq!(outcome.resized, Some((1200, 800)));
    assert_eq!(runner.scene.uniforms().u_resolution, [1200.0, 800.0]);
}

#[test]
fn zero_sized_resize_is_ignored() {
    let mut runner = small_sphere();
    let before = runner.scene.camera().aspect;
    runner.sender().push(InputEvent::Resize {
        width: 0,
        height: 600,
    });
    let outcome = runner.step(0.0);
    assert_eq!(outcome.resized, None);
    assert_eq!(runner.scene.camera().aspect, before);
    assert_eq!(runner.scene.uniforms().u_resolution, [800.0, 600.0]);
}

#[test]
fn input_applied_while_paused_leaves_animation_frozen() {
    let mut runner = small_sphere();
    runner.step(0.0);
    let model = runner.scene.model();
    let input = runner.sender();
    input.push(InputEvent::Resize {
        width: 1200,
        height: 800,
    });
    input.push(InputEvent::PointerDown);

    assert_eq!(runner.apply_input(), Some((1200, 800)));
    assert_eq!(runner.scene.camera().aspect, 1.5);
    assert_eq!(runner.scene.click(), 0.0);
    assert_eq!(runner.scene.model(), model);
    assert_eq!(runner.apply_input(), None);

    runner.step(FRAME);
    assert!((runner.scene.click() - 0.1).abs() < 1e-6);
}

#[test]
fn spins_by_fixed_increment_per_frame() {
    let mut runner = small_sphere();
    run_frames(&mut runner, 0, 100);
    let model = runner.scene.model();
    let (_, rot, _) = model.to_scale_rotation_translation();
    let (x, y, z) = rot.to_euler(glam::EulerRot::XYZ);
    assert!(x.abs() < 1e-4);
    assert!((y - 0.3).abs() < 1e-3, "y={}", y);
    assert!((z - 0.1).abs() < 1e-3, "z={}", z);
}

#[test]
fn uniforms_carry_time_and_camera() {
    let mut runner = small_sphere();
    runner.step(10.0);
    runner.step(10.5);
    let u = runner.scene.uniforms();
    assert!((u.u_time - 0.5).abs() < 1e-6);
    assert_eq!(u.u_camera_pos, [0.0, 0.0, 2.5, 1.0]);
}
