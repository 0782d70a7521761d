// Host-side tests for input translation and ray picking.

use glam::{Vec2, Vec3};
use visuals_core::input::{ndc_from_surface, ray_sphere};
use visuals_core::{InputEvent, InputQueue, Ray};

#[test]
fn queue_preserves_arrival_order() {
    let queue = InputQueue::new();
    let a = queue.sender();
    let b = a.clone();
    a.push(InputEvent::PointerDown);
    b.push(InputEvent::Resize {
        width: 10,
        height: 20,
    });
    a.push(InputEvent::PointerUp);
    let drained: Vec<_> = queue.drain().into_iter().collect();
    assert_eq!(
        drained,
        vec![
            InputEvent::PointerDown,
            InputEvent::Resize {
                width: 10,
                height: 20
            },
            InputEvent::PointerUp,
        ]
    );
    assert!(queue.is_empty());
}

#[test]
fn drain_on_empty_queue_is_empty() {
    let queue = InputQueue::new();
    assert!(queue.drain().is_empty());
}

#[test]
fn ndc_maps_corners_and_centre() {
    assert_eq!(ndc_from_surface(0.0, 0.0, 200.0, 100.0), Vec2::new(-1.0, 1.0));
    assert_eq!(ndc_from_surface(200.0, 100.0, 200.0, 100.0), Vec2::new(1.0, -1.0));
    assert_eq!(ndc_from_surface(100.0, 50.0, 200.0, 100.0), Vec2::ZERO);
}

#[test]
fn ndc_of_degenerate_surface_is_origin() {
    assert_eq!(ndc_from_surface(5.0, 5.0, 0.0, 100.0), Vec2::ZERO);
}

#[test]
fn ray_sphere_intersection_basic() {
    let ray = Ray {
        origin: Vec3::ZERO,
        dir: Vec3::Z,
    };
    let t = ray_sphere(&ray, Vec3::new(0.0, 0.0, 5.0), 2.0);
    assert_eq!(t, Some(3.0));
}

#[test]
fn ray_sphere_intersection_miss() {
    let ray = Ray {
        origin: Vec3::ZERO,
        dir: Vec3::X,
    };
    assert!(ray_sphere(&ray, Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
}

#[test]
fn ray_behind_origin_misses() {
    let ray = Ray {
        origin: Vec3::ZERO,
        dir: Vec3::NEG_Z,
    };
    assert!(ray_sphere(&ray, Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
}

#[test]
fn ray_from_inside_reports_exit() {
    let ray = Ray {
        origin: Vec3::ZERO,
        dir: Vec3::Y,
    };
    let t = ray_sphere(&ray, Vec3::ZERO, 1.5).unwrap();
    assert!((t - 1.5).abs() < 1e-6);
}
