use crate::camera::Ray;
use glam::{Vec2, Vec3};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

/// Pointer and window events, already translated out of the platform's types.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer position in normalized device coordinates of the scene's surface.
    PointerMove { ndc: Vec2 },
    PointerDown,
    PointerUp,
    /// New backing size of the scene's surface in physical pixels.
    Resize { width: u32, height: u32 },
    /// Page scroll offset in CSS pixels.
    Scroll { offset_y: f32 },
}

pub type PendingEvents = SmallVec<[InputEvent; 8]>;

/// Per-scene event queue drained once per frame by the render loop.
///
/// Listeners hold an [`InputSender`]; the loop owns the queue. Events are
/// applied in arrival order before any smoothing runs.
#[derive(Default)]
pub struct InputQueue {
    pending: Rc<RefCell<PendingEvents>>,
}

#[derive(Clone)]
pub struct InputSender {
    pending: Rc<RefCell<PendingEvents>>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sender(&self) -> InputSender {
        InputSender {
            pending: self.pending.clone(),
        }
    }

    /// Take every queued event, oldest first.
    pub fn drain(&self) -> PendingEvents {
        std::mem::take(&mut *self.pending.borrow_mut())
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }
}

impl InputSender {
    pub fn push(&self, event: InputEvent) {
        self.pending.borrow_mut().push(event);
    }
}

/// Map a position inside a surface (CSS or physical pixels, origin top-left)
/// to normalized device coordinates.
///
/// Points outside the surface map outside `[-1, 1]`, which simply misses.
#[inline]
pub fn ndc_from_surface(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new((x / width) * 2.0 - 1.0, -((y / height) * 2.0) + 1.0)
}

/// Nearest non-negative ray parameter where `ray` meets the sphere, if any.
///
/// A ray starting inside the sphere reports the exit point.
#[inline]
pub fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t_near = -b - sq;
    if t_near >= 0.0 {
        return Some(t_near);
    }
    let t_far = -b + sq;
    (t_far >= 0.0).then_some(t_far)
}
