//! The four page scenes and the per-frame driver they share.
//!
//! A scene is an owned struct: camera, drawables and uniform state. Nothing is
//! captured by closures; the loop hands the scene its input events and the
//! frame tick, then asks for uniform blocks to upload.

mod field;
mod heart;
mod helix;
mod sphere;

pub use field::{FieldParams, FieldScene};
pub use heart::{HeartParams, HeartScene};
pub use helix::{HelixParams, HelixScene};
pub use sphere::{SphereParams, SphereScene};

use crate::camera::Camera;
use crate::clock::{FrameClock, FrameTick, RotationMode};
use crate::constants::{FIELD_CANVAS_ID, HEART_CANVAS_ID, HELIX_CANVAS_ID, SPHERE_CANVAS_ID};
use crate::input::{InputEvent, InputQueue, InputSender};
use crate::uniforms::UniformBlock;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneKind {
    Field,
    Helix,
    Sphere,
    Heart,
}

impl SceneKind {
    pub const ALL: [SceneKind; 4] = [
        SceneKind::Field,
        SceneKind::Helix,
        SceneKind::Sphere,
        SceneKind::Heart,
    ];

    /// Id of the page element the scene renders into.
    pub fn canvas_id(self) -> &'static str {
        match self {
            SceneKind::Field => FIELD_CANVAS_ID,
            SceneKind::Helix => HELIX_CANVAS_ID,
            SceneKind::Sphere => SPHERE_CANVAS_ID,
            SceneKind::Heart => HEART_CANVAS_ID,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SceneKind::Field => "field",
            SceneKind::Helix => "helix",
            SceneKind::Sphere => "sphere",
            SceneKind::Heart => "heart",
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SceneKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        SceneKind::ALL
            .into_iter()
            .find(|k| k.name() == s || k.canvas_id() == s)
            .ok_or_else(|| format!("unknown scene `{s}` (expected field, helix, sphere or heart)"))
    }
}

/// Behaviour every scene exposes to the loop.
pub trait Scene {
    const KIND: SceneKind;

    /// Uniform block of the scene's main shading program.
    type Uniforms: UniformBlock;

    /// Apply one event. Resize events reaching a scene are never zero-sized.
    fn handle_input(&mut self, event: InputEvent);

    /// Write time, smooth toward targets, derive, then spin.
    fn advance(&mut self, tick: &FrameTick);

    fn camera(&self) -> &Camera;

    fn uniforms(&self) -> Self::Uniforms;
}

/// What happened during one [`SceneRunner::step`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepOutcome {
    pub tick: FrameTick,
    /// Latest non-zero surface size seen this frame, if any.
    pub resized: Option<(u32, u32)>,
}

/// Owns one scene plus its input queue and clock.
pub struct SceneRunner<S: Scene> {
    pub scene: S,
    queue: InputQueue,
    clock: FrameClock,
}

impl<S: Scene> SceneRunner<S> {
    pub fn new(scene: S, rotation: RotationMode) -> Self {
        Self {
            scene,
            queue: InputQueue::new(),
            clock: FrameClock::new(rotation),
        }
    }

    /// Handle for event listeners; events reach the scene on the next step.
    pub fn sender(&self) -> InputSender {
        self.queue.sender()
    }

    /// Run the per-frame update for wall-clock time `now_sec`.
    ///
    /// All pending events are applied in arrival order before the clock moves
    /// and before any smoothing runs.
    pub fn step(&mut self, now_sec: f64) -> StepOutcome {
        let resized = self.apply_input();
        let tick = self.clock.tick(now_sec);
        self.scene.advance(&tick);
        StepOutcome { tick, resized }
    }

    /// Apply queued events without advancing time, as while the page is hidden.
    ///
    /// Returns the latest non-zero surface size among them.
    pub fn apply_input(&mut self) -> Option<(u32, u32)> {
        let mut resized = None;
        for event in self.queue.drain() {
            if let InputEvent::Resize { width, height } = event {
                if width == 0 || height == 0 {
                    log::warn!("[{}] ignoring zero-sized resize {}x{}", S::KIND, width, height);
                    continue;
                }
                resized = Some((width, height));
            }
            self.scene.handle_input(event);
        }
        resized
    }
}
