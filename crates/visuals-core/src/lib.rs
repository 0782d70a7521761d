//! Platform-free core of the clinic site's procedural scenes.
//!
//! Everything here runs on the host as well as in the browser: scene state,
//! waveform and noise math, picking, and the wgpu renderers that both
//! front-ends drive.

pub mod ambient;
pub mod camera;
pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod heartbeat;
pub mod input;
pub mod noise;
pub mod render;
pub mod scenes;
pub mod smoothing;
pub mod uniforms;

pub static FIELD_WGSL: &str = include_str!("../shaders/field.wgsl");
pub static HELIX_WGSL: &str = include_str!("../shaders/helix.wgsl");
pub static SPHERE_WGSL: &str = include_str!("../shaders/sphere.wgsl");
pub static HEART_WGSL: &str = include_str!("../shaders/heart.wgsl");

pub use ambient::{FloatPhase, Particle, ParticleField};
pub use camera::{Camera, Projection, Ray};
pub use clock::{FrameClock, FrameTick, RotationMode};
pub use config::LoopConfig;
pub use error::{Result, VisualsError};
pub use heartbeat::{cardiac_pulse, parse_bpm_label, BpmDrift};
pub use input::{InputEvent, InputQueue, InputSender};
pub use render::{
    FieldRenderer, GpuSurface, HeartRenderer, HelixRenderer, SceneRenderer, SphereRenderer, Stage,
};
pub use scenes::{
    FieldParams, FieldScene, HeartParams, HeartScene, HelixParams, HelixScene, Scene, SceneKind,
    SceneRunner, SphereParams, SphereScene, StepOutcome,
};
pub use smoothing::Smoothed;
pub use uniforms::{UniformBlock, UniformMap, UniformValue};
