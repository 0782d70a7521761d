// Shared visual tuning constants used by both web and native frontends.

// Page element ids
pub const FIELD_CANVAS_ID: &str = "liquid-bg";
pub const HELIX_CANVAS_ID: &str = "dna-helix-bg";
pub const SPHERE_CANVAS_ID: &str = "medical-sphere-canvas";
pub const HEART_CANVAS_ID: &str = "heart-canvas";
pub const HEART_BPM_LABEL_ID: &str = "heart-bpm";

// Smoothing factors (fraction of the remaining distance covered per frame)
pub const POINTER_FOLLOW_FACTOR: f32 = 1.0; // hit point is adopted immediately
pub const POINTER_DECAY_FACTOR: f32 = 0.05; // decay toward the origin after a miss
pub const POINTER_SETTLE_EPSILON: f32 = 1e-4; // below this the pointer snaps to the origin
pub const CLICK_SMOOTHING_FACTOR: f32 = 0.1;
pub const CURSOR_FOLLOW_FACTOR: f32 = 0.15;

// Cardiac waveform ("lub-dub")
pub const CARDIAC_CYCLE_SEC: f64 = 1.5;
pub const LUB_END: f64 = 0.2;
pub const DUB_START: f64 = 0.3;
pub const DUB_END: f64 = 0.5;
pub const DUB_GAIN: f32 = 0.7;
pub const HEART_PULSE_SCALE: f32 = 0.1; // whole-object scale per unit pulse

// Simulated heart rate display
pub const BPM_MIN: u32 = 65;
pub const BPM_MAX: u32 = 85;
pub const BPM_DEFAULT: u32 = 72;
pub const BPM_CHANGE_CHANCE: f64 = 0.02; // per frame

// Per-frame rotation increments (radians per frame at the reference rate)
pub const SPHERE_SPIN_Y: f32 = 0.003;
pub const SPHERE_SPIN_Z: f32 = 0.001;
pub const HELIX_SPIN_Y: f32 = 0.003;
pub const HELIX_SCROLL_TILT: f32 = 0.0002; // radians per scrolled CSS pixel
pub const HEART_SPIN_Y: f32 = 0.005;
pub const RING_SPIN_Z: f32 = 0.01;
pub const PARTICLES_SPIN_Y: f32 = 0.001;

// Time-scaled rotation
pub const REFERENCE_FRAME_RATE: f32 = 60.0;
pub const MAX_FRAME_CATCH_UP: f32 = 4.0; // cap on frames' worth of motion applied at once

// Monotonic clock nudge when the wall clock stalls or steps back
pub const MIN_TIME_STEP_SEC: f64 = 1e-6;

// Sphere surface wobble (mirrors the vertex shader)
pub const WOBBLE_FREQUENCY: f32 = 1.5;
pub const WOBBLE_SPEED: f32 = 0.2;
pub const WOBBLE_AMPLITUDE: f32 = 0.05;

// Background particles (plain 2D canvas behind the page)
pub const PARTICLES_CANVAS_ID: &str = "bg-particles";
pub const PARTICLE_COUNT: usize = 50;
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_RANGE: f32 = 3.0;
pub const PARTICLE_SPEED_SPREAD: f32 = 0.5; // per-axis velocity in [-0.25, 0.25) px per frame
pub const PARTICLE_ALPHA_MIN: f32 = 0.1;
pub const PARTICLE_ALPHA_RANGE: f32 = 0.3;

// Floating hero data points
pub const HERO_CONTAINER_ID: &str = "hero-3d-sphere";
pub const FLOAT_PHASE_STEP: f32 = 0.02; // radians per frame
pub const FLOAT_AMPLITUDE_PX: f32 = 10.0;

// Palette (sRGB hex values as used on the page)
pub const HEART_COLOR: u32 = 0xff4081;
pub const HEART_GLOW_COLOR: u32 = 0xff80ab;
pub const ACCENT_CYAN: u32 = 0x00e0ff;
pub const HELIX_BLUE_EMISSIVE: u32 = 0x004466;
pub const HELIX_GREEN: u32 = 0x4caf50;
pub const HELIX_GREEN_EMISSIVE: u32 = 0x002200;
pub const HELIX_AMBIENT: u32 = 0x404040;

#[inline]
pub fn rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}
