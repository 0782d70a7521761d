use crate::constants::{MAX_FRAME_CATCH_UP, MIN_TIME_STEP_SEC, REFERENCE_FRAME_RATE};
use std::fmt;
use std::str::FromStr;

/// How fixed per-frame rotation increments are applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RotationMode {
    /// Apply each increment once per frame; speed follows the refresh rate.
    #[default]
    PerFrame,
    /// Scale increments by elapsed time relative to a 60 Hz reference.
    TimeScaled,
}

impl FromStr for RotationMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "per-frame" | "frame" => Ok(RotationMode::PerFrame),
            "time-scaled" | "time" => Ok(RotationMode::TimeScaled),
            _ => Err(()),
        }
    }
}

impl fmt::Display for RotationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotationMode::PerFrame => f.write_str("per-frame"),
            RotationMode::TimeScaled => f.write_str("time-scaled"),
        }
    }
}

/// Snapshot handed to a scene's per-frame update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTick {
    /// Seconds since the loop's first frame; strictly increasing.
    pub time: f64,
    /// Seconds since the previous frame (0 on the first frame).
    pub dt: f64,
    pub frame: u64,
    pub rotation: RotationMode,
}

impl FrameTick {
    /// Scale a fixed per-frame increment according to the rotation mode.
    #[inline]
    pub fn spin(&self, per_frame: f32) -> f32 {
        match self.rotation {
            RotationMode::PerFrame => per_frame,
            RotationMode::TimeScaled => {
                let frames = (self.dt as f32 * REFERENCE_FRAME_RATE).clamp(0.0, MAX_FRAME_CATCH_UP);
                per_frame * frames
            }
        }
    }
}

/// Turns wall-clock readings into monotonic scene time.
#[derive(Clone, Debug)]
pub struct FrameClock {
    origin: Option<f64>,
    last: f64,
    frame: u64,
    rotation: RotationMode,
}

impl FrameClock {
    pub fn new(rotation: RotationMode) -> Self {
        Self {
            origin: None,
            last: 0.0,
            frame: 0,
            rotation,
        }
    }

    /// Advance to the wall-clock reading `now_sec`.
    ///
    /// The first call defines time zero. Readings that stall or step backwards
    /// are nudged forward so scene time never repeats.
    pub fn tick(&mut self, now_sec: f64) -> FrameTick {
        let origin = *self.origin.get_or_insert(now_sec);
        let raw = now_sec - origin;
        let time = if self.frame == 0 {
            raw.max(0.0)
        } else if raw > self.last {
            raw
        } else {
            self.last + MIN_TIME_STEP_SEC
        };
        let dt = if self.frame == 0 { 0.0 } else { time - self.last };
        self.last = time;
        let tick = FrameTick {
            time,
            dt,
            frame: self.frame,
            rotation: self.rotation,
        };
        self.frame += 1;
        tick
    }
}
