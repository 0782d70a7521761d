//! Synthetic cardiac cycle driving the heart scene.
//!
//! The waveform has two half-sine beats per 1.5 s cycle: a full-height "lub"
//! followed, after a short gap, by a softer "dub". Both the heart's scale and
//! its fragment brightness read the same amplitude.

use crate::constants::{
    BPM_CHANGE_CHANCE, BPM_DEFAULT, BPM_MAX, BPM_MIN, CARDIAC_CYCLE_SEC, DUB_END, DUB_GAIN,
    DUB_START, LUB_END,
};
use rand::prelude::*;
use std::f64::consts::PI;

/// Pulse amplitude in `[0, 1]` at `time` seconds.
///
/// `phase = time mod 1.5`; the lub window is `[0, 0.2)`, the dub window is the
/// open interval `(0.3, 0.5)`, everything else is silence.
pub fn cardiac_pulse(time: f64) -> f32 {
    let phase = time.rem_euclid(CARDIAC_CYCLE_SEC);
    let amp = if phase < LUB_END {
        (phase / LUB_END * PI).sin()
    } else if phase > DUB_START && phase < DUB_END {
        ((phase - DUB_START) / (DUB_END - DUB_START) * PI).sin() * DUB_GAIN as f64
    } else {
        0.0
    };
    (amp as f32).clamp(0.0, 1.0)
}

/// Leading integer of a BPM label ("80 BPM" reads as 80), or [`BPM_DEFAULT`]
/// when the text doesn't start with a digit.
pub fn parse_bpm_label(text: &str) -> u32 {
    let text = text.trim_start();
    let digits = text
        .find(|c: char| !c.is_ascii_digit())
        .map_or(text, |end| &text[..end]);
    digits.parse::<u32>().unwrap_or(BPM_DEFAULT)
}

/// Slowly wandering heart-rate readout shown next to the heart.
///
/// Each frame there is a small chance the value steps by -1, 0 or +1; the
/// result is always clamped to `[BPM_MIN, BPM_MAX]`.
pub struct BpmDrift {
    bpm: u32,
    rng: StdRng,
}

impl BpmDrift {
    pub fn new(initial: u32, seed: u64) -> Self {
        Self {
            bpm: initial,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Parse the label's current text; unparsable text starts at the default.
    pub fn from_label(text: &str, seed: u64) -> Self {
        Self::new(parse_bpm_label(text), seed)
    }

    pub fn bpm(&self) -> u32 {
        self.bpm
    }

    /// Advance one frame. Returns the new value when the label should be rewritten.
    pub fn step(&mut self) -> Option<u32> {
        if !self.rng.gen_bool(BPM_CHANGE_CHANCE) {
            return None;
        }
        let variation: i64 = self.rng.gen_range(-1..=1);
        let next = (self.bpm as i64 + variation).clamp(BPM_MIN as i64, BPM_MAX as i64) as u32;
        self.bpm = next;
        Some(next)
    }
}
