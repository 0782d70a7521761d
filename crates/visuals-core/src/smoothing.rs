use std::ops::{Add, Mul, Sub};

/// One exponential smoothing step: `value + (target - value) * factor`.
#[inline]
pub fn lerp_toward<T>(value: T, target: T, factor: f32) -> T
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T>,
{
    value + (target - value) * factor
}

/// Value that chases a target by a fixed fraction each frame instead of snapping.
#[derive(Clone, Copy, Debug)]
pub struct Smoothed<T> {
    pub value: T,
    pub target: T,
    factor: f32,
}

impl<T> Smoothed<T>
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T>,
{
    /// `factor` is clamped into `(0, 1]`; zero would freeze the value forever.
    pub fn new(initial: T, factor: f32) -> Self {
        Self {
            value: initial,
            target: initial,
            factor: factor.clamp(f32::EPSILON, 1.0),
        }
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }

    pub fn set_target(&mut self, target: T) {
        self.target = target;
    }

    pub fn step(&mut self) -> T {
        self.value = lerp_toward(self.value, self.target, self.factor);
        self.value
    }
}
