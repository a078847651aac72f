use rand::prelude::*;

/// Source of the decorative per-node animation duration. Kept apart from the
/// layout math so positions stay reproducible.
pub trait JitterSource: Send + Sync {
    fn animation_secs(&self) -> f64;
}

/// Uniform durations in `[3, 4)` seconds.
#[derive(Debug, Default)]
pub struct RandomJitter;

impl JitterSource for RandomJitter {
    fn animation_secs(&self) -> f64 {
        rand::rng().random_range(3.0..4.0)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(pub f64);

impl JitterSource for FixedJitter {
    fn animation_secs(&self) -> f64 {
        self.0
    }
}
