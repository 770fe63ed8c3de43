//! Frame clock.

use std::time::Instant;

/// Measures wall-clock time between ticks.
#[derive(Debug)]
pub struct Clock {
    last: Instant,
    max_seconds: f64,
}

impl Clock {
    /// Create a clock whose deltas never exceed `max_seconds`.
    pub fn new(max_seconds: f64) -> Self {
        Self {
            last: Instant::now(),
            max_seconds,
        }
    }

    /// Seconds since the previous call (or since creation).
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last).as_secs_f64();
        self.last = now;
        clamp_delta(elapsed, self.max_seconds)
    }
}

/// Clamp a frame delta so one stalled frame cannot tunnel the bird through
/// a pipe.
pub fn clamp_delta(seconds: f64, max_seconds: f64) -> f64 {
    seconds.clamp(0.0, max_seconds)
}
