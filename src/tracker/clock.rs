//! Accumulated frame-processing time.

use std::time::Duration;

/// Monotonically increasing total of per-frame processing durations.
///
/// This is the sum of measured frame work, not wall time between displays,
/// so tests can drive it with fixed durations.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockAccumulator {
    elapsed_secs: f64,
}

impl ClockAccumulator {
    /// Add one frame's processing duration.
    pub fn advance(&mut self, frame_time: Duration) {
        self.elapsed_secs += frame_time.as_secs_f64();
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    pub fn reset(&mut self) {
        self.elapsed_secs = 0.0;
    }
}
