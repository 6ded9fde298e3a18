//! Windowed velocity estimation.
//!
//! One estimate is produced per fixed-size frame window rather than a
//! per-frame derivative, trading responsiveness for noise reduction against
//! centroid jitter. No smoothing beyond the windowing is applied; callers
//! must not expect Kalman- or EMA-grade stability.

use crate::tracker::clock::ClockAccumulator;

/// One endpoint of a velocity window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocitySample {
    /// Centroid x-position in integer pixels.
    pub x: i32,
    /// Accumulated processing time at the sample, in seconds.
    pub elapsed_secs: f64,
}

/// Sample window state. Exactly two samples are ever involved; the pair is
/// cleared on emission.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Window {
    Empty,
    Collecting {
        first: VelocitySample,
        frames_elapsed: u32,
    },
}

/// Estimates instantaneous x-velocity from centroid samples taken a fixed
/// number of frames apart.
#[derive(Debug, Clone)]
pub struct VelocityEstimator {
    window: Window,
    frames_between_samples: u32,
}

impl VelocityEstimator {
    pub fn new(frames_between_samples: u32) -> Self {
        Self {
            window: Window::Empty,
            frames_between_samples,
        }
    }

    /// Advance the estimator by one frame.
    ///
    /// `x` is the frame's detected centroid x-position, or `None` when the
    /// frame had no accepted detection. The frame counter advances either
    /// way, but samples are only ever taken from a real detection; if the
    /// window completes on a detection-less frame the estimator holds until
    /// one arrives. Returns the velocity in pixels/second when the window
    /// closes. A zero time delta emits nothing and still clears the window.
    pub fn tick(&mut self, x: Option<i32>, clock: &ClockAccumulator) -> Option<f64> {
        let elapsed_secs = clock.elapsed_secs();
        match self.window {
            Window::Empty => {
                if let Some(x) = x {
                    self.window = Window::Collecting {
                        first: VelocitySample { x, elapsed_secs },
                        frames_elapsed: 1,
                    };
                }
                None
            }
            Window::Collecting {
                first,
                frames_elapsed,
            } => {
                if frames_elapsed < self.frames_between_samples {
                    self.window = Window::Collecting {
                        first,
                        frames_elapsed: frames_elapsed + 1,
                    };
                    return None;
                }
                let x = x?;
                let dt = elapsed_secs - first.elapsed_secs;
                let dx = (x - first.x) as f64;
                self.window = Window::Empty;
                if dt > 0.0 { Some(dx / dt) } else { None }
            }
        }
    }

    /// Whether a first sample is currently held.
    pub fn is_collecting(&self) -> bool {
        matches!(self.window, Window::Collecting { .. })
    }

    /// Drop any half-collected window.
    pub fn reset(&mut self) {
        self.window = Window::Empty;
    }
}
