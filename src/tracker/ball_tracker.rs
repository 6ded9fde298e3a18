//! Main per-frame tracking step.

use std::time::Duration;

use log::debug;

use crate::tracker::clock::ClockAccumulator;
use crate::tracker::contour::{Contour, PixelPoint};
use crate::tracker::platform::PlatformIndicator;
use crate::tracker::selector::{self, Detection};
use crate::tracker::shapes::{self, HsvColor, Shape};
use crate::tracker::track_buffer::TrackBuffer;
use crate::tracker::velocity::VelocityEstimator;

/// Configuration for the ball tracker.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Capacity of the centroid history used for the trail.
    pub buffer_capacity: usize,
    /// Minimum enclosing-circle radius for an accepted detection.
    pub min_radius: f32,
    /// Frame window between the two velocity samples.
    pub frames_between_samples: u32,
    /// Newest points excluded from the rendered trail.
    pub trail_skip: usize,
    pub platform: PlatformIndicator,
    /// Lower HSV bound handed to the segmenter.
    pub hsv_lower: HsvColor,
    /// Upper HSV bound handed to the segmenter.
    pub hsv_upper: HsvColor,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: 64,
            min_radius: 15.0,
            frames_between_samples: 5,
            trail_skip: 5,
            platform: PlatformIndicator::default(),
            hsv_lower: shapes::BALL_LOWER,
            hsv_upper: shapes::BALL_UPPER,
        }
    }
}

/// Everything derived from one frame.
#[derive(Debug, Clone)]
pub struct FrameReport {
    pub frame_id: u32,
    pub detection: Option<Detection>,
    /// Windowed x-velocity in pixels/second, when a window closed this frame.
    pub velocity: Option<f64>,
    /// Accumulated processing time after this frame, in seconds.
    pub elapsed_secs: f64,
    /// Overlay shapes for the renderer, in draw order.
    pub overlays: Vec<Shape>,
}

pub struct BallTracker {
    config: TrackerConfig,
    buffer: TrackBuffer,
    estimator: VelocityEstimator,
    clock: ClockAccumulator,
    frame_id: u32,
}

impl BallTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            buffer: TrackBuffer::new(config.buffer_capacity),
            estimator: VelocityEstimator::new(config.frames_between_samples),
            clock: ClockAccumulator::default(),
            frame_id: 0,
            config,
        }
    }

    /// Process one frame's contour set.
    ///
    /// `frame_time` is the measured processing duration of this frame, fed
    /// into the accumulated clock that timestamps velocity samples.
    pub fn update(&mut self, contours: &[Contour], frame_time: Duration) -> FrameReport {
        self.frame_id += 1;
        self.clock.advance(frame_time);

        let detection = selector::best_candidate(contours)
            .and_then(|candidate| candidate.into_detection(self.config.min_radius));

        let mut overlays = Vec::new();
        if let Some(det) = &detection {
            overlays.push(Shape::Circle {
                center: PixelPoint::new(det.x(), det.y()),
                radius: det.radius_px(),
                color: shapes::WHITE,
                thickness: 2,
            });
            overlays.push(Shape::Circle {
                center: det.centroid,
                radius: 5,
                color: shapes::RED,
                thickness: shapes::FILLED,
            });
            overlays.extend(self.config.platform.shapes(det));
        }

        self.buffer.push(detection.as_ref().map(|d| d.centroid));
        for segment in self.buffer.trail_segments(self.config.trail_skip) {
            overlays.push(Shape::Line {
                from: segment.from,
                to: segment.to,
                color: shapes::RED,
                thickness: segment.thickness,
            });
        }

        let velocity = self
            .estimator
            .tick(detection.as_ref().map(|d| d.centroid.x), &self.clock);
        if let Some(v) = velocity {
            debug!(
                "frame {}: x-velocity {v:.1} px/s over a {}-frame window",
                self.frame_id, self.config.frames_between_samples
            );
        }

        FrameReport {
            frame_id: self.frame_id,
            detection,
            velocity,
            elapsed_secs: self.clock.elapsed_secs(),
            overlays,
        }
    }

    /// Restore the initial state: empty history, empty sample window, zeroed
    /// clock and frame counter. Configuration is kept.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.estimator.reset();
        self.clock.reset();
        self.frame_id = 0;
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn buffer(&self) -> &TrackBuffer {
        &self.buffer
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.clock.elapsed_secs()
    }
}
