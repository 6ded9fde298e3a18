//! Core of a real-time colored-ball tracking loop.
//!
//! Each frame, contours from a color-range segmenter are reduced to at most
//! one accepted detection (largest outline, minimum enclosing circle, moment
//! centroid), a bounded history of centroids feeds a fading trail, and a
//! windowed estimator turns centroid x-positions into a velocity in
//! pixels/second. Frame acquisition, the actual image processing and the
//! display are external collaborators reached through the traits in
//! [`integration`].

pub mod integration;
pub mod tracker;

pub use integration::{
    FrameSource, Key, PipelineError, Renderer, RunSummary, Segmentation, Segmenter, StepOutcome,
    TrackingPipeline,
};
pub use tracker::{BallTracker, Contour, Detection, FrameReport, TrackerConfig};
