//! Integration module for connecting frame producers, segmentation backends
//! and display surfaces with the tracking core.
//!
//! This module provides the collaborator traits (frame acquisition, color
//! segmentation, rendering/input) and the [`TrackingPipeline`] that wires
//! them into the single-threaded per-frame loop.

mod pipeline;
mod renderer;
mod segmenter;
mod source;

pub use pipeline::{PipelineError, RunSummary, StepOutcome, TrackingPipeline};
pub use renderer::{Key, Renderer};
pub use segmenter::{Segmentation, Segmenter};
pub use source::FrameSource;
