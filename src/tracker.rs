mod ball_tracker;
mod clock;
mod contour;
mod platform;
mod selector;
mod shapes;
mod track_buffer;
mod velocity;

pub use ball_tracker::{BallTracker, FrameReport, TrackerConfig};
pub use clock::ClockAccumulator;
pub use contour::{Circle, Contour, Moments, PixelPoint, Point, min_enclosing_circle};
pub use platform::PlatformIndicator;
pub use selector::{Candidate, Detection, best_candidate};
pub use shapes::{BALL_LOWER, BALL_UPPER, BLUE, Color, FILLED, GREEN, HsvColor, RED, Shape, WHITE};
pub use track_buffer::{TrackBuffer, TrailSegment};
pub use velocity::{VelocityEstimator, VelocitySample};
