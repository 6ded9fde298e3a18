//! Platform-proximity indicator.

use crate::tracker::contour::PixelPoint;
use crate::tracker::selector::Detection;
use crate::tracker::shapes::{self, Shape};

/// Stateless indicator of an imminent ball/platform contact.
///
/// Re-evaluated every frame with no hysteresis, so it may flicker across
/// consecutive frames when the detection oscillates around the threshold;
/// that is the intended behavior, not something to smooth over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformIndicator {
    /// Vertical position of the platform reference line.
    pub surface_y: i32,
    /// Vertical position of the raised "triggered" line.
    pub strike_y: i32,
    /// Horizontal margin added beyond the ball radius on each side.
    pub margin: i32,
}

impl Default for PlatformIndicator {
    fn default() -> Self {
        Self {
            surface_y: 325,
            strike_y: 300,
            margin: 5,
        }
    }
}

impl PlatformIndicator {
    /// True when the ball's lower edge has crossed the reference line.
    pub fn is_triggered(&self, detection: &Detection) -> bool {
        detection.y() > self.surface_y - detection.radius_px()
    }

    /// Overlay rectangles for this frame: the reference line always, the
    /// triggered line only when contact is imminent.
    pub fn shapes(&self, detection: &Detection) -> Vec<Shape> {
        let half_span = detection.radius_px() + self.margin;
        let x = detection.x();
        let line = |y: i32, color| Shape::Rect {
            top_left: PixelPoint::new(x - half_span, y),
            bottom_right: PixelPoint::new(x + half_span, y),
            color,
            thickness: 3,
        };

        let mut out = vec![line(self.surface_y, shapes::GREEN)];
        if self.is_triggered(detection) {
            out.push(line(self.strike_y, shapes::BLUE));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::contour::Point;

    fn detection(x: f32, y: f32, radius: f32) -> Detection {
        Detection {
            center: Point::new(x, y),
            radius,
            centroid: PixelPoint::new(x as i32, y as i32),
        }
    }

    #[test]
    fn test_triggered_below_threshold_line() {
        let indicator = PlatformIndicator::default();
        // 310 > 325 - 20
        assert!(indicator.is_triggered(&detection(100.0, 310.0, 20.0)));
    }

    #[test]
    fn test_not_triggered_above_threshold_line() {
        let indicator = PlatformIndicator::default();
        // 300 > 305 is false
        assert!(!indicator.is_triggered(&detection(100.0, 300.0, 20.0)));
    }

    #[test]
    fn test_reference_line_geometry() {
        let indicator = PlatformIndicator::default();
        let shapes = indicator.shapes(&detection(100.0, 200.0, 20.0));
        assert_eq!(shapes.len(), 1);
        let Shape::Rect {
            top_left,
            bottom_right,
            ..
        } = shapes[0]
        else {
            panic!("expected a rect");
        };
        assert_eq!(top_left, PixelPoint::new(75, 325));
        assert_eq!(bottom_right, PixelPoint::new(125, 325));
    }

    #[test]
    fn test_triggered_adds_strike_line() {
        let indicator = PlatformIndicator::default();
        let shapes = indicator.shapes(&detection(100.0, 310.0, 20.0));
        assert_eq!(shapes.len(), 2);
        let Shape::Rect { top_left, .. } = shapes[1] else {
            panic!("expected a rect");
        };
        assert_eq!(top_left.y, 300);
    }
}
