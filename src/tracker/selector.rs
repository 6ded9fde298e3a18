//! Per-frame candidate selection.

use crate::tracker::contour::{Circle, Contour, PixelPoint, Point};

/// The winning contour of a frame, before the acceptance checks.
///
/// The candidate exists even when it is too small to count as a detection;
/// `centroid` is `None` for a degenerate (zero-area) outline.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    /// Minimum enclosing circle of the winning outline.
    pub circle: Circle,
    /// Moment-based centroid, absent for zero-area outlines.
    pub centroid: Option<PixelPoint>,
    /// Enclosed area of the winning outline.
    pub area: f64,
}

impl Candidate {
    /// Promote the candidate to an accepted detection, or `None` when the
    /// enclosing radius does not exceed `min_radius` or the outline has no
    /// centroid.
    pub fn into_detection(self, min_radius: f32) -> Option<Detection> {
        if self.circle.radius <= min_radius {
            return None;
        }
        let centroid = self.centroid?;
        Some(Detection {
            center: self.circle.center,
            radius: self.circle.radius,
            centroid,
        })
    }
}

/// An accepted per-frame detection of the tracked object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    /// Enclosing-circle center in floating-point pixels.
    pub center: Point,
    /// Enclosing-circle radius in pixels.
    pub radius: f32,
    /// Moment-based centroid in integer pixels.
    pub centroid: PixelPoint,
}

impl Detection {
    /// Circle center x truncated to integer pixels.
    #[inline]
    pub fn x(&self) -> i32 {
        self.center.x as i32
    }

    /// Circle center y truncated to integer pixels.
    #[inline]
    pub fn y(&self) -> i32 {
        self.center.y as i32
    }

    /// Radius truncated to integer pixels.
    #[inline]
    pub fn radius_px(&self) -> i32 {
        self.radius as i32
    }
}

/// Pick the maximum-area outline and derive its circle and centroid.
///
/// Ties resolve to the first contour in input order, so identical input
/// yields identical output. Returns `None` for an empty contour set or a
/// winner with no enclosing circle (no points at all).
pub fn best_candidate(contours: &[Contour]) -> Option<Candidate> {
    let mut best: Option<(f64, &Contour)> = None;
    for contour in contours {
        let area = contour.area();
        match &best {
            Some((best_area, _)) if *best_area >= area => {}
            _ => best = Some((area, contour)),
        }
    }
    let (area, contour) = best?;
    let circle = contour.min_enclosing_circle()?;
    Some(Candidate {
        circle,
        centroid: contour.moments().centroid(),
        area,
    })
}
