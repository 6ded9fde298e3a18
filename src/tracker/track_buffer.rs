//! Bounded history of recent centroid points, used only for trail rendering.

use std::collections::VecDeque;

use crate::tracker::contour::PixelPoint;

/// One renderable piece of the fading trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailSegment {
    pub from: PixelPoint,
    pub to: PixelPoint,
    pub thickness: i32,
}

/// Fixed-capacity, newest-first history of track points.
///
/// Each frame pushes either a centroid or an explicit absent marker; once the
/// buffer is full the oldest entry is evicted. The length never exceeds the
/// capacity.
#[derive(Debug, Clone)]
pub struct TrackBuffer {
    points: VecDeque<Option<PixelPoint>>,
    capacity: usize,
}

impl TrackBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record this frame's track point at the front, evicting the oldest
    /// entry when full.
    pub fn push(&mut self, point: Option<PixelPoint>) {
        self.points.push_front(point);
        self.points.truncate(self.capacity);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Stored points, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Option<PixelPoint>> {
        self.points.iter()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Trail segments between adjacent stored points, excluding the most
    /// recent `skip_newest` points to shorten the rendered trail. Pairs with
    /// an absent side are skipped; thickness shrinks with distance from the
    /// newest point as `round(1.5 * sqrt(capacity / (i + 1)))`.
    pub fn trail_segments(&self, skip_newest: usize) -> Vec<TrailSegment> {
        let mut segments = Vec::new();
        for i in (skip_newest + 1)..self.points.len() {
            let (Some(from), Some(to)) = (self.points[i - 1], self.points[i]) else {
                continue;
            };
            let falloff = self.capacity as f32 / (i as f32 + 1.0);
            let thickness = (1.5 * falloff.sqrt()).round() as i32;
            segments.push(TrailSegment {
                from,
                to,
                thickness,
            });
        }
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: i32, y: i32) -> Option<PixelPoint> {
        Some(PixelPoint::new(x, y))
    }

    #[test]
    fn test_capacity_is_never_exceeded() {
        let mut buffer = TrackBuffer::new(8);
        for i in 0..100 {
            buffer.push(pt(i, i));
            assert!(buffer.len() <= 8);
        }
        assert_eq!(buffer.len(), 8);
    }

    #[test]
    fn test_reads_back_in_reverse_insertion_order() {
        let mut buffer = TrackBuffer::new(4);
        for i in 0..6 {
            buffer.push(pt(i, 0));
        }
        let xs: Vec<i32> = buffer.iter().map(|p| p.unwrap().x).collect();
        // Newest first, truncated to capacity.
        assert_eq!(xs, vec![5, 4, 3, 2]);
    }

    #[test]
    fn test_absent_markers_are_stored() {
        let mut buffer = TrackBuffer::new(4);
        buffer.push(pt(1, 1));
        buffer.push(None);
        assert_eq!(buffer.len(), 2);
        assert!(buffer.iter().next().unwrap().is_none());
    }

    #[test]
    fn test_trail_skips_newest_points() {
        let mut buffer = TrackBuffer::new(64);
        // Push 12 points; newest ends up at x=11.
        for i in 0..12 {
            buffer.push(pt(i, 0));
        }
        let segments = buffer.trail_segments(5);
        // Pairs (5,6) through (10,11): six segments.
        assert_eq!(segments.len(), 6);
        assert_eq!(segments[0].from, PixelPoint::new(6, 0));
        assert_eq!(segments[0].to, PixelPoint::new(5, 0));
        // round(1.5 * sqrt(64 / 7)) = round(4.54) = 5
        assert_eq!(segments[0].thickness, 5);
        // Older segments are thinner or equal.
        for pair in segments.windows(2) {
            assert!(pair[1].thickness <= pair[0].thickness);
        }
    }

    #[test]
    fn test_trail_skips_absent_pairs() {
        let mut buffer = TrackBuffer::new(64);
        for i in 0..12 {
            if i == 4 {
                buffer.push(None);
            } else {
                buffer.push(pt(i, 0));
            }
        }
        // The absent marker sits at index 7; pairs (6,7) and (7,8) drop out.
        let segments = buffer.trail_segments(5);
        assert_eq!(segments.len(), 4);
    }

    #[test]
    fn test_short_buffer_has_no_trail() {
        let mut buffer = TrackBuffer::new(64);
        for i in 0..6 {
            buffer.push(pt(i, 0));
        }
        assert!(buffer.trail_segments(5).is_empty());
    }
}
