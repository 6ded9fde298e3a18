//! Geometry primitives for contour-based detection.
//!
//! A [`Contour`] is a closed polygon approximating a connected region of a
//! segmented image. It supplies the three quantities the selector needs:
//! signed area moments (for the centroid), absolute area (for picking the
//! winner), and the minimum enclosing circle.

use nalgebra::{Matrix2, Vector2};

/// A point in floating-point pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    #[inline]
    fn midpoint(a: Point, b: Point) -> Point {
        Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
    }
}

/// A point in integer pixel coordinates, as used for drawing and for the
/// tracked centroid history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Polygon area moments up to first order.
///
/// `m00` is the signed area; the centroid is `(m10/m00, m01/m00)`. A zero
/// `m00` means the polygon is degenerate (collinear or empty) and has no
/// centroid.
#[derive(Debug, Clone, Copy, Default)]
pub struct Moments {
    pub m00: f64,
    pub m10: f64,
    pub m01: f64,
}

impl Moments {
    /// Moment-based centroid in integer pixel coordinates, or `None` for a
    /// degenerate region. Never divides by a zero area.
    pub fn centroid(&self) -> Option<PixelPoint> {
        if self.m00.abs() < 1e-9 {
            return None;
        }
        Some(PixelPoint::new(
            (self.m10 / self.m00) as i32,
            (self.m01 / self.m00) as i32,
        ))
    }
}

/// A circle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
}

impl Circle {
    /// Containment check with a small tolerance for accumulated float error.
    #[inline]
    fn contains(&self, p: &Point) -> bool {
        self.center.distance(p) <= self.radius + 1e-4
    }
}

/// A closed region outline produced by the segmenter.
#[derive(Debug, Clone, Default)]
pub struct Contour {
    points: Vec<Point>,
}

impl Contour {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Area moments of the polygon via Green's theorem, treating the vertex
    /// list as a closed ring.
    pub fn moments(&self) -> Moments {
        let mut m = Moments::default();
        let n = self.points.len();
        if n < 3 {
            return m;
        }
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            let cross = (a.x as f64) * (b.y as f64) - (b.x as f64) * (a.y as f64);
            m.m00 += cross;
            m.m10 += (a.x as f64 + b.x as f64) * cross;
            m.m01 += (a.y as f64 + b.y as f64) * cross;
        }
        // Divide once after accumulation so integer-vertex contours stay
        // exactly representable; per-edge division by 6 loses the last ulp
        // and truncates centroids like 10 down to 9.
        m.m00 /= 2.0;
        m.m10 /= 6.0;
        m.m01 /= 6.0;
        m
    }

    /// Absolute enclosed area. Vertex winding does not matter.
    pub fn area(&self) -> f64 {
        self.moments().m00.abs()
    }

    /// Smallest circle fully containing the outline, or `None` for an empty
    /// outline. Incremental minidisk construction with at most three boundary
    /// points.
    pub fn min_enclosing_circle(&self) -> Option<Circle> {
        min_enclosing_circle(&self.points)
    }
}

impl From<Vec<(f32, f32)>> for Contour {
    fn from(points: Vec<(f32, f32)>) -> Self {
        Self::new(points.into_iter().map(|(x, y)| Point::new(x, y)).collect())
    }
}

/// Minimum enclosing circle of a point set (Welzl's incremental scheme,
/// unshuffled; contour sizes here are small).
pub fn min_enclosing_circle(points: &[Point]) -> Option<Circle> {
    let first = *points.first()?;
    let mut circle = Circle {
        center: first,
        radius: 0.0,
    };
    for i in 1..points.len() {
        if !circle.contains(&points[i]) {
            circle = circle_with_one(&points[..i], points[i]);
        }
    }
    Some(circle)
}

/// Smallest circle over `points` with `q` on its boundary.
fn circle_with_one(points: &[Point], q: Point) -> Circle {
    let mut circle = Circle {
        center: q,
        radius: 0.0,
    };
    for j in 0..points.len() {
        if !circle.contains(&points[j]) {
            circle = circle_with_two(&points[..j], q, points[j]);
        }
    }
    circle
}

/// Smallest circle over `points` with both `q1` and `q2` on its boundary.
fn circle_with_two(points: &[Point], q1: Point, q2: Point) -> Circle {
    let mut circle = circle_from_two(q1, q2);
    for p in points {
        if !circle.contains(p) {
            circle = circle_from_three(q1, q2, *p)
                .unwrap_or_else(|| widest_pair_circle(q1, q2, *p));
        }
    }
    circle
}

fn circle_from_two(a: Point, b: Point) -> Circle {
    Circle {
        center: Point::midpoint(a, b),
        radius: a.distance(&b) / 2.0,
    }
}

/// Circumscribed circle of a triangle, or `None` when the points are
/// collinear. The circumcenter solves a 2x2 linear system.
fn circle_from_three(a: Point, b: Point, c: Point) -> Option<Circle> {
    let m = Matrix2::new(
        2.0 * (b.x - a.x) as f64,
        2.0 * (b.y - a.y) as f64,
        2.0 * (c.x - a.x) as f64,
        2.0 * (c.y - a.y) as f64,
    );
    if m.determinant().abs() < 1e-9 {
        return None;
    }
    let sq = |p: Point| (p.x as f64) * (p.x as f64) + (p.y as f64) * (p.y as f64);
    let rhs = Vector2::new(sq(b) - sq(a), sq(c) - sq(a));
    let solution = m.lu().solve(&rhs)?;
    let center = Point::new(solution[0] as f32, solution[1] as f32);
    Some(Circle {
        radius: center.distance(&a),
        center,
    })
}

/// Fallback for collinear boundary candidates: the widest two-point circle.
fn widest_pair_circle(a: Point, b: Point, c: Point) -> Circle {
    let candidates = [
        circle_from_two(a, b),
        circle_from_two(a, c),
        circle_from_two(b, c),
    ];
    candidates
        .into_iter()
        .max_by(|x, y| x.radius.total_cmp(&y.radius))
        .unwrap_or(candidates[0])
}
