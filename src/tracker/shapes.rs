//! Overlay shapes and color types shared between the tracker core and the
//! renderer seam.

use crate::tracker::contour::PixelPoint;

/// A BGR color triple, matching the channel order the overlay consumers use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub b: u8,
    pub g: u8,
    pub r: u8,
}

impl Color {
    #[inline]
    pub const fn new(b: u8, g: u8, r: u8) -> Self {
        Self { b, g, r }
    }
}

pub const WHITE: Color = Color::new(255, 255, 255);
pub const RED: Color = Color::new(0, 0, 255);
pub const GREEN: Color = Color::new(0, 255, 0);
pub const BLUE: Color = Color::new(255, 0, 0);

/// Thickness value for a filled shape.
pub const FILLED: i32 = -1;

/// Overlay primitive emitted once per frame for the renderer to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Circle {
        center: PixelPoint,
        radius: i32,
        color: Color,
        thickness: i32,
    },
    Rect {
        top_left: PixelPoint,
        bottom_right: PixelPoint,
        color: Color,
        thickness: i32,
    },
    Line {
        from: PixelPoint,
        to: PixelPoint,
        color: Color,
        thickness: i32,
    },
}

/// An HSV color bound used for color-range segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HsvColor {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl HsvColor {
    #[inline]
    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }
}

/// Lower HSV bound of the ball color range.
pub const BALL_LOWER: HsvColor = HsvColor::new(10, 100, 150);
/// Upper HSV bound of the ball color range.
pub const BALL_UPPER: HsvColor = HsvColor::new(30, 255, 255);
