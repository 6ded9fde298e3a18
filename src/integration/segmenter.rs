//! Trait for color-range segmentation backends.

use ndarray::Array2;

use crate::tracker::{Contour, HsvColor};

/// Output of one segmentation pass: the thresholded binary mask and the
/// outlines of its connected regions.
#[derive(Debug, Clone)]
pub struct Segmentation {
    /// Binary mask (non-zero = inside the color range), row-major.
    pub mask: Array2<u8>,
    /// Closed outlines of the mask's connected regions.
    pub contours: Vec<Contour>,
}

/// Trait for color-range segmentation backends.
///
/// Implementations own the image-processing details (blur, HSV conversion,
/// thresholding, morphological cleanup, contour extraction); the returned
/// contours are expected to already be cleaned up.
pub trait Segmenter<F> {
    /// Error type for segmentation failures.
    type Error;

    /// Segment one frame against an inclusive HSV color range.
    fn segment(
        &mut self,
        frame: &F,
        lower: HsvColor,
        upper: HsvColor,
    ) -> Result<Segmentation, Self::Error>;
}
