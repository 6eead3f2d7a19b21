//! Shared types for two-view correspondence data.
//!
//! Point sets are stored as `N x 2` dynamic matrices, one point per row, which
//! is the layout every estimator and the RANSAC loop index into.

use nalgebra::DMatrix;

/// Dynamic matrix of `f64` holding one 2D point per row.
pub type DataMatrix = DMatrix<f64>;

/// Which image of the pair a point set or transform belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSide {
    /// First image (`x1`).
    Left,
    /// Second image (`x2`).
    Right,
}

impl std::fmt::Display for ImageSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageSide::Left => write!(f, "left"),
            ImageSide::Right => write!(f, "right"),
        }
    }
}

/// Pixel dimensions of a source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Component-wise maximum of two sizes.
    pub fn max(self, other: ImageSize) -> ImageSize {
        ImageSize::new(self.width.max(other.width), self.height.max(other.height))
    }
}

impl From<(u32, u32)> for ImageSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}
