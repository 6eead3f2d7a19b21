//! Error type shared by estimator construction and the RANSAC driver.

use thiserror::Error;

use crate::types::ImageSide;

/// Errors raised by precondition checks and by the high-level API.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OrsaError {
    /// The two point sets do not hold the same number of correspondences.
    #[error("point sets differ in size: {left} points in the left image, {right} in the right")]
    PointCountMismatch { left: usize, right: usize },
    /// A point set is not made of 2D points.
    #[error("{side} point set must have 2 coordinates per point, got {cols}")]
    InvalidPointDimension { side: ImageSide, cols: usize },
    /// An image dimension is zero, so no preconditioning scale exists.
    #[error("invalid image size {width}x{height}")]
    InvalidImageSize { width: u32, height: u32 },
    /// The confidence parameter must be strictly positive.
    #[error("confidence must be positive, got {0}")]
    InvalidConfidence(f64),
    /// RANSAC finished without a single inlier.
    #[error("failed to estimate a model after {iterations} iterations")]
    NoConsensus { iterations: usize },
}

pub type Result<T> = std::result::Result<T, OrsaError>;
