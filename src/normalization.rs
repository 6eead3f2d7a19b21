//! Image-geometry preconditioning shared by every model family.
//!
//! Points are mapped into a frame where both images have a zoom around 1 so
//! that SVD and linear-solve thresholds inside the solvers stay meaningful. The
//! transform only depends on the image dimensions, never on the point
//! distribution; estimators needing a statistical whitening must add it on top.

use nalgebra::{Matrix3, Vector2, Vector3};

use crate::error::{OrsaError, Result};
use crate::types::{DataMatrix, ImageSide, ImageSize};

/// Pair of isotropic similarity transforms, one per image.
///
/// Both transforms are derived from the larger width and the larger height of
/// the two images, so a threshold in the normalized frame means the same
/// pixel distance on either side.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalization {
    left: Matrix3<f64>,
    right: Matrix3<f64>,
    left_inverse: Matrix3<f64>,
    right_inverse: Matrix3<f64>,
}

impl Normalization {
    /// Build the transforms for two images of the given sizes.
    ///
    /// Fails with [`OrsaError::InvalidImageSize`] when either image has a zero
    /// dimension.
    pub fn from_image_sizes(left: ImageSize, right: ImageSize) -> Result<Self> {
        check_image_size(left)?;
        check_image_size(right)?;
        let size = left.max(right);
        let (forward, inverse) = preconditioner(size);
        Ok(Self {
            left: forward,
            right: forward,
            left_inverse: inverse,
            right_inverse: inverse,
        })
    }

    /// Transform mapping pixel coordinates of `side` into the normalized frame.
    pub fn transform(&self, side: ImageSide) -> &Matrix3<f64> {
        match side {
            ImageSide::Left => &self.left,
            ImageSide::Right => &self.right,
        }
    }

    /// Transform mapping normalized coordinates of `side` back to pixels.
    pub fn inverse(&self, side: ImageSide) -> &Matrix3<f64> {
        match side {
            ImageSide::Left => &self.left_inverse,
            ImageSide::Right => &self.right_inverse,
        }
    }

    /// Scale converting a pixel distance into a normalized distance.
    pub fn factor(&self, side: ImageSide) -> f64 {
        self.transform(side)[(0, 0)]
    }

    pub fn normalize_point(&self, side: ImageSide, p: &Vector2<f64>) -> Vector2<f64> {
        let q = self.transform(side) * Vector3::new(p.x, p.y, 1.0);
        Vector2::new(q.x, q.y)
    }

    pub fn unnormalize_point(&self, side: ImageSide, p: &Vector2<f64>) -> Vector2<f64> {
        let q = self.inverse(side) * Vector3::new(p.x, p.y, 1.0);
        Vector2::new(q.x, q.y)
    }

    /// Apply the transform of `side` to every row of `points`.
    pub fn normalize_points(&self, side: ImageSide, points: &DataMatrix) -> DataMatrix {
        let t = self.transform(side);
        let (s, tx, ty) = (t[(0, 0)], t[(0, 2)], t[(1, 2)]);
        let mut out = points.clone();
        for mut row in out.row_iter_mut() {
            row[0] = s * row[0] + tx;
            row[1] = s * row[1] + ty;
        }
        out
    }

    /// Bring a bilinear constraint `x2ᵀ F x1 = 0` back to pixel coordinates:
    /// `F ← N2ᵀ F N1`.
    pub fn unnormalize_fundamental(&self, f: &mut Matrix3<f64>) {
        *f = self.right.transpose() * *f * self.left;
    }

    /// Bring a point transfer `x2 ~ H x1` back to pixel coordinates:
    /// `H ← N2⁻¹ H N1`.
    pub fn unnormalize_transfer(&self, h: &mut Matrix3<f64>) {
        *h = self.right_inverse * *h * self.left;
    }
}

fn check_image_size(size: ImageSize) -> Result<()> {
    if size.width == 0 || size.height == 0 {
        return Err(OrsaError::InvalidImageSize {
            width: size.width,
            height: size.height,
        });
    }
    Ok(())
}

/// Similarity centering the image and scaling by `1 / sqrt(w * h)`, with its
/// closed-form inverse.
fn preconditioner(size: ImageSize) -> (Matrix3<f64>, Matrix3<f64>) {
    let w = f64::from(size.width);
    let h = f64::from(size.height);
    let s = 1.0 / (w * h).sqrt();

    let forward = Matrix3::new(s, 0.0, -0.5 * w * s, 0.0, s, -0.5 * h * s, 0.0, 0.0, 1.0);
    let inverse = Matrix3::new(1.0 / s, 0.0, 0.5 * w, 0.0, 1.0 / s, 0.5 * h, 0.0, 0.0, 1.0);
    (forward, inverse)
}

/// Index-paired correspondences owned by an estimator, together with their
/// normalized copies and the transforms that produced them.
#[derive(Debug, Clone)]
pub struct Correspondences {
    x1: DataMatrix,
    x2: DataMatrix,
    x1_normalized: DataMatrix,
    x2_normalized: DataMatrix,
    normalization: Normalization,
    symmetric_error: bool,
}

impl Correspondences {
    /// Validate the point sets and precompute their normalized versions.
    ///
    /// `x1` and `x2` are `N x 2` matrices of pixel coordinates in images of
    /// sizes `size1` and `size2`. `symmetric_error` selects whether model
    /// families measure residuals in both images or only in the second one.
    pub fn new(
        x1: DataMatrix,
        size1: impl Into<ImageSize>,
        x2: DataMatrix,
        size2: impl Into<ImageSize>,
        symmetric_error: bool,
    ) -> Result<Self> {
        if x1.ncols() != 2 {
            return Err(OrsaError::InvalidPointDimension {
                side: ImageSide::Left,
                cols: x1.ncols(),
            });
        }
        if x2.ncols() != 2 {
            return Err(OrsaError::InvalidPointDimension {
                side: ImageSide::Right,
                cols: x2.ncols(),
            });
        }
        if x1.nrows() != x2.nrows() {
            return Err(OrsaError::PointCountMismatch {
                left: x1.nrows(),
                right: x2.nrows(),
            });
        }

        let normalization = Normalization::from_image_sizes(size1.into(), size2.into())?;
        let x1_normalized = normalization.normalize_points(ImageSide::Left, &x1);
        let x2_normalized = normalization.normalize_points(ImageSide::Right, &x2);

        Ok(Self {
            x1,
            x2,
            x1_normalized,
            x2_normalized,
            normalization,
            symmetric_error,
        })
    }

    /// Build from slices of `[x, y]` pairs.
    pub fn from_pairs(
        pairs: &[([f64; 2], [f64; 2])],
        size1: impl Into<ImageSize>,
        size2: impl Into<ImageSize>,
        symmetric_error: bool,
    ) -> Result<Self> {
        let n = pairs.len();
        let mut x1 = DataMatrix::zeros(n, 2);
        let mut x2 = DataMatrix::zeros(n, 2);
        for (i, (p1, p2)) in pairs.iter().enumerate() {
            x1[(i, 0)] = p1[0];
            x1[(i, 1)] = p1[1];
            x2[(i, 0)] = p2[0];
            x2[(i, 1)] = p2[1];
        }
        Self::new(x1, size1, x2, size2, symmetric_error)
    }

    pub fn len(&self) -> usize {
        self.x1.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn symmetric_error(&self) -> bool {
        self.symmetric_error
    }

    pub fn normalization(&self) -> &Normalization {
        &self.normalization
    }

    /// Pixel coordinates of `side`.
    pub fn points(&self, side: ImageSide) -> &DataMatrix {
        match side {
            ImageSide::Left => &self.x1,
            ImageSide::Right => &self.x2,
        }
    }

    /// Normalized coordinates of `side`.
    pub fn normalized_points(&self, side: ImageSide) -> &DataMatrix {
        match side {
            ImageSide::Left => &self.x1_normalized,
            ImageSide::Right => &self.x2_normalized,
        }
    }

    pub fn point(&self, side: ImageSide, index: usize) -> Vector2<f64> {
        let m = self.points(side);
        Vector2::new(m[(index, 0)], m[(index, 1)])
    }

    pub fn normalized_point(&self, side: ImageSide, index: usize) -> Vector2<f64> {
        let m = self.normalized_points(side);
        Vector2::new(m[(index, 0)], m[(index, 1)])
    }
}
