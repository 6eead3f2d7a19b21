//! Inlier-count scoring of candidate models.

use crate::core::ModelEstimator;

/// Number of correspondences explained by a model.
///
/// Ordered by inlier count, so "better" is a plain `>` comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score {
    pub inlier_count: usize,
}

impl Score {
    pub fn new(inlier_count: usize) -> Self {
        Self { inlier_count }
    }

    /// Fraction of `num_data` correspondences that are inliers.
    pub fn inlier_ratio(&self, num_data: usize) -> f64 {
        if num_data == 0 {
            return 0.0;
        }
        self.inlier_count as f64 / num_data as f64
    }
}

/// Collect into `inliers_out` every index whose residual under `model` is at
/// most `threshold`.
///
/// `threshold` is a squared distance in the normalized frame, the unit of
/// [`ModelEstimator::error`]. Indices are pushed in ascending order.
pub fn count_inliers<E>(
    estimator: &E,
    model: &E::Model,
    threshold: f64,
    inliers_out: &mut Vec<usize>,
) -> Score
where
    E: ModelEstimator + ?Sized,
{
    inliers_out.clear();
    for i in 0..estimator.num_data() {
        if estimator.error(model, i) <= threshold {
            inliers_out.push(i);
        }
    }
    Score::new(inliers_out.len())
}
