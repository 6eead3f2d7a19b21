//! High-level entry point for applications.
//!
//! [`estimate`] runs RANSAC from a [`RansacSettings`] and turns an empty
//! consensus into an error, which is where a command-line tool reports that no
//! model could be estimated.

use crate::core::ModelEstimator;
use crate::error::{OrsaError, Result};
use crate::ransac::Ransac;
use crate::settings::RansacSettings;

/// Result of a successful estimation.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimationResult<M> {
    /// The estimated model, in pixel coordinates.
    pub model: M,
    /// Indices of inlier correspondences, ascending.
    pub inliers: Vec<usize>,
    /// Number of iterations performed.
    pub iterations: usize,
}

impl<M> EstimationResult<M> {
    /// Fraction of the `num_data` correspondences that are inliers.
    pub fn inlier_ratio(&self, num_data: usize) -> f64 {
        if num_data == 0 {
            return 0.0;
        }
        self.inliers.len() as f64 / num_data as f64
    }
}

/// Estimate a model robustly with classical RANSAC.
///
/// The sampler is seeded from `settings.seed` when present, so two calls with
/// the same seed and data return identical results.
///
/// # Errors
/// [`OrsaError::InvalidConfidence`] for a non-positive confidence,
/// [`OrsaError::NoConsensus`] when no sample produced a single inlier.
pub fn estimate<E>(estimator: &E, settings: &RansacSettings) -> Result<EstimationResult<E::Model>>
where
    E: ModelEstimator + ?Sized,
{
    let mut ransac = Ransac::from_settings(estimator, settings);
    let output = ransac.run_with_settings(settings)?;

    match output.model {
        Some(model) if !output.inliers.is_empty() => Ok(EstimationResult {
            model,
            inliers: output.inliers,
            iterations: output.iterations,
        }),
        _ => Err(OrsaError::NoConsensus {
            iterations: output.iterations,
        }),
    }
}
