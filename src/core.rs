//! Core traits of the robust-estimation engine.
//!
//! [`ModelEstimator`] captures everything about what a model is and how well
//! it explains the data, so that the sampling loop in [`crate::ransac`] stays
//! generic. [`Sampler`] is the source of minimal samples.

use crate::normalization::Correspondences;
use crate::types::ImageSide;

/// Model family fitted on two-view correspondences.
///
/// Implementors own a [`Correspondences`] and reuse its normalization through
/// [`correspondences`](Self::correspondences). Fitting and residuals work in
/// the normalized frame; [`unnormalize`](Self::unnormalize) converts a raw
/// model back to pixel coordinates.
pub trait ModelEstimator {
    /// Model parameterization produced by [`fit`](Self::fit).
    type Model: Clone;

    /// Correspondence data and preconditioning shared by all families.
    fn correspondences(&self) -> &Correspondences;

    /// Minimal number of correspondences determining a model.
    fn sample_size(&self) -> usize;

    /// Candidate models for the correspondences at `sample`.
    ///
    /// A minimal sample may admit zero, one or several algebraic solutions.
    /// Must be deterministic for the same indices.
    fn fit(&self, sample: &[usize]) -> Vec<Self::Model>;

    /// Squared residual of correspondence `index` under `model`, in the
    /// normalized frame. Symmetric or one-sided according to
    /// [`Correspondences::symmetric_error`].
    fn error(&self, model: &Self::Model, index: usize) -> f64;

    /// Convert a raw model to pixel coordinates, in place.
    ///
    /// Must be applied once per raw model; a second call yields a wrong model.
    fn unnormalize(&self, model: &mut Self::Model);

    /// Number of correspondences.
    fn num_data(&self) -> usize {
        self.correspondences().len()
    }

    /// Scale converting a pixel threshold of `side` into the normalized frame.
    fn normalization_factor(&self, side: ImageSide) -> f64 {
        self.correspondences().normalization().factor(side)
    }

    /// Single model from `sample`, or `None` when the fit has no solution or
    /// is ambiguous (several candidates), letting the caller retry with
    /// another sample.
    fn compute_model(&self, sample: &[usize]) -> Option<Self::Model> {
        let mut models = self.fit(sample);
        if models.len() != 1 {
            return None;
        }
        models.pop()
    }
}

/// Source of minimal samples.
pub trait Sampler {
    /// Draw `sample_size` distinct indices from `[0, num_data)` into
    /// `out_indices`.
    ///
    /// Returns `false` when no valid sample exists (e.g. fewer data than
    /// `sample_size`); `out_indices` is then left unspecified.
    fn sample(&mut self, num_data: usize, sample_size: usize, out_indices: &mut [usize]) -> bool;
}

impl<S: Sampler + ?Sized> Sampler for &mut S {
    fn sample(&mut self, num_data: usize, sample_size: usize, out_indices: &mut [usize]) -> bool {
        (**self).sample(num_data, sample_size, out_indices)
    }
}
