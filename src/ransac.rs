//! Classical RANSAC with adaptive stopping.
//!
//! The loop draws minimal samples, fits every candidate model, keeps the one
//! with the largest consensus and shrinks the iteration budget as soon as the
//! observed inlier ratio guarantees, with the requested confidence, that an
//! all-inlier sample has been drawn.

use log::{debug, log, log_enabled, warn, Level};

use crate::core::{ModelEstimator, Sampler};
use crate::error::{OrsaError, Result};
use crate::samplers::UniformRandomSampler;
use crate::scoring::{count_inliers, Score};
use crate::settings::RansacSettings;
use crate::types::ImageSide;

/// Outcome of [`Ransac::run`].
#[derive(Debug, Clone, PartialEq)]
pub struct RansacOutput<M> {
    /// Best model in pixel coordinates, `None` when no inlier was ever found.
    pub model: Option<M>,
    /// Inlier indices of the best model, ascending.
    pub inliers: Vec<usize>,
    /// Number of samples drawn.
    pub iterations: usize,
}

impl<M> RansacOutput<M> {
    /// Whether a model with at least one inlier was found.
    pub fn is_success(&self) -> bool {
        self.model.is_some() && !self.inliers.is_empty()
    }
}

/// Dynamic iteration budget of a run.
///
/// Starts at the caller's maximum and only ever decreases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationCap {
    max: usize,
    log_one_minus_confidence: f64,
}

impl IterationCap {
    /// `confidence` is expected in `(0, 1]`.
    pub fn new(max_iterations: usize, confidence: f64) -> Self {
        Self {
            max: max_iterations,
            log_one_minus_confidence: (1.0 - confidence).ln(),
        }
    }

    pub fn get(&self) -> usize {
        self.max
    }

    /// Lower the cap to the number of samples needed to draw an all-inlier
    /// minimal sample with the configured confidence, given the inlier ratio.
    ///
    /// The cap is left untouched when `log(1 - ratio^k)` is not negative or
    /// when the bound is NaN or not below the current cap. The denominator is
    /// evaluated in `f64`, so `1 - ratio^k` only rounds to 1 once `ratio^k`
    /// falls below about `1.1e-16`. Returns the cap after the update.
    pub fn tighten(&mut self, inlier_ratio: f64, sample_size: usize) -> usize {
        let exponent = i32::try_from(sample_size).unwrap_or(i32::MAX);
        let denom = (1.0 - inlier_ratio.powi(exponent)).ln();
        if denom.is_nan() || denom >= 0.0 {
            return self.max;
        }
        let required = (self.log_one_minus_confidence / denom).ceil();
        if required.is_nan() || required >= self.max as f64 {
            return self.max;
        }
        self.max = required.max(0.0) as usize;
        self.max
    }
}

/// RANSAC driver over a borrowed estimator.
///
/// The estimator is only read; the sampler carries the random state, so
/// repeated runs continue its sequence.
pub struct Ransac<'a, E, S = UniformRandomSampler>
where
    E: ModelEstimator + ?Sized,
    S: Sampler,
{
    estimator: &'a E,
    sampler: S,
}

impl<'a, E> Ransac<'a, E, UniformRandomSampler>
where
    E: ModelEstimator + ?Sized,
{
    /// Driver with an entropy-seeded uniform sampler.
    pub fn new(estimator: &'a E) -> Self {
        Self::with_sampler(estimator, UniformRandomSampler::new())
    }

    /// Driver whose sampler follows `settings.seed`.
    pub fn from_settings(estimator: &'a E, settings: &RansacSettings) -> Self {
        Self::with_sampler(
            estimator,
            UniformRandomSampler::from_optional_seed(settings.seed),
        )
    }
}

impl<'a, E, S> Ransac<'a, E, S>
where
    E: ModelEstimator + ?Sized,
    S: Sampler,
{
    pub fn with_sampler(estimator: &'a E, sampler: S) -> Self {
        Self { estimator, sampler }
    }

    /// Sampler state, e.g. to inspect or reseed it between runs.
    pub fn sampler_mut(&mut self) -> &mut S {
        &mut self.sampler
    }

    /// [`run`](Self::run) with the fields of `settings`. The seed is only
    /// honoured at construction, see [`Ransac::from_settings`].
    pub fn run_with_settings(&mut self, settings: &RansacSettings) -> Result<RansacOutput<E::Model>> {
        self.run(
            settings.precision,
            settings.max_iterations,
            settings.confidence,
            settings.verbose,
        )
    }

    /// Search the model with the largest consensus.
    ///
    /// `precision` is the inlier threshold in pixels. At most
    /// `max_iterations` samples are drawn; fewer when the adaptive rule at
    /// `confidence` allows it. Improvements are logged at `info` level when
    /// `verbose` is set, at `trace` level otherwise.
    ///
    /// Finding no inlier is not an error: the output then has no model and an
    /// empty inlier set. The only failure is a non-positive `confidence`;
    /// values above 1 are clamped to 1.
    pub fn run(
        &mut self,
        precision: f64,
        max_iterations: usize,
        confidence: f64,
        verbose: bool,
    ) -> Result<RansacOutput<E::Model>> {
        if confidence.is_nan() || confidence <= 0.0 {
            return Err(OrsaError::InvalidConfidence(confidence));
        }
        let confidence = if confidence > 1.0 {
            warn!("RANSAC confidence {confidence} adjusted to not exceed 1");
            1.0
        } else {
            confidence
        };

        let estimator = self.estimator;
        let threshold = {
            let p = precision * estimator.normalization_factor(ImageSide::Right);
            p * p
        };
        let num_data = estimator.num_data();
        let sample_size = estimator.sample_size();
        let trace_level = if verbose { Level::Info } else { Level::Trace };

        let mut cap = IterationCap::new(max_iterations, confidence);
        let mut sample = vec![0usize; sample_size];
        let mut candidate_inliers = Vec::new();
        let mut best_model: Option<E::Model> = None;
        let mut best_inliers: Vec<usize> = Vec::new();
        let mut best_score = Score::default();

        let mut iteration = 0;
        while iteration < cap.get() {
            if self.sampler.sample(num_data, sample_size, &mut sample) {
                for model in estimator.fit(&sample) {
                    let score = count_inliers(estimator, &model, threshold, &mut candidate_inliers);
                    if score <= best_score {
                        continue;
                    }
                    best_score = score;
                    best_model = Some(model);
                    std::mem::swap(&mut best_inliers, &mut candidate_inliers);
                    let max = cap.tighten(score.inlier_ratio(num_data), sample_size);

                    if log_enabled!(trace_level) {
                        let indices: Vec<String> = sample.iter().map(ToString::to_string).collect();
                        log!(
                            trace_level,
                            "inliers={} (iter={iteration},iterMax={max},sample={})",
                            score.inlier_count,
                            indices.join(",")
                        );
                    }
                }
            }
            iteration += 1;
        }

        if let Some(model) = best_model.as_mut() {
            if !best_inliers.is_empty() {
                estimator.unnormalize(model);
            }
        }
        debug!(
            "RANSAC stopped after {iteration} of {max_iterations} iterations with {}/{num_data} inliers",
            best_inliers.len()
        );

        Ok(RansacOutput {
            model: best_model,
            inliers: best_inliers,
            iterations: iteration,
        })
    }
}
