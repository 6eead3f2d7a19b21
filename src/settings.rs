//! RANSAC configuration.

use serde::{Deserialize, Serialize};

/// Parameters of a RANSAC run.
///
/// Defaults match the two-view demo: a 1 pixel threshold, 10 000 samples and
/// a 0.95 confidence for the adaptive stopping rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RansacSettings {
    /// Inlier threshold in pixels. A value of 0 keeps only exact fits; callers
    /// wanting "any precision" must pick a value themselves.
    pub precision: f64,
    /// Upper bound on the number of samples drawn.
    pub max_iterations: usize,
    /// Probability of having drawn at least one all-inlier sample before
    /// stopping. Must be positive; values above 1 are clamped.
    pub confidence: f64,
    /// Report each improvement of the consensus at `info` level.
    pub verbose: bool,
    /// Seed of the uniform sampler; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for RansacSettings {
    fn default() -> Self {
        Self {
            precision: 1.0,
            max_iterations: 10_000,
            confidence: 0.95,
            verbose: false,
            seed: None,
        }
    }
}

impl RansacSettings {
    pub fn with_precision(mut self, precision: f64) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
