//! Classical RANSAC sampling: every subset of size `k` is equally likely.

use crate::core::Sampler;
use crate::utils::UniformRandomGenerator;

/// Draws `k` distinct correspondence indices uniformly from `[0, N)`.
///
/// Seeded samplers replay the same index sequence, which is what makes
/// [`RansacSettings::seed`](crate::RansacSettings::seed) reproducible.
pub struct UniformRandomSampler {
    rng: UniformRandomGenerator<usize>,
}

impl Default for UniformRandomSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl UniformRandomSampler {
    /// Sampler seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: UniformRandomGenerator::new(),
        }
    }

    /// Sampler replaying the index sequence of `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: UniformRandomGenerator::from_seed(seed),
        }
    }

    /// Seeded when `seed` is given, entropy-seeded otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::from_seed)
    }
}

impl Sampler for UniformRandomSampler {
    fn sample(&mut self, num_data: usize, sample_size: usize, out_indices: &mut [usize]) -> bool {
        if sample_size == 0 || sample_size > num_data || out_indices.len() < sample_size {
            return false;
        }

        self.rng
            .gen_unique(&mut out_indices[..sample_size], 0, num_data - 1);
        true
    }
}
