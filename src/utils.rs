//! Random-number helpers used by the samplers.

use rand::distributions::uniform::SampleUniform;
use rand::distributions::Uniform;
use rand::prelude::*;

/// Seedable source of uniform values over an inclusive range.
///
/// The range is unset until [`reset`](Self::reset) or
/// [`gen_unique`](Self::gen_unique) installs one.
pub struct UniformRandomGenerator<T>
where
    T: Copy + SampleUniform + PartialOrd,
{
    rng: StdRng,
    dist: Option<Uniform<T>>,
}

impl<T> Default for UniformRandomGenerator<T>
where
    T: Copy + SampleUniform + PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> UniformRandomGenerator<T>
where
    T: Copy + SampleUniform + PartialOrd,
{
    /// Construct with a seed drawn from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            dist: None,
        }
    }

    /// Construct with a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            dist: None,
        }
    }

    /// Set the inclusive range `[min, max]` used by [`next`](Self::next).
    pub fn reset(&mut self, min: T, max: T) {
        self.dist = Some(Uniform::new_inclusive(min, max));
    }

    /// Draw one value from the current range, or `None` before any
    /// [`reset`](Self::reset).
    pub fn next(&mut self) -> Option<T> {
        let dist = self.dist.as_ref()?;
        Some(self.rng.sample(dist))
    }

    /// Fill `out` with distinct values drawn uniformly from `[min, max]`.
    ///
    /// Rejection-based, suited to the small sizes of minimal samples. The
    /// caller guarantees that the range holds at least `out.len()` values.
    pub fn gen_unique(&mut self, out: &mut [T], min: T, max: T) {
        self.reset(min, max);
        for i in 0..out.len() {
            loop {
                let Some(candidate) = self.next() else {
                    return;
                };
                if out[..i].iter().all(|&v| v != candidate) {
                    out[i] = candidate;
                    break;
                }
            }
        }
    }
}
