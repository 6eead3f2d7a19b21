//! Example: robust image-to-image translation with RANSAC
//!
//! Matches between two 640x480 frames are shifted by a constant offset, with a
//! third of them replaced by random mismatches. Run with `RUST_LOG=info` to
//! see every improvement of the consensus.

use nalgebra::Vector2;
use orsa::{estimate, Correspondences, ImageSide, ModelEstimator, OrsaError, RansacSettings};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Pure translation `x2 = x1 + t`, fitted from one correspondence.
struct Translation {
    data: Correspondences,
}

impl ModelEstimator for Translation {
    type Model = Vector2<f64>;

    fn correspondences(&self) -> &Correspondences {
        &self.data
    }

    fn sample_size(&self) -> usize {
        1
    }

    fn fit(&self, sample: &[usize]) -> Vec<Self::Model> {
        sample
            .first()
            .map(|&i| {
                self.data.normalized_point(ImageSide::Right, i)
                    - self.data.normalized_point(ImageSide::Left, i)
            })
            .into_iter()
            .collect()
    }

    fn error(&self, t: &Self::Model, index: usize) -> f64 {
        let predicted = self.data.normalized_point(ImageSide::Left, index) + t;
        (self.data.normalized_point(ImageSide::Right, index) - predicted).norm_squared()
    }

    fn unnormalize(&self, t: &mut Self::Model) {
        *t /= self.normalization_factor(ImageSide::Right);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (width, height) = (640u32, 480u32);
    let true_shift = [23.5, -11.25];
    let n_inliers = 80;
    let n_outliers = 40;

    let mut rng = StdRng::seed_from_u64(2011);
    let mut pairs = Vec::with_capacity(n_inliers + n_outliers);
    for _ in 0..n_inliers {
        let p = [rng.gen_range(30.0..600.0), rng.gen_range(20.0..450.0)];
        let noise = [rng.gen_range(-0.3..0.3), rng.gen_range(-0.3..0.3)];
        pairs.push((p, [p[0] + true_shift[0] + noise[0], p[1] + true_shift[1] + noise[1]]));
    }
    for _ in 0..n_outliers {
        let p1 = [rng.gen_range(0.0..640.0), rng.gen_range(0.0..480.0)];
        let p2 = [rng.gen_range(0.0..640.0), rng.gen_range(0.0..480.0)];
        pairs.push((p1, p2));
    }

    let data = Correspondences::from_pairs(&pairs, (width, height), (width, height), false)?;
    let estimator = Translation { data };
    let settings = RansacSettings::default()
        .with_precision(1.0)
        .with_verbose(true)
        .with_seed(7);

    println!("True shift: ({:.2}, {:.2})", true_shift[0], true_shift[1]);
    match estimate(&estimator, &settings) {
        Ok(result) => {
            println!(
                "Estimated shift: ({:.2}, {:.2})",
                result.model.x, result.model.y
            );
            println!(
                "  {} inliers out of {} matches after {} iterations",
                result.inliers.len(),
                pairs.len(),
                result.iterations
            );
            let recovered = result.inliers.iter().filter(|&&i| i < n_inliers).count();
            println!("  {recovered} of {n_inliers} true matches recovered");
        }
        Err(OrsaError::NoConsensus { iterations }) => {
            println!("No translation found after {iterations} iterations");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
