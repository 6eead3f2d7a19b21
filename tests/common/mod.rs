//! Model families and synthetic scenes shared by the integration tests.

#![allow(dead_code)]

use nalgebra::{Matrix3, Vector2, Vector3};
use orsa::{Correspondences, ImageSide, ModelEstimator};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;

pub type Pairs = Vec<([f64; 2], [f64; 2])>;

fn transfer(m: &Matrix3<f64>, p: &Vector2<f64>) -> Option<Vector2<f64>> {
    let q = m * Vector3::new(p.x, p.y, 1.0);
    if q.z.abs() < f64::EPSILON {
        return None;
    }
    Some(Vector2::new(q.x / q.z, q.y / q.z))
}

/// Squared transfer error of a 3x3 point mapping, one-sided (second image)
/// or the worst of both directions.
fn transfer_error(data: &Correspondences, m: &Matrix3<f64>, index: usize) -> f64 {
    let p1 = data.normalized_point(ImageSide::Left, index);
    let p2 = data.normalized_point(ImageSide::Right, index);
    let forward = match transfer(m, &p1) {
        Some(q) => (q - p2).norm_squared(),
        None => return f64::INFINITY,
    };
    if !data.symmetric_error() {
        return forward;
    }
    let backward = match m.try_inverse().and_then(|inv| transfer(&inv, &p2)) {
        Some(q) => (q - p1).norm_squared(),
        None => return f64::INFINITY,
    };
    forward.max(backward)
}

/// Translation `x2 = x1 + t` stored as a 3x3 transfer matrix.
pub struct TranslationEstimator {
    data: Correspondences,
}

impl TranslationEstimator {
    pub fn new(data: Correspondences) -> Self {
        Self { data }
    }
}

impl ModelEstimator for TranslationEstimator {
    type Model = Matrix3<f64>;

    fn correspondences(&self) -> &Correspondences {
        &self.data
    }

    fn sample_size(&self) -> usize {
        1
    }

    fn fit(&self, sample: &[usize]) -> Vec<Matrix3<f64>> {
        let Some(&i) = sample.first() else {
            return Vec::new();
        };
        let t = self.data.normalized_point(ImageSide::Right, i)
            - self.data.normalized_point(ImageSide::Left, i);
        vec![Matrix3::new(1.0, 0.0, t.x, 0.0, 1.0, t.y, 0.0, 0.0, 1.0)]
    }

    fn error(&self, model: &Matrix3<f64>, index: usize) -> f64 {
        transfer_error(&self.data, model, index)
    }

    fn unnormalize(&self, model: &mut Matrix3<f64>) {
        self.data.normalization().unnormalize_transfer(model);
    }
}

/// Affine map fitted by least squares on three or more correspondences.
pub struct AffineEstimator {
    data: Correspondences,
}

impl AffineEstimator {
    pub fn new(data: Correspondences) -> Self {
        Self { data }
    }
}

impl ModelEstimator for AffineEstimator {
    type Model = Matrix3<f64>;

    fn correspondences(&self) -> &Correspondences {
        &self.data
    }

    fn sample_size(&self) -> usize {
        3
    }

    fn fit(&self, sample: &[usize]) -> Vec<Matrix3<f64>> {
        if sample.len() < self.sample_size() {
            return Vec::new();
        }
        let mut dtd = Matrix3::<f64>::zeros();
        let mut dtx = Vector3::<f64>::zeros();
        let mut dty = Vector3::<f64>::zeros();
        for &i in sample {
            let p1 = self.data.normalized_point(ImageSide::Left, i);
            let p2 = self.data.normalized_point(ImageSide::Right, i);
            let row = Vector3::new(p1.x, p1.y, 1.0);
            dtd += row * row.transpose();
            dtx += row * p2.x;
            dty += row * p2.y;
        }
        // Collinear or repeated points leave the system rank deficient.
        if dtd.determinant().abs() < 1e-12 {
            return Vec::new();
        }
        let Some(inv) = dtd.try_inverse() else {
            return Vec::new();
        };
        let a = inv * dtx;
        let b = inv * dty;
        vec![Matrix3::new(a.x, a.y, a.z, b.x, b.y, b.z, 0.0, 0.0, 1.0)]
    }

    fn error(&self, model: &Matrix3<f64>, index: usize) -> f64 {
        transfer_error(&self.data, model, index)
    }

    fn unnormalize(&self, model: &mut Matrix3<f64>) {
        self.data.normalization().unnormalize_transfer(model);
    }
}

/// Wrapper remembering every candidate produced by the inner family.
pub struct RecordingEstimator<E: ModelEstimator> {
    pub inner: E,
    pub candidates: RefCell<Vec<E::Model>>,
}

impl<E: ModelEstimator> RecordingEstimator<E> {
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            candidates: RefCell::new(Vec::new()),
        }
    }
}

impl<E: ModelEstimator> ModelEstimator for RecordingEstimator<E> {
    type Model = E::Model;

    fn correspondences(&self) -> &Correspondences {
        self.inner.correspondences()
    }

    fn sample_size(&self) -> usize {
        self.inner.sample_size()
    }

    fn fit(&self, sample: &[usize]) -> Vec<E::Model> {
        let models = self.inner.fit(sample);
        self.candidates.borrow_mut().extend(models.iter().cloned());
        models
    }

    fn error(&self, model: &E::Model, index: usize) -> f64 {
        self.inner.error(model, index)
    }

    fn unnormalize(&self, model: &mut E::Model) {
        self.inner.unnormalize(model)
    }
}

/// Ground-truth affine map used by the synthetic scenes, in pixels.
pub fn ground_truth_affine() -> Matrix3<f64> {
    Matrix3::new(0.9, -0.2, 140.0, 0.15, 1.05, -25.0, 0.0, 0.0, 1.0)
}

pub fn apply(m: &Matrix3<f64>, p: [f64; 2]) -> [f64; 2] {
    let q = m * Vector3::new(p[0], p[1], 1.0);
    [q.x / q.z, q.y / q.z]
}

/// `n_inliers` exact correspondences of `model` followed by `n_outliers`
/// uniformly random ones, inside a `width x height` image.
pub fn scene(
    model: &Matrix3<f64>,
    n_inliers: usize,
    n_outliers: usize,
    width: f64,
    height: f64,
    seed: u64,
) -> Pairs {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pairs = Vec::with_capacity(n_inliers + n_outliers);
    for _ in 0..n_inliers {
        let p = [
            rng.gen_range(0.1 * width..0.6 * width),
            rng.gen_range(0.1 * height..0.7 * height),
        ];
        pairs.push((p, apply(model, p)));
    }
    for _ in 0..n_outliers {
        let p1 = [rng.gen_range(0.0..width), rng.gen_range(0.0..height)];
        let p2 = [rng.gen_range(0.0..width), rng.gen_range(0.0..height)];
        pairs.push((p1, p2));
    }
    pairs
}

pub fn correspondences(pairs: &[([f64; 2], [f64; 2])], width: u32, height: u32) -> Correspondences {
    Correspondences::from_pairs(pairs, (width, height), (width, height), false)
        .expect("valid correspondences")
}
