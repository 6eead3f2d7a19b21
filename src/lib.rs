//! # orsa - robust two-view model estimation
//!
//! A generic RANSAC engine for geometric models estimated from point
//! correspondences between two images, such as fundamental matrices or
//! homographies.
//!
//! The crate is split in two parts:
//!
//! - **[`ModelEstimator`]**: the contract a model family implements (minimal
//!   fitting, residuals, unnormalization). Families own a [`Correspondences`]
//!   which preconditions both point sets from the image dimensions, so a
//!   single threshold is valid in both images.
//! - **[`Ransac`]**: the sample → fit → score → adapt loop, with the adaptive
//!   stopping rule `ceil(log(1 - β) / log(1 - r^k))`.
//!
//! ## Implementing a model family
//!
//! ```rust
//! use nalgebra::Vector2;
//! use orsa::{Correspondences, ImageSide, ModelEstimator};
//!
//! /// Pure translation `x2 = x1 + t`.
//! struct Translation {
//!     data: Correspondences,
//! }
//!
//! impl ModelEstimator for Translation {
//!     type Model = Vector2<f64>;
//!
//!     fn correspondences(&self) -> &Correspondences {
//!         &self.data
//!     }
//!
//!     fn sample_size(&self) -> usize {
//!         1
//!     }
//!
//!     fn fit(&self, sample: &[usize]) -> Vec<Self::Model> {
//!         let i = sample[0];
//!         vec![self.data.normalized_point(ImageSide::Right, i)
//!             - self.data.normalized_point(ImageSide::Left, i)]
//!     }
//!
//!     fn error(&self, t: &Self::Model, index: usize) -> f64 {
//!         let p = self.data.normalized_point(ImageSide::Left, index) + t;
//!         (self.data.normalized_point(ImageSide::Right, index) - p).norm_squared()
//!     }
//!
//!     fn unnormalize(&self, t: &mut Self::Model) {
//!         *t /= self.normalization_factor(ImageSide::Right);
//!     }
//! }
//!
//! let pairs: Vec<([f64; 2], [f64; 2])> = (0..10)
//!     .map(|i| {
//!         let p = [10.0 * i as f64, 5.0 * i as f64];
//!         (p, [p[0] + 3.0, p[1] - 2.0])
//!     })
//!     .collect();
//! let data = Correspondences::from_pairs(&pairs, (640, 480), (640, 480), false).unwrap();
//! let estimator = Translation { data };
//!
//! let settings = orsa::RansacSettings::default().with_seed(42);
//! let result = orsa::estimate(&estimator, &settings).unwrap();
//! assert_eq!(result.inliers.len(), 10);
//! assert!((result.model - Vector2::new(3.0, -2.0)).norm() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - **[`api`]**: [`estimate`], the one-call entry point
//! - **[`core`](crate::core)**: the [`ModelEstimator`] and [`Sampler`] traits
//! - **[`normalization`]**: image-size preconditioning and [`Correspondences`]
//! - **[`ransac`]**: the [`Ransac`] driver and its [`IterationCap`]
//! - **[`samplers`]**: uniform sampling without replacement
//! - **[`scoring`]**: inlier counting
//! - **[`settings`]**: serializable [`RansacSettings`]

pub mod api;
pub mod core;
pub mod error;
pub mod normalization;
pub mod ransac;
pub mod samplers;
pub mod scoring;
pub mod settings;
pub mod types;
pub mod utils;

pub use api::{estimate, EstimationResult};
pub use crate::core::{ModelEstimator, Sampler};
pub use error::{OrsaError, Result};
pub use normalization::{Correspondences, Normalization};
pub use ransac::{IterationCap, Ransac, RansacOutput};
pub use samplers::UniformRandomSampler;
pub use scoring::{count_inliers, Score};
pub use settings::RansacSettings;
pub use types::{DataMatrix, ImageSide, ImageSize};
