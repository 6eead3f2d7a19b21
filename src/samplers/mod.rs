//! Sampling strategies for minimal subsets.
//!
//! The RANSAC driver only relies on the [`Sampler`](crate::core::Sampler)
//! trait; the uniform sampler below is the default source.

pub mod uniform;

pub use uniform::UniformRandomSampler;
