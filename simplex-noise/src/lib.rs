//! Deterministic 1D and 2D simplex noise.
//!
//! Every value is a pure function of the input coordinates and two compiled-in
//! tables (a 256-entry permutation and 12 cube-edge gradients), so the same
//! coordinate always yields the same bits on every thread and every run.
//!
//! - [`noise`] - the evaluators, the fixed tables and the fractal sampler
//! - [`config`] - serde-backed settings for [`noise::FractalNoise`]
//! - [`math`] - lattice helpers shared by the evaluators

pub mod config;
pub mod math;
pub mod noise;

pub use config::{ConfigError, NoiseSettings};
pub use noise::{FractalNoise, SimplexNoise, TableError, noise_1d, noise_2d};
