//! Noise generation primitives.
//!
//! - [`SimplexNoise`] - 1D and 2D simplex noise over the fixed tables
//! - [`FractalNoise`] - octave-summed simplex noise driven by [`NoiseSettings`](crate::NoiseSettings)
//! - [`tables`] - the permutation table, the lattice hash and table verification

mod fractal;
mod simplex_noise;
pub mod tables;

pub use fractal::FractalNoise;
pub use simplex_noise::SimplexNoise;
pub use tables::TableError;

/// Gradient vectors at the edge midpoints of a cube.
///
/// 2D evaluation only reads the first two components of each entry.
pub const GRADIENT: [[i32; 3]; 12] = [
    [1, 1, 0],
    [-1, 1, 0],
    [1, -1, 0],
    [-1, -1, 0],
    [1, 0, 1],
    [-1, 0, 1],
    [1, 0, -1],
    [-1, 0, -1],
    [0, 1, 1],
    [0, -1, 1],
    [0, 1, -1],
    [0, -1, -1],
];

const SIMPLEX: SimplexNoise = SimplexNoise::new();

/// Sample 1D simplex noise. Shorthand for [`SimplexNoise::get_value_1d`].
#[inline]
#[must_use]
pub fn noise_1d(x: f64) -> f64 {
    SIMPLEX.get_value_1d(x)
}

/// Sample 2D simplex noise. Shorthand for [`SimplexNoise::get_value_2d`].
#[inline]
#[must_use]
pub fn noise_2d(x: f64, y: f64) -> f64 {
    SIMPLEX.get_value_2d(x, y)
}
