//! Simplex noise over the fixed [`PERMUTATION`](super::tables::PERMUTATION) and
//! [`GRADIENT`] tables.
//!
//! 1D noise sums the falloff of the two bracketing lattice points. 2D noise skews
//! the plane onto a grid of triangles and sums the falloff of the three corners of
//! the triangle containing the point.

use crate::math::floor_cell;
use crate::noise::GRADIENT;
use crate::noise::tables::hash;

#[allow(clippy::unreadable_literal, reason = "sqrt(3) to full f64 precision")]
const SQRT_3: f64 = 1.7320508075688772;
/// Skewing factor for 2D simplex: `0.5 * (sqrt(3) - 1)`
const F2: f64 = 0.5 * (SQRT_3 - 1.0);
/// Unskewing factor for 2D simplex: `(3 - sqrt(3)) / 6`
const G2: f64 = (3.0 - SQRT_3) / 6.0;

/// Maps the 1D sum, whose peak magnitude is `2.53125`, into `[-1, 1]`.
const SCALE_1D: f64 = 0.395;
/// Maps the 2D sum into `[-1, 1]`.
const SCALE_2D: f64 = 70.0;
/// Squared radius of influence of a 2D corner.
const RADIUS_SQ_2D: f64 = 0.5;

/// Stateless simplex noise generator.
///
/// Holds no data of its own: the permutation and gradient tables are statics,
/// so every instance produces identical values and can be copied or shared
/// across threads freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimplexNoise;

impl SimplexNoise {
    /// Create a new simplex noise generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// 1D gradient for a hashed lattice point, multiplied by the distance to it.
    ///
    /// The low three bits pick a magnitude in `1..=8` and bit 3 flips the sign.
    #[inline]
    fn grad_1d(hash: u8, x: f64) -> f64 {
        let h = hash & 0x0F;
        let magnitude = f64::from(1 + (h & 7));
        if h & 8 == 0 {
            magnitude * x
        } else {
            -magnitude * x
        }
    }

    /// Dot product of a gradient's first two components with an offset vector.
    #[inline]
    fn dot_2d(g: &[i32; 3], x: f64, y: f64) -> f64 {
        f64::from(g[0]) * x + f64::from(g[1]) * y
    }

    /// Contribution of a 1D lattice point at signed distance `x`.
    ///
    /// `x` is always within `[-1, 1]`, so the falloff never goes negative.
    #[inline]
    fn corner_noise_1d(hash: u8, x: f64) -> f64 {
        let t = 1.0 - x * x;
        let t = t * t;
        t * t * Self::grad_1d(hash, x)
    }

    /// Contribution of a 2D simplex corner at offset `(x, y)`.
    #[inline]
    fn corner_noise_2d(index: usize, x: f64, y: f64) -> f64 {
        let t = RADIUS_SQ_2D - x * x - y * y;
        if t < 0.0 {
            0.0
        } else {
            let t = t * t;
            t * t * Self::dot_2d(&GRADIENT[index], x, y)
        }
    }

    /// Sample 1D simplex noise at `x`.
    ///
    /// Returns a value in `[-1, 1]` for every finite `x`. `NaN` and infinite
    /// inputs yield `NaN`.
    #[must_use]
    pub fn get_value_1d(&self, x: f64) -> f64 {
        let (c0, corner) = floor_cell(x);
        let c1 = c0.wrapping_add(1);
        let x0 = x - corner;
        let x1 = x0 - 1.0;

        let n0 = Self::corner_noise_1d(hash(c0), x0);
        let n1 = Self::corner_noise_1d(hash(c1), x1);

        SCALE_1D * (n0 + n1)
    }

    /// Sample 1D simplex noise at `x`.
    ///
    /// Kept for callers of the older, suffix-less API.
    #[deprecated(note = "use `get_value_1d`")]
    #[must_use]
    pub fn get_value(&self, x: f64) -> f64 {
        self.get_value_1d(x)
    }

    /// Sample 2D simplex noise at the given coordinates.
    ///
    /// Returns a value typically in the range `[-1, 1]` (scaled by 70).
    ///
    /// The middle corner is offset by `i1` on both axes. Every published value
    /// depends on this, so it stays, but it has visible effects: the output
    /// steps across triangle and cell edges, lattice points do not sample to
    /// zero, and some points overshoot the range slightly (`(1.3, 5.3)` gives
    /// about `1.006`).
    #[must_use]
    pub fn get_value_2d(&self, x: f64, y: f64) -> f64 {
        let s = (x + y) * F2;
        let (i, cell_x) = floor_cell(x + s);
        let (j, cell_y) = floor_cell(y + s);
        let t = (cell_x + cell_y) * G2;
        let x0 = x - (cell_x - t);
        let y0 = y - (cell_y - t);

        // Determine which simplex triangle we're in
        let (i1, j1): (u8, u8) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - f64::from(i1) + G2;
        let y1 = y0 - f64::from(i1) + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = i & 0xFF;
        let jj = j & 0xFF;
        let gi0 = usize::from(hash(ii + i64::from(hash(jj))) % 12);
        let gi1 =
            usize::from(hash(ii + i64::from(i1) + i64::from(hash(jj + i64::from(j1)))) % 12);
        let gi2 = usize::from(hash(ii + 1 + i64::from(hash(jj + 1))) % 12);

        let n0 = Self::corner_noise_2d(gi0, x0, y0);
        let n1 = Self::corner_noise_2d(gi1, x1, y1);
        let n2 = Self::corner_noise_2d(gi2, x2, y2);

        SCALE_2D * (n0 + n1 + n2)
    }
}
