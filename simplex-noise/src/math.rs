//! Lattice helpers shared by the noise evaluators.

/// Floor `value` onto the integer lattice.
///
/// Returns the cell index used for hashing together with the floored value as
/// a float. Distances to the cell corners must be taken from the float, since
/// the integer saturates for huge inputs and `NaN` collapses to `0`.
#[inline]
#[must_use]
pub fn floor_cell(value: f64) -> (i64, f64) {
    let floored = value.floor();
    (floored as i64, floored)
}
