//! Fixed lookup tables and their integrity checks.
//!
//! The permutation table is a hand-shuffled ordering of `0..=255`. It is never
//! regenerated: changing a single entry changes every noise value downstream.

use thiserror::Error;

use crate::noise::GRADIENT;

/// Number of entries in [`PERMUTATION`].
pub const PERMUTATION_SIZE: usize = 256;

/// Number of entries in [`GRADIENT`].
pub const GRADIENT_COUNT: usize = 12;

/// Lattice coordinates are reduced modulo 255, not 256, so the final entry of
/// [`PERMUTATION`] is never read.
const HASH_MODULUS: i64 = 255;

/// Permutation of `0..=255` used to hash lattice coordinates.
#[rustfmt::skip]
pub static PERMUTATION: [u8; PERMUTATION_SIZE] = [
    216, 117, 91, 54, 101, 12, 189, 9, 211, 14, 73, 94, 24, 89, 231, 63,
    58, 5, 41, 124, 68, 204, 82, 210, 195, 202, 142, 109, 72, 32, 165, 11,
    60, 214, 2, 74, 193, 118, 217, 213, 92, 105, 158, 227, 20, 138, 70, 113,
    241, 244, 86, 203, 76, 128, 154, 229, 110, 181, 21, 137, 35, 168, 174, 65,
    239, 31, 8, 160, 95, 120, 219, 156, 192, 220, 57, 207, 38, 75, 77, 39,
    159, 25, 246, 235, 240, 221, 133, 85, 3, 106, 43, 200, 17, 228, 232, 248,
    42, 163, 141, 50, 209, 27, 152, 34, 253, 230, 36, 126, 22, 186, 129, 116,
    13, 7, 236, 171, 224, 103, 67, 164, 18, 98, 100, 135, 108, 97, 81, 234,
    212, 222, 4, 150, 166, 84, 1, 251, 206, 201, 49, 61, 180, 96, 170, 6,
    226, 161, 173, 225, 140, 190, 208, 119, 198, 78, 245, 71, 199, 172, 250, 93,
    87, 153, 134, 10, 254, 162, 238, 188, 79, 15, 194, 196, 46, 62, 115, 182,
    184, 66, 52, 104, 37, 205, 45, 16, 218, 243, 197, 29, 23, 111, 144, 59,
    223, 176, 136, 185, 127, 132, 83, 255, 114, 88, 187, 191, 125, 122, 90, 107,
    139, 51, 47, 145, 143, 53, 99, 123, 28, 233, 215, 56, 130, 157, 131, 148,
    80, 64, 55, 249, 48, 177, 33, 252, 242, 179, 44, 237, 19, 112, 146, 102,
    149, 178, 26, 151, 30, 147, 167, 175, 121, 155, 69, 0, 183, 40, 169, 247,
];

/// Hash a lattice coordinate to a pseudo-random byte.
///
/// Uses Euclidean remainder, so negative coordinates land in the same
/// `0..255` index range as positive ones.
#[inline]
#[must_use]
pub fn hash(n: i64) -> u8 {
    PERMUTATION[n.rem_euclid(HASH_MODULUS) as usize]
}

/// A lookup table failed its integrity check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The permutation table has the wrong number of entries.
    #[error("Permutation table has {0} entries, expected 256")]
    PermutationLength(usize),
    /// A value appears twice in the permutation table.
    #[error("Permutation value {value} repeated at index {index}")]
    DuplicatePermutation {
        /// The repeated value.
        value: u8,
        /// Index of the second occurrence.
        index: usize,
    },
    /// The gradient table has the wrong number of entries.
    #[error("Gradient table has {0} entries, expected 12")]
    GradientLength(usize),
    /// A gradient component is outside `-1..=1`.
    #[error("Gradient {index} has a component outside -1..=1: {vector:?}")]
    GradientOutOfRange {
        /// Index of the offending gradient.
        index: usize,
        /// The offending gradient.
        vector: [i32; 3],
    },
    /// Two gradients are identical.
    #[error("Gradient {index} duplicates gradient {previous}")]
    DuplicateGradient {
        /// Index of the repeated gradient.
        index: usize,
        /// Index of its first occurrence.
        previous: usize,
    },
}

/// Check that `table` is a permutation of `0..=255`.
pub fn verify_permutation(table: &[u8]) -> Result<(), TableError> {
    if table.len() != PERMUTATION_SIZE {
        return Err(TableError::PermutationLength(table.len()));
    }

    let mut seen = [false; PERMUTATION_SIZE];
    for (index, &value) in table.iter().enumerate() {
        let slot = &mut seen[usize::from(value)];
        if *slot {
            return Err(TableError::DuplicatePermutation { value, index });
        }
        *slot = true;
    }
    Ok(())
}

/// Check that `table` holds 12 distinct gradients with components in `-1..=1`.
pub fn verify_gradients(table: &[[i32; 3]]) -> Result<(), TableError> {
    if table.len() != GRADIENT_COUNT {
        return Err(TableError::GradientLength(table.len()));
    }

    for (index, vector) in table.iter().enumerate() {
        if vector.iter().any(|c| !(-1..=1).contains(c)) {
            return Err(TableError::GradientOutOfRange {
                index,
                vector: *vector,
            });
        }
        if let Some(previous) = table[..index].iter().position(|other| other == vector) {
            return Err(TableError::DuplicateGradient { index, previous });
        }
    }
    Ok(())
}

/// Verify the compiled-in [`PERMUTATION`] and [`GRADIENT`] tables.
pub fn verify_tables() -> Result<(), TableError> {
    verify_permutation(&PERMUTATION)?;
    verify_gradients(&GRADIENT)?;
    log::debug!("Permutation and gradient tables verified");
    Ok(())
}
