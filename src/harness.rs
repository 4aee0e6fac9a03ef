//! System assembly from flat integer input.
//!
//! The CLI drives the solver with a flat, row-major list of integer
//! coefficients. Assembly scales each diagonal entry by a constant factor
//! (making the matrix comfortably diagonally dominant for well-behaved
//! input) and sums each row into the right-hand side, so the assembled
//! system is solved exactly by the all-ones vector.

use crate::error::{LudcmpError, Result};
use ndarray::{Array1, Array2};

/// Factor applied to diagonal entries during assembly.
pub const DIAGONAL_SCALE: f64 = 10.0;

/// Build a dense `dim` x `dim` system from row-major integer coefficients.
///
/// Diagonal entries are scaled by [`DIAGONAL_SCALE`]; `b[i]` is the sum of
/// row i after scaling.
///
/// # Errors
///
/// [`LudcmpError::DimensionMismatch`] if `entries` does not hold exactly
/// `dim * dim` coefficients.
pub fn assemble_system(entries: &[i64], dim: usize) -> Result<(Array2<f64>, Array1<f64>)> {
    if entries.len() != dim * dim {
        return Err(LudcmpError::DimensionMismatch {
            expected: dim * dim,
            got: entries.len(),
        });
    }

    let mut a = Array2::zeros((dim, dim));
    let mut b = Array1::zeros(dim);
    for i in 0..dim {
        let mut row_sum = 0.0;
        for j in 0..dim {
            let mut v = entries[i * dim + j] as f64;
            if i == j {
                v *= DIAGONAL_SCALE;
            }
            a[[i, j]] = v;
            row_sum += v;
        }
        b[i] = row_sum;
    }

    Ok((a, b))
}
