//! Non-pivoting LU decomposition solver
//!
//! Factors a dense square matrix in place (combined L/U storage, no
//! pivoting) and recovers the solution of A·x = b by forward and backward
//! substitution. A pivot whose magnitude does not exceed the tolerance
//! aborts the solve; no row exchange is attempted, so systems that would
//! be rescued by partial pivoting are reported as singular.

use crate::error::{LudcmpError, Result};
use ndarray::{Array1, Array2, ArrayView1};

/// Maximum supported order (highest valid index; order + 1 equations).
pub const MAX_ORDER: usize = 98;

/// Solve A·x = b by non-pivoting LU decomposition.
///
/// `n` is the *order*: the highest valid index, so the system has n + 1
/// equations. `a` must be addressable for indices 0..=n in both dimensions
/// and `b` must have at least n + 1 entries; larger storage is accepted and
/// the excess is ignored.
///
/// On success, `a` holds the combined factorization: entry (i, j) with
/// i > j is the multiplier L[i][j], entry (i, j) with i <= j is U[i][j],
/// and the unit diagonal of L is implicit. The returned vector has n + 1
/// entries. On any error, `a` may be partially overwritten and must not be
/// consumed.
///
/// # Errors
///
/// - [`LudcmpError::OrderTooLarge`] if `n` exceeds [`MAX_ORDER`]
/// - [`LudcmpError::InvalidTolerance`] if `eps` is not strictly positive
/// - [`LudcmpError::DimensionMismatch`] if `a` or `b` is too small for `n`
/// - [`LudcmpError::SingularPivot`] if a pivot's magnitude is <= `eps`
pub fn ludcmp(a: &mut Array2<f64>, b: ArrayView1<f64>, n: usize, eps: f64) -> Result<Array1<f64>> {
    if n > MAX_ORDER {
        log::debug!("rejecting solve: order {n} exceeds maximum {MAX_ORDER}");
        return Err(LudcmpError::OrderTooLarge { order: n });
    }
    if eps <= 0.0 {
        log::debug!("rejecting solve: tolerance {eps} is not strictly positive");
        return Err(LudcmpError::InvalidTolerance { eps });
    }
    let need = n + 1;
    if a.nrows() < need || a.ncols() < need {
        return Err(LudcmpError::DimensionMismatch {
            expected: need,
            got: a.nrows().min(a.ncols()),
        });
    }
    if b.len() < need {
        return Err(LudcmpError::DimensionMismatch {
            expected: need,
            got: b.len(),
        });
    }

    factorize_in_place(a, n, eps)?;
    let y = forward_substitute(a, b, n);
    Ok(backward_substitute(a, &y, n))
}

/// Factor `a` in place without pivoting.
fn factorize_in_place(a: &mut Array2<f64>, n: usize, eps: f64) -> Result<()> {
    for i in 0..n {
        if a[[i, i]].abs() <= eps {
            log::debug!("factorization aborted: pivot at row {i} within {eps} of zero");
            return Err(LudcmpError::SingularPivot { row: i });
        }

        // Multipliers for the rows below pivot i, stored in the L part
        for j in (i + 1)..=n {
            let mut w = a[[j, i]];
            for k in 0..i {
                w -= a[[j, k]] * a[[k, i]];
            }
            a[[j, i]] = w / a[[i, i]];
        }

        // Trailing update touches only row i + 1; each row is finalized
        // exactly when the next outer iteration needs it.
        for j in (i + 1)..=n {
            let mut w = a[[i + 1, j]];
            for k in 0..=i {
                w -= a[[i + 1, k]] * a[[k, j]];
            }
            a[[i + 1, j]] = w;
        }
    }

    // The elimination loop tests rows 0..n only; backward substitution
    // divides by the last diagonal entry, so it gets the same test here.
    if a[[n, n]].abs() <= eps {
        log::debug!("factorization aborted: pivot at row {n} within {eps} of zero");
        return Err(LudcmpError::SingularPivot { row: n });
    }

    Ok(())
}

/// Forward substitution: solve L·y = b from the combined storage.
fn forward_substitute(a: &Array2<f64>, b: ArrayView1<f64>, n: usize) -> Array1<f64> {
    let mut y = Array1::zeros(n + 1);
    y[0] = b[0];
    for i in 1..=n {
        let mut w = b[i];
        for j in 0..i {
            w -= a[[i, j]] * y[j];
        }
        y[i] = w;
    }
    y
}

/// Backward substitution: solve U·x = y from the combined storage.
fn backward_substitute(a: &Array2<f64>, y: &Array1<f64>, n: usize) -> Array1<f64> {
    let mut x = Array1::zeros(n + 1);
    x[n] = y[n] / a[[n, n]];
    for i in (0..n).rev() {
        let mut w = y[i];
        for j in (i + 1)..=n {
            w -= a[[i, j]] * x[j];
        }
        x[i] = w / a[[i, i]];
    }
    x
}
