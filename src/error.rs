//! Error types for the LU decomposition solver.
//!
//! The solver's external contract is a bare integer status code (0 on
//! success, 1 for a singular pivot, 999 for invalid parameters). These
//! variants carry the failing values as well; [`LudcmpError::status_code`]
//! recovers the integer form for callers that speak the status contract.

use thiserror::Error;

/// Errors that can occur while solving a dense system by LU decomposition.
#[derive(Debug, Error)]
pub enum LudcmpError {
    /// The requested order exceeds the supported maximum (98).
    #[error("order ({order}) exceeds the maximum supported order (98)")]
    OrderTooLarge {
        /// The rejected order
        order: usize,
    },

    /// The pivot tolerance is not strictly positive.
    #[error("tolerance ({eps}) must be strictly positive")]
    InvalidTolerance {
        /// The rejected tolerance
        eps: f64,
    },

    /// Matrix or right-hand side storage is too small for the given order.
    #[error("storage too small for order: need {expected} rows/entries, got {got}")]
    DimensionMismatch {
        /// Minimum rows (matrix) or entries (rhs) required
        expected: usize,
        /// Rows or entries actually supplied
        got: usize,
    },

    /// A diagonal pivot's magnitude did not exceed the tolerance.
    #[error("pivot at row {row} is within tolerance of zero; matrix is singular or nearly singular")]
    SingularPivot {
        /// Row index of the failing pivot
        row: usize,
    },
}

/// A specialized `Result` type for solver operations.
pub type Result<T> = std::result::Result<T, LudcmpError>;

impl LudcmpError {
    /// The integer status code of the external contract.
    ///
    /// `SingularPivot` maps to 1; every parameter rejection maps to 999.
    /// Success has no error value and is status 0 by convention.
    pub fn status_code(&self) -> i32 {
        match self {
            LudcmpError::SingularPivot { .. } => 1,
            _ => 999,
        }
    }

    /// Returns `true` if this is a parameter-validation error.
    ///
    /// This includes `OrderTooLarge`, `InvalidTolerance`, and
    /// `DimensionMismatch`; no arithmetic was attempted in these cases.
    pub fn is_parameter_error(&self) -> bool {
        !matches!(self, LudcmpError::SingularPivot { .. })
    }
}
