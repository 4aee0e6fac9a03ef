//! Dense linear system solver via non-pivoting LU decomposition
//!
//! This crate solves small dense systems A·x = b with a direct LU
//! factorization (no pivoting), followed by forward and backward
//! substitution. The factorization is performed in place with combined
//! L/U storage, and a pivot whose magnitude does not exceed the supplied
//! tolerance aborts the solve as numerically singular.
//!
//! # Features
//!
//! - **Direct Solver**: in-place non-pivoting LU with combined storage
//! - **Singularity Detection**: per-pivot magnitude test against a tolerance
//! - **System Assembly**: helper to build a system from flat integer input
//!
//! # Example
//!
//! ```
//! use ludcmp::ludcmp;
//! use ndarray::array;
//!
//! let mut a = array![[2.0, 0.0], [0.0, 3.0]];
//! let b = array![2.0, 3.0];
//!
//! // order 1 means two equations (highest valid index is 1)
//! let x = ludcmp(&mut a, b.view(), 1, 1e-6).unwrap();
//! assert!((x[0] - 1.0).abs() < 1e-12);
//! assert!((x[1] - 1.0).abs() < 1e-12);
//! ```

pub mod direct;
pub mod error;
pub mod harness;

// Re-export main types
pub use direct::{ludcmp, MAX_ORDER};
pub use error::{LudcmpError, Result};
pub use harness::assemble_system;
