//! Direct solvers for linear systems
//!
//! This module provides direct (non-iterative) solvers:
//! - [`ludcmp`]: non-pivoting LU decomposition with combined L/U storage

mod ludcmp;

pub use ludcmp::{ludcmp, MAX_ORDER};
