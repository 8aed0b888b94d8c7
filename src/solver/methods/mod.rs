//! Numerical methods for solving differential equations
//!
//! # Available Methods
//!
//! - **[`EulerSolver`]**: Forward Euler method
//!   - Order: First-order O(h)
//!   - Cost: 1 function evaluation per step
//!   - Use: educational comparisons against closed-form solutions
//!
//! Each solver is stateless and can be reused for any number of runs.

pub mod euler;

pub use euler::{integrate, EulerSolver};
