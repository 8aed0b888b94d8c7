//! Equations (WHAT to solve)
//!
//! This module holds everything that describes the problem, independently of
//! the numerical method used to solve it:
//!
//! - **`traits`**: [`DerivativeFunction`], the right-hand side `g(t, y)`
//! - **`decay`**: the linear decay equation, its exact solution and a dense
//!   evaluation grid
//! - **`parameters`**: validated [`EquationParameters`]
//!
//! # Example
//!
//! ```rust
//! use euler_rs::equation::{DerivativeFunction, EquationParameters};
//!
//! let parameters = EquationParameters::default();
//! let derivative = parameters.derivative();
//! let exact = parameters.exact_solution();
//!
//! assert_eq!(derivative.evaluate(0.0, 2.0), -1.0);
//! assert_eq!(exact.evaluate(0.0), 2.0);
//! ```

pub mod decay;
pub mod parameters;
pub mod traits;

pub use decay::{dense_grid, ExactSolution, LinearDecay};
pub use parameters::EquationParameters;
pub use traits::DerivativeFunction;
