//! euler-rs: Forward Euler against a closed-form solution
//!
//! Integrates the linear decay equation `dy/dt = -k·y` with the explicit Euler
//! method, evaluates the exact solution `y(t) = y0·e^(-k(t - t0))` on the same
//! grid, and measures how far apart they are.
//!
//! # Architecture
//!
//! The crate keeps the equation, the method and the presentation apart:
//!
//! 1. **Equation** ([`equation`]): right-hand side, parameters, exact solution
//! 2. **Numerics** ([`solver`]): the Euler integrator and its trajectory
//! 3. **Analysis** ([`analysis`]): error metrics, reports, convergence studies
//! 4. **Output** ([`output`]): console tables, plots and CSV export
//!
//! # Quick Start
//!
//! ```rust
//! use euler_rs::prelude::*;
//!
//! # fn main() -> euler_rs::Result<()> {
//! // k = 0.5, y(0) = 2, t ∈ [0, 1], h = 0.2
//! let parameters = EquationParameters::default();
//!
//! let report = ComparisonReport::run(&parameters)?;
//!
//! assert_eq!(report.len(), 6);
//! assert!((report.metrics.max_absolute() - 0.032081).abs() < 1e-6);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`equation`]: Problem definition
//! - [`solver`]: Numerical integration
//! - [`analysis`]: Error analysis
//! - [`output`]: Tables, plots and CSV

// Core modules
pub mod equation;
pub mod solver;
pub mod analysis;
pub mod output;

mod error;

pub use error::{Error, Result};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use euler_rs::prelude::*;
    //! ```
    pub use crate::equation::{DerivativeFunction,
                              EquationParameters,
                              ExactSolution,
                              LinearDecay};
    pub use crate::solver::{integrate,
                            EulerSolver,
                            SolverError,
                            Trajectory};
    pub use crate::analysis::{analyze_error,
                              ComparisonReport,
                              ConvergenceStudy,
                              ErrorMetrics};
}
