//! Error analysis
//!
//! Quantifies how far a numerical trajectory is from the exact solution.
//!
//! - **`metrics`**: [`analyze_error`] and [`ErrorMetrics`], pure functions of
//!   two equal-length sequences
//! - **`report`**: [`ComparisonReport`], integration + exact values + metrics
//!   for one parameter set
//! - **`convergence`**: [`ConvergenceStudy`], reports at halved step sizes
//!
//! ```text
//! EquationParameters ──► EulerSolver ──► Trajectory ─┐
//!          │                                         ├──► analyze_error ──► ErrorMetrics
//!          └────────► ExactSolution ──► exact values ┘
//! ```

pub mod convergence;
pub mod metrics;
pub mod report;

pub use convergence::{ConvergenceLevel, ConvergenceStudy};
pub use metrics::{analyze_error, AnalysisError, ErrorMetrics};
pub use report::{ComparisonReport, ReportRow};
