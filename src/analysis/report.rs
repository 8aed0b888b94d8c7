//! Comparison report
//!
//! Runs the whole pipeline for one [`EquationParameters`]: integrate with
//! Forward Euler, evaluate the exact solution on the same grid, and compare.

use log::debug;

use crate::analysis::{analyze_error, ErrorMetrics};
use crate::equation::EquationParameters;
use crate::error::Result;
use crate::solver::{EulerSolver, Trajectory};

/// Euler trajectory, exact values on the same grid, and their error metrics
///
/// # Example
///
/// ```rust
/// use euler_rs::analysis::ComparisonReport;
/// use euler_rs::equation::EquationParameters;
///
/// let report = ComparisonReport::run(&EquationParameters::default())?;
///
/// assert_eq!(report.len(), 6);
/// assert!((report.metrics.max_absolute() - 0.0321).abs() < 1e-4);
/// # Ok::<(), euler_rs::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    pub parameters: EquationParameters,
    pub trajectory: Trajectory,

    /// Exact solution at `trajectory.times()`
    pub exact_values: Vec<f64>,

    pub metrics: ErrorMetrics,
}

/// One row of a report: `(t, y_euler, y_exact, absolute, relative)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportRow {
    pub time: f64,
    pub euler: f64,
    pub exact: f64,
    pub absolute_error: f64,

    /// Fraction, not percent
    pub relative_error: f64,
}

impl ComparisonReport {
    /// Integrate, evaluate the exact solution and compare
    pub fn run(parameters: &EquationParameters) -> Result<Self> {
        let trajectory = EulerSolver::new().integrate(
            &parameters.derivative(),
            parameters.t0(),
            parameters.y0(),
            parameters.t_final(),
            parameters.step(),
        )?;

        let exact_values = parameters.exact_solution().evaluate_all(trajectory.times());
        let metrics = analyze_error(&exact_values, trajectory.values())?;

        debug!(
            "h={}: max absolute error {:.6}, max relative error {:.4}%",
            parameters.step(),
            metrics.max_absolute(),
            metrics.max_relative_percent()
        );

        Ok(Self {
            parameters: *parameters,
            trajectory,
            exact_values,
            metrics,
        })
    }

    /// Number of grid points
    pub fn len(&self) -> usize {
        self.trajectory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trajectory.is_empty()
    }

    /// Row-wise view, in time order
    pub fn rows(&self) -> impl Iterator<Item = ReportRow> + '_ {
        self.trajectory
            .points()
            .zip(&self.exact_values)
            .zip(self.metrics.absolute_error().iter().zip(self.metrics.relative_error()))
            .map(|(((time, euler), &exact), (&absolute_error, &relative_error))| ReportRow {
                time,
                euler,
                exact,
                absolute_error,
                relative_error,
            })
    }
}

// =================================================================================================
// Tests
// =================================================================================================
