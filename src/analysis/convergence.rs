//! Step-halving convergence study
//!
//! Forward Euler is first order: halving `h` should halve the global error.
//! The study reruns the comparison at `h, h/2, ..., h/2^m` and records the
//! ratio between consecutive maximum absolute errors. The observed order is
//! `log2(ratio)`, close to 1 for Euler.

use log::debug;

use crate::analysis::ComparisonReport;
use crate::equation::EquationParameters;
use crate::error::Result;

/// One refinement level of a [`ConvergenceStudy`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceLevel {
    pub step: f64,
    pub step_count: usize,
    pub max_absolute_error: f64,

    /// `error(previous level) / error(this level)`, `None` on the first level
    pub ratio: Option<f64>,
}

impl ConvergenceLevel {
    /// `log2(ratio)`
    pub fn observed_order(&self) -> Option<f64> {
        self.ratio.map(f64::log2)
    }
}

/// Errors at successively halved step sizes
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceStudy {
    pub levels: Vec<ConvergenceLevel>,
}

impl ConvergenceStudy {
    /// Run the base step plus `halvings` refined steps
    ///
    /// # Example
    ///
    /// ```rust
    /// use euler_rs::analysis::ConvergenceStudy;
    /// use euler_rs::equation::EquationParameters;
    ///
    /// let study = ConvergenceStudy::run(&EquationParameters::default(), 2)?;
    ///
    /// assert_eq!(study.levels.len(), 3);
    /// let ratio = study.levels[1].ratio.unwrap();
    /// assert!(ratio > 1.5 && ratio < 2.5);
    /// # Ok::<(), euler_rs::Error>(())
    /// ```
    pub fn run(parameters: &EquationParameters, halvings: usize) -> Result<Self> {
        let mut levels: Vec<ConvergenceLevel> = Vec::with_capacity(halvings + 1);
        let mut step = parameters.step();

        for _ in 0..=halvings {
            let refined = parameters.with_step(step)?;
            let report = ComparisonReport::run(&refined)?;
            let max_absolute_error = report.metrics.max_absolute();

            let ratio = levels.last().map(|previous| previous.max_absolute_error / max_absolute_error);

            debug!("convergence level h={}: max error {:e}, ratio {:?}", step, max_absolute_error, ratio);

            levels.push(ConvergenceLevel {
                step,
                step_count: refined.step_count(),
                max_absolute_error,
                ratio,
            });

            step /= 2.0;
        }

        Ok(Self { levels })
    }

    /// Mean observed order over all refined levels
    pub fn mean_order(&self) -> Option<f64> {
        let orders: Vec<f64> = self.levels.iter().filter_map(ConvergenceLevel::observed_order).collect();

        if orders.is_empty() {
            None
        } else {
            Some(orders.iter().sum::<f64>() / orders.len() as f64)
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
