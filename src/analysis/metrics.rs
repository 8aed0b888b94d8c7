//! Error metrics between exact and approximate solutions
//!
//! # Definitions
//!
//! For exact values `e_i` and approximations `a_i` at the same time points:
//!
//! ```text
//! absolute_i = |e_i - a_i|
//! relative_i = absolute_i / |e_i|
//! ```
//!
//! The summaries are the max and mean of each series. Relative summaries are
//! reported in percent, the per-point relative series stays a fraction.
//!
//! # Zero exact values
//!
//! The relative error is undefined where `e_i == 0`. Instead of letting an
//! infinity or NaN leak into the summaries, [`analyze_error`] fails with
//! [`AnalysisError::DivisionByZero`] naming the offending index.

use nalgebra::DVector;
use thiserror::Error;

// =================================================================================================
// Errors
// =================================================================================================

/// Errors raised by [`analyze_error`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Empty data: exact and approximate series must not be empty")]
    Empty,

    #[error("Data length mismatch: {exact} exact values versus {approx} approximations")]
    LengthMismatch { exact: usize, approx: usize },

    #[error("Relative error undefined: exact value is zero at index {index}")]
    DivisionByZero { index: usize },

    #[error("Invalid data: NaN or Inf detected at index {index}")]
    NonFinite { index: usize },
}

// =================================================================================================
// Error Metrics
// =================================================================================================

/// Per-point errors and their summaries
///
/// Read-only once computed; recompute with [`analyze_error`] when the inputs
/// change.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorMetrics {
    absolute_error: DVector<f64>,
    relative_error: DVector<f64>,
    max_absolute: f64,
    mean_absolute: f64,
    max_relative_percent: f64,
    mean_relative_percent: f64,
}

impl ErrorMetrics {
    /// |exact_i - approx_i|
    pub fn absolute_error(&self) -> &[f64] {
        self.absolute_error.as_slice()
    }

    /// |exact_i - approx_i| / |exact_i| (fraction, not percent)
    pub fn relative_error(&self) -> &[f64] {
        self.relative_error.as_slice()
    }

    pub fn max_absolute(&self) -> f64 {
        self.max_absolute
    }

    pub fn mean_absolute(&self) -> f64 {
        self.mean_absolute
    }

    /// Largest relative error, in percent
    pub fn max_relative_percent(&self) -> f64 {
        self.max_relative_percent
    }

    /// Mean relative error, in percent
    pub fn mean_relative_percent(&self) -> f64 {
        self.mean_relative_percent
    }

    /// Index of the largest absolute error (first one on ties)
    pub fn max_absolute_index(&self) -> usize {
        let mut best = 0;

        for (i, &value) in self.absolute_error.iter().enumerate() {
            if value > self.absolute_error[best] {
                best = i;
            }
        }

        best
    }

    /// Number of compared points
    pub fn len(&self) -> usize {
        self.absolute_error.len()
    }

    pub fn is_empty(&self) -> bool {
        self.absolute_error.is_empty()
    }
}

// =================================================================================================
// Analysis
// =================================================================================================

/// Compare exact values with their approximations
///
/// Both slices must be indexed by the same time points.
///
/// # Errors
///
/// - [`AnalysisError::Empty`] if either slice is empty
/// - [`AnalysisError::LengthMismatch`] if the lengths differ
/// - [`AnalysisError::NonFinite`] if a value is NaN or infinite
/// - [`AnalysisError::DivisionByZero`] if an exact value is zero
///
/// # Example
///
/// ```rust
/// use euler_rs::analysis::analyze_error;
///
/// let metrics = analyze_error(&[2.0, 1.0], &[2.0, 0.9])?;
///
/// assert_eq!(metrics.absolute_error()[0], 0.0);
/// assert!((metrics.max_absolute() - 0.1).abs() < 1e-12);
/// assert!((metrics.max_relative_percent() - 10.0).abs() < 1e-9);
/// # Ok::<(), euler_rs::analysis::AnalysisError>(())
/// ```
pub fn analyze_error(exact: &[f64], approx: &[f64]) -> Result<ErrorMetrics, AnalysisError> {
    // ============================= Validation =============================

    if exact.is_empty() || approx.is_empty() {
        return Err(AnalysisError::Empty);
    }

    if exact.len() != approx.len() {
        return Err(AnalysisError::LengthMismatch {
            exact: exact.len(),
            approx: approx.len(),
        });
    }

    if let Some(index) = exact
        .iter()
        .zip(approx)
        .position(|(e, a)| !e.is_finite() || !a.is_finite())
    {
        return Err(AnalysisError::NonFinite { index });
    }

    if let Some(index) = exact.iter().position(|&e| e == 0.0) {
        return Err(AnalysisError::DivisionByZero { index });
    }

    // ============================= Series =================================

    let exact = DVector::from_column_slice(exact);
    let approx = DVector::from_column_slice(approx);

    let absolute_error = (&exact - &approx).map(f64::abs);
    let relative_error = absolute_error.component_div(&exact.map(f64::abs));

    // ============================= Summaries ==============================

    let max_absolute = absolute_error.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let max_relative = relative_error.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    Ok(ErrorMetrics {
        max_absolute,
        mean_absolute: absolute_error.mean(),
        max_relative_percent: max_relative * 100.0,
        mean_relative_percent: relative_error.mean() * 100.0,
        absolute_error,
        relative_error,
    })
}

// =================================================================================================
// Tests
// =================================================================================================
