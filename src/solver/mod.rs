//! Numerical solvers (HOW to solve)
//!
//! This module turns a [`DerivativeFunction`](crate::equation::DerivativeFunction)
//! plus an initial condition into a discrete [`Trajectory`].
//!
//! # Module Organization
//!
//! - **`trajectory`**: [`Trajectory`], the `(t_i, y_i)` sequence of one run
//! - **`methods`**: concrete integrators ([`EulerSolver`])
//! - this file: [`SolverError`] and the parameter checks shared with
//!   [`EquationParameters`](crate::equation::EquationParameters)
//!
//! # Quick Start
//!
//! ```rust
//! use euler_rs::equation::LinearDecay;
//! use euler_rs::solver::integrate;
//!
//! let trajectory = integrate(&LinearDecay::new(0.5), 0.0, 2.0, 1.0, 0.2)?;
//!
//! assert_eq!(trajectory.len(), 6);
//! assert!((trajectory.final_value().unwrap() - 1.18098).abs() < 1e-12);
//! # Ok::<(), euler_rs::solver::SolverError>(())
//! ```
//!
//! # Error Handling
//!
//! Every failure is reported through [`SolverError`] before any step is
//! taken (invalid parameters) or as soon as a step leaves the finite range.
//! No partial trajectory is returned.

// =================================================================================================
// Module Declarations
// =================================================================================================

mod methods;
mod trajectory;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use methods::{integrate, EulerSolver};
pub use trajectory::Trajectory;

use thiserror::Error;

// =================================================================================================
// Errors
// =================================================================================================

/// Errors raised while setting up or running an integration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// A parameter violates the problem invariants
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },

    /// A step produced NaN or infinity
    #[error("non-finite value {value} at step {step}; try reducing the step size")]
    NonFiniteState { step: usize, value: f64 },
}

impl SolverError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        SolverError::InvalidParameter { name, reason: reason.into() }
    }
}

// =================================================================================================
// Helper Functions
// =================================================================================================

/// Largest number of steps a single integration may take
///
/// Each step stores two `f64`, so this caps a trajectory at about 1.6 GB.
pub const MAX_STEPS: usize = 100_000_000;

/// Check an initial value problem before integrating it
///
/// Requires finite inputs, `t_final > t0`, `0 < step <= t_final - t0` and at
/// most [`MAX_STEPS`] steps.
pub(crate) fn validate_parameters(t0: f64, y0: f64, t_final: f64, step: f64) -> Result<(), SolverError> {
    for (name, value) in [("t0", t0), ("y0", y0), ("t_final", t_final), ("step", step)] {
        if !value.is_finite() {
            return Err(SolverError::invalid(name, format!("must be finite, got {}", value)));
        }
    }

    if step <= 0.0 {
        return Err(SolverError::invalid("step", format!("must be positive, got {}", step)));
    }

    if t_final <= t0 {
        return Err(SolverError::invalid(
            "t_final",
            format!("must be greater than t0 ({}), got {}", t0, t_final),
        ));
    }

    if step > t_final - t0 {
        return Err(SolverError::invalid(
            "step",
            format!("must not exceed the interval length {}, got {}", t_final - t0, step),
        ));
    }

    // A subnormal step or a huge interval makes the ratio overflow
    let steps = (t_final - t0) / step;
    if !steps.is_finite() || steps > MAX_STEPS as f64 {
        return Err(SolverError::invalid(
            "step",
            format!("yields {} steps, more than the maximum of {}", steps, MAX_STEPS),
        ));
    }

    Ok(())
}

/// Number of whole steps that fit in `[t0, t_final]`
///
/// Truncates like an integer cast: the last grid point may fall short of
/// `t_final`.
pub(crate) fn step_count(t0: f64, t_final: f64, step: f64) -> usize {
    ((t_final - t0) / step).floor() as usize
}

/// Reject NaN and infinity produced by a step
pub(crate) fn validate_value(value: f64, step: usize) -> Result<(), SolverError> {
    if value.is_finite() {
        Ok(())
    } else {
        log::warn!("integration aborted: value {} at step {}", value, step);
        Err(SolverError::NonFiniteState { step, value })
    }
}

// =================================================================================================
// Tests
// =================================================================================================
