//! Equation parameters
//!
//! Immutable, validated description of one decay problem: the rate, the
//! initial condition, the interval and the integration step.

use crate::equation::{ExactSolution, LinearDecay};
use crate::solver::{self, SolverError};

/// Parameters of a decay problem solved with a fixed step
///
/// # Invariants
///
/// Checked once by [`EquationParameters::new`]:
/// - every value is finite
/// - `decay_rate > 0`
/// - `t_final > t0`
/// - `0 < step <= t_final - t0`
///
/// Fields are private so a constructed value always satisfies them.
///
/// # Example
///
/// ```rust
/// use euler_rs::equation::EquationParameters;
///
/// let parameters = EquationParameters::new(0.5, 0.0, 2.0, 1.0, 0.2)?;
/// assert_eq!(parameters.step_count(), 5);
///
/// assert!(EquationParameters::new(0.5, 0.0, 2.0, 1.0, 0.0).is_err());
/// # Ok::<(), euler_rs::solver::SolverError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquationParameters {
    decay_rate: f64,
    t0: f64,
    y0: f64,
    t_final: f64,
    step: f64,
}

impl EquationParameters {
    /// Validate and build a parameter set
    pub fn new(decay_rate: f64, t0: f64, y0: f64, t_final: f64, step: f64) -> Result<Self, SolverError> {
        if !decay_rate.is_finite() || decay_rate <= 0.0 {
            return Err(SolverError::invalid("decay_rate", format!("must be positive and finite, got {}", decay_rate)));
        }

        solver::validate_parameters(t0, y0, t_final, step)?;

        Ok(Self { decay_rate, t0, y0, t_final, step })
    }

    /// Same problem with another step size
    pub fn with_step(&self, step: f64) -> Result<Self, SolverError> {
        Self::new(self.decay_rate, self.t0, self.y0, self.t_final, step)
    }

    /// Decay rate k
    pub fn decay_rate(&self) -> f64 {
        self.decay_rate
    }

    /// Initial time
    pub fn t0(&self) -> f64 {
        self.t0
    }

    /// Initial value y(t0)
    pub fn y0(&self) -> f64 {
        self.y0
    }

    /// End of the requested interval
    pub fn t_final(&self) -> f64 {
        self.t_final
    }

    /// Integration step h
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of Euler steps, `floor((t_final - t0) / h)`
    pub fn step_count(&self) -> usize {
        solver::step_count(self.t0, self.t_final, self.step)
    }

    /// Derivative function for this problem
    pub fn derivative(&self) -> LinearDecay {
        LinearDecay::new(self.decay_rate)
    }

    /// Closed-form solution for this problem
    pub fn exact_solution(&self) -> ExactSolution {
        ExactSolution::new(self.t0, self.y0, self.decay_rate)
    }
}

impl Default for EquationParameters {
    /// `dy/dt = -0.5 y`, `y(0) = 2`, `t ∈ [0, 1]`, `h = 0.2`
    fn default() -> Self {
        Self {
            decay_rate: 0.5,
            t0: 0.0,
            y0: 2.0,
            t_final: 1.0,
            step: 0.2,
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
