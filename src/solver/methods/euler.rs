//! Forward Euler numerical solver
//!
//! # Mathematical Background
//!
//! The Forward Euler method is the simplest explicit time-stepping scheme
//! for solving ordinary differential equations (ODEs):
//!
//! ```text
//! dy/dt = f(t, y)
//! ```
//!
//! The scheme approximates the solution at time t_{i+1} = t_i + h using:
//!
//! ```text
//! y_{i+1} = y_i + h * f(t_i, y_i)
//! ```
//!
//! # Characteristics
//!
//! - **Order**: First-order accurate (global error ~ O(h))
//! - **Local truncation error**: O(h²) per step
//! - **Stability**: Conditionally stable; for dy/dt = -k*y it needs |1 - k*h| ≤ 1
//! - **Complexity**: 1 function evaluation per step
//!
//! # Grid
//!
//! The number of steps is `n = floor((t_final - t0) / h)`. When the interval
//! is not a multiple of `h` the last point is `t0 + n*h`, short of `t_final`.
//! The grid is never stretched to land on `t_final`.
//!
//! Time points are `t_i = t0 + i*h`, computed from the index. Accumulating
//! `t_{i+1} = t_i + h` gives the same grid up to rounding: on long grids the
//! two can differ in the last ulp of the time column, never in the scheme.

use log::debug;

use crate::equation::DerivativeFunction;
use crate::solver::{self, SolverError, Trajectory};

// =================================================================================================
// Forward Euler Solver
// =================================================================================================

/// Forward Euler time-stepping solver
///
/// # Algorithm
///
/// 1. Validate `h > 0`, `t_final > t0`, `h <= t_final - t0`
/// 2. Start with `(t0, y0)`
/// 3. For each step i = 0, 1, ..., n-1:
///    - Compute slope: s = f(t_i, y_i)
///    - Update value: y_{i+1} = y_i + h * s
///    - Store the point
/// 4. Return the trajectory
///
/// # Example
///
/// ```rust
/// use euler_rs::equation::LinearDecay;
/// use euler_rs::solver::EulerSolver;
///
/// let solver = EulerSolver::new();
/// let trajectory = solver.integrate(&LinearDecay::new(0.5), 0.0, 2.0, 1.0, 0.2)?;
///
/// assert_eq!(trajectory.times().len(), 6);
/// assert_eq!(solver.name(), "Forward Euler");
/// # Ok::<(), euler_rs::solver::SolverError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerSolver;

impl EulerSolver {
    /// Create a new Forward Euler solver
    pub fn new() -> Self {
        Self
    }

    pub fn name(&self) -> &'static str {
        "Forward Euler"
    }

    /// Integrate `dy/dt = f(t, y)` from `(t0, y0)` up to `t_final` with step `h`
    ///
    /// # Errors
    ///
    /// - [`SolverError::InvalidParameter`] when the step or interval is invalid
    /// - [`SolverError::NonFiniteState`] when a step overflows or yields NaN
    pub fn integrate<F>(&self, f: &F, t0: f64, y0: f64, t_final: f64, h: f64) -> Result<Trajectory, SolverError>
    where
        F: DerivativeFunction + ?Sized,
    {
        // ====== Step 1: Validation ======

        solver::validate_parameters(t0, y0, t_final, h)?;

        // ====== Step 2: Setup ======

        let time_steps = solver::step_count(t0, t_final, h);

        let points = time_steps
            .checked_add(1)
            .ok_or_else(|| SolverError::invalid("step", format!("{} steps overflow the grid", time_steps)))?;

        let mut times = Vec::with_capacity(points);
        let mut values = Vec::with_capacity(points);

        times.push(t0);
        values.push(y0);

        debug!(
            "{}: integrating {} from t0={} to t_final={} with h={} ({} steps)",
            self.name(),
            f.name(),
            t0,
            t_final,
            h,
            time_steps
        );

        // ====== Step 3: Time Integration ======

        let mut t = t0;
        let mut y = y0;

        for step in 0..time_steps {
            y += h * f.evaluate(t, y);

            // Computed from the index rather than accumulated, so rounding
            // does not drift over many steps
            t = t0 + (step as f64 + 1.0) * h;

            solver::validate_value(y, step + 1)?;

            times.push(t);
            values.push(y);
        }

        // ====== Step 4: Build Result ======

        let mut trajectory = Trajectory::new(times, values);

        trajectory.add_metadata("solver", self.name());
        trajectory.add_metadata("equation", f.name());
        trajectory.add_metadata("time steps", &time_steps.to_string());
        trajectory.add_metadata("h", &h.to_string());
        trajectory.add_metadata("final time", &t.to_string());

        Ok(trajectory)
    }
}

/// Integrate with the Forward Euler method
///
/// Shorthand for [`EulerSolver::integrate`].
pub fn integrate<F>(f: &F, t0: f64, y0: f64, t_final: f64, h: f64) -> Result<Trajectory, SolverError>
where
    F: DerivativeFunction + ?Sized,
{
    EulerSolver::new().integrate(f, t0, y0, t_final, h)
}

// =================================================================================================
// Tests
// =================================================================================================
