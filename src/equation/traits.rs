//! Derivative function trait
//!
//! This module defines the single capability the integrator needs from an
//! equation: evaluate `dy/dt = g(t, y)` at a point.
//!
//! # Design
//!
//! The integrator is generic over [`DerivativeFunction`], so the call is
//! statically dispatched. Plain closures work too:
//!
//! ```rust
//! use euler_rs::equation::DerivativeFunction;
//!
//! let growth = |_t: f64, _y: f64| 2.0;
//! assert_eq!(growth.evaluate(0.0, 1.0), 2.0);
//! ```

// =================================================================================================
// Derivative Function
// =================================================================================================

/// Right-hand side of a scalar first-order ODE `dy/dt = g(t, y)`
///
/// # Contract
///
/// - **Pure**: no side effects, same output for the same `(t, y)`
/// - **Total**: defined for every finite `(t, y)` the integrator visits
///
/// Euler's convergence guarantee additionally needs `g` to be Lipschitz
/// continuous in `y` near the solution.
pub trait DerivativeFunction {
    /// Evaluate `dy/dt` at time `t` and value `y`
    fn evaluate(&self, t: f64, y: f64) -> f64;

    /// Human-readable equation name, stored in trajectory metadata
    fn name(&self) -> &str {
        "dy/dt = g(t, y)"
    }
}

impl<F> DerivativeFunction for F
where
    F: Fn(f64, f64) -> f64,
{
    fn evaluate(&self, t: f64, y: f64) -> f64 {
        self(t, y)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
