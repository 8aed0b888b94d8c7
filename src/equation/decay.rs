//! Linear decay equation and its closed-form solution
//!
//! # Mathematical Background
//!
//! ```text
//! dy/dt = -k * y,    y(t0) = y0
//! ```
//!
//! Separating variables gives `dy / y = -k dt`, so `ln|y| = -k t + C` and,
//! once the initial condition fixes the constant:
//!
//! ```text
//! y(t) = y0 * exp(-k * (t - t0))
//! ```
//!
//! The same law describes radioactive decay, Newtonian cooling towards a zero
//! ambient temperature, capacitor discharge and first-order drug elimination.

use crate::equation::DerivativeFunction;

// =================================================================================================
// Linear Decay: dy/dt = -k*y
// =================================================================================================

/// Derivative of the linear decay equation `dy/dt = -k * y`
///
/// # Example
///
/// ```rust
/// use euler_rs::equation::{DerivativeFunction, LinearDecay};
///
/// let decay = LinearDecay::new(0.5);
/// assert_eq!(decay.evaluate(0.0, 2.0), -1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearDecay {
    /// k in dy/dt = -k*y
    pub decay_rate: f64,
}

impl LinearDecay {
    /// Create a decay derivative with rate `k`
    pub fn new(decay_rate: f64) -> Self {
        Self { decay_rate }
    }
}

impl DerivativeFunction for LinearDecay {
    fn evaluate(&self, _t: f64, y: f64) -> f64 {
        -self.decay_rate * y
    }

    fn name(&self) -> &str {
        "Linear Decay"
    }
}

// =================================================================================================
// Exact Solution
// =================================================================================================

/// Closed-form solution of the linear decay equation with its initial
/// condition baked in
///
/// Evaluates at arbitrary times, not only on an integration grid.
///
/// # Example
///
/// ```rust
/// use euler_rs::equation::ExactSolution;
///
/// let exact = ExactSolution::new(0.0, 2.0, 0.5);
/// assert_eq!(exact.evaluate(0.0), 2.0);
///
/// let values = exact.evaluate_all(&[0.0, 1.0]);
/// assert_eq!(values[1], exact.evaluate(1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExactSolution {
    /// Initial time t0
    pub t0: f64,

    /// Initial value y(t0)
    pub y0: f64,

    /// Decay rate k
    pub decay_rate: f64,
}

impl ExactSolution {
    /// Create the exact solution for `y(t0) = y0` and rate `k`
    pub fn new(t0: f64, y0: f64, decay_rate: f64) -> Self {
        Self { t0, y0, decay_rate }
    }

    /// Exact value at time `t`
    pub fn evaluate(&self, t: f64) -> f64 {
        self.y0 * (-self.decay_rate * (t - self.t0)).exp()
    }

    /// Exact values at each time, in order
    ///
    /// The input slice is left untouched.
    pub fn evaluate_all(&self, times: &[f64]) -> Vec<f64> {
        times.iter().map(|&t| self.evaluate(t)).collect()
    }
}

// =================================================================================================
// Dense Grid
// =================================================================================================

/// Evenly spaced grid over `[start, end]`, both ends included
///
/// Used for the smooth reference curve, independently of the integration
/// step. Returns `[start]` when `points == 1` and nothing when `points == 0`.
///
/// # Example
///
/// ```rust
/// use euler_rs::equation::dense_grid;
///
/// let grid = dense_grid(0.0, 1.0, 5);
/// assert_eq!(grid, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn dense_grid(start: f64, end: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let spacing = (end - start) / (points - 1) as f64;

            // Last point pinned to `end` so rounding never leaves it short
            (0..points)
                .map(|i| if i == points - 1 { end } else { start + i as f64 * spacing })
                .collect()
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_decay_derivative() {
        let decay = LinearDecay::new(0.5);

        assert_eq!(decay.evaluate(0.0, 2.0), -1.0);
        // Independent of t
        assert_eq!(decay.evaluate(100.0, 2.0), -1.0);
        assert_eq!(decay.evaluate(0.0, 0.0), 0.0);
        assert_eq!(decay.name(), "Linear Decay");
    }

    #[test]
    fn test_exact_solution_initial_condition() {
        let exact = ExactSolution::new(0.0, 2.0, 0.5);
        assert_eq!(exact.evaluate(0.0), 2.0);
    }

    #[test]
    fn test_exact_solution_reference_values() {
        let exact = ExactSolution::new(0.0, 2.0, 0.5);

        assert_relative_eq!(exact.evaluate(0.2), 1.809_674_836_071_919_6, epsilon = 1e-12);
        assert_relative_eq!(exact.evaluate(0.4), 1.637_461_506_155_963_6, epsilon = 1e-12);
        assert_relative_eq!(exact.evaluate(1.0), 1.213_061_319_425_267, epsilon = 1e-12);
    }

    #[test]
    fn test_exact_solution_shifted_origin() {
        // y(t0) = y0 must hold for any t0
        let exact = ExactSolution::new(3.0, 7.0, 1.5);
        assert_eq!(exact.evaluate(3.0), 7.0);
        assert_relative_eq!(exact.evaluate(4.0), 7.0 * (-1.5_f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_evaluate_all_is_element_wise() {
        let exact = ExactSolution::new(0.0, 2.0, 0.5);
        let times = vec![0.7, 0.1, 0.4];

        let values = exact.evaluate_all(&times);

        assert_eq!(values, vec![exact.evaluate(0.7), exact.evaluate(0.1), exact.evaluate(0.4)]);
        assert_eq!(times, vec![0.7, 0.1, 0.4]);

        // Same input twice, same output
        assert_eq!(exact.evaluate_all(&times), values);
    }

    #[test]
    fn test_evaluate_all_empty() {
        let exact = ExactSolution::new(0.0, 2.0, 0.5);
        assert!(exact.evaluate_all(&[]).is_empty());
    }

    #[test]
    fn test_dense_grid() {
        let grid = dense_grid(0.0, 1.0, 200);

        assert_eq!(grid.len(), 200);
        assert_eq!(grid[0], 0.0);
        assert_eq!(*grid.last().unwrap(), 1.0);

        for pair in grid.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_dense_grid_degenerate_sizes() {
        assert!(dense_grid(0.0, 1.0, 0).is_empty());
        assert_eq!(dense_grid(2.0, 5.0, 1), vec![2.0]);
        assert_eq!(dense_grid(2.0, 5.0, 2), vec![2.0, 5.0]);
    }
}
