//! Integration trajectory
//!
//! The output of one integration run: ordered time points, the matching
//! approximate values, and a few metadata entries describing the run.

use std::collections::HashMap;

/// Discrete solution `(t_i, y_i)`, `i = 0..=n`
///
/// Built once by an integrator and read-only afterwards. `times` and
/// `values` always have the same length.
///
/// # Example
///
/// ```rust
/// use euler_rs::solver::{EulerSolver, Trajectory};
/// use euler_rs::equation::LinearDecay;
///
/// let trajectory: Trajectory = EulerSolver::new()
///     .integrate(&LinearDecay::new(0.5), 0.0, 2.0, 1.0, 0.2)?;
///
/// for (t, y) in trajectory.points() {
///     println!("{:.2} {:.6}", t, y);
/// }
/// # Ok::<(), euler_rs::solver::SolverError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    times: Vec<f64>,
    values: Vec<f64>,

    /// Run description (solver, step, step count, ...)
    pub metadata: HashMap<String, String>,
}

impl Trajectory {
    /// Build a trajectory from matching time and value sequences
    ///
    /// Crate-internal: only integrators create trajectories.
    pub(crate) fn new(times: Vec<f64>, values: Vec<f64>) -> Self {
        debug_assert_eq!(times.len(), values.len());

        Self {
            times,
            values,
            metadata: HashMap::new(),
        }
    }

    /// Time points t_i
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Approximate values y_i
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate over `(t_i, y_i)` pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.values.iter().copied())
    }

    /// Number of points (steps + 1)
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Last time point, `t0 + n*h`
    pub fn final_time(&self) -> Option<f64> {
        self.times.last().copied()
    }

    /// Last approximate value
    pub fn final_value(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Record a metadata entry
    pub(crate) fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Split into owned `(times, values)`
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.times, self.values)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trajectory_accessors() {
        let trajectory = Trajectory::new(vec![0.0, 0.5, 1.0], vec![3.0, 2.0, 1.0]);

        assert_eq!(trajectory.len(), 3);
        assert!(!trajectory.is_empty());
        assert_eq!(trajectory.final_time(), Some(1.0));
        assert_eq!(trajectory.final_value(), Some(1.0));
        assert_eq!(trajectory.points().nth(1), Some((0.5, 2.0)));
    }

    #[test]
    fn test_trajectory_empty() {
        let trajectory = Trajectory::new(Vec::new(), Vec::new());

        assert!(trajectory.is_empty());
        assert_eq!(trajectory.final_time(), None);
        assert_eq!(trajectory.final_value(), None);
    }

    #[test]
    fn test_trajectory_metadata_and_parts() {
        let mut trajectory = Trajectory::new(vec![0.0, 1.0], vec![1.0, 0.5]);
        trajectory.add_metadata("solver", "Forward Euler");

        assert_eq!(trajectory.metadata.get("solver"), Some(&"Forward Euler".to_string()));

        let (times, values) = trajectory.into_parts();
        assert_eq!(times, vec![0.0, 1.0]);
        assert_eq!(values, vec![1.0, 0.5]);
    }
}
