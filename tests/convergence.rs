//! Convergence tests for the Euler integrator
//!
//! Forward Euler is first order: halving h should roughly halve the error.

use euler_rs::analysis::ConvergenceStudy;
use euler_rs::equation::EquationParameters;
use euler_rs::solver::integrate;

mod common;
use common::{reference_parameters, ExponentialDecay};

#[test]
fn test_euler_first_order_convergence() {
    // When h → h/2, error should → error/2

    let model = ExponentialDecay::new(0.3);
    let total_time = 10.0;

    let steps_list = vec![100, 200, 400, 800];
    let mut errors = Vec::new();

    for &steps in &steps_list {
        let h = total_time / steps as f64;
        let trajectory = integrate(&model, 0.0, 1.0, total_time, h).unwrap();

        let t = trajectory.final_time().unwrap();
        let error = (trajectory.final_value().unwrap() - model.analytical_solution(0.0, 1.0, t)).abs();
        errors.push(error);
    }

    for i in 0..errors.len() - 1 {
        let ratio = errors[i] / errors[i + 1];
        println!("Euler convergence ratio {}->{}: {}", i, i + 1, ratio);

        assert!(
            ratio > 1.8 && ratio < 2.2,
            "Convergence ratio {} not first-order",
            ratio
        );
    }
}

#[test]
fn test_study_on_faster_decay() {
    // k = 2 on [0, 2]: max error sits mid-interval, not at t_final
    let parameters = EquationParameters::new(2.0, 0.0, 1.0, 2.0, 0.1).unwrap();
    let study = ConvergenceStudy::run(&parameters, 2).unwrap();

    assert_eq!(
        study.levels.iter().map(|l| l.step_count).collect::<Vec<_>>(),
        vec![20, 40, 80]
    );

    for level in &study.levels[1..] {
        let ratio = level.ratio.unwrap();
        assert!(ratio > 1.5 && ratio < 2.5, "ratio {} at h = {}", ratio, level.step);
    }
}

#[test]
fn test_errors_decrease_monotonically() {
    let study = ConvergenceStudy::run(&reference_parameters(), 4).unwrap();

    assert!(study
        .levels
        .windows(2)
        .all(|w| w[1].max_absolute_error < w[0].max_absolute_error));
}
