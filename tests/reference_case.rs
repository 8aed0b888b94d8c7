//! End-to-end tests on the reference case
//!
//! k = 0.5, y(0) = 2, t ∈ [0, 1], h = 0.2: every stage from the integrator to
//! the CSV file is checked against hand-computed values.

use approx::assert_relative_eq;
use tempfile::tempdir;

use euler_rs::analysis::{analyze_error, AnalysisError, ComparisonReport};
use euler_rs::equation::{EquationParameters, ExactSolution};
use euler_rs::output::export::{export_report_csv, CsvConfig, CsvExporter, CsvMetadata, Exporter};
use euler_rs::output::render_report;
use euler_rs::solver::{integrate, SolverError};
use euler_rs::Error;

mod common;
use common::{
    assert_slices_close, reference_parameters, ConstantGrowth, ExponentialDecay, LinearRamp,
    REFERENCE_EULER, REFERENCE_EXACT, REFERENCE_TIMES,
};

const REFERENCE_CSV: &str = "\
Tiempo,y_Euler,y_Exacta,Error_Absoluto,Error_Relativo
0.00000000,2.00000000,2.00000000,0.00000000,0.00000000
0.20000000,1.80000000,1.80967484,0.00967484,0.00534617
0.40000000,1.62000000,1.63746151,0.01746151,0.01066377
0.60000000,1.45800000,1.48163644,0.02363644,0.01595293
0.80000000,1.31220000,1.34064009,0.02844009,0.02121382
1.00000000,1.18098000,1.21306132,0.03208132,0.02644658
";

// =================================================================================================
// Integration
// =================================================================================================

#[test]
fn test_reference_trajectory() {
    let model = ExponentialDecay::new(0.5);
    let trajectory = integrate(&model, 0.0, 2.0, 1.0, 0.2).unwrap();

    assert_slices_close(trajectory.times(), &REFERENCE_TIMES, 1e-12, "times");
    assert_slices_close(trajectory.values(), &REFERENCE_EULER, 1e-12, "euler values");
}

#[test]
fn test_trait_and_closure_agree() {
    let model = ExponentialDecay::new(0.5);
    let closure = |_t: f64, y: f64| -0.5 * y;

    let a = integrate(&model, 0.0, 2.0, 1.0, 0.2).unwrap();
    let b = integrate(&closure, 0.0, 2.0, 1.0, 0.2).unwrap();

    // Same arithmetic, bit-identical
    assert_eq!(a.values(), b.values());
    assert_eq!(a.times(), b.times());
}

#[test]
fn test_constant_growth_is_exact() {
    let model = ConstantGrowth { rate: 3.0 };
    let trajectory = integrate(&model, 1.0, -2.0, 3.0, 0.25).unwrap();

    assert_eq!(trajectory.len(), 9);
    for (t, y) in trajectory.points() {
        assert_relative_eq!(y, -2.0 + 3.0 * (t - 1.0), epsilon = 1e-12);
    }
}

#[test]
fn test_linear_ramp_left_endpoint_sum() {
    // y_n = h · Σ t_i for i < n, so y(1) with h = 0.25 is 0.25·(0 + .25 + .5 + .75)
    let trajectory = integrate(&LinearRamp, 0.0, 0.0, 1.0, 0.25).unwrap();

    assert_relative_eq!(trajectory.final_value().unwrap(), 0.375, epsilon = 1e-12);
}

#[test]
fn test_truncated_grid() {
    let trajectory = integrate(&ExponentialDecay::new(0.5), 0.0, 2.0, 1.0, 0.3).unwrap();

    assert_eq!(trajectory.len(), 4);
    assert_relative_eq!(trajectory.final_time().unwrap(), 0.9, epsilon = 1e-12);
}

#[test]
fn test_invalid_parameters_rejected() {
    let model = ExponentialDecay::new(0.5);

    for (t_final, h, name) in [(1.0, 0.0, "step"), (1.0, -0.1, "step"), (0.0, 0.1, "t_final")] {
        match integrate(&model, 0.0, 2.0, t_final, h) {
            Err(SolverError::InvalidParameter { name: got, .. }) => assert_eq!(got, name),
            other => panic!("expected InvalidParameter({}), got {:?}", name, other),
        }
    }
}

// =================================================================================================
// Exact solution and metrics
// =================================================================================================

#[test]
fn test_exact_solution_on_reference_grid() {
    let exact = ExactSolution::new(0.0, 2.0, 0.5);

    assert_slices_close(&exact.evaluate_all(&REFERENCE_TIMES), &REFERENCE_EXACT, 1e-12, "exact");
    assert_eq!(exact.evaluate_all(&[0.3, 0.7]), vec![exact.evaluate(0.3), exact.evaluate(0.7)]);
}

#[test]
fn test_reference_metrics() {
    let metrics = analyze_error(&REFERENCE_EXACT, &REFERENCE_EULER).unwrap();

    assert_eq!(metrics.absolute_error()[0], 0.0);
    assert!(metrics.absolute_error().windows(2).all(|w| w[1] > w[0]));
    assert_relative_eq!(metrics.max_absolute(), 0.032081319425267, epsilon = 1e-9);
    assert_eq!(metrics.max_absolute_index(), 5);
    assert_relative_eq!(metrics.max_relative_percent(), 2.644658, epsilon = 1e-5);
}

#[test]
fn test_zero_exact_value_is_reported() {
    let result = analyze_error(&[1.0, 0.0], &[1.0, 0.1]);
    assert_eq!(result.unwrap_err(), AnalysisError::DivisionByZero { index: 1 });
}

// =================================================================================================
// Report
// =================================================================================================

#[test]
fn test_report_matches_stages() {
    let report = ComparisonReport::run(&reference_parameters()).unwrap();

    assert_eq!(report.len(), 6);
    assert_slices_close(&report.exact_values, &REFERENCE_EXACT, 1e-12, "report exact");

    let last = report.rows().last().unwrap();
    assert_relative_eq!(last.time, 1.0, epsilon = 1e-12);
    assert_relative_eq!(last.euler, 1.18098, epsilon = 1e-12);
    assert_relative_eq!(last.absolute_error, report.metrics.max_absolute(), epsilon = 1e-15);
}

#[test]
fn test_report_is_deterministic() {
    let a = ComparisonReport::run(&reference_parameters()).unwrap();
    let b = ComparisonReport::run(&reference_parameters()).unwrap();

    assert_eq!(a.trajectory.values(), b.trajectory.values());
    assert_eq!(a.metrics.absolute_error(), b.metrics.absolute_error());
    assert_eq!(render_report(&a), render_report(&b));
}

#[test]
fn test_invalid_parameters_surface_as_crate_error() {
    let err = EquationParameters::new(0.5, 0.0, 2.0, 1.0, 0.0).unwrap_err();
    let err: Error = err.into();

    assert!(matches!(err, Error::Solver(SolverError::InvalidParameter { name: "step", .. })));
}

// =================================================================================================
// CSV
// =================================================================================================

#[test]
fn test_reference_csv_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("resultados_comparacion.csv");

    let report = ComparisonReport::run(&reference_parameters()).unwrap();
    CsvExporter::default().export(&report, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, REFERENCE_CSV);
}

#[test]
fn test_csv_with_metadata_keeps_table() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("with_metadata.csv");

    let report = ComparisonReport::run(&reference_parameters()).unwrap();
    let config = CsvConfig::default().with_metadata(CsvMetadata::from_report(&report));
    export_report_csv(&report, &path, Some(&config)).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let table: String = content
        .lines()
        .filter(|line| !line.starts_with('#'))
        .map(|line| format!("{}\n", line))
        .collect();

    assert!(content.starts_with('#'));
    assert_eq!(table, REFERENCE_CSV);
}

#[test]
fn test_csv_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("out.csv");

    let report = ComparisonReport::run(&reference_parameters()).unwrap();
    assert!(CsvExporter::default().export(&report, &path).is_err());
}
