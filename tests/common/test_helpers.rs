//! Helper functions for integration tests

use euler_rs::equation::EquationParameters;

/// Time grid of the reference case
pub const REFERENCE_TIMES: [f64; 6] = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0];

/// Euler values of the reference case: 2·0.9ⁱ
pub const REFERENCE_EULER: [f64; 6] = [2.0, 1.8, 1.62, 1.458, 1.3122, 1.18098];

/// Exact values of the reference case: 2·e^(-0.5t)
pub const REFERENCE_EXACT: [f64; 6] = [
    2.0,
    1.809_674_836_071_919_2,
    1.637_461_506_155_963_5,
    1.481_636_441_363_436,
    1.340_640_092_071_279_3,
    1.213_061_319_425_267,
];

/// k = 0.5, t0 = 0, y0 = 2, t_final = 1, h = 0.2
pub fn reference_parameters() -> EquationParameters {
    EquationParameters::new(0.5, 0.0, 2.0, 1.0, 0.2).unwrap()
}

/// Assert element-wise closeness of two slices
pub fn assert_slices_close(actual: &[f64], expected: &[f64], tolerance: f64, message: &str) {
    assert_eq!(actual.len(), expected.len(), "{}: length mismatch", message);

    for (i, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        assert!(
            diff < tolerance,
            "{}: element {} differs by {} (tolerance {})",
            message, i, diff, tolerance
        );
    }
}
