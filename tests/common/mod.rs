//! Common utilities for integration tests

pub mod derivatives;
pub mod test_helpers;

// Re-export commonly used items
pub use derivatives::{ConstantGrowth, ExponentialDecay, LinearRamp};
pub use test_helpers::{
    assert_slices_close,
    reference_parameters,
    REFERENCE_EULER,
    REFERENCE_EXACT,
    REFERENCE_TIMES,
};
