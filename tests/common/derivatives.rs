//! Right-hand sides with known analytical solutions
//!
//! Each one implements `DerivativeFunction` directly so the integrator is
//! tested through the trait, not only through closures.

use euler_rs::equation::DerivativeFunction;

// =================================================================================================
// Exponential Decay: dy/dt = -k*y
// =================================================================================================

/// Analytical solution: y(t) = y₀ * exp(-k*(t - t₀))
pub struct ExponentialDecay {
    pub decay_rate: f64,
}

impl ExponentialDecay {
    pub fn new(decay_rate: f64) -> Self {
        Self { decay_rate }
    }

    pub fn analytical_solution(&self, t0: f64, y0: f64, t: f64) -> f64 {
        y0 * (-self.decay_rate * (t - t0)).exp()
    }
}

impl DerivativeFunction for ExponentialDecay {
    fn evaluate(&self, _t: f64, y: f64) -> f64 {
        -self.decay_rate * y
    }

    fn name(&self) -> &str {
        "Exponential Decay"
    }
}

// =================================================================================================
// Constant Growth: dy/dt = c
// =================================================================================================

/// Analytical solution: y(t) = y₀ + c*(t - t₀); Euler is exact on it
pub struct ConstantGrowth {
    pub rate: f64,
}

impl DerivativeFunction for ConstantGrowth {
    fn evaluate(&self, _t: f64, _y: f64) -> f64 {
        self.rate
    }

    fn name(&self) -> &str {
        "Constant Growth"
    }
}

// =================================================================================================
// Linear Ramp: dy/dt = t
// =================================================================================================

/// Analytical solution: y(t) = y₀ + (t² - t₀²)/2
pub struct LinearRamp;

impl DerivativeFunction for LinearRamp {
    fn evaluate(&self, t: f64, _y: f64) -> f64 {
        t
    }
}
