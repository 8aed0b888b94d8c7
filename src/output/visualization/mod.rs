//! Visualization of comparison reports
//!
//! Uses the `plotters` library to draw a single two-panel figure:
//!
//! - **Top**: exact solution (dense curve) against the Euler points
//! - **Bottom**: absolute and relative error per point
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use euler_rs::output::visualization::{plot_comparison, PlotConfig};
//!
//! let report = ComparisonReport::run(&EquationParameters::default())?;
//!
//! // Default config
//! plot_comparison(&report, "comparacion_euler_analitica.png", None)?;
//!
//! // Or with custom config
//! let config = PlotConfig::default().size(800, 600);
//! plot_comparison(&report, "comparacion.svg", Some(&config))?;
//! ```

pub mod config;
pub mod comparison;

pub use config::PlotConfig;

pub use comparison::plot_comparison;
