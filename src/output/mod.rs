//! Output module for comparison results
//!
//! This module turns a [`ComparisonReport`](crate::analysis::ComparisonReport)
//! into something a person or another program can read:
//! - **Table**: fixed-width console text
//! - **Visualization**: PNG/SVG plots using plotters
//! - **Export**: CSV data export for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── table.rs            ← Console rendering
//! ├── visualization/      ← Plots and graphics
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   └── comparison.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! None of these sub-modules compute anything: every number they show comes
//! from the report.

pub mod table;
pub mod visualization;
pub mod export;

// Re-export commonly used items for convenience
pub use table::{render_convergence, render_problem, render_report};

pub use visualization::{plot_comparison, PlotConfig};

pub use export::{export_report_csv, CsvConfig, CsvExporter, Exporter};
